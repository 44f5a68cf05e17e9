//! Interactive terminal host: reads commands, drives a [`crate::Tracker`], and
//! draws its view.

pub mod dispatch;
pub mod io;
pub mod output;
mod shell;

pub use shell::run_cli;

use crate::errors::TrackerError;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Tracker(#[from] TrackerError),
    #[error("Readline error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
