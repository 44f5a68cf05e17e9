#![doc(test(attr(deny(warnings))))]

//! Finance Profiles keeps named profiles of income and expense transactions,
//! persisted as a single JSON document in a key-value store, and projects
//! them into display-ready views for a host UI.

pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod errors;
pub mod storage;
pub mod utils;

pub use crate::core::{
    ports::{ConfirmationGate, Notice, NoticeLevel, Notifier},
    profile_store::ProfileStore,
    tracker::Tracker,
    view::{render, BalanceSign, TrackerView, ViewOptions},
};
pub use domain::{Profiles, Transaction, TransactionId, TransactionKind};
pub use errors::{TrackerError, ValidationError};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Finance Profiles tracing initialized.");
    });
}
