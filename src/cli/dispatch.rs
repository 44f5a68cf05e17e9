use strsim::levenshtein;

use crate::cli::io::{CliMode, TerminalGate, TerminalNotifier};
use crate::cli::output;
use crate::cli::CliError;
use crate::core::{profile_store::TransactionRemoval, tracker::Tracker};
use crate::domain::TransactionId;
use crate::errors::TrackerError;

const MAX_SUGGESTION_DISTANCE: usize = 2;

/// Command names with their usage lines, in help order.
pub const COMMANDS: &[(&str, &str)] = &[
    ("profiles", "profiles                              list profiles"),
    ("new-profile", "new-profile <name>                    create a profile and select it"),
    ("use", "use [name]                            select a profile (blank clears)"),
    ("delete-profile", "delete-profile                        delete the active profile"),
    ("add", "add <description> <amount> <income|expense>"),
    ("delete", "delete <id>                           delete a transaction"),
    ("show", "show                                  show the active profile"),
    ("help", "help                                  list commands"),
    ("exit", "exit                                  leave the shell"),
    ("quit", "quit                                  leave the shell"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Exit,
}

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("{0}")]
    InvalidArguments(String),
    #[error("Unknown command `{0}`")]
    UnknownCommand(String, Option<&'static str>),
    #[error(transparent)]
    Tracker(#[from] TrackerError),
}

pub struct ShellContext {
    pub mode: CliMode,
    pub running: bool,
    tracker: Tracker<TerminalGate, TerminalNotifier>,
}

impl ShellContext {
    pub fn new(mode: CliMode, tracker: Tracker<TerminalGate, TerminalNotifier>) -> Self {
        Self {
            mode,
            running: true,
            tracker,
        }
    }

    pub fn command_names(&self) -> Vec<&'static str> {
        COMMANDS.iter().map(|(name, _)| *name).collect()
    }

    pub fn prompt(&self) -> String {
        format!("finance[{}]> ", self.tracker.active_profile().unwrap_or("-"))
    }

    pub fn dispatch(&mut self, command: &str, args: &[&str]) -> Result<LoopControl, CommandError> {
        let arg = |index: usize| args.get(index).copied().unwrap_or("");
        match command {
            "profiles" => output::print_profiles(&self.tracker.view()),
            "new-profile" => {
                self.tracker.create_profile(&args.join(" "))?;
                self.show();
            }
            "use" => {
                let name = args.join(" ");
                self.tracker.select_profile(&name);
                if !name.trim().is_empty() && self.tracker.active_profile().is_none() {
                    output::warning(format!("No profile named \"{}\"", name.trim()));
                }
                self.show();
            }
            "delete-profile" => {
                if self.tracker.active_profile().is_none() {
                    output::warning("No profile selected.");
                } else if self.tracker.delete_active_profile()? {
                    self.show();
                }
            }
            "add" => {
                if args.len() > 3 {
                    return Err(CommandError::InvalidArguments(
                        "Usage: add <description> <amount> <income|expense> (quote multi-word descriptions)".into(),
                    ));
                }
                self.tracker.add_transaction(arg(0), arg(1), arg(2))?;
                self.show();
            }
            "delete" => {
                let id = arg(0).parse::<TransactionId>().map_err(|_| {
                    CommandError::InvalidArguments(format!("Invalid transaction id `{}`", arg(0)))
                })?;
                match self.tracker.delete_transaction(id)? {
                    TransactionRemoval::NoActiveProfile => output::warning("No profile selected."),
                    TransactionRemoval::NotFound => {
                        output::warning(format!("No transaction with id {id}"))
                    }
                    TransactionRemoval::Declined => {}
                    TransactionRemoval::Removed(_) => self.show(),
                }
            }
            "show" => self.show(),
            "help" => print_help(),
            "exit" | "quit" => return Ok(LoopControl::Exit),
            other => {
                return Err(CommandError::UnknownCommand(
                    other.to_string(),
                    suggest(other),
                ))
            }
        }
        Ok(LoopControl::Continue)
    }

    pub fn report_error(&self, err: CommandError) -> Result<(), CliError> {
        match err {
            // the tracker already alerted these through its notifier
            CommandError::Tracker(TrackerError::Validation(_)) => Ok(()),
            CommandError::Tracker(TrackerError::Storage(message)) if self.mode == CliMode::Script => {
                Err(CliError::Tracker(TrackerError::Storage(message)))
            }
            CommandError::UnknownCommand(ref name, suggestion) => {
                output::error(format!("Unknown command `{name}`"));
                match suggestion {
                    Some(candidate) => output::info(format!("Did you mean `{candidate}`?")),
                    None => output::info("Use `help` to list commands."),
                }
                Ok(())
            }
            other => {
                output::error(other.to_string());
                Ok(())
            }
        }
    }

    fn show(&self) {
        output::print_view(&self.tracker.view());
    }
}

fn print_help() {
    output::section("Commands");
    for (_, usage) in COMMANDS {
        println!("  {usage}");
    }
}

fn suggest(input: &str) -> Option<&'static str> {
    COMMANDS
        .iter()
        .map(|(name, _)| (*name, levenshtein(input, name)))
        .filter(|(_, distance)| *distance <= MAX_SUGGESTION_DISTANCE)
        .min_by_key(|(_, distance)| *distance)
        .map(|(name, _)| name)
}
