use colored::Colorize;
use std::fmt;

use crate::core::view::{BalanceSign, TrackerView};

/// Message categories used by the CLI output helpers.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Success,
    Warning,
    Error,
    Section,
}

fn build_label(kind: MessageKind) -> (&'static str, &'static str) {
    match kind {
        MessageKind::Info => ("INFO", "[i]"),
        MessageKind::Success => ("SUCCESS", "[✓]"),
        MessageKind::Warning => ("WARNING", "[!]"),
        MessageKind::Error => ("ERROR", "[x]"),
        MessageKind::Section => ("", ""),
    }
}

fn apply_style(kind: MessageKind, message: impl fmt::Display) -> String {
    let text = message.to_string();
    let formatted = match kind {
        MessageKind::Section => format!("=== {} ===", text.trim()),
        _ => {
            let (label, icon) = build_label(kind);
            format!("{label}: {icon} {text}")
        }
    };

    match kind {
        MessageKind::Success => formatted.bright_green().to_string(),
        MessageKind::Warning => formatted.bright_yellow().to_string(),
        MessageKind::Error => formatted.bright_red().to_string(),
        MessageKind::Section => formatted.bold().to_string(),
        MessageKind::Info => formatted,
    }
}

pub fn print(kind: MessageKind, message: impl fmt::Display) {
    let formatted = apply_style(kind, message);
    match kind {
        MessageKind::Section => println!("\n{}", formatted),
        _ => println!("{}", formatted),
    }
}

pub fn info(message: impl fmt::Display) {
    print(MessageKind::Info, message);
}

pub fn success(message: impl fmt::Display) {
    print(MessageKind::Success, message);
}

pub fn warning(message: impl fmt::Display) {
    print(MessageKind::Warning, message);
}

pub fn error(message: impl fmt::Display) {
    print(MessageKind::Error, message);
}

pub fn section(title: impl fmt::Display) {
    print(MessageKind::Section, title);
}

/// Draws a rendered tracker view as plain terminal lines.
pub fn print_view(view: &TrackerView) {
    let Some(profile) = &view.active else {
        if let Some(message) = view.message {
            info(message);
        }
        return;
    };

    section(&profile.header);
    let balance = match profile.balance_sign {
        BalanceSign::Negative => profile.balance.bright_red().to_string(),
        BalanceSign::NonNegative => profile.balance.bright_green().to_string(),
    };
    println!("Balance:       {balance}");
    println!("Income:        {}", profile.total_income);
    println!("Expenses:      {}", profile.total_expense);
    println!("Transactions:  {}", profile.transaction_count);

    if let Some(message) = profile.empty_message {
        info(message);
        return;
    }
    for row in &profile.rows {
        println!(
            "  {:<15} {:<10} {:<24} {:>12}",
            row.id, row.date, row.description, row.amount
        );
    }
}

/// Lists profile names, marking the active one.
pub fn print_profiles(view: &TrackerView) {
    let mut any = false;
    for option in view.profile_options.iter().filter(|o| !o.value.is_empty()) {
        any = true;
        let marker = if option.selected { "*" } else { " " };
        println!("{marker} {}", option.label);
    }
    if !any {
        info("No profiles yet. Create one with `new-profile <name>`.");
    }
}
