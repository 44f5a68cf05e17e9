//! Pure projection of tracker state into display-ready strings.
//!
//! Hosts call [`render`] after every mutation and draw the result however they
//! like; nothing here knows about terminals or markup.

use crate::config::Config;
use crate::core::profile_store::ProfileStore;
use crate::core::services::SummaryService;
use crate::domain::{Transaction, TransactionId, TransactionKind};

pub use crate::core::services::BalanceSign;

pub const PROFILE_PLACEHOLDER: &str = "Select a profile";
pub const NO_PROFILE_MESSAGE: &str = "Please select a profile first.";
pub const NO_TRANSACTIONS_MESSAGE: &str = "No transactions yet. Add your first transaction above!";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewOptions {
    pub currency_symbol: String,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            currency_symbol: "$".into(),
        }
    }
}

impl From<&Config> for ViewOptions {
    fn from(config: &Config) -> Self {
        Self {
            currency_symbol: config.currency_symbol.clone(),
        }
    }
}

/// One entry of the profile picker. The leading placeholder has an empty value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileOption {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TransactionRow {
    pub id: TransactionId,
    pub description: String,
    pub date: String,
    pub kind: TransactionKind,
    /// Amount with its direction sign, e.g. `+$1000.00` or `-$4.50`.
    pub amount: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProfileView {
    pub name: String,
    pub header: String,
    pub balance: String,
    pub balance_sign: BalanceSign,
    pub total_income: String,
    pub total_expense: String,
    pub transaction_count: usize,
    pub rows: Vec<TransactionRow>,
    pub empty_message: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrackerView {
    pub profile_options: Vec<ProfileOption>,
    pub active: Option<ProfileView>,
    pub can_delete_profile: bool,
    /// Shown in place of the profile panel when nothing is selected.
    pub message: Option<&'static str>,
}

/// Formats `amount` with exactly two fraction digits after `symbol`.
///
/// The sign sits after the symbol (`$-4.50`), matching how balances have
/// always been shown.
pub fn format_money(amount: f64, symbol: &str) -> String {
    let amount = if amount == 0.0 { 0.0 } else { amount };
    format!("{symbol}{amount:.2}")
}

pub fn render(store: &ProfileStore, options: &ViewOptions) -> TrackerView {
    let active_name = store.active_profile();

    let mut profile_options = vec![ProfileOption {
        value: String::new(),
        label: PROFILE_PLACEHOLDER.to_string(),
        selected: active_name.is_none(),
    }];
    profile_options.extend(store.profiles().names().map(|name| ProfileOption {
        value: name.to_string(),
        label: name.to_string(),
        selected: active_name == Some(name),
    }));

    let active = active_name.and_then(|name| {
        store
            .active_transactions()
            .map(|txns| profile_view(name, txns, options))
    });

    TrackerView {
        profile_options,
        can_delete_profile: active.is_some(),
        message: active.is_none().then_some(NO_PROFILE_MESSAGE),
        active,
    }
}

fn profile_view(name: &str, transactions: &[Transaction], options: &ViewOptions) -> ProfileView {
    let symbol = options.currency_symbol.as_str();
    let totals = SummaryService::summarize(transactions);
    let rows: Vec<TransactionRow> = transactions
        .iter()
        .map(|txn| TransactionRow {
            id: txn.id,
            description: txn.description.clone(),
            date: txn.date.clone(),
            kind: txn.kind,
            amount: format!("{}{}", txn.kind.sign(), format_money(txn.amount, symbol)),
        })
        .collect();

    ProfileView {
        name: name.to_string(),
        header: format!("Current Profile: {name}"),
        balance: format_money(totals.balance, symbol),
        balance_sign: totals.sign(),
        total_income: format_money(totals.income, symbol),
        total_expense: format_money(totals.expense, symbol),
        transaction_count: totals.count,
        empty_message: rows.is_empty().then_some(NO_TRANSACTIONS_MESSAGE),
        rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    #[test]
    fn money_always_has_two_fraction_digits() {
        assert_eq!(format_money(4.5, "$"), "$4.50");
        assert_eq!(format_money(-4.5, "$"), "$-4.50");
        assert_eq!(format_money(995.5, "$"), "$995.50");
        assert_eq!(format_money(0.0, "€"), "€0.00");
        assert_eq!(format_money(-0.0, "$"), "$0.00");
        assert_eq!(format_money(1234.567, "$"), "$1234.57");
    }

    #[test]
    fn no_active_profile_shows_prompt_only() {
        let storage = MemoryStorage::with_document("k", r#"{"Work":[],"Home":[]}"#);
        let store = ProfileStore::load(Box::new(storage), "k");
        let view = render(&store, &ViewOptions::default());

        assert!(view.active.is_none());
        assert!(!view.can_delete_profile);
        assert_eq!(view.message, Some(NO_PROFILE_MESSAGE));
        let labels: Vec<_> = view.profile_options.iter().map(|o| o.label.as_str()).collect();
        assert_eq!(labels, vec![PROFILE_PLACEHOLDER, "Home", "Work"]);
        assert!(view.profile_options[0].selected);
        assert_eq!(view.profile_options[0].value, "");
    }

    #[test]
    fn active_profile_renders_totals_and_rows() {
        let storage = MemoryStorage::with_document(
            "k",
            r#"{"Personal":[
                {"id":2,"description":"Coffee","amount":4.5,"type":"expense","date":"1/6/2025"},
                {"id":1,"description":"Salary","amount":1000,"type":"income","date":"1/5/2025"}
            ]}"#,
        );
        let mut store = ProfileStore::load(Box::new(storage), "k");
        store.select("Personal");
        let view = render(&store, &ViewOptions::default());

        let profile = view.active.expect("active profile view");
        assert_eq!(profile.header, "Current Profile: Personal");
        assert_eq!(profile.balance, "$995.50");
        assert_eq!(profile.balance_sign, BalanceSign::NonNegative);
        assert_eq!(profile.total_income, "$1000.00");
        assert_eq!(profile.total_expense, "$4.50");
        assert_eq!(profile.transaction_count, 2);
        assert_eq!(profile.empty_message, None);
        assert_eq!(profile.rows[0].amount, "-$4.50");
        assert_eq!(profile.rows[1].amount, "+$1000.00");
        assert!(view.can_delete_profile);
        assert!(view.profile_options[1].selected);
    }

    #[test]
    fn empty_profile_shows_empty_message() {
        let storage = MemoryStorage::with_document("k", r#"{"Fresh":[]}"#);
        let mut store = ProfileStore::load(Box::new(storage), "k");
        store.select("Fresh");
        let profile = render(&store, &ViewOptions::default()).active.unwrap();
        assert_eq!(profile.empty_message, Some(NO_TRANSACTIONS_MESSAGE));
        assert_eq!(profile.balance, "$0.00");
    }
}
