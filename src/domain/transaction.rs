//! Domain models for income and expense transactions.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Identifier assigned to a transaction when it is recorded.
///
/// Ids are millisecond timestamps, bumped forward when needed so they stay
/// unique across a store. They serialize as plain JSON numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(pub u64);

impl TransactionId {
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TransactionId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(TransactionId)
    }
}

/// Direction of money flow for a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    pub const ALL: [TransactionKind; 2] = [TransactionKind::Income, TransactionKind::Expense];

    pub fn as_str(self) -> &'static str {
        match self {
            TransactionKind::Income => "income",
            TransactionKind::Expense => "expense",
        }
    }

    /// Sign prefix used when a transaction amount is shown on its own.
    pub fn sign(self) -> char {
        match self {
            TransactionKind::Income => '+',
            TransactionKind::Expense => '-',
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownKind(pub String);

impl fmt::Display for UnknownKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown transaction type `{}`", self.0)
    }
}

impl std::error::Error for UnknownKind {}

impl FromStr for TransactionKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "income" => Ok(TransactionKind::Income),
            "expense" => Ok(TransactionKind::Expense),
            other => Err(UnknownKind(other.to_string())),
        }
    }
}

/// A single income or expense record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: TransactionId,
    pub description: String,
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    /// Creation date, kept as the display string recorded at insertion.
    pub date: String,
}

impl Transaction {
    pub fn new(
        id: TransactionId,
        description: impl Into<String>,
        amount: f64,
        kind: TransactionKind,
        date: impl Into<String>,
    ) -> Self {
        Self {
            id,
            description: description.into(),
            amount,
            kind,
            date: date.into(),
        }
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }

    /// Amount with income positive and expense negative.
    pub fn signed_amount(&self) -> f64 {
        match self.kind {
            TransactionKind::Income => self.amount,
            TransactionKind::Expense => -self.amount,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_parses_trimmed_lowercase_names_only() {
        assert_eq!(" income ".parse::<TransactionKind>(), Ok(TransactionKind::Income));
        assert_eq!("expense".parse::<TransactionKind>(), Ok(TransactionKind::Expense));
        assert!("Income".parse::<TransactionKind>().is_err());
        assert!("".parse::<TransactionKind>().is_err());
    }

    #[test]
    fn transaction_serializes_with_type_key_and_numeric_id() {
        let txn = Transaction::new(
            TransactionId(1_700_000_000_000),
            "Coffee",
            4.5,
            TransactionKind::Expense,
            "1/5/2025",
        );
        let value = serde_json::to_value(&txn).unwrap();
        assert_eq!(value["id"], serde_json::json!(1_700_000_000_000u64));
        assert_eq!(value["type"], "expense");
        assert_eq!(value["amount"], 4.5);
        assert_eq!(value["date"], "1/5/2025");
        assert!(value.get("kind").is_none());
    }

    #[test]
    fn signed_amount_follows_kind() {
        let income = Transaction::new(TransactionId(1), "Pay", 10.0, TransactionKind::Income, "");
        let expense = Transaction::new(TransactionId(2), "Rent", 7.0, TransactionKind::Expense, "");
        assert_eq!(income.signed_amount(), 10.0);
        assert_eq!(expense.signed_amount(), -7.0);
        assert!(income.is_income());
    }
}
