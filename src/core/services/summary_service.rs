use crate::domain::{Transaction, TransactionKind};

/// Whether a balance should be flagged as negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BalanceSign {
    Negative,
    NonNegative,
}

impl BalanceSign {
    pub fn of(balance: f64) -> Self {
        if balance < 0.0 {
            BalanceSign::Negative
        } else {
            BalanceSign::NonNegative
        }
    }

    pub fn is_negative(self) -> bool {
        self == BalanceSign::Negative
    }
}

/// Aggregates over one profile's transactions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Totals {
    pub balance: f64,
    pub income: f64,
    pub expense: f64,
    pub count: usize,
}

impl Totals {
    pub fn sign(&self) -> BalanceSign {
        BalanceSign::of(self.balance)
    }
}

pub struct SummaryService;

impl SummaryService {
    /// Income minus expense.
    pub fn balance(transactions: &[Transaction]) -> f64 {
        Self::total_by_type(transactions, TransactionKind::Income)
            - Self::total_by_type(transactions, TransactionKind::Expense)
    }

    pub fn total_by_type(transactions: &[Transaction], kind: TransactionKind) -> f64 {
        // fold from +0.0: an empty float `sum()` may yield -0.0
        transactions
            .iter()
            .filter(|txn| txn.kind == kind)
            .fold(0.0, |total, txn| total + txn.amount)
    }

    pub fn count(transactions: &[Transaction]) -> usize {
        transactions.len()
    }

    pub fn summarize(transactions: &[Transaction]) -> Totals {
        let income = Self::total_by_type(transactions, TransactionKind::Income);
        let expense = Self::total_by_type(transactions, TransactionKind::Expense);
        Totals {
            balance: income - expense,
            income,
            expense,
            count: Self::count(transactions),
        }
    }
}
