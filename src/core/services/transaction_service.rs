//! Business logic helpers for managing a profile's transactions.

use crate::domain::{Transaction, TransactionId};

/// Insert and remove helpers over a newest-first transaction sequence.
pub struct TransactionService;

impl TransactionService {
    /// Places `transaction` at the head, keeping the sequence newest-first.
    pub fn insert(transactions: &mut Vec<Transaction>, transaction: Transaction) {
        transactions.insert(0, transaction);
    }

    /// Removes the transaction identified by `id`, returning the removed instance.
    pub fn remove(transactions: &mut Vec<Transaction>, id: TransactionId) -> Option<Transaction> {
        let index = transactions.iter().position(|txn| txn.id == id)?;
        Some(transactions.remove(index))
    }

    pub fn find(transactions: &[Transaction], id: TransactionId) -> Option<&Transaction> {
        transactions.iter().find(|txn| txn.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TransactionKind;

    fn txn(id: u64, kind: TransactionKind, amount: f64) -> Transaction {
        Transaction::new(TransactionId(id), format!("txn {id}"), amount, kind, "1/1/2025")
    }

    #[test]
    fn insert_places_newest_first() {
        let mut txns = Vec::new();
        TransactionService::insert(&mut txns, txn(1, TransactionKind::Income, 1000.0));
        TransactionService::insert(&mut txns, txn(2, TransactionKind::Expense, 4.5));

        assert_eq!(txns.len(), 2);
        assert_eq!(txns[0].id, TransactionId(2));
        assert_eq!(txns[1].id, TransactionId(1));
    }

    #[test]
    fn remove_returns_deleted_transaction() {
        let mut txns = vec![
            txn(3, TransactionKind::Expense, 1.0),
            txn(2, TransactionKind::Income, 2.0),
            txn(1, TransactionKind::Expense, 3.0),
        ];
        let removed = TransactionService::remove(&mut txns, TransactionId(2)).unwrap();
        assert_eq!(removed.id, TransactionId(2));
        assert_eq!(
            txns.iter().map(|t| t.id.value()).collect::<Vec<_>>(),
            vec![3, 1]
        );
        assert!(TransactionService::find(&txns, TransactionId(2)).is_none());
    }

    #[test]
    fn remove_missing_id_leaves_sequence_untouched() {
        let mut txns = vec![txn(1, TransactionKind::Income, 5.0)];
        let before = txns.clone();
        assert!(TransactionService::remove(&mut txns, TransactionId(42)).is_none());
        assert_eq!(txns, before);
    }
}
