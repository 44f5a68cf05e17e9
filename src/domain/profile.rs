//! The profile mapping: profile name to its newest-first transactions.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::transaction::{Transaction, TransactionId};

/// Every profile in the store, keyed by exact (case-sensitive) name.
///
/// Serializes as a bare JSON object so the persisted document is
/// `{ "<name>": [ ...transactions ], ... }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Profiles(BTreeMap<String, Vec<Transaction>>);

impl Profiles {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn get(&self, name: &str) -> Option<&[Transaction]> {
        self.0.get(name).map(Vec::as_slice)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Vec<Transaction>> {
        self.0.get_mut(name)
    }

    /// Adds an empty profile. Returns `false` if the name is already taken.
    pub fn insert_empty(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if self.0.contains_key(&name) {
            return false;
        }
        self.0.insert(name, Vec::new());
        true
    }

    /// Puts a profile back with the given transactions, replacing any existing entry.
    pub fn restore(&mut self, name: impl Into<String>, transactions: Vec<Transaction>) {
        self.0.insert(name.into(), transactions);
    }

    /// Removes a profile together with all of its transactions.
    pub fn remove(&mut self, name: &str) -> Option<Vec<Transaction>> {
        self.0.remove(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Transaction])> {
        self.0
            .iter()
            .map(|(name, txns)| (name.as_str(), txns.as_slice()))
    }

    /// Largest transaction id held by any profile.
    pub fn max_transaction_id(&self) -> Option<TransactionId> {
        self.0.values().flatten().map(|txn| txn.id).max()
    }
}

impl FromIterator<(String, Vec<Transaction>)> for Profiles {
    fn from_iter<I: IntoIterator<Item = (String, Vec<Transaction>)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
