use tracing::{debug, info, warn};

use crate::core::{
    clock::{display_date, Clock, SystemClock},
    draft::TransactionDraft,
    ids::IdGenerator,
    ports::ConfirmationGate,
    services::TransactionService,
};
use crate::domain::{Profiles, Transaction, TransactionId, TransactionKind};
use crate::errors::{Result, ValidationError};
use crate::storage::{decode_profiles, encode_profiles, StorageBackend};

/// Result of asking to delete a transaction.
#[derive(Debug, Clone, PartialEq)]
pub enum TransactionRemoval {
    /// No profile was active, so nothing was asked.
    NoActiveProfile,
    /// The confirmation gate said no.
    Declined,
    /// Confirmed, but no transaction carried the id.
    NotFound,
    Removed(Transaction),
}

/// Owns every profile, the active selection, and the backend they persist to.
///
/// Each mutation writes the whole mapping under one storage key. A failed
/// write is undone in memory so the store never diverges from storage.
pub struct ProfileStore {
    profiles: Profiles,
    active: Option<String>,
    storage: Box<dyn StorageBackend>,
    key: String,
    clock: Box<dyn Clock>,
    ids: IdGenerator,
}

impl ProfileStore {
    /// Loads the mapping stored under `key`. Never fails: missing or corrupt
    /// data yields an empty store. No profile is active after loading.
    pub fn load(storage: Box<dyn StorageBackend>, key: impl Into<String>) -> Self {
        Self::load_with_clock(storage, key, Box::new(SystemClock))
    }

    pub fn load_with_clock(
        storage: Box<dyn StorageBackend>,
        key: impl Into<String>,
        clock: Box<dyn Clock>,
    ) -> Self {
        let key = key.into();
        let profiles = match storage.read(&key) {
            Ok(Some(data)) => decode_profiles(&data).unwrap_or_else(|err| {
                warn!(key = %key, error = %err, "stored profiles are unreadable; starting empty");
                Profiles::default()
            }),
            Ok(None) => Profiles::default(),
            Err(err) => {
                warn!(key = %key, error = %err, "failed to read stored profiles; starting empty");
                Profiles::default()
            }
        };
        debug!(key = %key, profiles = profiles.len(), "profile store loaded");
        let ids = IdGenerator::seeded(profiles.max_transaction_id());
        Self {
            profiles,
            active: None,
            storage,
            key,
            clock,
            ids,
        }
    }

    pub fn profiles(&self) -> &Profiles {
        &self.profiles
    }

    pub fn profile_names(&self) -> Vec<String> {
        self.profiles.names().map(str::to_string).collect()
    }

    pub fn storage_key(&self) -> &str {
        &self.key
    }

    pub fn active_profile(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn active_transactions(&self) -> Option<&[Transaction]> {
        self.active
            .as_deref()
            .and_then(|name| self.profiles.get(name))
    }

    /// Fails with [`ValidationError::NoActiveProfile`] unless a profile is selected.
    pub fn ensure_active(&self) -> Result<&str> {
        self.active
            .as_deref()
            .ok_or_else(|| ValidationError::NoActiveProfile.into())
    }

    /// Adds an empty profile and makes it active. Returns the trimmed name.
    pub fn create(&mut self, name: &str) -> Result<String> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyProfileName.into());
        }
        if self.profiles.contains(name) {
            return Err(ValidationError::DuplicateProfile(name.to_string()).into());
        }

        self.profiles.insert_empty(name);
        if let Err(err) = self.persist() {
            self.profiles.remove(name);
            return Err(err);
        }
        self.active = Some(name.to_string());
        info!(profile = name, "profile created");
        Ok(name.to_string())
    }

    /// Makes `name` the active profile. Blank or unknown names clear the selection.
    pub fn select(&mut self, name: &str) {
        let name = name.trim();
        self.active = if !name.is_empty() && self.profiles.contains(name) {
            Some(name.to_string())
        } else {
            None
        };
        debug!(profile = ?self.active, "profile selected");
    }

    /// Deletes `name` and all its transactions once `gate` confirms.
    ///
    /// Returns `false` without asking when no profile is active or the name is
    /// unknown, and `false` when the gate declines.
    pub fn delete<G>(&mut self, name: &str, gate: &mut G) -> Result<bool>
    where
        G: ConfirmationGate + ?Sized,
    {
        if self.active.is_none() || !self.profiles.contains(name) {
            return Ok(false);
        }
        let prompt = format!(
            "Are you sure you want to delete profile \"{}\" and all its data?",
            name
        );
        if !gate.confirm(&prompt) {
            debug!(profile = name, "profile deletion declined");
            return Ok(false);
        }

        let Some(removed) = self.profiles.remove(name) else {
            return Ok(false);
        };
        if let Err(err) = self.persist() {
            self.profiles.restore(name, removed);
            return Err(err);
        }
        self.active = None;
        info!(profile = name, transactions = removed.len(), "profile deleted");
        Ok(true)
    }

    /// Records a new transaction at the head of the active profile.
    pub fn add_transaction(
        &mut self,
        description: &str,
        amount: f64,
        kind: TransactionKind,
    ) -> Result<Transaction> {
        self.ensure_active()?;
        let draft = TransactionDraft::new(description, amount, kind)?;
        self.add_draft(draft)
    }

    pub fn add_draft(&mut self, draft: TransactionDraft) -> Result<Transaction> {
        let profile = self.ensure_active()?.to_string();
        let now = self.clock.now();
        let id = self.ids.next(now.timestamp_millis());
        let transaction = Transaction::new(
            id,
            draft.description,
            draft.amount,
            draft.kind,
            display_date(now),
        );

        let transactions = self
            .profiles
            .get_mut(&profile)
            .ok_or(ValidationError::NoActiveProfile)?;
        TransactionService::insert(transactions, transaction.clone());
        if let Err(err) = self.persist() {
            if let Some(transactions) = self.profiles.get_mut(&profile) {
                TransactionService::remove(transactions, id);
            }
            return Err(err);
        }
        debug!(profile = %profile, id = %id, kind = %transaction.kind, "transaction added");
        Ok(transaction)
    }

    /// Deletes the transaction with `id` from the active profile once `gate` confirms.
    pub fn delete_transaction<G>(&mut self, id: TransactionId, gate: &mut G) -> Result<TransactionRemoval>
    where
        G: ConfirmationGate + ?Sized,
    {
        let Some(profile) = self.active.clone() else {
            return Ok(TransactionRemoval::NoActiveProfile);
        };
        if !gate.confirm("Are you sure you want to delete this transaction?") {
            return Ok(TransactionRemoval::Declined);
        }

        let Some(transactions) = self.profiles.get_mut(&profile) else {
            return Ok(TransactionRemoval::NotFound);
        };
        let position = transactions.iter().position(|txn| txn.id == id);
        let removed = TransactionService::remove(transactions, id);
        if let Err(err) = self.persist() {
            if let (Some(index), Some(txn)) = (position, removed) {
                if let Some(transactions) = self.profiles.get_mut(&profile) {
                    transactions.insert(index, txn);
                }
            }
            return Err(err);
        }

        Ok(match removed {
            Some(txn) => {
                debug!(profile = %profile, id = %id, "transaction deleted");
                TransactionRemoval::Removed(txn)
            }
            None => TransactionRemoval::NotFound,
        })
    }

    /// Writes the full mapping under the storage key.
    pub fn persist(&self) -> Result<()> {
        let document = encode_profiles(&self.profiles)?;
        self.storage.write(&self.key, &document)?;
        debug!(key = %self.key, bytes = document.len(), "profiles persisted");
        Ok(())
    }
}
