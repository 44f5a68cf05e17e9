//! Controller tying the profile store to the host's confirmation and notice ports.

use crate::core::{
    draft::TransactionDraft,
    ports::{ConfirmationGate, Notice, Notifier},
    profile_store::{ProfileStore, TransactionRemoval},
    view::{render, TrackerView, ViewOptions},
};
use crate::domain::{Transaction, TransactionId};
use crate::errors::Result;

/// Application state for one UI session.
///
/// Takes raw values from the input surface, runs them through the store, and
/// reports successes and failures to the notifier. Failures are also returned
/// so the host can decide whether to keep going.
pub struct Tracker<C, N> {
    store: ProfileStore,
    gate: C,
    notifier: N,
    view_options: ViewOptions,
}

impl<C, N> Tracker<C, N>
where
    C: ConfirmationGate,
    N: Notifier,
{
    pub fn new(store: ProfileStore, gate: C, notifier: N) -> Self {
        Self {
            store,
            gate,
            notifier,
            view_options: ViewOptions::default(),
        }
    }

    pub fn with_view_options(mut self, options: ViewOptions) -> Self {
        self.view_options = options;
        self
    }

    pub fn store(&self) -> &ProfileStore {
        &self.store
    }

    pub fn active_profile(&self) -> Option<&str> {
        self.store.active_profile()
    }

    pub fn create_profile(&mut self, raw_name: &str) -> Result<String> {
        let result = self.store.create(raw_name);
        if let Ok(name) = &result {
            self.notifier
                .notify(Notice::success(format!("Profile \"{name}\" created successfully!")));
        }
        self.alert_on_error(result)
    }

    pub fn select_profile(&mut self, raw_name: &str) {
        self.store.select(raw_name);
    }

    /// Deletes the active profile after confirmation. Returns whether it was removed.
    pub fn delete_active_profile(&mut self) -> Result<bool> {
        let Some(name) = self.store.active_profile().map(str::to_string) else {
            return Ok(false);
        };
        let result = self.store.delete(&name, &mut self.gate);
        if let Ok(true) = result {
            self.notifier
                .notify(Notice::success("Profile deleted successfully!"));
        }
        self.alert_on_error(result)
    }

    pub fn add_transaction(
        &mut self,
        raw_description: &str,
        raw_amount: &str,
        raw_kind: &str,
    ) -> Result<Transaction> {
        let result = self.store.ensure_active().map(|_| ()).and_then(|()| {
            let draft = TransactionDraft::parse(raw_description, raw_amount, raw_kind)?;
            self.store.add_draft(draft)
        });
        if result.is_ok() {
            self.notifier
                .notify(Notice::success("Transaction added successfully!"));
        }
        self.alert_on_error(result)
    }

    pub fn delete_transaction(&mut self, id: TransactionId) -> Result<TransactionRemoval> {
        let result = self.store.delete_transaction(id, &mut self.gate);
        if let Ok(TransactionRemoval::Removed(_) | TransactionRemoval::NotFound) = &result {
            self.notifier
                .notify(Notice::success("Transaction deleted successfully!"));
        }
        self.alert_on_error(result)
    }

    pub fn view(&self) -> TrackerView {
        render(&self.store, &self.view_options)
    }

    fn alert_on_error<T>(&mut self, result: Result<T>) -> Result<T> {
        if let Err(err) = &result {
            self.notifier.notify(Notice::alert(err.to_string()));
        }
        result
    }
}
