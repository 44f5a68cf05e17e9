//! Profile and transaction logic. No terminal I/O and no rendering library;
//! persistence goes through [`crate::storage::StorageBackend`].

pub mod clock;
pub mod draft;
pub mod ids;
pub mod ports;
pub mod profile_store;
pub mod services;
pub mod tracker;
pub mod view;
