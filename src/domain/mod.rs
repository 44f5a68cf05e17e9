//! Domain models for profiles and their transactions.
//! No I/O here; only data types and the rules that keep them consistent.

pub mod profile;
pub mod transaction;

pub use profile::Profiles;
pub use transaction::{Transaction, TransactionId, TransactionKind};
