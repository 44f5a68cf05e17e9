pub mod json_backend;
pub mod memory;

use crate::{domain::Profiles, errors::Result};

/// Storage key used when no configuration overrides it.
pub const DEFAULT_STORAGE_KEY: &str = "financeProfiles";

/// Abstraction over key-value persistence backends holding serialized documents.
pub trait StorageBackend: Send + Sync {
    /// Returns the document stored under `key`, or `None` if nothing was written yet.
    fn read(&self, key: &str) -> Result<Option<String>>;
    /// Replaces the document stored under `key`.
    fn write(&self, key: &str, value: &str) -> Result<()>;
}

/// Serializes the whole profile mapping as one compact JSON document.
pub fn encode_profiles(profiles: &Profiles) -> Result<String> {
    Ok(serde_json::to_string(profiles)?)
}

/// Parses a stored document. A JSON `null` is read as an empty mapping.
pub fn decode_profiles(data: &str) -> Result<Profiles> {
    let parsed: Option<Profiles> = serde_json::from_str(data)?;
    Ok(parsed.unwrap_or_default())
}

pub use json_backend::JsonFileStorage;
pub use memory::MemoryStorage;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Transaction, TransactionId, TransactionKind};

    #[test]
    fn decode_reads_documents_written_by_the_browser_tracker() {
        let raw = r#"{"Personal":[{"id":1736100000000,"description":"Coffee","amount":4.5,"type":"expense","date":"1/5/2025"}],"Work":[]}"#;
        let profiles = decode_profiles(raw).unwrap();
        assert_eq!(profiles.len(), 2);
        let personal = profiles.get("Personal").unwrap();
        assert_eq!(personal[0].id, TransactionId(1_736_100_000_000));
        assert_eq!(personal[0].kind, TransactionKind::Expense);
        assert_eq!(encode_profiles(&profiles).unwrap(), raw);
    }

    #[test]
    fn decode_treats_null_as_empty() {
        assert!(decode_profiles("null").unwrap().is_empty());
    }

    #[test]
    fn decode_rejects_malformed_documents() {
        assert!(decode_profiles("{not json").is_err());
        assert!(decode_profiles("[1, 2]").is_err());
        assert!(decode_profiles(r#"{"A":[{"id":1,"description":"x","amount":1,"type":"gift","date":""}]}"#).is_err());
    }

    #[test]
    fn round_trip_preserves_order_and_fields() {
        let mut profiles = Profiles::new();
        profiles.insert_empty("Personal");
        let txns = profiles.get_mut("Personal").unwrap();
        txns.push(Transaction::new(TransactionId(2), "Coffee", 4.5, TransactionKind::Expense, "1/2/2025"));
        txns.push(Transaction::new(TransactionId(1), "Salary", 1000.0, TransactionKind::Income, "1/1/2025"));
        profiles.insert_empty("Empty");

        let decoded = decode_profiles(&encode_profiles(&profiles).unwrap()).unwrap();
        assert_eq!(decoded, profiles);
    }
}
