use std::{
    fs::{self, File},
    io::{ErrorKind, Write},
    path::{Path, PathBuf},
};

use crate::utils::ensure_dir;

use super::{Result, StorageBackend};

const DOCUMENT_EXTENSION: &str = "json";
const TMP_SUFFIX: &str = "tmp";

/// Filesystem-backed key-value storage: one JSON file per key under `root`.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    root: PathBuf,
}

impl JsonFileStorage {
    pub fn new(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        ensure_dir(&root)?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn document_path(&self, key: &str) -> PathBuf {
        self.root
            .join(format!("{}.{}", canonical_key(key), DOCUMENT_EXTENSION))
    }
}

impl StorageBackend for JsonFileStorage {
    fn read(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.document_path(key)) {
            Ok(data) => Ok(Some(data)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        let path = self.document_path(key);
        let tmp = tmp_path(&path);
        write_atomic(&tmp, value)?;
        fs::rename(&tmp, &path)?;
        tracing::debug!(path = %path.display(), bytes = value.len(), "document written");
        Ok(())
    }
}

fn canonical_key(key: &str) -> String {
    let sanitized: String = key
        .trim()
        .to_lowercase()
        .chars()
        .map(|c| match c {
            'a'..='z' | '0'..='9' => c,
            _ => '_',
        })
        .collect();
    if sanitized.trim_matches('_').is_empty() {
        "store".into()
    } else {
        sanitized
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_document_reads_as_none() {
        let dir = tempdir().unwrap();
        let storage = JsonFileStorage::new(dir.path().join("data")).unwrap();
        assert_eq!(storage.read("financeProfiles").unwrap(), None);
    }

    #[test]
    fn write_replaces_previous_document() {
        let dir = tempdir().unwrap();
        let storage = JsonFileStorage::new(dir.path()).unwrap();
        storage.write("financeProfiles", "{}").unwrap();
        storage.write("financeProfiles", r#"{"A":[]}"#).unwrap();

        assert_eq!(
            storage.read("financeProfiles").unwrap().as_deref(),
            Some(r#"{"A":[]}"#)
        );
        let path = storage.document_path("financeProfiles");
        assert_eq!(path.file_name().and_then(|n| n.to_str()), Some("financeprofiles.json"));
        assert!(!tmp_path(&path).exists());
    }

    #[test]
    fn canonical_key_falls_back_for_symbol_only_keys() {
        assert_eq!(canonical_key("  My Key! "), "my_key_");
        assert_eq!(canonical_key("!!!"), "store");
    }
}
