use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

/// Flat key-value preference store backed by a single JSON file.
///
/// Reads happen once at startup, writes on every change; a missing or
/// unreadable file just means no stored preferences.
pub struct PrefStore {
    path: PathBuf,
}

impl PrefStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn get(&self, key: &str) -> Option<String> {
        let data = fs::read_to_string(&self.path).ok()?;
        let map: BTreeMap<String, String> = serde_json::from_str(&data).ok()?;
        map.get(key).cloned()
    }

    pub fn set(&self, key: &str, value: &str) -> Result<(), anyhow::Error> {
        let mut map: BTreeMap<String, String> = fs::read_to_string(&self.path)
            .ok()
            .and_then(|data| serde_json::from_str(&data).ok())
            .unwrap_or_default();

        map.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(&map)?)?;
        Ok(())
    }
}
