//! Best-effort JSON file storage: one file per collection key.

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::fs::File;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/**
Stores each collection as a pretty-printed JSON array in
`<dir>/<key>.json`.

Reads and writes never fail from the caller's point of view: a missing or
malformed file loads as the empty collection, and a failed write is logged
while the in-memory data stays authoritative for the session. Keys are
independent; there is no cross-key transactionality.
*/
#[derive(Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        JsonFileStore { dir: dir.into() }
    }

    /// Uses `LEDGER_DATA_DIR` when set, `db` otherwise.
    pub fn from_env() -> Self {
        let dir = dotenv::var("LEDGER_DATA_DIR").unwrap_or_else(|_| "db".to_string());
        JsonFileStore::new(dir)
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    /// Loads the collection stored under `key`. Never fails: a missing file
    /// is an empty collection, and unreadable or malformed content is logged
    /// and treated as absent (it gets overwritten on the next save).
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Vec<T> {
        let path = self.path_for(key);
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No file at {}, starting empty.", path.display());
                return Vec::new();
            }
            Err(e) => {
                warn!("Cannot read {}: {e}. Starting empty.", path.display());
                return Vec::new();
            }
        };

        if content.is_empty() {
            return Vec::new();
        }

        match serde_json::from_str(&content) {
            Ok(data) => data,
            Err(e) => {
                warn!("Malformed JSON in {}: {e}. Starting empty.", path.display());
                Vec::new()
            }
        }
    }

    /// Persists the collection under `key`, best-effort. Every failure mode
    /// (serialization, directory creation, quota, rename) is caught here and
    /// logged; none propagates to the mutation that triggered the write.
    pub fn save<T: Serialize>(&self, key: &str, data: &[T]) {
        if let Err(e) = self.try_save(key, data) {
            warn!(
                "Failed to save {}: {e}. In-memory data remains authoritative.",
                self.path_for(key).display()
            );
        }
    }

    fn try_save<T: Serialize>(&self, key: &str, data: &[T]) -> Result<(), Box<dyn std::error::Error>> {
        let content = serde_json::to_string_pretty(data)?;

        if !fs::exists(&self.dir)? {
            fs::create_dir_all(&self.dir)?;
            info!("Created folder: {}", self.dir.display());
        }

        let path = self.path_for(key);
        let tmp_path = tmp_path_for(&path);
        let mut file = File::create(&tmp_path)?; // truncates a leftover tmp file if any
        file.write_all(content.as_bytes())?;
        file.sync_all()?;

        fs::rename(&tmp_path, &path)?; // replaces the existing file atomically

        debug!("Saved file: {}", path.display());

        Ok(())
    }
}

fn tmp_path_for(path: &Path) -> PathBuf {
    let mut tmp = path.as_os_str().to_os_string();
    tmp.push(".tmp");
    PathBuf::from(tmp)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Row {
        id: String,
        amount: f64,
    }

    fn rows() -> Vec<Row> {
        vec![
            Row {
                id: "a".to_string(),
                amount: 1.5,
            },
            Row {
                id: "b".to_string(),
                amount: 2.0,
            },
        ]
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path());

        store.save("rows", &rows());
        let loaded: Vec<Row> = store.load("rows");

        assert_eq!(loaded, rows());
    }

    #[test]
    fn missing_key_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path());

        let loaded: Vec<Row> = store.load("never_written");
        assert!(loaded.is_empty());
    }

    #[test]
    fn malformed_json_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path());
        fs::write(store.path_for("rows"), "{not json at all").unwrap();

        let loaded: Vec<Row> = store.load("rows");
        assert!(loaded.is_empty());
    }

    #[test]
    fn save_creates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("nested/data"));

        store.save("rows", &rows());
        let loaded: Vec<Row> = store.load("rows");

        assert_eq!(loaded.len(), 2);
    }

    #[test]
    fn save_to_unwritable_location_does_not_panic() {
        // A path under a regular file cannot be created as a directory.
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "x").unwrap();

        let store = JsonFileStore::new(blocker.join("sub"));
        store.save("rows", &rows());

        let loaded: Vec<Row> = store.load("rows");
        assert!(loaded.is_empty());
    }
}
