//! Weight table persistence
//!
//! JSON on disk, written to a temp file and renamed into place so a
//! crash mid-save leaves the previous state intact. A missing,
//! unreadable, or invalid file is never an error: it falls back to the
//! default distribution.

use crate::drill::weights::WeightTable;
use std::error::Error;
use std::fs;
use std::path::PathBuf;

/// Loads and saves the weight table at a fixed path
pub struct WeightStore {
    path: PathBuf,
}

impl WeightStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        WeightStore { path: path.into() }
    }

    /// Load the persisted table, or the defaults when no usable state
    /// exists. The bool reports whether saved state was actually used.
    pub fn load(&self) -> (WeightTable, bool) {
        match fs::read_to_string(&self.path) {
            Ok(content) => match serde_json::from_str::<WeightTable>(&content) {
                Ok(table) if table.is_complete() => (table, true),
                _ => (WeightTable::defaults(), false),
            },
            Err(_) => (WeightTable::defaults(), false),
        }
    }

    /// Persist the table: write a sibling temp file, then rename
    pub fn save(&self, table: &WeightTable) -> Result<(), Box<dyn Error>> {
        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() {
                fs::create_dir_all(dir)?;
            }
        }
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, serde_json::to_string_pretty(table)?)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theory::Family;

    fn temp_store(name: &str) -> WeightStore {
        let path = std::env::temp_dir().join(format!(
            "keysig-trainer-{}-{}.json",
            name,
            std::process::id()
        ));
        let _ = fs::remove_file(&path);
        WeightStore::new(path)
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let store = temp_store("missing");
        let (table, loaded) = store.load();
        assert!(!loaded);
        assert_eq!(table, WeightTable::defaults());
    }

    #[test]
    fn save_then_load_round_trips() {
        let store = temp_store("roundtrip");
        let mut table = WeightTable::defaults();
        table.set_weight(Family::Sharp, "F#", 12.5);
        table.set_weight(Family::Flat, "Gb", 0.03125);

        store.save(&table).unwrap();
        let (reloaded, loaded) = store.load();
        assert!(loaded);
        assert_eq!(reloaded, table);

        let _ = fs::remove_file(&store.path);
    }

    #[test]
    fn corrupt_file_falls_back_to_defaults() {
        let store = temp_store("corrupt");
        fs::write(&store.path, "not json {{{").unwrap();
        let (table, loaded) = store.load();
        assert!(!loaded);
        assert_eq!(table, WeightTable::defaults());

        let _ = fs::remove_file(&store.path);
    }

    #[test]
    fn invalid_weights_are_rejected_at_load() {
        let store = temp_store("invalid");
        let mut table = WeightTable::defaults();
        table.set_weight(Family::Flat, "Ab", -1.0);
        store.save(&table).unwrap();

        let (reloaded, loaded) = store.load();
        assert!(!loaded);
        assert_eq!(reloaded, WeightTable::defaults());

        let _ = fs::remove_file(&store.path);
    }
}
