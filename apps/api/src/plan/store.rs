//! Plan persistence: a flat key-value store holding the last chosen role,
//! seniority and skill selection.
//!
//! Values are JSON-encoded strings under fixed keys. A missing or unreadable
//! value means "use the default"; it is never an error for the caller.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use tracing::warn;

use crate::plan::catalog::{Role, Seniority};

pub const ROLE_KEY: &str = "intervue_role";
pub const SENIORITY_KEY: &str = "intervue_seniority";
pub const SELECTED_SKILLS_KEY: &str = "intervue_selectedSkills";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Store I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Store encoding error: {0}")]
    Encoding(#[from] serde_json::Error),
}

/// Side-effecting persistence boundary for plan selections.
pub trait PlanStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&mut self, key: &str, value: String) -> Result<(), StoreError>;
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}

/// Selections restored at startup. `None` means nothing usable was stored.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct SavedPlan {
    pub role: Option<Role>,
    pub seniority: Option<Seniority>,
    pub selected_skills: Option<Vec<String>>,
}

pub fn load_saved_plan(store: &dyn PlanStore) -> SavedPlan {
    SavedPlan {
        role: read_json(store, ROLE_KEY),
        seniority: read_json(store, SENIORITY_KEY),
        selected_skills: read_json(store, SELECTED_SKILLS_KEY),
    }
}

pub fn save_role(store: &mut dyn PlanStore, role: Role) -> Result<(), StoreError> {
    write_json(store, ROLE_KEY, &role)
}

pub fn save_seniority(store: &mut dyn PlanStore, seniority: Seniority) -> Result<(), StoreError> {
    write_json(store, SENIORITY_KEY, &seniority)
}

/// Empty selections are not written, so a transient empty state never
/// overwrites the last real selection.
pub fn save_selected_skills(
    store: &mut dyn PlanStore,
    skills: &[String],
) -> Result<(), StoreError> {
    if skills.is_empty() {
        return Ok(());
    }
    write_json(store, SELECTED_SKILLS_KEY, &skills)
}

pub fn clear_saved_plan(store: &mut dyn PlanStore) -> Result<(), StoreError> {
    for key in [ROLE_KEY, SENIORITY_KEY, SELECTED_SKILLS_KEY] {
        store.remove(key)?;
    }
    Ok(())
}

fn read_json<T: DeserializeOwned>(store: &dyn PlanStore, key: &str) -> Option<T> {
    let raw = match store.get(key) {
        Ok(raw) => raw?,
        Err(e) => {
            warn!("Error reading store key \"{key}\": {e}");
            return None;
        }
    };
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!("Error decoding store key \"{key}\": {e}");
            None
        }
    }
}

fn write_json<T: Serialize + ?Sized>(
    store: &mut dyn PlanStore,
    key: &str,
    value: &T,
) -> Result<(), StoreError> {
    store.set(key, serde_json::to_string(value)?)
}

/// In-process store, lost on exit.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl PlanStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Store backed by a single JSON object on disk. The file is re-read on
/// every access and rewritten on every change.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<BTreeMap<String, String>, StoreError> {
        match std::fs::read_to_string(&self.path) {
            Ok(text) if text.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(text) => Ok(serde_json::from_str(&text)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }

    fn persist(&self, entries: &BTreeMap<String, String>) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(&self.path, serde_json::to_string_pretty(entries)?)?;
        Ok(())
    }
}

impl PlanStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.load()?.remove(key))
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), StoreError> {
        let mut entries = self.load()?;
        entries.insert(key.to_string(), value);
        self.persist(&entries)
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        let mut entries = self.load()?;
        if entries.remove(key).is_some() {
            self.persist(&entries)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_store_yields_no_saved_plan() {
        let store = MemoryStore::default();
        assert_eq!(load_saved_plan(&store), SavedPlan::default());
    }

    #[test]
    fn test_values_are_json_encoded() {
        let mut store = MemoryStore::default();
        save_role(&mut store, Role::DevOps).unwrap();
        save_selected_skills(&mut store, &["Linux".to_string()]).unwrap();
        assert_eq!(store.get(ROLE_KEY).unwrap().as_deref(), Some("\"devops\""));
        assert_eq!(
            store.get(SELECTED_SKILLS_KEY).unwrap().as_deref(),
            Some("[\"Linux\"]")
        );
    }

    #[test]
    fn test_corrupt_value_falls_back_to_default() {
        let mut store = MemoryStore::default();
        store.set(SENIORITY_KEY, "not json".to_string()).unwrap();
        store.set(ROLE_KEY, "\"astronaut\"".to_string()).unwrap();
        let saved = load_saved_plan(&store);
        assert_eq!(saved.seniority, None);
        assert_eq!(saved.role, None);
    }

    #[test]
    fn test_empty_skill_selection_not_written() {
        let mut store = MemoryStore::default();
        save_selected_skills(&mut store, &["Go".to_string()]).unwrap();
        save_selected_skills(&mut store, &[]).unwrap();
        assert_eq!(
            load_saved_plan(&store).selected_skills,
            Some(vec!["Go".to_string()])
        );
    }

    #[test]
    fn test_file_store_round_trips_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("plan.json");

        let mut store = JsonFileStore::new(&path);
        save_role(&mut store, Role::Frontend).unwrap();
        save_seniority(&mut store, Seniority::Senior).unwrap();

        let reopened = JsonFileStore::new(&path);
        let saved = load_saved_plan(&reopened);
        assert_eq!(saved.role, Some(Role::Frontend));
        assert_eq!(saved.seniority, Some(Seniority::Senior));
        assert_eq!(saved.selected_skills, None);
    }

    #[test]
    fn test_clear_removes_all_keys() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonFileStore::new(dir.path().join("plan.json"));
        save_role(&mut store, Role::Qa).unwrap();
        save_seniority(&mut store, Seniority::Junior).unwrap();
        save_selected_skills(&mut store, &["Test Design".to_string()]).unwrap();

        clear_saved_plan(&mut store).unwrap();
        assert_eq!(load_saved_plan(&store), SavedPlan::default());
    }
}
