use crate::csv::{LoadError, load_csv};
use crate::logger;
use crate::models::Record;
use std::path::Path;

/// Records ordered by ascending id. Never mutated after construction.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<Record>,
}

impl RecordStore {
    pub fn from_records(mut records: Vec<Record>) -> Self {
        records.sort_by_key(|r| r.id);
        Self { records }
    }

    pub fn load(path: &Path) -> Result<Self, LoadError> {
        load_csv(path).map(Self::from_records)
    }

    /// A failed load is logged and leaves the store empty.
    pub fn load_or_empty(path: &Path) -> Self {
        match Self::load(path) {
            Ok(store) => {
                logger::log(&format!(
                    "Loaded {} records from {}",
                    store.len(),
                    path.display()
                ));
                store
            }
            Err(e) => {
                logger::log(&format!("Failed to load {}: {}", path.display(), e));
                Self::default()
            }
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn first(&self) -> Option<&Record> {
        self.records.first()
    }

    pub fn get(&self, position: usize) -> Option<&Record> {
        self.records.get(position)
    }

    /// First record carrying `id`; later duplicates are shadowed.
    pub fn find(&self, id: u32) -> Option<&Record> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn position_of(&self, id: u32) -> Option<usize> {
        self.records.iter().position(|r| r.id == id)
    }

    pub fn contains(&self, id: u32) -> bool {
        self.find(id).is_some()
    }
}
