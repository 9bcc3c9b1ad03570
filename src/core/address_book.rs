use crate::domain::model::Record;
use std::collections::BTreeMap;

/// In-memory contacts keyed by name. Iteration is in name order.
#[derive(Debug, Clone, Default)]
pub struct AddressBook {
    data: BTreeMap<String, Record>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `record` under its own name, replacing any record with that name.
    pub fn add_record(&mut self, record: Record) {
        let key = record.name().to_string();
        if self.data.insert(key, record).is_some() {
            tracing::debug!("Replaced existing contact");
        }
    }

    pub fn find(&self, name: &str) -> Option<&Record> {
        self.data.get(name)
    }

    /// Mutable access for phone and birthday edits. `Record` has no name
    /// setter, so the key always matches the stored name.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.data.get_mut(name)
    }

    pub fn delete(&mut self, name: &str) -> Option<Record> {
        self.data.remove(name)
    }

    pub fn all_records(&self) -> Vec<&Record> {
        self.data.values().collect()
    }

    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.data.values()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
