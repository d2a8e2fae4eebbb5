use super::{parse_sync, sync_cell};
use crate::store::Record;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Worker {
    pub name: String,
    pub synced: bool,
}

impl Worker {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            synced: false,
        }
    }

    pub fn from_record(r: &Record) -> Self {
        Self {
            name: r.get("name").trim().to_string(),
            synced: parse_sync(r.get("synced")),
        }
    }

    pub fn to_record(&self) -> Record {
        Record::new()
            .with("name", &self.name)
            .with("synced", sync_cell(self.synced))
    }
}
