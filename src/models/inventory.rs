use super::{new_id, parse_sync, sync_cell};
use crate::store::Record;
use crate::utils::formatting::{format_quantity, parse_quantity};
use serde::Serialize;

pub const INWARD: &str = "Inward";

/// Material received into stock.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InventoryEntry {
    pub id: String,
    pub date: String,
    pub material: String,
    pub qty: f64,
    pub entry_type: String,
    pub synced: bool,
}

impl InventoryEntry {
    pub fn inward(date: &str, material: &str, qty: f64) -> Self {
        Self {
            id: new_id(),
            date: date.to_string(),
            material: material.to_string(),
            qty,
            entry_type: INWARD.to_string(),
            synced: false,
        }
    }

    pub fn from_record(r: &Record) -> Self {
        Self {
            id: r.get("id").to_string(),
            date: r.get("date").trim().to_string(),
            material: r.get("material").trim().to_string(),
            qty: parse_quantity(r.get("qty")),
            entry_type: r.get("entry_type").trim().to_string(),
            synced: parse_sync(r.get("synced")),
        }
    }

    pub fn to_record(&self) -> Record {
        Record::new()
            .with("id", &self.id)
            .with("date", &self.date)
            .with("material", &self.material)
            .with("qty", format_quantity(self.qty))
            .with("entry_type", &self.entry_type)
            .with("synced", sync_cell(self.synced))
    }
}
