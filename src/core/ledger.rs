//! Stock ledger: quantity on hand per material, derived from the inward
//! (Inventory) and outward (WorkLogs) sheets. Nothing here is stored.

use crate::errors::AppResult;
use crate::models::inventory::InventoryEntry;
use crate::models::work_log::WorkLog;
use crate::store::{Sheet, TabularStore};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StockLine {
    pub material: String,
    pub quantity: f64,
}

/// Signed running totals, in order of first appearance of each material.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StockLedger {
    lines: Vec<StockLine>,
}

impl StockLedger {
    fn add(&mut self, material: &str, delta: f64) {
        let key = material.trim();
        if key.is_empty() {
            return;
        }
        match self.lines.iter_mut().find(|l| l.material == key) {
            Some(line) => line.quantity += delta,
            None => self.lines.push(StockLine {
                material: key.to_string(),
                quantity: delta,
            }),
        }
    }

    /// Balance for a material; materials never seen are at zero.
    pub fn get(&self, material: &str) -> f64 {
        let key = material.trim();
        self.lines
            .iter()
            .find(|l| l.material == key)
            .map(|l| l.quantity)
            .unwrap_or(0.0)
    }

    pub fn lines(&self) -> &[StockLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Ascending by quantity, lowest stock first. Ties keep ledger order.
    pub fn sorted_by_quantity(&self) -> Vec<StockLine> {
        let mut out = self.lines.clone();
        out.sort_by(|a, b| a.quantity.total_cmp(&b.quantity));
        out
    }

    pub fn sorted_by_name(&self) -> Vec<StockLine> {
        let mut out = self.lines.clone();
        out.sort_by(|a, b| a.material.to_lowercase().cmp(&b.material.to_lowercase()));
        out
    }

    /// Every line whose material name contains `needle`.
    pub fn matching(&self, needle: &str) -> Vec<StockLine> {
        self.lines
            .iter()
            .filter(|l| l.material.contains(needle))
            .cloned()
            .collect()
    }

    pub fn first_matching(&self, needle: &str) -> Option<&StockLine> {
        self.lines.iter().find(|l| l.material.contains(needle))
    }
}

/// Fold inward rows (+) and consumption rows (-) into a ledger.
pub fn compute_stock(inventory: &[InventoryEntry], work_logs: &[WorkLog]) -> StockLedger {
    let mut ledger = StockLedger::default();

    for row in inventory {
        ledger.add(&row.material, row.qty);
    }
    for row in work_logs {
        ledger.add(&row.material, -row.qty);
    }

    ledger
}

pub fn load_inventory(store: &mut impl TabularStore) -> AppResult<Vec<InventoryEntry>> {
    Ok(store
        .fetch(Sheet::Inventory)?
        .iter()
        .map(InventoryEntry::from_record)
        .collect())
}

pub fn load_work_logs(store: &mut impl TabularStore) -> AppResult<Vec<WorkLog>> {
    Ok(store
        .fetch(Sheet::WorkLogs)?
        .iter()
        .map(WorkLog::from_record)
        .collect())
}

pub fn load_ledger(store: &mut impl TabularStore) -> AppResult<StockLedger> {
    let inventory = load_inventory(store)?;
    let logs = load_work_logs(store)?;
    Ok(compute_stock(&inventory, &logs))
}
