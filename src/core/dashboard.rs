//! Dashboard figures: stock tickers, installation counts and alerts.

use crate::config::Config;
use crate::core::alerts::{LowStockAlert, low_stock_alerts};
use crate::core::consolidate::consolidate;
use crate::core::install::{CABLE, LUGS};
use crate::core::ledger::{compute_stock, load_inventory, load_work_logs};
use crate::errors::AppResult;
use crate::models::inventory::InventoryEntry;
use crate::models::work_log::WorkLog;
use crate::store::TabularStore;
use serde::Serialize;

const BOX_PATTERN: &str = "Box";
const BOX_FALLBACK_LABEL: &str = "Meter Box";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ticker {
    pub label: String,
    pub quantity: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSummary {
    pub tickers: Vec<Ticker>,
    pub installations_total: usize,
    pub installations_today: usize,
    /// (worker, installations) by count, highest first.
    pub per_worker: Vec<(String, usize)>,
    pub inward_entries: usize,
    pub inward_quantity: f64,
    pub alerts: Vec<LowStockAlert>,
}

/// Pure aggregation over already fetched rows.
pub fn summarize(
    inventory: &[InventoryEntry],
    logs: &[WorkLog],
    cfg: &Config,
    today: &str,
) -> DashboardSummary {
    let ledger = compute_stock(inventory, logs);

    let box_ticker = match ledger.first_matching(BOX_PATTERN) {
        Some(line) => Ticker {
            label: line.material.clone(),
            quantity: line.quantity,
        },
        None => Ticker {
            label: BOX_FALLBACK_LABEL.to_string(),
            quantity: 0.0,
        },
    };
    let tickers = vec![
        Ticker {
            label: CABLE.to_string(),
            quantity: ledger.get(CABLE),
        },
        Ticker {
            label: LUGS.to_string(),
            quantity: ledger.get(LUGS),
        },
        box_ticker,
    ];

    let groups = consolidate(logs);
    let installations_today = groups.iter().filter(|g| g.key.date == today).count();

    let mut per_worker: Vec<(String, usize)> = Vec::new();
    for g in &groups {
        match per_worker.iter_mut().find(|(w, _)| *w == g.key.worker) {
            Some((_, n)) => *n += 1,
            None => per_worker.push((g.key.worker.clone(), 1)),
        }
    }
    per_worker.sort_by(|a, b| b.1.cmp(&a.1));

    DashboardSummary {
        tickers,
        installations_total: groups.len(),
        installations_today,
        per_worker,
        inward_entries: inventory.len(),
        inward_quantity: inventory.iter().map(|e| e.qty).sum(),
        alerts: low_stock_alerts(&ledger, &cfg.low_stock),
    }
}

pub fn load_summary(
    store: &mut impl TabularStore,
    cfg: &Config,
    today: &str,
) -> AppResult<DashboardSummary> {
    let inventory = load_inventory(store)?;
    let logs = load_work_logs(store)?;
    Ok(summarize(&inventory, &logs, cfg, today))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn used(date: &str, dtr: &str, worker: &str, material: &str, qty: f64) -> WorkLog {
        WorkLog::for_event("e", date, "1 Phase", dtr, "North", worker, None, material, qty)
    }

    #[test]
    fn counts_installations_not_rows() {
        let inv = vec![
            InventoryEntry::inward("2025-09-01", "Cable", 500.0),
            InventoryEntry::inward("2025-09-01", "1 Phase Box", 20.0),
        ];
        let logs = vec![
            used("2025-09-01", "DTR-1", "Ravi", "1 Phase Box", 1.0),
            used("2025-09-01", "DTR-1", "Ravi", "Cable", 10.0),
            used("2025-09-02", "DTR-2", "Asha", "1 Phase Box", 1.0),
            used("2025-09-02", "DTR-3", "Asha", "1 Phase Box", 1.0),
        ];

        let s = summarize(&inv, &logs, &Config::default(), "2025-09-02");

        assert_eq!(s.installations_total, 3);
        assert_eq!(s.installations_today, 2);
        assert_eq!(s.per_worker[0], ("Asha".to_string(), 2));
        assert_eq!(s.inward_entries, 2);
        assert_eq!(s.inward_quantity, 520.0);

        assert_eq!(s.tickers[0].quantity, 490.0);
        assert_eq!(s.tickers[2].label, "1 Phase Box");
        assert_eq!(s.tickers[2].quantity, 17.0);
    }

    #[test]
    fn empty_store_uses_fallback_box_label() {
        let s = summarize(&[], &[], &Config::default(), "2025-09-02");
        assert_eq!(s.tickers[2].label, "Meter Box");
        assert_eq!(s.installations_total, 0);
        assert!(s.alerts.is_empty());
    }
}
