//! Low-stock alerts.
//!
//! Rules match materials by substring. Every matching rule is checked on its
//! own, so a material hit by two patterns can raise two alerts.

use crate::config::StockThreshold;
use crate::core::ledger::StockLedger;
use crate::utils::formatting::format_quantity;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LowStockAlert {
    pub material: String,
    pub quantity: f64,
    pub pattern: String,
    pub threshold: f64,
}

impl fmt::Display for LowStockAlert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Low stock: {} at {} (threshold {} for '{}')",
            self.material,
            format_quantity(self.quantity),
            format_quantity(self.threshold),
            self.pattern
        )
    }
}

pub fn low_stock_alerts(ledger: &StockLedger, rules: &[StockThreshold]) -> Vec<LowStockAlert> {
    let mut out = Vec::new();

    for line in ledger.lines() {
        for rule in rules {
            if rule.pattern.is_empty() || !line.material.contains(&rule.pattern) {
                continue;
            }
            if line.quantity < rule.threshold {
                out.push(LowStockAlert {
                    material: line.material.clone(),
                    quantity: line.quantity,
                    pattern: rule.pattern.clone(),
                    threshold: rule.threshold,
                });
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ledger::compute_stock;
    use crate::models::inventory::InventoryEntry;

    fn ledger(items: &[(&str, f64)]) -> StockLedger {
        let inv: Vec<_> = items
            .iter()
            .map(|(m, q)| InventoryEntry::inward("2025-09-01", m, *q))
            .collect();
        compute_stock(&inv, &[])
    }

    fn rules() -> Vec<StockThreshold> {
        vec![
            StockThreshold::new("Cable", 100.0),
            StockThreshold::new("Box", 10.0),
        ]
    }

    #[test]
    fn fires_only_below_threshold() {
        let l = ledger(&[("Cable", 99.0), ("1 Phase Box", 10.0), ("3 Phase Box", 9.0)]);
        let alerts = low_stock_alerts(&l, &rules());

        let hit: Vec<_> = alerts.iter().map(|a| a.material.as_str()).collect();
        assert_eq!(hit, vec!["Cable", "3 Phase Box"]);
    }

    #[test]
    fn at_threshold_is_quiet() {
        let l = ledger(&[("Cable", 100.0)]);
        assert!(low_stock_alerts(&l, &rules()).is_empty());
    }

    #[test]
    fn unmatched_materials_never_alert() {
        let l = ledger(&[("Lugs", 0.0)]);
        assert!(low_stock_alerts(&l, &rules()).is_empty());
    }

    #[test]
    fn overlapping_patterns_each_report() {
        let l = ledger(&[("Cable Box", 5.0)]);
        let alerts = low_stock_alerts(&l, &rules());
        assert_eq!(alerts.len(), 2);
        assert!(alerts[0].to_string().contains("threshold 100 for 'Cable'"));
    }
}
