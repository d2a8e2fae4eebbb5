//! Installation logging: one installation becomes one to three
//! consumption rows written in a single batch.

use crate::core::validate_quantity;
use crate::errors::AppResult;
use crate::models::geo::GeoPoint;
use crate::models::lookups::{Lookups, require_known};
use crate::models::new_id;
use crate::models::work_log::WorkLog;
use crate::store::{Record, Sheet, TabularStore};
use crate::utils::formatting::format_quantity;
use chrono::NaiveDate;

pub const CABLE: &str = "Cable";
pub const LUGS: &str = "Lugs";

/// Material name of the box that comes with every meter type.
pub fn box_material(meter_type: &str) -> String {
    format!("{} Box", meter_type.trim())
}

#[derive(Debug, Clone)]
pub struct InstallRequest {
    pub date: NaiveDate,
    pub meter_type: String,
    pub site: String,
    pub dtr_code: String,
    pub worker: String,
    pub cable: f64,
    pub lugs: f64,
    pub gps: Option<GeoPoint>,
}

/// Expand a request into its consumption rows.
///
/// The box row is always present with quantity 1. Cable and lugs rows are
/// only added for quantities above zero.
pub fn build_rows(req: &InstallRequest) -> AppResult<Vec<WorkLog>> {
    let cable = validate_quantity("cable", req.cable)?;
    let lugs = validate_quantity("lugs", req.lugs)?;

    let event_id = new_id();
    let date = req.date.format("%Y-%m-%d").to_string();
    let row = |material: &str, qty: f64| {
        WorkLog::for_event(
            &event_id,
            &date,
            req.meter_type.trim(),
            req.dtr_code.trim(),
            req.site.trim(),
            req.worker.trim(),
            req.gps,
            material,
            qty,
        )
    };

    let mut rows = vec![row(&box_material(&req.meter_type), 1.0)];
    if cable > 0.0 {
        rows.push(row(CABLE, cable));
    }
    if lugs > 0.0 {
        rows.push(row(LUGS, lugs));
    }
    Ok(rows)
}

/// Validate against the lookup lists, then append the rows as one batch.
pub fn submit(
    store: &mut impl TabularStore,
    lookups: &Lookups,
    req: &InstallRequest,
) -> AppResult<Vec<WorkLog>> {
    require_known("meter type", &req.meter_type, &lookups.meter_types)?;
    require_known("site", &req.site, &lookups.sites)?;
    require_known("worker", &req.worker, &lookups.workers)?;

    let rows = build_rows(req)?;
    let records: Vec<Record> = rows.iter().map(WorkLog::to_record).collect();
    store.append_rows(Sheet::WorkLogs, &records)?;

    Ok(rows)
}

/// "1 × 1 Phase Box, 10 × Cable" style receipt.
pub fn describe(rows: &[WorkLog]) -> String {
    rows.iter()
        .map(|r| format!("{} × {}", format_quantity(r.qty), r.material))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::core::ledger::load_work_logs;
    use crate::core::settings::load_lookups;
    use crate::core::test_support::memory_store;
    use crate::errors::AppError;

    fn request(meter_type: &str, cable: f64, lugs: f64) -> InstallRequest {
        InstallRequest {
            date: NaiveDate::from_ymd_opt(2025, 9, 1).unwrap(),
            meter_type: meter_type.to_string(),
            site: "Default Site".to_string(),
            dtr_code: "DTR-114".to_string(),
            worker: "General".to_string(),
            cable,
            lugs,
            gps: None,
        }
    }

    #[test]
    fn cable_without_lugs_gives_two_rows() {
        let rows = build_rows(&request("1 Phase", 10.0, 0.0)).unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].material, "1 Phase Box");
        assert_eq!(rows[0].qty, 1.0);
        assert_eq!(rows[1].material, "Cable");
        assert_eq!(rows[1].qty, 10.0);
        assert!(rows.iter().all(|r| r.material != "Lugs"));
    }

    #[test]
    fn no_extras_gives_box_only() {
        let rows = build_rows(&request("3 Phase", 0.0, 0.0)).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].material, "3 Phase Box");
    }

    #[test]
    fn rows_share_event_but_not_id() {
        let rows = build_rows(&request("1 Phase", 4.0, 2.0)).unwrap();
        assert_eq!(rows.len(), 3);
        assert!(rows.iter().all(|r| r.event_id == rows[0].event_id));
        assert!(rows.iter().all(|r| r.dtr_code == "DTR-114" && r.date == "2025-09-01"));
        assert_ne!(rows[0].id, rows[1].id);
        assert_ne!(rows[1].id, rows[2].id);
    }

    #[test]
    fn negative_quantity_is_rejected() {
        assert!(matches!(
            build_rows(&request("1 Phase", -1.0, 0.0)),
            Err(AppError::InvalidQuantity(_))
        ));
    }

    #[test]
    fn submit_writes_batch_and_checks_lookups() {
        let mut store = memory_store();
        let lookups = load_lookups(&mut store, &Config::default()).unwrap();

        let written = submit(&mut store, &lookups, &request("1 Phase", 10.0, 4.0)).unwrap();
        assert_eq!(written.len(), 3);
        assert_eq!(load_work_logs(&mut store).unwrap().len(), 3);

        let err = submit(&mut store, &lookups, &request("2 Phase", 0.0, 0.0)).unwrap_err();
        assert!(matches!(err, AppError::UnknownLookup { .. }));
        assert_eq!(load_work_logs(&mut store).unwrap().len(), 3);
    }

    #[test]
    fn receipt_lists_every_row() {
        let rows = build_rows(&request("1 Phase", 10.0, 0.0)).unwrap();
        assert_eq!(describe(&rows), "1 × 1 Phase Box, 10 × Cable");
    }
}
