use super::geo::GeoPoint;
use super::{new_id, optional_cell, parse_sync, sync_cell};
use crate::store::Record;
use crate::utils::formatting::{format_quantity, parse_quantity};
use serde::Serialize;

/// One material consumed at an installation point.
///
/// Rows written for the same installation share `event_id` and every
/// non-id field except `material` and `qty`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkLog {
    pub id: String,
    pub event_id: String,
    pub date: String,
    pub meter_type: String,
    pub dtr_code: String,
    pub site: String,
    pub worker: String,
    pub material: String,
    pub qty: f64,
    pub gps: Option<GeoPoint>,
    pub synced: bool,
}

impl WorkLog {
    /// The fields shared by every row of one installation event.
    #[allow(clippy::too_many_arguments)]
    pub fn for_event(
        event_id: &str,
        date: &str,
        meter_type: &str,
        dtr_code: &str,
        site: &str,
        worker: &str,
        gps: Option<GeoPoint>,
        material: &str,
        qty: f64,
    ) -> Self {
        Self {
            id: new_id(),
            event_id: event_id.to_string(),
            date: date.to_string(),
            meter_type: meter_type.to_string(),
            dtr_code: dtr_code.to_string(),
            site: site.to_string(),
            worker: worker.to_string(),
            material: material.to_string(),
            qty,
            gps,
            synced: false,
        }
    }

    pub fn from_record(r: &Record) -> Self {
        Self {
            id: r.get("id").to_string(),
            event_id: r.get("event_id").to_string(),
            date: r.get("date").trim().to_string(),
            meter_type: r.get("meter_type").trim().to_string(),
            dtr_code: r.get("dtr_code").trim().to_string(),
            site: r.get("site").trim().to_string(),
            worker: r.get("worker").trim().to_string(),
            material: r.get("material").trim().to_string(),
            qty: parse_quantity(r.get("qty")),
            gps: GeoPoint::from_cells(r.get("latitude"), r.get("longitude")),
            synced: parse_sync(r.get("synced")),
        }
    }

    pub fn to_record(&self) -> Record {
        let (lat, lon) = GeoPoint::cells(self.gps.as_ref());
        Record::new()
            .with("id", &self.id)
            .with("event_id", &self.event_id)
            .with("date", &self.date)
            .with("meter_type", &self.meter_type)
            .with("dtr_code", &self.dtr_code)
            .with("site", &self.site)
            .with("worker", &self.worker)
            .with("material", &self.material)
            .with("qty", format_quantity(self.qty))
            .with("latitude", lat)
            .with("longitude", lon)
            .with("synced", sync_cell(self.synced))
    }

    /// Asset identifier used for joins, if any.
    pub fn asset_code(&self) -> Option<String> {
        optional_cell(&self.dtr_code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legacy_rows_without_optional_columns_load() {
        let r = Record::new()
            .with("id", "x1")
            .with("date", "2025-09-01")
            .with("dtr_code", " DTR-9 ")
            .with("material", "Cable")
            .with("qty", "");
        let log = WorkLog::from_record(&r);
        assert_eq!(log.qty, 0.0);
        assert_eq!(log.dtr_code, "DTR-9");
        assert!(log.gps.is_none());
        assert!(!log.synced);
        assert_eq!(log.event_id, "");
    }

    #[test]
    fn record_round_trip_keeps_gps() {
        let gps = GeoPoint::new(12.97, 77.59).ok();
        let log = WorkLog::for_event(
            "e1", "2025-09-01", "1 Phase", "DTR-1", "North", "Ravi", gps, "Cable", 10.0,
        );
        let back = WorkLog::from_record(&log.to_record());
        assert_eq!(back, log);
    }
}
