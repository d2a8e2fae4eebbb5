use super::geo::GeoPoint;
use super::{new_id, optional_cell, parse_sync, sync_cell};
use crate::store::Record;
use serde::Serialize;

/// A surveyed asset (pole, transformer, switch) and where it stands.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SurveyLog {
    pub id: String,
    pub date: String,
    pub asset_name: String,
    pub asset_code: String,
    pub gps: Option<GeoPoint>,
    pub switch_type: Option<String>,
    pub lineman: Option<String>,
    pub synced: bool,
}

impl SurveyLog {
    pub fn new(
        date: &str,
        asset_name: &str,
        asset_code: &str,
        gps: Option<GeoPoint>,
        switch_type: Option<String>,
        lineman: Option<String>,
    ) -> Self {
        Self {
            id: new_id(),
            date: date.to_string(),
            asset_name: asset_name.trim().to_string(),
            asset_code: asset_code.trim().to_string(),
            gps,
            switch_type,
            lineman,
            synced: false,
        }
    }

    pub fn from_record(r: &Record) -> Self {
        Self {
            id: r.get("id").to_string(),
            date: r.get("date").trim().to_string(),
            asset_name: r.get("asset_name").trim().to_string(),
            asset_code: r.get("asset_code").trim().to_string(),
            gps: GeoPoint::from_cells(r.get("latitude"), r.get("longitude")),
            switch_type: optional_cell(r.get("switch_type")),
            lineman: optional_cell(r.get("lineman")),
            synced: parse_sync(r.get("synced")),
        }
    }

    pub fn to_record(&self) -> Record {
        let (lat, lon) = GeoPoint::cells(self.gps.as_ref());
        Record::new()
            .with("id", &self.id)
            .with("date", &self.date)
            .with("asset_name", &self.asset_name)
            .with("asset_code", &self.asset_code)
            .with("latitude", lat)
            .with("longitude", lon)
            .with("switch_type", self.switch_type.clone().unwrap_or_default())
            .with("lineman", self.lineman.clone().unwrap_or_default())
            .with("synced", sync_cell(self.synced))
    }

    /// Case-insensitive, whitespace-tolerant asset code comparison.
    pub fn matches_code(&self, code: &str) -> bool {
        let code = code.trim();
        !code.is_empty() && self.asset_code.eq_ignore_ascii_case(code)
    }
}
