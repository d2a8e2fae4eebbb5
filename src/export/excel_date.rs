// src/export/excel_date.rs

use chrono::NaiveDate;

/// Excel serial number of a `YYYY-MM-DD` cell, if it is one.
pub(crate) fn date_to_excel_serial(s: &str) -> Option<f64> {
    let d = NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()?;
    let epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?;
    Some((d - epoch).num_days() as f64)
}
