// src/export/model.rs

use crate::store::Record;
use crate::utils::date::parse_date;
use chrono::NaiveDate;

/// A sheet flattened for the writers: header row plus string cells.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub records: Vec<Record>,
}

impl ExportTable {
    /// Cells follow `headers`; a record lacking a column gets a blank cell.
    pub fn from_records(headers: Vec<String>, records: Vec<Record>) -> Self {
        let rows = records
            .iter()
            .map(|r| headers.iter().map(|h| r.get(h).to_string()).collect())
            .collect();
        Self {
            headers,
            rows,
            records,
        }
    }

    pub fn header_refs(&self) -> Vec<&str> {
        self.headers.iter().map(String::as_str).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }
}

/// Keep rows whose `date` cell falls inside the inclusive bounds.
/// Rows with an unreadable date are dropped once a range is given.
pub fn records_in_range(records: Vec<Record>, bounds: Option<(NaiveDate, NaiveDate)>) -> Vec<Record> {
    let Some((start, end)) = bounds else {
        return records;
    };
    records
        .into_iter()
        .filter(|r| parse_date(r.get("date")).is_some_and(|d| d >= start && d <= end))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(date: &str) -> Record {
        Record::new().with("id", date).with("date", date)
    }

    #[test]
    fn missing_cells_export_blank() {
        let t = ExportTable::from_records(
            vec!["id".into(), "site".into()],
            vec![Record::new().with("id", "a")],
        );
        assert_eq!(t.rows, vec![vec!["a".to_string(), String::new()]]);
    }

    #[test]
    fn range_is_inclusive_and_skips_bad_dates() {
        let d = |s| NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap();
        let kept = records_in_range(
            vec![rec("2025-08-31"), rec("2025-09-01"), rec("2025-09-30"), rec("")],
            Some((d("2025-09-01"), d("2025-09-30"))),
        );
        let ids: Vec<_> = kept.iter().map(|r| r.get("id").to_string()).collect();
        assert_eq!(ids, vec!["2025-09-01", "2025-09-30"]);
    }
}
