//! Record management: filtered listing, field edits and deletes on any sheet.

use crate::core::validate_quantity;
use crate::errors::{AppError, AppResult};
use crate::models::work_log::WorkLog;
use crate::store::{DeleteReport, Record, Sheet, TabularStore};
use crate::utils::date::parse_date;

/// Multi-select filters; an empty list means "any".
#[derive(Debug, Clone, Default)]
pub struct RecordFilter {
    pub workers: Vec<String>,
    pub materials: Vec<String>,
    pub sites: Vec<String>,
    pub search: Option<String>,
}

fn selected(choices: &[String], value: &str) -> bool {
    choices.is_empty() || choices.iter().any(|c| c.trim() == value)
}

impl RecordFilter {
    pub fn is_empty(&self) -> bool {
        self.workers.is_empty()
            && self.materials.is_empty()
            && self.sites.is_empty()
            && self.search.as_deref().is_none_or(|s| s.trim().is_empty())
    }

    /// Worker, material and site are membership tests; the search text is a
    /// case-insensitive substring of the DTR code or the site.
    pub fn matches_work_log(&self, log: &WorkLog) -> bool {
        if !selected(&self.workers, &log.worker)
            || !selected(&self.materials, &log.material)
            || !selected(&self.sites, &log.site)
        {
            return false;
        }

        match self.search.as_deref().map(str::trim) {
            Some(s) if !s.is_empty() => {
                let s = s.to_lowercase();
                log.dtr_code.to_lowercase().contains(&s) || log.site.to_lowercase().contains(&s)
            }
            _ => true,
        }
    }

    /// Other sheets only honour the search text, across every cell.
    pub fn matches_record(&self, sheet: Sheet, record: &Record) -> bool {
        if sheet == Sheet::WorkLogs {
            return self.matches_work_log(&WorkLog::from_record(record));
        }
        match self.search.as_deref().map(str::trim) {
            Some(s) if !s.is_empty() => record.contains_text(s),
            _ => true,
        }
    }
}

pub fn fetch_filtered(
    store: &mut impl TabularStore,
    sheet: Sheet,
    filter: &RecordFilter,
) -> AppResult<Vec<Record>> {
    Ok(store
        .fetch(sheet)?
        .into_iter()
        .filter(|r| filter.matches_record(sheet, r))
        .collect())
}

/// Parse `column=value` pairs from the command line.
pub fn parse_assignments(raw: &[String]) -> AppResult<Vec<(String, String)>> {
    raw.iter()
        .map(|a| {
            let (c, v) = a
                .split_once('=')
                .ok_or_else(|| AppError::InvalidAssignment(a.clone()))?;
            let c = c.trim();
            if c.is_empty() {
                return Err(AppError::InvalidAssignment(a.clone()));
            }
            Ok((c.to_string(), v.trim().to_string()))
        })
        .collect()
}

/// Values typed into known columns must have the right shape.
fn check_value(column: &str, value: &str) -> AppResult<()> {
    match column {
        "qty" => {
            let q = value
                .parse::<f64>()
                .map_err(|_| AppError::InvalidQuantity(value.to_string()))?;
            validate_quantity("qty", q)?;
        }
        "date" => {
            parse_date(value).ok_or_else(|| AppError::InvalidDate(value.to_string()))?;
        }
        _ => {}
    }
    Ok(())
}

/// Patch the named columns of one row and return the row as stored now.
pub fn edit_record(
    store: &mut impl TabularStore,
    sheet: Sheet,
    id: &str,
    changes: &[(String, String)],
) -> AppResult<Record> {
    for (c, v) in changes {
        check_value(c, v)?;
    }

    store.update_columns(sheet, id, changes)?;

    store
        .fetch(sheet)?
        .into_iter()
        .find(|r| r.get(sheet.id_column()) == id)
        .ok_or_else(|| AppError::RowNotFound {
            table: sheet.label().to_string(),
            id: id.to_string(),
        })
}

pub fn delete_records(
    store: &mut impl TabularStore,
    sheet: Sheet,
    ids: &[String],
) -> AppResult<DeleteReport> {
    let ids: Vec<String> = ids
        .iter()
        .map(|i| i.trim().to_string())
        .filter(|i| !i.is_empty())
        .collect();
    if ids.is_empty() {
        return Err(AppError::EmptyField("id"));
    }
    store.delete_rows(sheet, &ids)
}
