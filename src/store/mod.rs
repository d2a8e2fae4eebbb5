//! Tabular store: named sheets of rows whose columns are defined by a header.
//!
//! Every sheet is read whole and written through a handful of row-level
//! operations. `SqliteStore` is the system of record, `CachedStore` sits in
//! front of any store and keeps a short-lived copy of each sheet.

pub mod cache;
pub mod record;
pub mod sqlite;

pub use cache::CachedStore;
pub use record::Record;
pub use sqlite::SqliteStore;

use crate::errors::{AppError, AppResult};
use clap::ValueEnum;
use serde::Serialize;
use std::fmt;

/// The sheets known to the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize)]
pub enum Sheet {
    WorkLogs,
    Inventory,
    Workers,
    Settings,
    SurveyLogs,
}

impl Sheet {
    pub const ALL: [Sheet; 5] = [
        Sheet::WorkLogs,
        Sheet::Inventory,
        Sheet::Workers,
        Sheet::Settings,
        Sheet::SurveyLogs,
    ];

    /// Name of the backing SQL table.
    pub fn table_name(&self) -> &'static str {
        match self {
            Sheet::WorkLogs => "work_logs",
            Sheet::Inventory => "inventory",
            Sheet::Workers => "workers",
            Sheet::Settings => "settings",
            Sheet::SurveyLogs => "survey_logs",
        }
    }

    /// Column holding the row identifier.
    pub fn id_column(&self) -> &'static str {
        match self {
            Sheet::Workers => "name",
            _ => "id",
        }
    }

    /// Human label, as shown in titles and the audit log.
    pub fn label(&self) -> &'static str {
        match self {
            Sheet::WorkLogs => "WorkLogs",
            Sheet::Inventory => "Inventory",
            Sheet::Workers => "Workers",
            Sheet::Settings => "Settings",
            Sheet::SurveyLogs => "SurveyLogs",
        }
    }

    pub fn has_sync_flag(&self) -> bool {
        !matches!(self, Sheet::Settings)
    }

    pub fn from_name(name: &str) -> AppResult<Self> {
        Sheet::ALL
            .into_iter()
            .find(|s| s.table_name() == name || s.label().eq_ignore_ascii_case(name))
            .ok_or_else(|| AppError::UnknownTable(name.to_string()))
    }
}

impl fmt::Display for Sheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of a multi-row delete.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct DeleteReport {
    pub deleted: Vec<String>,
    pub missing: Vec<String>,
}

/// Row-level access to the sheets.
///
/// Reads return errors instead of empty sheets so callers can tell a
/// confirmed-empty sheet from a failed fetch.
pub trait TabularStore {
    /// Header row of a sheet.
    fn columns(&mut self, sheet: Sheet) -> AppResult<Vec<String>>;

    /// Every row of a sheet, in insertion order.
    fn fetch(&mut self, sheet: Sheet) -> AppResult<Vec<Record>>;

    /// Append a batch of rows. Either every row lands or none does.
    fn append_rows(&mut self, sheet: Sheet, rows: &[Record]) -> AppResult<()>;

    fn append_row(&mut self, sheet: Sheet, row: &Record) -> AppResult<()> {
        self.append_rows(sheet, std::slice::from_ref(row))
    }

    fn find_by_id(&mut self, sheet: Sheet, id: &str) -> AppResult<Vec<Record>>;

    /// Patch the named columns of the row `id`, leaving the others untouched.
    fn update_columns(&mut self, sheet: Sheet, id: &str, changes: &[(String, String)])
    -> AppResult<()>;

    /// Delete rows by identifier. Unknown ids are reported, not fatal.
    fn delete_rows(&mut self, sheet: Sheet, ids: &[String]) -> AppResult<DeleteReport>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sheet_lookup_accepts_table_and_label() {
        assert_eq!(Sheet::from_name("work_logs").unwrap(), Sheet::WorkLogs);
        assert_eq!(Sheet::from_name("surveylogs").unwrap(), Sheet::SurveyLogs);
        assert!(matches!(
            Sheet::from_name("payroll"),
            Err(AppError::UnknownTable(_))
        ));
    }

    #[test]
    fn workers_are_keyed_by_name() {
        assert_eq!(Sheet::Workers.id_column(), "name");
        assert_eq!(Sheet::Inventory.id_column(), "id");
    }
}
