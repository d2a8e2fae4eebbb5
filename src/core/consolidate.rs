//! Display-only folding of work-log rows: one line per installation
//! (date, DTR code, worker) listing every material it consumed.

use crate::core::ledger::load_work_logs;
use crate::errors::{AppError, AppResult};
use crate::models::work_log::WorkLog;
use crate::store::{DeleteReport, Sheet, TabularStore};
use crate::utils::formatting::format_quantity;
use serde::Serialize;
use std::fmt;

/// Identity of one installation. Fields are compared one by one, so free
/// text in a DTR code or worker name cannot make two installations collide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupKey {
    pub date: String,
    pub dtr_code: String,
    pub worker: String,
}

impl GroupKey {
    pub fn new(date: &str, dtr_code: &str, worker: &str) -> Self {
        Self {
            date: date.trim().to_string(),
            dtr_code: dtr_code.trim().to_string(),
            worker: worker.trim().to_string(),
        }
    }

    pub fn of(log: &WorkLog) -> Self {
        Self::new(&log.date, &log.dtr_code, &log.worker)
    }
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {} / {}", self.date, self.dtr_code, self.worker)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogGroup {
    pub key: GroupKey,
    pub site: String,
    pub materials: String,
    pub total_qty: f64,
    pub ids: Vec<String>,
}

/// Groups in order of first appearance.
pub fn consolidate(logs: &[WorkLog]) -> Vec<LogGroup> {
    let mut groups: Vec<LogGroup> = Vec::new();

    for log in logs {
        let key = GroupKey::of(log);
        let item = format!("{} x{}", log.material, format_quantity(log.qty));

        match groups.iter_mut().find(|g| g.key == key) {
            Some(g) => {
                g.materials.push_str(", ");
                g.materials.push_str(&item);
                g.total_qty += log.qty;
                g.ids.push(log.id.clone());
            }
            None => groups.push(LogGroup {
                key,
                site: log.site.clone(),
                materials: item,
                total_qty: log.qty,
                ids: vec![log.id.clone()],
            }),
        }
    }

    groups
}

/// Delete every row of the group `key` and nothing else.
pub fn delete_group(store: &mut impl TabularStore, key: &GroupKey) -> AppResult<DeleteReport> {
    let logs = load_work_logs(store)?;

    let group = consolidate(&logs)
        .into_iter()
        .find(|g| g.key == *key)
        .ok_or_else(|| AppError::RowNotFound {
            table: Sheet::WorkLogs.label().to_string(),
            id: key.to_string(),
        })?;

    store.delete_rows(Sheet::WorkLogs, &group.ids)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::test_support::memory_store;
    use crate::store::Record;

    fn log(date: &str, dtr: &str, worker: &str, material: &str, qty: f64) -> WorkLog {
        WorkLog::for_event("e", date, "1 Phase", dtr, "North", worker, None, material, qty)
    }

    #[test]
    fn rows_of_one_installation_fold_together() {
        let logs = [
            log("2025-09-01", "DTR-1", "Ravi", "1 Phase Box", 1.0),
            log("2025-09-01", "DTR-2", "Ravi", "1 Phase Box", 1.0),
            log("2025-09-01", "DTR-1", "Ravi", "Cable", 10.0),
            log("2025-09-02", "DTR-1", "Ravi", "Lugs", 4.0),
        ];

        let groups = consolidate(&logs);

        assert_eq!(groups.len(), 3);
        assert_eq!(groups[0].key, GroupKey::new("2025-09-01", "DTR-1", "Ravi"));
        assert_eq!(groups[0].materials, "1 Phase Box x1, Cable x10");
        assert_eq!(groups[0].ids, vec![logs[0].id.clone(), logs[2].id.clone()]);
        assert_eq!(groups[2].materials, "Lugs x4");
    }

    #[test]
    fn deleting_group_removes_exactly_its_rows() {
        let mut store = memory_store();
        let logs = [
            log("2025-09-01", "DTR-1", "Ravi", "1 Phase Box", 1.0),
            log("2025-09-01", "DTR-1", "Ravi", "Cable", 10.0),
            log("2025-09-01", "DTR-1", "Asha", "1 Phase Box", 1.0),
            log("2025-09-02", "DTR-1", "Ravi", "1 Phase Box", 1.0),
        ];
        let records: Vec<Record> = logs.iter().map(WorkLog::to_record).collect();
        store.append_rows(Sheet::WorkLogs, &records).unwrap();

        let report = delete_group(&mut store, &GroupKey::new("2025-09-01", "DTR-1", "Ravi")).unwrap();
        assert_eq!(report.deleted.len(), 2);

        let left: Vec<String> = load_work_logs(&mut store)
            .unwrap()
            .into_iter()
            .map(|l| l.id)
            .collect();
        assert_eq!(left, vec![logs[2].id.clone(), logs[3].id.clone()]);
    }

    #[test]
    fn unknown_group_is_not_found() {
        let mut store = memory_store();
        assert!(matches!(
            delete_group(&mut store, &GroupKey::new("2025-01-01", "X", "Y")),
            Err(AppError::RowNotFound { .. })
        ));
    }

    #[test]
    fn separators_inside_fields_do_not_merge_installations() {
        let mut store = memory_store();
        let logs = [
            log("2025-09-01", "A|B", "C", "Cable", 1.0),
            log("2025-09-01", "A", "B|C", "Lugs", 2.0),
        ];
        let records: Vec<Record> = logs.iter().map(WorkLog::to_record).collect();
        store.append_rows(Sheet::WorkLogs, &records).unwrap();

        let groups = consolidate(&logs);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].materials, "Cable x1");
        assert_eq!(groups[1].materials, "Lugs x2");

        let report = delete_group(&mut store, &GroupKey::new("2025-09-01", "A|B", "C")).unwrap();
        assert_eq!(report.deleted, vec![logs[0].id.clone()]);

        let left: Vec<String> = load_work_logs(&mut store)
            .unwrap()
            .into_iter()
            .map(|l| l.id)
            .collect();
        assert_eq!(left, vec![logs[1].id.clone()]);
    }
}
