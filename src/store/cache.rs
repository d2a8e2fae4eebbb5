//! Read-through cache with one entry per sheet.
//!
//! A fetched sheet is served from memory until it is older than the TTL.
//! A write to a sheet drops that sheet's entry only.

use crate::errors::AppResult;
use crate::store::{DeleteReport, Record, Sheet, TabularStore};
use std::collections::HashMap;
use std::time::{Duration, Instant};

struct CacheEntry {
    fetched_at: Instant,
    rows: Vec<Record>,
}

pub struct CachedStore<S: TabularStore> {
    inner: S,
    ttl: Duration,
    entries: HashMap<Sheet, CacheEntry>,
}

impl<S: TabularStore> CachedStore<S> {
    /// A zero TTL disables caching.
    pub fn new(inner: S, ttl: Duration) -> Self {
        Self {
            inner,
            ttl,
            entries: HashMap::new(),
        }
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }

    pub fn invalidate(&mut self, sheet: Sheet) {
        self.entries.remove(&sheet);
    }

    fn fresh(&self, sheet: Sheet) -> Option<&Vec<Record>> {
        self.entries
            .get(&sheet)
            .filter(|e| e.fetched_at.elapsed() < self.ttl)
            .map(|e| &e.rows)
    }
}

impl<S: TabularStore> TabularStore for CachedStore<S> {
    fn columns(&mut self, sheet: Sheet) -> AppResult<Vec<String>> {
        self.inner.columns(sheet)
    }

    fn fetch(&mut self, sheet: Sheet) -> AppResult<Vec<Record>> {
        if let Some(rows) = self.fresh(sheet) {
            return Ok(rows.clone());
        }

        let rows = self.inner.fetch(sheet)?;
        if !self.ttl.is_zero() {
            self.entries.insert(
                sheet,
                CacheEntry {
                    fetched_at: Instant::now(),
                    rows: rows.clone(),
                },
            );
        }
        Ok(rows)
    }

    fn append_rows(&mut self, sheet: Sheet, rows: &[Record]) -> AppResult<()> {
        self.invalidate(sheet);
        self.inner.append_rows(sheet, rows)
    }

    fn find_by_id(&mut self, sheet: Sheet, id: &str) -> AppResult<Vec<Record>> {
        self.inner.find_by_id(sheet, id)
    }

    fn update_columns(
        &mut self,
        sheet: Sheet,
        id: &str,
        changes: &[(String, String)],
    ) -> AppResult<()> {
        self.invalidate(sheet);
        self.inner.update_columns(sheet, id, changes)
    }

    fn delete_rows(&mut self, sheet: Sheet, ids: &[String]) -> AppResult<DeleteReport> {
        self.invalidate(sheet);
        self.inner.delete_rows(sheet, ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::initialize::init_db;
    use crate::db::pool::DbPool;
    use crate::store::SqliteStore;

    /// Counts how often each sheet is actually read from SQLite.
    struct CountingStore {
        inner: SqliteStore,
        fetches: HashMap<Sheet, usize>,
    }

    impl CountingStore {
        fn new() -> Self {
            let pool = DbPool::in_memory().unwrap();
            init_db(&pool.conn).unwrap();
            Self {
                inner: SqliteStore::new(pool),
                fetches: HashMap::new(),
            }
        }

        fn count(&self, sheet: Sheet) -> usize {
            self.fetches.get(&sheet).copied().unwrap_or(0)
        }
    }

    impl TabularStore for CountingStore {
        fn columns(&mut self, sheet: Sheet) -> AppResult<Vec<String>> {
            self.inner.columns(sheet)
        }
        fn fetch(&mut self, sheet: Sheet) -> AppResult<Vec<Record>> {
            *self.fetches.entry(sheet).or_insert(0) += 1;
            self.inner.fetch(sheet)
        }
        fn append_rows(&mut self, sheet: Sheet, rows: &[Record]) -> AppResult<()> {
            self.inner.append_rows(sheet, rows)
        }
        fn find_by_id(&mut self, sheet: Sheet, id: &str) -> AppResult<Vec<Record>> {
            self.inner.find_by_id(sheet, id)
        }
        fn update_columns(
            &mut self,
            sheet: Sheet,
            id: &str,
            changes: &[(String, String)],
        ) -> AppResult<()> {
            self.inner.update_columns(sheet, id, changes)
        }
        fn delete_rows(&mut self, sheet: Sheet, ids: &[String]) -> AppResult<DeleteReport> {
            self.inner.delete_rows(sheet, ids)
        }
    }

    fn worker(name: &str) -> Record {
        Record::new().with("name", name).with("synced", "FALSE")
    }

    #[test]
    fn repeated_reads_hit_the_cache() {
        let mut c = CachedStore::new(CountingStore::new(), Duration::from_secs(60));
        c.fetch(Sheet::Workers).unwrap();
        c.fetch(Sheet::Workers).unwrap();
        assert_eq!(c.inner().count(Sheet::Workers), 1);
    }

    #[test]
    fn write_invalidates_only_its_sheet() {
        let mut c = CachedStore::new(CountingStore::new(), Duration::from_secs(60));
        c.fetch(Sheet::Workers).unwrap();
        c.fetch(Sheet::Inventory).unwrap();

        c.append_row(Sheet::Workers, &worker("Ravi")).unwrap();

        let workers = c.fetch(Sheet::Workers).unwrap();
        c.fetch(Sheet::Inventory).unwrap();

        assert_eq!(workers.len(), 1);
        assert_eq!(c.inner().count(Sheet::Workers), 2);
        assert_eq!(c.inner().count(Sheet::Inventory), 1);
    }

    #[test]
    fn zero_ttl_always_reads_through() {
        let mut c = CachedStore::new(CountingStore::new(), Duration::ZERO);
        c.fetch(Sheet::Settings).unwrap();
        c.fetch(Sheet::Settings).unwrap();
        assert_eq!(c.inner().count(Sheet::Settings), 2);
    }

    #[test]
    fn edit_is_visible_after_refetch() {
        let mut c = CachedStore::new(CountingStore::new(), Duration::from_secs(60));
        let row = Record::new()
            .with("id", "s1")
            .with("asset_name", "Pole 4")
            .with("asset_code", "DTR-4");
        c.append_row(Sheet::SurveyLogs, &row).unwrap();
        c.fetch(Sheet::SurveyLogs).unwrap();

        c.update_columns(
            Sheet::SurveyLogs,
            "s1",
            &[("asset_name".to_string(), "Pole 4A".to_string())],
        )
        .unwrap();

        let rows = c.fetch(Sheet::SurveyLogs).unwrap();
        assert_eq!(rows[0].get("asset_name"), "Pole 4A");
        assert_eq!(rows[0].get("asset_code"), "DTR-4");
    }
}
