//! SQLite-backed sheets. Each sheet is one SQL table whose column list is the
//! header row.

use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::store::{DeleteReport, Record, Sheet, TabularStore};
use crate::utils::formatting::format_quantity;
use rusqlite::types::ValueRef;
use rusqlite::{Row, params_from_iter};

pub struct SqliteStore {
    pool: DbPool,
}

impl SqliteStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Borrow the underlying connection (audit log, stats).
    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    fn ensure_columns<'a>(
        &mut self,
        sheet: Sheet,
        requested: impl Iterator<Item = &'a str>,
    ) -> AppResult<Vec<String>> {
        let columns = self.columns(sheet)?;
        for c in requested {
            if !columns.iter().any(|k| k == c) {
                return Err(AppError::UnknownColumn {
                    table: sheet.label().to_string(),
                    column: c.to_string(),
                });
            }
        }
        Ok(columns)
    }
}

fn quote(ident: &str) -> String {
    format!("\"{}\"", ident.replace('"', "\"\""))
}

fn cell_text(value: ValueRef<'_>) -> String {
    match value {
        ValueRef::Null => String::new(),
        ValueRef::Integer(i) => i.to_string(),
        ValueRef::Real(f) => format_quantity(f),
        ValueRef::Text(t) | ValueRef::Blob(t) => String::from_utf8_lossy(t).into_owned(),
    }
}

fn map_record(row: &Row<'_>, names: &[String]) -> rusqlite::Result<Record> {
    let mut rec = Record::new();
    for (i, name) in names.iter().enumerate() {
        rec.set(name, cell_text(row.get_ref(i)?));
    }
    Ok(rec)
}

impl TabularStore for SqliteStore {
    fn columns(&mut self, sheet: Sheet) -> AppResult<Vec<String>> {
        let mut stmt = self
            .pool
            .conn
            .prepare(&format!("PRAGMA table_info('{}')", sheet.table_name()))?;
        let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

        let mut out = Vec::new();
        for c in cols {
            out.push(c?);
        }

        if out.is_empty() {
            return Err(AppError::UnknownTable(sheet.table_name().to_string()));
        }
        Ok(out)
    }

    fn fetch(&mut self, sheet: Sheet) -> AppResult<Vec<Record>> {
        let mut stmt = self.pool.conn.prepare(&format!(
            "SELECT * FROM {} ORDER BY rowid ASC",
            quote(sheet.table_name())
        ))?;
        let names: Vec<String> = stmt.column_names().iter().map(|s| s.to_string()).collect();

        let rows = stmt.query_map([], |row| map_record(row, &names))?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }

    fn append_rows(&mut self, sheet: Sheet, rows: &[Record]) -> AppResult<()> {
        if rows.is_empty() {
            return Ok(());
        }

        let columns = self.columns(sheet)?;
        let table = quote(sheet.table_name());

        let tx = self.pool.conn.transaction()?;
        for row in rows {
            // Cells for columns the sheet lacks are dropped, absent columns take their default.
            let (names, values): (Vec<&str>, Vec<&str>) = row
                .iter()
                .filter(|(c, _)| columns.iter().any(|k| k == c))
                .unzip();

            if names.is_empty() {
                tx.execute(&format!("INSERT INTO {table} DEFAULT VALUES"), [])?;
                continue;
            }

            let cols = names.iter().map(|c| quote(c)).collect::<Vec<_>>().join(", ");
            let placeholders = (1..=names.len())
                .map(|i| format!("?{i}"))
                .collect::<Vec<_>>()
                .join(", ");

            tx.execute(
                &format!("INSERT INTO {table} ({cols}) VALUES ({placeholders})"),
                params_from_iter(values),
            )?;
        }
        tx.commit()?;
        Ok(())
    }

    fn find_by_id(&mut self, sheet: Sheet, id: &str) -> AppResult<Vec<Record>> {
        let mut stmt = self.pool.conn.prepare(&format!(
            "SELECT * FROM {} WHERE {} = ?1 ORDER BY rowid ASC",
            quote(sheet.table_name()),
            quote(sheet.id_column())
        ))?;
        let names: Vec<String> = stmt.column_names().iter().map(|s| s.to_string()).collect();

        let rows = stmt.query_map([id], |row| map_record(row, &names))?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }

    fn update_columns(
        &mut self,
        sheet: Sheet,
        id: &str,
        changes: &[(String, String)],
    ) -> AppResult<()> {
        if changes.is_empty() {
            return Ok(());
        }

        for (c, _) in changes {
            if c == sheet.id_column() || c == "synced" {
                return Err(AppError::ReadOnlyColumn {
                    table: sheet.label().to_string(),
                    column: c.clone(),
                });
            }
        }
        self.ensure_columns(sheet, changes.iter().map(|(c, _)| c.as_str()))?;

        let mut assignments: Vec<String> = changes
            .iter()
            .enumerate()
            .map(|(i, (c, _))| format!("{} = ?{}", quote(c), i + 1))
            .collect();
        if sheet.has_sync_flag() {
            assignments.push("\"synced\" = 'FALSE'".to_string());
        }

        let mut values: Vec<&str> = changes.iter().map(|(_, v)| v.as_str()).collect();
        values.push(id);

        let affected = self.pool.conn.execute(
            &format!(
                "UPDATE {} SET {} WHERE {} = ?{}",
                quote(sheet.table_name()),
                assignments.join(", "),
                quote(sheet.id_column()),
                values.len()
            ),
            params_from_iter(values),
        )?;

        if affected == 0 {
            return Err(AppError::RowNotFound {
                table: sheet.label().to_string(),
                id: id.to_string(),
            });
        }
        Ok(())
    }

    fn delete_rows(&mut self, sheet: Sheet, ids: &[String]) -> AppResult<DeleteReport> {
        let sql = format!(
            "DELETE FROM {} WHERE {} = ?1",
            quote(sheet.table_name()),
            quote(sheet.id_column())
        );

        let mut report = DeleteReport::default();

        let tx = self.pool.conn.transaction()?;
        for id in ids {
            if tx.execute(&sql, [id])? > 0 {
                report.deleted.push(id.clone());
            } else {
                report.missing.push(id.clone());
            }
        }
        tx.commit()?;

        Ok(report)
    }
}
