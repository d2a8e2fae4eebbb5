use crate::db::migrate::run_pending_migrations;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use rusqlite::Connection;

/// Initialize the database.
/// Delegates all schema creation / upgrades to the migration engine.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    run_pending_migrations(conn).map_err(|e| AppError::Migration(e.to_string()))
}

/// Open the configured database and make sure every sheet exists.
pub fn open_db(path: &str) -> AppResult<DbPool> {
    let pool = DbPool::new(path)?;
    init_db(&pool.conn)?;
    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_migration_is_reported_as_such() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch("CREATE VIEW work_logs AS SELECT 1 AS id;").unwrap();

        assert!(matches!(init_db(&conn), Err(AppError::Migration(_))));
    }
}
