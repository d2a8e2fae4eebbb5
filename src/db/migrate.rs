use crate::ui::messages::{success, warning};
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists with the modern schema.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt = conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

fn table_has_column(conn: &Connection, table: &str, column: &str) -> Result<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info('{table}')"))?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == column {
            return Ok(true);
        }
    }
    Ok(false)
}

fn migration_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_applied(conn: &Connection, version: &str, message: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;
    Ok(())
}

/// Create every sheet with its current header layout.
fn create_sheets(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS work_logs (
            id          TEXT PRIMARY KEY,
            event_id    TEXT NOT NULL DEFAULT '',
            date        TEXT NOT NULL DEFAULT '',
            meter_type  TEXT NOT NULL DEFAULT '',
            dtr_code    TEXT NOT NULL DEFAULT '',
            site        TEXT NOT NULL DEFAULT '',
            worker      TEXT NOT NULL DEFAULT '',
            material    TEXT NOT NULL DEFAULT '',
            qty         REAL NOT NULL DEFAULT 0,
            latitude    TEXT NOT NULL DEFAULT '',
            longitude   TEXT NOT NULL DEFAULT '',
            synced      TEXT NOT NULL DEFAULT 'FALSE'
        );

        CREATE TABLE IF NOT EXISTS inventory (
            id          TEXT PRIMARY KEY,
            date        TEXT NOT NULL DEFAULT '',
            material    TEXT NOT NULL DEFAULT '',
            qty         REAL NOT NULL DEFAULT 0,
            entry_type  TEXT NOT NULL DEFAULT 'Inward',
            synced      TEXT NOT NULL DEFAULT 'FALSE'
        );

        CREATE TABLE IF NOT EXISTS workers (
            name        TEXT PRIMARY KEY,
            synced      TEXT NOT NULL DEFAULT 'FALSE'
        );

        CREATE TABLE IF NOT EXISTS settings (
            id              INTEGER PRIMARY KEY AUTOINCREMENT,
            site_list       TEXT NOT NULL DEFAULT '',
            meter_type_list TEXT NOT NULL DEFAULT '',
            material_master TEXT NOT NULL DEFAULT ''
        );

        CREATE TABLE IF NOT EXISTS survey_logs (
            id          TEXT PRIMARY KEY,
            date        TEXT NOT NULL DEFAULT '',
            asset_name  TEXT NOT NULL DEFAULT '',
            asset_code  TEXT NOT NULL DEFAULT '',
            latitude    TEXT NOT NULL DEFAULT '',
            longitude   TEXT NOT NULL DEFAULT '',
            switch_type TEXT NOT NULL DEFAULT '',
            lineman     TEXT NOT NULL DEFAULT '',
            synced      TEXT NOT NULL DEFAULT 'FALSE'
        );

        CREATE INDEX IF NOT EXISTS idx_work_logs_date_dtr ON work_logs(date, dtr_code);
        CREATE INDEX IF NOT EXISTS idx_work_logs_material ON work_logs(material);
        CREATE INDEX IF NOT EXISTS idx_inventory_material ON inventory(material);
        "#,
    )?;
    Ok(())
}

/// Early work-log sheets had no event correlation and no GPS columns.
fn migrate_work_logs_add_event_and_gps(conn: &Connection) -> Result<()> {
    let version = "20260301_0002_work_logs_event_gps";

    if migration_applied(conn, version)? {
        return Ok(());
    }

    let mut added = Vec::new();
    for column in ["event_id", "latitude", "longitude"] {
        if !table_has_column(conn, "work_logs", column)? {
            conn.execute(
                &format!("ALTER TABLE work_logs ADD COLUMN {column} TEXT NOT NULL DEFAULT ''"),
                [],
            )?;
            added.push(column);
        }
    }

    if !added.is_empty() {
        warning(format!("Legacy work_logs sheet upgraded: added {}", added.join(", ")));
    }

    mark_applied(conn, version, "work_logs carries event_id, latitude, longitude")?;
    Ok(())
}

/// Work-log sheets from before the install form had no meter type column.
fn migrate_work_logs_add_meter_type(conn: &Connection) -> Result<()> {
    let version = "20260401_0003_work_logs_meter_type";

    if migration_applied(conn, version)? {
        return Ok(());
    }

    if !table_has_column(conn, "work_logs", "meter_type")? {
        conn.execute(
            "ALTER TABLE work_logs ADD COLUMN meter_type TEXT NOT NULL DEFAULT ''",
            [],
        )?;
        warning("Legacy work_logs sheet upgraded: added meter_type");
    }

    mark_applied(conn, version, "work_logs carries meter_type")?;
    Ok(())
}

/// Number of migrations recorded in the log table.
pub fn applied_count(conn: &Connection) -> Result<i64> {
    if !table_exists(conn, "log")? {
        return Ok(0);
    }
    conn.query_row(
        "SELECT COUNT(*) FROM log WHERE operation = 'migration_applied'",
        [],
        |r| r.get(0),
    )
}

/// Public entry point: run all pending migrations.
///
/// Invoked by db::initialize::init_db().
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;

    let fresh = !table_exists(conn, "work_logs")?;

    create_sheets(conn)?;

    let initial = "20260101_0001_initial_sheets";
    if !migration_applied(conn, initial)? {
        mark_applied(conn, initial, "Created sheets: work_logs, inventory, workers, settings, survey_logs")?;
        if fresh {
            success("Created sheets (work_logs, inventory, workers, settings, survey_logs).");
        }
    }

    migrate_work_logs_add_event_and_gps(conn)?;
    migrate_work_logs_add_meter_type(conn)?;

    Ok(())
}
