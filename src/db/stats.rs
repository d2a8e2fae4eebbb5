use crate::db::pool::DbPool;
use crate::store::Sheet;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;

/// Row count and date span of one sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetStats {
    pub sheet: Sheet,
    pub rows: i64,
    pub first_date: Option<String>,
    pub last_date: Option<String>,
}

pub fn sheet_stats(pool: &DbPool, sheet: Sheet) -> rusqlite::Result<SheetStats> {
    let table = sheet.table_name();
    let rows: i64 = pool
        .conn
        .query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| row.get(0))?;

    // Workers and Settings carry no date column.
    let (first_date, last_date) = match sheet {
        Sheet::Workers | Sheet::Settings => (None, None),
        _ => {
            let span: Option<(Option<String>, Option<String>)> = pool
                .conn
                .query_row(
                    &format!("SELECT MIN(date), MAX(date) FROM {table} WHERE date <> ''"),
                    [],
                    |row| Ok((row.get(0)?, row.get(1)?)),
                )
                .optional()?;
            span.unwrap_or((None, None))
        }
    };

    Ok(SheetStats {
        sheet,
        rows,
        first_date,
        last_date,
    })
}

pub fn print_db_info(pool: &DbPool, db_path: &str) -> rusqlite::Result<()> {
    println!();

    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);
    println!("{}• Sheets:{}", CYAN, RESET);

    for sheet in Sheet::ALL {
        let s = sheet_stats(pool, sheet)?;
        let span = match (&s.first_date, &s.last_date) {
            (Some(f), Some(l)) => format!("  {f} → {l}"),
            _ => format!("  {GREY}--{RESET}"),
        };
        println!(
            "    {:<11} {}{:>6}{} rows{}",
            sheet.label(),
            GREEN,
            s.rows,
            RESET,
            span
        );
    }

    println!();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::initialize::init_db;

    #[test]
    fn counts_rows_and_date_span() {
        let pool = DbPool::in_memory().unwrap();
        init_db(&pool.conn).unwrap();
        pool.conn
            .execute_batch(
                "INSERT INTO inventory (id, date, material, qty) VALUES
                    ('a', '2025-09-03', 'Cable', 10),
                    ('b', '2025-09-01', 'Lugs', 5);",
            )
            .unwrap();

        let s = sheet_stats(&pool, Sheet::Inventory).unwrap();
        assert_eq!(s.rows, 2);
        assert_eq!(s.first_date.as_deref(), Some("2025-09-01"));
        assert_eq!(s.last_date.as_deref(), Some("2025-09-03"));

        let w = sheet_stats(&pool, Sheet::Workers).unwrap();
        assert_eq!(w.rows, 0);
        assert!(w.first_date.is_none());
    }
}
