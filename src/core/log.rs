use crate::errors::AppResult;
use crate::utils::formatting::ellipsize;
use crate::utils::table::visible_width;
use ansi_term::Colour;
use rusqlite::Connection;

const OP_WIDTH_MAX: usize = 60;

/// One row of the internal audit log.
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub id: i64,
    pub date: String,
    pub operation: String,
    pub target: String,
    pub message: String,
}

fn color_for_operation(op: &str) -> Colour {
    match op {
        "install" | "inward" | "worker" | "survey" | "settings" => Colour::Green,
        "del" => Colour::Red,
        "edit" => Colour::Yellow,
        "migration_applied" => Colour::Purple,
        "backup" | "export" => Colour::Blue,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

pub fn load_log(conn: &Connection) -> AppResult<Vec<LogEntry>> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, date, operation, target, message FROM log ORDER BY id ASC",
    )?;

    let rows = stmt.query_map([], |row| {
        let raw_date: String = row.get(1)?;
        let date = chrono::DateTime::parse_from_rfc3339(&raw_date)
            .map(|dt| dt.format("%FT%T%:z").to_string())
            .unwrap_or(raw_date);

        Ok(LogEntry {
            id: row.get(0)?,
            date,
            operation: row.get(2)?,
            target: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
            message: row.get::<_, Option<String>>(4)?.unwrap_or_default(),
        })
    })?;

    let mut entries = Vec::new();
    for r in rows {
        entries.push(r?);
    }
    Ok(entries)
}

/// "op (target)" with only the operation coloured, cut to the column limit.
fn op_target_cell(e: &LogEntry) -> String {
    let color = color_for_operation(&e.operation);
    let plain = if e.target.is_empty() {
        e.operation.clone()
    } else {
        format!("{} ({})", e.operation, e.target)
    };
    let cut = ellipsize(&plain, OP_WIDTH_MAX);

    match cut.split_once(' ') {
        Some((op, rest)) => format!("{} {}", color.paint(op), rest),
        None => color.paint(cut.as_str()).to_string(),
    }
}

pub fn print_log(conn: &Connection) -> AppResult<()> {
    let entries = load_log(conn)?;

    println!("📜 Internal log:\n");
    if entries.is_empty() {
        println!("(empty)");
        return Ok(());
    }

    let cells: Vec<String> = entries.iter().map(op_target_cell).collect();
    let op_w = cells.iter().map(|c| visible_width(c)).max().unwrap_or(10);
    let id_w = entries.iter().map(|e| e.id.to_string().len()).max().unwrap_or(1);
    let date_w = entries.iter().map(|e| e.date.len()).max().unwrap_or(10);

    for (e, cell) in entries.iter().zip(&cells) {
        let padding = " ".repeat(op_w.saturating_sub(visible_width(cell)));
        println!(
            "{:>id_w$}: {:<date_w$} | {}{} => {}",
            e.id,
            e.date,
            cell,
            padding,
            e.message,
            id_w = id_w,
            date_w = date_w
        );
    }

    Ok(())
}
