// src/export/range.rs

use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;

fn bad(msg: &str) -> AppError {
    AppError::Export(format!("invalid --range: {msg}"))
}

/// First and last day covered by one range endpoint.
///
/// `YYYY` spans the year, `YYYY-MM` the month, `YYYY-MM-DD` a single day.
fn period_bounds(p: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let p = p.trim();
    match p.len() {
        4 => {
            let y: i32 = p.parse().map_err(|_| bad("invalid year"))?;
            let first = NaiveDate::from_ymd_opt(y, 1, 1).ok_or_else(|| bad("invalid year"))?;
            let last = NaiveDate::from_ymd_opt(y, 12, 31).ok_or_else(|| bad("invalid year"))?;
            Ok((first, last))
        }
        7 => {
            let first = NaiveDate::parse_from_str(&format!("{p}-01"), "%Y-%m-%d")
                .map_err(|_| bad("invalid month"))?;
            let next = first
                .checked_add_months(chrono::Months::new(1))
                .ok_or_else(|| bad("invalid month"))?;
            let last = next.pred_opt().ok_or_else(|| bad("invalid month"))?;
            Ok((first, last))
        }
        10 => {
            let d = NaiveDate::parse_from_str(p, "%Y-%m-%d").map_err(|_| bad("invalid date"))?;
            Ok((d, d))
        }
        _ => Err(bad("use YYYY, YYYY-MM or YYYY-MM-DD, optionally as start:end")),
    }
}

/// Parse `--range` into inclusive date bounds.
///
/// Accepts a single period or `start:end` where both sides share a format.
pub fn parse_range(r: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    match r.split_once(':') {
        Some((start, end)) => {
            if start.trim().len() != end.trim().len() {
                return Err(bad("start and end must have the same format"));
            }
            let (from, _) = period_bounds(start)?;
            let (_, to) = period_bounds(end)?;
            if from > to {
                return Err(bad("start is after end"));
            }
            Ok((from, to))
        }
        None => period_bounds(r),
    }
}

/// `None` for no range or `all`.
pub fn parse_optional_range(r: Option<&str>) -> AppResult<Option<(NaiveDate, NaiveDate)>> {
    match r {
        None => Ok(None),
        Some(r) if r.trim().eq_ignore_ascii_case("all") => Ok(None),
        Some(r) => parse_range(r).map(Some),
    }
}
