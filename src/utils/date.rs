use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Parse an optional CLI date, defaulting to today.
pub fn date_or_today(s: Option<&String>) -> AppResult<NaiveDate> {
    match s {
        Some(raw) => parse_date(raw).ok_or_else(|| AppError::InvalidDate(raw.to_string())),
        None => Ok(today()),
    }
}

pub fn month_name(m: &str) -> &'static str {
    match m {
        "01" => "January",
        "02" => "February",
        "03" => "March",
        "04" => "April",
        "05" => "May",
        "06" => "June",
        "07" => "July",
        "08" => "August",
        "09" => "September",
        "10" => "October",
        "11" => "November",
        "12" => "December",
        _ => "Unknown",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_date_wins_over_today() {
        let d = date_or_today(Some(&"2025-09-01".to_string())).unwrap();
        assert_eq!(d.to_string(), "2025-09-01");
    }

    #[test]
    fn bad_date_is_rejected() {
        assert!(matches!(
            date_or_today(Some(&"01/09/2025".to_string())),
            Err(AppError::InvalidDate(_))
        ));
    }
}
