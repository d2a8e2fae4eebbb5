//! Formatting utilities used for CLI and export outputs.

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Render a quantity the way a spreadsheet cell shows it:
/// whole numbers without decimals, fractions as-is.
pub fn format_quantity(q: f64) -> String {
    if q.fract() == 0.0 && q.abs() < 1e15 {
        format!("{}", q as i64)
    } else {
        format!("{}", q)
    }
}

/// Parse a stored quantity cell. Blank or malformed cells count as zero.
pub fn parse_quantity(cell: &str) -> f64 {
    let t = cell.trim();
    if t.is_empty() {
        return 0.0;
    }
    t.replace(',', "").parse::<f64>().unwrap_or(0.0)
}

/// Truncate to `max` visible chars, appending "..." when cut.
pub fn ellipsize(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max.saturating_sub(3)).collect();
    out.push_str("...");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quantities_render_like_cells() {
        assert_eq!(format_quantity(10.0), "10");
        assert_eq!(format_quantity(-3.0), "-3");
        assert_eq!(format_quantity(2.5), "2.5");
    }

    #[test]
    fn blank_and_garbage_cells_are_zero() {
        assert_eq!(parse_quantity(""), 0.0);
        assert_eq!(parse_quantity("  "), 0.0);
        assert_eq!(parse_quantity("n/a"), 0.0);
        assert_eq!(parse_quantity("1,200"), 1200.0);
        assert_eq!(parse_quantity(" 7.5 "), 7.5);
    }

    #[test]
    fn ellipsize_keeps_short_text() {
        assert_eq!(ellipsize("Cable", 10), "Cable");
        assert_eq!(ellipsize("1 Phase Meter Box", 10), "1 Phase...");
    }
}
