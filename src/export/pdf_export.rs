// src/export/pdf_export.rs

use crate::errors::{AppError, AppResult};
use crate::export::fs_utils::ensure_writable;
use crate::export::pdf::PdfManager;
use crate::export::{ExportTable, notify_export_success};
use crate::models::survey::SurveyLog;
use crate::ui::messages::info;
use std::path::Path;

pub(crate) fn export_pdf(table: &ExportTable, path: &Path, title: &str) -> AppResult<()> {
    info(format!("Exporting to PDF: {}", path.display()));

    let mut pdf = PdfManager::new();
    pdf.write_table(title, &table.header_refs(), &table.rows);

    pdf.save(path)
        .map_err(|e| AppError::Export(format!("PDF export error: {e}")))?;

    notify_export_success("PDF", path);
    Ok(())
}

/// Text lines printed for one survey entry; the first is the block title.
pub(crate) fn survey_block(s: &SurveyLog) -> Vec<String> {
    let mut lines = vec![
        format!("{} ({})", s.asset_name, s.asset_code),
        format!("Date: {}", s.date),
    ];
    match &s.gps {
        Some(p) => {
            lines.push(format!("Coordinates: {}", p));
            lines.push(format!("Map: {}", p.map_link()));
        }
        None => lines.push("Coordinates: not recorded".to_string()),
    }
    if let Some(st) = &s.switch_type {
        lines.push(format!("Switch type: {}", st));
    }
    if let Some(l) = &s.lineman {
        lines.push(format!("Lineman: {}", l));
    }
    lines
}

/// Paginated survey report, one block per entry.
pub fn export_survey_report(surveys: &[SurveyLog], path: &Path, force: bool) -> AppResult<()> {
    ensure_writable(path, force)?;
    info(format!("Writing survey report: {}", path.display()));

    let blocks: Vec<Vec<String>> = surveys.iter().map(survey_block).collect();

    let mut pdf = PdfManager::new();
    pdf.write_blocks(&format!("Survey report ({} entries)", surveys.len()), &blocks);
    pdf.save(path)
        .map_err(|e| AppError::Export(format!("PDF export error: {e}")))?;

    notify_export_success("Survey report", path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::geo::GeoPoint;

    #[test]
    fn block_carries_map_link() {
        let s = SurveyLog::new(
            "2025-09-01",
            "Pole 7",
            "DTR-7",
            GeoPoint::new(12.5, 77.25).ok(),
            Some("Isolator".into()),
            None,
        );
        let b = survey_block(&s);
        assert_eq!(b[0], "Pole 7 (DTR-7)");
        assert!(b.contains(&"Map: https://maps.google.com/?q=12.5,77.25".to_string()));
        assert!(b.contains(&"Switch type: Isolator".to_string()));
    }

    #[test]
    fn report_is_written() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("survey.pdf");
        export_survey_report(&[], &path, false).unwrap();
        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }
}
