// src/export/logic.rs

use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::{ExportTable, records_in_range};
use crate::export::pdf_export::export_pdf;
use crate::export::range::parse_optional_range;
use crate::export::xlsx::export_xlsx;
use crate::store::{Sheet, TabularStore};
use crate::ui::messages::warning;
use crate::utils::date::month_name;
use std::path::Path;

/// Export one sheet, optionally restricted to a `--range` of its `date`
/// column. Returns the number of rows written; nothing is written when the
/// selection is empty.
pub fn export_sheet(
    store: &mut impl TabularStore,
    sheet: Sheet,
    format: ExportFormat,
    file: &str,
    range: Option<&str>,
    force: bool,
) -> AppResult<usize> {
    let path = Path::new(file);
    ensure_writable(path, force)?;

    let bounds = parse_optional_range(range)?;
    let headers = store.columns(sheet)?;
    let records = records_in_range(store.fetch(sheet)?, bounds);

    if records.is_empty() {
        warning(format!("No {} rows found for the selected range.", sheet.label()));
        return Ok(0);
    }

    let table = ExportTable::from_records(headers, records);

    match format {
        ExportFormat::Csv => export_csv(&table, path)?,
        ExportFormat::Json => export_json(&table, path)?,
        ExportFormat::Xlsx => export_xlsx(&table, sheet.label(), path)?,
        ExportFormat::Pdf => export_pdf(&table, path, &build_pdf_title(sheet, range))?,
    }

    Ok(table.len())
}

/// PDF title naming the sheet and the selected period.
fn build_pdf_title(sheet: Sheet, range: Option<&str>) -> String {
    let name = sheet.label();
    let Some(p) = range.map(str::trim).filter(|p| !p.eq_ignore_ascii_case("all")) else {
        return name.to_string();
    };

    if let Some((from, to)) = p.split_once(':') {
        return format!("{name} from {} to {}", from.trim(), to.trim());
    }

    match p.len() {
        4 => format!("{name} for year {p}"),
        7 => format!("{name} for {} {}", month_name(&p[5..7]), &p[0..4]),
        _ => format!("{name} for {p}"),
    }
}
