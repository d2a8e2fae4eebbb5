// src/export/xlsx.rs

use crate::errors::{AppError, AppResult};
use crate::export::excel_date::date_to_excel_serial;
use crate::export::{ExportTable, notify_export_success};
use crate::ui::messages::info;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook, Worksheet};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

/// How a column's cells are written.
#[derive(Clone, Copy, PartialEq)]
enum CellKind {
    Date,
    Number,
    Text,
}

fn column_kind(header: &str) -> CellKind {
    match header {
        "date" => CellKind::Date,
        "qty" | "latitude" | "longitude" => CellKind::Number,
        _ => CellKind::Text,
    }
}

/// Styled workbook: banded rows, frozen header, widths fitted to content.
pub(crate) fn export_xlsx(table: &ExportTable, sheet_name: &str, path: &Path) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(sheet_name).map_err(xlsx_error)?;

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in table.headers.iter().enumerate() {
        worksheet
            .write_with_format(0, col as u16, header.as_str(), &header_format)
            .map_err(xlsx_error)?;
    }
    worksheet.set_freeze_panes(1, 0).map_err(xlsx_error)?;

    let kinds: Vec<CellKind> = table.headers.iter().map(|h| column_kind(h)).collect();
    let mut col_widths: Vec<usize> = table
        .headers
        .iter()
        .map(|h| UnicodeWidthStr::width(h.as_str()))
        .collect();

    for (row_index, values) in table.rows.iter().enumerate() {
        let row = (row_index + 1) as u32;
        let band = if row_index % 2 == 0 {
            Color::RGB(0xEAF3FB)
        } else {
            Color::RGB(0xFFFFFF)
        };

        for (col, value) in values.iter().enumerate() {
            let kind = kinds.get(col).copied().unwrap_or(CellKind::Text);
            write_cell(worksheet, row, col as u16, value, kind, band)?;
            if let Some(w) = col_widths.get_mut(col) {
                *w = (*w).max(UnicodeWidthStr::width(value.as_str()));
            }
        }
    }

    for (c, w) in col_widths.iter().enumerate() {
        worksheet
            .set_column_width(c as u16, *w as f64 + 2.0)
            .map_err(xlsx_error)?;
    }

    workbook.save(path).map_err(xlsx_error)?;

    notify_export_success("XLSX", path);
    Ok(())
}

fn write_cell(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    s: &str,
    kind: CellKind,
    bg: Color,
) -> AppResult<()> {
    let base = Format::new()
        .set_background_color(bg)
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    match kind {
        CellKind::Date => {
            if let Some(serial) = date_to_excel_serial(s) {
                let fmt = base.set_num_format("yyyy-mm-dd");
                worksheet
                    .write_with_format(row, col, serial, &fmt)
                    .map_err(xlsx_error)?;
                return Ok(());
            }
        }
        CellKind::Number => {
            if let Ok(num) = s.trim().parse::<f64>() {
                let fmt = base.set_align(FormatAlign::Right);
                worksheet
                    .write_with_format(row, col, num, &fmt)
                    .map_err(xlsx_error)?;
                return Ok(());
            }
        }
        CellKind::Text => {}
    }

    worksheet
        .write_with_format(row, col, s, &base)
        .map_err(xlsx_error)?;
    Ok(())
}

fn xlsx_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Export(format!("XLSX error: {e}"))
}
