use pdf_writer::{Content, Name, Pdf, Rect, Ref, Str};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Minimal multi-page PDF builder on top of `pdf-writer`: a titled table
/// layout for sheet exports and a block layout for survey reports.
pub struct PdfManager {
    pdf: Pdf,
    catalog_id: Ref,
    pages_id: Ref,
    page_refs: Vec<Ref>,
    current_content_id: Option<Ref>,

    page_w: f32,
    page_h: f32,
    margin: f32,
    row_h: f32,

    next_id: i32,
    font_id: Ref,

    font_size: f32,
    header_font_size: f32,
    title_font_size: f32,
}

impl Default for PdfManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Helvetica only knows Latin-1; anything else prints as '?'.
fn latin1(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| if (c as u32) < 256 { c as u32 as u8 } else { b'?' })
        .collect()
}

/// Cut text so it fits roughly inside `width` points.
fn clip(text: &str, width: f32, size: f32) -> String {
    let max = ((width - 8.0) / (size * 0.55)).max(1.0) as usize;
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let mut s: String = text.chars().take(max.saturating_sub(1)).collect();
        s.push('~');
        s
    }
}

impl PdfManager {
    pub fn new() -> Self {
        let mut pdf = Pdf::new();

        let catalog_id = Ref::new(1);
        let pages_id = Ref::new(2);
        let font_id = Ref::new(3);

        pdf.type1_font(font_id).base_font(Name(b"Helvetica"));

        Self {
            pdf,
            catalog_id,
            pages_id,
            page_refs: Vec::new(),
            current_content_id: None,

            page_w: 842.0,
            page_h: 595.0,
            margin: 40.0,
            row_h: 18.0,

            next_id: 4,
            font_id,

            font_size: 8.0,
            header_font_size: 9.0,
            title_font_size: 14.0,
        }
    }

    fn fresh_ref(&mut self) -> Ref {
        let id = self.next_id;
        self.next_id += 1;
        Ref::new(id)
    }

    fn new_page(&mut self) -> Content {
        let page_id = self.fresh_ref();
        let content_id = self.fresh_ref();

        self.page_refs.push(page_id);

        let mut page = self.pdf.page(page_id);
        page.parent(self.pages_id)
            .media_box(Rect::new(0.0, 0.0, self.page_w, self.page_h))
            .contents(content_id);
        page.resources().fonts().pair(Name(b"F1"), self.font_id);

        self.current_content_id = Some(content_id);

        Content::new()
    }

    fn finalize_page(&mut self, content: Content) {
        if let Some(id) = self.current_content_id.take() {
            self.pdf.stream(id, &content.finish());
        }
    }

    fn draw_text(&self, content: &mut Content, x: f32, y: f32, size: f32, text: &str) {
        content.begin_text();
        content.set_font(Name(b"F1"), size);
        content.set_text_matrix([1.0, 0.0, 0.0, 1.0, x, y]);
        content.show(Str(&latin1(text)));
        content.end_text();
    }

    fn fill_band(&self, content: &mut Content, y: f32, w: f32, h: f32, grey: f32) {
        content.save_state();
        content.set_fill_rgb(grey, grey, grey + 0.03);
        content.rect(self.margin, y, w, h);
        content.fill_nonzero();
        content.restore_state();
    }

    fn draw_row(&self, content: &mut Content, y: f32, col_widths: &[f32], row: &[String], size: f32) {
        let mut x = self.margin;

        for (w, text) in col_widths.iter().zip(row) {
            self.draw_text(content, x + 4.0, y + 5.0, size, &clip(text, *w, size));

            content.save_state();
            content.set_stroke_rgb(0.65, 0.65, 0.65);
            content.rect(x, y, *w, self.row_h);
            content.stroke();
            content.restore_state();

            x += w;
        }
    }

    /// Column widths from header and content, scaled down to the page.
    fn compute_col_widths(&self, headers: &[&str], rows: &[Vec<String>]) -> Vec<f32> {
        let char_w = self.font_size * 0.55;
        let mut widths: Vec<f32> = headers
            .iter()
            .map(|h| h.chars().count() as f32 * char_w + 10.0)
            .collect();

        for row in rows {
            for (w, cell) in widths.iter_mut().zip(row) {
                *w = w.max(cell.chars().count() as f32 * char_w + 10.0);
            }
        }

        let total: f32 = widths.iter().sum();
        let max = self.page_w - 2.0 * self.margin;
        if total > max {
            let scale = max / total;
            for w in &mut widths {
                *w *= scale;
            }
        }

        widths
    }

    fn draw_page_frame(&self, content: &mut Content, title: &str, page: usize) {
        self.draw_text(
            content,
            self.margin,
            self.page_h - self.margin + 10.0,
            self.title_font_size,
            title,
        );
        self.draw_text(
            content,
            self.page_w - self.margin - 50.0,
            self.margin - 25.0,
            self.font_size,
            &format!("Page {}", page),
        );
    }

    fn top(&self) -> f32 {
        self.page_h - self.margin - 30.0
    }

    /// Multi-page table; the header row repeats on every page. An empty
    /// table still yields one page with the header.
    pub fn write_table(&mut self, title: &str, headers: &[&str], rows: &[Vec<String>]) {
        let col_widths = self.compute_col_widths(headers, rows);
        let table_w: f32 = col_widths.iter().sum();
        let header_row: Vec<String> = headers.iter().map(|s| s.to_string()).collect();

        let mut remaining: &[Vec<String>] = rows;
        let mut page_idx = 1;

        loop {
            let mut content = self.new_page();
            self.draw_page_frame(&mut content, title, page_idx);

            let mut y = self.top();
            self.fill_band(&mut content, y, table_w, self.row_h, 0.85);
            self.draw_row(&mut content, y, &col_widths, &header_row, self.header_font_size);
            y -= self.row_h;

            let mut consumed = 0;
            for (i, row) in remaining.iter().enumerate() {
                if y < self.margin {
                    break;
                }
                if i % 2 == 0 {
                    self.fill_band(&mut content, y, table_w, self.row_h, 0.96);
                }
                self.draw_row(&mut content, y, &col_widths, row, self.font_size);
                y -= self.row_h;
                consumed += 1;
            }

            self.finalize_page(content);
            remaining = &remaining[consumed..];
            page_idx += 1;

            if remaining.is_empty() {
                break;
            }
        }
    }

    /// One framed block of text lines per entry, as many per page as fit.
    pub fn write_blocks(&mut self, title: &str, blocks: &[Vec<String>]) {
        let line_h = self.row_h;
        let block_w = self.page_w - 2.0 * self.margin;

        let mut page_idx = 1;
        let mut content = self.new_page();
        self.draw_page_frame(&mut content, title, page_idx);
        let mut y = self.top();

        if blocks.is_empty() {
            self.draw_text(&mut content, self.margin, y, self.font_size, "No entries.");
        }

        for (i, lines) in blocks.iter().enumerate() {
            let block_h = lines.len() as f32 * line_h + 8.0;

            if y - block_h < self.margin && y < self.top() {
                self.finalize_page(content);
                page_idx += 1;
                content = self.new_page();
                self.draw_page_frame(&mut content, title, page_idx);
                y = self.top();
            }

            let bottom = y - block_h + line_h;
            if i % 2 == 0 {
                self.fill_band(&mut content, bottom, block_w, block_h, 0.96);
            }
            content.save_state();
            content.set_stroke_rgb(0.65, 0.65, 0.65);
            content.rect(self.margin, bottom, block_w, block_h);
            content.stroke();
            content.restore_state();

            let mut ly = y;
            for (n, line) in lines.iter().enumerate() {
                let size = if n == 0 {
                    self.header_font_size
                } else {
                    self.font_size
                };
                self.draw_text(&mut content, self.margin + 6.0, ly, size, &clip(line, block_w, size));
                ly -= line_h;
            }

            y -= block_h + 6.0;
        }

        self.finalize_page(content);
    }

    pub fn page_count(&self) -> usize {
        self.page_refs.len()
    }

    pub fn save(mut self, path: &Path) -> std::io::Result<()> {
        self.pdf.catalog(self.catalog_id).pages(self.pages_id);
        self.pdf
            .pages(self.pages_id)
            .count(self.page_refs.len() as i32)
            .kids(self.page_refs.iter().copied());

        let bytes = self.pdf.finish();
        let mut f = File::create(path)?;
        f.write_all(&bytes)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_tables_paginate() {
        let mut pdf = PdfManager::new();
        let rows: Vec<Vec<String>> = (0..100).map(|i| vec![i.to_string()]).collect();
        pdf.write_table("t", &["n"], &rows);
        assert!(pdf.page_count() > 1);
    }

    #[test]
    fn empty_table_still_has_a_page() {
        let mut pdf = PdfManager::new();
        pdf.write_table("t", &["a", "b"], &[]);
        assert_eq!(pdf.page_count(), 1);
    }

    #[test]
    fn blocks_paginate() {
        let mut pdf = PdfManager::new();
        let blocks: Vec<Vec<String>> = (0..40)
            .map(|i| vec![format!("Asset {i}"), "Code".into(), "Map".into()])
            .collect();
        pdf.write_blocks("Survey", &blocks);
        assert!(pdf.page_count() > 1);
    }

    #[test]
    fn clip_marks_cut_text() {
        assert_eq!(clip("short", 200.0, 8.0), "short");
        assert!(clip(&"x".repeat(200), 50.0, 8.0).ends_with('~'));
    }
}
