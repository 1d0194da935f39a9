//! Terminal renderer for the weekly calendar view.
//!
//! The projection engine only promises segment order and pad counts;
//! this module decides how many columns each segment spans and draws
//! the aligned grid.

use crate::core::calendar::CalendarWindow;
use crate::utils::colors::{GREY, RESET, color_for_row};
use crate::utils::date::day_label;
use unicode_width::UnicodeWidthStr;

/// Width of one day column, in terminal cells.
const CELL_W: usize = 12;

#[derive(Debug, Clone)]
pub struct GridCell {
    pub text: String,
    /// Day columns this cell spans inside the window (0 = not visible).
    pub span: u32,
}

#[derive(Debug, Clone)]
pub struct GridRow {
    pub label: String,
    pub leading_pad: u32,
    pub cells: Vec<GridCell>,
    pub trailing_pad: u32,
}

/// Pad or truncate `text` to an exact terminal width, the
/// unicode-aware way (hotel and client names are rarely plain ASCII).
fn fit(text: &str, width: usize) -> String {
    let mut out = String::new();
    let mut used = 0;

    for ch in text.chars() {
        let w = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > width {
            break;
        }
        out.push(ch);
        used += w;
    }

    out.push_str(&" ".repeat(width - used));
    out
}

fn empty_cells(n: u32) -> String {
    let dot = fit("·", CELL_W);
    format!("{GREY}{}{RESET}", dot.repeat(n as usize))
}

/// Render one window plus its placed rows into a printable block.
pub fn render_week(window: &CalendarWindow, rows: &[GridRow], separator_char: &str) -> String {
    let label_w = rows
        .iter()
        .map(|r| UnicodeWidthStr::width(r.label.as_str()))
        .max()
        .unwrap_or(8)
        .max(8);

    let mut out = String::new();

    // Header: one column per day of the window
    out.push_str(&" ".repeat(label_w + 2));
    for day in window.days() {
        out.push_str(&fit(&day_label(day), CELL_W));
    }
    out.push('\n');

    out.push_str(&separator_char.repeat(label_w + 2 + CELL_W * 7));
    out.push('\n');

    for (i, row) in rows.iter().enumerate() {
        let color = color_for_row(i);

        out.push_str(&fit(&row.label, label_w));
        out.push_str("  ");

        if row.leading_pad > 0 {
            out.push_str(&empty_cells(row.leading_pad));
        }

        for cell in &row.cells {
            if cell.span == 0 {
                continue; // segment outside the window
            }
            let w = CELL_W * cell.span as usize;
            out.push_str(color);
            out.push_str(&fit(&cell.text, w));
            out.push_str(RESET);
        }

        if row.trailing_pad > 0 {
            out.push_str(&empty_cells(row.trailing_pad));
        }

        out.push('\n');
    }

    out
}
