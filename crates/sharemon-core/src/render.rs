//! Fixed-width table rendering for the status report.
//!
//! Styling is applied after padding, so column alignment never depends
//! on ANSI escape sequences. Output is deterministic for identical rows
//! and the same color assumption.

use crossterm::style::Stylize;

use crate::view::{CellStyle, HEADERS, ReportRow, WIDTHS};

/// Renders the status report: styled header, dash rule, then one block
/// of visual lines per row. No trailing newline.
///
/// With no rows, only the header block is emitted.
pub fn render_report(rows: &[ReportRow], color: bool) -> String {
    let mut out = String::new();

    let header = HEADERS
        .iter()
        .enumerate()
        .map(|(col, label)| shape(label, col))
        .collect::<Vec<_>>()
        .join(" ");
    out.push_str(&paint_header(header.trim_end(), color));
    out.push('\n');

    let rule_width = WIDTHS.iter().sum::<usize>() + WIDTHS.len() - 1;
    out.push_str(&"-".repeat(rule_width));

    for row in rows {
        let cells: Vec<Vec<&str>> = row
            .cells
            .iter()
            .map(|cell| cell.text.split('\n').collect())
            .collect();
        let height = cells.iter().map(Vec::len).max().unwrap_or(1);

        for line_idx in 0..height {
            let mut parts: Vec<String> = row
                .cells
                .iter()
                .enumerate()
                .map(|(col, cell)| {
                    let text = cells[col].get(line_idx).copied().unwrap_or("");
                    paint(&shape(text, col), cell.style, color)
                })
                .collect();
            // Last column is unpadded; drop it entirely when blank.
            while parts.last().is_some_and(String::is_empty) {
                parts.pop();
            }
            out.push('\n');
            out.push_str(parts.join(" ").trim_end());
        }
    }

    out
}

/// Fits text into column `col`: truncate with an ellipsis, then pad to
/// the column width. The last column stays unpadded.
fn shape(text: &str, col: usize) -> String {
    let width = WIDTHS.get(col).copied().unwrap_or(10);
    let fitted = fit(text, width);
    if col == WIDTHS.len() - 1 {
        return fitted;
    }
    let len = fitted.chars().count();
    let mut shaped = fitted;
    for _ in len..width {
        shaped.push(' ');
    }
    shaped
}

/// Truncates to `width` characters, marking the cut with an ellipsis.
fn fit(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut fitted: String = text.chars().take(width.saturating_sub(1)).collect();
    fitted.push('…');
    fitted
}

fn paint(text: &str, style: CellStyle, color: bool) -> String {
    if !color || text.is_empty() {
        return text.to_string();
    }
    match style {
        CellStyle::Normal => text.to_string(),
        CellStyle::Active => text.green().to_string(),
        CellStyle::Warning => text.yellow().to_string(),
        CellStyle::Critical => text.red().to_string(),
        CellStyle::Dimmed => text.dark_grey().to_string(),
    }
}

fn paint_header(text: &str, color: bool) -> String {
    if color {
        text.cyan().bold().to_string()
    } else {
        text.to_string()
    }
}
