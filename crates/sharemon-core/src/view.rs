//! Report view model and per-share row assembly.
//!
//! Presentation data only: cells carry a semantic style class that the
//! renderer maps to concrete terminal colors. A cell with an embedded
//! `\n` renders as multiple visual lines within the same logical row.

use crate::fmt;
use crate::models::ShareSnapshot;

/// Cell-level style classification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CellStyle {
    #[default]
    Normal,
    /// Positive/active (green). E.g. a running share.
    Active,
    /// Warning level (yellow).
    Warning,
    /// Critical level (red).
    Critical,
    /// Dimmed (dark gray). E.g. a stopped share.
    Dimmed,
}

/// A single table cell. Every visual line of the cell carries its style.
#[derive(Debug, Clone, Default)]
pub struct ViewCell {
    pub text: String,
    pub style: CellStyle,
}

impl ViewCell {
    pub fn plain(text: String) -> Self {
        Self {
            text,
            style: CellStyle::Normal,
        }
    }

    pub fn styled(text: String, style: CellStyle) -> Self {
        Self { text, style }
    }
}

/// One report row: one cell per header column.
#[derive(Debug, Clone)]
pub struct ReportRow {
    pub cells: Vec<ViewCell>,
}

/// Column labels, in render order.
pub const HEADERS: [&str; 9] = [
    "Share", "Status", "Uptime", "Restarts", "Peers", "Offers", "Delta", "Port", "Shared",
];

/// Column widths in character units.
pub const WIDTHS: [usize; 9] = [45, 10, 10, 10, 10, 11, 9, 11, 10];

/// Builds the report row for one share snapshot.
///
/// Always exactly one cell per column. Counters the daemon omitted
/// render as 0; no cell ever shows an absent/undefined marker.
pub fn build_share_row(share: &ShareSnapshot) -> ReportRow {
    let farmer = &share.farmer_state;

    // Port number and connection type share one tier code.
    let port = &farmer.port_status;
    let port_cell = port.connection_status.cell(format!(
        "{}\n{}",
        port.listen_port, port.connection_type
    ));

    let ntp = &farmer.ntp_status;
    let delta_cell = ntp.status.cell(fmt::format_number(ntp.delta));

    ReportRow {
        cells: vec![
            ViewCell::plain(format!("{}\n  → {}", share.id, share.storage_path)),
            ViewCell::styled(share.state.label().to_string(), share.state.style()),
            ViewCell::plain(fmt::format_uptime(share.uptime_ms)),
            ViewCell::plain(share.num_restarts.unwrap_or(0).to_string()),
            ViewCell::plain(farmer.total_peers.unwrap_or(0).to_string()),
            ViewCell::plain(fmt::sanitize_count(farmer.contract_count)),
            delta_cell,
            port_cell,
            ViewCell::plain(format!(
                "{}\n({}%)",
                farmer.space_used,
                fmt::format_number(farmer.percent_used)
            )),
        ],
    }
}
