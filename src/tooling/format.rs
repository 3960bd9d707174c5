//! Human-readable output formatting.

use crate::layout::ArcSegment;
use comfy_table::Table;

const UNITS: [&str; 7] = ["B", "K", "M", "G", "T", "P", "E"];

/// Format a value as a humanized size, 1024-based with one decimal.
pub fn human_size(value: f64) -> String {
    let mut v = value;
    let mut unit = 0;
    while v.abs() >= 1024.0 && unit < UNITS.len() - 1 {
        v /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{:.0}{}", v, UNITS[unit])
    } else {
        format!("{:.1}{}", v, UNITS[unit])
    }
}

/// Render arc segments as a text table with humanized sizes and each
/// segment's share of the total.
pub fn arcs_table(segments: &[ArcSegment], total: f64) -> String {
    let mut table = Table::new();
    table.set_header(vec![
        "name", "depth", "value", "size", "share", "angle", "span",
    ]);
    for segment in segments {
        table.add_row(vec![
            segment.name.clone(),
            segment.depth.to_string(),
            format!("{}", segment.value),
            human_size(segment.value),
            format!("{:.1}%", segment.share_of(total)),
            format!("{:.4}", segment.angle_start),
            format!("{:.4}", segment.angle_span),
        ]);
    }
    table.to_string()
}
