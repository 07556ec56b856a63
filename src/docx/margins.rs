use crate::model::{SectionProperties, Table};

use super::geometry::{CellWidths, nominal_width, usable_width};

/// Shrink cell widths so that the table leaves its declared right margin
/// free inside the section's usable width.
///
/// The shortfall is split evenly across the cells of each row, independently
/// per row, regardless of how wide each cell is. Only `widths` is touched;
/// span counts are decided later by the grid resolver. Returns whether any
/// width changed.
pub fn redistribute(
    table: &Table,
    section: Option<&SectionProperties>,
    widths: &mut CellWidths,
) -> bool {
    let Some(style) = table.style.as_ref() else {
        return false;
    };
    let Some(declared_right) = style.margin_right else {
        return false;
    };

    let table_width = nominal_width(table, widths);
    let usable = usable_width(section);
    let margin_left = style.margin_left.unwrap_or(0.0);

    let actual_right_gap = (usable - (margin_left + table_width)).abs();
    if actual_right_gap >= declared_right {
        log::debug!(
            "MARGIN fits: gap={:.1} declared_right={:.1} usable={:.1} table_w={:.1}",
            actual_right_gap,
            declared_right,
            usable,
            table_width
        );
        return false;
    }

    let needed = declared_right - actual_right_gap;
    log::debug!(
        "MARGIN shrink: gap={:.1} declared_right={:.1} needed={:.1} rows={}",
        actual_right_gap,
        declared_right,
        needed,
        widths.len()
    );

    for row in widths.iter_mut() {
        if row.is_empty() {
            continue;
        }
        let share = needed / row.len() as f32;
        for w in row.iter_mut().flatten() {
            *w -= share;
        }
    }
    true
}
