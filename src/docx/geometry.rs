use crate::model::{SectionProperties, Table};

/// Declared cell widths, one inner `Vec` per row. `None` means the cell has
/// no explicit width.
pub type CellWidths = Vec<Vec<Option<f32>>>;

pub fn declared_widths(table: &Table) -> CellWidths {
    table
        .rows
        .iter()
        .map(|row| row.cells.iter().map(|cell| cell.width).collect())
        .collect()
}

/// Width available between the page margins of the containing section.
/// A table outside any section has no usable width.
pub fn usable_width(section: Option<&SectionProperties>) -> f32 {
    section.map_or(0.0, SectionProperties::usable_width)
}

/// The table's declared width, or the widest row when none is declared.
pub fn nominal_width(table: &Table, widths: &CellWidths) -> f32 {
    table
        .width
        .or_else(|| table.style.as_ref().and_then(|s| s.width))
        .unwrap_or_else(|| {
            widths
                .iter()
                .map(|row| row.iter().flatten().sum::<f32>())
                .fold(0.0, f32::max)
        })
}
