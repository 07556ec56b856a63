use crate::error::Error;
use crate::model::{SectionProperties, Table};

use super::XmlWriter;
use super::geometry::declared_widths;
use super::grid::{ResolvedGrid, resolve_grid};
use super::margins::redistribute;
use super::paragraph::{spacer_paragraph, write_container, write_paragraph_break};
use super::styles::{
    write_cell_properties, write_grid, write_row_properties, write_table_properties,
};
use super::{end, start};

/// Margin redistribution followed by grid resolution, on a working copy of
/// the table's cell widths. The table itself is left untouched, so this can
/// run any number of times on the same table.
pub fn resolve_table_grid(table: &Table, section: Option<&SectionProperties>) -> ResolvedGrid {
    let mut widths = declared_widths(table);
    let shrunk = redistribute(table, section, &mut widths);
    let grid = resolve_grid(&widths);
    log::debug!(
        "TABLE rows={} grid_cols={} redistributed={} total_w={:?}",
        table.rows.len(),
        grid.columns.len(),
        shrunk,
        grid.total_width()
    );
    grid
}

pub(super) fn write_table(
    w: &mut XmlWriter,
    table: &Table,
    section: Option<&SectionProperties>,
) -> Result<(), Error> {
    if table.rows.is_empty() {
        log::debug!("TABLE skipped: no rows");
        return Ok(());
    }

    let style = table.style.as_ref();
    if let Some(top) = style.and_then(|s| s.margin_top) {
        write_paragraph_break(w, &spacer_paragraph(top))?;
    }

    let grid = resolve_table_grid(table, section);
    let table_width = grid
        .total_width()
        .map(|total| total as f32)
        .or_else(|| table.width.or_else(|| style.and_then(|s| s.width)));

    start(w, "w:tbl", &[])?;
    write_table_properties(w, style, table_width)?;
    write_grid(w, &grid.columns)?;

    for (ri, (row, resolved_row)) in table.rows.iter().zip(&grid.rows).enumerate() {
        log::debug!(
            "TABLE row={} cells={} spans={:?}",
            ri,
            row.cells.len(),
            resolved_row.iter().map(|c| c.span).collect::<Vec<_>>()
        );
        start(w, "w:tr", &[])?;
        write_row_properties(w, row)?;
        for (cell, resolved) in row.cells.iter().zip(resolved_row) {
            start(w, "w:tc", &[])?;
            write_cell_properties(w, cell, resolved)?;
            write_container(w, &cell.content)?;
            end(w, "w:tc")?;
        }
        end(w, "w:tr")?;
    }

    end(w, "w:tbl")?;

    if let Some(bottom) = style.and_then(|s| s.margin_bottom) {
        write_paragraph_break(w, &spacer_paragraph(bottom))?;
    }
    Ok(())
}

/// Write a single table as a standalone XML fragment (no document wrapper).
/// `section` supplies the page geometry the table is laid out against.
pub fn write_table_fragment(
    table: &Table,
    section: Option<&SectionProperties>,
) -> Result<Vec<u8>, Error> {
    let mut w = XmlWriter::new(Vec::new());
    write_table(&mut w, table, section)?;
    Ok(w.into_inner())
}
