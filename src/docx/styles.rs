use crate::error::Error;
use crate::model::{
    Alignment, CellBorder, CellBorders, CellVAlign, TableBorders, TableCell, TableLayout,
    TableRow, TableStyle, VMerge,
};

use super::grid::{GridColumn, ResolvedCell};
use super::{XmlWriter, empty, end, hex_color, start, twips, wml_val};

fn table_alignment(alignment: Alignment) -> &'static str {
    match alignment {
        Alignment::Center => "center",
        Alignment::Right => "right",
        // Tables have no justified alignment.
        Alignment::Left | Alignment::Justify => "left",
    }
}

fn write_border(w: &mut XmlWriter, name: &str, border: &CellBorder) -> Result<(), Error> {
    if !border.present {
        return wml_val(w, name, "nil");
    }
    // w:sz is in eighths of a point.
    let size = format!("{}", (border.width * 8.0).round() as i64);
    let color = border.color.map_or_else(|| "auto".to_string(), hex_color);
    empty(
        w,
        name,
        &[
            ("w:val", "single"),
            ("w:sz", size.as_str()),
            ("w:space", "0"),
            ("w:color", color.as_str()),
        ],
    )
}

fn write_table_borders(w: &mut XmlWriter, borders: &TableBorders) -> Result<(), Error> {
    start(w, "w:tblBorders", &[])?;
    write_border(w, "w:top", &borders.top)?;
    write_border(w, "w:left", &borders.left)?;
    write_border(w, "w:bottom", &borders.bottom)?;
    write_border(w, "w:right", &borders.right)?;
    write_border(w, "w:insideH", &borders.inside_h)?;
    write_border(w, "w:insideV", &borders.inside_v)?;
    end(w, "w:tblBorders")
}

fn write_cell_borders(w: &mut XmlWriter, borders: &CellBorders) -> Result<(), Error> {
    start(w, "w:tcBorders", &[])?;
    write_border(w, "w:top", &borders.top)?;
    write_border(w, "w:left", &borders.left)?;
    write_border(w, "w:bottom", &borders.bottom)?;
    write_border(w, "w:right", &borders.right)?;
    end(w, "w:tcBorders")
}

/// `w:tcW`/`w:tblW` style width: an absolute twips value, or `auto`.
fn write_width(w: &mut XmlWriter, name: &str, width: Option<f32>) -> Result<(), Error> {
    match width {
        Some(v) => empty(w, name, &[("w:w", twips(v).as_str()), ("w:type", "dxa")]),
        None => empty(w, name, &[("w:w", "0"), ("w:type", "auto")]),
    }
}

/// `w:tblPr`. `width` is the resolved table width.
pub(super) fn write_table_properties(
    w: &mut XmlWriter,
    style: Option<&TableStyle>,
    width: Option<f32>,
) -> Result<(), Error> {
    start(w, "w:tblPr", &[])?;
    if let Some(id) = style.and_then(|s| s.style_id.as_deref()) {
        wml_val(w, "w:tblStyle", id)?;
    }
    write_width(w, "w:tblW", width)?;

    if let Some(style) = style {
        if let Some(alignment) = style.alignment {
            wml_val(w, "w:jc", table_alignment(alignment))?;
        }
        if let Some(indent) = style.margin_left {
            empty(
                w,
                "w:tblInd",
                &[("w:w", twips(indent).as_str()), ("w:type", "dxa")],
            )?;
        }
        if let Some(borders) = &style.borders {
            write_table_borders(w, borders)?;
        }
        if let Some(layout) = style.layout {
            let kind = match layout {
                TableLayout::Fixed => "fixed",
                TableLayout::Autofit => "autofit",
            };
            empty(w, "w:tblLayout", &[("w:type", kind)])?;
        }
        if let Some(cm) = &style.cell_margins {
            start(w, "w:tblCellMar", &[])?;
            for (name, v) in [
                ("w:top", cm.top),
                ("w:left", cm.left),
                ("w:bottom", cm.bottom),
                ("w:right", cm.right),
            ] {
                empty(w, name, &[("w:w", twips(v).as_str()), ("w:type", "dxa")])?;
            }
            end(w, "w:tblCellMar")?;
        }
    }
    end(w, "w:tblPr")
}

/// `w:tblGrid`, one `w:gridCol` per resolved column.
pub(super) fn write_grid(w: &mut XmlWriter, columns: &[GridColumn]) -> Result<(), Error> {
    start(w, "w:tblGrid", &[])?;
    for col in columns {
        match col.width {
            Some(width) => empty(w, "w:gridCol", &[("w:w", width.to_string().as_str())])?,
            None => empty(w, "w:gridCol", &[])?,
        }
    }
    end(w, "w:tblGrid")
}

/// `w:trPr`, skipped entirely when the row has neither height nor style.
pub(super) fn write_row_properties(w: &mut XmlWriter, row: &TableRow) -> Result<(), Error> {
    let style = row.style.as_ref();
    if row.height.is_none() && style.is_none() {
        return Ok(());
    }

    start(w, "w:trPr", &[])?;
    if style.is_some_and(|s| s.cant_split) {
        empty(w, "w:cantSplit", &[])?;
    }
    if let Some(h) = row.height {
        let rule = if style.is_some_and(|s| s.height_exact) {
            "exact"
        } else {
            "atLeast"
        };
        empty(
            w,
            "w:trHeight",
            &[("w:val", twips(h).as_str()), ("w:hRule", rule)],
        )?;
    }
    if style.is_some_and(|s| s.header) {
        empty(w, "w:tblHeader", &[])?;
    }
    end(w, "w:trPr")
}

/// `w:tcPr` with the resolved width and span; `w:gridSpan` only when the
/// cell covers more than one grid column.
pub(super) fn write_cell_properties(
    w: &mut XmlWriter,
    cell: &TableCell,
    resolved: &ResolvedCell,
) -> Result<(), Error> {
    start(w, "w:tcPr", &[])?;
    write_width(w, "w:tcW", resolved.width)?;
    if resolved.span > 1 {
        wml_val(w, "w:gridSpan", &resolved.span.to_string())?;
    }

    if let Some(style) = cell.style.as_ref() {
        match style.v_merge {
            VMerge::None => {}
            VMerge::Restart => wml_val(w, "w:vMerge", "restart")?,
            VMerge::Continue => empty(w, "w:vMerge", &[])?,
        }
        if let Some(borders) = &style.borders {
            write_cell_borders(w, borders)?;
        }
        if let Some(fill) = style.shading {
            empty(
                w,
                "w:shd",
                &[
                    ("w:val", "clear"),
                    ("w:color", "auto"),
                    ("w:fill", hex_color(fill).as_str()),
                ],
            )?;
        }
        if let Some(v_align) = style.v_align {
            let val = match v_align {
                CellVAlign::Top => "top",
                CellVAlign::Center => "center",
                CellVAlign::Bottom => "bottom",
            };
            wml_val(w, "w:vAlign", val)?;
        }
    }
    end(w, "w:tcPr")
}
