#![allow(dead_code)]

use docxide_tables::model::{SectionProperties, Table, TableCell, TableRow};

pub const WML_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

/// Table whose rows have the given cell widths (twips).
pub fn widths_table(rows: &[&[f32]]) -> Table {
    Table {
        rows: rows
            .iter()
            .map(|cells| TableRow {
                cells: cells.iter().map(|&w| TableCell::with_width(w)).collect(),
                ..Default::default()
            })
            .collect(),
        ..Default::default()
    }
}

/// Section whose usable width (page width minus side margins) is `usable`.
pub fn section_with_usable_width(usable: f32) -> SectionProperties {
    let defaults = SectionProperties::default();
    SectionProperties {
        page_width: usable + defaults.margin_left + defaults.margin_right,
        ..defaults
    }
}

/// Bind the `w:` prefix so a table fragment parses on its own.
pub fn wrap_fragment(bytes: &[u8]) -> String {
    format!(
        "<root xmlns:w=\"{}\">{}</root>",
        WML_NS,
        String::from_utf8_lossy(bytes)
    )
}

pub fn is_wml(node: &roxmltree::Node, name: &str) -> bool {
    node.tag_name().name() == name && node.tag_name().namespace() == Some(WML_NS)
}

pub fn wml_attr<'a>(node: &roxmltree::Node<'a, 'a>, name: &str) -> Option<&'a str> {
    node.attribute((WML_NS, name))
}

pub fn count_wml(xml: &str, name: &str) -> usize {
    let doc = roxmltree::Document::parse(xml).expect("well-formed XML");
    doc.descendants().filter(|n| is_wml(n, name)).count()
}

/// `w:w` of every `w:gridCol`, in order.
pub fn grid_widths(xml: &str) -> Vec<Option<u32>> {
    let doc = roxmltree::Document::parse(xml).expect("well-formed XML");
    doc.descendants()
        .filter(|n| is_wml(n, "gridCol"))
        .map(|n| wml_attr(&n, "w").map(|v| v.parse().expect("numeric gridCol width")))
        .collect()
}

/// `w:gridSpan` of every cell (1 when absent), grouped by row.
pub fn row_spans(xml: &str) -> Vec<Vec<u16>> {
    let doc = roxmltree::Document::parse(xml).expect("well-formed XML");
    doc.descendants()
        .filter(|n| is_wml(n, "tr"))
        .map(|tr| {
            tr.children()
                .filter(|n| is_wml(n, "tc"))
                .map(|tc| {
                    tc.descendants()
                        .find(|n| is_wml(n, "gridSpan"))
                        .and_then(|n| wml_attr(&n, "val"))
                        .map_or(1, |v| v.parse().expect("numeric gridSpan"))
                })
                .collect()
        })
        .collect()
}

/// `(w:w, w:type)` of every `w:tcW`, grouped by row.
pub fn cell_widths(xml: &str) -> Vec<Vec<(String, String)>> {
    let doc = roxmltree::Document::parse(xml).expect("well-formed XML");
    doc.descendants()
        .filter(|n| is_wml(n, "tr"))
        .map(|tr| {
            tr.descendants()
                .filter(|n| is_wml(n, "tcW"))
                .map(|n| {
                    (
                        wml_attr(&n, "w").unwrap_or_default().to_string(),
                        wml_attr(&n, "type").unwrap_or_default().to_string(),
                    )
                })
                .collect()
        })
        .collect()
}
