mod common;

use docxide_tables::model::{
    Alignment, CellStyle, CellVAlign, Paragraph, RowStyle, Table, TableBorders, TableCell,
    TableLayout, TableStyle, VMerge,
};
use docxide_tables::write_table_fragment;

use common::{WML_NS, is_wml, wml_attr};

fn fragment(table: &Table) -> String {
    let bytes = write_table_fragment(table, None).expect("table writes");
    common::wrap_fragment(&bytes)
}

#[test]
fn table_without_rows_writes_nothing() {
    let table = Table {
        style: Some(TableStyle {
            margin_top: Some(240.0),
            margin_bottom: Some(240.0),
            ..Default::default()
        }),
        ..Default::default()
    };
    let bytes = write_table_fragment(&table, None).expect("table writes");
    assert!(bytes.is_empty(), "got {}", String::from_utf8_lossy(&bytes));
}

#[test]
fn ragged_rows_get_grid_and_spans() {
    let table = common::widths_table(&[&[2000.0, 2000.0, 2000.0], &[3000.0, 3000.0]]);
    let xml = fragment(&table);

    assert_eq!(
        common::grid_widths(&xml),
        vec![Some(2000), Some(1000), Some(1000), Some(2000)]
    );
    assert_eq!(common::row_spans(&xml), vec![vec![1, 2, 1], vec![2, 2]]);
    assert_eq!(common::count_wml(&xml, "gridSpan"), 3);

    let widths = common::cell_widths(&xml);
    assert_eq!(widths[1][0], ("3000".to_string(), "dxa".to_string()));
}

#[test]
fn uniform_rows_have_no_grid_span() {
    let table = common::widths_table(&[&[3000.0, 3000.0], &[3000.0, 3000.0]]);
    let xml = fragment(&table);

    assert_eq!(common::grid_widths(&xml), vec![Some(3000), Some(3000)]);
    assert_eq!(common::count_wml(&xml, "gridSpan"), 0);
    assert_eq!(common::count_wml(&xml, "tc"), 4);
}

#[test]
fn table_properties_precede_grid_and_carry_resolved_width() {
    let mut table = common::widths_table(&[&[2000.0, 2000.0, 2000.0], &[3000.0, 3000.0]]);
    table.style = Some(TableStyle {
        style_id: Some("TableGrid".into()),
        alignment: Some(Alignment::Center),
        margin_left: Some(120.0),
        borders: Some(TableBorders::all(Some([0x33, 0x66, 0x99]), 0.5)),
        layout: Some(TableLayout::Fixed),
        ..Default::default()
    });
    let xml = fragment(&table);
    let doc = roxmltree::Document::parse(&xml).unwrap();

    let tbl = doc.descendants().find(|n| is_wml(n, "tbl")).unwrap();
    let children: Vec<&str> = tbl
        .children()
        .filter(|n| n.is_element())
        .map(|n| n.tag_name().name())
        .collect();
    assert_eq!(children, vec!["tblPr", "tblGrid", "tr", "tr"]);

    let tbl_w = doc.descendants().find(|n| is_wml(n, "tblW")).unwrap();
    assert_eq!(wml_attr(&tbl_w, "w"), Some("6000"));
    assert_eq!(wml_attr(&tbl_w, "type"), Some("dxa"));

    let style = doc.descendants().find(|n| is_wml(n, "tblStyle")).unwrap();
    assert_eq!(wml_attr(&style, "val"), Some("TableGrid"));
    let jc = doc.descendants().find(|n| is_wml(n, "jc")).unwrap();
    assert_eq!(wml_attr(&jc, "val"), Some("center"));
    let ind = doc.descendants().find(|n| is_wml(n, "tblInd")).unwrap();
    assert_eq!(wml_attr(&ind, "w"), Some("120"));

    let inside_v = doc.descendants().find(|n| is_wml(n, "insideV")).unwrap();
    assert_eq!(wml_attr(&inside_v, "sz"), Some("4"));
    assert_eq!(wml_attr(&inside_v, "color"), Some("336699"));
    let layout = doc.descendants().find(|n| is_wml(n, "tblLayout")).unwrap();
    assert_eq!(wml_attr(&layout, "type"), Some("fixed"));
}

#[test]
fn margins_become_spacer_paragraphs_around_the_table() {
    let mut table = common::widths_table(&[&[3000.0, 3000.0]]);
    table.style = Some(TableStyle {
        margin_top: Some(240.0),
        margin_bottom: Some(360.0),
        ..Default::default()
    });
    let xml = fragment(&table);
    let doc = roxmltree::Document::parse(&xml).unwrap();

    let top_level: Vec<roxmltree::Node> =
        doc.root_element().children().filter(|n| n.is_element()).collect();
    let names: Vec<&str> = top_level.iter().map(|n| n.tag_name().name()).collect();
    assert_eq!(names, vec!["p", "tbl", "p"]);

    for (para, expected_line) in [(top_level[0], "240"), (top_level[2], "360")] {
        assert!(!para.descendants().any(|n| is_wml(&n, "r")), "spacer has no runs");
        let spacing = para.descendants().find(|n| is_wml(n, "spacing")).unwrap();
        assert_eq!(wml_attr(&spacing, "before"), Some("0"));
        assert_eq!(wml_attr(&spacing, "after"), Some("0"));
        assert_eq!(wml_attr(&spacing, "beforeAutospacing"), Some("0"));
        assert_eq!(wml_attr(&spacing, "afterAutospacing"), Some("0"));
        assert_eq!(wml_attr(&spacing, "line"), Some(expected_line));
        assert_eq!(wml_attr(&spacing, "lineRule"), Some("exact"));
    }
}

#[test]
fn no_spacers_without_vertical_margins() {
    let mut table = common::widths_table(&[&[3000.0, 3000.0]]);
    table.style = Some(TableStyle {
        margin_left: Some(100.0),
        ..Default::default()
    });
    let xml = fragment(&table);
    let doc = roxmltree::Document::parse(&xml).unwrap();
    let names: Vec<&str> = doc
        .root_element()
        .children()
        .filter(|n| n.is_element())
        .map(|n| n.tag_name().name())
        .collect();
    assert_eq!(names, vec!["tbl"]);
}

#[test]
fn cells_without_width_or_content() {
    let mut table = common::widths_table(&[&[3000.0, 3000.0]]);
    table.rows[0].cells[1].width = None;
    let xml = fragment(&table);

    let widths = common::cell_widths(&xml);
    assert_eq!(widths[0][0], ("3000".to_string(), "dxa".to_string()));
    assert_eq!(widths[0][1], ("0".to_string(), "auto".to_string()));

    // Every cell still ends in a paragraph.
    let doc = roxmltree::Document::parse(&xml).unwrap();
    for tc in doc.descendants().filter(|n| is_wml(n, "tc")) {
        let last = tc.children().filter(|n| n.is_element()).last().unwrap();
        assert!(is_wml(&last, "p"));
    }
}

#[test]
fn row_and_cell_properties() {
    let mut table = common::widths_table(&[&[3000.0, 3000.0], &[3000.0, 3000.0]]);
    table.rows[0].height = Some(400.0);
    table.rows[0].style = Some(RowStyle {
        height_exact: true,
        header: true,
        cant_split: true,
    });
    table.rows[1].height = Some(300.0);
    table.rows[0].cells[0].style = Some(CellStyle {
        v_merge: VMerge::Restart,
        shading: Some([0xEE, 0xEE, 0xEE]),
        v_align: Some(CellVAlign::Center),
        ..Default::default()
    });
    table.rows[1].cells[0].style = Some(CellStyle {
        v_merge: VMerge::Continue,
        ..Default::default()
    });
    let xml = fragment(&table);
    let doc = roxmltree::Document::parse(&xml).unwrap();

    let heights: Vec<(Option<&str>, Option<&str>)> = doc
        .descendants()
        .filter(|n| is_wml(n, "trHeight"))
        .map(|n| (wml_attr(&n, "val"), wml_attr(&n, "hRule")))
        .collect();
    assert_eq!(
        heights,
        vec![(Some("400"), Some("exact")), (Some("300"), Some("atLeast"))]
    );
    assert_eq!(common::count_wml(&xml, "tblHeader"), 1);
    assert_eq!(common::count_wml(&xml, "cantSplit"), 1);

    let merges: Vec<Option<&str>> = doc
        .descendants()
        .filter(|n| is_wml(n, "vMerge"))
        .map(|n| wml_attr(&n, "val"))
        .collect();
    assert_eq!(merges, vec![Some("restart"), None]);

    let shd = doc.descendants().find(|n| is_wml(n, "shd")).unwrap();
    assert_eq!(wml_attr(&shd, "fill"), Some("EEEEEE"));
    let v_align = doc.descendants().find(|n| is_wml(n, "vAlign")).unwrap();
    assert_eq!(wml_attr(&v_align, "val"), Some("center"));

    // tcW comes first inside tcPr.
    let tc_pr = doc.descendants().find(|n| is_wml(n, "tcPr")).unwrap();
    let first = tc_pr.children().find(|n| n.is_element()).unwrap();
    assert_eq!(first.tag_name().name(), "tcW");
}

#[test]
fn cell_content_is_delegated_and_escaped() {
    let mut table = common::widths_table(&[&[4000.0]]);
    table.rows[0].cells[0] = TableCell {
        width: Some(4000.0),
        content: vec![
            Paragraph::from_text("Q&A <draft>"),
            Paragraph::from_text("line one\nline two"),
        ],
        style: None,
    };
    let xml = fragment(&table);
    let doc = roxmltree::Document::parse(&xml).unwrap();

    let texts: Vec<&str> = doc
        .descendants()
        .filter(|n| is_wml(n, "t"))
        .filter_map(|n| n.text())
        .collect();
    assert_eq!(texts, vec!["Q&A <draft>", "line one", "line two"]);
    assert_eq!(common::count_wml(&xml, "br"), 1);

    let tc = doc.descendants().find(|n| is_wml(n, "tc")).unwrap();
    assert_eq!(
        tc.children()
            .filter(|n| n.tag_name().namespace() == Some(WML_NS) && n.tag_name().name() == "p")
            .count(),
        2
    );
}

#[test]
fn writing_twice_gives_identical_markup() {
    let table = common::widths_table(&[&[2000.0, 2000.0, 2000.0], &[3000.0, 3000.0]]);
    let first = write_table_fragment(&table, None).unwrap();
    let second = write_table_fragment(&table, None).unwrap();
    assert_eq!(first, second);
}
