use quick_xml::events::{BytesText, Event};

use crate::error::Error;
use crate::model::{Alignment, LineSpacing, Paragraph, Run};

use super::{XmlWriter, empty, end, hex_color, start, twips, wml_val};

fn paragraph_alignment(alignment: Alignment) -> &'static str {
    match alignment {
        Alignment::Left => "left",
        Alignment::Center => "center",
        Alignment::Right => "right",
        Alignment::Justify => "both",
    }
}

fn has_properties(para: &Paragraph) -> bool {
    para.style_id.is_some()
        || para.space_before.is_some()
        || para.space_after.is_some()
        || para.line_spacing.is_some()
        || para.alignment.is_some()
        || para.contextual_spacing
        || para.disable_auto_spacing
}

fn write_spacing(w: &mut XmlWriter, para: &Paragraph) -> Result<(), Error> {
    let before = para.space_before.map(twips);
    let after = para.space_after.map(twips);
    let line = para.line_spacing.map(|ls| match ls {
        // Auto line spacing is in 240ths of a line.
        LineSpacing::Auto(mult) => (format!("{}", (mult * 240.0).round() as i64), "auto"),
        LineSpacing::Exact(v) => (twips(v), "exact"),
        LineSpacing::AtLeast(v) => (twips(v), "atLeast"),
    });

    let mut attrs: Vec<(&str, &str)> = Vec::new();
    if let Some(v) = &before {
        attrs.push(("w:before", v.as_str()));
    }
    if para.disable_auto_spacing {
        attrs.push(("w:beforeAutospacing", "0"));
    }
    if let Some(v) = &after {
        attrs.push(("w:after", v.as_str()));
    }
    if para.disable_auto_spacing {
        attrs.push(("w:afterAutospacing", "0"));
    }
    if let Some((v, rule)) = &line {
        attrs.push(("w:line", v.as_str()));
        attrs.push(("w:lineRule", *rule));
    }
    if attrs.is_empty() {
        return Ok(());
    }
    empty(w, "w:spacing", &attrs)
}

fn write_run(w: &mut XmlWriter, run: &Run) -> Result<(), Error> {
    start(w, "w:r", &[])?;

    let has_rpr = run.font_name.is_some()
        || run.bold
        || run.italic
        || run.color.is_some()
        || run.font_size.is_some()
        || run.underline;
    if has_rpr {
        start(w, "w:rPr", &[])?;
        if let Some(font) = run.font_name.as_deref() {
            empty(w, "w:rFonts", &[("w:ascii", font), ("w:hAnsi", font), ("w:cs", font)])?;
        }
        if run.bold {
            empty(w, "w:b", &[])?;
        }
        if run.italic {
            empty(w, "w:i", &[])?;
        }
        if let Some(rgb) = run.color {
            wml_val(w, "w:color", &hex_color(rgb))?;
        }
        if let Some(size) = run.font_size {
            // Half-points.
            let half_points = format!("{}", (size * 2.0).round() as i64);
            wml_val(w, "w:sz", &half_points)?;
            wml_val(w, "w:szCs", &half_points)?;
        }
        if run.underline {
            wml_val(w, "w:u", "single")?;
        }
        end(w, "w:rPr")?;
    }

    for (i, line) in run.text.split('\n').enumerate() {
        if i > 0 {
            empty(w, "w:br", &[])?;
        }
        if line.is_empty() {
            continue;
        }
        start(w, "w:t", &[("xml:space", "preserve")])?;
        w.write_event(Event::Text(BytesText::new(line)))?;
        end(w, "w:t")?;
    }

    end(w, "w:r")
}

pub(super) fn write_paragraph(w: &mut XmlWriter, para: &Paragraph) -> Result<(), Error> {
    if !has_properties(para) && para.runs.is_empty() {
        return empty(w, "w:p", &[]);
    }

    start(w, "w:p", &[])?;
    if has_properties(para) {
        start(w, "w:pPr", &[])?;
        if let Some(id) = para.style_id.as_deref() {
            wml_val(w, "w:pStyle", id)?;
        }
        write_spacing(w, para)?;
        if para.contextual_spacing {
            empty(w, "w:contextualSpacing", &[])?;
        }
        if let Some(alignment) = para.alignment {
            wml_val(w, "w:jc", paragraph_alignment(alignment))?;
        }
        end(w, "w:pPr")?;
    }
    for run in &para.runs {
        write_run(w, run)?;
    }
    end(w, "w:p")
}

/// Empty paragraph standing in for a table's top or bottom margin: no
/// spacing around it, auto spacing off, and an exact line height equal to
/// the margin.
///
/// The margin goes into the line height alone. Putting it in `before` and
/// `after` as well would leave three times the margin between the table and
/// its neighbours.
pub(super) fn spacer_paragraph(margin: f32) -> Paragraph {
    Paragraph {
        space_before: Some(0.0),
        space_after: Some(0.0),
        line_spacing: Some(LineSpacing::Exact(margin)),
        disable_auto_spacing: true,
        ..Default::default()
    }
}

/// Paragraph break with the given spacing and no content.
pub(super) fn write_paragraph_break(w: &mut XmlWriter, spacer: &Paragraph) -> Result<(), Error> {
    debug_assert!(spacer.runs.is_empty());
    write_paragraph(w, spacer)
}

/// Block content of a cell. A `w:tc` must end with a paragraph, so empty
/// content still gets one.
pub(super) fn write_container(w: &mut XmlWriter, content: &[Paragraph]) -> Result<(), Error> {
    if content.is_empty() {
        return empty(w, "w:p", &[]);
    }
    for para in content {
        write_paragraph(w, para)?;
    }
    Ok(())
}
