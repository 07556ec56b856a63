pub(crate) mod geometry;
pub(crate) mod grid;
pub(crate) mod margins;
mod package;
mod paragraph;
mod styles;
pub(crate) mod table;

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};

use crate::error::Error;
use crate::model::{Block, Document, SectionProperties};

pub use package::write_docx;

use paragraph::write_paragraph;
use table::write_table;

pub(super) const WML_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";
pub(super) const REL_NS: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships";

pub(super) type XmlWriter = Writer<Vec<u8>>;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum OutputFormat {
    /// Complete DOCX package (zip).
    #[default]
    Docx,
    /// Only the `word/document.xml` part.
    DocumentXml,
}

#[derive(Clone, Debug, Default)]
pub struct WriterOptions {
    pub indent: bool,
    pub format: OutputFormat,
}

/// Lengths are written as whole twips.
pub(super) fn twips(v: f32) -> String {
    format!("{}", v.round() as i64)
}

pub(super) fn hex_color(rgb: [u8; 3]) -> String {
    format!("{:02X}{:02X}{:02X}", rgb[0], rgb[1], rgb[2])
}

pub(super) fn start(w: &mut XmlWriter, name: &str, attrs: &[(&str, &str)]) -> Result<(), Error> {
    let mut el = BytesStart::new(name);
    for &attr in attrs {
        el.push_attribute(attr);
    }
    w.write_event(Event::Start(el))?;
    Ok(())
}

pub(super) fn end(w: &mut XmlWriter, name: &str) -> Result<(), Error> {
    w.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

pub(super) fn empty(w: &mut XmlWriter, name: &str, attrs: &[(&str, &str)]) -> Result<(), Error> {
    let mut el = BytesStart::new(name);
    for &attr in attrs {
        el.push_attribute(attr);
    }
    w.write_event(Event::Empty(el))?;
    Ok(())
}

/// Empty element carrying a single `w:val`, e.g. `<w:jc w:val="center"/>`.
pub(super) fn wml_val(w: &mut XmlWriter, name: &str, val: &str) -> Result<(), Error> {
    empty(w, name, &[("w:val", val)])
}

fn write_section_properties(w: &mut XmlWriter, sp: &SectionProperties) -> Result<(), Error> {
    start(w, "w:sectPr", &[])?;
    empty(
        w,
        "w:pgSz",
        &[("w:w", twips(sp.page_width).as_str()), ("w:h", twips(sp.page_height).as_str())],
    )?;
    empty(
        w,
        "w:pgMar",
        &[
            ("w:top", twips(sp.margin_top).as_str()),
            ("w:right", twips(sp.margin_right).as_str()),
            ("w:bottom", twips(sp.margin_bottom).as_str()),
            ("w:left", twips(sp.margin_left).as_str()),
            ("w:header", twips(sp.header_margin).as_str()),
            ("w:footer", twips(sp.footer_margin).as_str()),
            ("w:gutter", "0"),
        ],
    )?;
    end(w, "w:sectPr")
}

/// Serialize the whole document as the `word/document.xml` part.
pub fn write_document_xml(doc: &Document, options: &WriterOptions) -> Result<Vec<u8>, Error> {
    if doc.sections.is_empty() {
        return Err(Error::InvalidDocument("document has no sections".into()));
    }

    let mut w = if options.indent {
        Writer::new_with_indent(Vec::new(), b' ', 2)
    } else {
        Writer::new(Vec::new())
    };

    w.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("yes"))))?;
    start(&mut w, "w:document", &[("xmlns:w", WML_NS), ("xmlns:r", REL_NS)])?;
    start(&mut w, "w:body", &[])?;

    let last = doc.sections.len() - 1;
    for (si, section) in doc.sections.iter().enumerate() {
        let sp = &section.properties;
        let mut tables = 0usize;
        for block in &section.blocks {
            match block {
                Block::Paragraph(para) => write_paragraph(&mut w, para)?,
                Block::Table(table) => {
                    write_table(&mut w, table, Some(sp))?;
                    tables += 1;
                }
            }
        }
        log::debug!(
            "SECTION {} blocks={} tables={} usable_width={:.0}",
            si,
            section.blocks.len(),
            tables,
            sp.usable_width()
        );

        // Every section but the last closes with a paragraph carrying its sectPr.
        if si < last {
            start(&mut w, "w:p", &[])?;
            start(&mut w, "w:pPr", &[])?;
            write_section_properties(&mut w, sp)?;
            end(&mut w, "w:pPr")?;
            end(&mut w, "w:p")?;
        } else {
            write_section_properties(&mut w, sp)?;
        }
    }

    end(&mut w, "w:body")?;
    end(&mut w, "w:document")?;
    Ok(w.into_inner())
}
