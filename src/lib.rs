mod docx;
mod error;
pub mod model;

pub use docx::geometry::{CellWidths, declared_widths, nominal_width, usable_width};
pub use docx::grid::{
    GridColumn, ResolvedCell, ResolvedGrid, has_different_cell_widths, resolve_columns,
    resolve_grid,
};
pub use docx::margins::redistribute;
pub use docx::table::{resolve_table_grid, write_table_fragment};
pub use docx::{OutputFormat, WriterOptions, write_document_xml, write_docx};
pub use error::Error;

use std::path::Path;
use std::time::Instant;

use model::Document;

fn read_input(input: &Path) -> Result<Vec<u8>, Error> {
    std::fs::read(input).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound | std::io::ErrorKind::PermissionDenied => Error::Io(
            std::io::Error::new(e.kind(), format!("{}: {}", e, input.display())),
        ),
        _ => Error::Io(e),
    })
}

fn serialize(doc: &Document, options: &WriterOptions) -> Result<Vec<u8>, Error> {
    match options.format {
        OutputFormat::Docx => write_docx(doc, options),
        OutputFormat::DocumentXml => write_document_xml(doc, options),
    }
}

/// Load a JSON document description and write it as DOCX (or bare
/// `document.xml`, depending on `options.format`).
pub fn convert_json(input: &Path, output: &Path, options: &WriterOptions) -> Result<(), Error> {
    let bytes = read_input(input)?;
    convert_json_bytes(&bytes, output, options)
}

pub fn convert_json_bytes(
    input: &[u8],
    output: &Path,
    options: &WriterOptions,
) -> Result<(), Error> {
    let t0 = Instant::now();

    let doc: Document = serde_json::from_slice(input)?;
    let t_parse = t0.elapsed();

    let bytes = serialize(&doc, options)?;
    let t_render = t0.elapsed();

    std::fs::write(output, &bytes).map_err(Error::Io)?;
    let t_total = t0.elapsed();

    log::info!(
        "Timing: parse={:.1}ms, render={:.1}ms, write={:.1}ms, total={:.1}ms (output {} bytes)",
        t_parse.as_secs_f64() * 1000.0,
        (t_render - t_parse).as_secs_f64() * 1000.0,
        (t_total - t_render).as_secs_f64() * 1000.0,
        t_total.as_secs_f64() * 1000.0,
        bytes.len(),
    );

    Ok(())
}

/// Write an in-memory document to `output`.
pub fn write_docx_file(doc: &Document, output: &Path, options: &WriterOptions) -> Result<(), Error> {
    let t0 = Instant::now();
    let bytes = serialize(doc, options)?;
    std::fs::write(output, &bytes).map_err(Error::Io)?;
    log::info!(
        "Timing: render+write={:.1}ms (output {} bytes)",
        t0.elapsed().as_secs_f64() * 1000.0,
        bytes.len(),
    );
    Ok(())
}
