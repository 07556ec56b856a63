use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use docxide_tables::{OutputFormat, WriterOptions};

/// Write a JSON document description as DOCX, resolving a single column
/// grid for every table.
#[derive(Parser)]
#[command(name = "docxide-tables", version, about)]
struct Cli {
    /// Input document (JSON)
    input: PathBuf,

    /// Output path (defaults to the input path with a .docx or .xml extension)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Write only word/document.xml instead of a full DOCX package
    #[arg(long)]
    xml: bool,

    /// Indent the generated XML
    #[arg(long)]
    indent: bool,

    /// Increase log verbosity (-v info, -vv debug). RUST_LOG overrides.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let format = if cli.xml {
        OutputFormat::DocumentXml
    } else {
        OutputFormat::Docx
    };
    let output = cli.output.unwrap_or_else(|| {
        cli.input
            .with_extension(if cli.xml { "xml" } else { "docx" })
    });
    let options = WriterOptions {
        indent: cli.indent,
        format,
    };

    match docxide_tables::convert_json(&cli.input, &output, &options) {
        Ok(()) => {
            log::info!("Wrote {}", output.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
