// pdfwords - PDF or folder of PDFs in, ranked word list out
use anyhow::Result;
use clap::Parser;
use std::io::IsTerminal;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use pdfwords::pdf_extraction::{OcrEngine, OcrMyPdf, PdfToText};
use pdfwords::{Config, Mode, Pipeline, RunOptions};

#[derive(Parser, Debug)]
#[command(author, version, about = "Build a deduplicated word or bigram list from PDFs")]
struct Args {
    /// PDF file, or directory searched recursively for *.pdf
    input: PathBuf,

    /// Where to write the list, one token per line
    output: PathBuf,

    /// Collect lower-cased adjacent word pairs instead of words
    #[arg(long)]
    bigrams: bool,

    /// OCR language(s), e.g. `eng+deu`
    #[arg(short, long)]
    language: Option<String>,

    /// Extract the existing text layer without running OCR
    #[arg(long)]
    skip_ocr: bool,

    /// Configuration file (TOML)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// More log output (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, conflicts_with = "quiet")]
    verbose: u8,

    /// Only warnings and errors
    #[arg(short, long)]
    quiet: bool,
}

fn init_tracing(args: &Args) {
    let level = match (args.quiet, args.verbose) {
        (true, _) => "warn",
        (false, 0) => "info",
        (false, 1) => "debug",
        (false, _) => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(&args);

    let mut config = Config::load(args.config.as_deref())?;
    if let Some(language) = &args.language {
        config.ocr_language = Some(language.clone());
    }

    let ocrmypdf = OcrMyPdf::from_config(&config);
    let extractor = PdfToText::from_config(&config);
    let ocr: Option<&dyn OcrEngine> = if args.skip_ocr { None } else { Some(&ocrmypdf) };

    let options = RunOptions {
        input: args.input,
        output: args.output,
        mode: Mode::from_flag(args.bigrams),
    };

    let report = Pipeline::new(ocr, &extractor).run(&options)?;

    if !report.skipped.is_empty() {
        tracing::warn!("{} document(s) skipped", report.skipped.len());
    }
    tracing::info!(
        "wrote {} unique {} ({} seen) from {}/{} document(s) to {} in {}ms",
        report.tokens_written,
        options.mode,
        report.tokens_seen,
        report.documents_processed,
        report.documents_found,
        options.output.display(),
        report.elapsed_ms
    );

    Ok(())
}
