// Run orchestration: check tools, discover inputs, process, rank, write
use anyhow::{Context, Result};
use std::path::PathBuf;
use std::time::Instant;

use crate::discovery::discover_documents;
use crate::pdf_extraction::{DocumentProcessor, OcrEngine, TextExtractor};
use crate::types::{Mode, WordlistError};
use crate::wordlist::{check_destination, write_ranked, TokenSet};

#[derive(Debug, Clone)]
pub struct RunOptions {
    pub input: PathBuf,
    pub output: PathBuf,
    pub mode: Mode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedDocument {
    pub path: PathBuf,
    pub reason: String,
}

#[derive(Debug, Clone, Default)]
pub struct RunReport {
    pub documents_found: usize,
    pub documents_processed: usize,
    pub skipped: Vec<SkippedDocument>,
    pub tokens_seen: usize,
    pub tokens_written: usize,
    pub elapsed_ms: u64,
}

/// The external collaborators of a run. `ocr: None` means extract without OCR.
pub struct Pipeline<'a> {
    ocr: Option<&'a dyn OcrEngine>,
    extractor: &'a dyn TextExtractor,
}

impl<'a> Pipeline<'a> {
    pub fn new(ocr: Option<&'a dyn OcrEngine>, extractor: &'a dyn TextExtractor) -> Self {
        Self { ocr, extractor }
    }

    /// Fatal errors abort before the output is touched. Per-document tool
    /// failures are logged and skipped.
    pub fn run(&self, options: &RunOptions) -> Result<RunReport> {
        let start = Instant::now();

        if let Some(ocr) = self.ocr {
            ocr.ensure_available()?;
        }
        self.extractor.ensure_available()?;
        check_destination(&options.output)?;

        let documents = discover_documents(&options.input)?;
        tracing::info!(
            "found {} document(s) under {}, collecting {}",
            documents.len(),
            options.input.display(),
            options.mode
        );

        // Scratch space for OCR output, released on every exit path.
        let scratch = tempfile::Builder::new()
            .prefix("pdfwords-")
            .tempdir()
            .context("creating scratch directory")?;

        let processor = DocumentProcessor::new(self.ocr, self.extractor, scratch.path(), options.mode);
        let mut tokens = TokenSet::new(options.mode);
        let mut report = RunReport {
            documents_found: documents.len(),
            ..RunReport::default()
        };

        for (index, document) in documents.iter().enumerate() {
            tracing::info!("[{}/{}] {}", index + 1, documents.len(), document.display());
            match processor.process(document, &mut tokens) {
                Ok(count) => {
                    tracing::debug!("{} token(s) from {}", count, document.display());
                    report.documents_processed += 1;
                }
                Err(e) if is_recoverable(&e) => {
                    tracing::warn!("skipping {}: {:#}", document.display(), e);
                    report.skipped.push(SkippedDocument {
                        path: document.clone(),
                        reason: format!("{e:#}"),
                    });
                }
                Err(e) => return Err(e.context(format!("processing {}", document.display()))),
            }
        }

        if report.documents_processed == 0 {
            return Err(WordlistError::NothingExtracted(report.documents_found).into());
        }

        report.tokens_seen = tokens.seen();
        let ranked = tokens.rank();
        report.tokens_written = ranked.len();
        write_ranked(&ranked, &options.output)?;

        report.elapsed_ms = start.elapsed().as_millis() as u64;
        Ok(report)
    }
}

fn is_recoverable(error: &anyhow::Error) -> bool {
    error
        .downcast_ref::<WordlistError>()
        .map(WordlistError::is_recoverable)
        .unwrap_or(false)
}
