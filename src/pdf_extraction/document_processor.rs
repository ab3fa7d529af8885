// Per-document stage: OCR, extract, tokenize, accumulate
use anyhow::{Context, Result};
use std::path::Path;

use super::ocr_engine::OcrEngine;
use super::text_extractor::TextExtractor;
use crate::types::Mode;
use crate::wordlist::{tokenize, TokenSet};

pub struct DocumentProcessor<'a> {
    ocr: Option<&'a dyn OcrEngine>,
    extractor: &'a dyn TextExtractor,
    scratch: &'a Path,
    mode: Mode,
}

impl<'a> DocumentProcessor<'a> {
    /// `ocr: None` extracts straight from the source PDF. OCR'd copies are
    /// created under `scratch`.
    pub fn new(
        ocr: Option<&'a dyn OcrEngine>,
        extractor: &'a dyn TextExtractor,
        scratch: &'a Path,
        mode: Mode,
    ) -> Self {
        Self {
            ocr,
            extractor,
            scratch,
            mode,
        }
    }

    /// Add every token of `document` to `tokens` and return how many were
    /// produced.
    ///
    /// Nothing is added unless extraction succeeded, so a failed document
    /// never contributes partial output.
    pub fn process(&self, document: &Path, tokens: &mut TokenSet) -> Result<usize> {
        let text = self.text_of(document)?;

        let before = tokens.seen();
        tokens.extend(tokenize(self.mode, &text));
        let produced = tokens.seen() - before;

        if produced == 0 {
            tracing::debug!("{} has no letters", document.display());
        }
        Ok(produced)
    }

    fn text_of(&self, document: &Path) -> Result<String> {
        let Some(engine) = self.ocr else {
            return self.extractor.extract(document);
        };

        // Removed on drop, whether or not OCR or extraction worked.
        let artifact = tempfile::Builder::new()
            .prefix("ocr-")
            .suffix(".pdf")
            .tempfile_in(self.scratch)
            .with_context(|| format!("creating OCR output in {}", self.scratch.display()))?;

        engine.ocr(document, artifact.path())?;
        tracing::debug!("OCR done for {}", document.display());
        self.extractor.extract(artifact.path())
    }
}
