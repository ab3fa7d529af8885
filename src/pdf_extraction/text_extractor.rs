// Text extraction using pdftotext
//
// The whole document is extracted in one call, without -layout: layout mode
// interleaves columns, which would pair words that are not adjacent.
use anyhow::Result;
use std::path::Path;
use std::process::Command;
use std::time::Instant;

use super::command::{ensure_program, run_tool};
use crate::config::Config;

pub trait TextExtractor {
    /// Full text of a PDF that already has a text layer.
    fn extract(&self, pdf_path: &Path) -> Result<String>;

    fn ensure_available(&self) -> Result<()> {
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct PdfToText {
    program: String,
}

impl PdfToText {
    pub fn new(program: impl Into<String>) -> Self {
        Self { program: program.into() }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.extract_program.clone())
    }

    fn command(&self, pdf_path: &Path) -> Command {
        let mut command = Command::new(&self.program);
        command.args(["-enc", "UTF-8"]).arg(pdf_path).arg("-");
        command
    }
}

impl TextExtractor for PdfToText {
    fn extract(&self, pdf_path: &Path) -> Result<String> {
        let start = Instant::now();
        let output = run_tool(&self.program, self.command(pdf_path), pdf_path)?;

        let text = decode_text(output.stdout, pdf_path);

        tracing::debug!(
            "extracted {} bytes from {} in {}ms",
            text.len(),
            pdf_path.display(),
            start.elapsed().as_millis()
        );
        Ok(text)
    }

    fn ensure_available(&self) -> Result<()> {
        ensure_program(&self.program)
    }
}

fn decode_text(stdout: Vec<u8>, pdf_path: &Path) -> String {
    match String::from_utf8(stdout) {
        Ok(text) => text,
        Err(e) => {
            tracing::debug!("{} produced invalid UTF-8, decoding lossily", pdf_path.display());
            String::from_utf8_lossy(e.as_bytes()).into_owned()
        }
    }
}
