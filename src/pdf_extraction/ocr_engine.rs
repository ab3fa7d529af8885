// OCR stage: make sure every page of a PDF carries a text layer
use anyhow::Result;
use std::path::Path;
use std::process::Command;

use super::command::{ensure_program, run_tool};
use crate::config::Config;

pub trait OcrEngine {
    /// Write a copy of `input` to `output` in which every page has text.
    fn ocr(&self, input: &Path, output: &Path) -> Result<()>;

    /// Check the engine can run at all. Called once before any document.
    fn ensure_available(&self) -> Result<()> {
        Ok(())
    }
}

/// `ocrmypdf` subprocess. Pages that already have text are left alone.
#[derive(Debug, Clone)]
pub struct OcrMyPdf {
    program: String,
    language: Option<String>,
    extra_args: Vec<String>,
}

impl OcrMyPdf {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            language: None,
            extra_args: Vec::new(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self {
            program: config.ocr_program.clone(),
            language: config.ocr_language.clone(),
            extra_args: config.ocr_args.clone(),
        }
    }

    fn command(&self, input: &Path, output: &Path) -> Command {
        let mut command = Command::new(&self.program);
        command.args(["--skip-text", "--quiet"]);
        if let Some(language) = &self.language {
            command.arg("-l").arg(language);
        }
        command.args(&self.extra_args).arg(input).arg(output);
        command
    }
}

impl OcrEngine for OcrMyPdf {
    fn ocr(&self, input: &Path, output: &Path) -> Result<()> {
        run_tool(&self.program, self.command(input, output), input)?;
        Ok(())
    }

    fn ensure_available(&self) -> Result<()> {
        ensure_program(&self.program)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsStr;

    fn args(command: &Command) -> Vec<&OsStr> {
        command.get_args().collect()
    }

    #[test]
    fn test_command_line() {
        let engine = OcrMyPdf::new("ocrmypdf");
        let command = engine.command(Path::new("in.pdf"), Path::new("out.pdf"));

        assert_eq!(command.get_program(), "ocrmypdf");
        assert_eq!(args(&command), ["--skip-text", "--quiet", "in.pdf", "out.pdf"]);
    }

    #[test]
    fn test_language_and_extra_args_precede_paths() {
        let config = Config {
            ocr_language: Some("eng+deu".into()),
            ocr_args: vec!["--rotate-pages".into()],
            ..Config::default()
        };
        let engine = OcrMyPdf::from_config(&config);
        let command = engine.command(Path::new("in.pdf"), Path::new("out.pdf"));

        assert_eq!(
            args(&command),
            ["--skip-text", "--quiet", "-l", "eng+deu", "--rotate-pages", "in.pdf", "out.pdf"]
        );
    }

    #[test]
    fn test_unknown_program_is_unavailable() {
        let engine = OcrMyPdf::new("pdfwords-missing-ocr-9c2d");
        assert!(engine.ensure_available().is_err());
    }
}
