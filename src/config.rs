// Configuration for pdfwords: defaults, TOML file, then environment
use anyhow::{Context, Result};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::types::WordlistError;

pub const DEFAULT_OCR_PROGRAM: &str = "ocrmypdf";
pub const DEFAULT_EXTRACT_PROGRAM: &str = "pdftotext";

pub const ENV_CONFIG: &str = "PDFWORDS_CONFIG";
pub const ENV_OCR_PROGRAM: &str = "PDFWORDS_OCR_PROGRAM";
pub const ENV_EXTRACT_PROGRAM: &str = "PDFWORDS_EXTRACT_PROGRAM";
pub const ENV_OCR_LANGUAGE: &str = "PDFWORDS_OCR_LANGUAGE";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// OCR tool that adds a text layer to a PDF.
    pub ocr_program: String,
    /// Tool that prints the text layer of a PDF on stdout.
    pub extract_program: String,
    /// Tesseract language code(s) handed to the OCR tool, e.g. `eng+deu`.
    pub ocr_language: Option<String>,
    /// Extra arguments appended to every OCR invocation.
    pub ocr_args: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ocr_program: DEFAULT_OCR_PROGRAM.to_string(),
            extract_program: DEFAULT_EXTRACT_PROGRAM.to_string(),
            ocr_language: None,
            ocr_args: Vec::new(),
        }
    }
}

impl Config {
    /// Load the layered configuration.
    ///
    /// An explicit path (flag or `PDFWORDS_CONFIG`) must exist. The per-user
    /// file under the platform config dir is optional.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let explicit = explicit
            .map(Path::to_path_buf)
            .or_else(|| env::var_os(ENV_CONFIG).map(PathBuf::from));

        let mut config = match explicit {
            Some(path) => Self::from_file(&path)?,
            None => match default_config_path().filter(|p| p.is_file()) {
                Some(path) => Self::from_file(&path)?,
                None => Self::default(),
            },
        };

        config.apply_env(|key| env::var(key).ok());
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        let config: Config = toml::from_str(&content).map_err(|source| WordlistError::Config {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Override fields from environment variables; empty values are ignored.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        if let Some(program) = value(ENV_OCR_PROGRAM) {
            self.ocr_program = program;
        }
        if let Some(program) = value(ENV_EXTRACT_PROGRAM) {
            self.extract_program = program;
        }
        if let Some(language) = value(ENV_OCR_LANGUAGE) {
            self.ocr_language = Some(language);
        }
    }
}

/// `<config dir>/pdfwords/config.toml`, if the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("pdfwords").join("config.toml"))
}
