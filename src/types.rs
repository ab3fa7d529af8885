// Core types and errors for pdfwords
use std::fmt;
use std::path::PathBuf;

/// Which kind of token the pipeline collects.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum Mode {
    /// Single words, case preserved, ranked by length.
    #[default]
    Words,
    /// Adjacent word pairs, lower-cased, ranked lexicographically.
    Bigrams,
}

impl Mode {
    pub const fn from_flag(bigrams: bool) -> Self {
        if bigrams {
            Mode::Bigrams
        } else {
            Mode::Words
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Words => f.write_str("words"),
            Mode::Bigrams => f.write_str("bigrams"),
        }
    }
}

// Error types
#[derive(Debug, thiserror::Error)]
pub enum WordlistError {
    #[error("required tool `{0}` was not found (install it or point the config at it)")]
    MissingTool(String),

    #[error("input path does not exist: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("input path is neither a file nor a directory: {}", .0.display())]
    InvalidInput(PathBuf),

    #[error("no PDF files found in {}", .0.display())]
    NoDocuments(PathBuf),

    #[error("output directory does not exist: {}", .0.display())]
    OutputDirMissing(PathBuf),

    #[error("cannot write to output directory {}: {source}", .dir.display())]
    OutputNotWritable {
        dir: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("output path is a directory: {}", .0.display())]
    OutputIsDirectory(PathBuf),

    #[error("all {0} document(s) failed, nothing to write")]
    NothingExtracted(usize),

    #[error("{tool} failed on {}: {reason}", .document.display())]
    Tool {
        tool: String,
        document: PathBuf,
        reason: String,
    },

    #[error("invalid config file {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl WordlistError {
    /// Per-document failures are skipped; everything else ends the run.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, WordlistError::Tool { .. })
    }
}
