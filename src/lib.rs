//! pdfwords - turn PDFs into a deduplicated, ranked word or bigram list.
//!
//! OCR and text extraction are delegated to `ocrmypdf` and `pdftotext`;
//! tokenizing, NFKC normalization, deduplication and ranking happen here.

pub mod config;
pub mod discovery;
pub mod pdf_extraction;
pub mod pipeline;
pub mod types;
pub mod wordlist;

pub use config::Config;
pub use pipeline::{Pipeline, RunOptions, RunReport};
pub use types::{Mode, WordlistError};
