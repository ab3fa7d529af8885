// Input discovery: a single PDF or every PDF under a directory
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::types::WordlistError;

/// Documents to process for `input`, in a stable order.
///
/// A file is taken as is, whatever its extension. A directory is walked
/// recursively for `*.pdf` (any case); symlinked directories are not followed.
pub fn discover_documents(input: &Path) -> Result<Vec<PathBuf>> {
    if !input.exists() {
        return Err(WordlistError::InputNotFound(input.to_path_buf()).into());
    }
    if input.is_file() {
        return Ok(vec![input.to_path_buf()]);
    }
    if !input.is_dir() {
        return Err(WordlistError::InvalidInput(input.to_path_buf()).into());
    }

    let mut documents = Vec::new();
    collect_pdfs(input, &mut documents)?;
    if documents.is_empty() {
        return Err(WordlistError::NoDocuments(input.to_path_buf()).into());
    }
    documents.sort();
    Ok(documents)
}

fn collect_pdfs(dir: &Path, documents: &mut Vec<PathBuf>) -> Result<()> {
    let entries = fs::read_dir(dir).with_context(|| format!("reading directory {}", dir.display()))?;

    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!("skipping unreadable entry in {}: {}", dir.display(), e);
                continue;
            }
        };
        let path = entry.path();
        let file_type = match entry.file_type() {
            Ok(file_type) => file_type,
            Err(e) => {
                tracing::warn!("skipping {}: {}", path.display(), e);
                continue;
            }
        };

        if file_type.is_dir() {
            // Only the input directory itself has to be readable.
            if let Err(e) = collect_pdfs(&path, documents) {
                tracing::warn!("skipping directory {}: {:#}", path.display(), e);
            }
        } else if is_pdf(&path) && path.is_file() {
            documents.push(path);
        }
    }
    Ok(())
}

fn is_pdf(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("pdf"))
        .unwrap_or(false)
}
