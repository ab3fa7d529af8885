// Output sink: one token per line, written atomically
use anyhow::{Context, Result};
use std::io::{BufWriter, Write};
use std::path::Path;

use super::ranker::RankedList;
use crate::types::WordlistError;

/// Directory the output file will live in.
pub fn output_dir(destination: &Path) -> &Path {
    match destination.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

/// Fail early if `destination` can never be written.
pub fn check_destination(destination: &Path) -> Result<()> {
    if destination.is_dir() {
        return Err(WordlistError::OutputIsDirectory(destination.to_path_buf()).into());
    }
    let dir = output_dir(destination);
    if !dir.is_dir() {
        return Err(WordlistError::OutputDirMissing(dir.to_path_buf()).into());
    }

    // Same kind of file write_ranked creates; removed again on drop.
    tempfile::Builder::new()
        .prefix(".pdfwords-")
        .suffix(".tmp")
        .tempfile_in(dir)
        .map_err(|source| WordlistError::OutputNotWritable {
            dir: dir.to_path_buf(),
            source,
        })?;
    Ok(())
}

/// Write `list` to `destination`.
///
/// Lines go to a temp file next to the destination, which is renamed into
/// place only once everything is flushed. On error the temp file is removed
/// and `destination` is untouched.
pub fn write_ranked(list: &RankedList, destination: &Path) -> Result<()> {
    let dir = output_dir(destination);
    let mut file = tempfile::Builder::new()
        .prefix(".pdfwords-")
        .suffix(".tmp")
        .tempfile_in(dir)
        .with_context(|| format!("creating temporary output in {}", dir.display()))?;

    {
        let mut writer = BufWriter::new(file.as_file_mut());
        for token in list.iter() {
            writeln!(writer, "{token}")?;
        }
        writer.flush().context("flushing word list")?;
    }
    file.as_file().sync_all()?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        file.as_file()
            .set_permissions(std::fs::Permissions::from_mode(0o644))?;
    }

    file.persist(destination)
        .map_err(|e| e.error)
        .with_context(|| format!("moving word list into {}", destination.display()))?;
    Ok(())
}
