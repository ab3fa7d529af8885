// Shared fixtures: fake OCR and extraction tools, scratch corpora
#![allow(dead_code)]

use once_cell::sync::Lazy;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Copies its second-to-last argument to its last; fails on "broken" inputs.
const FAKE_OCR: &str = r#"#!/bin/sh
for arg in "$@"; do prev="$last"; last="$arg"; done
case "$prev" in
  *broken*) echo "fake-ocr: cannot read $prev" >&2; exit 2 ;;
esac
cp "$prev" "$last"
"#;

/// Prints its second-to-last argument, which is the PDF path.
const FAKE_PDFTOTEXT: &str = r#"#!/bin/sh
for arg in "$@"; do prev="$last"; last="$arg"; done
cat "$prev"
"#;

pub struct FakeTools {
    _dir: TempDir,
    pub ocr: PathBuf,
    pub pdftotext: PathBuf,
    pub empty_config: PathBuf,
}

// Written once per test binary, before any test spawns a child, so no
// forked process can still hold a script open for writing.
pub static TOOLS: Lazy<FakeTools> = Lazy::new(|| {
    let dir = tempfile::tempdir().expect("tool dir");
    let ocr = write_script(dir.path(), "fake-ocrmypdf", FAKE_OCR);
    let pdftotext = write_script(dir.path(), "fake-pdftotext", FAKE_PDFTOTEXT);
    let empty_config = dir.path().join("config.toml");
    fs::write(&empty_config, "").expect("config");
    FakeTools {
        _dir: dir,
        ocr,
        pdftotext,
        empty_config,
    }
});

fn write_script(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, body).expect("write script");
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).expect("chmod script");
    path
}

/// `pdfwords` wired to the fake tools and isolated from user config.
pub fn pdfwords() -> Command {
    let tools = &*TOOLS;
    let mut command = Command::new(env!("CARGO_BIN_EXE_pdfwords"));
    command
        .env("PDFWORDS_CONFIG", &tools.empty_config)
        .env("PDFWORDS_OCR_PROGRAM", &tools.ocr)
        .env("PDFWORDS_EXTRACT_PROGRAM", &tools.pdftotext)
        .env_remove("PDFWORDS_OCR_LANGUAGE")
        .env_remove("RUST_LOG");
    command
}

/// Directory of "PDFs" whose bytes are the text the fake extractor prints.
pub fn corpus(files: &[(&str, &str)]) -> TempDir {
    let dir = tempfile::tempdir().expect("corpus dir");
    for (name, text) in files {
        let path = dir.path().join(name);
        fs::create_dir_all(path.parent().expect("parent")).expect("mkdir");
        fs::write(path, text).expect("write document");
    }
    dir
}
