// Shared plumbing for the external PDF tools
use anyhow::Result;
use std::env;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use crate::types::WordlistError;

/// Find a program the way a shell would: paths are checked as given, bare
/// names are searched on `PATH`.
pub fn resolve_program(program: &str) -> Option<PathBuf> {
    let candidate = Path::new(program);
    if candidate.is_absolute() || candidate.components().count() > 1 {
        return is_executable(candidate).then(|| candidate.to_path_buf());
    }

    let paths = env::var_os("PATH")?;
    env::split_paths(&paths)
        .map(|dir| dir.join(program))
        .find(|path| is_executable(path))
}

/// Fail with `MissingTool` unless `program` can be found.
pub fn ensure_program(program: &str) -> Result<()> {
    match resolve_program(program) {
        Some(path) => {
            tracing::debug!("using {} at {}", program, path.display());
            Ok(())
        }
        None => Err(WordlistError::MissingTool(program.to_string()).into()),
    }
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|meta| meta.is_file() && meta.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}

/// Run a tool against one document and wait for it.
///
/// Spawn failures and non-zero exits both come back as
/// `WordlistError::Tool`, which the pipeline treats as a skip.
pub fn run_tool(tool: &str, mut command: Command, document: &Path) -> Result<Output> {
    tracing::trace!(?command, "spawning {}", tool);

    let output = command
        .stdin(Stdio::null())
        .output()
        .map_err(|e| tool_error(tool, document, format!("could not start: {e}")))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        let reason = match last_line(&stderr) {
            Some(line) => format!("{} ({})", output.status, line),
            None => output.status.to_string(),
        };
        return Err(tool_error(tool, document, reason).into());
    }

    Ok(output)
}

fn tool_error(tool: &str, document: &Path, reason: String) -> WordlistError {
    WordlistError::Tool {
        tool: tool.to_string(),
        document: document.to_path_buf(),
        reason,
    }
}

fn last_line(stderr: &str) -> Option<&str> {
    stderr.lines().map(str::trim).filter(|l| !l.is_empty()).last()
}
