//! Output destinations.

use anyhow::{Context, Result};
use std::io::{self, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// True when `path` means standard output.
pub fn is_stdout(path: &Path) -> bool {
    path.as_os_str() == "-"
}

/// Writes `bytes` to `path` so that readers see either the old file or the
/// complete new one.
///
/// The data goes to a temporary file in the destination directory, which is
/// then renamed over `path`.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(dir)
        .with_context(|| format!("creating temporary file in {}", dir.display()))?;
    file.write_all(bytes)
        .with_context(|| format!("writing {}", file.path().display()))?;
    file.as_file()
        .sync_all()
        .with_context(|| format!("syncing {}", file.path().display()))?;
    file.persist(path)
        .map_err(|e| e.error)
        .with_context(|| format!("replacing {}", path.display()))?;
    Ok(())
}

/// Writes to stdout for `-`, atomically to a file otherwise.
pub fn emit(path: &Path, bytes: &[u8]) -> Result<()> {
    if is_stdout(path) {
        let mut stdout = io::stdout().lock();
        stdout.write_all(bytes).context("writing to stdout")?;
        stdout.flush().context("flushing stdout")?;
        Ok(())
    } else {
        write_atomic(path, bytes)
    }
}
