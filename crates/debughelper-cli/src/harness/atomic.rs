use std::fs;
use std::io::Write;
use std::path::Path;

use serde::Serialize;
use tempfile::NamedTempFile;

use super::{HarnessError, HarnessResult};

/// Write `value` as pretty JSON to `path`.
///
/// The document is staged in a temp file next to the target and persisted
/// with a single rename, so an interrupted run leaves the previous output
/// intact.
pub fn write_json_atomic<T: Serialize>(path: &Path, value: &T) -> HarnessResult<()> {
    if path.file_name().is_none() {
        return Err(HarnessError::Invalid(format!(
            "{}: output path must name a file",
            path.display()
        )));
    }
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)?;

    let mut staged = NamedTempFile::new_in(dir)?;
    serde_json::to_writer_pretty(&mut staged, value)?;
    staged.write_all(b"\n")?;
    staged.as_file().sync_all()?;
    staged.persist(path).map_err(|err| err.error)?;
    Ok(())
}
