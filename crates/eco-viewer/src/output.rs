use std::fs;
use std::io::{self, Write};
use std::path::Path;

use tempfile::NamedTempFile;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OutputError {
    #[error("failed to write {path}: {source}")]
    Io { path: String, source: io::Error },
}

fn parent_dir_or_dot(path: &Path) -> &Path {
    // `Path::parent` returns `Some("")` for bare relative file names like `page.html`.
    path.parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."))
}

/// Write a rendered page to `dest` via a temp file in the same directory, so readers never see
/// a partially written page.
pub fn write_output(dest: impl AsRef<Path>, bytes: &[u8]) -> Result<(), OutputError> {
    let dest = dest.as_ref();
    let wrap = |source: io::Error| OutputError::Io {
        path: dest.display().to_string(),
        source,
    };

    let dir = parent_dir_or_dot(dest);
    fs::create_dir_all(dir).map_err(wrap)?;

    let mut tmp = NamedTempFile::new_in(dir).map_err(wrap)?;
    tmp.write_all(bytes).map_err(wrap)?;
    tmp.as_file_mut().flush().map_err(wrap)?;
    tmp.as_file().sync_all().map_err(wrap)?;
    tmp.persist(dest).map_err(|err| wrap(err.error))?;

    log::debug!("wrote {} bytes to {}", bytes.len(), dest.display());
    Ok(())
}
