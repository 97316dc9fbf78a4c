//! Writing exported documents out

use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::ExportError;
use crate::export::Format;
use crate::templating::UNTITLED;

/// Write the finished text to `path`, or to standard output if the path is
/// `-`. An existing file is only replaced if `overwrite` is set.
pub fn write(path: &Path, text: &str, overwrite: bool) -> Result<(), ExportError> {
    let failed = |source| ExportError::Write {
        path: path.to_path_buf(),
        source,
    };

    if path.to_str() == Some("-") {
        let mut stdout = std::io::stdout().lock();
        stdout
            .write_all(text.as_bytes())
            .and_then(|_| stdout.flush())
            .map_err(failed)?;
        debug!("Wrote {} bytes to standard output", text.len());
        return Ok(());
    }

    if !overwrite && path.exists() {
        return Err(ExportError::Exists {
            path: path.to_path_buf(),
        });
    }

    std::fs::write(path, text).map_err(failed)?;

    info!("Wrote {} bytes to {}", text.len(), path.display());
    Ok(())
}

/// Where to put an export when no destination was given: beside the source
/// file, named after it but with the format's extension. If the source
/// already has that extension `_export` is added so the source itself is
/// not the target.
pub fn suggested_filename(file_name: Option<&str>, format: Format) -> PathBuf {
    let extension = format.extension();

    let name = match file_name {
        Some(name) => name,
        None => return PathBuf::from(format!("{}{}", UNTITLED, extension)),
    };

    let path = Path::new(name);
    let stem = path
        .file_stem()
        .map(|stem| {
            stem.to_string_lossy()
                .into_owned()
        })
        .unwrap_or_else(|| UNTITLED.to_string());
    let suffix = if name.ends_with(extension) {
        "_export"
    } else {
        ""
    };

    let file = format!("{}{}{}", stem, suffix, extension);

    match path.parent() {
        Some(directory) => directory.join(file),
        None => PathBuf::from(file),
    }
}
