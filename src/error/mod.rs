// Program wide error handling

use std::path::PathBuf;

mod display;

pub use display::*;

/// Failures surfaced to the user. Rendering itself cannot fail; these come
/// from reading the snapshot and writing the finished document.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// The snapshot could not be read or did not describe a document.
    #[error("Unable to load {}: {problem}", path.display())]
    Snapshot { path: PathBuf, problem: String },

    /// The destination is already there and overwriting wasn't asked for.
    #[error("File '{}' already exists", path.display())]
    Exists { path: PathBuf },

    /// Writing the rendered document failed.
    #[error("File '{}' could not be written ({source}).", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
