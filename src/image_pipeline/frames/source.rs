use std::path::{Path, PathBuf};

use tracing::{debug, instrument};
use crate::image_pipeline::common::error::{Result, SheetError};

/// Lists the frame files of `dir`, sorted by the raw bytes of their file names.
///
/// Only regular files whose name ends with `extension` are kept. Subdirectories
/// are never descended into. The returned order is the animation order.
#[instrument(skip(dir), fields(dir = %dir.as_ref().display()))]
pub fn list_frame_files<P: AsRef<Path>>(dir: P, extension: &str) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();

    let entries = std::fs::read_dir(dir).map_err(|e| {
        SheetError::InputReadError(format!("{}: {}", dir.display(), e))
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry?;
        let name = entry.file_name();
        if !name.as_encoded_bytes().ends_with(extension.as_bytes()) {
            continue;
        }
        let path = entry.path();
        if !path.is_file() {
            debug!("Skipping non-file entry {}", path.display());
            continue;
        }
        files.push(path);
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    debug!("Found {} frame files", files.len());
    Ok(files)
}
