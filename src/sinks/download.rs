use crate::error::SinkError;
use crate::generate::Artifact;
use std::path::{Path, PathBuf};

/// Save the artifact as `<dir>/<filename>`, creating `dir` if needed.
///
/// An existing file with the same name is overwritten.
pub fn download(dir: &Path, artifact: &Artifact) -> Result<PathBuf, SinkError> {
    std::fs::create_dir_all(dir).map_err(|source| SinkError::Save {
        path: dir.to_path_buf(),
        source,
    })?;

    let path = dir.join(&artifact.filename);
    std::fs::write(&path, &artifact.bytes).map_err(|source| SinkError::Save {
        path: path.clone(),
        source,
    })?;

    log::info!("saved {} ({} bytes)", path.display(), artifact.bytes.len());
    Ok(path)
}
