use std::path::Path;

use tempfile::TempPath;

use crate::error::SttError;

/// Transient on-disk copy of an upload
///
/// The file is removed when the guard drops, which covers every exit
/// path out of the handler, including errors between spooling and the
/// provider call resolving.
pub struct SpoolFile {
    path: TempPath,
}

impl SpoolFile {
    /// Write bytes to a fresh spool file
    ///
    /// Uses the given directory, or the system temp dir when `None`.
    pub async fn write(dir: Option<&Path>, bytes: &[u8]) -> Result<Self, SttError> {
        let mut builder = tempfile::Builder::new();
        builder.prefix("concierge-upload-");

        let file = match dir {
            Some(dir) => builder.tempfile_in(dir),
            None => builder.tempfile(),
        }?;

        let path = file.into_temp_path();
        tokio::fs::write(&path, bytes).await?;

        Ok(Self { path })
    }

    /// Read the spooled bytes back
    pub async fn read(&self) -> Result<Vec<u8>, SttError> {
        Ok(tokio::fs::read(&self.path).await?)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
