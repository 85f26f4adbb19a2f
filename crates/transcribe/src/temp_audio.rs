use std::ffi::OsStr;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::{
    error::{Result, TranscribeError},
    types::TranscriptionRequest,
};

/// Uploaded audio persisted to a uniquely named temporary file
///
/// The file lives exactly as long as this value; dropping it removes the
/// file on every exit path.
pub(crate) struct TempAudio {
    file: NamedTempFile,
    filename: String,
    content_type: String,
}

impl TempAudio {
    /// Write the upload to `dir` (or the system temp dir), keeping the
    /// original extension so the provider can infer the audio format
    pub async fn persist(request: TranscriptionRequest, dir: Option<&Path>) -> Result<Self> {
        let TranscriptionRequest {
            audio,
            filename,
            content_type,
        } = request;

        let suffix = suffix_for(&filename);
        let dir = dir.map(Path::to_path_buf);

        let file = tokio::task::spawn_blocking(move || -> std::io::Result<NamedTempFile> {
            let mut builder = tempfile::Builder::new();
            builder.prefix("inkwell-audio-").suffix(&suffix);

            let mut file = match dir {
                Some(dir) => builder.tempfile_in(dir)?,
                None => builder.tempfile()?,
            };

            file.write_all(&audio)?;
            file.flush()?;

            Ok(file)
        })
        .await
        .map_err(|e| TranscribeError::Internal(format!("failed to save upload: {e}")))??;

        tracing::debug!(path = %file.path().display(), "audio upload saved");

        Ok(Self {
            file,
            filename,
            content_type,
        })
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    /// Read the saved audio back for upload
    pub async fn read(&self) -> Result<Vec<u8>> {
        Ok(tokio::fs::read(self.path()).await?)
    }

    /// Delete the file now, logging rather than failing if that goes wrong
    pub fn remove(self) {
        let path = self.path().to_path_buf();

        if let Err(e) = self.file.close() {
            tracing::warn!(path = %path.display(), error = %e, "failed to remove temporary audio file");
        }
    }
}

/// `.ext` of the uploaded filename, or nothing for odd or missing extensions
fn suffix_for(filename: &str) -> String {
    Path::new(filename)
        .extension()
        .and_then(OsStr::to_str)
        .filter(|ext| !ext.is_empty() && ext.len() <= 16 && ext.chars().all(|c| c.is_ascii_alphanumeric()))
        .map(|ext| format!(".{ext}"))
        .unwrap_or_default()
}
