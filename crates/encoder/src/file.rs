use std::path::Path;

use bytes::Bytes;

use crate::error::ValidationError;

/// One file handed over by the upload boundary: display name, declared MIME
/// type, and the raw bytes.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub name: String,
    pub mime_type: String,
    pub bytes: Bytes,
}

impl UploadedFile {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, bytes: Bytes) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            bytes,
        }
    }

    /// Load a file from disk without blocking, inferring the MIME type from
    /// the extension. Unknown extensions map to `application/octet-stream`
    /// and are rejected later by validation.
    pub async fn read(path: impl AsRef<Path>) -> Result<Self, ValidationError> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let mime_type = mime_from_extension(path);
        Ok(Self {
            name,
            mime_type,
            bytes: Bytes::from(bytes),
        })
    }

    pub fn size(&self) -> usize {
        self.bytes.len()
    }
}

fn mime_from_extension(path: &Path) -> String {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "webp" => "image/webp",
        _ => "application/octet-stream",
    }
    .to_string()
}
