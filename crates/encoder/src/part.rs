use base64::{Engine, engine::general_purpose::STANDARD};
use bytes::Bytes;

use crate::error::ValidationError;
use crate::file::UploadedFile;

/// Hard cap on upload size, enforced before any encoding or network work.
pub const MAX_FILE_SIZE: usize = 10 * 1024 * 1024; // 10 MiB

/// MIME types the inference service accepts as inline images.
pub const ALLOWED_MIME_TYPES: [&str; 3] = ["image/jpeg", "image/png", "image/webp"];

/// Transport-safe inline representation of one image: standard base64
/// payload (no data-URI header) plus the original MIME type.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct EncodedPart {
    pub data: String,
    pub mime_type: String,
}

impl EncodedPart {
    /// Decode back to raw bytes. Inverse of [`encode`].
    pub fn decode(&self) -> Result<Bytes, ValidationError> {
        Ok(STANDARD.decode(&self.data).map(Bytes::from)?)
    }
}

/// Validate an upload and encode it for transport.
///
/// Size is checked before type; both are checked before any bytes are
/// encoded, so an oversized or foreign file never reaches the network.
pub fn encode(file: &UploadedFile) -> Result<EncodedPart, ValidationError> {
    if file.size() > MAX_FILE_SIZE {
        return Err(ValidationError::FileTooLarge {
            size: file.size(),
            max: MAX_FILE_SIZE,
        });
    }
    if !ALLOWED_MIME_TYPES.contains(&file.mime_type.as_str()) {
        return Err(ValidationError::UnsupportedType(file.mime_type.clone()));
    }

    Ok(EncodedPart {
        data: STANDARD.encode(&file.bytes),
        mime_type: file.mime_type.clone(),
    })
}

/// Strip a `data:<mime>;base64,` header from an already-encoded string,
/// retaining only the payload. Strings without a header pass through.
pub fn strip_data_uri(raw: &str) -> &str {
    if raw.starts_with("data:") {
        if let Some((_, payload)) = raw.split_once("base64,") {
            return payload;
        }
    }
    raw
}
