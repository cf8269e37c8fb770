mod error;
mod file;
mod part;

pub use error::ValidationError;
pub use file::UploadedFile;
pub use part::{ALLOWED_MIME_TYPES, EncodedPart, MAX_FILE_SIZE, encode, strip_data_uri};
