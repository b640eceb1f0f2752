//! Download encoding for Retouch.
//!
//! The adjusted buffer is re-encoded as JPEG bytes for the download button,
//! exposed under a fixed filename and MIME type. Grayscale results are
//! expanded back to RGB before encoding so every download is an ordinary
//! color JPEG.

mod jpeg;

pub use jpeg::{
    encode_image, encode_jpeg, EncodeError, DEFAULT_QUALITY, DOWNLOAD_FILENAME, DOWNLOAD_MIME_TYPE,
};
