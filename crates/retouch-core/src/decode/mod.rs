//! Upload decoding for Retouch.
//!
//! Turns the raw bytes of an uploaded JPEG or PNG file into an RGB
//! [`ImageBuffer`](crate::buffer::ImageBuffer), applying EXIF orientation
//! correction so photos display the way the camera saw them. Decoding is
//! synchronous; a corrupt upload fails here and nothing downstream runs.

mod reader;
mod types;

pub use reader::{decode_image, get_orientation};
pub use types::{DecodeError, Orientation};
