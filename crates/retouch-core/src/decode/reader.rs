//! JPEG/PNG decoding with EXIF orientation handling.

use std::io::Cursor;

use exif::{In, Reader, Tag};
use image::{DynamicImage, ImageFormat, ImageReader};

use super::{DecodeError, Orientation};
use crate::buffer::ImageBuffer;

/// Decode uploaded JPEG or PNG bytes into an RGB buffer.
///
/// The format is guessed from the file content, not a filename, and EXIF
/// orientation correction is applied before the pixels are handed to the
/// pipeline.
///
/// # Errors
///
/// Returns `DecodeError::InvalidFormat` if the bytes are not a JPEG or PNG,
/// and `DecodeError::CorruptedFile` if they are but cannot be decoded.
pub fn decode_image(bytes: &[u8]) -> Result<ImageBuffer, DecodeError> {
    // Orientation comes from the EXIF container, read before pixel decode.
    let orientation = extract_orientation(bytes);

    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    match reader.format() {
        Some(ImageFormat::Jpeg) | Some(ImageFormat::Png) => {}
        _ => return Err(DecodeError::InvalidFormat),
    }

    let img = reader
        .decode()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    let oriented = apply_orientation(img, orientation);
    Ok(ImageBuffer::from_rgb_image(oriented.into_rgb8()))
}

/// Extract the EXIF orientation from upload bytes (for external use).
///
/// Returns `Orientation::Normal` when there is no EXIF data or it cannot
/// be parsed.
pub fn get_orientation(bytes: &[u8]) -> Orientation {
    extract_orientation(bytes)
}

fn extract_orientation(bytes: &[u8]) -> Orientation {
    let mut cursor = Cursor::new(bytes);
    match Reader::new().read_from_container(&mut cursor) {
        Ok(exif) => exif
            .get_field(Tag::Orientation, In::PRIMARY)
            .and_then(|field| field.value.get_uint(0))
            .map(Orientation::from)
            .unwrap_or_default(),
        Err(_) => Orientation::Normal,
    }
}

/// Apply an EXIF orientation transformation to a decoded image.
fn apply_orientation(img: DynamicImage, orientation: Orientation) -> DynamicImage {
    match orientation {
        Orientation::Normal => img,
        Orientation::FlipHorizontal => img.fliph(),
        Orientation::Rotate180 => img.rotate180(),
        Orientation::FlipVertical => img.flipv(),
        Orientation::Transpose => img.rotate90().fliph(),
        Orientation::Rotate90CW => img.rotate90(),
        Orientation::Transverse => img.rotate270().fliph(),
        Orientation::Rotate270CW => img.rotate270(),
    }
}
