//! PNG encoding.

use image::{ImageEncoder, RgbaImage};

use crate::export::ExportError;

/// Encode an RGBA bitmap as PNG bytes.
///
/// # Errors
///
/// Returns [`ExportError::EmptyBitmap`] if the image has no pixels and
/// [`ExportError::Encode`] if PNG encoding fails.
pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>, ExportError> {
    if image.width() == 0 || image.height() == 0 {
        return Err(ExportError::EmptyBitmap);
    }
    let mut png_bytes = Vec::new();
    let encoder = image::codecs::png::PngEncoder::new(&mut png_bytes);
    encoder.write_image(
        image.as_raw(),
        image.width(),
        image.height(),
        image::ExtendedColorType::Rgba8,
    )?;
    Ok(png_bytes)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use image::Rgba;

    use super::*;

    const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];

    #[test]
    fn encodes_png_signature() {
        let image = RgbaImage::from_pixel(4, 3, Rgba([47, 29, 20, 255]));
        let bytes = encode_png(&image).unwrap();
        assert_eq!(bytes[..8], PNG_SIGNATURE);
    }

    #[test]
    fn preserves_pixels() {
        let mut image = RgbaImage::from_pixel(2, 2, Rgba([255, 255, 255, 255]));
        image.put_pixel(1, 0, Rgba([27, 15, 10, 128]));
        let bytes = encode_png(&image).unwrap();
        let decoded = image::load_from_memory(&bytes).unwrap().to_rgba8();
        assert_eq!(decoded, image);
    }

    #[test]
    fn rejects_empty_bitmap() {
        let image = RgbaImage::new(0, 10);
        assert!(matches!(encode_png(&image), Err(ExportError::EmptyBitmap)));
    }
}
