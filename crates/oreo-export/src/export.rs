//! Export of a rendered card to a downloadable PNG.
//!
//! The export flow is: rasterize the live element, encode the bitmap
//! as PNG, hand the bytes to a file saver under [`EXPORT_FILENAME`].
//! The first and last steps need a browser, so they are abstracted as
//! [`Rasterizer`] and [`FileSaver`]; this module only sequences them.

use image::RgbaImage;

/// Name of the downloaded file.
pub const EXPORT_FILENAME: &str = "my-oreo.png";

/// MIME type of the downloaded file.
pub const PNG_MIME: &str = "image/png";

/// Errors that can occur while exporting.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// The element could not be turned into a bitmap.
    #[error("rasterization failed: {0}")]
    Rasterize(String),

    /// The rasterized bitmap has no pixels.
    #[error("rasterized image is empty")]
    EmptyBitmap,

    /// PNG encoding failed.
    #[error("PNG encoding failed: {0}")]
    Encode(String),

    /// The file could not be handed to the user.
    #[error("saving {filename} failed: {reason}")]
    Save {
        /// File that was being saved.
        filename: String,
        /// What went wrong.
        reason: String,
    },
}

impl From<image::ImageError> for ExportError {
    fn from(err: image::ImageError) -> Self {
        Self::Encode(err.to_string())
    }
}

/// Turns a rendered element into a bitmap of its current appearance.
#[allow(async_fn_in_trait)] // only awaited on the single-threaded UI loop
pub trait Rasterizer {
    /// Handle to the rendered element.
    type Target;

    /// Capture `target` as it currently looks.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::Rasterize`] if the element cannot be
    /// captured.
    async fn rasterize(&self, target: &Self::Target) -> Result<RgbaImage, ExportError>;
}

/// Delivers a finished file to the user.
pub trait FileSaver {
    /// Save `bytes` as `filename`.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::Save`] if the file cannot be delivered.
    fn save(&self, bytes: &[u8], filename: &str, mime_type: &str) -> Result<(), ExportError>;
}

/// What [`export_png`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// There was no rendered element to capture; nothing happened.
    Skipped,
    /// The file was handed to the saver.
    Saved {
        /// Name the file was saved under.
        filename: &'static str,
        /// Size of the PNG in bytes.
        bytes: usize,
    },
}

/// Rasterize `target` and save it as [`EXPORT_FILENAME`].
///
/// When `target` is `None` (the card is not mounted) this is a no-op:
/// the rasterizer and saver are not called and
/// [`ExportOutcome::Skipped`] is returned.
///
/// # Errors
///
/// Propagates rasterization, encoding and saving failures. The saver is
/// not called if an earlier step fails.
#[allow(clippy::future_not_send)] // WASM is single-threaded; Send is not needed
pub async fn export_png<R, S>(
    target: Option<&R::Target>,
    rasterizer: &R,
    saver: &S,
) -> Result<ExportOutcome, ExportError>
where
    R: Rasterizer,
    S: FileSaver,
{
    let Some(target) = target else {
        return Ok(ExportOutcome::Skipped);
    };

    let bitmap = rasterizer.rasterize(target).await?;
    let png = crate::png::encode_png(&bitmap)?;
    saver.save(&png, EXPORT_FILENAME, PNG_MIME)?;

    Ok(ExportOutcome::Saved {
        filename: EXPORT_FILENAME,
        bytes: png.len(),
    })
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use image::Rgba;

    use super::*;

    /// Rasterizes a "card" given as its size.
    struct FakeRasterizer {
        calls: RefCell<usize>,
    }

    impl FakeRasterizer {
        const fn new() -> Self {
            Self {
                calls: RefCell::new(0),
            }
        }
    }

    impl Rasterizer for FakeRasterizer {
        type Target = (u32, u32);

        async fn rasterize(&self, target: &(u32, u32)) -> Result<RgbaImage, ExportError> {
            *self.calls.borrow_mut() += 1;
            let (w, h) = *target;
            if w == u32::MAX {
                return Err(ExportError::Rasterize("detached".into()));
            }
            Ok(RgbaImage::from_pixel(w, h, Rgba([255, 255, 255, 255])))
        }
    }

    #[derive(Default)]
    struct RecordingSaver {
        saved: RefCell<Vec<(String, String, Vec<u8>)>>,
        fail: bool,
    }

    impl FileSaver for RecordingSaver {
        fn save(&self, bytes: &[u8], filename: &str, mime_type: &str) -> Result<(), ExportError> {
            if self.fail {
                return Err(ExportError::Save {
                    filename: filename.into(),
                    reason: "blocked".into(),
                });
            }
            self.saved
                .borrow_mut()
                .push((filename.into(), mime_type.into(), bytes.to_vec()));
            Ok(())
        }
    }

    #[test]
    fn no_target_is_a_no_op() {
        let rasterizer = FakeRasterizer::new();
        let saver = RecordingSaver::default();
        let outcome = pollster::block_on(export_png(None, &rasterizer, &saver));
        assert!(matches!(outcome, Ok(ExportOutcome::Skipped)));
        assert_eq!(*rasterizer.calls.borrow(), 0);
        assert!(saver.saved.borrow().is_empty());
    }

    #[test]
    fn saves_png_under_fixed_name() {
        let rasterizer = FakeRasterizer::new();
        let saver = RecordingSaver::default();
        let outcome = pollster::block_on(export_png(Some(&(8, 6)), &rasterizer, &saver));

        let saved = saver.saved.borrow();
        assert_eq!(saved.len(), 1);
        let (filename, mime, bytes) = &saved[0];
        assert_eq!(filename, "my-oreo.png");
        assert_eq!(mime, "image/png");
        assert!(bytes.starts_with(b"\x89PNG"));
        assert!(matches!(
            outcome,
            Ok(ExportOutcome::Saved { filename: "my-oreo.png", bytes }) if bytes == saved[0].2.len()
        ));
    }

    #[test]
    fn rasterize_failure_skips_save() {
        let rasterizer = FakeRasterizer::new();
        let saver = RecordingSaver::default();
        let outcome = pollster::block_on(export_png(Some(&(u32::MAX, 1)), &rasterizer, &saver));
        assert!(matches!(outcome, Err(ExportError::Rasterize(_))));
        assert!(saver.saved.borrow().is_empty());
    }

    #[test]
    fn empty_bitmap_skips_save() {
        let rasterizer = FakeRasterizer::new();
        let saver = RecordingSaver::default();
        let outcome = pollster::block_on(export_png(Some(&(0, 0)), &rasterizer, &saver));
        assert!(matches!(outcome, Err(ExportError::EmptyBitmap)));
        assert!(saver.saved.borrow().is_empty());
    }

    #[test]
    fn save_failure_is_reported() {
        let rasterizer = FakeRasterizer::new();
        let saver = RecordingSaver {
            fail: true,
            ..RecordingSaver::default()
        };
        let outcome = pollster::block_on(export_png(Some(&(2, 2)), &rasterizer, &saver));
        let err = outcome.err().map(|e| e.to_string()).unwrap_or_default();
        assert_eq!(err, "saving my-oreo.png failed: blocked");
    }
}
