//! Canvas rasterization of rendered SVG elements.
//!
//! Captures an inline `<svg>` exactly as it is laid out on the page:
//! the element's markup is serialized, loaded into an image through a
//! Blob URL, drawn onto an offscreen canvas at device resolution, and
//! read back as RGBA pixels.

use image::RgbaImage;
use oreo_export::{ExportError, Rasterizer};
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{BlobPropertyBag, CanvasRenderingContext2d, Element, HtmlCanvasElement, HtmlImageElement};

/// Errors that can occur while rasterizing an element.
#[derive(Debug, thiserror::Error)]
pub enum RasterError {
    /// The target neither is nor contains an `<svg>` element.
    #[error("no <svg> element to capture")]
    NoSvg,

    /// The element has no area on the page.
    #[error("element is not laid out")]
    NotLaidOut,

    /// The canvas returned a pixel buffer of the wrong length.
    #[error("canvas pixel buffer does not match {0}x{1}")]
    BufferSize(u32, u32),

    /// A browser API call returned an error.
    #[error("browser API error: {0}")]
    JsError(String),
}

impl From<JsValue> for RasterError {
    fn from(value: JsValue) -> Self {
        Self::JsError(format!("{value:?}"))
    }
}

/// [`Rasterizer`] that captures live DOM elements through a canvas.
#[derive(Debug, Clone, Copy)]
pub struct BrowserRasterizer {
    scale: f64,
}

impl BrowserRasterizer {
    /// Rasterize at the display's device pixel ratio, so the image is
    /// as sharp as what is on screen.
    #[must_use]
    pub fn new() -> Self {
        let scale = web_sys::window().map_or(1.0, |w| w.device_pixel_ratio());
        Self::with_scale(scale)
    }

    /// Rasterize at a fixed scale (1.0 = one pixel per CSS pixel).
    /// Non-finite or non-positive scales fall back to 1.0.
    #[must_use]
    pub fn with_scale(scale: f64) -> Self {
        let scale = if scale.is_finite() && scale > 0.0 {
            scale
        } else {
            1.0
        };
        Self { scale }
    }
}

impl Default for BrowserRasterizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Rasterizer for BrowserRasterizer {
    type Target = Element;

    async fn rasterize(&self, target: &Element) -> Result<RgbaImage, ExportError> {
        rasterize_element(target, self.scale)
            .await
            .map_err(|e| ExportError::Rasterize(e.to_string()))
    }
}

/// Convert a CSS length to a whole number of device pixels (at least 1).
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn device_pixels(css: f64, scale: f64) -> u32 {
    (css * scale).round().clamp(1.0, f64::from(u32::MAX)) as u32
}

/// Untransformed CSS size of `svg`: its `width`/`height` attributes,
/// or else its layout box. Neither changes when an ancestor is rotated
/// or scaled, unlike the bounding client rect.
fn layout_size(svg: &Element) -> Option<(f64, f64)> {
    let attribute = |name: &str| svg.get_attribute(name).as_deref().and_then(parse_css_px);
    let size = match (attribute("width"), attribute("height")) {
        (Some(w), Some(h)) => (w, h),
        _ => (f64::from(svg.client_width()), f64::from(svg.client_height())),
    };
    Some(size).filter(|&(w, h)| w > 0.0 && h > 0.0)
}

/// Parse a unitless or `px` length such as `"352"` or `"352px"`.
fn parse_css_px(value: &str) -> Option<f64> {
    let value = value.trim();
    value
        .strip_suffix("px")
        .unwrap_or(value)
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
}

/// The `<svg>` to capture: `element` itself or its first `<svg>`
/// descendant.
fn find_svg(element: &Element) -> Result<Element, RasterError> {
    if element.tag_name().eq_ignore_ascii_case("svg") {
        return Ok(element.clone());
    }
    element.query_selector("svg")?.ok_or(RasterError::NoSvg)
}

#[allow(clippy::future_not_send)] // WASM is single-threaded; DOM handles are !Send
async fn rasterize_element(element: &Element, scale: f64) -> Result<RgbaImage, RasterError> {
    let svg = find_svg(element)?;

    let (css_width, css_height) = layout_size(&svg).ok_or(RasterError::NotLaidOut)?;
    let width = device_pixels(css_width, scale);
    let height = device_pixels(css_height, scale);

    let url = svg_blob_url(&svg.outer_html())?;
    let loaded = load_image(&url).await;
    revoke_blob_url(&url);
    let image = loaded?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| RasterError::JsError("no document".into()))?;
    let canvas: HtmlCanvasElement = document
        .create_element("canvas")?
        .dyn_into()
        .map_err(|e| RasterError::JsError(format!("failed to cast canvas: {e:?}")))?;
    canvas.set_width(width);
    canvas.set_height(height);

    let context: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or_else(|| RasterError::JsError("no 2d context".into()))?
        .dyn_into()
        .map_err(|e| RasterError::JsError(format!("failed to cast 2d context: {e:?}")))?;

    let (w, h) = (f64::from(width), f64::from(height));
    context.draw_image_with_html_image_element_and_dw_and_dh(&image, 0.0, 0.0, w, h)?;
    let pixels = context.get_image_data(0.0, 0.0, w, h)?.data();

    RgbaImage::from_raw(width, height, pixels.0).ok_or(RasterError::BufferSize(width, height))
}

/// Wrap SVG markup in a Blob and return its object URL.
///
/// The returned URL must be revoked via [`revoke_blob_url`] when no
/// longer needed to avoid memory leaks.
fn svg_blob_url(markup: &str) -> Result<String, RasterError> {
    let parts = js_sys::Array::new();
    parts.push(&JsValue::from_str(markup));

    let opts = BlobPropertyBag::new();
    opts.set_type("image/svg+xml;charset=utf-8");
    let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &opts)?;

    Ok(web_sys::Url::create_object_url_with_blob(&blob)?)
}

/// Load `url` into a detached image and wait until it has decoded.
#[allow(clippy::future_not_send)]
async fn load_image(url: &str) -> Result<HtmlImageElement, RasterError> {
    let image = HtmlImageElement::new()?;
    let promise = js_sys::Promise::new(&mut |resolve, reject| {
        image.set_onload(Some(&resolve));
        image.set_onerror(Some(&reject));
    });
    image.set_src(url);

    let loaded = JsFuture::from(promise).await;
    image.set_onload(None);
    image.set_onerror(None);
    loaded?;

    Ok(image)
}

/// Revoke a Blob URL created by [`svg_blob_url`].
///
/// Best-effort: failures are silently ignored since the URL may have
/// already been revoked or garbage collected.
fn revoke_blob_url(url: &str) {
    let _ = web_sys::Url::revoke_object_url(url);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn device_pixels_scales_and_rounds() {
        assert_eq!(device_pixels(352.0, 1.0), 352);
        assert_eq!(device_pixels(352.0, 2.0), 704);
        assert_eq!(device_pixels(100.4, 1.5), 151);
    }

    #[test]
    fn device_pixels_is_at_least_one() {
        assert_eq!(device_pixels(0.1, 1.0), 1);
    }

    #[test]
    fn css_lengths_parse_without_units_or_in_px() {
        assert_eq!(parse_css_px("352"), Some(352.0));
        assert_eq!(parse_css_px(" 300px "), Some(300.0));
        assert_eq!(parse_css_px("12.5"), Some(12.5));
    }

    #[test]
    fn relative_css_lengths_are_not_parsed() {
        assert_eq!(parse_css_px("100%"), None);
        assert_eq!(parse_css_px("20em"), None);
        assert_eq!(parse_css_px(""), None);
        assert_eq!(parse_css_px("inf"), None);
    }

    #[test]
    fn invalid_scale_falls_back_to_one() {
        assert!((BrowserRasterizer::with_scale(0.0).scale - 1.0).abs() < f64::EPSILON);
        assert!((BrowserRasterizer::with_scale(f64::NAN).scale - 1.0).abs() < f64::EPSILON);
        assert!((BrowserRasterizer::with_scale(2.0).scale - 2.0).abs() < f64::EPSILON);
    }
}
