//! SVG composition of towers and polaroid cards.
//!
//! Documents are built with the [`svg`] crate, which handles attribute
//! formatting and XML escaping. The layer artwork is drawn from plain
//! shapes rather than referenced image files, so a serialized document
//! is self-contained and can be rasterized without fetching anything.
//!
//! Output has no XML declaration because it is embedded inline in the
//! page before being rasterized.

use svg::Document;
use svg::node::element::{Ellipse, Group, Rectangle, Text, Title};

use oreo_stack::{AssetRef, Part, images_for, title_for};

use crate::layout::{LayoutConfig, LayoutError, PolaroidLayout, PolaroidStyle, StackLayout};

/// Size of the box the artwork is drawn in before scaling.
const ART_WIDTH: f64 = 160.0;
const ART_HEIGHT: f64 = 100.0;

const COOKIE_SIDE: &str = "#1b0f0a";
const COOKIE_FACE: &str = "#2f1d14";
const COOKIE_RELIEF: &str = "#3f281c";
const CREAM_SIDE: &str = "#e6dfcd";
const CREAM_FACE: &str = "#fbf8ef";
const CREAM_EDGE: &str = "#d9d0ba";

fn ellipse(cx: u32, cy: u32, rx: u32, ry: u32) -> Ellipse {
    Ellipse::new()
        .set("cx", cx)
        .set("cy", cy)
        .set("rx", rx)
        .set("ry", ry)
}

/// A cookie: dark cylinder seen slightly from above. The top cookie has
/// an embossed face; the others are plain.
fn cookie(embossed: bool) -> Group {
    let mut group = Group::new()
        .add(
            Rectangle::new()
                .set("x", 0)
                .set("y", 40)
                .set("width", 160)
                .set("height", 20)
                .set("fill", COOKIE_SIDE),
        )
        .add(ellipse(80, 60, 80, 30).set("fill", COOKIE_SIDE))
        .add(ellipse(80, 40, 80, 30).set("fill", COOKIE_FACE));

    let rings: &[(u32, u32, u32)] = if embossed {
        &[(66, 23, 3), (46, 15, 2), (22, 7, 2)]
    } else {
        &[(72, 26, 1)]
    };
    for &(rx, ry, width) in rings {
        group = group.add(
            ellipse(80, 40, rx, ry)
                .set("fill", "none")
                .set("stroke", COOKIE_RELIEF)
                .set("stroke-width", width),
        );
    }
    group
}

/// A layer of cream, thinner and slightly narrower than a cookie.
fn filling() -> Group {
    Group::new()
        .add(
            Rectangle::new()
                .set("x", 6)
                .set("y", 44)
                .set("width", 148)
                .set("height", 10)
                .set("fill", CREAM_SIDE),
        )
        .add(ellipse(80, 54, 74, 26).set("fill", CREAM_SIDE))
        .add(
            ellipse(80, 44, 74, 26)
                .set("fill", CREAM_FACE)
                .set("stroke", CREAM_EDGE)
                .set("stroke-width", 1),
        )
}

fn artwork(asset: AssetRef) -> Group {
    match asset {
        AssetRef::TopDark => cookie(true),
        AssetRef::BottomDark => cookie(false),
        AssetRef::Filling => filling(),
    }
}

/// One layer, scaled to `config` and placed with its top-left corner at
/// `(x, y)`.
fn layer(asset: AssetRef, part: Part, x: u64, y: u64, config: LayoutConfig) -> Group {
    let sx = f64::from(config.layer_width) / ART_WIDTH;
    let sy = f64::from(config.layer_height) / ART_HEIGHT;
    Group::new()
        .set("class", format!("layer {}", asset.stem()))
        .set("role", "img")
        .set("aria-label", part.alt_text())
        .set("transform", format!("translate({x} {y}) scale({sx} {sy})"))
        .add(artwork(asset))
}

/// All layers of a tower, painted bottom-up so the first part is on top.
fn stack_group(parts: &[Part], layout: &StackLayout, x: u64, y: u64) -> Group {
    let images = images_for(parts);
    let mut group = Group::new().set("class", "oreo-stack");
    for index in layout.paint_order() {
        let (Some(&part), Some(&asset)) = (parts.get(index), images.get(index)) else {
            continue;
        };
        group = group.add(layer(
            asset,
            part,
            x,
            y.saturating_add(layout.layer_y(index)),
            layout.config(),
        ));
    }
    group
}

/// Render the tower on its own, as shown in the builder view.
///
/// The document is exactly as large as the tower. An empty tower yields
/// a zero-height document.
///
/// # Errors
///
/// Returns a [`LayoutError`] if `config` is invalid.
///
/// # Examples
///
/// ```
/// use oreo_export::{LayoutConfig, stack_svg};
/// use oreo_stack::Part;
///
/// let svg = stack_svg(&[Part::Dark, Part::White, Part::Dark], &LayoutConfig::BUILDER)?;
/// assert!(svg.contains(r#"height="172""#));
/// assert!(svg.contains("<title>OREO</title>"));
/// # Ok::<(), oreo_export::LayoutError>(())
/// ```
pub fn stack_svg(parts: &[Part], config: &LayoutConfig) -> Result<String, LayoutError> {
    let layout = StackLayout::new(parts.len(), config)?;
    let width = layout.width();
    let height = layout.height();

    Ok(Document::new()
        .set("width", width)
        .set("height", height)
        .set("viewBox", format!("0 0 {width} {height}"))
        .add(Title::new(title_for(parts)))
        .add(stack_group(parts, &layout, 0, 0))
        .to_string())
}

/// Render the polaroid card for the summary view: the tower on a gray
/// panel inside a white card, with the title written underneath.
///
/// This is the element that gets rasterized and downloaded, so
/// everything it shows is drawn inside the document.
///
/// # Errors
///
/// Returns a [`LayoutError`] if `style.layers` is invalid.
pub fn polaroid_svg(parts: &[Part], style: &PolaroidStyle) -> Result<String, LayoutError> {
    let title = title_for(parts);
    let layout = PolaroidLayout::new(parts.len(), &title, style)?;
    let radius = style.corner_radius;

    let mut doc = Document::new()
        .set("width", layout.width)
        .set("height", layout.height)
        .set("viewBox", format!("0 0 {} {}", layout.width, layout.height))
        .set("class", "oreo-polaroid")
        .add(Title::new(title.clone()))
        .add(
            Rectangle::new()
                .set("width", layout.width)
                .set("height", layout.height)
                .set("rx", radius)
                .set("fill", style.frame_color.as_str()),
        )
        .add(
            Rectangle::new()
                .set("x", layout.panel.x)
                .set("y", layout.panel.y)
                .set("width", layout.panel.width)
                .set("height", layout.panel.height)
                .set("rx", radius)
                .set("fill", style.panel_color.as_str()),
        )
        .add(stack_group(
            parts,
            &layout.stack,
            layout.stack_x,
            layout.stack_y,
        ));

    if !layout.title_lines.is_empty() {
        let mut caption = Group::new()
            .set("class", "oreo-title")
            .set("font-family", style.font_family.as_str())
            .set("font-size", style.font_size)
            .set("fill", style.text_color.as_str())
            .set("text-anchor", "middle");
        for (line, baseline) in layout.title_lines.iter().zip(&layout.title_baselines) {
            caption = caption.add(
                Text::new(line.as_str())
                    .set("x", layout.title_x)
                    .set("y", *baseline),
            );
        }
        doc = doc.add(caption);
    }

    Ok(doc.to_string())
}
