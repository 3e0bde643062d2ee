//! Integration test: build a tower through the stack API, render the
//! builder view and the polaroid card, and write them out for inspection.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::path::PathBuf;

use oreo_export::{LayoutConfig, PolaroidLayout, PolaroidStyle, polaroid_svg, stack_svg};
use oreo_stack::{AssetRef, Part, Stack};

#[test]
fn oreoreo_tower_renders() {
    let mut stack = Stack::new();
    for part in [Part::Dark, Part::White, Part::Dark, Part::White, Part::Dark] {
        stack.append(part);
    }
    assert_eq!(stack.title(), "OREOREO");

    let builder = stack_svg(stack.parts(), &LayoutConfig::BUILDER).unwrap();
    // 4 * 36 + 100
    assert!(builder.contains(r#"height="244""#));
    assert_eq!(builder.matches(r#"role="img""#).count(), stack.len());

    // Every asset the projection names is drawn exactly as often.
    for asset in AssetRef::ALL {
        let expected = stack.images().iter().filter(|&&a| a == asset).count();
        let drawn = builder.matches(&format!("layer {}\"", asset.stem())).count();
        assert_eq!(drawn, expected, "{asset}");
    }

    let style = PolaroidStyle::default();
    let card = polaroid_svg(stack.parts(), &style).unwrap();
    let layout = PolaroidLayout::new(stack.len(), &stack.title(), &style).unwrap();
    assert!(card.contains(&format!(r#"height="{}""#, layout.height)));
    assert!(card.contains("<title>OREOREO</title>"));

    let workspace_root = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .to_path_buf();
    let target_dir = workspace_root.join("target");
    std::fs::create_dir_all(&target_dir).unwrap();
    let output_path = target_dir.join("oreoreo-polaroid.svg");
    std::fs::write(&output_path, &card).unwrap();
    eprintln!("Polaroid written to {output_path:?} ({} bytes)", card.len());
}

#[test]
fn cleared_tower_renders_empty_card() {
    let mut stack: Stack = [Part::White; 4].into_iter().collect();
    stack.clear();

    let card = polaroid_svg(stack.parts(), &PolaroidStyle::default()).unwrap();
    assert!(!card.contains(r#"role="img""#));
    assert!(!card.contains("oreo-title"));
}
