//! Directive, atlas and palette guarantees checked through real assets

use image::{Rgba, RgbaImage};
use sbsprite_rs::prelude::*;

use crate::fixtures::*;

fn sheet_from(image: &RgbaImage, frames: &str) -> Result<SpriteSheet, LoadError> {
	let mut source = MemorySource::new();
	source.insert("/sheet.png", encode_png(image));
	source.insert("/sheet.frames", frames.as_bytes().to_vec());
	Loader::new(source).load_sheet(&SheetPaths {
		image: "/sheet.png".into(),
		frames: "/sheet.frames".into(),
	})
}

fn draw(sheet: &SpriteSheet, frame: &str) -> Canvas {
	let clip = sheet.clipping().require(frame).unwrap();
	let mut canvas = Canvas::new(clip.width.max(1), clip.height.max(1)).unwrap();
	sheet.draw(&mut canvas, frame, 0, 0).unwrap();
	canvas
}

#[test_log::test]
fn test_reset_restores_every_frame() {
	let loader = Loader::new(assets());
	let mut sheet = loader
		.load_sheet(&sheet_paths(SheetSlot::Body, &identity()).unwrap())
		.unwrap();

	let mut frames: Vec<_> = sheet.clipping().iter().map(|(name, _)| name.to_string()).collect();
	frames.sort();
	let first: Vec<_> = frames.iter().map(|frame| draw(&sheet, frame)).collect();

	for directives in ["?replace;aabbcc=112233", "?replace;000000=ffffff;aabbcc=000000", "?flipx"] {
		sheet.apply_directives(directives).unwrap();
		sheet.reset();
		let again: Vec<_> = frames.iter().map(|frame| draw(&sheet, frame)).collect();
		assert_eq!(again, first, "after {directives}");
	}
}

#[test_log::test]
fn test_directive_composition_order() {
	let mut image = RgbaImage::new(2, 1);
	image.put_pixel(0, 0, Rgba([0xAA, 0xBB, 0xCC, 0xFF]));
	image.put_pixel(1, 0, Rgba([0x11, 0x22, 0x33, 0x80]));
	let mut sheet = sheet_from(&image, r#"{ frameList: { all: [0, 0, 2, 1] } }"#).unwrap();

	sheet.apply_directives("?replace;AABBCC=112233?replace;112233=FF0000").unwrap();
	assert_eq!(sheet.bitmap().pixel(0, 0), Some([0x11, 0x22, 0x33, 0xFF]));
	// Alpha is carried through untouched
	assert_eq!(sheet.bitmap().pixel(1, 0), Some([0xFF, 0x00, 0x00, 0x80]));
}

#[test_log::test]
fn test_grid_decomposition_and_aliases() {
	let frames = r#"{
		frameGrid: {
			size: [8, 8],
			dimensions: [2, 2],
			names: [["a", "b"], [null, "c"]],
		},
		aliases: { x: "a" },
	}"#;
	let sheet = sheet_from(&RgbaImage::new(16, 16), frames).unwrap();
	let table = sheet.clipping();

	assert_eq!(table.get("a"), Some(Clip::new(0, 0, 8, 8)));
	assert_eq!(table.get("b"), Some(Clip::new(8, 0, 8, 8)));
	assert_eq!(table.get("c"), Some(Clip::new(8, 8, 8, 8)));
	assert_eq!(table.get("x"), Some(Clip::new(0, 0, 8, 8)));
	assert_eq!(table.len(), 4);
}

#[test_log::test]
fn test_inconsistent_metadata() {
	let dangling = r#"{ frameList: { a: [0, 0, 8, 8] }, aliases: { x: "missing" } }"#;
	let oversized = r#"{ frameGrid: { size: [8, 8], dimensions: [1, 1], names: [["a", "b"], [null, "c"]] } }"#;

	for (frames, expect_mismatch) in [(dangling, false), (oversized, true)] {
		match sheet_from(&RgbaImage::new(16, 16), frames) {
			Err(LoadError::Sheet {
				source,
				..
			}) => {
				assert!(source.is_asset_inconsistency());
				assert_eq!(matches!(source, SpriteError::FrameMismatch(_)), expect_mismatch);
				assert_eq!(matches!(source, SpriteError::FrameNotFound(_)), !expect_mismatch);
			}
			other => panic!("expected a sheet error, got {other:?}"),
		}
	}
}

#[test_log::test]
fn test_palette_mapping_completeness() {
	let mut image = RgbaImage::new(3, 1);
	image.put_pixel(0, 0, Rgba([0xAA, 0xBB, 0xCC, 0xFF]));
	image.put_pixel(1, 0, Rgba([0x00, 0x00, 0x00, 0xFF]));
	// (2, 0) stays transparent black
	let mut sheet = sheet_from(&image, r#"{ frameList: { all: [0, 0, 3, 1] } }"#).unwrap();

	assert_eq!(sheet.palette().len(), 2);
	assert!(sheet.palette().contains(Color::BLACK));

	sheet.apply_directives("?replace;AABBCC=112233").unwrap();
	let mapping = sheet.color_mapping().unwrap();
	let entries: Vec<_> = mapping.iter().map(|(from, to)| (from.packed(), to.packed())).collect();
	assert_eq!(entries, [(0x000000, 0x000000), (0xAABBCC, 0x112233)]);
}

#[test_log::test]
fn test_strict_hex_arguments() {
	let mut sheet = sheet_from(&RgbaImage::new(1, 1), r#"{ frameList: { a: [0, 0, 1, 1] } }"#).unwrap();
	assert!(matches!(
		sheet.apply_directives("?replace;aabbcc=11223g"),
		Err(SpriteError::InvalidColor { .. })
	));
	assert!(sheet.color_mapping().is_none());

	// Short and long channel forms are accepted
	sheet.apply_directives("?replace;abc=123;aaaabbbbcccc=111122223333").unwrap();
}
