//! Benchmark helper utilities for sbsprite-rs
//!
//! This module provides generators for synthetic sprite sheets and directive
//! strings shaped like real humanoid assets: a grid of 43x43 frames drawn
//! with a small palette of skin, shade and outline colors.

use sbsprite_types::atlas::{FrameData, FrameGrid};
use sbsprite_types::sheet::Bitmap;

/// Side of one humanoid frame in pixels
pub const FRAME_SIDE: u32 = 43;

/// Colors a synthetic sheet is painted with, the first one being transparent
pub const PALETTE: [[u8; 4]; 6] = [
	[0x00, 0x00, 0x00, 0x00],
	[0x00, 0x00, 0x00, 0xFF],
	[0xFF, 0xE2, 0xC5, 0xFF],
	[0xFF, 0xC1, 0x81, 0xFF],
	[0xD3, 0x9C, 0x6C, 0xFF],
	[0xC7, 0x81, 0x5C, 0xFF],
];

/// Generates an RGBA sheet of `columns` x `rows` frames filled with a
/// deterministic pattern of [`PALETTE`] colors.
pub fn generate_sheet(columns: u32, rows: u32) -> Bitmap {
	let width = columns * FRAME_SIDE;
	let height = rows * FRAME_SIDE;
	let mut pixels = Vec::with_capacity((width * height * 4) as usize);
	for y in 0..height {
		for x in 0..width {
			let index = ((x / 3) ^ (y / 5)) as usize % PALETTE.len();
			pixels.extend_from_slice(&PALETTE[index]);
		}
	}
	Bitmap::new(width, height, pixels).expect("buffer matches dimensions")
}

/// Frame grid naming every cell `row.column`.
pub fn generate_frames(columns: u32, rows: u32) -> FrameData {
	let names = (0..rows)
		.map(|row| (0..columns).map(|column| Some(format!("{row}.{column}"))).collect())
		.collect();
	FrameData::with_grid(FrameGrid::new([FRAME_SIDE, FRAME_SIDE], [columns, rows], names))
}

/// Builds a directive string of `count` single-pair replace directives
/// chaining the skin tones into each other.
pub fn generate_directives(count: usize) -> String {
	let tones = ["ffe2c5", "ffc181", "d39c6c", "c7815c"];
	(0..count)
		.map(|i| format!("?replace;{}={}", tones[i % tones.len()], tones[(i + 1) % tones.len()]))
		.collect()
}

/// Common sheet sizes in frames for benchmarking
pub mod sizes {
	/// A single frame
	pub const SINGLE: (u32, u32) = (1, 1);
	/// Head and hair sheets (normal + climb)
	pub const HEAD: (u32, u32) = (2, 1);
	/// Body and arm sheets
	pub const BODY: (u32, u32) = (9, 6);
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_generate_sheet() {
		let sheet = generate_sheet(2, 1);
		assert_eq!(sheet.width(), 86);
		assert_eq!(sheet.height(), 43);
		assert_eq!(sheet.pixels().len(), 86 * 43 * 4);
	}

	#[test]
	fn test_generate_frames() {
		let frames = generate_frames(3, 2);
		let grid = frames.frame_grid.as_ref().unwrap();
		assert_eq!(grid.columns(), 3);
		assert_eq!(grid.names[1][2].as_deref(), Some("1.2"));
	}

	#[test]
	fn test_generate_directives() {
		assert_eq!(generate_directives(0), "");
		assert_eq!(generate_directives(2), "?replace;ffe2c5=ffc181?replace;ffc181=d39c6c");
	}
}
