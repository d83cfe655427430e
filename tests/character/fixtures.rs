//! Synthetic asset tree

use std::io::Cursor;

use image::{ImageFormat, Rgba, RgbaImage};
use sbsprite_rs::prelude::*;

/// Side of every frame cell
pub const CELL: u32 = 4;

pub const SKIN: [u8; 4] = [0xAA, 0xBB, 0xCC, 0xFF];
pub const OUTLINE: [u8; 4] = [0x00, 0x00, 0x00, 0xFF];
pub const BACK_ARM: [u8; 4] = [0x10, 0x10, 0x10, 0xFF];
pub const FRONT_ARM: [u8; 4] = [0x20, 0x20, 0x20, 0xFF];
pub const HAIR: [u8; 4] = [0x73, 0x5E, 0x3A, 0xFF];
pub const EMPTY: [u8; 4] = [0x00, 0x00, 0x00, 0x00];

pub const BODY_FRAMES: [&str; 4] = ["idle.1", "idle.2", "walk.1", "climb.1"];
pub const HEAD_FRAMES: [&str; 2] = ["normal", "climb"];

pub fn encode_png(image: &RgbaImage) -> Vec<u8> {
	let mut bytes = Cursor::new(Vec::new());
	image.write_to(&mut bytes, ImageFormat::Png).unwrap();
	bytes.into_inner()
}

/// One row of `cells` frames. In every cell, rows `rows` of the first
/// `CELL - 1` columns are filled; the last column stays transparent.
pub fn strip(cells: u32, fill: [u8; 4], rows: std::ops::Range<u32>) -> RgbaImage {
	let mut image = RgbaImage::new(CELL * cells, CELL);
	for cell in 0..cells {
		for y in rows.clone() {
			for x in 0..CELL - 1 {
				image.put_pixel(cell * CELL + x, y, Rgba(fill));
			}
		}
	}
	image
}

/// A `.frames` file naming the cells of a one-row strip.
pub fn grid_frames(names: &[&str]) -> String {
	let quoted: Vec<_> = names.iter().map(|name| format!("\"{name}\"")).collect();
	format!(
		r#"{{
	// generated for tests
	frameGrid: {{
		size: [{CELL}, {CELL}],
		dimensions: [{}, 1],
		names: [[{}]],
	}},
	aliases: {{ idle: "{}" }},
}}"#,
		names.len(),
		quoted.join(", "),
		names[0],
	)
}

pub fn identity() -> Identity {
	Identity {
		name: "Tester".into(),
		species: "human".into(),
		gender: "male".into(),
		hair_group: "hair".into(),
		hair_type: "short".into(),
		personality_idle: "idle.1".into(),
		personality_arm_idle: "idle.2".into(),
		personality_arm_offset: [1.0, 0.0],
		..Identity::default()
	}
}

/// Body, head, both arms and one hair style for a male human.
pub fn assets() -> MemorySource {
	let cells = BODY_FRAMES.len() as u32;
	let mut body = strip(cells, SKIN, 0..CELL);
	for cell in 0..cells {
		body.put_pixel(cell * CELL, CELL - 1, Rgba(OUTLINE));
	}

	let mut source = MemorySource::new();
	let body_frames = grid_frames(&BODY_FRAMES).into_bytes();
	let head_frames = grid_frames(&HEAD_FRAMES).into_bytes();

	source.insert("/humanoid/human/malebody.png", encode_png(&body));
	source.insert("/humanoid/malebody.frames", body_frames.clone());
	source.insert("/humanoid/human/backarm.png", encode_png(&strip(cells, BACK_ARM, 2..CELL)));
	source.insert("/humanoid/backarm.frames", body_frames.clone());
	source.insert("/humanoid/human/frontarm.png", encode_png(&strip(cells, FRONT_ARM, 3..CELL)));
	source.insert("/humanoid/frontarm.frames", body_frames);

	source.insert("/humanoid/human/malehead.png", encode_png(&strip(2, SKIN, 0..2)));
	source.insert("/humanoid/malehead.frames", head_frames.clone());
	source.insert("/humanoid/human/hair/short.png", encode_png(&strip(2, HAIR, 0..1)));
	source.insert("/humanoid/human/hair/default.frames", head_frames);
	source
}

pub fn load(identity: Identity) -> SpriteComposite {
	Loader::new(assets()).load_composite(identity).unwrap()
}

pub fn render(character: &SpriteComposite) -> Canvas {
	let bounds = character.bounds().unwrap();
	let mut canvas = Canvas::new(bounds.width(), bounds.height()).unwrap();
	character.draw_at(&mut canvas, -bounds.left, -bounds.top).unwrap();
	canvas
}
