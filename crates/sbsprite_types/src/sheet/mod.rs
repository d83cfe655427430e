//! Recolorable sprite sheets.
//!
//! A [`SpriteSheet`] owns one decoded bitmap together with everything derived
//! from it:
//!
//! - the untouched original pixels (kept for [`SpriteSheet::reset`])
//! - the working pixels that directives recolor and frames are drawn from
//! - the [`ClippingTable`] built from the sheet's frame metadata
//! - the [`Palette`] of the original pixels
//! - the current [`ColorMapping`], absent until directives are first applied
//!
//! Applying directives always starts again from the original pixels, so
//! successive calls replace each other instead of compounding.
//!
//! # Examples
//!
//! ```
//! use sbsprite_types::prelude::*;
//!
//! # fn main() -> Result<(), SpriteError> {
//! let mut bitmap = Bitmap::blank(2, 1)?;
//! bitmap.set_pixel(0, 0, [0xAA, 0xBB, 0xCC, 0xFF]);
//!
//! let mut frames = FrameData::default();
//! frames.push_rect("idle", [0, 0, 2, 1]);
//!
//! let mut sheet = SpriteSheet::new(bitmap, &frames)?;
//! sheet.apply_directives("?replace;aabbcc=112233")?;
//!
//! let mut canvas = Canvas::new(2, 1)?;
//! sheet.draw(&mut canvas, "idle", 0, 0)?;
//! assert_eq!(canvas.pixel(0, 0), Some([0x11, 0x22, 0x33, 0xFF]));
//! # Ok(())
//! # }
//! ```

use log::{debug, warn};

use crate::SpriteError;
use crate::atlas::{Clip, ClippingTable, FrameData};
use crate::directive::{Mutation, parse_directives};

pub mod bitmap;
pub mod palette;
pub mod surface;

pub use bitmap::Bitmap;
pub use palette::{ColorMapping, Palette};
pub use surface::{Canvas, Surface};

/// One recolorable sprite sheet with its frame table.
#[derive(Debug, Clone)]
pub struct SpriteSheet {
	original: Bitmap,
	working: Bitmap,
	clipping: ClippingTable,
	palette: Palette,
	directives: String,
	color_mapping: Option<ColorMapping>,
}

impl SpriteSheet {
	/// Creates a sheet from a decoded bitmap and its frame metadata.
	///
	/// The clipping table and the palette are computed here, once.
	///
	/// # Errors
	///
	/// Whatever [`ClippingTable::build`] reports for inconsistent metadata.
	pub fn new(bitmap: Bitmap, frames: &FrameData) -> Result<Self, SpriteError> {
		let clipping = ClippingTable::build(frames)?;

		let (extent_w, extent_h) = clipping.extent();
		if extent_w > bitmap.width() || extent_h > bitmap.height() {
			warn!(
				"Frames extend to {}x{} but the sheet is only {}x{}",
				extent_w,
				extent_h,
				bitmap.width(),
				bitmap.height()
			);
		}

		let palette = Palette::from_rgba(bitmap.pixels());
		debug!(
			"Loaded {}x{} sprite sheet: {} frames, {} palette colors",
			bitmap.width(),
			bitmap.height(),
			clipping.len(),
			palette.len()
		);

		Ok(Self {
			working: bitmap.clone(),
			original: bitmap,
			clipping,
			palette,
			directives: String::new(),
			color_mapping: None,
		})
	}

	/// Restores the original pixels and forgets the color mapping.
	pub fn reset(&mut self) -> &mut Self {
		self.working.pixels_mut().copy_from_slice(self.original.pixels());
		self.directives.clear();
		self.color_mapping = None;
		self
	}

	/// Recolors the sheet with a directive string, replacing whatever
	/// directives were applied before.
	///
	/// The string is fully parsed before any pixel changes; on error the sheet
	/// keeps its previous state.
	pub fn apply_directives(&mut self, directives: &str) -> Result<&mut Self, SpriteError> {
		let mutation = Mutation::from_directives(&parse_directives(directives)?)?;
		self.apply_mutation(&mutation);
		self.directives = directives.to_string();
		Ok(self)
	}

	/// Recolors the sheet with an already built mutation, starting from the
	/// original pixels.
	pub fn apply_mutation(&mut self, mutation: &Mutation) -> &mut Self {
		self.reset();
		mutation.apply(self.working.pixels_mut());
		self.color_mapping = Some(ColorMapping::derive(&self.palette, mutation));
		self
	}

	/// Draws a named frame with its top-left corner at `(dest_x, dest_y)`.
	///
	/// Only pixels inside the frame rectangle are drawn; anything falling
	/// outside the surface is dropped.
	///
	/// # Errors
	///
	/// [`SpriteError::FrameNotFound`] if the frame is not in the sheet.
	pub fn draw<S: Surface + ?Sized>(
		&self,
		surface: &mut S,
		frame: &str,
		dest_x: i32,
		dest_y: i32,
	) -> Result<&Self, SpriteError> {
		let clip = self.clipping.require(frame)?;
		self.draw_clip(surface, clip, dest_x, dest_y);
		Ok(self)
	}

	/// Draws an arbitrary rectangle of the working pixels.
	pub fn draw_clip<S: Surface + ?Sized>(&self, surface: &mut S, clip: Clip, dest_x: i32, dest_y: i32) {
		let (surface_w, surface_h) = surface.dimensions();
		let (surface_w, surface_h) = (i64::from(surface_w), i64::from(surface_h));

		// Rows and columns that land on both the sheet and the surface
		let cols = clip.width.min(self.working.width().saturating_sub(clip.x));
		let rows = clip.height.min(self.working.height().saturating_sub(clip.y));

		for row in 0..rows {
			let dy = i64::from(dest_y) + i64::from(row);
			if dy < 0 || dy >= surface_h {
				continue;
			}
			for col in 0..cols {
				let dx = i64::from(dest_x) + i64::from(col);
				if dx < 0 || dx >= surface_w {
					continue;
				}
				if let Some(src) = self.working.pixel(clip.x + col, clip.y + row) {
					surface.blend_pixel(dx as u32, dy as u32, src);
				}
			}
		}
	}

	/// The resolved frame table.
	#[inline]
	pub fn clipping(&self) -> &ClippingTable {
		&self.clipping
	}

	/// Returns `true` if the sheet has a frame with this name.
	pub fn has_frame(&self, frame: &str) -> bool {
		self.clipping.contains(frame)
	}

	/// Visible colors of the original pixels.
	#[inline]
	pub fn palette(&self) -> &Palette {
		&self.palette
	}

	/// Original → current color mapping, `None` until directives are applied.
	#[inline]
	pub fn color_mapping(&self) -> Option<&ColorMapping> {
		self.color_mapping.as_ref()
	}

	/// Colors a picker should show for this sheet: the recolored colors when a
	/// mapping exists, the original palette otherwise.
	pub fn visible_colors(&self) -> Palette {
		match &self.color_mapping {
			Some(mapping) => mapping.targets(),
			None => self.palette.clone(),
		}
	}

	/// The directive string currently applied (empty after a reset).
	#[inline]
	pub fn directives(&self) -> &str {
		&self.directives
	}

	/// The recolored pixels frames are drawn from.
	#[inline]
	pub fn bitmap(&self) -> &Bitmap {
		&self.working
	}

	/// The untouched pixels.
	#[inline]
	pub fn original(&self) -> &Bitmap {
		&self.original
	}

	/// Sheet width in pixels.
	pub fn width(&self) -> u32 {
		self.original.width()
	}

	/// Sheet height in pixels.
	pub fn height(&self) -> u32 {
		self.original.height()
	}
}
