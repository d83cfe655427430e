//! Drawing surfaces.
//!
//! Sheets draw onto anything implementing [`Surface`]. Pixels are composited
//! with the usual "source over" rule so parts drawn later sit on top of parts
//! drawn earlier, and fully transparent source pixels leave the surface
//! untouched.

use image::{Rgba, RgbaImage};

use crate::SpriteError;

/// Largest width or height a [`Canvas`] may have.
pub const MAX_CANVAS_SIDE: u32 = 16384;

/// A pixel target that sprite frames can be drawn onto.
pub trait Surface {
	/// Returns `(width, height)` in pixels.
	fn dimensions(&self) -> (u32, u32);

	/// Composites `src` over the pixel at `(x, y)`.
	///
	/// Callers guarantee the coordinates are inside [`Surface::dimensions`].
	fn blend_pixel(&mut self, x: u32, y: u32, src: [u8; 4]);
}

impl Surface for RgbaImage {
	fn dimensions(&self) -> (u32, u32) {
		(self.width(), self.height())
	}

	fn blend_pixel(&mut self, x: u32, y: u32, src: [u8; 4]) {
		let Rgba(dst) = self.get_pixel_mut(x, y);
		blend_over(dst, src);
	}
}

/// An owned RGBA drawing surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
	image: RgbaImage,
}

impl Canvas {
	/// Acquires a transparent canvas.
	///
	/// # Errors
	///
	/// [`SpriteError::RenderingUnavailable`] if either side is zero or larger
	/// than [`MAX_CANVAS_SIDE`].
	pub fn new(width: u32, height: u32) -> Result<Self, SpriteError> {
		if width == 0 || height == 0 {
			return Err(SpriteError::RenderingUnavailable(format!(
				"cannot create a {width}x{height} canvas"
			)));
		}
		if width > MAX_CANVAS_SIDE || height > MAX_CANVAS_SIDE {
			return Err(SpriteError::RenderingUnavailable(format!(
				"canvas {width}x{height} exceeds {MAX_CANVAS_SIDE} pixels per side"
			)));
		}

		Ok(Self {
			image: RgbaImage::new(width, height),
		})
	}

	/// Width in pixels.
	pub fn width(&self) -> u32 {
		self.image.width()
	}

	/// Height in pixels.
	pub fn height(&self) -> u32 {
		self.image.height()
	}

	/// Reads a pixel, `None` if out of bounds.
	pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
		self.image.get_pixel_checked(x, y).map(|p| p.0)
	}

	/// Clears every pixel to transparent black.
	pub fn clear(&mut self) {
		self.image.pixels_mut().for_each(|p| *p = Rgba([0, 0, 0, 0]));
	}

	/// Borrows the underlying image.
	pub fn as_image(&self) -> &RgbaImage {
		&self.image
	}

	/// Releases the underlying image.
	pub fn into_image(self) -> RgbaImage {
		self.image
	}
}

impl Surface for Canvas {
	fn dimensions(&self) -> (u32, u32) {
		self.image.dimensions()
	}

	fn blend_pixel(&mut self, x: u32, y: u32, src: [u8; 4]) {
		Surface::blend_pixel(&mut self.image, x, y, src);
	}
}

/// Composites `src` over `dst` (non-premultiplied RGBA).
pub fn blend_over(dst: &mut [u8; 4], src: [u8; 4]) {
	let sa = u32::from(src[3]);
	if sa == 0 {
		return;
	}
	if sa == 255 {
		*dst = src;
		return;
	}

	// Everything below is scaled by 255 * 255
	let dst_weight = u32::from(dst[3]) * (255 - sa);
	let out_alpha = sa * 255 + dst_weight;

	for i in 0..3 {
		let value = u32::from(src[i]) * sa * 255 + u32::from(dst[i]) * dst_weight;
		dst[i] = ((value + out_alpha / 2) / out_alpha) as u8;
	}
	dst[3] = ((out_alpha + 127) / 255) as u8;
}
