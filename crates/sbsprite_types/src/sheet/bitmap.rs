//! Decoded RGBA bitmaps.

use image::RgbaImage;

use crate::SpriteError;
use crate::directive::mutation::PIXEL_SIZE;

/// A decoded sprite-sheet bitmap with 8-bit RGBA pixels, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
	width: u32,
	height: u32,
	pixels: Vec<u8>,
}

impl Bitmap {
	/// Creates a bitmap from raw RGBA bytes.
	///
	/// # Arguments
	///
	/// * `width` - Width in pixels
	/// * `height` - Height in pixels
	/// * `pixels` - `width * height * 4` bytes of RGBA data
	pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, SpriteError> {
		let expected = Self::byte_len(width, height);
		if expected != Some(pixels.len()) {
			return Err(SpriteError::InvalidBitmap {
				width,
				height,
				expected: expected.unwrap_or(usize::MAX),
				actual: pixels.len(),
			});
		}

		Ok(Self {
			width,
			height,
			pixels,
		})
	}

	/// Creates a fully transparent bitmap.
	pub fn blank(width: u32, height: u32) -> Result<Self, SpriteError> {
		let len = Self::byte_len(width, height).ok_or(SpriteError::InvalidBitmap {
			width,
			height,
			expected: usize::MAX,
			actual: 0,
		})?;
		Self::new(width, height, vec![0; len])
	}

	fn byte_len(width: u32, height: u32) -> Option<usize> {
		(width as usize).checked_mul(height as usize)?.checked_mul(PIXEL_SIZE)
	}

	/// Width in pixels.
	#[inline]
	pub fn width(&self) -> u32 {
		self.width
	}

	/// Height in pixels.
	#[inline]
	pub fn height(&self) -> u32 {
		self.height
	}

	/// Raw RGBA bytes.
	#[inline]
	pub fn pixels(&self) -> &[u8] {
		&self.pixels
	}

	/// Mutable raw RGBA bytes.
	#[inline]
	pub fn pixels_mut(&mut self) -> &mut [u8] {
		&mut self.pixels
	}

	/// Gets the pixel at the specified coordinates.
	///
	/// Returns `None` if the coordinates are out of bounds.
	pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
		if x >= self.width || y >= self.height {
			return None;
		}
		let offset = (y as usize * self.width as usize + x as usize) * PIXEL_SIZE;
		let mut out = [0u8; 4];
		out.copy_from_slice(&self.pixels[offset..offset + PIXEL_SIZE]);
		Some(out)
	}

	/// Sets the pixel at the specified coordinates.
	///
	/// Returns `false` if the coordinates are out of bounds.
	pub fn set_pixel(&mut self, x: u32, y: u32, rgba: [u8; 4]) -> bool {
		if x >= self.width || y >= self.height {
			return false;
		}
		let offset = (y as usize * self.width as usize + x as usize) * PIXEL_SIZE;
		self.pixels[offset..offset + PIXEL_SIZE].copy_from_slice(&rgba);
		true
	}

	/// Converts into an `image` buffer.
	pub fn into_image(self) -> RgbaImage {
		// Length is validated on construction
		RgbaImage::from_raw(self.width, self.height, self.pixels)
			.unwrap_or_else(|| RgbaImage::new(0, 0))
	}
}

impl From<RgbaImage> for Bitmap {
	fn from(image: RgbaImage) -> Self {
		Self {
			width: image.width(),
			height: image.height(),
			pixels: image.into_raw(),
		}
	}
}
