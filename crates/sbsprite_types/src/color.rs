//! Packed RGB colors and hex channel parsing.
//!
//! Colors are tracked as 24-bit `(R << 16) | (G << 8) | B` values. Alpha is
//! carried separately by the pixel buffers and never takes part in color
//! identity.

use std::fmt;

use crate::SpriteError;

/// A 24-bit RGB color packed as `(R << 16) | (G << 8) | B`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Color(u32);

impl Color {
	/// Black (`000000`).
	pub const BLACK: Self = Self(0);

	/// Creates a color from its channels.
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self(((r as u32) << 16) | ((g as u32) << 8) | (b as u32))
	}

	/// Creates a color from a packed value. Bits above 24 are discarded.
	pub const fn from_packed(packed: u32) -> Self {
		Self(packed & 0x00FF_FFFF)
	}

	/// Reads the RGB part of an RGBA pixel.
	///
	/// # Panics
	///
	/// Panics if `pixel` has fewer than 3 bytes.
	#[inline]
	pub fn from_pixel(pixel: &[u8]) -> Self {
		Self::rgb(pixel[0], pixel[1], pixel[2])
	}

	/// Returns the packed `0xRRGGBB` value.
	#[inline]
	pub const fn packed(self) -> u32 {
		self.0
	}

	/// Returns the `[r, g, b]` channels.
	#[inline]
	pub const fn channels(self) -> [u8; 3] {
		[(self.0 >> 16) as u8, (self.0 >> 8) as u8, self.0 as u8]
	}

	/// Returns the lowercase six digit hex form, e.g. `aabbcc`.
	pub fn to_hex(self) -> String {
		hex::encode(self.channels())
	}

	/// Parses a directive color such as `aabbcc`, `abc` or `aaabbbccc`.
	///
	/// See [`parse_channels`] for the accepted forms.
	pub fn parse(value: &str) -> Result<Self, SpriteError> {
		let [r, g, b] = parse_channels(value)?;
		Ok(Self::rgb(r, g, b))
	}
}

impl fmt::Display for Color {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "#{}", self.to_hex())
	}
}

impl From<[u8; 3]> for Color {
	fn from([r, g, b]: [u8; 3]) -> Self {
		Self::rgb(r, g, b)
	}
}

/// Splits a hex color string into its red, green and blue channel bytes.
///
/// The string is cut into equal-width channels:
///
/// - a length divisible by 3 gives three channels of `len / 3` digits each
///   (`abc`, `aabbcc`, `aaabbbccc`, `aaaabbbbcccc`, ...);
/// - a length of 4 or 8 is an RGBA form, the alpha channel is validated and
///   then dropped.
///
/// Each channel is read as a hexadecimal number. Channels wider than a byte
/// saturate at 255, so `fff` as a single channel yields `0xFF` while `f`
/// yields `0x0F`.
///
/// Malformed input is rejected rather than silently read as zero.
pub fn parse_channels(value: &str) -> Result<[u8; 3], SpriteError> {
	let invalid = |reason| SpriteError::InvalidColor {
		value: value.to_string(),
		reason,
	};

	if value.is_empty() {
		return Err(invalid("empty color"));
	}
	if !value.bytes().all(|b| b.is_ascii_hexdigit()) {
		return Err(invalid("non-hexadecimal digit"));
	}

	let len = value.len();
	let width = match len {
		4 | 8 => len / 4,
		_ if len % 3 == 0 => len / 3,
		_ => return Err(invalid("length is not a multiple of 3 (or an RGBA form)")),
	};

	let mut channels = [0u8; 3];
	for (i, channel) in channels.iter_mut().enumerate() {
		let digits = value[i * width..(i + 1) * width].trim_start_matches('0');
		// More than two significant digits is always above 0xFF
		*channel = if digits.len() > 2 {
			u8::MAX
		} else if digits.is_empty() {
			0
		} else {
			u8::from_str_radix(digits, 16).map_err(|_| invalid("unparseable channel"))?
		};
	}

	Ok(channels)
}
