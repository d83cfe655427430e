//! Error types for directive parsing, frame atlases and sprite rendering.

use thiserror::Error;

/// Errors that can occur while parsing directives, building clipping tables
/// or drawing sprite sheets.
#[derive(Debug, Error)]
pub enum SpriteError {
	/// A directive segment could not be parsed
	#[error("Malformed directive segment #{index} ({segment:?}): {reason}")]
	Parse {
		/// Index of the `?`-delimited segment (after empty segments are dropped)
		index: usize,
		/// Raw segment text
		segment: String,
		/// What was wrong with it
		reason: &'static str,
	},

	/// A color argument is not valid hexadecimal
	#[error("Invalid color {value:?}: {reason}")]
	InvalidColor {
		/// The offending argument
		value: String,
		/// What was wrong with it
		reason: &'static str,
	},

	/// Frame metadata does not agree with the sheet it describes
	#[error("Sprite sheet does not match frame data: {0}")]
	FrameMismatch(String),

	/// A frame (or alias target) is not registered in the clipping table
	#[error("Frame {0:?} not found in sprite sheet")]
	FrameNotFound(String),

	/// A drawing surface could not be acquired
	#[error("Rendering surface unavailable: {0}")]
	RenderingUnavailable(String),

	/// Pixel buffer length does not match the declared dimensions
	#[error("Invalid bitmap: {width}x{height} needs {expected} bytes, got {actual} bytes")]
	InvalidBitmap {
		/// Declared width
		width: u32,
		/// Declared height
		height: u32,
		/// Expected buffer length
		expected: usize,
		/// Actual buffer length
		actual: usize,
	},

	/// A composite was built without a sheet it requires
	#[error("Missing sprite sheet for {0}")]
	MissingSheet(&'static str),

	/// A versioned record does not carry the expected JSON shape
	#[error(transparent)]
	Json(#[from] serde_json::Error),
}

impl SpriteError {
	/// Returns `true` when the error means the character's assets are
	/// inconsistent with each other, rather than a bad directive or surface.
	pub fn is_asset_inconsistency(&self) -> bool {
		matches!(self, Self::FrameMismatch(_) | Self::FrameNotFound(_) | Self::MissingSheet(_))
	}
}
