//! Clipping rectangles and the resolved frame table of a sheet.

use std::collections::HashMap;
use std::fmt;

use log::trace;

use super::{FrameData, FrameGrid};
use crate::SpriteError;

/// A frame rectangle inside a sprite sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Clip {
	/// Left edge in sheet pixels
	pub x: u32,

	/// Top edge in sheet pixels
	pub y: u32,

	/// Width in pixels
	pub width: u32,

	/// Height in pixels
	pub height: u32,
}

impl Clip {
	/// Creates a clip rectangle.
	pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
		Self {
			x,
			y,
			width,
			height,
		}
	}

	/// Creates a clip from `[x0, y0, x1, y1]` with exclusive end coordinates.
	///
	/// Returns `None` when the end lies before the start.
	pub fn from_corners([x0, y0, x1, y1]: [u32; 4]) -> Option<Self> {
		Some(Self::new(x0, y0, x1.checked_sub(x0)?, y1.checked_sub(y0)?))
	}

	/// Exclusive right edge.
	#[inline]
	pub fn right(&self) -> u32 {
		self.x.saturating_add(self.width)
	}

	/// Exclusive bottom edge.
	#[inline]
	pub fn bottom(&self) -> u32 {
		self.y.saturating_add(self.height)
	}

	/// Returns `true` if the clip covers no pixel.
	#[inline]
	pub fn is_empty(&self) -> bool {
		self.width == 0 || self.height == 0
	}
}

impl fmt::Display for Clip {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}x{} at ({}, {})", self.width, self.height, self.x, self.y)
	}
}

/// Resolved `frame name → rectangle` table of one sprite sheet.
///
/// Built once per sheet load from its [`FrameData`] and not modified
/// afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClippingTable {
	clips: HashMap<String, Clip>,
}

impl ClippingTable {
	/// Builds the table from frame metadata.
	///
	/// Grid cells are registered first, then the frame list, then aliases in
	/// declaration order. A later registration of a name replaces an earlier
	/// one.
	///
	/// # Errors
	///
	/// - [`SpriteError::FrameMismatch`] if a grid row or column index lies
	///   outside the declared grid dimensions, or a list rectangle has its end
	///   before its start
	/// - [`SpriteError::FrameNotFound`] if an alias target is not registered
	///   by the time the alias is resolved
	pub fn build(frames: &FrameData) -> Result<Self, SpriteError> {
		let mut table = Self::default();

		if let Some(grid) = &frames.frame_grid {
			table.register_grid(grid)?;
		}

		if let Some(list) = &frames.frame_list {
			for (name, &rect) in list {
				let clip = Clip::from_corners(rect).ok_or_else(|| {
					SpriteError::FrameMismatch(format!("frame {name:?} has inverted rectangle {rect:?}"))
				})?;
				table.insert(name.clone(), clip);
			}
		}

		if let Some(aliases) = &frames.aliases {
			for (alias, target) in aliases {
				let clip = table.require(target)?;
				table.insert(alias.clone(), clip);
			}
		}

		trace!("Built clipping table with {} frames", table.len());
		Ok(table)
	}

	fn register_grid(&mut self, grid: &FrameGrid) -> Result<(), SpriteError> {
		let (cell_w, cell_h) = (grid.cell_width(), grid.cell_height());

		for (iy, row) in grid.names.iter().enumerate() {
			let iy = u32::try_from(iy).unwrap_or(u32::MAX);
			if iy >= grid.rows() {
				return Err(SpriteError::FrameMismatch(format!(
					"row {iy} exceeds grid dimensions {:?}",
					grid.dimensions
				)));
			}

			for (ix, name) in row.iter().enumerate() {
				let ix = u32::try_from(ix).unwrap_or(u32::MAX);
				if ix >= grid.columns() {
					return Err(SpriteError::FrameMismatch(format!(
						"column {ix} exceeds grid dimensions {:?}",
						grid.dimensions
					)));
				}

				let Some(name) = name else {
					continue;
				};
				self.insert(
					name.clone(),
					Clip::new(ix.saturating_mul(cell_w), iy.saturating_mul(cell_h), cell_w, cell_h),
				);
			}
		}

		Ok(())
	}

	/// Registers (or replaces) a frame.
	pub fn insert(&mut self, name: String, clip: Clip) {
		self.clips.insert(name, clip);
	}

	/// Looks up a frame.
	#[inline]
	pub fn get(&self, name: &str) -> Option<Clip> {
		self.clips.get(name).copied()
	}

	/// Looks up a frame, failing with [`SpriteError::FrameNotFound`].
	pub fn require(&self, name: &str) -> Result<Clip, SpriteError> {
		self.get(name).ok_or_else(|| SpriteError::FrameNotFound(name.to_string()))
	}

	/// Returns `true` if the frame is registered.
	pub fn contains(&self, name: &str) -> bool {
		self.clips.contains_key(name)
	}

	/// Number of registered names, aliases included.
	pub fn len(&self) -> usize {
		self.clips.len()
	}

	/// Returns `true` if no frame is registered.
	pub fn is_empty(&self) -> bool {
		self.clips.is_empty()
	}

	/// Iterates over `(name, clip)` pairs in no particular order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, Clip)> {
		self.clips.iter().map(|(name, &clip)| (name.as_str(), clip))
	}

	/// Smallest `(width, height)` that contains every clip, measured from the
	/// sheet origin.
	pub fn extent(&self) -> (u32, u32) {
		self.clips
			.values()
			.fold((0, 0), |(w, h), clip| (w.max(clip.right()), h.max(clip.bottom())))
	}
}
