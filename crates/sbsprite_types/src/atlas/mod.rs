//! Frame atlas support.
//!
//! Sprite sheets come with a `.frames` metadata file naming the animation
//! frames the sheet contains. Frames are declared in up to three ways, which
//! may be combined in one file:
//!
//! - **`frameGrid`**: a uniform grid of `size` cells, `dimensions` cells wide
//!   and tall, with a 2D `names` array (`null` marks an unused cell)
//! - **`frameList`**: explicit `[x0, y0, x1, y1]` rectangles (exclusive end)
//! - **`aliases`**: extra names for frames declared by the grid or list
//!
//! ```text
//! {
//!   "frameGrid" : {
//!     "size" : [43, 43],
//!     "dimensions" : [9, 6],
//!     "names" : [
//!       [ null, "idle.1", "idle.2", null, ... ],
//!       ...
//!     ]
//!   },
//!   "aliases" : {
//!     "walk.1" : "run.1"
//!   }
//! }
//! ```
//!
//! [`FrameData`] is the decoded form of that file and [`ClippingTable`] the
//! resolved name → rectangle mapping built from it.
//!
//! # Examples
//!
//! ```
//! use sbsprite_types::atlas::{Clip, ClippingTable, FrameData, FrameGrid};
//!
//! let frames = FrameData {
//!     frame_grid: Some(FrameGrid::new(
//!         [8, 8],
//!         [2, 2],
//!         vec![
//!             vec![Some("a".into()), Some("b".into())],
//!             vec![None, Some("c".into())],
//!         ],
//!     )),
//!     ..Default::default()
//! };
//!
//! let table = ClippingTable::build(&frames).unwrap();
//! assert_eq!(table.get("c"), Some(Clip::new(8, 8, 8, 8)));
//! ```

use std::collections::BTreeMap;
use std::fmt;

use serde::Deserialize;
use serde::de::{Deserializer, MapAccess, Visitor};

pub mod clip;

pub use clip::{Clip, ClippingTable};

/// Uniform grid frame declaration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FrameGrid {
	/// Cell size in pixels, `[width, height]`
	pub size: [u32; 2],

	/// Grid size in cells, `[columns, rows]`
	pub dimensions: [u32; 2],

	/// Frame name of each cell, row-major; `None` marks an unused cell
	pub names: Vec<Vec<Option<String>>>,
}

impl FrameGrid {
	/// Creates a grid declaration.
	pub fn new(size: [u32; 2], dimensions: [u32; 2], names: Vec<Vec<Option<String>>>) -> Self {
		Self {
			size,
			dimensions,
			names,
		}
	}

	/// Cell width in pixels.
	#[inline]
	pub fn cell_width(&self) -> u32 {
		self.size[0]
	}

	/// Cell height in pixels.
	#[inline]
	pub fn cell_height(&self) -> u32 {
		self.size[1]
	}

	/// Number of columns.
	#[inline]
	pub fn columns(&self) -> u32 {
		self.dimensions[0]
	}

	/// Number of rows.
	#[inline]
	pub fn rows(&self) -> u32 {
		self.dimensions[1]
	}
}

/// Decoded `.frames` metadata of a single sprite sheet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameData {
	/// Grid-based frames
	#[serde(default)]
	pub frame_grid: Option<FrameGrid>,

	/// Explicit rectangles, `name → [x0, y0, x1, y1]` (exclusive end)
	#[serde(default)]
	pub frame_list: Option<BTreeMap<String, [u32; 4]>>,

	/// `alias → target`, in declaration order
	#[serde(default, deserialize_with = "deserialize_aliases")]
	pub aliases: Option<Vec<(String, String)>>,
}

impl FrameData {
	/// Creates metadata holding only a grid.
	pub fn with_grid(grid: FrameGrid) -> Self {
		Self {
			frame_grid: Some(grid),
			..Default::default()
		}
	}

	/// Adds an explicit rectangle to the frame list.
	pub fn push_rect(&mut self, name: impl Into<String>, rect: [u32; 4]) -> &mut Self {
		self.frame_list.get_or_insert_with(BTreeMap::new).insert(name.into(), rect);
		self
	}

	/// Adds an alias, after every alias already declared.
	pub fn push_alias(&mut self, alias: impl Into<String>, target: impl Into<String>) -> &mut Self {
		self.aliases.get_or_insert_with(Vec::new).push((alias.into(), target.into()));
		self
	}

	/// Returns `true` if no frame is declared at all.
	pub fn is_empty(&self) -> bool {
		self.frame_grid.is_none() && self.frame_list.is_none() && self.aliases.is_none()
	}
}

/// Keeps the `aliases` object in declaration order, since alias resolution
/// is a single pass in that order.
fn deserialize_aliases<'de, D>(deserializer: D) -> Result<Option<Vec<(String, String)>>, D::Error>
where
	D: Deserializer<'de>,
{
	struct AliasVisitor;

	impl<'de> Visitor<'de> for AliasVisitor {
		type Value = Option<Vec<(String, String)>>;

		fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
			f.write_str("a map of alias names to frame names")
		}

		fn visit_none<E>(self) -> Result<Self::Value, E> {
			Ok(None)
		}

		fn visit_unit<E>(self) -> Result<Self::Value, E> {
			Ok(None)
		}

		fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
		where
			D: Deserializer<'de>,
		{
			deserializer.deserialize_map(self)
		}

		fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
		where
			A: MapAccess<'de>,
		{
			let mut aliases = Vec::with_capacity(map.size_hint().unwrap_or(0));
			while let Some(entry) = map.next_entry::<String, String>()? {
				aliases.push(entry);
			}
			Ok(Some(aliases))
		}
	}

	deserializer.deserialize_option(AliasVisitor)
}
