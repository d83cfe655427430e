//! Per-pixel color mutations built from parsed directives.

use std::collections::HashMap;

use log::{debug, warn};

use super::Directive;
use crate::{Color, SpriteError, color::parse_channels};

/// Bytes per RGBA pixel.
pub const PIXEL_SIZE: usize = 4;

/// Color substitution table of a single `replace` directive.
///
/// Keys are matched against the RGB part of a pixel; alpha never takes part
/// in matching and is never written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplaceMap {
	map: HashMap<Color, [u8; 3]>,
}

impl ReplaceMap {
	/// Creates an empty map.
	pub fn new() -> Self {
		Self::default()
	}

	/// Builds a map from `FROM=TO` arguments.
	///
	/// When the same source color appears twice, the later pair wins. Empty
	/// arguments are skipped.
	///
	/// # Arguments
	///
	/// * `args` - Arguments of a `replace` directive, e.g. `["aabbcc=112233"]`
	pub fn from_args<S: AsRef<str>>(args: &[S]) -> Result<Self, SpriteError> {
		let mut map = Self::new();
		for arg in args {
			let arg = arg.as_ref();
			// Trailing `;` leaves an empty argument
			if arg.is_empty() {
				continue;
			}
			let Some((from, to)) = arg.split_once('=') else {
				return Err(SpriteError::InvalidColor {
					value: arg.to_string(),
					reason: "expected FROM=TO",
				});
			};
			map.insert(Color::parse(from)?, parse_channels(to)?);
		}
		Ok(map)
	}

	/// Adds or overrides a substitution.
	pub fn insert(&mut self, from: Color, to: [u8; 3]) {
		self.map.insert(from, to);
	}

	/// Looks up the replacement channels for a color.
	#[inline]
	pub fn get(&self, from: Color) -> Option<[u8; 3]> {
		self.map.get(&from).copied()
	}

	/// Iterates over `(from, to)` substitutions in no particular order.
	pub fn iter(&self) -> impl Iterator<Item = (Color, [u8; 3])> + '_ {
		self.map.iter().map(|(&from, &to)| (from, to))
	}

	/// Number of substitutions.
	pub fn len(&self) -> usize {
		self.map.len()
	}

	/// Returns `true` if the map holds no substitution.
	pub fn is_empty(&self) -> bool {
		self.map.is_empty()
	}

	/// Rewrites the RGB channels of one pixel if its color is a source key.
	#[inline]
	pub fn apply_pixel(&self, pixel: &mut [u8]) {
		if let Some(rep) = self.get(Color::from_pixel(pixel)) {
			pixel[..3].copy_from_slice(&rep);
		}
	}
}

/// A composed per-pixel color transform.
///
/// Directive lists are folded into a single `Mutation`. [`Mutation::Identity`]
/// is the neutral element of [`Mutation::compose`], so an empty directive
/// string (or one with no `replace`) yields a mutation that leaves buffers
/// untouched without scanning them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Mutation {
	/// Leaves every pixel unchanged
	#[default]
	Identity,
	/// A single `replace` table
	Replace(ReplaceMap),
	/// `outer(inner(pixel))`
	Compose {
		/// Applied second
		outer: Box<Mutation>,
		/// Applied first
		inner: Box<Mutation>,
	},
}

impl Mutation {
	/// Wraps a replace table, collapsing an empty one to [`Mutation::Identity`].
	pub fn replace(map: ReplaceMap) -> Self {
		if map.is_empty() {
			Self::Identity
		} else {
			Self::Replace(map)
		}
	}

	/// Returns `outer ∘ inner`: `inner` sees the raw pixel, `outer` sees the
	/// result.
	pub fn compose(outer: Self, inner: Self) -> Self {
		match (outer, inner) {
			(Self::Identity, inner) => inner,
			(outer, Self::Identity) => outer,
			(outer, inner) => Self::Compose {
				outer: Box::new(outer),
				inner: Box::new(inner),
			},
		}
	}

	/// Folds a directive list into one mutation.
	///
	/// Each `replace` is composed *inside* what has been built so far, so the
	/// first directive in the string is the outermost transform: the last
	/// `replace` runs first on the raw pixel and the first `replace` gets the
	/// final look at the substituted color.
	///
	/// Unknown commands are skipped.
	pub fn from_directives(directives: &[Directive]) -> Result<Self, SpriteError> {
		let mut mutation = Self::Identity;
		for directive in directives {
			if directive.is_replace() {
				let map = ReplaceMap::from_args(directive.args())?;
				mutation = Self::compose(mutation, Self::replace(map));
			} else {
				warn!("Ignoring unsupported directive command {:?}", directive.command());
			}
		}
		debug!("Built mutation from {} directives (depth {})", directives.len(), mutation.depth());
		Ok(mutation)
	}

	/// Parses a directive string and folds it into one mutation.
	pub fn parse(directives: &str) -> Result<Self, SpriteError> {
		Self::from_directives(&super::parse_directives(directives)?)
	}

	/// Returns `true` for the identity mutation.
	#[inline]
	pub fn is_identity(&self) -> bool {
		matches!(self, Self::Identity)
	}

	/// Number of replace tables in the chain.
	pub fn depth(&self) -> usize {
		match self {
			Self::Identity => 0,
			Self::Replace(_) => 1,
			Self::Compose {
				outer,
				inner,
			} => outer.depth() + inner.depth(),
		}
	}

	/// Transforms one RGBA pixel in place.
	///
	/// Only the first three bytes are read or written.
	#[inline]
	pub fn apply_pixel(&self, pixel: &mut [u8]) {
		match self {
			Self::Identity => {}
			Self::Replace(map) => map.apply_pixel(pixel),
			Self::Compose {
				outer,
				inner,
			} => {
				inner.apply_pixel(pixel);
				outer.apply_pixel(pixel);
			}
		}
	}

	/// Transforms a single color as if it were an opaque pixel.
	pub fn apply_color(&self, color: Color) -> Color {
		let [r, g, b] = color.channels();
		let mut pixel = [r, g, b, u8::MAX];
		self.apply_pixel(&mut pixel);
		Color::from_pixel(&pixel)
	}

	/// Transforms every pixel of an RGBA buffer in place, left to right, top
	/// to bottom. A trailing partial pixel is left alone.
	pub fn apply(&self, buffer: &mut [u8]) {
		if self.is_identity() {
			return;
		}
		for pixel in buffer.chunks_exact_mut(PIXEL_SIZE) {
			self.apply_pixel(pixel);
		}
	}
}
