//! Palette tracking for recolor pickers.
//!
//! A sheet's [`Palette`] is the set of visible colors in its *original*
//! pixels, computed once at load. Whenever directives change, the sheet
//! derives a [`ColorMapping`] by pushing each palette color through the
//! current [`Mutation`] as a single synthetic pixel, so a mapping exists even
//! for colors that no longer appear anywhere in the recolored sheet.

use std::collections::{BTreeMap, BTreeSet};

use crate::Color;
use crate::directive::Mutation;
use crate::directive::mutation::PIXEL_SIZE;

/// Distinct visible colors of a sheet, in ascending packed order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Palette {
	colors: BTreeSet<Color>,
}

impl Palette {
	/// Creates an empty palette.
	pub fn new() -> Self {
		Self::default()
	}

	/// Scans an RGBA buffer once and collects its visible colors.
	///
	/// A pixel is visible if its color is non-zero or its alpha is non-zero:
	/// opaque black counts, fully transparent black (the empty sentinel)
	/// does not. Transparent pixels of any other color still count.
	pub fn from_rgba(pixels: &[u8]) -> Self {
		let colors = pixels
			.chunks_exact(PIXEL_SIZE)
			.filter_map(|px| {
				let color = Color::from_pixel(px);
				(color != Color::BLACK || px[3] > 0).then_some(color)
			})
			.collect();

		Self {
			colors,
		}
	}

	/// Adds a color.
	pub fn insert(&mut self, color: Color) -> bool {
		self.colors.insert(color)
	}

	/// Returns `true` if the palette holds the color.
	pub fn contains(&self, color: Color) -> bool {
		self.colors.contains(&color)
	}

	/// Merges another palette into this one.
	pub fn union_with(&mut self, other: &Palette) {
		self.colors.extend(other.colors.iter().copied());
	}

	/// Number of colors.
	pub fn len(&self) -> usize {
		self.colors.len()
	}

	/// Returns `true` if there is no visible color.
	pub fn is_empty(&self) -> bool {
		self.colors.is_empty()
	}

	/// Iterates over the colors in ascending order.
	pub fn iter(&self) -> impl Iterator<Item = Color> + '_ {
		self.colors.iter().copied()
	}
}

impl FromIterator<Color> for Palette {
	fn from_iter<I: IntoIterator<Item = Color>>(iter: I) -> Self {
		Self {
			colors: iter.into_iter().collect(),
		}
	}
}

impl Extend<Color> for Palette {
	fn extend<I: IntoIterator<Item = Color>>(&mut self, iter: I) {
		self.colors.extend(iter);
	}
}

/// Original → recolored correspondence, one entry per palette color.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorMapping {
	map: BTreeMap<Color, Color>,
}

impl ColorMapping {
	/// Runs every palette color through `mutation` as one opaque pixel.
	///
	/// The sheet's pixel buffer is never rescanned.
	pub fn derive(palette: &Palette, mutation: &Mutation) -> Self {
		let map = palette.iter().map(|color| (color, mutation.apply_color(color))).collect();
		Self {
			map,
		}
	}

	/// Returns the recolored value of an original color.
	pub fn get(&self, original: Color) -> Option<Color> {
		self.map.get(&original).copied()
	}

	/// Number of entries (equal to the palette size).
	pub fn len(&self) -> usize {
		self.map.len()
	}

	/// Returns `true` if the mapping is empty.
	pub fn is_empty(&self) -> bool {
		self.map.is_empty()
	}

	/// Iterates over `(original, recolored)` pairs.
	pub fn iter(&self) -> impl Iterator<Item = (Color, Color)> + '_ {
		self.map.iter().map(|(&from, &to)| (from, to))
	}

	/// The distinct recolored colors, as a picker displays them.
	pub fn targets(&self) -> Palette {
		self.map.values().copied().collect()
	}
}
