//! Layered character rendering.

use std::collections::BTreeMap;

use log::debug;

use crate::SpriteError;
use crate::player::{BodyPart, Identity, SheetSlot};
use crate::sheet::{Palette, SpriteSheet, Surface};

/// State a freshly built composite starts in.
pub const DEFAULT_STATE: &str = "idle";

/// Rectangle covering every frame a composite draws, relative to its origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
	/// Leftmost column (inclusive)
	pub left: i32,
	/// Topmost row (inclusive)
	pub top: i32,
	/// Rightmost column (exclusive)
	pub right: i32,
	/// Bottom row (exclusive)
	pub bottom: i32,
}

impl Bounds {
	/// Width in pixels.
	pub fn width(&self) -> u32 {
		span(self.left, self.right)
	}

	/// Height in pixels.
	pub fn height(&self) -> u32 {
		span(self.top, self.bottom)
	}

	fn union(self, other: Self) -> Self {
		Self {
			left: self.left.min(other.left),
			top: self.top.min(other.top),
			right: self.right.max(other.right),
			bottom: self.bottom.max(other.bottom),
		}
	}
}

fn span(start: i32, end: i32) -> u32 {
	(i64::from(end) - i64::from(start)).clamp(0, i64::from(u32::MAX)) as u32
}

/// One character: a sheet per slot, a directive string per part and the
/// current action state.
///
/// # Examples
///
/// ```no_run
/// use sbsprite_types::prelude::*;
///
/// # fn sheets() -> Vec<(SheetSlot, SpriteSheet)> { unimplemented!() }
/// # fn main() -> Result<(), SpriteError> {
/// let identity = Identity::from_json(r#"{ "personalityIdle": "idle.1" }"#)?;
/// let mut character = SpriteComposite::new(identity, sheets())?;
///
/// character.apply_directives(BodyPart::Hair, "?replace;735e3a=d9c189")?;
/// character.set_state("walk.2");
///
/// let bounds = character.bounds()?;
/// let mut canvas = Canvas::new(bounds.width(), bounds.height())?;
/// character.draw_at(&mut canvas, -bounds.left, -bounds.top)?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct SpriteComposite {
	identity: Identity,
	sheets: BTreeMap<SheetSlot, SpriteSheet>,
	directives: BTreeMap<BodyPart, String>,
	state: String,
}

impl SpriteComposite {
	/// Assembles a character from its sheets and applies the identity's
	/// directive strings.
	///
	/// # Arguments
	///
	/// * `identity` - appearance record (offsets, idle frames, directives)
	/// * `sheets` - one sheet per slot; hair, facial hair and mask are optional
	///
	/// # Errors
	///
	/// * [`SpriteError::MissingSheet`] if the back arm, body, front arm or head
	///   sheet is absent
	/// * any parse error from the identity's directive strings
	pub fn new(
		identity: Identity,
		sheets: impl IntoIterator<Item = (SheetSlot, SpriteSheet)>,
	) -> Result<Self, SpriteError> {
		let sheets: BTreeMap<_, _> = sheets.into_iter().collect();
		if let Some(slot) = SheetSlot::DRAW_ORDER
			.into_iter()
			.find(|slot| slot.is_required() && !sheets.contains_key(slot))
		{
			return Err(SpriteError::MissingSheet(slot.name()));
		}

		let mut composite = Self {
			identity,
			sheets,
			directives: BTreeMap::new(),
			state: DEFAULT_STATE.to_string(),
		};

		for part in BodyPart::ALL {
			let directives = part.identity_directives(&composite.identity).to_string();
			composite.apply_directives(part, &directives)?;
		}

		debug!(
			"Assembled {} {} character from {} sheets",
			composite.identity.gender,
			composite.identity.species,
			composite.sheets.len()
		);

		Ok(composite)
	}

	/// Recolors every sheet routed to `part`, replacing the part's previous
	/// directives.
	///
	/// On error nothing changes.
	pub fn apply_directives(&mut self, part: BodyPart, directives: &str) -> Result<&mut Self, SpriteError> {
		// All routed sheets get the same string, so a parse failure surfaces on
		// the first one before any pixel is touched
		for slot in part.slots() {
			if let Some(sheet) = self.sheets.get_mut(slot) {
				sheet.apply_directives(directives)?;
			}
		}
		self.directives.insert(part, directives.to_string());
		Ok(self)
	}

	/// Restores the original pixels of every sheet routed to `part`.
	pub fn reset(&mut self, part: BodyPart) -> &mut Self {
		for slot in part.slots() {
			if let Some(sheet) = self.sheets.get_mut(slot) {
				sheet.reset();
			}
		}
		self.directives.remove(&part);
		self
	}

	/// The directive string last applied to `part`.
	pub fn directives(&self, part: BodyPart) -> &str {
		self.directives.get(&part).map_or("", String::as_str)
	}

	/// Post-mutation colors of `part`, deduplicated across its sheets.
	pub fn part_palette(&self, part: BodyPart) -> Palette {
		let mut palette = Palette::new();
		for sheet in part.slots().iter().filter_map(|slot| self.sheets.get(slot)) {
			palette.union_with(&sheet.visible_colors());
		}
		palette
	}

	/// Switches the action state, e.g. `idle`, `walk.3`, `climb.1`.
	pub fn set_state(&mut self, state: impl Into<String>) -> &mut Self {
		self.state = state.into();
		self
	}

	/// The current action state.
	#[inline]
	pub fn state(&self) -> &str {
		&self.state
	}

	/// Frame drawn for head, hair, facial hair and mask.
	pub fn head_state(&self) -> &'static str {
		if self.state.starts_with("climb") { "climb" } else { "normal" }
	}

	/// Frame drawn for the body.
	pub fn body_state(&self) -> &str {
		self.idle_or_state(&self.identity.personality_idle)
	}

	/// Frame drawn for both arms.
	pub fn arm_state(&self) -> &str {
		self.idle_or_state(&self.identity.personality_arm_idle)
	}

	fn idle_or_state<'a>(&'a self, idle: &'a str) -> &'a str {
		if self.state == DEFAULT_STATE { idle } else { &self.state }
	}

	/// Frame name drawn for a slot in the current state.
	pub fn frame_for(&self, slot: SheetSlot) -> &str {
		if slot.is_head_region() {
			self.head_state()
		} else if slot.is_arm() {
			self.arm_state()
		} else {
			self.body_state()
		}
	}

	/// Identity offset applied to a slot.
	pub fn offset_for(&self, slot: SheetSlot) -> (i32, i32) {
		if slot.is_head_region() {
			self.identity.head_offset()
		} else if slot.is_arm() {
			self.identity.arm_offset()
		} else {
			(0, 0)
		}
	}

	/// Draws every present sheet back to front with the origin at `(0, 0)`.
	pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) -> Result<(), SpriteError> {
		self.draw_at(surface, 0, 0)
	}

	/// Draws every present sheet back to front with the origin at
	/// `(origin_x, origin_y)`.
	///
	/// # Errors
	///
	/// [`SpriteError::FrameNotFound`] if a sheet lacks the frame for the
	/// current state. Slots drawn before the failing one stay on the surface.
	pub fn draw_at<S: Surface + ?Sized>(
		&self,
		surface: &mut S,
		origin_x: i32,
		origin_y: i32,
	) -> Result<(), SpriteError> {
		for (slot, sheet) in self.layers() {
			let (dx, dy) = self.offset_for(slot);
			sheet.draw(
				surface,
				self.frame_for(slot),
				origin_x.saturating_add(dx),
				origin_y.saturating_add(dy),
			)?;
		}
		Ok(())
	}

	/// Area covered by [`SpriteComposite::draw`] in the current state.
	pub fn bounds(&self) -> Result<Bounds, SpriteError> {
		let mut bounds: Option<Bounds> = None;
		for (slot, sheet) in self.layers() {
			let clip = sheet.clipping().require(self.frame_for(slot))?;
			let (dx, dy) = self.offset_for(slot);
			let layer = Bounds {
				left: dx,
				top: dy,
				right: dx.saturating_add(clip.width as i32),
				bottom: dy.saturating_add(clip.height as i32),
			};
			bounds = Some(bounds.map_or(layer, |b| b.union(layer)));
		}

		// The back arm is required, so at least one layer exists
		bounds.ok_or(SpriteError::MissingSheet(SheetSlot::BackArm.name()))
	}

	/// Present sheets in drawing order.
	pub fn layers(&self) -> impl Iterator<Item = (SheetSlot, &SpriteSheet)> + '_ {
		SheetSlot::DRAW_ORDER
			.into_iter()
			.filter_map(|slot| self.sheets.get(&slot).map(|sheet| (slot, sheet)))
	}

	/// The sheet in a slot, if loaded.
	pub fn sheet(&self, slot: SheetSlot) -> Option<&SpriteSheet> {
		self.sheets.get(&slot)
	}

	/// The identity this character was built from.
	#[inline]
	pub fn identity(&self) -> &Identity {
		&self.identity
	}
}
