//! Humanoid character compositing.
//!
//! A character is drawn from seven sheets ([`SheetSlot`]) but recolored
//! through four logical parts ([`BodyPart`]). The body part fans out to the
//! body, head and both arm sheets, which always share one directive string.

use std::fmt;
use std::str::FromStr;

pub mod composite;
pub mod identity;

pub use composite::{Bounds, SpriteComposite};
pub use identity::{Identity, VersionedRecord};

/// One underlying sprite sheet of a character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SheetSlot {
	/// Arm behind the body
	BackArm,
	/// Torso and legs
	Body,
	/// Arm in front of the body
	FrontArm,
	/// Head
	Head,
	/// Hair
	Hair,
	/// Facial hair
	FacialHair,
	/// Facial mask
	Mask,
}

impl SheetSlot {
	/// Back-to-front drawing order.
	pub const DRAW_ORDER: [Self; 7] = [
		Self::BackArm,
		Self::Body,
		Self::FrontArm,
		Self::Head,
		Self::Hair,
		Self::FacialHair,
		Self::Mask,
	];

	/// Returns `true` for slots placed by the head offset and drawn with the
	/// head state.
	pub fn is_head_region(self) -> bool {
		matches!(self, Self::Head | Self::Hair | Self::FacialHair | Self::Mask)
	}

	/// Returns `true` for the two arm slots.
	pub fn is_arm(self) -> bool {
		matches!(self, Self::BackArm | Self::FrontArm)
	}

	/// Returns `true` if a character cannot be drawn without this slot.
	pub fn is_required(self) -> bool {
		matches!(self, Self::BackArm | Self::Body | Self::FrontArm | Self::Head)
	}

	/// The logical part whose directives recolor this slot.
	pub fn part(self) -> BodyPart {
		match self {
			Self::BackArm | Self::Body | Self::FrontArm | Self::Head => BodyPart::Body,
			Self::Hair => BodyPart::Hair,
			Self::FacialHair => BodyPart::FacialHair,
			Self::Mask => BodyPart::Mask,
		}
	}

	/// Human readable name.
	pub fn name(self) -> &'static str {
		match self {
			Self::BackArm => "back arm",
			Self::Body => "body",
			Self::FrontArm => "front arm",
			Self::Head => "head",
			Self::Hair => "hair",
			Self::FacialHair => "facial hair",
			Self::Mask => "mask",
		}
	}
}

impl fmt::Display for SheetSlot {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

/// A logical recoloring target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BodyPart {
	/// Body, head and both arms
	Body,
	/// Hair
	Hair,
	/// Facial hair
	FacialHair,
	/// Facial mask
	Mask,
}

impl BodyPart {
	/// Every part.
	pub const ALL: [Self; 4] = [Self::Body, Self::Hair, Self::FacialHair, Self::Mask];

	/// The sheets this part's directives are applied to.
	pub fn slots(self) -> &'static [SheetSlot] {
		match self {
			Self::Body => &[SheetSlot::BackArm, SheetSlot::Body, SheetSlot::Head, SheetSlot::FrontArm],
			Self::Hair => &[SheetSlot::Hair],
			Self::FacialHair => &[SheetSlot::FacialHair],
			Self::Mask => &[SheetSlot::Mask],
		}
	}

	/// Human readable name.
	pub fn name(self) -> &'static str {
		match self {
			Self::Body => "body",
			Self::Hair => "hair",
			Self::FacialHair => "facial hair",
			Self::Mask => "mask",
		}
	}

	/// The directive string the identity stores for this part.
	pub fn identity_directives(self, identity: &Identity) -> &str {
		match self {
			Self::Body => &identity.body_directives,
			Self::Hair => &identity.hair_directives,
			Self::FacialHair => &identity.facial_hair_directives,
			Self::Mask => &identity.facial_mask_directives,
		}
	}
}

impl fmt::Display for BodyPart {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

impl FromStr for BodyPart {
	type Err = String;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_ascii_lowercase().replace(['-', '_'], " ").as_str() {
			"body" => Ok(Self::Body),
			"hair" => Ok(Self::Hair),
			"facial hair" | "facialhair" => Ok(Self::FacialHair),
			"mask" | "facial mask" | "facialmask" => Ok(Self::Mask),
			other => Err(format!("unknown body part {other:?}")),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_part_routing() {
		assert_eq!(BodyPart::Body.slots().len(), 4);
		for part in BodyPart::ALL {
			for slot in part.slots() {
				assert_eq!(slot.part(), part);
			}
		}
	}

	#[test]
	fn test_every_slot_is_routed_once() {
		let mut routed: Vec<_> = BodyPart::ALL.iter().flat_map(|part| part.slots()).copied().collect();
		routed.sort();
		let mut all = SheetSlot::DRAW_ORDER.to_vec();
		all.sort();
		assert_eq!(routed, all);
	}

	#[test]
	fn test_slot_regions() {
		assert!(SheetSlot::Mask.is_head_region());
		assert!(!SheetSlot::Body.is_head_region());
		assert!(SheetSlot::BackArm.is_arm());
		assert!(!SheetSlot::Head.is_arm());
		assert!(!SheetSlot::Hair.is_required());
	}

	#[test]
	fn test_part_from_str() {
		assert_eq!("body".parse::<BodyPart>(), Ok(BodyPart::Body));
		assert_eq!("Facial-Hair".parse::<BodyPart>(), Ok(BodyPart::FacialHair));
		assert_eq!("facial_mask".parse::<BodyPart>(), Ok(BodyPart::Mask));
		assert!("tail".parse::<BodyPart>().is_err());
	}
}
