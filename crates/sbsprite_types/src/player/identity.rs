//! Character identity records.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::SpriteError;

/// Versioned JSON record as stored in save files, already decoded.
///
/// The binary container is read elsewhere; this only carries its three
/// fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VersionedRecord {
	/// Record type, e.g. `PlayerEntity`
	pub identifier: String,

	/// Schema version of `content`
	#[serde(default)]
	pub version: u32,

	/// The record body
	pub content: Value,
}

/// Appearance-related part of a player record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Identity {
	/// Character name
	pub name: String,

	/// Species, used to pick the species' sprite folder
	pub species: String,

	/// `male` or `female`, used in body and head sheet names
	pub gender: String,

	/// Hair folder inside the species folder
	pub hair_group: String,

	/// Hair sheet name inside `hair_group`
	pub hair_type: String,

	/// Hair recolor directives
	pub hair_directives: String,

	/// Body recolor directives (body, head and both arms)
	pub body_directives: String,

	/// Emote recolor directives
	pub emote_directives: String,

	/// Facial hair folder
	pub facial_hair_group: String,

	/// Facial hair sheet name
	pub facial_hair_type: String,

	/// Facial hair recolor directives
	pub facial_hair_directives: String,

	/// Facial mask folder
	pub facial_mask_group: String,

	/// Facial mask sheet name
	pub facial_mask_type: String,

	/// Facial mask recolor directives
	pub facial_mask_directives: String,

	/// Body frame used when the character is idle
	pub personality_idle: String,

	/// Arm frame used when the character is idle
	pub personality_arm_idle: String,

	/// Pixel offset of the head, hair, facial hair and mask
	pub personality_head_offset: [f32; 2],

	/// Pixel offset of both arms
	pub personality_arm_offset: [f32; 2],
}

impl Identity {
	/// Extracts the identity from a player record (`content.identity`).
	pub fn from_record(record: &VersionedRecord) -> Result<Self, SpriteError> {
		let identity = record.content.get("identity").cloned().unwrap_or(Value::Null);
		Ok(serde_json::from_value(identity)?)
	}

	/// Parses a bare identity object.
	pub fn from_json(json: &str) -> Result<Self, SpriteError> {
		Ok(serde_json::from_str(json)?)
	}

	/// Head offset rounded to whole pixels.
	pub fn head_offset(&self) -> (i32, i32) {
		round_offset(self.personality_head_offset)
	}

	/// Arm offset rounded to whole pixels.
	pub fn arm_offset(&self) -> (i32, i32) {
		round_offset(self.personality_arm_offset)
	}
}

fn round_offset([x, y]: [f32; 2]) -> (i32, i32) {
	(x.round() as i32, y.round() as i32)
}
