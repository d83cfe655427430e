//! Character assembly and layered drawing

use sbsprite_rs::prelude::*;

use crate::fixtures::*;

#[test_log::test]
fn test_layers_back_to_front() {
	let character = load(identity());
	assert!(character.sheet(SheetSlot::FacialHair).is_none());
	assert!(character.sheet(SheetSlot::Mask).is_none());

	let canvas = render(&character);
	assert_eq!((canvas.width(), canvas.height()), (5, 4));

	// Hair over head over body
	assert_eq!(canvas.pixel(0, 0), Some(HAIR));
	assert_eq!(canvas.pixel(0, 1), Some(SKIN));
	// Body covers the back arm, the front arm covers the body
	assert_eq!(canvas.pixel(2, 2), Some(SKIN));
	assert_eq!(canvas.pixel(3, 2), Some(BACK_ARM));
	assert_eq!(canvas.pixel(1, 3), Some(FRONT_ARM));
	assert_eq!(canvas.pixel(0, 3), Some(OUTLINE));
	// Transparent columns stay empty
	assert_eq!(canvas.pixel(3, 0), Some(EMPTY));
	assert_eq!(canvas.pixel(4, 2), Some(EMPTY));
}

#[test_log::test]
fn test_recolor_then_render() {
	let mut character = load(identity());
	character.apply_directives(BodyPart::Body, "?replace;aabbcc=112233").unwrap();
	character.apply_directives(BodyPart::Hair, "?replace=735e3a=d9c189").unwrap();

	let canvas = render(&character);
	assert_eq!(canvas.pixel(0, 0), Some([0xD9, 0xC1, 0x89, 0xFF]));
	// Head and body share the body directives
	assert_eq!(canvas.pixel(0, 1), Some([0x11, 0x22, 0x33, 0xFF]));
	assert_eq!(canvas.pixel(2, 2), Some([0x11, 0x22, 0x33, 0xFF]));
	assert_eq!(canvas.pixel(0, 3), Some(OUTLINE));
}

#[test_log::test]
fn test_every_state_renders() {
	let mut character = load(identity());
	for state in ["idle", "walk.1", "climb.1"] {
		character.set_state(state);
		let canvas = render(&character);
		assert_eq!(canvas.pixel(0, 0), Some(HAIR), "state {state}");
	}

	character.set_state("climb.1");
	assert_eq!(character.frame_for(SheetSlot::Hair), "climb");
	assert_eq!(character.frame_for(SheetSlot::FrontArm), "climb.1");

	character.set_state("idle");
	assert_eq!(character.frame_for(SheetSlot::Body), "idle.1");
	assert_eq!(character.frame_for(SheetSlot::BackArm), "idle.2");
}

#[test_log::test]
fn test_unknown_state_is_reported() {
	let mut character = load(identity());
	character.set_state("swim.1");
	let err = character.bounds().unwrap_err();
	assert!(err.is_asset_inconsistency());
	assert!(matches!(err, SpriteError::FrameNotFound(frame) if frame == "swim.1"));
}

#[test_log::test]
fn test_part_palettes_for_picker() {
	let mut character = load(identity());

	let body = character.part_palette(BodyPart::Body);
	let expected: Palette = [SKIN, OUTLINE, BACK_ARM, FRONT_ARM]
		.iter()
		.map(|px| Color::from_pixel(px))
		.collect();
	assert_eq!(body, expected);

	character.apply_directives(BodyPart::Body, "?replace;aabbcc=112233").unwrap();
	let body = character.part_palette(BodyPart::Body);
	assert_eq!(body.len(), 4);
	assert!(body.contains(Color::from_packed(0x112233)));
	assert!(!body.contains(Color::from_packed(0xAABBCC)));

	// Applying the same directive again shows the same swatches
	character.apply_directives(BodyPart::Body, "?replace;aabbcc=112233").unwrap();
	assert_eq!(character.part_palette(BodyPart::Body), body);

	assert!(character.part_palette(BodyPart::Mask).is_empty());
}

#[test_log::test]
fn test_identity_from_player_record() {
	let record: VersionedRecord = serde_json::from_value(serde_json::json!({
		"identifier": "PlayerEntity",
		"version": 30,
		"content": {
			"identity": {
				"species": "human",
				"gender": "male",
				"hairGroup": "hair",
				"hairType": "short",
				"hairDirectives": "?replace;735e3a=ffffff",
				"personalityIdle": "idle.1",
				"personalityArmIdle": "idle.1",
				"personalityHeadOffset": [0.0, 0.0],
				"personalityArmOffset": [0.0, 0.0]
			}
		}
	}))
	.unwrap();

	let character = load(Identity::from_record(&record).unwrap());
	assert_eq!(character.directives(BodyPart::Hair), "?replace;735e3a=ffffff");
	assert_eq!(render(&character).pixel(0, 0), Some([0xFF, 0xFF, 0xFF, 0xFF]));
}
