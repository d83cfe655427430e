//! Loading characters from an asset tree.
//!
//! Every sheet is a PNG plus a `.frames` file (comment-tolerant JSON). The
//! body, head and arm frames are shared by every species of one gender, hair
//! style folders carry one `default.frames` for all their styles:
//!
//! | Slot | Image | Frames |
//! |------|-------|--------|
//! | body | `/humanoid/{species}/{gender}body.png` | `/humanoid/{gender}body.frames` |
//! | head | `/humanoid/{species}/{gender}head.png` | `/humanoid/{gender}head.frames` |
//! | front arm | `/humanoid/{species}/frontarm.png` | `/humanoid/frontarm.frames` |
//! | back arm | `/humanoid/{species}/backarm.png` | `/humanoid/backarm.frames` |
//! | hair, facial hair, mask | `/humanoid/{species}/{group}/{type}.png` | `/humanoid/{species}/{group}/default.frames` |

use log::{debug, info};
use sbsprite_types::SpriteError;
use sbsprite_types::atlas::FrameData;
use sbsprite_types::player::{Identity, SheetSlot, SpriteComposite};
use sbsprite_types::sheet::{Bitmap, SpriteSheet};
use sbsprite_vfs::{AssetSource, VfsError};
use thiserror::Error;

/// Errors that can occur while loading a character's assets
#[derive(Debug, Error)]
pub enum LoadError {
	/// The asset could not be read
	#[error(transparent)]
	Vfs(#[from] VfsError),

	/// The image could not be decoded
	#[error("Failed to decode image {path}: {source}")]
	Image {
		/// Asset path of the image
		path: String,
		/// Underlying error
		#[source]
		source: image::ImageError,
	},

	/// The frames file is not valid UTF-8
	#[error("Frames file {path} is not valid UTF-8: {source}")]
	Utf8 {
		/// Asset path of the frames file
		path: String,
		/// Underlying error
		#[source]
		source: std::string::FromUtf8Error,
	},

	/// The frames file could not be parsed
	#[error("Failed to parse frames {path}: {source}")]
	Frames {
		/// Asset path of the frames file
		path: String,
		/// Underlying error
		#[source]
		source: json5::Error,
	},

	/// The image and its frames do not agree
	#[error("Invalid sprite sheet {path}: {source}")]
	Sheet {
		/// Asset path of the image
		path: String,
		/// Underlying error
		#[source]
		source: SpriteError,
	},

	/// The identity lacks a field needed to locate its assets
	#[error("Identity has no {0}")]
	IncompleteIdentity(&'static str),

	/// Assembling the character failed
	#[error(transparent)]
	Sprite(#[from] SpriteError),
}

/// Asset paths of one sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetPaths {
	/// PNG path
	pub image: String,
	/// `.frames` path
	pub frames: String,
}

/// Resolves the asset paths of a slot.
///
/// Returns `None` for hair, facial hair and mask when the identity leaves
/// the group or type empty.
pub fn sheet_paths(slot: SheetSlot, identity: &Identity) -> Option<SheetPaths> {
	let species = &identity.species;
	let gender = &identity.gender;

	let (image, frames) = match slot {
		SheetSlot::Body => (
			format!("/humanoid/{species}/{gender}body.png"),
			format!("/humanoid/{gender}body.frames"),
		),
		SheetSlot::Head => (
			format!("/humanoid/{species}/{gender}head.png"),
			format!("/humanoid/{gender}head.frames"),
		),
		SheetSlot::FrontArm => {
			(format!("/humanoid/{species}/frontarm.png"), "/humanoid/frontarm.frames".to_string())
		}
		SheetSlot::BackArm => {
			(format!("/humanoid/{species}/backarm.png"), "/humanoid/backarm.frames".to_string())
		}
		SheetSlot::Hair => return style_paths(species, &identity.hair_group, &identity.hair_type),
		SheetSlot::FacialHair => {
			return style_paths(species, &identity.facial_hair_group, &identity.facial_hair_type);
		}
		SheetSlot::Mask => {
			return style_paths(species, &identity.facial_mask_group, &identity.facial_mask_type);
		}
	};

	Some(SheetPaths {
		image,
		frames,
	})
}

fn style_paths(species: &str, group: &str, kind: &str) -> Option<SheetPaths> {
	if group.is_empty() || kind.is_empty() {
		return None;
	}

	Some(SheetPaths {
		image: format!("/humanoid/{species}/{group}/{kind}.png"),
		frames: format!("/humanoid/{species}/{group}/default.frames"),
	})
}

/// Builds sheets and characters from an [`AssetSource`].
///
/// # Examples
///
/// ```no_run
/// use sbsprite_internal::loader::Loader;
/// use sbsprite_types::player::Identity;
/// use sbsprite_vfs::DirectorySource;
///
/// let loader = Loader::new(DirectorySource::new("assets/unpacked"));
/// let identity = Identity::from_json(r#"{ "species": "human", "gender": "male" }"#).unwrap();
/// let character = loader.load_composite(identity).unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct Loader<S> {
	source: S,
}

impl<S: AssetSource> Loader<S> {
	/// Creates a loader reading from `source`.
	pub fn new(source: S) -> Self {
		Self {
			source,
		}
	}

	/// The underlying asset source.
	pub fn source(&self) -> &S {
		&self.source
	}

	/// Reads and decodes a PNG into an RGBA bitmap.
	pub fn load_bitmap(&self, path: &str) -> Result<Bitmap, LoadError> {
		let bytes = self.source.read(path)?;
		let image = image::load_from_memory(&bytes).map_err(|source| LoadError::Image {
			path: path.to_string(),
			source,
		})?;
		Ok(Bitmap::from(image.to_rgba8()))
	}

	/// Reads and parses a `.frames` file.
	pub fn load_frames(&self, path: &str) -> Result<FrameData, LoadError> {
		let bytes = self.source.read(path)?;
		let text = String::from_utf8(bytes).map_err(|source| LoadError::Utf8 {
			path: path.to_string(),
			source,
		})?;
		json5::from_str(&text).map_err(|source| LoadError::Frames {
			path: path.to_string(),
			source,
		})
	}

	/// Loads one sheet from its image and frames.
	pub fn load_sheet(&self, paths: &SheetPaths) -> Result<SpriteSheet, LoadError> {
		let bitmap = self.load_bitmap(&paths.image)?;
		let frames = self.load_frames(&paths.frames)?;
		debug!("Loading sheet {} with frames {}", paths.image, paths.frames);

		SpriteSheet::new(bitmap, &frames).map_err(|source| LoadError::Sheet {
			path: paths.image.clone(),
			source,
		})
	}

	/// Loads every sheet of a character and applies its directives.
	///
	/// Hair, facial hair and mask sheets are skipped when the identity leaves
	/// their type empty.
	///
	/// # Errors
	///
	/// * [`LoadError::IncompleteIdentity`] if species or gender is empty
	/// * any read, decode or sheet error, tagged with the asset path
	pub fn load_composite(&self, identity: Identity) -> Result<SpriteComposite, LoadError> {
		if identity.species.is_empty() {
			return Err(LoadError::IncompleteIdentity("species"));
		}
		if identity.gender.is_empty() {
			return Err(LoadError::IncompleteIdentity("gender"));
		}

		let mut sheets = Vec::with_capacity(SheetSlot::DRAW_ORDER.len());
		for slot in SheetSlot::DRAW_ORDER {
			match sheet_paths(slot, &identity) {
				Some(paths) => sheets.push((slot, self.load_sheet(&paths)?)),
				None => debug!("Skipping {} sheet: no style selected", slot),
			}
		}

		info!(
			"Loaded {} {} character {:?} ({} sheets)",
			identity.gender,
			identity.species,
			identity.name,
			sheets.len()
		);

		Ok(SpriteComposite::new(identity, sheets)?)
	}
}
