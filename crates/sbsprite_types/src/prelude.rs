//! Prelude module for `sbsprite_types`.
//!
//! This module provides a convenient way to import commonly used types and traits.
//!
//! # Examples
//!
//! ```
//! use sbsprite_types::prelude::*;
//!
//! let mut frames = FrameData::default();
//! frames.push_rect("idle.1", [0, 0, 43, 43]).push_alias("idle", "idle.1");
//!
//! let table = ClippingTable::build(&frames).unwrap();
//! assert_eq!(table.get("idle"), Some(Clip::new(0, 0, 43, 43)));
//! ```

#[doc(inline)]
pub use crate::{Color, SpriteError};

// Directive types
#[doc(inline)]
pub use crate::directive::{Directive, Mutation, ReplaceMap, parse_directives, to_directive_string};

// Frame atlas types
#[doc(inline)]
pub use crate::atlas::{Clip, ClippingTable, FrameData, FrameGrid};

// Sheet types
#[doc(inline)]
pub use crate::sheet::{Bitmap, Canvas, ColorMapping, Palette, SpriteSheet, Surface};

// Character types
#[doc(inline)]
pub use crate::player::{BodyPart, Identity, SheetSlot, SpriteComposite, VersionedRecord};
