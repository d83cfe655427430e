//! Prelude module for `sbsprite_internal`.
//!
//! This module provides a convenient way to import commonly used types and traits.
//!
//! # Examples
//!
//! ```rust
//! use sbsprite_internal::prelude::*;
//!
//! // Now you can use all common types directly
//! let mut source = MemorySource::new();
//! source.insert("/humanoid/malebody.frames", b"{ frameList: { idle: [0, 0, 43, 43] } }".to_vec());
//!
//! let loader = Loader::new(source);
//! let frames = loader.load_frames("/humanoid/malebody.frames").unwrap();
//! let table = ClippingTable::build(&frames).unwrap();
//! assert_eq!(table.get("idle"), Some(Clip::new(0, 0, 43, 43)));
//! ```

// Re-export everything from sbsprite_types::prelude
#[doc(inline)]
pub use sbsprite_types::prelude::*;

// Asset loading
#[doc(inline)]
pub use crate::loader::{LoadError, Loader, SheetPaths, sheet_paths};

#[doc(inline)]
pub use sbsprite_vfs::{AssetSource, DirectorySource, MemorySource, VfsError};

// Re-export the member crates for advanced usage
#[doc(inline)]
pub use {sbsprite_types, sbsprite_vfs};
