//! This module is separated into its own crate to keep asset loading apart from the
//! pure sprite types, and should not be used directly; depend on `sbsprite-rs` instead.

pub mod loader;

/// `use sbsprite_rs::prelude::*;` to import commonly used items.
pub mod prelude;

// Re-export the member crates for convenience
pub use sbsprite_types;
pub use sbsprite_vfs;

// Re-export commonly used types at crate root
pub use loader::{LoadError, Loader, SheetPaths, sheet_paths};
pub use sbsprite_types::{Color, SpriteError};
pub use sbsprite_vfs::{AssetSource, DirectorySource, MemorySource, VfsError};
