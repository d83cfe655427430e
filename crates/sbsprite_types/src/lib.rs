//! This crate provides the core data types and algorithms for recoloring and
//! compositing Starbound-style humanoid sprites.
//!
//! # Components
//!
//! - **Directives**: `?replace;from=to` recolor strings, parsed into
//!   [`directive::Directive`]s and composed into one [`directive::Mutation`]
//! - **Frame atlas**: grid, rectangle list and alias frame metadata resolved
//!   into a [`atlas::ClippingTable`]
//! - **Sprite sheets**: original and working pixels, palette and color
//!   mapping of one bitmap ([`sheet::SpriteSheet`])
//! - **Characters**: seven layered sheets driven by one identity
//!   ([`player::SpriteComposite`])
//!
//! # Examples
//!
//! Using the prelude (recommended):
//!
//! ```
//! use sbsprite_types::prelude::*;
//!
//! # fn main() -> Result<(), SpriteError> {
//! let mutation = Mutation::parse("?replace;AABBCC=112233?replace;112233=FF0000")?;
//!
//! // The first replace sees the result of the second one
//! assert_eq!(mutation.apply_color(Color::from_packed(0xAABBCC)), Color::from_packed(0x112233));
//! assert_eq!(mutation.apply_color(Color::from_packed(0x112233)), Color::from_packed(0xFF0000));
//! # Ok(())
//! # }
//! ```
//!
//! Or use explicit paths:
//!
//! ```
//! use sbsprite_types::directive::parse_directives;
//!
//! let directives = parse_directives("?replace=aabbcc=112233?flipx").unwrap();
//! assert_eq!(directives.len(), 2);
//! assert_eq!(directives[0].to_string(), "?replace;aabbcc=112233");
//! ```

pub mod atlas;
pub mod color;
pub mod directive;
mod error;
pub mod player;
pub mod sheet;

/// `use sbsprite_types::prelude::*;` to import commonly used items.
pub mod prelude;

pub use color::Color;
pub use error::SpriteError;
