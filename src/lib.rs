#![allow(clippy::single_component_path_imports)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! `sbsprite-rs` recolors and composites Starbound-style humanoid character sprites.
//!
//! A character is assembled from seven sprite sheets loaded from an unpacked
//! asset tree. Each logical body part is recolored by a directive string such
//! as `?replace;ffe2c5=ffc181;ffc181=d39c6c`, and the whole character is drawn
//! back to front for any animation state.
//!
//! ```no_run
//! use sbsprite_rs::prelude::*;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let loader = Loader::new(DirectorySource::new("assets/unpacked"));
//! let identity = Identity::from_json(r#"{ "species": "human", "gender": "female" }"#)?;
//!
//! let mut character = loader.load_composite(identity)?;
//! character.apply_directives(BodyPart::Hair, "?replace;735e3a=d9c189")?;
//!
//! let bounds = character.bounds()?;
//! let mut canvas = Canvas::new(bounds.width(), bounds.height())?;
//! character.draw_at(&mut canvas, -bounds.left, -bounds.top)?;
//! canvas.into_image().save("character.png")?;
//! # Ok(())
//! # }
//! ```
pub use sbsprite_internal::*;
