//! Image directive support.
//!
//! A directive string is a sequence of `?`-delimited segments, each a
//! `;`-delimited list of tokens whose first token is the command:
//!
//! ```text
//! ?replace;aabbcc=112233;ddeeff=445566?replace=ff0000=00ff00
//! ```
//!
//! The compact form `replace=aabbcc=112233` is equivalent to
//! `replace;aabbcc=112233`: the first token is split once on `=`.
//!
//! Only `replace` changes pixels. Other commands are parsed structurally and
//! ignored when the directives are turned into a [`Mutation`].
//!
//! # Examples
//!
//! ```
//! use sbsprite_types::directive::{Mutation, parse_directives};
//!
//! let directives = parse_directives("?replace;aabbcc=112233").unwrap();
//! let mutation = Mutation::from_directives(&directives).unwrap();
//!
//! let mut pixel = [0xAA, 0xBB, 0xCC, 0xFF];
//! mutation.apply_pixel(&mut pixel);
//! assert_eq!(pixel, [0x11, 0x22, 0x33, 0xFF]);
//! ```

use std::fmt;

use crate::SpriteError;

pub mod mutation;

pub use mutation::{Mutation, ReplaceMap};

/// Segment delimiter.
pub const SEGMENT_DELIMITER: char = '?';

/// Token delimiter inside a segment.
pub const TOKEN_DELIMITER: char = ';';

/// Command name of the recolor operation.
pub const REPLACE: &str = "replace";

/// One parsed directive: a command followed by its positional arguments.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Directive {
	command: String,
	args: Vec<String>,
}

impl Directive {
	/// Creates a directive from a command and its arguments.
	pub fn new(command: impl Into<String>, args: Vec<String>) -> Self {
		Self {
			command: command.into(),
			args,
		}
	}

	/// Parses a single segment (without the leading `?`).
	///
	/// # Arguments
	///
	/// * `index` - Position of the segment, used for error reporting
	/// * `segment` - Raw segment text
	pub fn parse_segment(index: usize, segment: &str) -> Result<Self, SpriteError> {
		let mut tokens = segment.split(TOKEN_DELIMITER);
		// `split` always yields at least one item
		let head = tokens.next().unwrap_or_default();

		let mut args = Vec::new();
		let command = match head.split_once('=') {
			Some((command, first_arg)) => {
				args.push(first_arg.to_string());
				command
			}
			None => head,
		};

		let command = command.trim();
		if command.is_empty() {
			return Err(SpriteError::Parse {
				index,
				segment: segment.to_string(),
				reason: "empty command",
			});
		}

		args.extend(tokens.map(str::to_string));

		Ok(Self::new(command, args))
	}

	/// Returns the command name.
	#[inline]
	pub fn command(&self) -> &str {
		&self.command
	}

	/// Returns the positional arguments.
	#[inline]
	pub fn args(&self) -> &[String] {
		&self.args
	}

	/// Returns `true` if this is a `replace` directive.
	#[inline]
	pub fn is_replace(&self) -> bool {
		self.command == REPLACE
	}
}

impl fmt::Display for Directive {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{SEGMENT_DELIMITER}{}", self.command)?;
		for arg in &self.args {
			write!(f, "{TOKEN_DELIMITER}{arg}")?;
		}
		Ok(())
	}
}

/// Parses a directive string into its ordered list of directives.
///
/// Empty segments (a leading `?`, or `??`) are skipped. Parsing never
/// rejects an unknown command; it only fails on a segment whose command
/// token is empty, such as `?;aabbcc=112233` or `?=x`.
pub fn parse_directives(directives: &str) -> Result<Vec<Directive>, SpriteError> {
	directives
		.split(SEGMENT_DELIMITER)
		.filter(|segment| !segment.is_empty())
		.enumerate()
		.map(|(index, segment)| Directive::parse_segment(index, segment))
		.collect()
}

/// Formats directives back into a canonical directive string.
pub fn to_directive_string(directives: &[Directive]) -> String {
	directives.iter().map(ToString::to_string).collect()
}
