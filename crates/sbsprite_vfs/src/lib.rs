//! Asset sources for sprite loading.
//!
//! Assets are addressed by absolute, `/`-separated paths as they appear in an
//! unpacked asset tree, e.g. `/humanoid/human/malebody.png`. An
//! [`AssetSource`] turns such a path into bytes; decoding belongs to the
//! caller.
//!
//! # Examples
//!
//! ```
//! use sbsprite_vfs::{AssetSource, MemorySource};
//!
//! let mut source = MemorySource::new();
//! source.insert("/humanoid/malebody.frames", b"{}".to_vec());
//!
//! assert!(source.exists("/humanoid/malebody.frames"));
//! assert_eq!(source.read("humanoid/malebody.frames").unwrap(), b"{}");
//! ```

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

use log::trace;
use thiserror::Error;

/// Errors that can occur when reading assets
#[derive(Debug, Error)]
pub enum VfsError {
	/// No asset at this path
	#[error("Asset not found: {0}")]
	NotFound(String),

	/// The path escapes the asset root or is empty
	#[error("Invalid asset path: {0:?}")]
	InvalidPath(String),

	/// IO error while reading an existing asset
	#[error("Failed to read asset {path}: {source}")]
	Io {
		/// Asset path that was being read
		path: String,
		/// Underlying error
		#[source]
		source: io::Error,
	},
}

/// A read-only tree of named binary assets.
pub trait AssetSource {
	/// Reads the whole asset at `path`.
	///
	/// # Errors
	///
	/// [`VfsError::NotFound`] if there is no such asset, [`VfsError::Io`] if it
	/// exists but cannot be read.
	fn read(&self, path: &str) -> Result<Vec<u8>, VfsError>;

	/// Returns `true` if an asset exists at `path`.
	fn exists(&self, path: &str) -> bool;
}

impl<T: AssetSource + ?Sized> AssetSource for &T {
	fn read(&self, path: &str) -> Result<Vec<u8>, VfsError> {
		(**self).read(path)
	}

	fn exists(&self, path: &str) -> bool {
		(**self).exists(path)
	}
}

impl<T: AssetSource + ?Sized> AssetSource for Box<T> {
	fn read(&self, path: &str) -> Result<Vec<u8>, VfsError> {
		(**self).read(path)
	}

	fn exists(&self, path: &str) -> bool {
		(**self).exists(path)
	}
}

/// Normalizes an asset path to its `/`-joined components without a leading
/// slash.
///
/// Empty and `.` components are dropped. `..` is rejected.
///
/// # Errors
///
/// [`VfsError::InvalidPath`] for `..` components or a path with no
/// components at all.
pub fn normalize(path: &str) -> Result<String, VfsError> {
	let mut parts = Vec::new();
	for part in path.split(['/', '\\']) {
		match part {
			"" | "." => {}
			".." => return Err(VfsError::InvalidPath(path.to_string())),
			part => parts.push(part),
		}
	}

	if parts.is_empty() {
		return Err(VfsError::InvalidPath(path.to_string()));
	}

	Ok(parts.join("/"))
}

/// Assets unpacked into a directory on disk.
#[derive(Debug, Clone)]
pub struct DirectorySource {
	root: PathBuf,
}

impl DirectorySource {
	/// Creates a source rooted at `root`; asset `/a/b.png` maps to `root/a/b.png`.
	pub fn new(root: impl Into<PathBuf>) -> Self {
		Self {
			root: root.into(),
		}
	}

	/// The directory assets are read from.
	pub fn root(&self) -> &Path {
		&self.root
	}

	/// Resolves an asset path to a file path under the root.
	pub fn resolve(&self, path: &str) -> Result<PathBuf, VfsError> {
		Ok(normalize(path)?.split('/').fold(self.root.clone(), |acc, part| acc.join(part)))
	}
}

impl AssetSource for DirectorySource {
	fn read(&self, path: &str) -> Result<Vec<u8>, VfsError> {
		let file = self.resolve(path)?;
		trace!("Reading asset {} from {}", path, file.display());

		std::fs::read(&file).map_err(|source| {
			if source.kind() == io::ErrorKind::NotFound {
				VfsError::NotFound(path.to_string())
			} else {
				VfsError::Io {
					path: path.to_string(),
					source,
				}
			}
		})
	}

	fn exists(&self, path: &str) -> bool {
		self.resolve(path).is_ok_and(|file| file.is_file())
	}
}

/// Assets held in memory, keyed by normalized path.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
	files: HashMap<String, Vec<u8>>,
}

impl MemorySource {
	/// Creates an empty source.
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds or replaces an asset. Returns the previous contents, if any.
	///
	/// Paths that do not normalize are ignored.
	pub fn insert(&mut self, path: &str, data: Vec<u8>) -> Option<Vec<u8>> {
		let key = normalize(path).ok()?;
		self.files.insert(key, data)
	}

	/// Removes an asset.
	pub fn remove(&mut self, path: &str) -> Option<Vec<u8>> {
		let key = normalize(path).ok()?;
		self.files.remove(&key)
	}

	/// Number of assets.
	pub fn len(&self) -> usize {
		self.files.len()
	}

	/// Returns `true` if the source holds no asset.
	pub fn is_empty(&self) -> bool {
		self.files.is_empty()
	}
}

impl AssetSource for MemorySource {
	fn read(&self, path: &str) -> Result<Vec<u8>, VfsError> {
		let key = normalize(path)?;
		self.files.get(&key).cloned().ok_or_else(|| VfsError::NotFound(path.to_string()))
	}

	fn exists(&self, path: &str) -> bool {
		normalize(path).is_ok_and(|key| self.files.contains_key(&key))
	}
}
