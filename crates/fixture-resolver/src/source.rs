//! Retrieval strategies behind a single [`ResourceSource`] contract.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{self, Error, Location, Result};
use crate::FixtureResource;

/// Returns the full text of a resource or fails.
pub trait ResourceSource {
    fn load(&self, resource: &FixtureResource) -> Result<String>;
}

/// Compile-time table of `(logical path, text)` pairs, usually filled with
/// `include_str!`.
#[derive(Clone, Copy, Debug, Default)]
pub struct EmbeddedBundle {
    entries: &'static [(&'static str, &'static str)],
}

impl EmbeddedBundle {
    pub const fn new(entries: &'static [(&'static str, &'static str)]) -> Self {
        Self { entries }
    }

    pub fn get(&self, logical_path: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(path, _)| *path == logical_path)
            .map(|(_, text)| *text)
    }

    pub fn contains(&self, logical_path: &str) -> bool { self.get(logical_path).is_some() }

    pub fn paths(&self) -> impl Iterator<Item = &'static str> {
        self.entries.iter().map(|(path, _)| *path)
    }

    pub fn len(&self) -> usize { self.entries.len() }

    pub fn is_empty(&self) -> bool { self.entries.is_empty() }
}

impl ResourceSource for EmbeddedBundle {
    fn load(&self, resource: &FixtureResource) -> Result<String> {
        self.get(resource.bundle_path())
            .map(str::to_owned)
            .ok_or_else(|| Error::ResourceNotFound {
                name: resource.name().to_owned(),
                location: Location::Bundle(resource.bundle_path().to_owned()),
            })
    }
}

/// Reads resources from disk as UTF-8, fully buffered.
#[derive(Clone, Debug, Default)]
pub struct FsSource {
    base_dir: Option<PathBuf>,
}

impl FsSource {
    pub fn new() -> Self { Self::default() }

    /// Replaces every resource's declared base directory.
    pub fn with_base_dir(mut self, base_dir: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(base_dir.into());
        self
    }

    pub fn base_dir(&self) -> Option<&Path> { self.base_dir.as_deref() }

    pub fn path_for(&self, resource: &FixtureResource) -> PathBuf {
        match &self.base_dir {
            Some(base_dir) => resource.fs_path_from(base_dir),
            None => resource.fs_path(),
        }
    }
}

impl ResourceSource for FsSource {
    fn load(&self, resource: &FixtureResource) -> Result<String> {
        let path = self.path_for(resource);
        tracing::trace!(resource = resource.name(), path = %path.display(), "reading fixture");
        fs::read_to_string(&path).map_err(|e| error::from_io(resource.name(), &path, e))
    }
}
