//! Origin dispatch over the two retrieval strategies.
//!
//! A [`Resolver`] owns one embedded source and one filesystem source and
//! consults exactly one of them per call. There is no fallback from one
//! strategy to the other.

use std::path::PathBuf;

use crate::source::{EmbeddedBundle, FsSource, ResourceSource};
use crate::{FixtureResource, FixtureText, Origin, Result};

#[derive(Clone, Debug)]
pub struct Resolver<E = EmbeddedBundle, F = FsSource> {
    embedded: E,
    filesystem: F,
}

impl Resolver {
    pub fn new(bundle: EmbeddedBundle) -> Self { Self::with_sources(bundle, FsSource::new()) }
}

impl<E> Resolver<E, FsSource> {
    /// Reads filesystem resources relative to `base_dir` instead of the
    /// directory each resource declares.
    pub fn with_base_dir(self, base_dir: impl Into<PathBuf>) -> Self {
        Self {
            embedded: self.embedded,
            filesystem: self.filesystem.with_base_dir(base_dir),
        }
    }
}

impl<E, F> Resolver<E, F>
where
    E: ResourceSource,
    F: ResourceSource,
{
    pub fn with_sources(embedded: E, filesystem: F) -> Self { Self { embedded, filesystem } }

    pub fn embedded(&self) -> &E { &self.embedded }

    pub fn filesystem(&self) -> &F { &self.filesystem }

    pub fn resolve(&self, origin: Origin, resource: &FixtureResource) -> Result<FixtureText> {
        let loaded = match origin {
            Origin::Embedded => self.embedded.load(resource),
            Origin::Filesystem => self.filesystem.load(resource),
        };

        match loaded {
            Ok(text) => {
                tracing::debug!(
                    resource = resource.name(),
                    %origin,
                    bytes = text.len(),
                    "resolved fixture"
                );
                Ok(FixtureText::new(text, origin))
            }
            Err(err) => {
                tracing::warn!(resource = resource.name(), %origin, error = %err, "fixture resolution failed");
                Err(err)
            }
        }
    }
}

/// One-shot resolution against `bundle` and the resource's declared directory.
pub fn resolve(
    origin: Origin,
    resource: &FixtureResource,
    bundle: EmbeddedBundle,
) -> Result<FixtureText> {
    Resolver::new(bundle).resolve(origin, resource)
}
