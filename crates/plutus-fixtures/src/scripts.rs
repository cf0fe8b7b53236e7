use fixture_resolver::{FixtureText, Origin, ResourceSource, Resolver, Result};

use crate::{ALWAYS_MINTS_V2, bundle};

/// Loads `always-mints-v2` from `origin`.
pub fn always_mints_v2(origin: Origin) -> Result<FixtureText> {
    Resolver::new(bundle()).resolve(origin, &ALWAYS_MINTS_V2)
}

/// Every script fixture, loaded once from a single origin.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Scripts {
    origin: Origin,
    always_mints_v2: FixtureText,
}

impl Scripts {
    pub fn load(origin: Origin) -> Result<Self> { Self::load_with(&Resolver::new(bundle()), origin) }

    /// Chooses the origin from `BROWSER_RUNTIME`.
    pub fn from_env() -> Result<Self> { Self::load(Origin::from_env()) }

    pub fn load_with<E, F>(resolver: &Resolver<E, F>, origin: Origin) -> Result<Self>
    where
        E: ResourceSource,
        F: ResourceSource,
    {
        let scripts = Self {
            origin,
            always_mints_v2: resolver.resolve(origin, &ALWAYS_MINTS_V2)?,
        };
        tracing::info!(%origin, "loaded plutus script fixtures");
        Ok(scripts)
    }

    pub fn origin(&self) -> Origin { self.origin }

    pub fn always_mints_v2(&self) -> &str { &self.always_mints_v2 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_records_origin() {
        let scripts = Scripts::load(Origin::Embedded).unwrap();
        assert_eq!(scripts.origin(), Origin::Embedded);
    }

    #[test]
    fn test_free_function_matches_scripts() {
        let text = always_mints_v2(Origin::Embedded).unwrap();
        let scripts = Scripts::load(Origin::Embedded).unwrap();
        assert_eq!(text.as_str(), scripts.always_mints_v2());
    }
}
