use fixture_resolver::{EmbeddedBundle, FixtureResource};

const MANIFEST_DIR: &str = env!("CARGO_MANIFEST_DIR");

/// Minting policy that accepts every transaction.
pub const ALWAYS_MINTS_V2: FixtureResource = FixtureResource::new(
    "always-mints-v2",
    "Scripts/always-mints-v2.plutus",
    MANIFEST_DIR,
    "../../fixtures/scripts/always-mints-v2.plutus",
);

pub static CATALOG: &[FixtureResource] = &[ALWAYS_MINTS_V2];

static BUNDLED: &[(&str, &str)] = &[(
    ALWAYS_MINTS_V2.bundle_path(),
    include_str!("../../../fixtures/scripts/always-mints-v2.plutus"),
)];

/// Copies of every catalog fixture compiled into this crate.
pub fn bundle() -> EmbeddedBundle { EmbeddedBundle::new(BUNDLED) }

pub fn find(name: &str) -> Option<&'static FixtureResource> {
    CATALOG.iter().find(|resource| resource.name() == name)
}
