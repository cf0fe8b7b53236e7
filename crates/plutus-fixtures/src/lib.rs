//! Plutus script fixtures shared by examples and tests.
//!
//! Each script is available from two places: a copy compiled into this crate
//! and the file under `fixtures/scripts/` at the workspace root. Callers pick
//! the [`Origin`] once and hand the loaded [`Scripts`] to whatever needs them.
//!
//! ```
//! use plutus_fixtures::{Origin, Scripts};
//!
//! let scripts = Scripts::load(Origin::Embedded).unwrap();
//! assert!(!scripts.always_mints_v2().is_empty());
//! ```

pub use catalog::{ALWAYS_MINTS_V2, CATALOG, bundle, find};
pub use fixture_resolver::{Error, FixtureResource, FixtureText, Origin, Result};
pub use scripts::{Scripts, always_mints_v2};

mod catalog;
mod scripts;
