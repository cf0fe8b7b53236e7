//! Dual-origin resolution of text fixtures.
//!
//! # Architecture
//!
//! A fixture is described once by a [`FixtureResource`]: its logical name, a
//! logical path inside an embedded bundle, and an offset on disk relative to
//! the crate that declares it. The caller picks an [`Origin`] and the
//! [`Resolver`] consults exactly that strategy.
//!
//! The resolver is mechanism only. Which fixtures exist, and what gets
//! bundled, belongs to the crate that declares them.
//!
//! # Example
//!
//! ```
//! use fixture_resolver::{EmbeddedBundle, FixtureResource, Origin, Resolver};
//!
//! static BUNDLE: &[(&str, &str)] = &[("Scripts/identity.plutus", "(lambda (datum) datum)")];
//!
//! const IDENTITY: FixtureResource = FixtureResource::new(
//!     "identity",
//!     "Scripts/identity.plutus",
//!     env!("CARGO_MANIFEST_DIR"),
//!     "fixtures/identity.plutus",
//! );
//!
//! let resolver = Resolver::new(EmbeddedBundle::new(BUNDLE));
//! let text = resolver.resolve(Origin::Embedded, &IDENTITY).unwrap();
//! assert_eq!(&*text, "(lambda (datum) datum)");
//! ```

pub use error::{Error, Location, Result};
pub use origin::{BROWSER_RUNTIME, Origin};
pub use resolver::{Resolver, resolve};
pub use resource::{FixtureResource, FixtureText};
pub use source::{EmbeddedBundle, FsSource, ResourceSource};

mod error;
mod origin;
mod resolver;
mod resource;
mod source;
