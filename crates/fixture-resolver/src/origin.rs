//! Selection between the embedded and filesystem strategies.

use std::env;
use std::ffi::OsStr;
use std::fmt;

/// Process-wide flag marking a sandboxed, bundle-only runtime.
pub const BROWSER_RUNTIME: &str = "BROWSER_RUNTIME";

const FALSY: [&str; 4] = ["0", "false", "no", "off"];

/// Which strategy a resolver uses. Decided once by the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Origin {
    /// Look the resource up in the compiled-in bundle.
    Embedded,
    /// Read the resource from disk relative to its declaring crate.
    Filesystem,
}

impl Default for Origin {
    fn default() -> Self {
        if cfg!(target_arch = "wasm32") {
            Self::Embedded
        } else {
            Self::Filesystem
        }
    }
}

impl Origin {
    /// Reads [`BROWSER_RUNTIME`] from the process environment.
    ///
    /// Never fails: an unset flag means [`Origin::Filesystem`].
    pub fn from_env() -> Self {
        let origin = Self::from_flag(env::var_os(BROWSER_RUNTIME).as_deref());
        tracing::debug!(flag = BROWSER_RUNTIME, %origin, "selected fixture origin");
        origin
    }

    /// Maps a raw flag value to an origin.
    ///
    /// Unset, empty, `0`, `false`, `no`, `off` (any case) and non-UTF-8 values
    /// are false; everything else is true.
    pub fn from_flag(value: Option<&OsStr>) -> Self {
        if flag_enabled(value) {
            Self::Embedded
        } else {
            Self::Filesystem
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Embedded => "embedded",
            Self::Filesystem => "filesystem",
        }
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn flag_enabled(value: Option<&OsStr>) -> bool {
    let Some(value) = value.and_then(OsStr::to_str) else {
        return false;
    };
    let value = value.trim();
    !value.is_empty() && !FALSY.iter().any(|f| value.eq_ignore_ascii_case(f))
}
