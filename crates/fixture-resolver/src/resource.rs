use std::fmt;
use std::ops::Deref;
use std::path::{Component, Path, PathBuf};

use crate::Origin;

/// Static description of a text fixture and both places it can live.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixtureResource {
    name: &'static str,
    bundle_path: &'static str,
    base_dir: &'static str,
    relative_path: &'static str,
}

impl FixtureResource {
    /// * `name` - logical fixture name
    /// * `bundle_path` - key inside an [`EmbeddedBundle`](crate::EmbeddedBundle)
    /// * `base_dir` - directory of the declaring crate, usually `env!("CARGO_MANIFEST_DIR")`
    /// * `relative_path` - offset from `base_dir` to the file on disk
    pub const fn new(
        name: &'static str,
        bundle_path: &'static str,
        base_dir: &'static str,
        relative_path: &'static str,
    ) -> Self {
        Self {
            name,
            bundle_path,
            base_dir,
            relative_path,
        }
    }

    pub const fn name(&self) -> &'static str { self.name }

    pub const fn bundle_path(&self) -> &'static str { self.bundle_path }

    pub const fn relative_path(&self) -> &'static str { self.relative_path }

    pub fn base_dir(&self) -> &Path { Path::new(self.base_dir) }

    /// Absolute on-disk location using the declared base directory.
    pub fn fs_path(&self) -> PathBuf { self.fs_path_from(self.base_dir()) }

    /// On-disk location relative to another base directory.
    pub fn fs_path_from(&self, base_dir: &Path) -> PathBuf {
        normalize(&base_dir.join(self.relative_path))
    }
}

/// Resolved fixture content. Opaque: never parsed or rewritten.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FixtureText {
    text: String,
    origin: Origin,
}

impl FixtureText {
    pub fn new(text: String, origin: Origin) -> Self { Self { text, origin } }

    pub fn as_str(&self) -> &str { &self.text }

    pub fn origin(&self) -> Origin { self.origin }

    pub fn into_string(self) -> String { self.text }
}

impl Deref for FixtureText {
    type Target = str;

    fn deref(&self) -> &str { &self.text }
}

impl AsRef<str> for FixtureText {
    fn as_ref(&self) -> &str { &self.text }
}

impl fmt::Display for FixtureText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(&self.text) }
}

/// Lexically folds `.` and `..`, without touching the filesystem.
pub(crate) fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                // `/..` is `/`
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            other => out.push(other),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEMO: FixtureResource = FixtureResource::new(
        "demo",
        "Scripts/demo.plutus",
        "/work/crates/demo",
        "../../fixtures/scripts/demo.plutus",
    );

    #[test]
    fn test_fs_path_folds_parent_components() {
        assert_eq!(
            DEMO.fs_path(),
            PathBuf::from("/work/fixtures/scripts/demo.plutus")
        );
    }

    #[test]
    fn test_fs_path_from_other_base() {
        assert_eq!(
            DEMO.fs_path_from(Path::new("/elsewhere/a/b")),
            PathBuf::from("/elsewhere/fixtures/scripts/demo.plutus")
        );
    }

    #[test]
    fn test_normalize_keeps_leading_parents_of_relative_paths() {
        assert_eq!(
            normalize(Path::new("../a/./b/../c")),
            PathBuf::from("../a/c")
        );
        assert_eq!(normalize(Path::new("a/../../b")), PathBuf::from("../b"));
    }

    #[cfg(unix)]
    #[test]
    fn test_normalize_stops_at_root() {
        assert_eq!(normalize(Path::new("/../../x")), PathBuf::from("/x"));
    }

    #[test]
    fn test_fixture_text_is_opaque() {
        let text = FixtureText::new("  (lambda (datum) datum)\n".to_owned(), Origin::Embedded);
        assert_eq!(&*text, "  (lambda (datum) datum)\n");
        assert_eq!(text.origin(), Origin::Embedded);
        assert_eq!(text.to_string(), text.as_str());
        assert_eq!(text.into_string(), "  (lambda (datum) datum)\n");
    }
}
