use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// Where a resolver looked for a resource.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Location {
    Bundle(String),
    Path(PathBuf),
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bundle(logical) => write!(f, "bundle path '{logical}'"),
            Self::Path(path) => write!(f, "'{}'", path.display()),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("resource '{name}' not found at {location}")]
    ResourceNotFound { name: String, location: Location },

    #[error("failed to read resource '{name}' at '{}': {source}", .path.display())]
    Io {
        name: String,
        path: PathBuf,
        source: io::Error,
    },

    #[error("resource '{name}' at '{}' is not valid UTF-8", .path.display())]
    InvalidUtf8 { name: String, path: PathBuf },
}

pub type Result<T> = std::result::Result<T, Error>;

pub(crate) fn from_io(name: &str, path: &Path, err: io::Error) -> Error {
    match err.kind() {
        io::ErrorKind::NotFound => Error::ResourceNotFound {
            name: name.to_owned(),
            location: Location::Path(path.to_path_buf()),
        },
        io::ErrorKind::InvalidData => Error::InvalidUtf8 {
            name: name.to_owned(),
            path: path.to_path_buf(),
        },
        _ => Error::Io {
            name: name.to_owned(),
            path: path.to_path_buf(),
            source: err,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_resource_not_found() {
        let err = from_io(
            "demo",
            Path::new("/missing/demo.plutus"),
            io::Error::from(io::ErrorKind::NotFound),
        );
        assert!(matches!(
            err,
            Error::ResourceNotFound { ref location, .. }
                if *location == Location::Path(PathBuf::from("/missing/demo.plutus"))
        ));
    }

    #[test]
    fn invalid_data_maps_to_invalid_utf8() {
        let err = from_io(
            "demo",
            Path::new("demo.plutus"),
            io::Error::from(io::ErrorKind::InvalidData),
        );
        assert!(matches!(err, Error::InvalidUtf8 { .. }));
    }

    #[test]
    fn other_kinds_keep_source() {
        let err = from_io(
            "demo",
            Path::new("demo.plutus"),
            io::Error::from(io::ErrorKind::PermissionDenied),
        );
        match err {
            Error::Io { source, .. } => assert_eq!(source.kind(), io::ErrorKind::PermissionDenied),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn messages_name_the_location() {
        let err = Error::ResourceNotFound {
            name: "always-mints-v2".to_owned(),
            location: Location::Bundle("Scripts/always-mints-v2.plutus".to_owned()),
        };
        assert_eq!(
            err.to_string(),
            "resource 'always-mints-v2' not found at bundle path 'Scripts/always-mints-v2.plutus'"
        );
    }
}
