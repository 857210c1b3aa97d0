//! Error types for path artifacts.

use std::fmt;
use std::io;

/// Errors that can occur while encoding, decoding or storing an artifact.
#[derive(Debug)]
pub enum ArtifactError {
    /// An I/O error occurred during read or write.
    Io(io::Error),
    /// The data does not start with the expected `b"MZWP"` magic bytes.
    InvalidMagic,
    /// The format version is not supported by this build.
    UnsupportedVersion {
        /// The version found in the data.
        found: u8,
    },
    /// The data is truncated or internally inconsistent.
    Malformed {
        /// Human-readable description of what went wrong.
        detail: String,
    },
    /// An artifact must hold at least one point.
    EmptyPath,
    /// A point has a NaN or infinite coordinate.
    NonFinitePoint {
        /// Index of the offending point.
        index: usize,
    },
}

impl fmt::Display for ArtifactError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::InvalidMagic => write!(f, "invalid magic bytes (expected b\"MZWP\")"),
            Self::UnsupportedVersion { found } => {
                write!(f, "unsupported format version {found}")
            }
            Self::Malformed { detail } => write!(f, "malformed path artifact: {detail}"),
            Self::EmptyPath => write!(f, "path artifact has no points"),
            Self::NonFinitePoint { index } => {
                write!(f, "point {index} has a non-finite coordinate")
            }
        }
    }
}

impl std::error::Error for ArtifactError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for ArtifactError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
