//! Precomputed waypoint path artifacts.
//!
//! The environment build solves the maze once and stores the resulting
//! waypoints so that run-time consumers can load them without re-parsing
//! or re-solving. All I/O uses a small custom binary codec.
//!
//! # Format
//!
//! ```text
//! [MAGIC "MZWP"] [VERSION u8] [rest_z f64] [count u32]
//! [x f64] [y f64] [z f64]  x count
//! ```
//!
//! All numbers are little-endian. Every point's `z` equals `rest_z`.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod codec;
pub mod error;
pub mod file;
pub mod types;

pub use codec::{decode_path, encode_path};
pub use error::ArtifactError;
pub use file::{load_path, save_path};
pub use types::PathArtifact;

/// Magic bytes at the start of every path artifact.
pub const MAGIC: [u8; 4] = *b"MZWP";

/// Current binary format version.
pub const FORMAT_VERSION: u8 = 1;
