//! File helpers for path artifacts.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use crate::codec::{decode_path, encode_path};
use crate::error::ArtifactError;
use crate::types::PathArtifact;

/// Write `artifact` to `path`, replacing any existing file.
pub fn save_path(path: impl AsRef<Path>, artifact: &PathArtifact) -> Result<(), ArtifactError> {
    let path = path.as_ref();
    let mut w = BufWriter::new(File::create(path)?);
    encode_path(&mut w, artifact)?;
    w.flush()?;
    log::info!("saved {} waypoints to {}", artifact.len(), path.display());
    Ok(())
}

/// Read an artifact from `path`.
pub fn load_path(path: impl AsRef<Path>) -> Result<PathArtifact, ArtifactError> {
    let path = path.as_ref();
    let mut r = BufReader::new(File::open(path)?);
    let artifact = decode_path(&mut r)?;
    log::debug!("loaded {} waypoints from {}", artifact.len(), path.display());
    Ok(artifact)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mazebench_core::Vec3;

    #[test]
    fn save_then_load() {
        let path =
            std::env::temp_dir().join(format!("mazebench_artifact_{}.bin", std::process::id()));
        let points = [Vec3::new(0.5, -0.25, 0.0), Vec3::new(0.5, 0.25, 0.0)];
        let a = PathArtifact::new(points, 0.015).unwrap();
        save_path(&path, &a).unwrap();
        let got = load_path(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(got, a);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_path("/definitely/not/here/maze_path.bin").unwrap_err();
        assert!(matches!(err, ArtifactError::Io(_)));
    }
}
