//! Binary encode/decode for path artifacts.
//!
//! All numbers are little-endian. No compression, no padding.

use std::io::{self, Read, Write};

use mazebench_core::Vec3;

use crate::error::ArtifactError;
use crate::types::PathArtifact;
use crate::{FORMAT_VERSION, MAGIC};

// ── Primitive writers ───────────────────────────────────────────

/// Write a single byte.
pub fn write_u8(w: &mut dyn Write, v: u8) -> Result<(), ArtifactError> {
    w.write_all(&[v])?;
    Ok(())
}

/// Write a little-endian u32.
pub fn write_u32_le(w: &mut dyn Write, v: u32) -> Result<(), ArtifactError> {
    w.write_all(&v.to_le_bytes())?;
    Ok(())
}

/// Write a little-endian f64.
pub fn write_f64_le(w: &mut dyn Write, v: f64) -> Result<(), ArtifactError> {
    w.write_all(&v.to_le_bytes())?;
    Ok(())
}

// ── Primitive readers ───────────────────────────────────────────

/// Read a single byte.
pub fn read_u8(r: &mut dyn Read) -> Result<u8, ArtifactError> {
    let mut buf = [0u8; 1];
    read_exact(r, &mut buf)?;
    Ok(buf[0])
}

/// Read a little-endian u32.
pub fn read_u32_le(r: &mut dyn Read) -> Result<u32, ArtifactError> {
    let mut buf = [0u8; 4];
    read_exact(r, &mut buf)?;
    Ok(u32::from_le_bytes(buf))
}

/// Read a little-endian f64.
pub fn read_f64_le(r: &mut dyn Read) -> Result<f64, ArtifactError> {
    let mut buf = [0u8; 8];
    read_exact(r, &mut buf)?;
    Ok(f64::from_le_bytes(buf))
}

/// `read_exact` with end-of-data reported as truncation.
fn read_exact(r: &mut dyn Read, buf: &mut [u8]) -> Result<(), ArtifactError> {
    r.read_exact(buf).map_err(|e| match e.kind() {
        io::ErrorKind::UnexpectedEof => ArtifactError::Malformed {
            detail: "unexpected end of data".into(),
        },
        _ => ArtifactError::Io(e),
    })
}

// ── Path encode/decode ──────────────────────────────────────────

/// Encode an artifact.
pub fn encode_path(w: &mut dyn Write, artifact: &PathArtifact) -> Result<(), ArtifactError> {
    let count = u32::try_from(artifact.len()).map_err(|_| ArtifactError::Malformed {
        detail: format!("{} points exceed the u32 count field", artifact.len()),
    })?;
    w.write_all(&MAGIC)?;
    write_u8(w, FORMAT_VERSION)?;
    write_f64_le(w, artifact.rest_z())?;
    write_u32_le(w, count)?;
    for p in artifact.points() {
        write_f64_le(w, p.x)?;
        write_f64_le(w, p.y)?;
        write_f64_le(w, p.z)?;
    }
    Ok(())
}

/// Decode and validate an artifact.
pub fn decode_path(r: &mut dyn Read) -> Result<PathArtifact, ArtifactError> {
    let mut magic = [0u8; 4];
    read_exact(r, &mut magic)?;
    if magic != MAGIC {
        return Err(ArtifactError::InvalidMagic);
    }
    let version = read_u8(r)?;
    if version != FORMAT_VERSION {
        return Err(ArtifactError::UnsupportedVersion { found: version });
    }

    let rest_z = read_f64_le(r)?;
    let count = read_u32_le(r)? as usize;
    if count == 0 {
        return Err(ArtifactError::EmptyPath);
    }

    // `count` is untrusted; cap the preallocation.
    let mut points = Vec::with_capacity(count.min(1 << 16));
    for index in 0..count {
        let p = Vec3::new(read_f64_le(r)?, read_f64_le(r)?, read_f64_le(r)?);
        if p.z.to_bits() != rest_z.to_bits() {
            return Err(ArtifactError::Malformed {
                detail: format!("point {index} has z={} but rest_z={rest_z}", p.z),
            });
        }
        points.push(p);
    }
    PathArtifact::new(points, rest_z)
}
