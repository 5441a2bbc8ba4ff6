//! Persisted store format
//!
//! ```text
//! ┌──────────┬─────────────┬──────────────────┬──────────────────────────┐
//! │ "CCOV"   │ version u16 │ SHA-256(payload) │ payload (bincode state)  │
//! │ 4 bytes  │ LE, 2 bytes │ 32 bytes         │ rest of file             │
//! └──────────┴─────────────┴──────────────────┴──────────────────────────┘
//! ```
//!
//! The format is private to this crate; blobs are not portable across
//! format versions.

use crate::{CoverageError, CoverageResult, CoverageState};
use sha2::{Digest, Sha256};
use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// File magic
pub const MAGIC: [u8; 4] = *b"CCOV";

/// Current format version
pub const FORMAT_VERSION: u16 = 1;

const DIGEST_LEN: usize = 32;
const HEADER_LEN: usize = MAGIC.len() + 2 + DIGEST_LEN;

/// Encode a state into a self-describing blob
pub fn encode(state: &CoverageState) -> CoverageResult<Vec<u8>> {
    let payload = bincode::serialize(state).map_err(|e| CoverageError::Encode {
        message: e.to_string(),
    })?;

    let mut blob = Vec::with_capacity(HEADER_LEN + payload.len());
    blob.extend_from_slice(&MAGIC);
    blob.extend_from_slice(&FORMAT_VERSION.to_le_bytes());
    blob.extend_from_slice(&Sha256::digest(&payload));
    blob.extend_from_slice(&payload);
    Ok(blob)
}

/// Decode and validate a blob
pub fn decode(blob: &[u8]) -> CoverageResult<CoverageState> {
    if blob.len() < HEADER_LEN {
        if !blob.starts_with(&MAGIC[..blob.len().min(MAGIC.len())]) {
            return Err(CoverageError::BadMagic);
        }
        return Err(CoverageError::Truncated { len: blob.len() });
    }

    let (magic, rest) = blob.split_at(MAGIC.len());
    if magic != MAGIC {
        return Err(CoverageError::BadMagic);
    }

    let (version, rest) = rest.split_at(2);
    let version = u16::from_le_bytes([version[0], version[1]]);
    if version != FORMAT_VERSION {
        return Err(CoverageError::UnsupportedVersion {
            found: version,
            expected: FORMAT_VERSION,
        });
    }

    let (digest, payload) = rest.split_at(DIGEST_LEN);
    if Sha256::digest(payload).as_slice() != digest {
        return Err(CoverageError::ChecksumMismatch);
    }

    let state: CoverageState =
        bincode::deserialize(payload).map_err(|e| CoverageError::Decode {
            message: e.to_string(),
        })?;
    state.check_invariants()?;
    Ok(state)
}

/// Read a state from `path`
pub fn read_state(path: &Path) -> CoverageResult<CoverageState> {
    let blob = fs::read(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => CoverageError::NotFound {
            path: path.to_path_buf(),
        },
        _ => CoverageError::Io(e),
    })?;
    decode(&blob)
}

/// Write a state to `path`, replacing any previous file
///
/// The blob is written to a temporary file next to `path` and renamed over
/// it, so readers never observe a half-written store.
pub fn write_state(path: &Path, state: &CoverageState) -> CoverageResult<()> {
    let blob = encode(state)?;

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)?;

    let mut temp = tempfile::NamedTempFile::new_in(dir)?;
    temp.write_all(&blob)?;
    temp.as_file().sync_all()?;
    temp.persist(path).map_err(|e| CoverageError::Io(e.error))?;
    Ok(())
}
