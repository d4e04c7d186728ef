//! Canonical serialization for deterministic hashing.
//!
//! Used to fingerprint parse results so two parses of the same input can be
//! compared without walking both graphs.
//!
//! ## Determinism Guarantees
//!
//! - Stable field order: Struct fields serialize in declaration order
//! - Stable Vec order: Vectors serialize in index order
//! - No HashMap allowed: Callers sort before hashing

use serde::Serialize;
use xxhash_rust::xxh64::xxh64;

use crate::types::GraphProcessingError;

/// Serialize a value to canonical JSON bytes for hashing.
pub fn to_canonical_bytes<T: Serialize>(value: &T) -> Result<Vec<u8>, GraphProcessingError> {
    serde_json::to_vec(value)
        .map_err(|e| GraphProcessingError::unspecified(format!("Canonical serialization failed: {e}")))
}

/// Compute canonical hash of a serializable value.
pub fn canonical_hash<T: Serialize>(value: &T) -> Result<u64, GraphProcessingError> {
    let bytes = to_canonical_bytes(value)?;
    Ok(xxh64(&bytes, 0))
}

/// Compute canonical hash and return as hex string.
pub fn canonical_hash_hex<T: Serialize>(value: &T) -> Result<String, GraphProcessingError> {
    Ok(format!("{:016x}", canonical_hash(value)?))
}
