//! Keccak-256 hashing for leaves and sorted-pair parents.
//!
//! The hash function and the `min || max` concatenation order must match the
//! on-chain verifier byte for byte.

use tiny_keccak::{Hasher, Keccak};

use crate::{Identifier, Result, WhitelistError};

/// A 32-byte Keccak-256 digest: a leaf, an inner node, a sibling, or a root.
pub type Digest = [u8; 32];

/// Root value meaning "no whitelist restriction".
///
/// No real tree produces it; callers store it in place of a root to disable
/// the membership check entirely.
pub const NULL_WHITELIST: Digest = [0u8; 32];

/// Keccak-256 (original padding, not SHA3-256) of `data`.
pub fn keccak256(data: &[u8]) -> Digest {
    let mut hasher = Keccak::v256();
    hasher.update(data);
    let mut out = [0u8; 32];
    hasher.finalize(&mut out);
    out
}

/// Leaf digest of an identifier: `keccak256(identifier)`.
pub fn leaf_hash(identifier: &Identifier) -> Digest {
    keccak256(identifier.as_bytes())
}

/// Parent of two digests: `keccak256(min(a, b) || max(a, b))`.
///
/// Symmetric in its arguments.
pub fn parent_hash(a: &Digest, b: &Digest) -> Digest {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    let mut hasher = Keccak::v256();
    hasher.update(lo);
    hasher.update(hi);
    let mut out = [0u8; 32];
    hasher.finalize(&mut out);
    out
}

/// Accept a caller-supplied root only if it is exactly 32 bytes long.
pub fn root_from_slice(bytes: &[u8]) -> Result<Digest> {
    bytes
        .try_into()
        .map_err(|_| WhitelistError::InvalidIdentifierLength { got: bytes.len() })
}
