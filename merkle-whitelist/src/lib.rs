//! Merkle whitelist over 32-byte identifiers using Keccak-256.
//!
//! Leaves are `keccak256(identifier)`, sorted in ascending byte order. Each
//! parent is the hash of its two children after sorting them relative to each
//! other:
//!
//! `parent = keccak256(min(a, b) || max(a, b))`
//!
//! An unpaired digest at the end of an odd-length layer is carried into the
//! next layer unchanged. Because every pair is sorted before hashing, proofs
//! are positionless: a verifier only needs the sibling digest at each level,
//! never its side.
//!
//! The tree is never materialized. Root and proof queries rebuild their
//! layers from the immutable sorted leaf set, so a [`MerkleWhitelist`] can be
//! shared across threads freely.

#![warn(missing_docs)]

mod error;
pub(crate) mod hash;
mod identifier;
pub(crate) mod layer;
mod proof;
mod whitelist;


pub use error::{Result, WhitelistError};
pub use hash::{Digest, NULL_WHITELIST, keccak256, leaf_hash, parent_hash, root_from_slice};
pub use identifier::{IDENTIFIER_LEN, Identifier};
pub use layer::{collapse_to_root, next_layer};
pub use proof::{WhitelistProof, compute_root, is_whitelisted};
pub use whitelist::MerkleWhitelist;
