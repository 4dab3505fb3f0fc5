use thiserror::Error;

/// Alias for `core::result::Result<T, WhitelistError>`.
pub type Result<T> = core::result::Result<T, WhitelistError>;

/// Errors from Merkle whitelist operations.
///
/// All of these are input errors raised at the call that detects them. A
/// mismatched proof is not an error: verification simply returns `false`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WhitelistError {
    /// A flat identifier buffer whose length is not a multiple of 32.
    #[error("invalid buffer: length {len} is not a multiple of 32")]
    InvalidBuffer {
        /// Length of the rejected buffer.
        len: usize,
    },
    /// A byte slice that cannot be an identifier or root.
    #[error("invalid identifier length: expected 32 bytes, got {got}")]
    InvalidIdentifierLength {
        /// Length of the rejected slice.
        got: usize,
    },
    /// Identifier text that is not valid hex.
    #[error("invalid hex: {0}")]
    InvalidHex(String),
    /// Two identifiers produced the same leaf digest.
    #[error("duplicate leaf {}", hex::encode(.0))]
    DuplicateLeaf([u8; 32]),
    /// Root or proof requested from a whitelist with no leaves.
    #[error("merkle tree has no leaves")]
    EmptyTree,
    /// A digest was not found where proof derivation expected it.
    #[error("digest {} not found in layer {layer}", hex::encode(.digest))]
    MembershipNotFound {
        /// The digest being searched for.
        digest: [u8; 32],
        /// Depth of the layer that was searched (0 = leaves).
        layer: usize,
    },
    /// A proof that could not be encoded or decoded.
    #[error("invalid proof: {0}")]
    InvalidProof(String),
}
