use std::{fmt, str::FromStr};

use crate::{Digest, Result, WhitelistError, hash::leaf_hash};

/// Byte length of an [`Identifier`].
pub const IDENTIFIER_LEN: usize = 32;

/// A whitelist member: an opaque 32-byte value, typically a public key.
///
/// Ordering is unsigned lexicographic over the raw bytes. The text form is
/// 64 lowercase hex characters.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Identifier([u8; IDENTIFIER_LEN]);

impl Identifier {
    /// Wrap raw bytes.
    pub const fn new(bytes: [u8; IDENTIFIER_LEN]) -> Self {
        Identifier(bytes)
    }

    /// Borrow the raw bytes.
    pub fn as_bytes(&self) -> &[u8; IDENTIFIER_LEN] {
        &self.0
    }

    /// Copy out the raw bytes.
    pub fn to_bytes(self) -> [u8; IDENTIFIER_LEN] {
        self.0
    }

    /// The leaf digest for this identifier.
    pub fn leaf(&self) -> Digest {
        leaf_hash(self)
    }
}

impl From<[u8; IDENTIFIER_LEN]> for Identifier {
    fn from(bytes: [u8; IDENTIFIER_LEN]) -> Self {
        Identifier(bytes)
    }
}

impl From<Identifier> for [u8; IDENTIFIER_LEN] {
    fn from(identifier: Identifier) -> Self {
        identifier.0
    }
}

impl TryFrom<&[u8]> for Identifier {
    type Error = WhitelistError;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        let bytes: [u8; IDENTIFIER_LEN] = bytes
            .try_into()
            .map_err(|_| WhitelistError::InvalidIdentifierLength { got: bytes.len() })?;
        Ok(Identifier(bytes))
    }
}

impl AsRef<[u8]> for Identifier {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl FromStr for Identifier {
    type Err = WhitelistError;

    fn from_str(s: &str) -> Result<Self> {
        let bytes = hex::decode(s).map_err(|e| WhitelistError::InvalidHex(e.to_string()))?;
        Identifier::try_from(bytes.as_slice())
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

impl fmt::Debug for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Identifier({})", hex::encode(self.0))
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn test_hex_roundtrip() {
        let id = Identifier::new([0xab; 32]);
        let text = id.to_string();
        assert_eq!(text.len(), 64);
        assert_eq!(text, "ab".repeat(32));
        assert_eq!(text.parse::<Identifier>(), Ok(id));
    }

    #[test]
    fn test_parse_wrong_length() {
        assert_matches!(
            "abcd".parse::<Identifier>(),
            Err(WhitelistError::InvalidIdentifierLength { got: 2 })
        );
    }

    #[test]
    fn test_parse_bad_hex() {
        assert_matches!(
            "zz".repeat(32).parse::<Identifier>(),
            Err(WhitelistError::InvalidHex(_))
        );
    }

    #[test]
    fn test_try_from_slice() {
        let bytes = [7u8; 33];
        assert_matches!(
            Identifier::try_from(&bytes[..]),
            Err(WhitelistError::InvalidIdentifierLength { got: 33 })
        );
        let id = Identifier::try_from(&bytes[..32]).expect("32 bytes should convert");
        assert_eq!(id.to_bytes(), [7u8; 32]);
    }

    #[test]
    fn test_ordering_is_bytewise() {
        let mut low = [0u8; 32];
        low[31] = 0xff;
        let mut high = [0u8; 32];
        high[0] = 0x01;
        assert!(Identifier::new(low) < Identifier::new(high));
    }

    #[test]
    fn test_debug_format() {
        let id = Identifier::new([0u8; 32]);
        assert_eq!(format!("{:?}", id), format!("Identifier({})", "00".repeat(32)));
    }
}
