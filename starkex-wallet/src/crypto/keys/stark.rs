//! Stark curve key derivation

use std::fmt;

use num_bigint::BigUint;
use num_traits::Zero;
use starknet_crypto::{get_public_key, Felt};

use crate::error::{Error, Result};

/// Order of the Stark curve generator
pub const CURVE_ORDER: [u8; 32] = [
    0x08, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x10, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xb7, 0x81, 0x12, 0x6d, 0xca, 0xe7, 0xb2, 0x32, 0x1e, 0x66, 0xa2, 0x41, 0xad, 0xc6, 0x4d, 0x2f,
];

/// A private key on the Stark curve
#[derive(Clone, PartialEq, Eq)]
pub struct PrivateKey {
    /// The secret scalar
    scalar: Felt,
}

impl PrivateKey {
    /// Parse a private key from a hex string.
    ///
    /// Accepts an optional `0x` prefix and odd-length digit strings of up to
    /// 32 bytes. The value is reduced modulo the Stark curve order and must
    /// not be zero afterwards.
    pub fn from_hex(hex_key: &str) -> Result<Self> {
        let decoded = parse_hex(hex_key)?;
        let reduced = BigUint::from_bytes_be(&decoded) % BigUint::from_bytes_be(&CURVE_ORDER);

        if reduced.is_zero() {
            return Err(Error::KeyDerivation(
                "Private key is zero modulo the curve order".to_string(),
            ));
        }

        // reduced < n < p, so the field element is exact
        let reduced = reduced.to_bytes_be();
        let mut bytes = [0u8; 32];
        bytes[32 - reduced.len()..].copy_from_slice(&reduced);

        Ok(Self {
            scalar: Felt::from_bytes_be(&bytes),
        })
    }

    /// Get the secret scalar
    pub fn scalar(&self) -> &Felt {
        &self.scalar
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PrivateKey(<redacted>)")
    }
}

/// A public key on the Stark curve, identified by its X-coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PublicKey {
    x: Felt,
}

impl PublicKey {
    /// Create a public key from its X-coordinate
    pub fn from_x(x: Felt) -> Self {
        Self { x }
    }

    /// Get the X-coordinate
    pub fn x(&self) -> &Felt {
        &self.x
    }

    /// Lowercase hex of the X-coordinate, without `0x` and without leading zeros
    pub fn to_hex(&self) -> String {
        let encoded = hex::encode(self.x.to_bytes_be());
        let trimmed = encoded.trim_start_matches('0');
        if trimmed.is_empty() {
            "0".to_string()
        } else {
            trimmed.to_string()
        }
    }

    /// Hex of the X-coordinate with a single `0x` prefix
    pub fn to_prefixed_hex(&self) -> String {
        format!("0x{}", self.to_hex())
    }
}

/// A Stark key pair
#[derive(Debug, Clone)]
pub struct KeyPair {
    /// The private key
    private_key: PrivateKey,
    /// The public key
    public_key: PublicKey,
}

impl KeyPair {
    /// Derive the key pair for a private key
    pub fn from_private_key(private_key: PrivateKey) -> Self {
        let public_key = PublicKey::from_x(get_public_key(private_key.scalar()));
        Self {
            private_key,
            public_key,
        }
    }

    /// Get the private key
    pub fn private_key(&self) -> &PrivateKey {
        &self.private_key
    }

    /// Get the public key
    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }
}

/// Derive a key pair from a hex-encoded private key
pub fn derive_key_pair(hex_key: &str) -> Result<KeyPair> {
    let private_key = PrivateKey::from_hex(hex_key)?;
    Ok(KeyPair::from_private_key(private_key))
}

/// Strip an optional `0x` prefix and decode at most 32 bytes
fn parse_hex(input: &str) -> Result<Vec<u8>> {
    let trimmed = input.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);

    if digits.is_empty() {
        return Err(Error::KeyDerivation("Empty private key".to_string()));
    }

    let padded = if digits.len() % 2 == 1 {
        format!("0{}", digits)
    } else {
        digits.to_string()
    };

    let decoded = hex::decode(&padded)
        .map_err(|e| Error::KeyDerivation(format!("Invalid hex private key: {}", e)))?;

    if decoded.len() > 32 {
        return Err(Error::KeyDerivation(format!(
            "Private key too long: {} bytes",
            decoded.len()
        )));
    }

    Ok(decoded)
}

#[cfg(test)]
mod tests {
    use super::*;

    const GENERATOR_X: &str = "1ef15c18599971b7beced415a40f0c7deacfd9b0d1819e03d723d8bc943cfca";
    const FIELD_PRIME: &str = "0800000000000011000000000000000000000000000000000000000000000001";
    const WALLET_KEY: &str = "f3c8a6d2b1e4f7a9c0d3e6f9a2b5c8d1e4f7a0b3c6d9e2f5a8b1c4d7e0f3e7f8";

    fn reduced_hex(hex_key: &str) -> String {
        let value = BigUint::parse_bytes(hex_key.as_bytes(), 16).unwrap();
        (value % BigUint::from_bytes_be(&CURVE_ORDER)).to_str_radix(16)
    }

    #[test]
    fn test_key_one_yields_generator() {
        let key_pair = derive_key_pair("0x1").unwrap();
        assert_eq!(key_pair.public_key().to_hex(), GENERATOR_X);
        assert_eq!(
            key_pair.public_key().to_prefixed_hex(),
            format!("0x{}", GENERATOR_X)
        );
    }

    #[test]
    fn test_prefix_and_padding_are_equivalent() {
        let a = PrivateKey::from_hex("0x1").unwrap();
        let b = PrivateKey::from_hex("01").unwrap();
        let c = PrivateKey::from_hex(" 0X0001 ").unwrap();
        assert_eq!(a, b);
        assert_eq!(a, c);
    }

    #[test]
    fn test_rejects_bad_keys() {
        assert!(PrivateKey::from_hex("").is_err());
        assert!(PrivateKey::from_hex("0x").is_err());
        assert!(PrivateKey::from_hex("0x0").is_err());
        assert!(PrivateKey::from_hex("not-hex").is_err());
        assert!(PrivateKey::from_hex(&"ab".repeat(33)).is_err());
    }

    #[test]
    fn test_full_width_wallet_key_is_reduced() {
        assert_ne!(reduced_hex(WALLET_KEY), WALLET_KEY);

        let key_pair = derive_key_pair(WALLET_KEY).unwrap();
        let expected = derive_key_pair(&reduced_hex(WALLET_KEY)).unwrap();
        assert_eq!(key_pair.public_key(), expected.public_key());
        assert_eq!(
            key_pair.private_key(),
            &PrivateKey::from_hex(&reduced_hex(WALLET_KEY)).unwrap()
        );
    }

    #[test]
    fn test_field_prime_is_reduced_by_curve_order() {
        let key_pair = derive_key_pair(FIELD_PRIME).unwrap();
        let expected = derive_key_pair(&reduced_hex(FIELD_PRIME)).unwrap();
        assert_eq!(key_pair.public_key(), expected.public_key());
    }

    #[test]
    fn test_curve_order_is_rejected() {
        let order = hex::encode(CURVE_ORDER);
        assert!(matches!(
            PrivateKey::from_hex(&order),
            Err(Error::KeyDerivation(_))
        ));
    }

    #[test]
    fn test_curve_order_plus_one_yields_generator() {
        let order_plus_one = BigUint::from_bytes_be(&CURVE_ORDER) + 1u32;
        let key_pair = derive_key_pair(&order_plus_one.to_str_radix(16)).unwrap();
        assert_eq!(key_pair.public_key().to_hex(), GENERATOR_X);
    }

    #[test]
    fn test_debug_redacts_private_key() {
        let key = PrivateKey::from_hex("0xdeadbeef").unwrap();
        let debug = format!("{:?}", key);
        assert!(!debug.contains("deadbeef"));
    }

    #[test]
    fn test_derivation_is_deterministic() {
        let first = derive_key_pair(WALLET_KEY).unwrap();
        let second = derive_key_pair(&format!("0x{}", WALLET_KEY)).unwrap();
        assert_eq!(first.public_key(), second.public_key());
        assert!(!first.public_key().to_hex().starts_with("0x"));
    }
}
