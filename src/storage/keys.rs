//! Placeholder wallet identifiers.
//!
//! NOT CRYPTOGRAPHIC. Addresses and keys are random base-36 strings that only
//! look like wallet material; nothing here derives, encrypts or signs.

use rand::Rng;

/// Address handed out when a wallet is provisioned on first read
pub const DEMO_ADDRESS: &str = "HTRxk2T39XFd7LJ51mDECJWbMDvqQu98D9";

const ADDRESS_PREFIX: &str = "HTR";
const KEY_SUFFIX_LEN: usize = 13;
const IMPORT_SEED_CHARS: usize = 8;
const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Random lowercase base-36 string of `len` characters
pub fn random_base36(len: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..len)
        .map(|_| BASE36[rng.gen_range(0..BASE36.len())] as char)
        .collect()
}

pub struct PlaceholderKeys {
    pub address: String,
    pub public_key: String,
    pub encrypted_private_key: String,
}

impl PlaceholderKeys {
    /// Fresh random address and key placeholders
    pub fn generate() -> Self {
        Self::with_address(format!("{}{}", ADDRESS_PREFIX, random_base36(KEY_SUFFIX_LEN)))
    }

    /// Address taken from the first characters of the seed phrase text
    pub fn from_seed_phrase(seed_phrase: &str) -> Self {
        let seed: String = seed_phrase
            .chars()
            .take(IMPORT_SEED_CHARS)
            .filter(|c| !c.is_whitespace())
            .collect();

        Self::with_address(format!("{}{}", ADDRESS_PREFIX, seed))
    }

    /// Random key placeholders around a fixed address
    pub fn with_address(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            public_key: format!("pub_{}", random_base36(KEY_SUFFIX_LEN)),
            encrypted_private_key: format!("enc_{}", random_base36(KEY_SUFFIX_LEN)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_shape() {
        let keys = PlaceholderKeys::generate();
        assert!(keys.address.starts_with("HTR"));
        assert_eq!(keys.address.len(), 3 + 13);
        assert!(keys.address[3..]
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
        assert!(keys.public_key.starts_with("pub_"));
        assert!(keys.encrypted_private_key.starts_with("enc_"));
    }

    #[test]
    fn test_seed_phrase_address() {
        let keys = PlaceholderKeys::from_seed_phrase("abandon ability able about");
        assert_eq!(keys.address, "HTRabandon");

        let keys = PlaceholderKeys::from_seed_phrase("a b c d e f");
        assert_eq!(keys.address, "HTRabcd");

        let keys = PlaceholderKeys::from_seed_phrase("");
        assert_eq!(keys.address, "HTR");
    }

    #[test]
    fn test_seed_phrase_address_multibyte() {
        let keys = PlaceholderKeys::from_seed_phrase("ñandú ñandú");
        assert_eq!(keys.address, "HTRñandúña");
    }
}
