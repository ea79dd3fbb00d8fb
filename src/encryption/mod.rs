//! Field obfuscation.
//!
//! Résumé fields may be stored obfuscated so the source data is not
//! readable as plain text. [`ObfsCipher`] is a symmetric XOR stream keyed by
//! a passphrase: applying it twice with the same passphrase restores the
//! input. It is not encryption in any cryptographic sense.

use crate::error::Result;
use sha2::{Digest, Sha512};

/// Number of extra SHA-512 rounds applied to the passphrase digest.
const KEY_STRETCH_ROUNDS: usize = 10_000;

fn sha512(data: &[u8]) -> [u8; 64] {
    let mut out = [0u8; 64];
    out.copy_from_slice(&Sha512::digest(data));
    out
}

/// Passphrase-keyed XOR stream.
///
/// Every call to [`pad`](Self::pad) starts from the same initial state, so
/// each field is processed independently of the others.
#[derive(Clone)]
pub struct ObfsCipher {
    state: [u8; 64],
}

impl ObfsCipher {
    /// Derive the initial state from a passphrase.
    pub fn new(passphrase: &str) -> Self {
        let mut state = sha512(passphrase.as_bytes());
        for _ in 0..KEY_STRETCH_ROUNDS {
            state = sha512(&state);
        }
        Self { state }
    }

    /// Obfuscate or restore bytes in place.
    ///
    /// Each byte is XORed with the low seven bits of the first state byte,
    /// then the state is rehashed.
    pub fn pad(&self, data: &mut [u8]) {
        let mut state = self.state;
        for byte in data {
            *byte ^= state[0] & 0x7F;
            state = sha512(&state);
        }
    }

    /// Obfuscate or restore a string in place.
    ///
    /// Fails if the result is not valid UTF-8; `s` is left empty in that
    /// case.
    pub fn pad_str(&self, s: &mut String) -> Result<()> {
        let mut bytes = std::mem::take(s).into_bytes();
        self.pad(&mut bytes);
        *s = String::from_utf8(bytes)?;
        Ok(())
    }
}

impl std::fmt::Debug for ObfsCipher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObfsCipher").finish_non_exhaustive()
    }
}
