//! ChaCha20-based CSPRNG.
//!
//! A cryptographically secure pseudorandom number generator built on top of
//! the ChaCha20 block function:
//! - relies on the operating system for initial entropy
//! - uses ChaCha20 as a deterministic random bit generator (DRBG)
//! - avoids heap allocations
//! - provides forward secrecy via periodic rekeying
//!
//! Suitable for private scalar generation, per-signature nonces, and
//! encrypted-key-image blinding factors.

use crate::error::Error;
use crate::os::sys_random;
use crate::rng::block::chacha20_block;

/// Cryptographically secure pseudorandom number generator.
///
/// Initialized from OS-provided entropy, then expands randomness using the
/// ChaCha20 block function. After every fill, the generator rekeys itself:
/// compromise of the current state does not reveal past output.
pub struct Csprng {
    key: [u8; 32],
    nonce: [u8; 12],
    counter: u32,
}

impl Csprng {
    /// Creates a new CSPRNG seeded from the operating system.
    ///
    /// Equivalent to [`Csprng::from_os`], except that an OS entropy failure
    /// here is unrecoverable and panics rather than returning a `Result` —
    /// there is no caller to hand the failure back to in a `Default`/`new`
    /// constructor. Use [`Csprng::from_os`] directly to handle the failure.
    pub fn new() -> Self {
        Self::from_os().expect("operating system entropy source failed")
    }

    /// Creates a new CSPRNG using entropy provided by the operating system.
    pub fn from_os() -> Result<Self, Error> {
        let mut seed = [0u8; 32];
        sys_random(&mut seed)?;

        Ok(Self::from_seed(seed))
    }

    /// Creates a new CSPRNG from a caller-provided seed.
    ///
    /// The seed must be uniformly random and unpredictable. The seed buffer
    /// is wiped after being consumed.
    pub fn from_seed(mut seed: [u8; 32]) -> Self {
        let key = seed;
        seed.fill(0);

        Self {
            key,
            nonce: [0u8; 12],
            counter: 0,
        }
    }

    /// Fills the provided buffer with cryptographically secure random bytes.
    ///
    /// Randomness is generated in 64-byte ChaCha20 blocks; once the buffer
    /// is filled, the generator rekeys itself from its own output, not from
    /// the operating system, so this call is presently infallible once the
    /// generator has been constructed. It returns a `Result` rather than
    /// `()` to match [`Csprng::from_os`] and to leave room for a future
    /// rekey-from-OS-entropy policy without breaking callers.
    pub fn try_fill_bytes(&mut self, out: &mut [u8]) -> Result<(), Error> {
        let mut offset = 0;

        while offset < out.len() {
            let block = chacha20_block(&self.key, self.counter, &self.nonce);
            self.counter = self.counter.wrapping_add(1);

            let to_copy = 64.min(out.len() - offset);
            out[offset..offset + to_copy].copy_from_slice(&block[..to_copy]);

            offset += to_copy;
        }

        self.rekey();
        Ok(())
    }

    /// Rekeys the generator to provide forward secrecy.
    ///
    /// Derives a fresh 32-byte key from one more ChaCha20 block.
    fn rekey(&mut self) {
        let block = chacha20_block(&self.key, self.counter, &self.nonce);
        self.counter = self.counter.wrapping_add(1);
        self.key.copy_from_slice(&block[..32]);
    }
}

impl Default for Csprng {
    fn default() -> Self {
        Self::new()
    }
}
