use crate::error::{PwgenError, Result};
use blake2::{Blake2b512, Digest};
use chacha20::ChaCha20;
use chacha20::cipher::{KeyIvInit, StreamCipher};
use rand::RngCore;
use rand::rngs::OsRng;
use zeroize::Zeroizing;

const KEY_LEN: usize = 32;
const BUFFER_LEN: usize = 512;

/// ChaCha20 keystream used as the run's only randomness source.
///
/// Every draw in a run (the wordlist shuffle and each token) pulls from the
/// same stream in order, so a fixed seed reproduces the whole run. Sampling
/// is left to `rand`, which only needs the raw bytes through [`RngCore`].
pub struct Keystream {
    cipher: ChaCha20,
    buffer: Zeroizing<[u8; BUFFER_LEN]>,
    pos: usize,
}

impl Keystream {
    /// Seeded when `seed` is given and non-empty, OS entropy otherwise.
    pub fn new(seed: Option<&str>) -> Result<Self> {
        match seed {
            Some(seed) if !seed.is_empty() => Ok(Self::from_seed(seed)),
            _ => Self::from_entropy(),
        }
    }

    pub fn from_seed(seed: &str) -> Self {
        let mut hasher = Blake2b512::new();
        hasher.update(seed.as_bytes());
        let digest = hasher.finalize();

        let mut key = Zeroizing::new([0u8; KEY_LEN]);
        key.copy_from_slice(&digest[..KEY_LEN]);
        Self::from_key(&key)
    }

    pub fn from_entropy() -> Result<Self> {
        let mut key = Zeroizing::new([0u8; KEY_LEN]);
        OsRng
            .try_fill_bytes(&mut key[..])
            .map_err(|e| PwgenError::entropy(e.to_string()))?;
        Ok(Self::from_key(&key))
    }

    fn from_key(key: &[u8; KEY_LEN]) -> Self {
        let cipher = ChaCha20::new(key.into(), &[0u8; 12].into());
        Self {
            cipher,
            buffer: Zeroizing::new([0u8; BUFFER_LEN]),
            // forces a refill on first use
            pos: BUFFER_LEN,
        }
    }

    fn refill(&mut self) {
        self.buffer.fill(0);
        self.cipher.apply_keystream(&mut self.buffer[..]);
        self.pos = 0;
    }
}

impl RngCore for Keystream {
    fn next_u32(&mut self) -> u32 {
        let mut bytes = [0u8; 4];
        self.fill_bytes(&mut bytes);
        u32::from_le_bytes(bytes)
    }

    fn next_u64(&mut self) -> u64 {
        let mut bytes = [0u8; 8];
        self.fill_bytes(&mut bytes);
        u64::from_le_bytes(bytes)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        let mut written = 0;

        while written < dest.len() {
            if self.pos >= BUFFER_LEN {
                self.refill();
            }

            let take = (dest.len() - written).min(BUFFER_LEN - self.pos);
            dest[written..written + take].copy_from_slice(&self.buffer[self.pos..self.pos + take]);
            self.pos += take;
            written += take;
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> std::result::Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}
