use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use sha2::{Digest, Sha256};

/// Build the generator RNG for a user-supplied seed.
///
/// An empty seed draws fresh entropy. Any other string is hashed into the
/// ChaCha key, so equal seeds always produce equal data.
pub fn rng_from_seed(seed: &str) -> ChaCha8Rng {
    if seed.is_empty() {
        return ChaCha8Rng::from_rng(&mut rand::rng());
    }

    let digest = Sha256::digest(seed.as_bytes());
    let mut key = [0_u8; 32];
    key.copy_from_slice(&digest);
    ChaCha8Rng::from_seed(key)
}
