use rand::Rng;

const NANOID_ALPHABET: &[u8] = b"_-0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const NANOID_LEN: usize = 10;

/// Version 4 UUID built from RNG bytes, so seeded runs repeat.
pub fn uuid_v4<R: Rng>(rng: &mut R) -> String {
    let bytes: [u8; 16] = rng.random();
    uuid::Builder::from_random_bytes(bytes)
        .into_uuid()
        .to_string()
}

pub fn nanoid<R: Rng>(rng: &mut R) -> String {
    (0..NANOID_LEN)
        .map(|_| char::from(NANOID_ALPHABET[rng.random_range(0..NANOID_ALPHABET.len())]))
        .collect()
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    #[test]
    fn uuid_has_version_and_variant_bits() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let value = uuid_v4(&mut rng);
        let parsed = uuid::Uuid::parse_str(&value).expect("valid uuid");
        assert_eq!(parsed.get_version_num(), 4);
        assert_eq!(parsed.get_variant(), uuid::Variant::RFC4122);
    }

    #[test]
    fn nanoid_uses_url_safe_alphabet() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..50 {
            let value = nanoid(&mut rng);
            assert_eq!(value.len(), NANOID_LEN);
            assert!(value.bytes().all(|b| NANOID_ALPHABET.contains(&b)));
        }
    }
}
