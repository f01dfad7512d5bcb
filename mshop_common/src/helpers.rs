use rand::Rng;

const REFERENCE_LEN: usize = 8;
const REFERENCE_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Generates a short random reference of 8 uppercase letters and digits.
///
/// Used for both order ids and KHQR bill numbers (distinct namespaces, same format). The id space is roughly
/// 2.8e12, so collisions are rare but possible; callers that persist a reference under a uniqueness constraint
/// must be prepared to retry.
pub fn random_reference() -> String {
    let mut rng = rand::thread_rng();
    (0..REFERENCE_LEN).map(|_| REFERENCE_ALPHABET[rng.gen_range(0..REFERENCE_ALPHABET.len())] as char).collect()
}
