use rand::Rng;

pub const ALPHABET: &[u8] = "ABCDEFGHIJKLMNOPQRSTUVWXYZ".as_bytes();

/// Upper-cases `s` and drops everything outside [`ALPHABET`].
pub fn normalize(s: &str) -> String {
    s.to_ascii_uppercase().chars()
        .filter(|x| x.is_ascii() && ALPHABET.contains(&(*x as u8)))
        .collect()
}

pub fn random_letter<R: Rng + ?Sized>(rng: &mut R) -> char {
    ALPHABET[rng.gen_range(0..ALPHABET.len())] as char
}
