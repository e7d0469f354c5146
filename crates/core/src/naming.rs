//! Unique character name generation.
//!
//! Names look like `Hana_senpai_k3x9`. The random tail keeps repeated runs
//! (and concurrent runs against the same service) clear of the service's
//! name-uniqueness rule.

use rand::Rng;

const BASE_NAMES: &[&str] = &[
    "Airi", "Yuki", "Hana", "Mika", "Sora", "Nami", "Rin", "Akira", "Emi", "Luna", "Hoshi",
    "Kira", "Mori", "Saya", "Aiko", "Miku", "Rei", "Asuna", "Zero", "Nez",
];

const SUFFIXES: &[&str] = &["chan", "san", "senpai", "nyan", "x", "kai", "kun"];

const TAIL_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Length of the random base-36 tail.
pub const TAIL_LENGTH: usize = 4;

/// Generate a fresh `{base}_{suffix}_{tail}` name.
pub fn generate_character_name() -> String {
    let mut rng = rand::rng();
    let base = BASE_NAMES[rng.random_range(0..BASE_NAMES.len())];
    let suffix = SUFFIXES[rng.random_range(0..SUFFIXES.len())];
    let tail: String = (0..TAIL_LENGTH)
        .map(|_| TAIL_ALPHABET[rng.random_range(0..TAIL_ALPHABET.len())] as char)
        .collect();

    format!("{base}_{suffix}_{tail}")
}
