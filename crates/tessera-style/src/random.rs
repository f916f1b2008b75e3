//! Random class-name generation.

use crate::stylesheet::ClassNameGenerator;
use rand::Rng;

const LETTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Generate a string of `length` random ASCII letters.
pub fn random_string(length: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..length)
        .map(|_| LETTERS[rng.gen_range(0..LETTERS.len())] as char)
        .collect()
}

/// The default anonymous-class generator: 8 random letters per name.
/// Collision probability is not managed; acceptable within one render,
/// not for cross-process stability.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomNameGenerator;

impl ClassNameGenerator for RandomNameGenerator {
    fn generate(&mut self) -> String {
        random_string(8)
    }
}
