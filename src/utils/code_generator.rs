//! Short code generation.
//!
//! Codes are six characters drawn uniformly from `[A-Za-z0-9]`, giving
//! 62^6 (about 56.8 billion) possible codes. Generators do not avoid repeats;
//! the store retries on collision.

use rand::{Rng, distr::Alphanumeric};

/// Length of every generated short code.
pub const CODE_LENGTH: usize = 6;

/// Source of candidate short codes.
///
/// Must be callable from many request handlers at once.
pub trait CodeGenerator: Send + Sync {
    fn generate(&self) -> String;
}

/// Generator backed by the thread-local RNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomCodeGenerator;

impl CodeGenerator for RandomCodeGenerator {
    fn generate(&self) -> String {
        generate_code()
    }
}

/// Generates a random alphanumeric short code of [`CODE_LENGTH`] characters.
///
/// # Examples
///
/// ```ignore
/// let code = generate_code();
/// assert_eq!(code.len(), 6);
/// assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_code() -> String {
    rand::rng()
        .sample_iter(Alphanumeric)
        .take(CODE_LENGTH)
        .map(char::from)
        .collect()
}

/// Returns true if `code` has the shape of a generated code.
///
/// Anything else can be rejected without consulting the store.
pub fn is_well_formed_code(code: &str) -> bool {
    code.len() == CODE_LENGTH && code.bytes().all(|b| b.is_ascii_alphanumeric())
}
