//! Invitation code generation.
//!
//! Codes are short, human-transcribable strings handed to students to claim a
//! seat. The alphabet drops the visually ambiguous characters (0, O, 1, I) so
//! a code scribbled on paper at the lift survives retyping. Uniqueness is
//! enforced against the invitation store with a bounded retry.

use std::future::Future;

use rand::Rng;
use sea_orm::DbErr;

use crate::server::error::{claim::ClaimError, AppError};

/// Characters an invitation code may contain.
pub const CODE_ALPHABET: &[u8] = b"23456789ABCDEFGHJKLMNPQRSTUVWXYZ";

/// Length of every invitation code.
pub const CODE_LENGTH: usize = 8;

/// Attempts before giving up on finding an unused code.
pub const MAX_GENERATION_ATTEMPTS: usize = 5;

pub struct CodeGenerator;

impl CodeGenerator {
    /// Generates a random invitation code.
    ///
    /// Draws uniformly from [`CODE_ALPHABET`] using the OS-seeded generator.
    /// Uniqueness is not checked here; use [`CodeGenerator::generate_unique`]
    /// when persisting.
    ///
    /// # Returns
    /// - `String` - An 8-character random code
    pub fn generate() -> String {
        let mut rng = rand::rng();

        (0..CODE_LENGTH)
            .map(|_| {
                let idx = rng.random_range(0..CODE_ALPHABET.len());
                CODE_ALPHABET[idx] as char
            })
            .collect()
    }

    /// Generates a code that does not collide with existing codes.
    ///
    /// Calls `exists` for each candidate and retries up to
    /// [`MAX_GENERATION_ATTEMPTS`] times on collision. With an 8-character
    /// code over a 32-character alphabet, hitting the bound means something is
    /// deeply wrong (exhausted alphabet or a broken randomness source), so the
    /// failure is surfaced as fatal rather than retried further.
    ///
    /// # Arguments
    /// - `exists` - Uniqueness probe, typically backed by the invitation store
    ///
    /// # Returns
    /// - `Ok(String)` - A code for which `exists` returned false
    /// - `Err(AppError::ClaimErr(CodeGenerationExhausted))` - Every attempt collided
    /// - `Err(AppError::DbErr)` - The probe itself failed
    pub async fn generate_unique<F, Fut>(exists: F) -> Result<String, AppError>
    where
        F: Fn(String) -> Fut,
        Fut: Future<Output = Result<bool, DbErr>>,
    {
        for _ in 0..MAX_GENERATION_ATTEMPTS {
            let code = Self::generate();

            if !exists(code.clone()).await? {
                return Ok(code);
            }
        }

        Err(ClaimError::CodeGenerationExhausted.into())
    }
}
