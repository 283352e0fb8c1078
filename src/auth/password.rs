use crate::error::AppError;
use bcrypt::DEFAULT_COST;

/// bcrypt ignores everything past 72 bytes of input, so longer passwords are
/// rejected up front instead of being silently truncated.
pub const MAX_PASSWORD_BYTES: usize = 72;

/// bcrypt-backed password hashing with a configurable work factor.
///
/// Production uses the bcrypt default cost; tests drop to the minimum cost to
/// keep the suite fast.
#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self { cost: DEFAULT_COST }
    }
}

impl PasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// Hashes a plaintext password. Each call salts independently, so hashing
    /// the same input twice yields different strings.
    pub fn hash(&self, password: &str) -> Result<String, AppError> {
        bcrypt::hash(password, self.cost)
            .map_err(|e| AppError::Internal(format!("failed to hash password: {}", e)))
    }

    /// Checks a plaintext password against a stored hash. A mismatch is
    /// `Ok(false)`; only a structurally malformed hash produces an error.
    pub fn verify(&self, password: &str, hashed: &str) -> Result<bool, AppError> {
        bcrypt::verify(password, hashed)
            .map_err(|e| AppError::Internal(format!("failed to verify password: {}", e)))
    }
}
