use crate::error::AppError;
use crate::models::Role;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Claims carried by every issued token.
///
/// Tokens have no expiry claim; a token stays valid for as long as the signing
/// secret does. The role is baked in at issue time, so a promotion only takes
/// effect for a caller once they log in again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// The account id, as its canonical UUID string.
    pub sub: String,
    pub username: String,
    pub role: Role,
}

/// Issues and verifies HMAC-SHA256 signed bearer tokens.
///
/// The signing secret is injected once at construction; nothing here touches
/// the process environment.
#[derive(Clone)]
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
}

impl TokenService {
    pub fn new(secret: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Issued tokens carry no exp claim, so the default expiry checks must
        // be switched off or every verification would fail.
        validation.validate_exp = false;
        validation.required_spec_claims.clear();
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    /// Signs a token embedding the account's id, username and role.
    pub fn issue(&self, user_id: Uuid, username: &str, role: Role) -> Result<String, AppError> {
        let claims = Claims {
            sub: user_id.to_string(),
            username: username.to_owned(),
            role,
        };
        encode(&Header::default(), &claims, &self.encoding)
            .map_err(|e| AppError::Internal(format!("failed to sign token: {}", e)))
    }

    /// Verifies a token's signature and decodes its claims.
    ///
    /// Fails with `AppError::Unauthenticated` when the token is malformed, the
    /// signature does not match, or a claim is missing or has the wrong shape.
    pub fn verify(&self, token: &str) -> Result<Claims, AppError> {
        let data = decode::<Claims>(token, &self.decoding, &self.validation)?;
        Ok(data.claims)
    }
}
