use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use thiserror::Error;

use super::claims::Claims;

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("Token is expired")]
    Expired,
    #[error("Token signature or algorithm is invalid")]
    InvalidSignature,
    #[error("Token is malformed")]
    Malformed,
    #[error("Token signing failed: {0}")]
    Signing(#[source] jsonwebtoken::errors::Error),
}

/// Stateless encoder/verifier for session tokens.
///
/// Verification is pinned to HS256: the algorithm a token declares in its
/// header is never trusted, so tokens asserting `none` or a non-HMAC
/// algorithm are rejected outright.
pub struct TokenCodec {
    decoding_key: DecodingKey,
    encoding_key: EncodingKey,
    validation: Validation,
}

impl TokenCodec {
    pub fn new(secret: &[u8]) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // No clock leeway: a token is expired the second its exp passes
        validation.leeway = 0;

        Self {
            decoding_key: DecodingKey::from_secret(secret),
            encoding_key: EncodingKey::from_secret(secret),
            validation,
        }
    }

    /// Serialize and sign a claim set into a compact token string
    pub fn mint(&self, claims: &Claims) -> Result<String, TokenError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key)
            .map_err(TokenError::Signing)
    }

    /// Parse a token string and check its signature and expiry.
    ///
    /// On success returns the embedded claims with no further
    /// interpretation; session liveness is the caller's concern.
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                ErrorKind::InvalidSignature
                | ErrorKind::InvalidAlgorithm
                | ErrorKind::InvalidAlgorithmName
                | ErrorKind::ImmatureSignature => TokenError::InvalidSignature,
                _ => TokenError::Malformed,
            })
    }
}
