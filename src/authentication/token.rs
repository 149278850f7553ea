use crate::authentication::Principal;
use crate::configuration::AuthSettings;
use anyhow::Context;
use chrono::{Duration, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};
use secrecy::ExposeSecret;
use uuid::Uuid;

#[derive(serde::Serialize, serde::Deserialize)]
pub struct Claims {
    /// Subject (user id).
    pub sub: String,
    pub username: String,
    /// Unique token id, fresh per issuance.
    pub jti: String,
    /// Issued at (as UTC timestamp).
    pub iat: i64,
    /// Expiration time (as UTC timestamp).
    pub exp: i64,
}

/// Sign a fresh access token for a verified principal.
///
/// Issuance is stateless: every call produces a new token (distinct
/// `jti`) and nothing is recorded server-side.
pub fn issue_token(principal: &Principal, settings: &AuthSettings) -> Result<String, anyhow::Error> {
    let issued_at = Utc::now();
    let expires_at = issued_at + Duration::hours(settings.token_ttl_hours);
    let claims = Claims {
        sub: principal.user_id.to_string(),
        username: principal.username.clone(),
        jti: Uuid::new_v4().to_string(),
        iat: issued_at.timestamp(),
        exp: expires_at.timestamp(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(settings.token_secret.expose_secret().as_bytes()),
    )
    .context("Failed to sign access token.")
}
