use crate::routes::auth::error::AuthError;
use crate::routes::auth::interfaces::AuthClaims;
use chrono::{Duration, Utc};
use color_eyre::eyre::eyre;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};

/// Creates a signed access token carrying the user id and email.
pub fn create_access_token(
    jwt_secret: &str,
    user_id: &str,
    email: &str,
    expiry_minutes: i64,
) -> Result<String, AuthError> {
    let claims = AuthClaims {
        sub: user_id.to_string(),
        email: email.to_string(),
        exp: (Utc::now() + Duration::minutes(expiry_minutes)).timestamp(),
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_secret.as_ref()),
    )
    .map_err(|e| AuthError::Internal(eyre!(e)))
}

pub fn decode_token(token: &str, jwt_secret: &str) -> Result<AuthClaims, AuthError> {
    decode::<AuthClaims>(
        token,
        &DecodingKey::from_secret(jwt_secret.as_ref()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|_| AuthError::InvalidToken)
}
