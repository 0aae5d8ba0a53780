use crate::api_state::ApiContext;
use crate::routes::auth::error::AuthError;
use crate::routes::auth::interfaces::Principal;
use crate::routes::auth::token::decode_token;
use axum::extract::{FromRequestParts, State};
use axum::http::header;
use axum::http::request::Parts;
use color_eyre::eyre::eyre;

/// Get the auth token from the Authorization header.
fn extract_token(parts: &Parts) -> Result<String, AuthError> {
    let auth_header = parts
        .headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or(AuthError::MissingToken)?;

    auth_header
        .strip_prefix("Bearer ")
        .map(ToOwned::to_owned)
        .ok_or(AuthError::MissingToken)
}

impl<S> FromRequestParts<S> for Principal
where
    S: Send + Sync,
    State<ApiContext>: FromRequestParts<S>,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let token = extract_token(parts)?;
        let State(context) = State::<ApiContext>::from_request_parts(parts, state)
            .await
            .map_err(|_| AuthError::Internal(eyre!("Server state is not configured correctly.")))?;

        let claims = decode_token(&token, &context.settings.auth.jwt_secret)?;
        let principal = Principal::from(claims);
        parts.extensions.insert(principal.clone());
        Ok(principal)
    }
}
