use serde::{Deserialize, Serialize};

/// JWT claims for an access token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthClaims {
    /// User id.
    pub sub: String,
    pub email: String,
    pub exp: i64,
}

/// The verified identity attached to every protected request. Downstream
/// code trusts this without re-verifying the credential.
#[derive(Debug, Clone)]
pub struct Principal {
    pub user_id: String,
    pub email: String,
}

impl From<AuthClaims> for Principal {
    fn from(claims: AuthClaims) -> Self {
        Self {
            user_id: claims.sub,
            email: claims.email,
        }
    }
}
