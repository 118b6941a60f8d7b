use axum::{
    extract::Request,
    middleware::Next,
    response::Response,
};

use crate::auth::{extract_bearer, verify_token, Claims};
use crate::config;
use crate::error::ApiError;

/// Authenticated caller, as asserted by the identity provider.
#[derive(Clone, Debug)]
pub struct AuthUser {
    pub external_id: String,
    pub email: String,
    pub display_name: String,
}

impl From<Claims> for AuthUser {
    fn from(claims: Claims) -> Self {
        let display_name = claims.display_name().to_string();
        Self {
            external_id: claims.sub,
            email: claims.email,
            display_name,
        }
    }
}

/// Verifies the bearer token and injects [`AuthUser`] into request extensions.
pub async fn jwt_auth_middleware(mut request: Request, next: Next) -> Result<Response, ApiError> {
    let claims = extract_bearer(request.headers())
        .and_then(|token| verify_token(token, &config::config().security))
        .map_err(|e| {
            tracing::warn!("Rejected request to {}: {}", request.uri().path(), e);
            ApiError::from(e)
        })?;

    request.extensions_mut().insert(AuthUser::from(claims));
    Ok(next.run(request).await)
}
