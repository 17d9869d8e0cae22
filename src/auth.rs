use std::fmt;
use std::sync::Arc;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use subtle::ConstantTimeEq;
use tracing::warn;

use crate::error::AppError;

/// Request header that carries the shared secret.
pub const API_KEY_HEADER: &str = "x-api-key";

/// The shared secret every `/api` request must present.
#[derive(Clone)]
pub struct ApiKey(Arc<str>);

impl ApiKey {
    /// Returns `None` for a blank secret so the gate can never be opened by an empty header.
    pub fn new(secret: impl Into<String>) -> Option<Self> {
        let secret = secret.into();
        if secret.trim().is_empty() {
            return None;
        }
        Some(Self(Arc::from(secret)))
    }

    pub fn matches(&self, candidate: &str) -> bool {
        self.0.as_bytes().ct_eq(candidate.as_bytes()).into()
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(<redacted>)")
    }
}

/// Rejects the request with 401 before routing unless the header matches exactly.
pub async fn require_api_key(
    State(key): State<ApiKey>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let rejection = match request
        .headers()
        .get(API_KEY_HEADER)
        .and_then(|value| value.to_str().ok())
    {
        Some(candidate) if key.matches(candidate) => None,
        Some(_) => Some("wrong api key"),
        None => Some("missing api key"),
    };

    match rejection {
        None => Ok(next.run(request).await),
        Some(reason) => {
            warn!("rejected {} {}: {}", request.method(), request.uri().path(), reason);
            Err(AppError::Unauthorized)
        }
    }
}
