use crate::core::error::{AppError, Result};

/// Bearer token check for admin endpoints.
///
/// Without a configured token every request passes.
#[derive(Debug, Clone, Default)]
pub struct AdminAuth {
    token: Option<String>,
}

impl AdminAuth {
    pub fn new(token: Option<String>) -> Self {
        Self { token }
    }

    pub fn is_enabled(&self) -> bool {
        self.token.is_some()
    }

    /// Check a raw `Authorization` header value
    pub fn verify(&self, authorization: Option<&str>) -> Result<()> {
        let Some(expected) = self.token.as_deref() else {
            return Ok(());
        };

        let provided = authorization
            .and_then(|h| h.strip_prefix("Bearer "))
            .map(str::trim)
            .ok_or_else(|| AppError::Unauthorized("Missing admin token".to_string()))?;

        if provided != expected {
            tracing::warn!("Rejected admin request with invalid token");
            return Err(AppError::Unauthorized("Invalid admin token".to_string()));
        }

        Ok(())
    }
}
