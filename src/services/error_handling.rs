use thiserror::Error;
use tracing::{error, info, instrument};

use crate::domain::ProductId;

/// Errors surfaced by the storefront services.
///
/// The `Display` text is what ends up in the store and, for lookups, on the
/// page itself, so HTTP failures carry the backend's `detail` when present.
#[derive(Error, Debug)]
pub enum StorefrontError {
    #[error("{detail}")]
    Http { status: u16, detail: String },

    #[error("{0}")]
    Network(#[from] reqwest::Error),

    #[error("Authentication required")]
    AuthenticationRequired,
}

impl StorefrontError {
    /// Builds an HTTP error from a response body, preferring a `detail` field.
    pub fn from_response(status: u16, body: &str) -> Self {
        let detail = detail_from_body(body)
            .unwrap_or_else(|| format!("Request failed with status code {status}"));
        StorefrontError::Http { status, detail }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            StorefrontError::Http { status, .. } => Some(*status),
            StorefrontError::Network(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

fn detail_from_body(body: &str) -> Option<String> {
    #[derive(serde::Deserialize)]
    struct ErrorBody {
        detail: String,
    }

    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .map(|body| body.detail)
        .filter(|detail| !detail.trim().is_empty())
}

/// Structured logging helpers
pub struct LogHelper;

impl LogHelper {
    #[instrument(skip(product_id))]
    pub fn log_product_operation(operation: &str, product_id: &ProductId, success: bool) {
        if success {
            info!(
                product_id = %product_id,
                operation = %operation,
                "Product operation completed successfully"
            );
        } else {
            error!(
                product_id = %product_id,
                operation = %operation,
                "Product operation failed"
            );
        }
    }

    pub fn log_error_with_context(context: &str, error: &StorefrontError) {
        error!(
            context = %context,
            error = %error,
            status = ?error.status(),
            "Error occurred"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_is_preferred() {
        let error = StorefrontError::from_response(404, r#"{"detail": "Not found."}"#);
        assert_eq!(error.to_string(), "Not found.");
        assert_eq!(error.status(), Some(404));
    }

    #[test]
    fn test_fallback_message_without_detail() {
        let error = StorefrontError::from_response(500, "<html>Server Error</html>");
        assert_eq!(error.to_string(), "Request failed with status code 500");

        let blank = StorefrontError::from_response(403, r#"{"detail": "  "}"#);
        assert_eq!(blank.to_string(), "Request failed with status code 403");
    }

    #[test]
    fn test_authentication_message() {
        assert_eq!(
            StorefrontError::AuthenticationRequired.to_string(),
            "Authentication required"
        );
        assert_eq!(StorefrontError::AuthenticationRequired.status(), None);
    }
}
