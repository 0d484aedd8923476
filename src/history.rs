//! Clear Booking History
//!
//! Authorized `DELETE` against the bookings service. Success reloads the page,
//! every failure becomes a single user-facing alert. No retries.

use async_trait::async_trait;
use thiserror::Error;

/// Endpoint path, relative to the API base
pub const CLEAR_HISTORY_PATH: &str = "/api/bookings/clear-history";

/// Message shown when clearing fails
pub const CLEAR_HISTORY_FAILED: &str = "Failed to clear history";

/// Clear-history errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HistoryError {
    /// No session token could be obtained
    #[error("Token error: {0}")]
    Token(String),

    /// Request never completed
    #[error("Network error: {0}")]
    Transport(String),

    /// Server answered with a non-success status
    #[error("Unexpected status: {0}")]
    Status(u16),
}

/// Result type for history operations
pub type HistoryResult<T> = Result<T, HistoryError>;

/// Full endpoint URL for an API base (trailing slashes ignored)
pub fn clear_history_url(api_base: &str) -> String {
    format!("{}{}", api_base.trim_end_matches('/'), CLEAR_HISTORY_PATH)
}

/// Value of the `Authorization` header
pub fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}

/// Map an HTTP status to success or failure
pub fn check_status(status: u16) -> HistoryResult<()> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(HistoryError::Status(status))
    }
}

/// Transport for the clear-history call
#[async_trait(?Send)]
pub trait HistoryClient {
    async fn clear_history(&self, token: &str) -> HistoryResult<()>;
}

/// What the UI does after the call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClearHistoryOutcome {
    /// Full page reload to refetch everything
    Reload,
    /// Blocking alert; page state is left as is
    Alert(String),
}

/// Run the clear-history flow with an already obtained session token
pub async fn clear_history<C: HistoryClient + ?Sized>(
    client: &C,
    token: HistoryResult<String>,
) -> ClearHistoryOutcome {
    let result = match token {
        Ok(token) => client.clear_history(&token).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(()) => {
            tracing::info!("Booking history cleared");
            ClearHistoryOutcome::Reload
        }
        Err(e) => {
            tracing::warn!(error = %e, "Failed to clear booking history");
            ClearHistoryOutcome::Alert(CLEAR_HISTORY_FAILED.to_string())
        }
    }
}

/// Native client used by the CLI
#[cfg(not(target_arch = "wasm32"))]
pub struct ReqwestHistoryClient {
    client: reqwest::Client,
    url: String,
}

#[cfg(not(target_arch = "wasm32"))]
impl ReqwestHistoryClient {
    pub fn new(api_base: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: clear_history_url(api_base),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
#[async_trait(?Send)]
impl HistoryClient for ReqwestHistoryClient {
    async fn clear_history(&self, token: &str) -> HistoryResult<()> {
        let response = self
            .client
            .delete(&self.url)
            .header(reqwest::header::AUTHORIZATION, bearer(token))
            .send()
            .await
            .map_err(|e| HistoryError::Transport(e.to_string()))?;

        check_status(response.status().as_u16())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct FakeClient {
        result: HistoryResult<()>,
        tokens: RefCell<Vec<String>>,
    }

    impl FakeClient {
        fn new(result: HistoryResult<()>) -> Self {
            Self {
                result,
                tokens: RefCell::new(Vec::new()),
            }
        }
    }

    #[async_trait(?Send)]
    impl HistoryClient for FakeClient {
        async fn clear_history(&self, token: &str) -> HistoryResult<()> {
            self.tokens.borrow_mut().push(token.to_string());
            self.result.clone()
        }
    }

    #[test]
    fn test_url_and_header() {
        assert_eq!(
            clear_history_url("https://api.example.edu/"),
            "https://api.example.edu/api/bookings/clear-history"
        );
        assert_eq!(bearer("abc"), "Bearer abc");
    }

    #[test]
    fn test_check_status() {
        assert!(check_status(200).is_ok());
        assert!(check_status(204).is_ok());
        assert_eq!(check_status(401), Err(HistoryError::Status(401)));
        assert_eq!(check_status(500), Err(HistoryError::Status(500)));
    }

    #[tokio::test]
    async fn test_success_reloads() {
        let client = FakeClient::new(Ok(()));
        let outcome = clear_history(&client, Ok("tok".to_string())).await;
        assert_eq!(outcome, ClearHistoryOutcome::Reload);
        assert_eq!(client.tokens.borrow().as_slice(), ["tok".to_string()]);
    }

    #[tokio::test]
    async fn test_bad_status_alerts() {
        let client = FakeClient::new(Err(HistoryError::Status(500)));
        let outcome = clear_history(&client, Ok("tok".to_string())).await;
        assert_eq!(
            outcome,
            ClearHistoryOutcome::Alert(CLEAR_HISTORY_FAILED.to_string())
        );
    }

    #[tokio::test]
    async fn test_transport_failure_alerts() {
        let client = FakeClient::new(Err(HistoryError::Transport("offline".to_string())));
        let outcome = clear_history(&client, Ok("tok".to_string())).await;
        assert!(matches!(outcome, ClearHistoryOutcome::Alert(_)));
    }

    #[tokio::test]
    async fn test_missing_token_skips_request() {
        let client = FakeClient::new(Ok(()));
        let outcome = clear_history(&client, Err(HistoryError::Token("signed out".into()))).await;
        assert!(matches!(outcome, ClearHistoryOutcome::Alert(_)));
        assert!(client.tokens.borrow().is_empty());
    }
}
