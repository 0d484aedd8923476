//! HTTP API Client
//!
//! Functions for communicating with the bookings REST API.

use async_trait::async_trait;
use gloo_net::http::Request;

use venue_hub::history::{bearer, check_status, clear_history_url};
use venue_hub::{HistoryClient, HistoryError, HistoryResult, UserStatus};

use crate::config::app_config;

/// Local storage key overriding the configured API base
const API_URL_KEY: &str = "venue_hub_api_url";

/// Get the API base URL from local storage or the embedded config
pub fn get_api_base() -> String {
    let stored = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(API_URL_KEY).ok().flatten());

    let url = stored.unwrap_or_else(|| app_config().api_base().to_string());
    url.trim_end_matches('/').to_string()
}

#[derive(Debug, serde::Deserialize)]
struct ApiError {
    #[serde(alias = "message")]
    error: String,
}

/// Fetch the signed-in user's role and ban flag
pub async fn fetch_user_status(token: &str) -> Result<UserStatus, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/api/user/role", api_base))
        .header("Authorization", &bearer(token))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error = response
            .json::<ApiError>()
            .await
            .map(|body| body.error)
            .unwrap_or_else(|_| format!("HTTP {}", response.status()));
        return Err(error);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Browser transport for the clear-history call
pub struct GlooHistoryClient {
    url: String,
}

impl GlooHistoryClient {
    pub fn new(api_base: &str) -> Self {
        Self {
            url: clear_history_url(api_base),
        }
    }
}

#[async_trait(?Send)]
impl HistoryClient for GlooHistoryClient {
    async fn clear_history(&self, token: &str) -> HistoryResult<()> {
        let response = Request::delete(&self.url)
            .header("Authorization", &bearer(token))
            .send()
            .await
            .map_err(|e| HistoryError::Transport(e.to_string()))?;

        check_status(response.status())
    }
}
