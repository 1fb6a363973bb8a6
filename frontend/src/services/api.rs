use gloo::net::http::Request;
use shared::{decode_body, DashboardError, Result, TransactionRepository, TransactionsResponse, TRANSACTIONS_PATH};

/// API client for communicating with the backend server
#[derive(Clone, Debug, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Create a new API client with a custom base URL
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL of an endpoint path such as `/transactions`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// GET an endpoint and return the raw body. Non-2xx statuses are errors.
    async fn get_text(&self, path: &str) -> Result<String> {
        let response = Request::get(&self.endpoint(path))
            .send()
            .await
            .map_err(|e| DashboardError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(DashboardError::Status(response.status()));
        }

        response
            .text()
            .await
            .map_err(|e| DashboardError::Network(e.to_string()))
    }
}

impl TransactionRepository for ApiClient {
    async fn fetch_transactions(&self) -> Result<Option<TransactionsResponse>> {
        let body = self.get_text(TRANSACTIONS_PATH).await?;
        decode_body(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_default_base_url() {
        let client = ApiClient::with_base_url(crate::services::config::DEFAULT_API_BASE_URL.to_string());
        assert_eq!(client.base_url(), "http://localhost:3333");
    }

    #[wasm_bindgen_test]
    fn test_endpoint_joins_paths() {
        let client = ApiClient::with_base_url("https://api.example.com/v1/".to_string());
        assert_eq!(client.base_url(), "https://api.example.com/v1");
        assert_eq!(client.endpoint("/transactions"), "https://api.example.com/v1/transactions");
        assert_eq!(client.endpoint("transactions"), "https://api.example.com/v1/transactions");
    }
}
