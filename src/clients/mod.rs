mod orders;
mod user;

pub use orders::OrdersClient;
pub use user::UserClient;

use reqwest::{Client, Method, RequestBuilder, StatusCode, Url};

use crate::{api_response::ApiResponse, domain::AccessToken};

/// Shared plumbing of the resource clients: one `reqwest::Client` per base URL.
#[derive(Debug, Clone)]
pub(crate) struct ApiClient {
    http_client: Client,
    base_url: Url,
    timeout: std::time::Duration,
}

impl ApiClient {
    pub(crate) fn new(base_url: Url, timeout: std::time::Duration) -> Self {
        Self {
            http_client: Client::builder()
                // Rule of thumb: ALWAYS set a timeout, every time we perform an IO operation.
                .timeout(timeout)
                .build()
                .expect("Failed to build client."),
            base_url,
            timeout,
        }
    }

    pub(crate) fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub(crate) fn timeout(&self) -> std::time::Duration {
        self.timeout
    }

    /// Start a JSON request. `token` adds `Authorization: Bearer <token>`.
    pub(crate) fn request(
        &self,
        method: Method,
        path: &str,
        token: Option<&AccessToken>,
    ) -> Result<RequestBuilder, ClientError> {
        let url = self
            .base_url
            .join(path)
            .map_err(|e| ClientError::InvalidUrl(format!("{path}: {e}")))?;
        let builder = self
            .http_client
            .request(method, url)
            .header(reqwest::header::CONTENT_TYPE, "application/json");
        Ok(match token {
            Some(token) => builder.bearer_auth(token.expose()),
            None => builder,
        })
    }

    pub(crate) async fn send(&self, request: RequestBuilder) -> Result<ApiResponse, ClientError> {
        let response = request.send().await.map_err(ClientError::Request)?;
        let response = ApiResponse::read(response)
            .await
            .map_err(ClientError::Request)?;
        tracing::debug!(
            status = %response.status(),
            body = %response.text(),
            "Received response from the burger service"
        );
        Ok(response)
    }
}

#[derive(thiserror::Error)]
pub enum ClientError {
    #[error("Failed to reach the burger service")]
    Request(#[source] reqwest::Error),
    #[error("Could not build the endpoint URL for {0}")]
    InvalidUrl(String),
    #[error("Expected status {expected} but the service answered {actual}: {body}")]
    UnexpectedStatus {
        expected: StatusCode,
        actual: StatusCode,
        body: String,
    },
}

impl std::fmt::Debug for ClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

/// Print an error followed by every `source()` in its chain.
pub fn error_chain_fmt(
    e: &impl std::error::Error,
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    writeln!(f, "{e}\n")?;
    let mut current = e.source();
    while let Some(cause) = current {
        writeln!(f, "Caused by:\n\t{cause}")?;
        current = cause.source();
    }
    Ok(())
}
