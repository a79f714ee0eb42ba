use reqwest::{Method, StatusCode, Url};

use super::{ApiClient, ClientError};
use crate::{
    api_response::ApiResponse,
    domain::{AccessToken, Credentials, LoginRequest, UserRequest},
};

const REGISTER_PATH: &str = "/api/auth/register";
const LOGIN_PATH: &str = "/api/auth/login";
const USER_PATH: &str = "/api/auth/user";

/// Requests against `/api/auth/*`.
#[derive(Debug, Clone)]
pub struct UserClient {
    api: ApiClient,
}

impl UserClient {
    pub fn new(base_url: Url, timeout: std::time::Duration) -> Self {
        Self {
            api: ApiClient::new(base_url, timeout),
        }
    }

    /// Same target, brand new connection pool.
    ///
    /// Pooled connections are driven by the runtime that opened them, so a
    /// client used from another runtime has to start from scratch.
    pub fn detached(&self) -> Self {
        Self::new(self.api.base_url().clone(), self.api.timeout())
    }

    #[tracing::instrument(
        name = "Register a new user",
        skip(self, credentials),
        fields(user_email = %credentials.email, user_name = %credentials.name)
    )]
    pub async fn register(&self, credentials: &Credentials) -> Result<ApiResponse, ClientError> {
        let request = self
            .api
            .request(Method::POST, REGISTER_PATH, None)?
            .json(&UserRequest::from(credentials));
        self.api.send(request).await
    }

    #[tracing::instrument(
        name = "Log a user in",
        skip(self, credentials),
        fields(user_email = %credentials.email)
    )]
    pub async fn login(&self, credentials: &Credentials) -> Result<ApiResponse, ClientError> {
        let request = self
            .api
            .request(Method::POST, LOGIN_PATH, None)?
            .json(&LoginRequest::from(credentials));
        self.api.send(request).await
    }

    #[tracing::instrument(name = "Get the user profile", skip(self, token))]
    pub async fn get_user(&self, token: &AccessToken) -> Result<ApiResponse, ClientError> {
        let request = self.api.request(Method::GET, USER_PATH, Some(token))?;
        self.api.send(request).await
    }

    #[tracing::instrument(name = "Get the user profile without a token", skip(self))]
    pub async fn get_user_unauthorized(&self) -> Result<ApiResponse, ClientError> {
        let request = self.api.request(Method::GET, USER_PATH, None)?;
        self.api.send(request).await
    }

    #[tracing::instrument(
        name = "Edit the user profile",
        skip(self, credentials, token),
        fields(user_email = %credentials.email, user_name = %credentials.name)
    )]
    pub async fn edit_user(
        &self,
        credentials: &Credentials,
        token: &AccessToken,
    ) -> Result<ApiResponse, ClientError> {
        let request = self
            .api
            .request(Method::PATCH, USER_PATH, Some(token))?
            .json(&UserRequest::from(credentials));
        self.api.send(request).await
    }

    #[tracing::instrument(
        name = "Edit the user profile without a token",
        skip(self, credentials),
        fields(user_email = %credentials.email)
    )]
    pub async fn edit_user_unauthorized(
        &self,
        credentials: &Credentials,
    ) -> Result<ApiResponse, ClientError> {
        let request = self
            .api
            .request(Method::PATCH, USER_PATH, None)?
            .json(&UserRequest::from(credentials));
        self.api.send(request).await
    }

    /// Deletes the account behind `token`. Anything but `202 Accepted` is an error.
    #[tracing::instrument(name = "Delete the user", skip(self, token))]
    pub async fn delete_user(&self, token: &AccessToken) -> Result<(), ClientError> {
        let request = self.api.request(Method::DELETE, USER_PATH, Some(token))?;
        let response = self.api.send(request).await?;
        if response.status() != StatusCode::ACCEPTED {
            tracing::error!(status = %response.status(), "User deletion was not accepted");
            return Err(ClientError::UnexpectedStatus {
                expected: StatusCode::ACCEPTED,
                actual: response.status(),
                body: response.text().to_owned(),
            });
        }
        Ok(())
    }
}
