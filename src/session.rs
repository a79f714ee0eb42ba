use anyhow::Context;

use crate::{
    api_response::ApiResponse,
    clients::{ClientError, UserClient},
    domain::{AccessToken, Credentials},
};

/// A test user whose account is deleted when the session ends.
///
/// Call [`UserSession::teardown`] at the end of a test to surface cleanup
/// errors. If the session is dropped while still holding a token (a failed
/// assertion, an early return) the account is deleted from `Drop` instead.
pub struct UserSession {
    client: UserClient,
    credentials: Credentials,
    token: Option<AccessToken>,
}

impl UserSession {
    pub fn new(client: UserClient, credentials: Credentials) -> Self {
        Self {
            client,
            credentials,
            token: None,
        }
    }

    /// Register `credentials` and keep the returned token for cleanup.
    ///
    /// The raw response is returned so the caller can assert on it; a rejected
    /// registration leaves the session without a token.
    pub async fn register(&mut self) -> Result<ApiResponse, ClientError> {
        let response = self.client.register(&self.credentials).await?;
        self.adopt(&response);
        Ok(response)
    }

    /// Take over the token carried by `response`, if any. Returns whether one was found.
    pub fn adopt(&mut self, response: &ApiResponse) -> bool {
        match response.access_token() {
            Some(token) => {
                self.token = Some(token);
                true
            }
            None => false,
        }
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn token(&self) -> Option<&AccessToken> {
        self.token.as_ref()
    }

    /// Delete the account, if one was established.
    #[tracing::instrument(name = "Tear down test user", skip(self))]
    pub async fn teardown(mut self) -> Result<(), ClientError> {
        match self.token.take() {
            Some(token) => self.client.delete_user(&token).await,
            None => Ok(()),
        }
    }
}

impl Drop for UserSession {
    fn drop(&mut self) {
        let Some(token) = self.token.take() else {
            return;
        };
        // We may be inside the test's runtime, which cannot be blocked on.
        // Run the deletion on its own thread, runtime and connection pool.
        let client = self.client.detached();
        let outcome = std::thread::spawn(move || delete_on_fresh_runtime(&client, &token))
            .join()
            .unwrap_or_else(|_| Err(anyhow::anyhow!("User cleanup thread panicked")));

        if let Err(e) = outcome {
            if std::thread::panicking() {
                tracing::error!(
                    error.cause_chain = ?e,
                    user_email = %self.credentials.email,
                    "Failed to delete test user"
                );
            } else {
                panic!("Failed to delete test user {}: {e:?}", self.credentials.email);
            }
        }
    }
}

fn delete_on_fresh_runtime(client: &UserClient, token: &AccessToken) -> Result<(), anyhow::Error> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to build a runtime for user cleanup.")?;
    runtime
        .block_on(client.delete_user(token))
        .context("The service refused to delete the user.")
}
