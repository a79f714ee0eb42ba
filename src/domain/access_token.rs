use secrecy::{ExposeSecret, Secret};

const BEARER_PREFIX: &str = "Bearer ";

/// Bearer credential handed out by register/login.
///
/// The service returns `accessToken` already prefixed (`"Bearer eyJ..."`), while
/// callers may also hold the bare JWT. Both forms normalise to the bare value so
/// the `Authorization` header is never double-prefixed.
#[derive(Debug, Clone)]
pub struct AccessToken(Secret<String>);

impl AccessToken {
    pub fn parse(s: String) -> Result<Self, String> {
        let token = s.replace(BEARER_PREFIX, "");
        if token.trim().is_empty() {
            return Err(String::from("Access token cannot be empty."));
        }
        Ok(Self(Secret::new(token)))
    }

    /// Bare token, without the `Bearer ` prefix.
    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}
