use secrecy::{ExposeSecret, Secret};
use uuid::Uuid;

/// Identity used to register, log in and edit a user.
///
/// No validation happens here: negative tests deliberately send empty or
/// malformed values and let the service reject them.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub email: String,
    pub password: Secret<String>,
    pub name: String,
}

impl Credentials {
    pub fn new(
        email: impl Into<String>,
        password: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            password: Secret::new(password.into()),
            name: name.into(),
        }
    }

    /// Fresh identity for a single test.
    ///
    /// A random suffix keeps identities unique even when tests start within
    /// the same clock tick or run in parallel.
    pub fn generate(email_domain: &str) -> Self {
        let suffix = Uuid::new_v4().simple().to_string();
        Self::new(
            format!("CreateEmail{suffix}@{email_domain}"),
            format!("CreatePw{suffix}"),
            format!("CreateName{suffix}"),
        )
    }

    /// A second identity derived from this one, with `prefix` prepended to every field.
    pub fn prefixed(&self, prefix: &str) -> Self {
        Self::new(
            format!("{prefix}{}", self.email),
            format!("{prefix}{}", self.password.expose_secret()),
            format!("{prefix}{}", self.name),
        )
    }

    pub fn with_email(&self, email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            ..self.clone()
        }
    }

    pub fn with_password(&self, password: impl Into<String>) -> Self {
        Self {
            password: Secret::new(password.into()),
            ..self.clone()
        }
    }

    pub fn with_name(&self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..self.clone()
        }
    }
}

#[derive(serde::Serialize)]
pub(crate) struct UserRequest<'a> {
    email: &'a str,
    password: &'a str,
    name: &'a str,
}

impl<'a> From<&'a Credentials> for UserRequest<'a> {
    fn from(credentials: &'a Credentials) -> Self {
        Self {
            email: &credentials.email,
            password: credentials.password.expose_secret(),
            name: &credentials.name,
        }
    }
}

#[derive(serde::Serialize)]
pub(crate) struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

impl<'a> From<&'a Credentials> for LoginRequest<'a> {
    fn from(credentials: &'a Credentials) -> Self {
        Self {
            email: &credentials.email,
            password: credentials.password.expose_secret(),
        }
    }
}
