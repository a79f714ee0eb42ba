//! Response-shape checks.
//!
//! Every helper returns `Err(ResponseMismatch)` on the first field that does not
//! match; tests surface it with `claims::assert_ok!`.

pub mod orders;
pub mod user;

use reqwest::StatusCode;
use serde_json::Value;

use crate::{api_response::ApiResponse, clients::error_chain_fmt};

pub const UNAUTHORISED_MESSAGE: &str = "You should be authorised";

#[derive(thiserror::Error, PartialEq)]
pub enum ResponseMismatch {
    #[error("Expected status {expected} but got {actual}. Body: {body}")]
    Status {
        expected: StatusCode,
        actual: StatusCode,
        body: String,
    },
    #[error("Expected `{path}` to be {expected} but got {actual}")]
    Field {
        path: String,
        expected: Value,
        actual: Value,
    },
    #[error("Expected `{path}` to be present and not null")]
    MissingField { path: String },
}

impl std::fmt::Debug for ResponseMismatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

pub fn expect_status(
    response: &ApiResponse,
    expected: StatusCode,
) -> Result<(), ResponseMismatch> {
    if response.status() == expected {
        Ok(())
    } else {
        Err(ResponseMismatch::Status {
            expected,
            actual: response.status(),
            body: response.text().to_owned(),
        })
    }
}

/// `path` must hold exactly `expected`. A missing field is reported as `null`.
pub fn expect_field(
    response: &ApiResponse,
    path: &str,
    expected: impl Into<Value>,
) -> Result<(), ResponseMismatch> {
    let expected = expected.into();
    let actual = response.lookup(path).cloned().unwrap_or(Value::Null);
    if actual == expected {
        Ok(())
    } else {
        Err(ResponseMismatch::Field {
            path: path.to_owned(),
            expected,
            actual,
        })
    }
}

pub fn expect_present(response: &ApiResponse, path: &str) -> Result<(), ResponseMismatch> {
    match response.non_null(path) {
        Some(_) => Ok(()),
        None => Err(ResponseMismatch::MissingField {
            path: path.to_owned(),
        }),
    }
}

/// `success: false` plus the service's `message`, under the given status.
pub(crate) fn expect_failure(
    response: &ApiResponse,
    status: StatusCode,
    message: &str,
) -> Result<(), ResponseMismatch> {
    expect_status(response, status)?;
    expect_field(response, "success", false)?;
    expect_field(response, "message", message)
}
