use reqwest::StatusCode;

use super::{
    expect_failure, expect_field, expect_present, expect_status, ResponseMismatch,
    UNAUTHORISED_MESSAGE,
};
use crate::api_response::ApiResponse;

pub const USER_ALREADY_EXISTS: &str = "User already exists";
pub const REQUIRED_FIELDS_MISSING: &str = "Email, password and name are required fields";
pub const INCORRECT_CREDENTIALS: &str = "email or password are incorrect";
pub const EMAIL_ALREADY_TAKEN: &str = "User with such email already exists";

/// 200, `success: true` and the profile echoed back (e-mail lower-cased).
fn expect_profile(
    response: &ApiResponse,
    email: &str,
    name: &str,
) -> Result<(), ResponseMismatch> {
    expect_status(response, StatusCode::OK)?;
    expect_field(response, "success", true)?;
    expect_field(response, "user.email", email.to_lowercase())?;
    expect_field(response, "user.name", name)
}

fn expect_tokens(response: &ApiResponse) -> Result<(), ResponseMismatch> {
    expect_present(response, "accessToken")?;
    expect_present(response, "refreshToken")
}

pub fn check_user_registered_success(
    response: &ApiResponse,
    email: &str,
    name: &str,
) -> Result<(), ResponseMismatch> {
    expect_profile(response, email, name)?;
    expect_tokens(response)
}

pub fn check_user_registered_exists(response: &ApiResponse) -> Result<(), ResponseMismatch> {
    expect_failure(response, StatusCode::FORBIDDEN, USER_ALREADY_EXISTS)
}

pub fn check_user_registered_missing_fields(
    response: &ApiResponse,
) -> Result<(), ResponseMismatch> {
    expect_failure(response, StatusCode::FORBIDDEN, REQUIRED_FIELDS_MISSING)
}

pub fn check_user_login_success(
    response: &ApiResponse,
    email: &str,
    name: &str,
) -> Result<(), ResponseMismatch> {
    expect_profile(response, email, name)?;
    expect_tokens(response)
}

pub fn check_user_login_incorrect(response: &ApiResponse) -> Result<(), ResponseMismatch> {
    expect_failure(response, StatusCode::UNAUTHORIZED, INCORRECT_CREDENTIALS)
}

pub fn check_get_user_success(
    response: &ApiResponse,
    email: &str,
    name: &str,
) -> Result<(), ResponseMismatch> {
    expect_profile(response, email, name)
}

pub fn check_user_edited_success(
    response: &ApiResponse,
    email: &str,
    name: &str,
) -> Result<(), ResponseMismatch> {
    expect_profile(response, email, name)
}

pub fn check_user_unauthorized(response: &ApiResponse) -> Result<(), ResponseMismatch> {
    expect_failure(response, StatusCode::UNAUTHORIZED, UNAUTHORISED_MESSAGE)
}

pub fn check_email_already_exists(response: &ApiResponse) -> Result<(), ResponseMismatch> {
    expect_failure(response, StatusCode::FORBIDDEN, EMAIL_ALREADY_TAKEN)
}
