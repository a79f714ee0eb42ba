use reqwest::StatusCode;

use super::{
    expect_failure, expect_field, expect_present, expect_status, ResponseMismatch,
    UNAUTHORISED_MESSAGE,
};
use crate::{api_response::ApiResponse, domain::OrderReceipt};

pub const INGREDIENTS_REQUIRED: &str = "Ingredient ids must be provided";

pub fn check_ingredients_listed(response: &ApiResponse) -> Result<(), ResponseMismatch> {
    expect_status(response, StatusCode::OK)?;
    expect_field(response, "success", true)?;
    expect_present(response, "data[0]._id")
}

pub fn check_order_created_success(response: &ApiResponse) -> Result<(), ResponseMismatch> {
    expect_status(response, StatusCode::OK)?;
    expect_field(response, "success", true)?;
    expect_present(response, "order.number")
}

pub fn check_order_not_created_without_ingredients(
    response: &ApiResponse,
) -> Result<(), ResponseMismatch> {
    expect_failure(response, StatusCode::BAD_REQUEST, INGREDIENTS_REQUIRED)
}

/// Unknown ingredient ids crash the service; the body is an HTML error page.
pub fn check_order_not_created_incorrect_hash(
    response: &ApiResponse,
) -> Result<(), ResponseMismatch> {
    expect_status(response, StatusCode::INTERNAL_SERVER_ERROR)
}

/// The order history starts with the order behind `receipt`.
pub fn check_created_order(
    response: &ApiResponse,
    receipt: &OrderReceipt,
) -> Result<(), ResponseMismatch> {
    expect_status(response, StatusCode::OK)?;
    expect_field(response, "success", true)?;
    expect_field(response, "orders[0]._id", receipt.id.as_str())?;
    expect_field(response, "orders[0].number", receipt.number)?;
    expect_present(response, "orders[0].ingredients")
}

pub fn check_get_orders_unauthorized(response: &ApiResponse) -> Result<(), ResponseMismatch> {
    expect_failure(response, StatusCode::UNAUTHORIZED, UNAUTHORISED_MESSAGE)
}
