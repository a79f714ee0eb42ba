use burger_api::{
    assertions::orders::{
        check_created_order, check_get_orders_unauthorized, check_ingredients_listed,
        check_order_created_success, check_order_not_created_incorrect_hash,
        check_order_not_created_without_ingredients,
    },
    domain::{IngredientId, NewOrder},
};
use claims::assert_ok;

use crate::helpers::test_app;

#[tokio::test]
#[ignore = "hits the live burger service"]
async fn ingredient_catalog_is_public() {
    // Arrange
    let app = test_app();

    // Act
    let response = app
        .orders_client
        .get_ingredients()
        .await
        .expect("Failed to execute request.");

    // Assert
    assert_ok!(check_ingredients_listed(&response));
}

#[tokio::test]
#[ignore = "hits the live burger service"]
async fn create_order_returns_a_number_for_an_authorised_user() {
    // Arrange
    let app = test_app();
    let user = app.registered_user().await;
    let token = user.token().expect("No session was established.");
    let order = NewOrder::new(app.two_ingredients().await);

    // Act
    let response = app
        .orders_client
        .create_order(&order, token)
        .await
        .expect("Failed to execute request.");

    // Assert
    assert_ok!(check_order_created_success(&response));
    assert_ok!(user.teardown().await);
}

#[tokio::test]
#[ignore = "hits the live burger service"]
async fn create_order_succeeds_without_a_token() {
    // Arrange
    let app = test_app();
    let order = NewOrder::new(app.two_ingredients().await);

    // Act
    let response = app
        .orders_client
        .create_order_unauthorized(&order)
        .await
        .expect("Failed to execute request.");

    // Assert
    assert_ok!(check_order_created_success(&response));
}

#[tokio::test]
#[ignore = "hits the live burger service"]
async fn create_order_returns_400_without_ingredients() {
    // Arrange
    let app = test_app();
    let user = app.registered_user().await;
    let token = user.token().expect("No session was established.");

    // Act
    let response = app
        .orders_client
        .create_order(&NewOrder::default(), token)
        .await
        .expect("Failed to execute request.");

    // Assert
    assert_ok!(check_order_not_created_without_ingredients(&response));
    assert_ok!(user.teardown().await);
}

#[tokio::test]
#[ignore = "hits the live burger service"]
async fn create_order_returns_500_for_unknown_ingredient_ids() {
    // Arrange
    let app = test_app();
    let user = app.registered_user().await;
    let token = user.token().expect("No session was established.");
    let order = NewOrder::new(vec![
        IngredientId::new("incorrect_hash_1"),
        IngredientId::new("incorrect_hash_2"),
    ]);

    // Act
    let response = app
        .orders_client
        .create_order(&order, token)
        .await
        .expect("Failed to execute request.");

    // Assert
    assert_ok!(check_order_not_created_incorrect_hash(&response));
    assert_ok!(user.teardown().await);
}

#[tokio::test]
#[ignore = "hits the live burger service"]
async fn get_orders_returns_the_order_just_created() {
    // Arrange
    let app = test_app();
    let user = app.registered_user().await;
    let token = user.token().expect("No session was established.");
    let order = NewOrder::new(app.two_ingredients().await);
    let created = app
        .orders_client
        .create_order(&order, token)
        .await
        .expect("Failed to execute request.");
    let receipt = created
        .order_receipt()
        .expect("The created order has no id or number.");

    // Act
    let response = app
        .orders_client
        .get_orders(token)
        .await
        .expect("Failed to execute request.");

    // Assert
    assert_ok!(check_created_order(&response, &receipt));
    assert_ok!(user.teardown().await);
}

#[tokio::test]
#[ignore = "hits the live burger service"]
async fn get_orders_returns_401_without_a_token() {
    // Arrange
    let app = test_app();

    // Act
    let response = app
        .orders_client
        .get_orders_unauthorized()
        .await
        .expect("Failed to execute request.");

    // Assert
    assert_ok!(check_get_orders_unauthorized(&response));
}
