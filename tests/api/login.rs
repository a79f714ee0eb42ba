use burger_api::assertions::user::{check_user_login_incorrect, check_user_login_success};
use claims::assert_ok;

use crate::helpers::test_app;

#[tokio::test]
#[ignore = "hits the live burger service"]
async fn login_returns_200_for_valid_credentials() {
    // Arrange
    let app = test_app();
    let user = app.registered_user().await;

    // Act
    let response = app
        .user_client
        .login(user.credentials())
        .await
        .expect("Failed to execute request.");

    // Assert
    let credentials = user.credentials();
    assert_ok!(check_user_login_success(
        &response,
        &credentials.email,
        &credentials.name
    ));
    assert_ok!(user.teardown().await);
}

#[tokio::test]
#[ignore = "hits the live burger service"]
async fn login_returns_401_for_an_unknown_email() {
    // Arrange
    let app = test_app();
    let user = app.registered_user().await;

    // Act
    let response = app
        .user_client
        .login(&user.credentials().with_email("email"))
        .await
        .expect("Failed to execute request.");

    // Assert
    assert_ok!(check_user_login_incorrect(&response));
    assert_ok!(user.teardown().await);
}

#[tokio::test]
#[ignore = "hits the live burger service"]
async fn login_returns_401_for_a_wrong_password() {
    // Arrange
    let app = test_app();
    let user = app.registered_user().await;

    // Act
    let response = app
        .user_client
        .login(&user.credentials().with_password("password"))
        .await
        .expect("Failed to execute request.");

    // Assert
    assert_ok!(check_user_login_incorrect(&response));
    assert_ok!(user.teardown().await);
}
