use burger_api::assertions::user::{
    check_user_registered_exists, check_user_registered_missing_fields,
    check_user_registered_success,
};
use claims::assert_ok;

use crate::helpers::test_app;

#[tokio::test]
#[ignore = "hits the live burger service"]
async fn register_returns_200_and_tokens_for_a_fresh_user() {
    // Arrange
    let app = test_app();
    let mut user = app.session(app.new_identity());

    // Act
    let response = user.register().await.expect("Failed to execute request.");

    // Assert
    let credentials = user.credentials();
    assert_ok!(check_user_registered_success(
        &response,
        &credentials.email,
        &credentials.name
    ));
    assert_ok!(user.teardown().await);
}

#[tokio::test]
#[ignore = "hits the live burger service"]
async fn registering_the_same_user_twice_returns_403() {
    // Arrange
    let app = test_app();
    let mut user = app.session(app.new_identity());

    // Act
    let first = user.register().await.expect("Failed to execute request.");
    let second = app
        .user_client
        .register(user.credentials())
        .await
        .expect("Failed to execute request.");

    // Assert
    let credentials = user.credentials();
    assert_ok!(check_user_registered_success(
        &first,
        &credentials.email,
        &credentials.name
    ));
    assert_ok!(check_user_registered_exists(&second));
    assert_ok!(user.teardown().await);
}

#[tokio::test]
#[ignore = "hits the live burger service"]
async fn register_returns_403_when_the_password_is_empty() {
    // Arrange
    let app = test_app();
    let mut user = app.session(app.new_identity().with_password(""));

    // Act
    let response = user.register().await.expect("Failed to execute request.");

    // Assert
    assert_ok!(check_user_registered_missing_fields(&response));
    assert!(user.token().is_none());
    assert_ok!(user.teardown().await);
}

// Table-driven: as soon as one case fails the remaining ones are not run.
#[tokio::test]
#[ignore = "hits the live burger service"]
async fn register_returns_403_when_a_field_is_empty() {
    // Arrange
    let app = test_app();
    let identity = app.new_identity();
    let test_cases = vec![
        (identity.with_email(""), "empty email"),
        (identity.with_password(""), "empty password"),
        (identity.with_name(""), "empty name"),
    ];

    for (credentials, description) in test_cases {
        let mut user = app.session(credentials);

        // Act
        let response = user.register().await.expect("Failed to execute request.");

        // Assert
        assert!(
            check_user_registered_missing_fields(&response).is_ok(),
            "The API did not fail with 403 Forbidden when the payload had an {description}: {body}",
            body = response.text()
        );
        assert_ok!(user.teardown().await);
    }
}
