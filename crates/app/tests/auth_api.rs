//! Registration and login scenarios.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

mod common;

use pretty_assertions::assert_eq;
use reqres_application::catalog::{KNOWN_EMAIL, LOGIN_PASSWORD, REGISTER_PASSWORD};
use reqres_domain::RequestSpec;
use serde_json::json;

use common::Target;

#[tokio::test]
async fn register_with_password_returns_token() {
    let target = Target::acquire().await;
    let session = target.session();

    let request = RequestSpec::post("/register")
        .with_json(json!({ "email": KNOWN_EMAIL, "password": REGISTER_PASSWORD }));
    let response = session
        .send(&request)
        .await
        .expect("POST /register should complete");

    assert_eq!(response.status, 200, "expected status 200 for a valid registration");
    let document = response.json().expect("expected the registration to be JSON");
    assert!(
        document.require("token").is_ok(),
        "expected a non-null token after registration"
    );
}

#[tokio::test]
async fn register_without_password_is_rejected() {
    let target = Target::acquire().await;
    let session = target.session();

    let request = RequestSpec::post("/register").with_json(json!({ "email": KNOWN_EMAIL }));
    let response = session
        .send(&request)
        .await
        .expect("POST /register should complete");

    assert_eq!(response.status, 400, "expected status 400 when the password is missing");
}

#[tokio::test]
async fn login_with_password_returns_token() {
    let target = Target::acquire().await;
    let session = target.session();

    let request = RequestSpec::post("/login")
        .with_json(json!({ "email": KNOWN_EMAIL, "password": LOGIN_PASSWORD }));
    let response = session
        .send(&request)
        .await
        .expect("POST /login should complete");

    assert_eq!(response.status, 200, "expected status 200 for a valid login");
    let document = response.json().expect("expected the login to be JSON");
    assert!(
        !document.str_at("token").expect("expected a token string").is_empty(),
        "expected a non-empty token after login"
    );
}

#[tokio::test]
async fn login_without_password_is_rejected() {
    let target = Target::acquire().await;
    let session = target.session();

    let request = RequestSpec::post("/login").with_json(json!({ "email": KNOWN_EMAIL }));
    let response = session
        .send(&request)
        .await
        .expect("POST /login should complete");

    assert_eq!(response.status, 400, "expected status 400 when the password is missing");
}
