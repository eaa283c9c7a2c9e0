//! The reqres scenario catalog.
//!
//! Twelve independent scenarios covering user CRUD, registration and login.
//! None of them depends on the outcome of another.

use reqres_domain::{RequestSpec, Scenario};
use serde_json::json;

use crate::{ApplicationError, ApplicationResult};

/// Account the reqres service accepts for registration and login.
pub const KNOWN_EMAIL: &str = "eve.holt@reqres.in";

/// Password used for a successful registration.
pub const REGISTER_PASSWORD: &str = "pistol";

/// Password used for a successful login.
pub const LOGIN_PASSWORD: &str = "cityslicka";

/// Id of a user that exists.
pub const EXISTING_USER_ID: u32 = 2;

/// Id of a user that does not exist.
pub const MISSING_USER_ID: u32 = 999;

/// Server-side delay, in seconds, requested by the slow scenario.
pub const SLOW_DELAY_SECS: u32 = 3;

/// Returns every scenario, in a stable order.
#[must_use]
pub fn scenarios() -> Vec<Scenario> {
    let user = format!("/users/{EXISTING_USER_ID}");

    vec![
        Scenario::new("list_users", RequestSpec::get("/users"))
            .expect_status(200)
            .expect_body(),
        Scenario::new("get_single_user", RequestSpec::get(user.as_str()))
            .expect_status(200)
            .expect_json("data.id", &EXISTING_USER_ID.to_string()),
        Scenario::new(
            "get_missing_user",
            RequestSpec::get(format!("/users/{MISSING_USER_ID}")),
        )
        .expect_status(404),
        Scenario::new(
            "create_user",
            RequestSpec::post("/users").with_json(json!({ "name": "morpheus", "job": "leader" })),
        )
        .expect_status(201)
        .expect_json("name", "morpheus")
        .expect_json("job", "leader"),
        Scenario::new(
            "update_user",
            RequestSpec::put(user.as_str())
                .with_json(json!({ "name": "morpheus", "job": "zion resident" })),
        )
        .expect_status(200)
        .expect_json("name", "morpheus")
        .expect_json("job", "zion resident"),
        Scenario::new(
            "patch_user",
            RequestSpec::patch(user.as_str()).with_json(json!({ "job": "updated job" })),
        )
        .expect_status(200)
        .expect_json("job", "updated job"),
        Scenario::new("delete_user", RequestSpec::delete(user.as_str())).expect_status(204),
        Scenario::new(
            "register_success",
            RequestSpec::post("/register")
                .with_json(json!({ "email": KNOWN_EMAIL, "password": REGISTER_PASSWORD })),
        )
        .expect_status(200)
        .expect_present("token"),
        Scenario::new(
            "register_missing_password",
            RequestSpec::post("/register").with_json(json!({ "email": KNOWN_EMAIL })),
        )
        .expect_status(400),
        Scenario::new(
            "login_success",
            RequestSpec::post("/login")
                .with_json(json!({ "email": KNOWN_EMAIL, "password": LOGIN_PASSWORD })),
        )
        .expect_status(200)
        .expect_present("token"),
        Scenario::new(
            "login_missing_password",
            RequestSpec::post("/login").with_json(json!({ "email": KNOWN_EMAIL })),
        )
        .expect_status(400),
        Scenario::new(
            "delayed_response",
            RequestSpec::get("/users").with_query("delay", SLOW_DELAY_SECS),
        )
        .expect_status(200)
        .expect_body(),
    ]
}

/// Looks up a scenario by name.
///
/// # Errors
///
/// Returns `NotFound` if no scenario has that name.
pub fn find(name: &str) -> ApplicationResult<Scenario> {
    scenarios()
        .into_iter()
        .find(|s| s.name == name)
        .ok_or_else(|| ApplicationError::NotFound(format!("scenario '{name}'")))
}
