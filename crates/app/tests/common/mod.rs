//! Shared fixtures for the integration tests.
//!
//! By default every test gets its own in-process substitute of the reqres
//! API on an ephemeral local port. Setting `REQRES_BASE_URL` (plus
//! `REQRES_API_KEY` for the public service) runs the same tests against a
//! live endpoint instead.
#![allow(dead_code, clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::net::SocketAddr;
use std::time::Duration;

use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::{SecondsFormat, Utc};
use reqres_probe::{ProbeConfig, ProbeSession, logging};
use serde_json::{Map, Value, json};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use url::Url;

/// Token handed out for successful registration and login.
pub const TOKEN: &str = "QpwL5tke4Pnpja7X4";

const USERS: [(u32, &str, &str); 12] = [
    (1, "George", "Bluth"),
    (2, "Janet", "Weaver"),
    (3, "Emma", "Wong"),
    (4, "Eve", "Holt"),
    (5, "Charles", "Morris"),
    (6, "Tracey", "Ramos"),
    (7, "Michael", "Lawson"),
    (8, "Lindsay", "Ferguson"),
    (9, "Tobias", "Funke"),
    (10, "Byron", "Fields"),
    (11, "George", "Edwards"),
    (12, "Rachel", "Howell"),
];
const PER_PAGE: usize = 6;

/// Endpoint the tests run against, with its server when it is a substitute.
pub struct Target {
    pub config: ProbeConfig,
    server: Option<Substitute>,
}

impl Target {
    /// Picks the live endpoint when `REQRES_BASE_URL` is set, otherwise
    /// starts a substitute.
    pub async fn acquire() -> Self {
        logging::init_for_tests();
        if std::env::var_os("REQRES_BASE_URL").is_some() {
            let config = ProbeConfig::load().expect("REQRES_* configuration should be valid");
            return Self {
                config,
                server: None,
            };
        }

        let server = Substitute::spawn().await;
        Self {
            config: ProbeConfig::for_base_url(server.base_url()),
            server: Some(server),
        }
    }

    /// Opens a fresh session; dropping it is the teardown.
    pub fn session(&self) -> ProbeSession {
        ProbeSession::open(&self.config).expect("HTTP client should build")
    }
}

/// In-process stand-in for the reqres API.
pub struct Substitute {
    addr: SocketAddr,
    handle: JoinHandle<()>,
}

impl Substitute {
    pub async fn spawn() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("substitute should bind an ephemeral port");
        let addr = listener.local_addr().expect("bound listener has an address");
        let handle = tokio::spawn(async move {
            axum::serve(listener, router())
                .await
                .expect("substitute server crashed");
        });
        Self { addr, handle }
    }

    pub fn base_url(&self) -> Url {
        Url::parse(&format!("http://{}/api", self.addr)).expect("local URL is valid")
    }
}

impl Drop for Substitute {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

fn router() -> Router {
    let api = Router::new()
        .route("/users", get(list_users).post(create_user))
        .route(
            "/users/{id}",
            get(get_user)
                .put(update_user)
                .patch(update_user)
                .delete(delete_user),
        )
        .route("/register", post(register))
        .route("/login", post(login));
    Router::new().nest("/api", api)
}

fn user(id: u32, first: &str, last: &str) -> Value {
    json!({
        "id": id,
        "email": format!("{}.{}@reqres.in", first.to_lowercase(), last.to_lowercase()),
        "first_name": first,
        "last_name": last,
        "avatar": format!("https://reqres.in/img/faces/{id}-image.jpg"),
    })
}

fn find_user_by_email(email: &str) -> Option<u32> {
    USERS
        .iter()
        .map(|(id, first, last)| (*id, user(*id, first, last)))
        .find(|(_, u)| u["email"] == email)
        .map(|(id, _)| id)
}

fn now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn error(message: &str) -> Response {
    (StatusCode::BAD_REQUEST, Json(json!({ "error": message }))).into_response()
}

#[derive(serde::Deserialize)]
struct ListParams {
    page: Option<usize>,
    delay: Option<u64>,
}

async fn list_users(Query(params): Query<ListParams>) -> Json<Value> {
    if let Some(delay) = params.delay {
        tokio::time::sleep(Duration::from_secs(delay)).await;
    }
    let page = params.page.unwrap_or(1).max(1);
    let data: Vec<Value> = USERS
        .iter()
        .skip((page - 1) * PER_PAGE)
        .take(PER_PAGE)
        .map(|(id, first, last)| user(*id, first, last))
        .collect();

    Json(json!({
        "page": page,
        "per_page": PER_PAGE,
        "total": USERS.len(),
        "total_pages": USERS.len().div_ceil(PER_PAGE),
        "data": data,
    }))
}

async fn get_user(Path(id): Path<u32>) -> Response {
    USERS.iter().find(|(uid, _, _)| *uid == id).map_or_else(
        || (StatusCode::NOT_FOUND, Json(json!({}))).into_response(),
        |(id, first, last)| Json(json!({ "data": user(*id, first, last) })).into_response(),
    )
}

async fn create_user(Json(mut body): Json<Map<String, Value>>) -> Response {
    body.insert("id".to_string(), json!("123"));
    body.insert("createdAt".to_string(), json!(now()));
    (StatusCode::CREATED, Json(body)).into_response()
}

async fn update_user(
    Path(_id): Path<u32>,
    Json(mut body): Json<Map<String, Value>>,
) -> Json<Map<String, Value>> {
    body.insert("updatedAt".to_string(), json!(now()));
    Json(body)
}

async fn delete_user(Path(_id): Path<u32>) -> StatusCode {
    StatusCode::NO_CONTENT
}

#[derive(serde::Deserialize)]
struct Credentials {
    email: Option<String>,
    password: Option<String>,
}

async fn register(Json(credentials): Json<Credentials>) -> Response {
    let Some(email) = credentials.email else {
        return error("Missing email or username");
    };
    if credentials.password.is_none() {
        return error("Missing password");
    }
    find_user_by_email(&email).map_or_else(
        || error("Note: Only defined users succeed registration"),
        |id| Json(json!({ "id": id, "token": TOKEN })).into_response(),
    )
}

async fn login(Json(credentials): Json<Credentials>) -> Response {
    let Some(email) = credentials.email else {
        return error("Missing email or username");
    };
    if credentials.password.is_none() {
        return error("Missing password");
    }
    if find_user_by_email(&email).is_none() {
        return error("user not found");
    }
    Json(json!({ "token": TOKEN })).into_response()
}
