//! Execute Request use case
//!
//! Validates a request and sends it through the `HttpClient` port. There is
//! no retry: a transport failure is returned to the caller as-is.

use std::sync::Arc;

use reqres_domain::{RequestSpec, ResponseSpec};

use crate::ApplicationResult;
use crate::ports::HttpClient;

/// Use case for executing HTTP requests.
///
/// # Example
///
/// ```ignore
/// let use_case = ExecuteRequest::new(Arc::new(ReqwestHttpClient::new(&settings)?));
/// let response = use_case.execute(&RequestSpec::get("/users")).await?;
/// ```
pub struct ExecuteRequest<C: HttpClient> {
    client: Arc<C>,
}

impl<C: HttpClient> ExecuteRequest<C> {
    /// Creates a new `ExecuteRequest` use case with the given HTTP client.
    pub const fn new(client: Arc<C>) -> Self {
        Self { client }
    }

    /// Executes the request and returns the response.
    ///
    /// # Errors
    ///
    /// Returns `Domain` if the request is malformed and `Http` if the
    /// transport fails.
    pub async fn execute(&self, request: &RequestSpec) -> ApplicationResult<ResponseSpec> {
        request.validate()?;
        let response = self.client.execute(request).await?;
        Ok(response)
    }
}
