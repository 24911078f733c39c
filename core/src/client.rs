//! Stateless HTTP request builder and response parser for the employee API.
//!
//! # Design
//! `EmployeeClient` holds only the versioned API root and carries no mutable
//! state between calls. Each CRUD operation is split into a `build_*` method
//! that produces an `HttpRequest` and a `parse_*` method that consumes an
//! `HttpResponse`. The caller executes the actual HTTP round-trip, keeping
//! the core deterministic and free of I/O.

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{Employee, EmployeeDraft};

/// Versioned path prefix appended to every base URL.
pub const API_PREFIX: &str = "/api/v1";

/// Synchronous, stateless client for the employee API.
///
/// Builds `HttpRequest` values and parses `HttpResponse` values without
/// touching the network.
#[derive(Debug, Clone)]
pub struct EmployeeClient {
    api_root: String,
}

impl EmployeeClient {
    /// `base_url` is scheme, host and port, e.g. `http://localhost:3000`.
    pub fn new(base_url: &str) -> Self {
        Self {
            api_root: format!("{}{API_PREFIX}", base_url.trim_end_matches('/')),
        }
    }

    pub fn api_root(&self) -> &str {
        &self.api_root
    }

    pub fn build_list_employees(&self) -> HttpRequest {
        self.bodyless(HttpMethod::Get, "/employees".to_string())
    }

    pub fn build_get_employee(&self, id: u64) -> HttpRequest {
        self.bodyless(HttpMethod::Get, format!("/employee/{id}"))
    }

    pub fn build_create_employee(&self, draft: &EmployeeDraft) -> Result<HttpRequest, ApiError> {
        self.with_json(HttpMethod::Post, "/create".to_string(), draft)
    }

    /// The full record goes in the body, not just the id.
    pub fn build_update_employee(&self, employee: &Employee) -> Result<HttpRequest, ApiError> {
        self.with_json(HttpMethod::Put, format!("/update/{}", employee.id), employee)
    }

    pub fn build_delete_employee(&self, id: u64) -> HttpRequest {
        self.bodyless(HttpMethod::Delete, format!("/delete/{id}"))
    }

    pub fn parse_list_employees(&self, response: HttpResponse) -> Result<Vec<Employee>, ApiError> {
        check_status(&response)?;
        decode(&response)
    }

    pub fn parse_get_employee(&self, response: HttpResponse) -> Result<Employee, ApiError> {
        if response.status == 404 {
            return Err(ApiError::NotFound);
        }
        check_status(&response)?;
        decode(&response)
    }

    pub fn parse_create_employee(&self, response: HttpResponse) -> Result<Employee, ApiError> {
        check_status(&response)?;
        decode(&response)
    }

    pub fn parse_update_employee(&self, response: HttpResponse) -> Result<Employee, ApiError> {
        check_status(&response)?;
        decode(&response)
    }

    /// Any 2xx counts; the body is ignored.
    pub fn parse_delete_employee(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response)
    }

    fn bodyless(&self, method: HttpMethod, route: String) -> HttpRequest {
        let path = format!("{}{route}", self.api_root);
        debug!(%method, %path, "built request");
        HttpRequest {
            method,
            path,
            headers: Vec::new(),
            body: None,
        }
    }

    fn with_json<T: Serialize>(
        &self,
        method: HttpMethod,
        route: String,
        payload: &T,
    ) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(payload).map_err(|e| ApiError::Encode(e.to_string()))?;
        let path = format!("{}{route}", self.api_root);
        debug!(%method, %path, bytes = body.len(), "built request");
        Ok(HttpRequest {
            method,
            path,
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }
}

/// Map non-2xx status codes to `ApiError::Http`.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    Err(ApiError::Http {
        status: response.status,
        body: response.body.clone(),
    })
}

fn decode<T: DeserializeOwned>(response: &HttpResponse) -> Result<T, ApiError> {
    serde_json::from_str(&response.body).map_err(|e| ApiError::Decode(e.to_string()))
}
