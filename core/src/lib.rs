//! API client core for the employee service.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern). `EmployeeService` pairs the
//! client with a `Transport` for callers that just want typed results.
//!
//! # Design
//! - `EmployeeClient` is stateless: it holds only the `/api/v1` root URL.
//! - Each CRUD operation is split into `build_*` (produces request) and
//!   `parse_*` (consumes response), so the I/O boundary is explicit.
//! - Types use owned `String` / `Vec` fields to simplify FFI mapping.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.
//! - Errors are typed (`ApiError`); user-facing wording lives in `alert`.

pub mod alert;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod service;
pub mod transport;
pub mod types;

pub use alert::{alert_for, Alert};
pub use client::{EmployeeClient, API_PREFIX};
pub use config::{ClientConfig, ConfigError};
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use service::{EmployeeService, Operation};
pub use transport::{Transport, UreqTransport};
pub use types::{Employee, EmployeeDraft, FormError};
