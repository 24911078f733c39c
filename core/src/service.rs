//! The five logical employee operations over a real transport.
//!
//! `EmployeeService` is the object an application builds once at start-up
//! and hands to whatever needs employee data. Each call is one
//! build → execute → parse round-trip. Nothing is retried or cached.

use std::fmt;

use tracing::{debug, warn};

use crate::client::EmployeeClient;
use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::transport::{Transport, UreqTransport};
use crate::types::{Employee, EmployeeDraft};

/// One of the five logical operations, used for logging and user messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    List,
    Get,
    Create,
    Update,
    Delete,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::List => "list",
            Operation::Get => "get",
            Operation::Create => "create",
            Operation::Update => "update",
            Operation::Delete => "delete",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct EmployeeService<T = UreqTransport> {
    client: EmployeeClient,
    transport: T,
}

impl EmployeeService<UreqTransport> {
    /// Build a service that talks to `config.base_url` over ureq.
    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(EmployeeClient::new(&config.base_url), UreqTransport::new(config))
    }
}

impl<T: Transport> EmployeeService<T> {
    pub fn new(client: EmployeeClient, transport: T) -> Self {
        Self { client, transport }
    }

    pub fn client(&self) -> &EmployeeClient {
        &self.client
    }

    pub fn list(&self) -> Result<Vec<Employee>, ApiError> {
        let request = self.client.build_list_employees();
        self.round_trip(Operation::List, request, |c, r| c.parse_list_employees(r))
    }

    pub fn get_by_id(&self, id: u64) -> Result<Employee, ApiError> {
        let request = self.client.build_get_employee(id);
        self.round_trip(Operation::Get, request, |c, r| c.parse_get_employee(r))
    }

    pub fn create(&self, draft: &EmployeeDraft) -> Result<Employee, ApiError> {
        let request = self.client.build_create_employee(draft)?;
        self.round_trip(Operation::Create, request, |c, r| c.parse_create_employee(r))
    }

    pub fn update(&self, employee: &Employee) -> Result<Employee, ApiError> {
        let request = self.client.build_update_employee(employee)?;
        self.round_trip(Operation::Update, request, |c, r| c.parse_update_employee(r))
    }

    pub fn delete_by_id(&self, id: u64) -> Result<(), ApiError> {
        let request = self.client.build_delete_employee(id);
        self.round_trip(Operation::Delete, request, |c, r| c.parse_delete_employee(r))
    }

    fn round_trip<R>(
        &self,
        operation: Operation,
        request: HttpRequest,
        parse: impl FnOnce(&EmployeeClient, HttpResponse) -> Result<R, ApiError>,
    ) -> Result<R, ApiError> {
        let result = self.transport.execute(request).and_then(|response| {
            debug!(%operation, status = response.status, "response received");
            parse(&self.client, response)
        });
        if let Err(err) = &result {
            warn!(%operation, status = ?err.status(), error = %err, "employee request failed");
        }
        result
    }
}
