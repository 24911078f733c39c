//! Turns a failed operation into text a person can act on.
//!
//! The client only ever returns `ApiError`. Front ends call [`alert_for`] to
//! decide what to show, so wording lives in one place and never leaks into
//! the request/response code.

use crate::error::ApiError;
use crate::service::Operation;

/// A title/message pair ready for a dialog box or a stderr line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: &'static str,
    pub message: String,
}

pub fn alert_for(operation: Operation, err: &ApiError) -> Alert {
    let action = match operation {
        Operation::List => "Could not load employees",
        Operation::Get => "Could not load employee details",
        Operation::Create => "Could not create employee",
        Operation::Update => "Could not update employee",
        Operation::Delete => "Could not delete employee",
    };
    let message = match err {
        ApiError::NotFound => format!("{action}: employee no longer exists."),
        ApiError::Network(_) => format!("{action}: check your connection and try again."),
        ApiError::Http { status, .. } => format!("{action} (server returned {status})."),
        ApiError::Decode(_) => format!("{action}: the server sent an unexpected response."),
        ApiError::Encode(_) => format!("{action}."),
    };
    Alert {
        title: "Error",
        message,
    }
}
