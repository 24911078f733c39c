//! One function per subcommand, each returning the JSON to print.
//!
//! API failures are wrapped so the outermost message is the `alert_for`
//! text; the `ApiError` stays in the chain for `{:#}` and debug logging.

use anyhow::Context;
use employee_core::{
    alert_for, ApiError, Employee, EmployeeDraft, EmployeeService, Operation, Transport,
};
use serde_json::{json, Value};
use tracing::info;

use crate::Command;

pub(crate) fn execute<T: Transport>(command: Command, service: &EmployeeService<T>) -> anyhow::Result<Value> {
    match command {
        Command::List => {
            let employees = report(Operation::List, service.list())?;
            Ok(serde_json::to_value(employees)?)
        }
        Command::Get { id } => {
            let employee = report(Operation::Get, service.get_by_id(id))?;
            Ok(serde_json::to_value(employee)?)
        }
        Command::Create {
            name,
            age,
            salary,
            image,
        } => {
            let draft = EmployeeDraft {
                employee_name: name,
                employee_age: age,
                employee_salary: salary,
                profile_image: image,
            }
            .normalized();
            draft.validate().context("employee not created")?;
            let created = report(Operation::Create, service.create(&draft))?;
            info!(id = created.id, "employee created");
            Ok(serde_json::to_value(created)?)
        }
        Command::Update {
            id,
            name,
            age,
            salary,
            image,
        } => {
            let current = report(Operation::Get, service.get_by_id(id))?;
            let edited = apply_edits(&current, name, age, salary, image);
            if !current.has_changes(&edited) && edited.profile_image == current.profile_image {
                info!(id, "no changes to save");
                return Ok(serde_json::to_value(current)?);
            }
            edited.to_draft().validate_edit().context("employee not updated")?;
            let updated = report(Operation::Update, service.update(&edited))?;
            Ok(serde_json::to_value(updated)?)
        }
        Command::Delete { id } => {
            report(Operation::Delete, service.delete_by_id(id))?;
            info!(id, "employee deleted");
            Ok(json!({ "deleted": id }))
        }
    }
}

/// Wrap an API failure with the message a user should see.
fn report<R>(operation: Operation, result: Result<R, ApiError>) -> anyhow::Result<R> {
    result.map_err(|err| {
        let alert = alert_for(operation, &err);
        anyhow::Error::new(err).context(alert.message)
    })
}

fn apply_edits(
    current: &Employee,
    name: Option<String>,
    age: Option<u32>,
    salary: Option<u64>,
    image: Option<String>,
) -> Employee {
    let mut edited = current.clone();
    if let Some(name) = name {
        edited.employee_name = name.trim().to_string();
    }
    if let Some(age) = age {
        edited.employee_age = age;
    }
    if let Some(salary) = salary {
        edited.employee_salary = salary;
    }
    if let Some(image) = image {
        edited.profile_image = image;
    }
    edited
}
