//! Domain DTOs for the employee API.
//!
//! # Design
//! These types mirror the mock-server's schema but are defined independently.
//! Field names match the wire format exactly (`employee_name`, ...), so no
//! serde renames are needed. Integration tests catch any schema drift between
//! the two crates.
//!
//! The client never validates these values. The form helpers at the bottom
//! of this module are for callers that collect user input.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Upper bound accepted by [`EmployeeDraft::validate`] for `employee_age`.
pub const MAX_EMPLOYEE_AGE: u32 = 100;

/// A single employee record returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Employee {
    pub id: u64,
    pub employee_name: String,
    pub employee_age: u32,
    pub employee_salary: u64,
    pub profile_image: String,
}

/// Request payload for creating a new employee. The server assigns the id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EmployeeDraft {
    pub employee_name: String,
    pub employee_age: u32,
    pub employee_salary: u64,
    pub profile_image: String,
}

impl Employee {
    /// Drop the id, e.g. to re-submit a record as a new employee.
    pub fn to_draft(&self) -> EmployeeDraft {
        EmployeeDraft {
            employee_name: self.employee_name.clone(),
            employee_age: self.employee_age,
            employee_salary: self.employee_salary,
            profile_image: self.profile_image.clone(),
        }
    }

    /// True when a field the detail form lets the user edit differs.
    ///
    /// `profile_image` is not compared: it is only chosen at creation time.
    pub fn has_changes(&self, other: &Employee) -> bool {
        self.employee_name != other.employee_name
            || self.employee_age != other.employee_age
            || self.employee_salary != other.employee_salary
    }
}

impl EmployeeDraft {
    pub fn with_id(self, id: u64) -> Employee {
        Employee {
            id,
            employee_name: self.employee_name,
            employee_age: self.employee_age,
            employee_salary: self.employee_salary,
            profile_image: self.profile_image,
        }
    }

    /// Return a copy with surrounding whitespace trimmed from the name.
    pub fn normalized(&self) -> EmployeeDraft {
        EmployeeDraft {
            employee_name: self.employee_name.trim().to_string(),
            ..self.clone()
        }
    }

    /// Check the draft the way the create form does before submitting.
    ///
    /// Returns the first failing rule.
    pub fn validate(&self) -> Result<(), FormError> {
        self.validate_edit()?;
        if self.profile_image.is_empty() {
            return Err(FormError::MissingProfileImage);
        }
        Ok(())
    }

    /// The subset of [`EmployeeDraft::validate`] the edit form applies: the
    /// image cannot be changed there, so it is not required.
    pub fn validate_edit(&self) -> Result<(), FormError> {
        if self.employee_name.trim().is_empty() {
            return Err(FormError::MissingName);
        }
        if self.employee_age > MAX_EMPLOYEE_AGE {
            return Err(FormError::AgeOutOfRange(self.employee_age));
        }
        Ok(())
    }
}

/// Rejections produced by [`EmployeeDraft::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("employee name is required")]
    MissingName,

    #[error("employee age {0} is above {max}", max = MAX_EMPLOYEE_AGE)]
    AgeOutOfRange(u32),

    #[error("a profile image is required")]
    MissingProfileImage,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> EmployeeDraft {
        EmployeeDraft {
            employee_name: "Nguyen Van A".to_string(),
            employee_age: 30,
            employee_salary: 5000,
            profile_image: "file:///tmp/a.png".to_string(),
        }
    }

    #[test]
    fn employee_serializes_with_wire_field_names() {
        let employee = draft().with_id(7);
        let json = serde_json::to_value(&employee).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["employee_name"], "Nguyen Van A");
        assert_eq!(json["employee_age"], 30);
        assert_eq!(json["employee_salary"], 5000);
        assert_eq!(json["profile_image"], "file:///tmp/a.png");
    }

    #[test]
    fn draft_serializes_without_id() {
        let json = serde_json::to_value(draft()).unwrap();
        assert!(json.get("id").is_none());
        assert_eq!(json.as_object().unwrap().len(), 4);
    }

    #[test]
    fn employee_rejects_missing_field() {
        let result: Result<Employee, _> = serde_json::from_str(
            r#"{"id":1,"employee_name":"A","employee_age":20,"employee_salary":10}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn employee_rejects_negative_salary() {
        let result: Result<Employee, _> = serde_json::from_str(
            r#"{"id":1,"employee_name":"A","employee_age":20,"employee_salary":-5,"profile_image":""}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn with_id_and_to_draft_are_inverse() {
        let employee = draft().with_id(3);
        assert_eq!(employee.id, 3);
        assert_eq!(employee.to_draft(), draft());
    }

    #[test]
    fn validate_accepts_complete_draft() {
        assert_eq!(draft().validate(), Ok(()));
    }

    #[test]
    fn validate_rejects_blank_name() {
        let input = EmployeeDraft {
            employee_name: "   ".to_string(),
            ..draft()
        };
        assert_eq!(input.validate(), Err(FormError::MissingName));
    }

    #[test]
    fn validate_rejects_age_over_limit() {
        let input = EmployeeDraft {
            employee_age: 101,
            ..draft()
        };
        assert_eq!(input.validate(), Err(FormError::AgeOutOfRange(101)));

        let boundary = EmployeeDraft {
            employee_age: MAX_EMPLOYEE_AGE,
            ..draft()
        };
        assert!(boundary.validate().is_ok());
    }

    #[test]
    fn validate_rejects_missing_image() {
        let input = EmployeeDraft {
            profile_image: String::new(),
            ..draft()
        };
        assert_eq!(input.validate(), Err(FormError::MissingProfileImage));
    }

    #[test]
    fn validate_reports_name_before_image() {
        let input = EmployeeDraft {
            employee_name: String::new(),
            profile_image: String::new(),
            ..draft()
        };
        assert_eq!(input.validate(), Err(FormError::MissingName));
    }

    #[test]
    fn validate_edit_does_not_require_image() {
        let input = EmployeeDraft {
            profile_image: String::new(),
            ..draft()
        };
        assert_eq!(input.validate_edit(), Ok(()));
    }

    #[test]
    fn normalized_trims_name_only() {
        let input = EmployeeDraft {
            employee_name: "  Tran Thi B ".to_string(),
            ..draft()
        };
        let normalized = input.normalized();
        assert_eq!(normalized.employee_name, "Tran Thi B");
        assert_eq!(normalized.profile_image, input.profile_image);
    }

    #[test]
    fn has_changes_ignores_profile_image() {
        let original = draft().with_id(1);
        let mut edited = original.clone();
        edited.profile_image = "file:///tmp/b.png".to_string();
        assert!(!original.has_changes(&edited));

        edited.employee_salary = 6000;
        assert!(original.has_changes(&edited));
    }
}
