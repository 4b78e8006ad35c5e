use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::types::EmployeeId;

/// Employee record as exposed by the API and returned by the upstream service.
///
/// Field names follow the upstream wire format. Keys the facade does not
/// interpret are kept in `extra` and written back unchanged.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Employee {
    pub id: EmployeeId,
    #[serde(rename = "employee_name")]
    pub name: String,
    #[serde(rename = "employee_salary")]
    pub salary: i64,
    #[serde(rename = "employee_age")]
    pub age: i32,
    #[serde(rename = "employee_title")]
    pub title: String,
    #[serde(
        rename = "employee_email",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub email: Option<String>,
    /// Descriptive fields passed through without interpretation.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Candidate employee that passed creation validation.
#[derive(Clone, Debug, PartialEq)]
pub struct NewEmployee {
    pub name: String,
    pub salary: i64,
    pub age: i32,
    pub title: String,
    pub email: Option<String>,
}

impl NewEmployee {
    #[must_use]
    pub fn new(
        name: String,
        salary: i64,
        age: i32,
        title: String,
        email: Option<String>,
    ) -> Self {
        Self {
            name: name.trim().to_string(),
            salary,
            age,
            title: title.trim().to_string(),
            email: email
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
        }
    }
}
