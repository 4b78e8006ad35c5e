//! Creation payload for new employees and its validation rules.

use serde::Deserialize;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::domain::employee::NewEmployee;
use crate::forms::FormError;

const NAME_REQUIRED: &str = "Employee name is required";
const SALARY_POSITIVE: &str = "Salary must be greater than zero";
const AGE_RANGE: &str = "Age must be between 16 and 75";
const TITLE_REQUIRED: &str = "Employee title is required";

/// Fields in the order their violations are reported.
const FIELD_PRIORITY: [(&str, &str); 4] = [
    ("name", NAME_REQUIRED),
    ("salary", SALARY_POSITIVE),
    ("age", AGE_RANGE),
    ("title", TITLE_REQUIRED),
];

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default)]
/// Body of `POST /employee`.
///
/// Accepts both the record field names (`employee_name`, ...) and the short
/// names used by the upstream create call. Missing and `null` fields fail the
/// matching rule.
pub struct CreateEmployeeForm {
    #[serde(alias = "employee_name")]
    #[validate(
        required(message = "Employee name is required"),
        custom(function = "validate_not_blank", message = "Employee name is required")
    )]
    pub name: Option<String>,
    #[serde(alias = "employee_salary")]
    #[validate(
        required(message = "Salary must be greater than zero"),
        range(min = 1, message = "Salary must be greater than zero")
    )]
    pub salary: Option<i64>,
    #[serde(alias = "employee_age")]
    #[validate(
        required(message = "Age must be between 16 and 75"),
        range(min = 16, max = 75, message = "Age must be between 16 and 75")
    )]
    pub age: Option<i32>,
    #[serde(alias = "employee_title")]
    #[validate(
        required(message = "Employee title is required"),
        custom(function = "validate_not_blank", message = "Employee title is required")
    )]
    pub title: Option<String>,
    #[serde(alias = "employee_email")]
    pub email: Option<String>,
}

fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

/// Picks the highest priority violation out of the collected errors.
fn first_violation(errors: ValidationErrors) -> FormError {
    let field_errors = errors.field_errors();
    for (field, fallback) in FIELD_PRIORITY {
        let violation = field_errors
            .iter()
            .find(|(name, _)| **name == field)
            .and_then(|(_, list)| list.first());
        if let Some(violation) = violation {
            let message = violation
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| fallback.to_string());
            return FormError::Invalid(message);
        }
    }
    FormError::Validation(errors)
}

impl TryFrom<CreateEmployeeForm> for NewEmployee {
    type Error = FormError;

    fn try_from(form: CreateEmployeeForm) -> Result<Self, Self::Error> {
        if let Err(errors) = form.validate() {
            return Err(first_violation(errors));
        }

        Ok(NewEmployee::new(
            form.name.unwrap_or_default(),
            form.salary.unwrap_or_default(),
            form.age.unwrap_or_default(),
            form.title.unwrap_or_default(),
            form.email,
        ))
    }
}

/// Validates an optional creation body, rejecting an absent one first.
pub fn validate_new_employee(form: Option<CreateEmployeeForm>) -> Result<NewEmployee, FormError> {
    form.ok_or(FormError::MissingEmployee)?.try_into()
}
