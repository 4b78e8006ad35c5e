//! Employee operations exposed by the API.
//!
//! Every operation performs a fresh upstream call; derived reads reduce the
//! full list client-side. Upstream failures are translated here: collection
//! calls become [`ServiceError::Unavailable`], id-scoped calls become
//! [`ServiceError::NotFound`].

use crate::domain::derivation::{self, TOP_EARNERS_LIMIT};
use crate::domain::employee::Employee;
use crate::domain::types::{EmployeeId, NameFragment};
use crate::forms::employee::{CreateEmployeeForm, validate_new_employee};
use crate::repository::{EmployeeReader, EmployeeWriter};
use crate::services::{ServiceError, ServiceResult};

/// Fetches every employee known to the upstream service.
pub async fn list_employees<R>(repo: &R) -> ServiceResult<Vec<Employee>>
where
    R: EmployeeReader + ?Sized,
{
    let employees = repo.list_employees().await.map_err(|err| {
        log::error!("Error retrieving employees: {err}");
        ServiceError::Unavailable(format!("Failed to retrieve employees: {err}"))
    })?;

    log::info!("Retrieved {} employees", employees.len());
    Ok(employees)
}

/// Returns the employees whose name contains `fragment`, ignoring case.
pub async fn search_employees<R>(repo: &R, fragment: &str) -> ServiceResult<Vec<Employee>>
where
    R: EmployeeReader + ?Sized,
{
    let fragment = NameFragment::new(fragment)?;

    let employees = list_employees(repo).await?;

    Ok(derivation::search_by_name(employees, &fragment))
}

/// Fetches a single employee by its upstream identifier.
pub async fn get_employee<R>(repo: &R, id: &str) -> ServiceResult<Employee>
where
    R: EmployeeReader + ?Sized,
{
    let not_found = || ServiceError::NotFound(format!("Employee not found with ID: {id}"));

    let employee_id = EmployeeId::new(id).map_err(|_| not_found())?;

    let employee = repo
        .get_employee_by_id(&employee_id)
        .await
        .map_err(|err| {
            log::error!("Error retrieving employee with ID {employee_id}: {err}");
            not_found()
        })?;

    log::info!("Retrieved employee with ID: {employee_id}");
    Ok(employee)
}

/// Highest salary across all employees, `0` when there are none.
pub async fn highest_salary<R>(repo: &R) -> ServiceResult<i64>
where
    R: EmployeeReader + ?Sized,
{
    let employees = list_employees(repo).await?;
    Ok(derivation::max_salary(&employees))
}

/// Names of the ten best paid employees, highest salary first.
pub async fn top_ten_earner_names<R>(repo: &R) -> ServiceResult<Vec<String>>
where
    R: EmployeeReader + ?Sized,
{
    let employees = list_employees(repo).await?;
    Ok(derivation::top_earners(employees, TOP_EARNERS_LIMIT))
}

/// Validates the candidate and creates it upstream.
///
/// Validation runs before any upstream call.
pub async fn create_employee<R>(
    repo: &R,
    form: Option<CreateEmployeeForm>,
) -> ServiceResult<Employee>
where
    R: EmployeeWriter + ?Sized,
{
    let new_employee = validate_new_employee(form).map_err(|err| {
        log::warn!("Rejected employee creation: {err}");
        ServiceError::from(err)
    })?;

    let employee = repo.create_employee(&new_employee).await.map_err(|err| {
        log::error!("Error creating employee: {err}");
        ServiceError::Unavailable(format!("Failed to create employee: {err}"))
    })?;

    log::info!("Created employee: {}", employee.name);
    Ok(employee)
}

/// Deletes an employee upstream and returns its identifier.
pub async fn delete_employee<R>(repo: &R, id: &str) -> ServiceResult<String>
where
    R: EmployeeWriter + ?Sized,
{
    let not_found = || ServiceError::NotFound(format!("Employee not found: {id}"));

    let employee_id = EmployeeId::new(id).map_err(|_| not_found())?;

    repo.delete_employee(&employee_id).await.map_err(|err| {
        log::error!("Error deleting employee {employee_id}: {err}");
        not_found()
    })?;

    log::info!("Deleted employee: {employee_id}");
    Ok(employee_id.into_inner())
}
