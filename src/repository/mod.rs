//! Ports to the upstream employee service and their HTTP adapter.

use async_trait::async_trait;

use crate::domain::employee::{Employee, NewEmployee};
use crate::domain::types::EmployeeId;
use crate::repository::errors::RepositoryResult;

pub mod employee;
pub mod envelope;
pub mod errors;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;
pub mod upstream;

pub use employee::HttpEmployeeRepository;

#[async_trait]
pub trait EmployeeReader: Send + Sync {
    async fn list_employees(&self) -> RepositoryResult<Vec<Employee>>;
    async fn get_employee_by_id(&self, id: &EmployeeId) -> RepositoryResult<Employee>;
}

#[async_trait]
pub trait EmployeeWriter: Send + Sync {
    async fn create_employee(&self, new_employee: &NewEmployee) -> RepositoryResult<Employee>;
    async fn delete_employee(&self, id: &EmployeeId) -> RepositoryResult<()>;
}
