//! Mock repository implementations for isolating services in tests.

use async_trait::async_trait;
use mockall::mock;

use crate::domain::employee::{Employee, NewEmployee};
use crate::domain::types::EmployeeId;
use crate::repository::errors::RepositoryResult;
use crate::repository::{EmployeeReader, EmployeeWriter};

mock! {
    pub Repository {}

    #[async_trait]
    impl EmployeeReader for Repository {
        async fn list_employees(&self) -> RepositoryResult<Vec<Employee>>;
        async fn get_employee_by_id(&self, id: &EmployeeId) -> RepositoryResult<Employee>;
    }

    #[async_trait]
    impl EmployeeWriter for Repository {
        async fn create_employee(&self, new_employee: &NewEmployee) -> RepositoryResult<Employee>;
        async fn delete_employee(&self, id: &EmployeeId) -> RepositoryResult<()>;
    }
}
