use std::time::Duration;

use async_trait::async_trait;
use reqwest::Method;
use serde::Serialize;

use crate::domain::employee::{Employee, NewEmployee};
use crate::domain::types::EmployeeId;
use crate::models::config::ServerConfig;
use crate::repository::envelope::EmployeeEnvelope;
use crate::repository::errors::RepositoryResult;
use crate::repository::upstream::UpstreamClient;
use crate::repository::{EmployeeReader, EmployeeWriter};

/// Create-input shape expected by the upstream service.
#[derive(Debug, Serialize)]
struct CreateEmployeeRequest<'a> {
    name: &'a str,
    salary: i64,
    age: i32,
    title: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    email: Option<&'a str>,
}

impl<'a> From<&'a NewEmployee> for CreateEmployeeRequest<'a> {
    fn from(employee: &'a NewEmployee) -> Self {
        Self {
            name: employee.name.as_str(),
            salary: employee.salary,
            age: employee.age,
            title: employee.title.as_str(),
            email: employee.email.as_deref(),
        }
    }
}

/// Employee repository backed by the upstream HTTP service.
#[derive(Clone, Debug)]
pub struct HttpEmployeeRepository {
    client: UpstreamClient,
    envelope: EmployeeEnvelope,
}

impl HttpEmployeeRepository {
    pub fn new(client: UpstreamClient) -> Self {
        Self {
            client,
            envelope: EmployeeEnvelope::default(),
        }
    }

    /// Builds the repository from the upstream settings of the server config.
    pub fn from_config(config: &ServerConfig) -> RepositoryResult<Self> {
        let client = UpstreamClient::new(
            &config.upstream_url,
            Duration::from_secs(config.connect_timeout_secs),
            Duration::from_secs(config.read_timeout_secs),
        )?;
        Ok(Self::new(client))
    }
}

#[async_trait]
impl EmployeeReader for HttpEmployeeRepository {
    async fn list_employees(&self) -> RepositoryResult<Vec<Employee>> {
        let body = self.client.send::<()>(Method::GET, &[], None).await?;
        self.envelope.unwrap_list(body)
    }

    async fn get_employee_by_id(&self, id: &EmployeeId) -> RepositoryResult<Employee> {
        let body = self
            .client
            .send::<()>(Method::GET, &[id.as_str()], None)
            .await?;
        self.envelope.unwrap_one(body)
    }
}

#[async_trait]
impl EmployeeWriter for HttpEmployeeRepository {
    async fn create_employee(&self, new_employee: &NewEmployee) -> RepositoryResult<Employee> {
        let request = CreateEmployeeRequest::from(new_employee);
        let body = self
            .client
            .send(Method::POST, &[], Some(&request))
            .await?;
        self.envelope.unwrap_one(body)
    }

    async fn delete_employee(&self, id: &EmployeeId) -> RepositoryResult<()> {
        self.client
            .send::<()>(Method::DELETE, &[id.as_str()], None)
            .await?;
        Ok(())
    }
}
