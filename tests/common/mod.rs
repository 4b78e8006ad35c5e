#![allow(dead_code)]

use std::time::Duration;

use employee_api::repository::HttpEmployeeRepository;
use employee_api::repository::upstream::UpstreamClient;
use serde_json::{Value, json};
use wiremock::MockServer;

/// Path of the employee resource on the mock upstream.
pub const UPSTREAM_PATH: &str = "/api/v1/employee";

pub fn employee_json(id: &str, name: &str, salary: i64) -> Value {
    json!({
        "id": id,
        "employee_name": name,
        "employee_salary": salary,
        "employee_age": 30,
        "employee_title": "Engineer",
        "employee_email": format!("{}@company.com", name.to_lowercase().replace(' ', ".")),
    })
}

/// Wraps `data` the way the upstream service does.
pub fn envelope(data: Value) -> Value {
    json!({
        "data": data,
        "status": "Successfully processed request.",
    })
}

pub fn upstream_client(server: &MockServer, read_timeout: Duration) -> UpstreamClient {
    UpstreamClient::new(
        &format!("{}{UPSTREAM_PATH}", server.uri()),
        Duration::from_secs(5),
        read_timeout,
    )
    .expect("valid upstream client")
}

pub fn repository(server: &MockServer) -> HttpEmployeeRepository {
    HttpEmployeeRepository::new(upstream_client(server, Duration::from_secs(5)))
}
