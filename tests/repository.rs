use std::time::Duration;

use employee_api::domain::employee::NewEmployee;
use employee_api::domain::types::EmployeeId;
use employee_api::repository::errors::RepositoryError;
use employee_api::repository::{EmployeeReader, EmployeeWriter, HttpEmployeeRepository};
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

mod common;

use common::{UPSTREAM_PATH, employee_json, envelope};

#[actix_web::test]
async fn lists_employees_in_upstream_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(UPSTREAM_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!([
            employee_json("1", "Al", 100),
            employee_json("2", "Bo", 300),
        ]))))
        .expect(1)
        .mount(&server)
        .await;

    let repo = common::repository(&server);
    let employees = repo.list_employees().await.unwrap();

    let names: Vec<&str> = employees.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["Al", "Bo"]);
    assert_eq!(employees[1].salary, 300);
}

#[actix_web::test]
async fn fetches_one_employee_with_encoded_id() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("{UPSTREAM_PATH}/a%20b")))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(envelope(employee_json("a b", "Cy", 300))),
        )
        .expect(1)
        .mount(&server)
        .await;

    let repo = common::repository(&server);
    let employee = repo
        .get_employee_by_id(&EmployeeId::new("a b").unwrap())
        .await
        .unwrap();

    assert_eq!(employee.name, "Cy");
}

#[actix_web::test]
async fn creates_employee_with_upstream_input_shape() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(UPSTREAM_PATH))
        .and(body_json(json!({
            "name": "Jane Doe",
            "salary": 120000,
            "age": 41,
            "title": "Architect",
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(envelope(employee_json("new-id", "Jane Doe", 120000))),
        )
        .expect(1)
        .mount(&server)
        .await;

    let repo = common::repository(&server);
    let new_employee = NewEmployee::new(
        "Jane Doe".to_string(),
        120000,
        41,
        "Architect".to_string(),
        None,
    );
    let created = repo.create_employee(&new_employee).await.unwrap();

    assert_eq!(created.id.as_str(), "new-id");
    assert_eq!(created.salary, 120000);
}

#[actix_web::test]
async fn deletes_employee() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path(format!("{UPSTREAM_PATH}/abc")))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!(true))))
        .expect(1)
        .mount(&server)
        .await;

    let repo = common::repository(&server);

    repo.delete_employee(&EmployeeId::new("abc").unwrap())
        .await
        .unwrap();
}

#[actix_web::test]
async fn empty_success_body_is_accepted_for_delete() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path(format!("{UPSTREAM_PATH}/abc")))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let repo = common::repository(&server);

    assert!(
        repo.delete_employee(&EmployeeId::new("abc").unwrap())
            .await
            .is_ok()
    );
}

#[actix_web::test]
async fn non_success_status_is_reported_with_code() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("{UPSTREAM_PATH}/missing")))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not Found"))
        .mount(&server)
        .await;

    let repo = common::repository(&server);
    let result = repo
        .get_employee_by_id(&EmployeeId::new("missing").unwrap())
        .await;

    match result {
        Err(RepositoryError::Status { status, message }) => {
            assert_eq!(status, 404);
            assert_eq!(message, "Not Found");
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[actix_web::test]
async fn rate_limited_upstream_is_not_retried() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(UPSTREAM_PATH))
        .respond_with(ResponseTemplate::new(429))
        .expect(1)
        .mount(&server)
        .await;

    let repo = common::repository(&server);

    assert!(matches!(
        repo.list_employees().await,
        Err(RepositoryError::Status { status: 429, .. })
    ));
}

#[actix_web::test]
async fn slow_upstream_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(UPSTREAM_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(envelope(json!([])))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let repo = HttpEmployeeRepository::new(common::upstream_client(
        &server,
        Duration::from_millis(200),
    ));

    assert!(matches!(
        repo.list_employees().await,
        Err(RepositoryError::Timeout(_))
    ));
}

#[actix_web::test]
async fn body_that_is_not_an_object_fails_decoding() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(UPSTREAM_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([1, 2, 3])))
        .mount(&server)
        .await;

    let repo = common::repository(&server);

    assert!(matches!(
        repo.list_employees().await,
        Err(RepositoryError::Decode(_))
    ));
}

#[actix_web::test]
async fn envelope_without_data_fails_decoding() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(UPSTREAM_PATH))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"status": "Failed to process"})),
        )
        .mount(&server)
        .await;

    let repo = common::repository(&server);

    assert!(matches!(
        repo.list_employees().await,
        Err(RepositoryError::Decode(_))
    ));
}
