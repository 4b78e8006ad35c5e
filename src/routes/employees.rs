use actix_web::{HttpResponse, Responder, ResponseError, delete, get, post, web};

use crate::forms::employee::CreateEmployeeForm;
use crate::repository::HttpEmployeeRepository;
use crate::services::employees as employees_service;

#[get("")]
pub async fn list_employees(repo: web::Data<HttpEmployeeRepository>) -> impl Responder {
    match employees_service::list_employees(repo.get_ref()).await {
        Ok(employees) => HttpResponse::Ok().json(employees),
        Err(err) => err.error_response(),
    }
}

#[get("/search/{fragment:.*}")]
pub async fn search_employees(
    fragment: web::Path<String>,
    repo: web::Data<HttpEmployeeRepository>,
) -> impl Responder {
    match employees_service::search_employees(repo.get_ref(), &fragment).await {
        Ok(employees) => HttpResponse::Ok().json(employees),
        Err(err) => err.error_response(),
    }
}

#[get("/highestSalary")]
pub async fn highest_salary(repo: web::Data<HttpEmployeeRepository>) -> impl Responder {
    match employees_service::highest_salary(repo.get_ref()).await {
        Ok(salary) => HttpResponse::Ok().json(salary),
        Err(err) => err.error_response(),
    }
}

#[get("/topTenHighestEarningEmployeeNames")]
pub async fn top_ten_highest_earning_employee_names(
    repo: web::Data<HttpEmployeeRepository>,
) -> impl Responder {
    match employees_service::top_ten_earner_names(repo.get_ref()).await {
        Ok(names) => HttpResponse::Ok().json(names),
        Err(err) => err.error_response(),
    }
}

#[get("/{id}")]
pub async fn get_employee(
    id: web::Path<String>,
    repo: web::Data<HttpEmployeeRepository>,
) -> impl Responder {
    match employees_service::get_employee(repo.get_ref(), &id).await {
        Ok(employee) => HttpResponse::Ok().json(employee),
        Err(err) => err.error_response(),
    }
}

#[post("")]
pub async fn create_employee(
    repo: web::Data<HttpEmployeeRepository>,
    web::Json(form): web::Json<Option<CreateEmployeeForm>>,
) -> impl Responder {
    match employees_service::create_employee(repo.get_ref(), form).await {
        Ok(employee) => HttpResponse::Ok().json(employee),
        Err(err) => err.error_response(),
    }
}

#[delete("/{id}")]
pub async fn delete_employee(
    id: web::Path<String>,
    repo: web::Data<HttpEmployeeRepository>,
) -> impl Responder {
    match employees_service::delete_employee(repo.get_ref(), &id).await {
        Ok(deleted) => HttpResponse::Ok().json(deleted),
        Err(err) => err.error_response(),
    }
}
