//! HTTP routes of the employee API.

use actix_web::web;

pub mod employees;
pub mod errors;

use employees::{
    create_employee, delete_employee, get_employee, highest_salary, list_employees,
    search_employees, top_ten_highest_earning_employee_names,
};
use errors::{json_error_handler, not_found};

/// Registers the employee routes, JSON body errors and the route fallback.
///
/// The fixed `GET` paths are registered ahead of `/{id}` so they are not
/// captured as identifiers.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .service(
            web::scope("/employee")
                .service(list_employees)
                .service(create_employee)
                .service(highest_salary)
                .service(top_ten_highest_earning_employee_names)
                .service(search_employees)
                .service(get_employee)
                .service(delete_employee),
        )
        .default_service(web::to(not_found));
}
