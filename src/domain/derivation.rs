//! Read-only computations over a fetched snapshot of employees.
//!
//! Input order is whatever the upstream returned; nothing here re-fetches or
//! stores records.

use crate::domain::employee::Employee;
use crate::domain::types::NameFragment;

/// Number of names returned by the top earners report.
pub const TOP_EARNERS_LIMIT: usize = 10;

/// Keeps the employees whose name contains `fragment`, ignoring case.
pub fn search_by_name(employees: Vec<Employee>, fragment: &NameFragment) -> Vec<Employee> {
    employees
        .into_iter()
        .filter(|employee| fragment.matches(&employee.name))
        .collect()
}

/// Highest salary in the list, `0` when the list is empty.
pub fn max_salary(employees: &[Employee]) -> i64 {
    employees
        .iter()
        .map(|employee| employee.salary)
        .max()
        .unwrap_or(0)
}

/// Names of the `limit` best paid employees, highest salary first.
///
/// Employees with equal salaries keep their relative input order.
pub fn top_earners(mut employees: Vec<Employee>, limit: usize) -> Vec<String> {
    employees.sort_by(|a, b| b.salary.cmp(&a.salary));
    employees
        .into_iter()
        .take(limit)
        .map(|employee| employee.name)
        .collect()
}
