//! Strongly-typed value objects used by domain entities.
//!
//! These wrappers enforce basic invariants (non-empty identifiers, usable
//! search input) so that once a value reaches the domain layer it can be
//! treated as trusted.
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided identifier contained no non-whitespace characters.
    #[error("employee id cannot be empty")]
    EmptyId,
    /// Provided name fragment contained no non-whitespace characters.
    #[error("Name fragment cannot be null or empty")]
    EmptyNameFragment,
}

/// Identifier assigned to an employee by the upstream service.
///
/// The value is opaque: only emptiness is checked, the upstream decides the
/// format.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct EmployeeId(String);

impl EmployeeId {
    /// Rejects blank identifiers and keeps any other input verbatim.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(TypeConstraintError::EmptyId);
        }
        Ok(Self(value))
    }

    /// Borrow the identifier as a `&str`.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the owned inner `String`.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for EmployeeId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for EmployeeId {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for EmployeeId {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<EmployeeId> for String {
    fn from(value: EmployeeId) -> Self {
        value.0
    }
}

/// Case-insensitive search input matched against employee names.
///
/// Holds the fragment as given (only blank input is rejected) together with
/// its lower-cased form used for matching.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NameFragment {
    raw: String,
    lowered: String,
}

impl NameFragment {
    /// Rejects fragments that are empty or consist only of whitespace.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let raw = value.into();
        if raw.trim().is_empty() {
            return Err(TypeConstraintError::EmptyNameFragment);
        }
        let lowered = raw.to_lowercase();
        Ok(Self { raw, lowered })
    }

    /// Returns `true` when `name` contains this fragment, ignoring case.
    pub fn matches(&self, name: &str) -> bool {
        name.to_lowercase().contains(&self.lowered)
    }

    /// Borrow the fragment as originally provided.
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl Display for NameFragment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.raw)
    }
}
