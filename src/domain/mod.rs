//! Domain entities, value objects and the derived reads computed over them.

pub mod derivation;
pub mod employee;
pub mod types;
