//! DTO modules shared between services and the HTTP layer.

pub mod api;
