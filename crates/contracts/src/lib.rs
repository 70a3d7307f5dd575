//! Wire types of the inventory REST backend.
//!
//! Field names follow the backend's JSON (`nombre`, `cantidad`,
//! `inventario_anterior`, ...); Rust type names are English.

pub mod domain;
pub mod shared;
