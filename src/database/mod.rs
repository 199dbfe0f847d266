//! Módulo de base de datos
//!
//! Maneja la conexión con PostgreSQL y la selección del backend de almacenamiento.

pub mod connection;

pub use connection::{connect_store, run_migrations};
