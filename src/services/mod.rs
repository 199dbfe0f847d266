//! Services module
//!
//! Este módulo contiene la lógica de negocio de la aplicación.

pub mod rental_service;

pub use rental_service::RentalService;
