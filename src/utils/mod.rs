//! Utilidades del sistema
//!
//! Este módulo contiene utilidades para manejo de errores, validación
//! y extracción de requests.

pub mod errors;
pub mod extract;
pub mod validation;
