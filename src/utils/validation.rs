//! Utilidades de validación
//!
//! Validadores custom usados por los DTOs a través de `validator`.

use validator::ValidationError;

/// Validar que un string no esté vacío
pub fn validate_not_empty(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("not_empty");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar una matrícula: no vacía y utilizable como segmento de ruta
pub fn validate_registration_num(value: &str) -> Result<(), ValidationError> {
    validate_not_empty(value)?;

    if value.contains('/') || value.trim() != value {
        let mut error = ValidationError::new("registration_num");
        error.add_param("value".into(), &value.to_string());
        error.message = Some("registration number must not contain '/' or surrounding spaces".into());
        return Err(error);
    }
    Ok(())
}
