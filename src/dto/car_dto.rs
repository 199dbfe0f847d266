use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::CarCondition;

// Request para registrar un coche (sin id, lo asigna el servidor)
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCarRequest {
    #[validate(custom = "crate::utils::validation::validate_not_empty")]
    pub model: String,

    #[validate(custom = "crate::utils::validation::validate_registration_num")]
    pub registration_num: String,

    #[serde(default)]
    #[validate(range(min = 0.0))]
    pub mileage: f64,

    pub condition: Option<CarCondition>,
}

// Response del alta de coche
#[derive(Debug, Serialize, Deserialize)]
pub struct CreateCarResponse {
    pub id: Uuid,
}

// Request para devolver un coche
#[derive(Debug, Deserialize, Validate)]
pub struct ReturnCarRequest {
    pub kilometers_driven: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_defaults() {
        let request: CreateCarRequest =
            serde_json::from_str(r#"{"model": "Seat Ibiza", "registration_num": "1234-BCD"}"#).unwrap();
        assert_eq!(request.mileage, 0.0);
        assert!(request.condition.is_none());
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_create_request_rejects_blank_fields() {
        let request: CreateCarRequest =
            serde_json::from_str(r#"{"model": " ", "registration_num": "A/B"}"#).unwrap();
        let errors = request.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("model"));
        assert!(fields.contains_key("registration_num"));
    }

    #[test]
    fn test_create_request_rejects_negative_mileage() {
        let request: CreateCarRequest =
            serde_json::from_str(r#"{"model": "Seat Leon", "registration_num": "5678-FGH", "mileage": -1.0}"#)
                .unwrap();
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("mileage"));
    }

    #[test]
    fn test_return_request_requires_kilometers() {
        assert!(serde_json::from_str::<ReturnCarRequest>("{}").is_err());
        let request: ReturnCarRequest = serde_json::from_str(r#"{"kilometers_driven": 42.5}"#).unwrap();
        assert_eq!(request.kilometers_driven, 42.5);
    }
}
