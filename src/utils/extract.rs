//! Extractores de Axum
//!
//! `ValidatedJson` reemplaza a `axum::Json` en los handlers: cualquier
//! rechazo del body (JSON mal formado, content-type ausente, campos con
//! tipo incorrecto) se convierte en `AppError::BadRequest`, y el valor
//! deserializado pasa por `validator::Validate` antes de llegar al handler.

use axum::{
    async_trait,
    extract::{FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::utils::errors::AppError;

pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

        value.validate()?;
        Ok(ValidatedJson(value))
    }
}
