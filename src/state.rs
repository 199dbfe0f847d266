//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum. El almacén se inyecta aquí en lugar de
//! vivir en una variable global, así cada test construye el suyo.

use std::sync::Arc;

use crate::config::environment::EnvironmentConfig;
use crate::repositories::CarRepository;

#[derive(Clone)]
pub struct AppState {
    pub cars: Arc<dyn CarRepository>,
    pub config: EnvironmentConfig,
}

impl AppState {
    pub fn new(cars: Arc<dyn CarRepository>, config: EnvironmentConfig) -> Self {
        Self { cars, config }
    }
}
