//! Servicio de alquileres
//!
//! Aplica las transiciones `available -> rented` (alquiler) y
//! `rented -> available` (devolución). Cada transición lee el coche,
//! valida el estado en memoria y persiste con una actualización guardada
//! por el estado anterior (y, en la devolución, por el kilometraje leído):
//! si otra petición concurrente ganó la carrera, la guarda no afecta
//! ninguna fila y se responde con `Conflict`.

use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::models::{Car, CarCondition};
use crate::repositories::CarRepository;
use crate::utils::errors::{car_not_found, AppError};

pub struct RentalService {
    repository: Arc<dyn CarRepository>,
}

impl RentalService {
    pub fn new(repository: Arc<dyn CarRepository>) -> Self {
        Self { repository }
    }

    /// Alquilar un coche por matrícula
    pub async fn rent(&self, registration_num: &str) -> Result<Car, AppError> {
        let mut car = self
            .repository
            .find_by_registration(registration_num)
            .await?
            .ok_or_else(|| car_not_found(registration_num))?;

        let previous = car.condition;
        car.rent()?;

        let updated = self
            .repository
            .update_condition(car.id, previous, car.condition)
            .await?;
        if !updated {
            warn!("🚫 Alquiler concurrente perdido para {}", registration_num);
            return Err(AppError::Conflict("Car is already rented".to_string()));
        }

        info!("🔑 Coche {} alquilado", registration_num);
        Ok(car)
    }

    /// Devolver un coche por matrícula sumando los kilómetros recorridos
    pub async fn return_car(&self, registration_num: &str, kilometers_driven: f64) -> Result<Car, AppError> {
        let mut car = self
            .repository
            .find_by_registration(registration_num)
            .await?
            .ok_or_else(|| car_not_found(registration_num))?;

        let previous_mileage = car.mileage;
        car.return_from_rental(kilometers_driven)?;
        debug!(
            "Devolución de {}: +{} km, kilometraje {}",
            registration_num, kilometers_driven, car.mileage
        );

        let updated = self
            .repository
            .update_mileage_and_condition(&car, CarCondition::Rented, previous_mileage)
            .await?;
        if !updated {
            warn!("🚫 Devolución concurrente perdida para {}", registration_num);
            return Err(AppError::Conflict("Car was modified by another request".to_string()));
        }

        info!("🏁 Coche {} devuelto ({} km)", registration_num, car.mileage);
        Ok(car)
    }
}
