use crate::dto::car_dto::{CreateCarRequest, CreateCarResponse};
use crate::models::Car;
use crate::repositories::CarRepository;
use crate::utils::errors::{conflict_error, AppResult};
use std::sync::Arc;
use tracing::info;

pub struct CarController {
    repository: Arc<dyn CarRepository>,
}

impl CarController {
    pub fn new(repository: Arc<dyn CarRepository>) -> Self {
        Self { repository }
    }

    pub async fn create(&self, request: CreateCarRequest) -> AppResult<CreateCarResponse> {
        // Verificar que la matrícula no exista
        if self
            .repository
            .find_by_registration(&request.registration_num)
            .await?
            .is_some()
        {
            return Err(conflict_error("Car", "registration number", &request.registration_num));
        }

        let car = Car::new(
            request.model,
            request.registration_num,
            request.mileage,
            request.condition.unwrap_or_default(),
        );

        // El UNIQUE de la tabla cubre la carrera entre la comprobación y el insert
        self.repository.insert(&car).await?;
        info!("🚗 Coche {} registrado con id {}", car.registration_num, car.id);

        Ok(CreateCarResponse { id: car.id })
    }

    pub async fn list(&self) -> AppResult<Vec<Car>> {
        self.repository.list().await
    }
}
