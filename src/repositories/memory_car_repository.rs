//! Almacén de coches en memoria
//!
//! Backend seleccionado con `CAR_STORE=memory`. Conserva el orden de
//! inserción y aplica la guarda de cada actualización bajo el mismo lock
//! de escritura, igual que la sentencia condicional de PostgreSQL.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::{Car, CarCondition};
use crate::repositories::car_repository::CarRepository;
use crate::utils::errors::{conflict_error, AppError};

#[derive(Default)]
pub struct MemoryCarRepository {
    cars: RwLock<Vec<Car>>,
}

impl MemoryCarRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CarRepository for MemoryCarRepository {
    async fn find_by_registration(&self, registration_num: &str) -> Result<Option<Car>, AppError> {
        let cars = self.cars.read().await;
        Ok(cars.iter().find(|c| c.registration_num == registration_num).cloned())
    }

    async fn list(&self) -> Result<Vec<Car>, AppError> {
        Ok(self.cars.read().await.clone())
    }

    async fn insert(&self, car: &Car) -> Result<(), AppError> {
        let mut cars = self.cars.write().await;
        if cars.iter().any(|c| c.registration_num == car.registration_num) {
            return Err(conflict_error("Car", "registration number", &car.registration_num));
        }
        cars.push(car.clone());
        Ok(())
    }

    async fn update_condition(
        &self,
        id: Uuid,
        expected: CarCondition,
        condition: CarCondition,
    ) -> Result<bool, AppError> {
        let mut cars = self.cars.write().await;
        match cars.iter_mut().find(|c| c.id == id && c.condition == expected) {
            Some(stored) => {
                stored.condition = condition;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn update_mileage_and_condition(
        &self,
        car: &Car,
        expected_condition: CarCondition,
        expected_mileage: f64,
    ) -> Result<bool, AppError> {
        let mut cars = self.cars.write().await;
        let stored = cars
            .iter_mut()
            .find(|c| c.id == car.id && c.condition == expected_condition && c.mileage == expected_mileage);
        match stored {
            Some(stored) => {
                stored.mileage = car.mileage;
                stored.condition = car.condition;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn car(registration_num: &str) -> Car {
        Car::new("Fiat 500".to_string(), registration_num.to_string(), 0.0, CarCondition::Available)
    }

    #[tokio::test]
    async fn test_insert_and_find() {
        let repo = MemoryCarRepository::new();
        let car = car("AA-001");
        repo.insert(&car).await.unwrap();

        assert_eq!(repo.find_by_registration("AA-001").await.unwrap(), Some(car));
        assert_eq!(repo.find_by_registration("ZZ-999").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_duplicate_registration_is_conflict() {
        let repo = MemoryCarRepository::new();
        repo.insert(&car("AA-001")).await.unwrap();

        let result = repo.insert(&car("AA-001")).await;
        assert!(matches!(result, Err(AppError::Conflict(_))));
        assert_eq!(repo.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_list_keeps_insertion_order() {
        let repo = MemoryCarRepository::new();
        for reg in ["C-3", "A-1", "B-2"] {
            repo.insert(&car(reg)).await.unwrap();
        }
        let regs: Vec<String> = repo.list().await.unwrap().into_iter().map(|c| c.registration_num).collect();
        assert_eq!(regs, vec!["C-3", "A-1", "B-2"]);
    }

    #[tokio::test]
    async fn test_update_condition_respects_guard() {
        let repo = MemoryCarRepository::new();
        let car = car("AA-001");
        repo.insert(&car).await.unwrap();

        assert!(repo.update_condition(car.id, CarCondition::Available, CarCondition::Rented).await.unwrap());
        assert!(!repo.update_condition(car.id, CarCondition::Available, CarCondition::Rented).await.unwrap());
        assert!(!repo.update_condition(Uuid::new_v4(), CarCondition::Rented, CarCondition::Available).await.unwrap());
    }

    #[tokio::test]
    async fn test_update_mileage_and_condition() {
        let repo = MemoryCarRepository::new();
        let mut car = car("AA-001");
        car.condition = CarCondition::Rented;
        repo.insert(&car).await.unwrap();

        car.return_from_rental(80.0).unwrap();
        assert!(repo.update_mileage_and_condition(&car, CarCondition::Rented, 0.0).await.unwrap());
        assert!(!repo.update_mileage_and_condition(&car, CarCondition::Rented, 0.0).await.unwrap());

        let stored = repo.find_by_registration("AA-001").await.unwrap().unwrap();
        assert_eq!(stored.mileage, 80.0);
        assert_eq!(stored.condition, CarCondition::Available);
    }

    #[tokio::test]
    async fn test_update_mileage_rejects_stale_mileage() {
        let repo = MemoryCarRepository::new();
        let mut car = car("AA-001");
        car.condition = CarCondition::Rented;
        car.mileage = 150.0;
        repo.insert(&car).await.unwrap();

        // Lectura previa con 100 km: otra devolución ya dejó 150
        let mut stale = car.clone();
        stale.mileage = 100.0;
        stale.return_from_rental(10.0).unwrap();
        assert!(!repo.update_mileage_and_condition(&stale, CarCondition::Rented, 100.0).await.unwrap());

        let stored = repo.find_by_registration("AA-001").await.unwrap().unwrap();
        assert_eq!(stored.mileage, 150.0);
        assert_eq!(stored.condition, CarCondition::Rented);
    }
}
