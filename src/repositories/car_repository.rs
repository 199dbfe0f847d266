use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::{Car, CarCondition};
use crate::utils::errors::{conflict_error, AppError};

/// Acceso al almacén de coches.
///
/// Las actualizaciones llevan como guarda los valores leídos antes de
/// modificar el coche: sólo se aplican si lo almacenado no ha cambiado, y
/// devuelven si exactamente una fila fue modificada.
#[async_trait]
pub trait CarRepository: Send + Sync {
    async fn find_by_registration(&self, registration_num: &str) -> Result<Option<Car>, AppError>;

    async fn list(&self) -> Result<Vec<Car>, AppError>;

    async fn insert(&self, car: &Car) -> Result<(), AppError>;

    async fn update_condition(
        &self,
        id: Uuid,
        expected: CarCondition,
        condition: CarCondition,
    ) -> Result<bool, AppError>;

    /// La guarda incluye el kilometraje leído: una devolución intermedia
    /// (seguida de un nuevo alquiler) invalida la escritura.
    async fn update_mileage_and_condition(
        &self,
        car: &Car,
        expected_condition: CarCondition,
        expected_mileage: f64,
    ) -> Result<bool, AppError>;

    /// Nombre del backend, para logs y health check
    fn backend(&self) -> &'static str;
}

// Fila tal cual viene de PostgreSQL
#[derive(Debug, sqlx::FromRow)]
struct CarRow {
    id: Uuid,
    model: String,
    registration_num: String,
    mileage: f64,
    condition: String,
}

impl TryFrom<CarRow> for Car {
    type Error = AppError;

    fn try_from(row: CarRow) -> Result<Self, Self::Error> {
        Ok(Car {
            id: row.id,
            model: row.model,
            registration_num: row.registration_num,
            mileage: row.mileage,
            condition: row.condition.parse()?,
        })
    }
}

pub struct PgCarRepository {
    pool: PgPool,
}

impl PgCarRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CarRepository for PgCarRepository {
    async fn find_by_registration(&self, registration_num: &str) -> Result<Option<Car>, AppError> {
        let row = sqlx::query_as::<_, CarRow>(
            r#"SELECT id, model, registration_num, mileage, "condition" FROM car WHERE registration_num = $1"#,
        )
        .bind(registration_num)
        .fetch_optional(&self.pool)
        .await?;

        row.map(Car::try_from).transpose()
    }

    async fn list(&self) -> Result<Vec<Car>, AppError> {
        let rows = sqlx::query_as::<_, CarRow>(
            r#"SELECT id, model, registration_num, mileage, "condition" FROM car"#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Car::try_from).collect()
    }

    async fn insert(&self, car: &Car) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO car (id, model, registration_num, mileage, "condition")
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(car.id)
        .bind(&car.model)
        .bind(&car.registration_num)
        .bind(car.mileage)
        .bind(car.condition.as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.is_unique_violation() {
                    return conflict_error("Car", "registration number", &car.registration_num);
                }
            }
            AppError::Database(e)
        })?;

        Ok(())
    }

    async fn update_condition(
        &self,
        id: Uuid,
        expected: CarCondition,
        condition: CarCondition,
    ) -> Result<bool, AppError> {
        let result = sqlx::query(r#"UPDATE car SET "condition" = $1 WHERE id = $2 AND "condition" = $3"#)
            .bind(condition.as_str())
            .bind(id)
            .bind(expected.as_str())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() == 1)
    }

    async fn update_mileage_and_condition(
        &self,
        car: &Car,
        expected_condition: CarCondition,
        expected_mileage: f64,
    ) -> Result<bool, AppError> {
        let result = sqlx::query(
            r#"
            UPDATE car SET mileage = $1, "condition" = $2
            WHERE id = $3 AND "condition" = $4 AND mileage = $5
            "#,
        )
        .bind(car.mileage)
        .bind(car.condition.as_str())
        .bind(car.id)
        .bind(expected_condition.as_str())
        .bind(expected_mileage)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() == 1)
    }

    fn backend(&self) -> &'static str {
        "postgres"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_conversion() {
        let row = CarRow {
            id: Uuid::new_v4(),
            model: "Peugeot 208".to_string(),
            registration_num: "GH-456-IJ".to_string(),
            mileage: 12.5,
            condition: "rented".to_string(),
        };
        let car = Car::try_from(row).unwrap();
        assert_eq!(car.condition, CarCondition::Rented);
        assert_eq!(car.mileage, 12.5);
    }

    #[test]
    fn test_row_with_unknown_condition_is_internal_error() {
        let row = CarRow {
            id: Uuid::new_v4(),
            model: "Peugeot 208".to_string(),
            registration_num: "GH-456-IJ".to_string(),
            mileage: 0.0,
            condition: "".to_string(),
        };
        assert!(matches!(Car::try_from(row), Err(AppError::Internal(_))));
    }
}
