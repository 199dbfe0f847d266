//! Modelo de Car
//!
//! Este módulo contiene el struct Car, su estado de alquiler y las
//! transiciones permitidas entre estados. Mapea a la tabla `car`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::utils::errors::AppError;

/// Estado del coche - mapea a la columna `condition` (TEXT con CHECK)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum CarCondition {
    #[default]
    Available,
    Rented,
}

impl CarCondition {
    pub fn as_str(&self) -> &'static str {
        match self {
            CarCondition::Available => "available",
            CarCondition::Rented => "rented",
        }
    }
}

impl fmt::Display for CarCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CarCondition {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "available" => Ok(CarCondition::Available),
            "rented" => Ok(CarCondition::Rented),
            other => Err(AppError::Internal(format!("Unknown car condition '{}'", other))),
        }
    }
}

/// Car principal - mapea exactamente a la tabla car
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Car {
    pub id: Uuid,
    pub model: String,
    pub registration_num: String,
    pub mileage: f64,
    pub condition: CarCondition,
}

impl Car {
    /// Crear un coche nuevo con id generado en el servidor
    pub fn new(model: String, registration_num: String, mileage: f64, condition: CarCondition) -> Self {
        Self {
            id: Uuid::new_v4(),
            model,
            registration_num,
            mileage,
            condition,
        }
    }

    pub fn is_rented(&self) -> bool {
        self.condition == CarCondition::Rented
    }

    /// Marcar el coche como alquilado.
    ///
    /// Falla con `Conflict` si ya estaba alquilado; en ese caso el coche
    /// no se modifica.
    pub fn rent(&mut self) -> Result<(), AppError> {
        if self.is_rented() {
            return Err(AppError::Conflict("Car is already rented".to_string()));
        }
        self.condition = CarCondition::Rented;
        Ok(())
    }

    /// Registrar la devolución: suma los kilómetros y vuelve a `available`.
    ///
    /// Falla con `Conflict` si el coche no estaba alquilado. Los kilómetros
    /// pueden ser negativos; sólo se rechaza (`BadRequest`) un kilometraje
    /// resultante no finito. En caso de error el coche no se modifica.
    pub fn return_from_rental(&mut self, kilometers_driven: f64) -> Result<(), AppError> {
        if !self.is_rented() {
            return Err(AppError::Conflict("Car was not marked as rented".to_string()));
        }
        let mileage = self.mileage + kilometers_driven;
        if !mileage.is_finite() {
            return Err(AppError::BadRequest(format!(
                "kilometers_driven {} leaves mileage out of range",
                kilometers_driven
            )));
        }
        self.mileage = mileage;
        self.condition = CarCondition::Available;
        Ok(())
    }
}
