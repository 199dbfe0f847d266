//! Repositorios
//!
//! Acceso a datos de coches: trait común y backends PostgreSQL / memoria.

pub mod car_repository;
pub mod memory_car_repository;

pub use car_repository::{CarRepository, PgCarRepository};
pub use memory_car_repository::MemoryCarRepository;
