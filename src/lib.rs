//! Servicio de inventario de coches de alquiler
//!
//! API HTTP para listar, registrar, alquilar y devolver coches.

pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;
