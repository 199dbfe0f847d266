//! Conexión al almacén de coches
//!
//! Este módulo abre el backend configurado (PostgreSQL o memoria) y aplica
//! las migraciones de `migrations/` cuando corresponde.

use anyhow::{Context, Result};
use sqlx::PgPool;
use std::sync::Arc;
use tracing::info;

use crate::config::database::DatabaseConfig;
use crate::config::environment::{EnvironmentConfig, StoreBackend};
use crate::repositories::{CarRepository, MemoryCarRepository, PgCarRepository};

/// Abrir el almacén según la configuración
pub async fn connect_store(config: &EnvironmentConfig) -> Result<Arc<dyn CarRepository>> {
    match config.store {
        StoreBackend::Memory => {
            info!("🧠 Usando almacén en memoria");
            Ok(Arc::new(MemoryCarRepository::new()))
        }
        StoreBackend::Postgres => {
            let db_config = DatabaseConfig::from_environment(config)
                .context("DATABASE_URL must be set when CAR_STORE=postgres")?;

            info!("🐘 Conectando a {}", mask_database_url(&db_config.url));
            let pool = db_config
                .create_pool()
                .await
                .context("Error conectando a la base de datos")?;

            if config.run_migrations {
                run_migrations(&pool).await?;
            }

            info!("✅ Base de datos conectada");
            Ok(Arc::new(PgCarRepository::new(pool)))
        }
    }
}

/// Ejecutar migraciones de la base de datos
pub async fn run_migrations(pool: &PgPool) -> Result<()> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .context("Error aplicando migraciones")?;

    info!("📜 Migraciones aplicadas");
    Ok(())
}

/// Función helper para enmascarar la URL de la base de datos en logs
pub fn mask_database_url(url: &str) -> String {
    let (Some(scheme_end), Some(at_pos)) = (url.find("://"), url.rfind('@')) else {
        return url.to_string();
    };
    if at_pos < scheme_end {
        return url.to_string();
    }

    let protocol = &url[..scheme_end + 3];
    let host = &url[at_pos + 1..];
    format!("{}***:***@{}", protocol, host)
}
