use std::{net::SocketAddr, sync::Arc};

use axum::Router;
use chrono::Duration;
use dotenvy::dotenv;
use migration::MigratorTrait;
use mockable::DefaultClock;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use configs::AppConfig;
use service::credentials::Argon2PasswordEncoder;
use service::store::SeaOrmStore;
use service::Services;

use crate::errors::StartupError;
use crate::routes;
use crate::state::AppState;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

fn bind_addr(cfg: &AppConfig) -> Result<SocketAddr, StartupError> {
    format!("{}:{}", cfg.server.host, cfg.server.port)
        .parse()
        .map_err(|e| StartupError::InvalidConfig(format!("server address: {e}")))
}

/// Migrations run unless `RUN_MIGRATIONS=false`.
fn migrations_enabled() -> bool {
    !matches!(std::env::var("RUN_MIGRATIONS").as_deref(), Ok("false") | Ok("0"))
}

/// Wire the services over a sea-orm store and build the router.
pub async fn build_app(cfg: &AppConfig) -> Result<Router, StartupError> {
    let db = models::db::connect_with_config(&cfg.database)
        .await
        .map_err(|e| StartupError::Database(e.to_string()))?;
    if migrations_enabled() {
        migration::Migrator::up(&db, None).await.map_err(|e| StartupError::Database(e.to_string()))?;
        info!("migrations applied");
    } else {
        warn!("RUN_MIGRATIONS disabled; assuming schema is current");
    }

    let services = Services::new(
        Arc::new(SeaOrmStore::new(db)),
        Arc::new(Argon2PasswordEncoder::default()),
        Arc::new(DefaultClock),
    )
    .with_max_staleness(Duration::hours(cfg.documents.max_update_staleness_hours));

    Ok(routes::build_router(AppState::new(services), build_cors()))
}

/// Public entry: build the app and run the HTTP server
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    let cfg = AppConfig::load_or_env().map_err(|e| StartupError::InvalidConfig(format!("{e:#}")))?;

    let app = build_app(&cfg).await?;

    let addr = bind_addr(&cfg)?;
    info!(%addr, staleness_hours = cfg.documents.max_update_staleness_hours, "starting edm server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bind_addr_uses_server_section() {
        let mut cfg = AppConfig::default();
        cfg.server.host = "127.0.0.1".into();
        cfg.server.port = 8081;
        assert_eq!(bind_addr(&cfg).unwrap().port(), 8081);

        cfg.server.host = "not a host".into();
        assert!(matches!(bind_addr(&cfg), Err(StartupError::InvalidConfig(_))));
    }
}
