//! REST facade for employee records backed by an upstream employee service.

#[cfg(feature = "data")]
pub mod domain;
#[cfg(feature = "data")]
pub mod forms;

#[cfg(feature = "server")]
pub mod dto;
#[cfg(feature = "server")]
mod error_conversions;
#[cfg(feature = "server")]
pub mod models;
#[cfg(feature = "server")]
pub mod repository;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "server")]
pub mod services;

#[cfg(feature = "server")]
pub use server::run;

#[cfg(feature = "server")]
mod server {
    use actix_cors::Cors;
    use actix_web::{App, HttpServer, middleware, web};

    use crate::models::config::ServerConfig;
    use crate::repository::HttpEmployeeRepository;

    /// Builds and runs the Actix-Web HTTP server using the provided configuration.
    pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
        let repo = HttpEmployeeRepository::from_config(&server_config).map_err(|e| {
            std::io::Error::other(format!("Failed to build upstream client: {e}"))
        })?;

        log::info!(
            "Forwarding employee requests to {}",
            server_config.upstream_url
        );

        let bind_address = (server_config.address.clone(), server_config.port);

        HttpServer::new(move || {
            App::new()
                .wrap(Cors::permissive())
                .wrap(middleware::Logger::default())
                .app_data(web::Data::new(repo.clone()))
                .configure(crate::routes::configure)
        })
        .bind(bind_address)?
        .run()
        .await
    }
}
