use actix_web::{middleware, web, App, HttpServer};
use pr_reviewer::config::EnvConfig;
use pr_reviewer::db::postgres_service::PostgresService;
use pr_reviewer::routes::configure_routes;
use pr_reviewer::services::assignment::AssignmentService;
use pr_reviewer::services::selection::RandomPicker;
use sea_orm::ConnectOptions;
use std::sync::Arc;
use tracing::info;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();
    let config = EnvConfig::from_env();
    let addr = format!("0.0.0.0:{}", config.port);

    let mut options = ConnectOptions::new(config.db_url.clone());
    options.max_connections(config.db_max_connections);

    let postgres_service = Arc::new(
        PostgresService::with_options(options)
            .await
            .map_err(std::io::Error::other)?,
    );
    let assignment_service = Arc::new(AssignmentService::new(
        Arc::clone(&postgres_service),
        Arc::new(RandomPicker),
    ));

    info!("Starting server on {}", addr);

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(web::Data::new(Arc::clone(&postgres_service)))
            .app_data(web::Data::new(Arc::clone(&assignment_service)))
            .configure(configure_routes)
    })
    .client_request_timeout(config.header_timeout)
    .bind(addr)?
    .run()
    .await
}
