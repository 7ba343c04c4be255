use actix_web::{web, App, HttpResponse, HttpServer};
use serde::Serialize;

use crate::config::Config;
use crate::error::TodoError;
use crate::repository::database::Database;

mod api;
mod config;
mod error;
mod models;
mod repository;
mod telemetry;
mod views;

#[derive(Serialize)]
pub struct Response {
    pub message: String,
}

async fn not_found() -> Result<HttpResponse, TodoError> {
    Err(TodoError::NotFound)
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::new()?;
    telemetry::init(&config.app_name)?;

    let todo_db = Database::seeded();
    let app_data = web::Data::new(todo_db);

    let mut server = HttpServer::new(move ||
        App::new()
            .app_data(app_data.clone())
            .configure(api::pages::config)
            .configure(api::api::config)
            .default_service(web::route().to(not_found))
            .wrap(actix_web::middleware::Logger::default())
    );
    if let Some(workers) = config.workers {
        server = server.workers(workers);
    }

    tracing::info!(host = %config.host, port = config.port, "starting todo server");
    server
        .bind(config.address())?
        .run()
        .await?;
    Ok(())
}
