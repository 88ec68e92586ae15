mod client;
mod features;
mod routes;
mod types;

use actix_files::Files;
use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use log::info;

use client::{ApiClient, DEFAULT_API_URL};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .format_module_path(false)
        .init();

    let api_url = std::env::var("API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
    let client = web::Data::new(ApiClient::new(&api_url));

    let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port = std::env::var("PORT").unwrap_or_else(|_| "8501".to_string());
    let bind_address = format!("{host}:{port}");

    info!("🚇 Traffic volume form on http://{bind_address} (prediction API at {api_url})");

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(client.clone())
            .service(routes::index)
            .service(routes::options)
            .service(routes::predict)
            .service(Files::new("/static", "./static").prefer_utf8(true))
    })
    .bind(&bind_address)?
    .run()
    .await
}
