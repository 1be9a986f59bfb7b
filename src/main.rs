mod config;
mod routes;
mod telemetry;

use actix_web::{web, App, HttpServer};
use config::ServerConfig;
use tracing_actix_web::TracingLogger;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    let config = ServerConfig::from_env();
    telemetry::init(config.log_format);

    let bind = (config.host.clone(), config.port);
    tracing::info!(host = %bind.0, port = bind.1, "starting formcheck");

    let config = web::Data::new(config);
    HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(config.clone())
            .configure(routes::configure)
    })
    .bind(bind)?
    .run()
    .await
}
