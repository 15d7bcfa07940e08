use std::io;

use actix_cors::Cors;
use actix_web::{middleware::Logger, App, HttpServer};
use sqlx::postgres::PgPoolOptions;

use taskboard::{auth::JwtKeys, config::Config, routes, AppState};

fn startup_error(context: &str, err: impl std::fmt::Display) -> io::Error {
    io::Error::new(io::ErrorKind::Other, format!("{}: {}", context, err))
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = Config::from_env().map_err(|e| startup_error("invalid configuration", e))?;

    let pool = PgPoolOptions::new()
        .connect(&config.database_url)
        .await
        .map_err(|e| startup_error("failed to connect to database", e))?;

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .map_err(|e| startup_error("failed to apply schema", e))?;

    let state = AppState::postgres(
        pool,
        JwtKeys::new(&config.jwt_secret, config.jwt_expiration_hours),
    );

    log::info!("Starting taskboard server at {}", config.server_url());

    HttpServer::new(move || {
        let state = state.clone();
        App::new()
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .wrap(Logger::default())
            .configure(|cfg| state.register(cfg))
            .configure(routes::config)
    })
    .bind((config.server_host.as_str(), config.server_port))?
    .run()
    .await
}
