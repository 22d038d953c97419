#[macro_use]
extern crate log;

use std::io;
use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{
    http,
    middleware::{Logger, NormalizePath},
    web::{self, Data},
    App, HttpServer,
};
use dotenv::dotenv;
use env_logger::Env;

mod config;
mod routes;
mod tests;
mod validate;
mod views;

use crate::config::Config;
use crate::routes::{not_found, routes};
use db::{AnswerRepository, PgRepository, QuestionRepository};

fn startup_error<E: ToString>(err: E) -> io::Error {
    io::Error::new(io::ErrorKind::Other, err.to_string())
}

#[actix_rt::main]
async fn main() -> io::Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = Config::from_env().map_err(startup_error)?;

    let pool = db::new_pool(&config.database_url, config.pool_size).map_err(startup_error)?;
    if config.run_migrations {
        let mut conn = db::get_conn(&pool).map_err(startup_error)?;
        db::run_migrations(&mut conn).map_err(startup_error)?;
    }

    let repository = Arc::new(PgRepository::new(pool));
    let questions: Arc<dyn QuestionRepository> = repository.clone();
    let answers: Arc<dyn AnswerRepository> = repository;

    let bind_address = config.bind_address.clone();
    info!("Listening on {}", bind_address);

    HttpServer::new(move || {
        let cors = match &config.client_host {
            Some(host) => Cors::default().allowed_origin(host),
            None => Cors::default().allow_any_origin(),
        }
        .allow_any_method()
        .allowed_headers(vec![http::header::ACCEPT, http::header::CONTENT_TYPE])
        .max_age(3600);

        App::new()
            .wrap(cors)
            .wrap(Logger::default())
            .wrap(NormalizePath::trim())
            .app_data(Data::from(questions.clone()))
            .app_data(Data::from(answers.clone()))
            .configure(routes)
            .default_service(web::route().to(not_found))
    })
    .bind(bind_address)?
    .run()
    .await
}
