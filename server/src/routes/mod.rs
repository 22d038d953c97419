use actix_web::{web, HttpResponse};

use errors::{Error, ErrorResponse};

pub mod answers;
pub mod questions;

pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| Error::BadRequest(err.to_string()).into()),
    )
    .app_data(web::PathConfig::default().error_handler(|_err, req| {
        Error::NotFound(format!("{} not found", req.path())).into()
    }))
    .service(
        web::scope("/questions")
            .service(
                web::resource("")
                    .route(web::get().to(questions::get_all))
                    .route(web::post().to(questions::create)),
            )
            .service(
                web::scope("/{id}")
                    .service(
                        web::resource("")
                            .route(web::get().to(questions::get))
                            .route(web::delete().to(questions::delete)),
                    )
                    .route("/answers", web::post().to(answers::create)),
            ),
    )
    .service(
        web::resource("/answers/{id}")
            .route(web::get().to(answers::get))
            .route(web::delete().to(answers::delete)),
    )
    .route("/users/{user_id}/answers", web::get().to(answers::get_by_user));
}

pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::from("Not Found"))
}
