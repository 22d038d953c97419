use actix_web::{
    web::{block, Data, Path},
    HttpResponse, Result,
};

use db::AnswerRepository;
use errors::Error;

pub async fn delete(
    answer_id: Path<i32>,
    answers: Data<dyn AnswerRepository>,
) -> Result<HttpResponse, Error> {
    let answer_id = answer_id.into_inner();
    let answers = answers.into_inner();

    block(move || answers.delete(answer_id)).await??;
    info!("Deleted answer #{}", answer_id);

    Ok(HttpResponse::NoContent().finish())
}
