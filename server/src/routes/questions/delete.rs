use actix_web::{
    web::{block, Data, Path},
    HttpResponse, Result,
};

use db::QuestionRepository;
use errors::Error;

pub async fn delete(
    question_id: Path<i32>,
    questions: Data<dyn QuestionRepository>,
) -> Result<HttpResponse, Error> {
    let question_id = question_id.into_inner();
    let questions = questions.into_inner();

    block(move || questions.delete(question_id)).await??;
    info!("Deleted question #{} with all its answers", question_id);

    Ok(HttpResponse::NoContent().finish())
}
