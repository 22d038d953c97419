use actix_web::{
    web::{block, Data, Json, Path},
    Result,
};

use db::QuestionRepository;
use errors::Error;

use crate::views::QuestionDetail;

pub async fn get(
    question_id: Path<i32>,
    questions: Data<dyn QuestionRepository>,
) -> Result<Json<QuestionDetail>, Error> {
    let question_id = question_id.into_inner();
    let questions = questions.into_inner();

    let detail = block(move || questions.get(question_id)).await??;
    info!("Retrieved question #{}", detail.question.id);

    Ok(Json(detail.into()))
}
