use actix_web::{
    web::{block, Data, Json, Path},
    Result,
};

use db::AnswerRepository;
use errors::Error;

use crate::views::AnswerDetail;

pub async fn get(
    answer_id: Path<i32>,
    answers: Data<dyn AnswerRepository>,
) -> Result<Json<AnswerDetail>, Error> {
    let answer_id = answer_id.into_inner();
    let answers = answers.into_inner();

    let answer = block(move || answers.get(answer_id)).await??;
    info!("Retrieved answer #{}", answer.id);

    Ok(Json(answer.into()))
}
