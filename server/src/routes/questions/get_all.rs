use actix_web::{
    web::{block, Data, Json},
    Result,
};

use db::QuestionRepository;
use errors::Error;

use crate::views::QuestionListItem;

pub async fn get_all(
    questions: Data<dyn QuestionRepository>,
) -> Result<Json<Vec<QuestionListItem>>, Error> {
    let questions = questions.into_inner();

    let summaries = block(move || questions.list()).await??;

    Ok(Json(summaries.into_iter().map(QuestionListItem::from).collect()))
}
