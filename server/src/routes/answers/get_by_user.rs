use actix_web::{
    web::{block, Data, Json, Path},
    Result,
};
use uuid::Uuid;

use db::AnswerRepository;
use errors::Error;

use crate::views::AnswerDetail;

/// Every answer given by one user, oldest first. Served by the `user_id` index.
pub async fn get_by_user(
    user_id: Path<String>,
    answers: Data<dyn AnswerRepository>,
) -> Result<Json<Vec<AnswerDetail>>, Error> {
    let user_id = Uuid::parse_str(&user_id)
        .map_err(|_| Error::ValidationError(vec!["user_id must be a valid UUID".into()]))?;
    let answers = answers.into_inner();

    let results = block(move || answers.list_by_user(user_id)).await??;

    Ok(Json(results.into_iter().map(AnswerDetail::from).collect()))
}
