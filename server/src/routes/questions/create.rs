use actix_web::{
    web::{block, Data, Json},
    HttpResponse, Result,
};
use serde::{Deserialize, Serialize};
use validator::Validate;

use db::QuestionRepository;
use errors::Error;

use crate::validate::{validate, validate_text};
use crate::views::QuestionDetail;

#[derive(Clone, Debug, Deserialize, Serialize, Validate)]
pub struct QuestionInput {
    #[validate(required, custom = "validate_text")]
    pub text: Option<String>,
}

pub async fn create(
    questions: Data<dyn QuestionRepository>,
    params: Json<QuestionInput>,
) -> Result<HttpResponse, Error> {
    validate(&params)?;
    let text = params
        .into_inner()
        .text
        .map(|text| text.trim().to_string())
        .unwrap_or_default();
    let questions = questions.into_inner();

    let question = block(move || questions.create(&text)).await??;
    info!("Created {}", question);

    Ok(HttpResponse::Created().json(QuestionDetail::from(question)))
}
