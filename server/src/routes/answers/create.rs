use actix_web::{
    web::{block, Data, Json, Path},
    HttpResponse, Result,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use db::{AnswerRepository, QuestionRepository};
use errors::Error;

use crate::validate::{validate, validate_text, validate_uuid};
use crate::views::AnswerDetail;

#[derive(Clone, Debug, Deserialize, Serialize, Validate)]
pub struct AnswerInput {
    #[validate(required, custom = "validate_uuid")]
    pub user_id: Option<String>,
    #[validate(required, custom = "validate_text")]
    pub text: Option<String>,
}

/// The question is looked up before the body is inspected, so a missing
/// question wins over an invalid body.
pub async fn create(
    question_id: Path<i32>,
    params: Result<Json<AnswerInput>, actix_web::Error>,
    questions: Data<dyn QuestionRepository>,
    answers: Data<dyn AnswerRepository>,
) -> Result<HttpResponse, Error> {
    let question_id = question_id.into_inner();
    let questions = questions.into_inner();

    let exists = block(move || questions.exists(question_id)).await??;
    if !exists {
        return Err(Error::NotFound(format!("Question {} not found", question_id)));
    }

    let params = params.map_err(|err| Error::BadRequest(err.to_string()))?;
    validate(&params)?;
    let params = params.into_inner();
    let user_id = params
        .user_id
        .as_deref()
        .and_then(|user_id| Uuid::parse_str(user_id).ok())
        .ok_or_else(|| Error::ValidationError(vec!["user_id must be a valid UUID".into()]))?;
    let text = params.text.unwrap_or_default().trim().to_string();
    let answers = answers.into_inner();

    let answer = block(move || answers.create(question_id, user_id, &text)).await??;
    info!(
        "User {} created answer #{} for question #{}",
        answer.user_id, answer.id, question_id
    );

    Ok(HttpResponse::Created().json(AnswerDetail::from(answer)))
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use uuid::Uuid;

    use errors::ErrorResponse;

    use super::AnswerInput;
    use crate::tests::helpers::tests::{
        create_question, new_store, test_delete, test_get, test_post, test_post_raw,
    };
    use crate::views::{AnswerDetail, QuestionDetail};

    #[actix_rt::test]
    async fn test_create_answer() {
        let store = new_store();
        let question = create_question(&store, "Test question?");
        let user_id = Uuid::new_v4();

        let res: (u16, AnswerDetail) = test_post(
            &store,
            &format!("/questions/{}/answers", question.id),
            AnswerInput {
                user_id: Some(user_id.to_string()),
                text: Some("Test answer".to_string()),
            },
        )
        .await;

        assert_eq!(res.0, 201);
        assert_eq!(res.1.id, 1);
        assert_eq!(res.1.question_id, question.id);
        assert_eq!(res.1.user_id, user_id);
        assert_eq!(res.1.text, "Test answer");
        assert_eq!(store.answer_count(), 1);
    }

    #[actix_rt::test]
    async fn test_question_lifecycle() {
        let store = new_store();
        let user_id = Uuid::new_v4();

        let question: (u16, QuestionDetail) =
            test_post(&store, "/questions", json!({"text": "Test question?"})).await;
        assert_eq!(question.0, 201);
        assert_eq!(question.1.id, 1);

        let answer: (u16, AnswerDetail) = test_post(
            &store,
            "/questions/1/answers",
            json!({"user_id": user_id.to_string(), "text": "Test answer"}),
        )
        .await;
        assert_eq!(answer.0, 201);
        assert_eq!(answer.1.id, 1);
        assert_eq!(answer.1.question_id, 1);

        let detail: (u16, QuestionDetail) = test_get(&store, "/questions/1").await;
        assert_eq!(detail.0, 200);
        assert_eq!(detail.1.answers, vec![answer.1]);

        let status = test_delete(&store, "/questions/1").await;
        assert_eq!(status, 204);

        let gone: (u16, ErrorResponse) = test_get(&store, "/answers/1").await;
        assert_eq!(gone.0, 404);
    }

    #[actix_rt::test]
    async fn test_cannot_create_answer_to_nonexistent_question() {
        let store = new_store();

        let res: (u16, ErrorResponse) = test_post(
            &store,
            "/questions/999/answers",
            json!({
                "user_id": Uuid::new_v4().to_string(),
                "text": "Answer to nonexistent question",
            }),
        )
        .await;

        assert_eq!(res.0, 404);
        assert_eq!(store.answer_count(), 0);
    }

    #[actix_rt::test]
    async fn test_missing_question_checked_before_body() {
        let store = new_store();

        let res: (u16, ErrorResponse) =
            test_post(&store, "/questions/999/answers", json!({"user_id": "nope"})).await;
        assert_eq!(res.0, 404);

        let res: (u16, ErrorResponse) =
            test_post_raw(&store, "/questions/999/answers", "not json").await;
        assert_eq!(res.0, 404);
    }

    #[actix_rt::test]
    async fn test_create_answer_invalid_user_id() {
        let store = new_store();
        let question = create_question(&store, "Test question?");

        let res: (u16, ErrorResponse) = test_post(
            &store,
            &format!("/questions/{}/answers", question.id),
            json!({"user_id": "12345", "text": "Test answer"}),
        )
        .await;

        assert_eq!(res.0, 400);
        assert_eq!(res.1.errors, vec!["user_id must be a valid UUID"]);
        assert_eq!(store.answer_count(), 0);
    }

    #[actix_rt::test]
    async fn test_create_answer_missing_fields() {
        let store = new_store();
        let question = create_question(&store, "Test question?");

        let res: (u16, ErrorResponse) = test_post(
            &store,
            &format!("/questions/{}/answers", question.id),
            json!({"text": ""}),
        )
        .await;

        assert_eq!(res.0, 400);
        assert_eq!(
            res.1.errors,
            vec!["text must not be blank", "user_id is required"]
        );
        assert_eq!(store.answer_count(), 0);
    }

    #[actix_rt::test]
    async fn test_create_answer_malformed_json() {
        let store = new_store();
        let question = create_question(&store, "Test question?");

        let res: (u16, ErrorResponse) = test_post_raw(
            &store,
            &format!("/questions/{}/answers", question.id),
            "{\"user_id\": 42}",
        )
        .await;

        assert_eq!(res.0, 400);
        assert_eq!(store.answer_count(), 0);
    }
}
