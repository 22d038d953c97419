//! Response shapes. Each view lists exactly the fields its endpoint exposes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use db::models::{Answer, Question, QuestionSummary, QuestionWithAnswers};

/// Entry of `GET /questions`. No timestamp, no answers.
#[derive(Debug, Deserialize, PartialEq, Serialize)]
pub struct QuestionListItem {
    pub id: i32,
    pub text: String,
}

#[derive(Debug, Deserialize, PartialEq, Serialize)]
pub struct QuestionDetail {
    pub id: i32,
    pub text: String,
    pub created_at: DateTime<Utc>,
    pub answers: Vec<AnswerDetail>,
}

#[derive(Debug, Deserialize, PartialEq, Serialize)]
pub struct AnswerDetail {
    pub id: i32,
    pub question_id: i32,
    pub user_id: Uuid,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

impl From<QuestionSummary> for QuestionListItem {
    fn from(summary: QuestionSummary) -> Self {
        QuestionListItem {
            id: summary.id,
            text: summary.text,
        }
    }
}

impl From<QuestionWithAnswers> for QuestionDetail {
    fn from(detail: QuestionWithAnswers) -> Self {
        QuestionDetail {
            id: detail.question.id,
            text: detail.question.text,
            created_at: detail.question.created_at,
            answers: detail.answers.into_iter().map(AnswerDetail::from).collect(),
        }
    }
}

// a freshly created question has no answers yet
impl From<Question> for QuestionDetail {
    fn from(question: Question) -> Self {
        QuestionWithAnswers {
            question,
            answers: vec![],
        }
        .into()
    }
}

impl From<Answer> for AnswerDetail {
    fn from(answer: Answer) -> Self {
        AnswerDetail {
            id: answer.id,
            question_id: answer.question_id,
            user_id: answer.user_id,
            text: answer.text,
            created_at: answer.created_at,
        }
    }
}
