use std::fmt;

use chrono::{DateTime, Utc};
use diesel::{self, ExpressionMethods, OptionalExtension, PgConnection, QueryDsl, RunQueryDsl};
use diesel::{Identifiable, Insertable, Queryable, Selectable, SelectableHelper};
use serde::{Deserialize, Serialize};

use errors::Error;

use crate::models::{truncate, Answer};
use crate::schema::questions::{self, table};

#[derive(Clone, Debug, Deserialize, Identifiable, PartialEq, Queryable, Selectable, Serialize)]
#[diesel(table_name = questions)]
pub struct Question {
    pub id: i32,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = questions)]
pub struct NewQuestion<'a> {
    pub text: &'a str,
}

/// Listing row: only the columns the list view exposes are selected.
#[derive(Clone, Debug, Deserialize, PartialEq, Queryable, Selectable, Serialize)]
#[diesel(table_name = questions)]
pub struct QuestionSummary {
    pub id: i32,
    pub text: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct QuestionWithAnswers {
    pub question: Question,
    pub answers: Vec<Answer>,
}

impl Question {
    pub fn create(conn: &mut PgConnection, text: &str) -> Result<Question, Error> {
        let question = diesel::insert_into(table)
            .values(NewQuestion { text })
            .returning(Question::as_returning())
            .get_result(conn)?;

        Ok(question)
    }

    pub fn get_all(conn: &mut PgConnection) -> Result<Vec<QuestionSummary>, Error> {
        use questions::dsl::{created_at, id, questions as questions_table};

        let results = questions_table
            .select(QuestionSummary::as_select())
            .order((created_at.desc(), id.desc()))
            .load(conn)?;

        Ok(results)
    }

    pub fn find(conn: &mut PgConnection, question_id: i32) -> Result<Question, Error> {
        let question: Option<Question> = table
            .find(question_id)
            .select(Question::as_select())
            .first(conn)
            .optional()?;

        question.ok_or_else(|| question_not_found(question_id))
    }

    pub fn exists(conn: &mut PgConnection, question_id: i32) -> Result<bool, Error> {
        let found: bool =
            diesel::select(diesel::dsl::exists(table.find(question_id))).get_result(conn)?;

        Ok(found)
    }

    /// Answers go with the question through the `ON DELETE CASCADE` foreign key.
    pub fn delete(conn: &mut PgConnection, question_id: i32) -> Result<(), Error> {
        let deleted = diesel::delete(table.find(question_id)).execute(conn)?;
        if deleted == 0 {
            return Err(question_not_found(question_id));
        }

        Ok(())
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Question #{}: {}", self.id, truncate(&self.text, 50))
    }
}

pub(crate) fn question_not_found(question_id: i32) -> Error {
    Error::NotFound(format!("Question {} not found", question_id))
}
