use std::fmt;

use chrono::{DateTime, Utc};
use diesel::{self, ExpressionMethods, OptionalExtension, PgConnection, QueryDsl, RunQueryDsl};
use diesel::{
    Associations, BelongingToDsl, Identifiable, Insertable, Queryable, Selectable,
    SelectableHelper,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use errors::Error;

use crate::models::Question;
use crate::schema::answers::{self, table};

#[derive(
    Associations, Clone, Debug, Deserialize, Identifiable, PartialEq, Queryable, Selectable, Serialize,
)]
#[diesel(belongs_to(Question))]
#[diesel(table_name = answers)]
pub struct Answer {
    pub id: i32,
    pub question_id: i32,
    pub user_id: Uuid,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = answers)]
pub struct NewAnswer<'a> {
    pub question_id: i32,
    pub user_id: Uuid,
    pub text: &'a str,
}

impl Answer {
    pub fn create(
        conn: &mut PgConnection,
        question_id: i32,
        user_id: Uuid,
        text: &str,
    ) -> Result<Answer, Error> {
        let answer = diesel::insert_into(table)
            .values(NewAnswer {
                question_id,
                user_id,
                text,
            })
            .returning(Answer::as_returning())
            .get_result(conn)?;

        Ok(answer)
    }

    pub fn find(conn: &mut PgConnection, answer_id: i32) -> Result<Answer, Error> {
        let answer: Option<Answer> = table
            .find(answer_id)
            .select(Answer::as_select())
            .first(conn)
            .optional()?;

        answer.ok_or_else(|| answer_not_found(answer_id))
    }

    pub fn find_by_question(
        conn: &mut PgConnection,
        question: &Question,
    ) -> Result<Vec<Answer>, Error> {
        use answers::dsl::{created_at, id};

        let results = Answer::belonging_to(question)
            .select(Answer::as_select())
            .order((created_at.asc(), id.asc()))
            .load(conn)?;

        Ok(results)
    }

    pub fn find_by_user(conn: &mut PgConnection, user_id: Uuid) -> Result<Vec<Answer>, Error> {
        use answers::dsl::{created_at, id, user_id as user_id_field};

        let results = table
            .filter(user_id_field.eq(user_id))
            .select(Answer::as_select())
            .order((created_at.asc(), id.asc()))
            .load(conn)?;

        Ok(results)
    }

    pub fn delete(conn: &mut PgConnection, answer_id: i32) -> Result<(), Error> {
        let deleted = diesel::delete(table.find(answer_id)).execute(conn)?;
        if deleted == 0 {
            return Err(answer_not_found(answer_id));
        }

        Ok(())
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Answer #{} to question #{}", self.id, self.question_id)
    }
}

pub(crate) fn answer_not_found(answer_id: i32) -> Error {
    Error::NotFound(format!("Answer {} not found", answer_id))
}
