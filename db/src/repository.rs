use uuid::Uuid;

use errors::Error;

use crate::models::{Answer, Question, QuestionSummary, QuestionWithAnswers};
use crate::{get_conn, PgPool};

/// Storage operations on questions. Implementations are called from blocking
/// threads, so every method is synchronous.
pub trait QuestionRepository: Send + Sync {
    /// All questions, newest first.
    fn list(&self) -> Result<Vec<QuestionSummary>, Error>;

    fn create(&self, text: &str) -> Result<Question, Error>;

    /// The question together with its answers, oldest answer first.
    fn get(&self, id: i32) -> Result<QuestionWithAnswers, Error>;

    fn exists(&self, id: i32) -> Result<bool, Error>;

    /// Removes the question and every answer it owns in one atomic step.
    fn delete(&self, id: i32) -> Result<(), Error>;
}

pub trait AnswerRepository: Send + Sync {
    fn create(&self, question_id: i32, user_id: Uuid, text: &str) -> Result<Answer, Error>;

    fn get(&self, id: i32) -> Result<Answer, Error>;

    fn list_for_question(&self, question_id: i32) -> Result<Vec<Answer>, Error>;

    fn list_by_user(&self, user_id: Uuid) -> Result<Vec<Answer>, Error>;

    fn delete(&self, id: i32) -> Result<(), Error>;
}

#[derive(Clone)]
pub struct PgRepository {
    pool: PgPool,
}

impl PgRepository {
    pub fn new(pool: PgPool) -> Self {
        PgRepository { pool }
    }
}

impl QuestionRepository for PgRepository {
    fn list(&self) -> Result<Vec<QuestionSummary>, Error> {
        let mut conn = get_conn(&self.pool)?;
        Question::get_all(&mut conn)
    }

    fn create(&self, text: &str) -> Result<Question, Error> {
        let mut conn = get_conn(&self.pool)?;
        Question::create(&mut conn, text)
    }

    fn get(&self, id: i32) -> Result<QuestionWithAnswers, Error> {
        let mut conn = get_conn(&self.pool)?;

        // one snapshot for the question and its answers
        conn.build_transaction()
            .repeatable_read()
            .read_only()
            .run::<_, Error, _>(|conn| {
                let question = Question::find(conn, id)?;
                let answers = Answer::find_by_question(conn, &question)?;
                Ok(QuestionWithAnswers { question, answers })
            })
    }

    fn exists(&self, id: i32) -> Result<bool, Error> {
        let mut conn = get_conn(&self.pool)?;
        Question::exists(&mut conn, id)
    }

    fn delete(&self, id: i32) -> Result<(), Error> {
        let mut conn = get_conn(&self.pool)?;
        Question::delete(&mut conn, id)
    }
}

impl AnswerRepository for PgRepository {
    fn create(&self, question_id: i32, user_id: Uuid, text: &str) -> Result<Answer, Error> {
        let mut conn = get_conn(&self.pool)?;
        Answer::create(&mut conn, question_id, user_id, text)
    }

    fn get(&self, id: i32) -> Result<Answer, Error> {
        let mut conn = get_conn(&self.pool)?;
        Answer::find(&mut conn, id)
    }

    fn list_for_question(&self, question_id: i32) -> Result<Vec<Answer>, Error> {
        let mut conn = get_conn(&self.pool)?;
        let question = Question::find(&mut conn, question_id)?;
        Answer::find_by_question(&mut conn, &question)
    }

    fn list_by_user(&self, user_id: Uuid) -> Result<Vec<Answer>, Error> {
        let mut conn = get_conn(&self.pool)?;
        Answer::find_by_user(&mut conn, user_id)
    }

    fn delete(&self, id: i32) -> Result<(), Error> {
        let mut conn = get_conn(&self.pool)?;
        Answer::delete(&mut conn, id)
    }
}
