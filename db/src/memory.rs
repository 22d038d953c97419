use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use chrono::Utc;
use uuid::Uuid;

use errors::Error;

use crate::models::{
    answer_not_found, question_not_found, Answer, Question, QuestionSummary, QuestionWithAnswers,
};
use crate::repository::{AnswerRepository, QuestionRepository};

#[derive(Default)]
struct State {
    questions: BTreeMap<i32, Question>,
    answers: BTreeMap<i32, Answer>,
    last_question_id: i32,
    last_answer_id: i32,
}

impl State {
    fn answers_where<F>(&self, predicate: F) -> Vec<Answer>
    where
        F: Fn(&Answer) -> bool,
    {
        let mut results: Vec<Answer> = self
            .answers
            .values()
            .filter(|answer| predicate(answer))
            .cloned()
            .collect();
        results.sort_by(|a, b| (a.created_at, a.id).cmp(&(b.created_at, b.id)));
        results
    }
}

/// Process-local store with the same contract as the Postgres repository.
/// Everything happens under one lock, so the cascade on question delete is atomic.
#[derive(Default)]
pub struct MemoryStore {
    state: Mutex<State>,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore::default()
    }

    pub fn question_count(&self) -> usize {
        self.state
            .lock()
            .expect("memory store lock poisoned")
            .questions
            .len()
    }

    pub fn answer_count(&self) -> usize {
        self.state
            .lock()
            .expect("memory store lock poisoned")
            .answers
            .len()
    }

    fn state(&self) -> Result<MutexGuard<'_, State>, Error> {
        self.state
            .lock()
            .map_err(|_| Error::InternalServerError("Memory store lock poisoned".into()))
    }
}

impl QuestionRepository for MemoryStore {
    fn list(&self) -> Result<Vec<QuestionSummary>, Error> {
        let state = self.state()?;
        let mut questions: Vec<&Question> = state.questions.values().collect();
        questions.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));

        Ok(questions
            .into_iter()
            .map(|question| QuestionSummary {
                id: question.id,
                text: question.text.clone(),
            })
            .collect())
    }

    fn create(&self, text: &str) -> Result<Question, Error> {
        let mut state = self.state()?;
        state.last_question_id += 1;
        let question = Question {
            id: state.last_question_id,
            text: text.to_string(),
            created_at: Utc::now(),
        };
        state.questions.insert(question.id, question.clone());

        Ok(question)
    }

    fn get(&self, id: i32) -> Result<QuestionWithAnswers, Error> {
        let state = self.state()?;
        let question = state
            .questions
            .get(&id)
            .cloned()
            .ok_or_else(|| question_not_found(id))?;
        let answers = state.answers_where(|answer| answer.question_id == id);

        Ok(QuestionWithAnswers { question, answers })
    }

    fn exists(&self, id: i32) -> Result<bool, Error> {
        Ok(self.state()?.questions.contains_key(&id))
    }

    fn delete(&self, id: i32) -> Result<(), Error> {
        let mut state = self.state()?;
        if state.questions.remove(&id).is_none() {
            return Err(question_not_found(id));
        }
        state.answers.retain(|_, answer| answer.question_id != id);

        Ok(())
    }
}

impl AnswerRepository for MemoryStore {
    fn create(&self, question_id: i32, user_id: Uuid, text: &str) -> Result<Answer, Error> {
        let mut state = self.state()?;
        if !state.questions.contains_key(&question_id) {
            return Err(Error::NotFound("Referenced record not found".into()));
        }

        state.last_answer_id += 1;
        let answer = Answer {
            id: state.last_answer_id,
            question_id,
            user_id,
            text: text.to_string(),
            created_at: Utc::now(),
        };
        state.answers.insert(answer.id, answer.clone());

        Ok(answer)
    }

    fn get(&self, id: i32) -> Result<Answer, Error> {
        self.state()?
            .answers
            .get(&id)
            .cloned()
            .ok_or_else(|| answer_not_found(id))
    }

    fn list_for_question(&self, question_id: i32) -> Result<Vec<Answer>, Error> {
        let state = self.state()?;
        if !state.questions.contains_key(&question_id) {
            return Err(question_not_found(question_id));
        }

        Ok(state.answers_where(|answer| answer.question_id == question_id))
    }

    fn list_by_user(&self, user_id: Uuid) -> Result<Vec<Answer>, Error> {
        Ok(self.state()?.answers_where(|answer| answer.user_id == user_id))
    }

    fn delete(&self, id: i32) -> Result<(), Error> {
        match self.state()?.answers.remove(&id) {
            Some(_) => Ok(()),
            None => Err(answer_not_found(id)),
        }
    }
}
