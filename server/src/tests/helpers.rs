#[cfg(test)]
pub mod tests {
    use std::sync::Arc;

    use actix_web::{
        http::header::ContentType,
        middleware::NormalizePath,
        test,
        web::{self, Bytes, Data},
        App,
    };
    use serde::{de::DeserializeOwned, Serialize};
    use uuid::Uuid;

    use db::{
        memory::MemoryStore,
        models::{Answer, Question},
        AnswerRepository, QuestionRepository,
    };

    use crate::routes::{not_found, routes};

    pub fn new_store() -> Arc<MemoryStore> {
        Arc::new(MemoryStore::new())
    }

    pub fn create_question(store: &MemoryStore, text: &str) -> Question {
        QuestionRepository::create(store, text).unwrap()
    }

    pub fn create_answer(store: &MemoryStore, question_id: i32, text: &str) -> Answer {
        AnswerRepository::create(store, question_id, Uuid::new_v4(), text).unwrap()
    }

    async fn send(store: &Arc<MemoryStore>, req: test::TestRequest) -> (u16, Bytes) {
        let questions: Arc<dyn QuestionRepository> = store.clone();
        let answers: Arc<dyn AnswerRepository> = store.clone();

        let app = test::init_service(
            App::new()
                .wrap(NormalizePath::trim())
                .app_data(Data::from(questions))
                .app_data(Data::from(answers))
                .configure(routes)
                .default_service(web::route().to(not_found)),
        )
        .await;

        let res = test::call_service(&app, req.to_request()).await;
        let status = res.status().as_u16();
        let body = test::read_body(res).await;

        (status, body)
    }

    fn parse_json<R>(status: u16, body: Bytes) -> R
    where
        R: DeserializeOwned,
    {
        serde_json::from_slice(&body).unwrap_or_else(|_| {
            panic!(
                "read_response_json failed during deserialization. response: {} status: {}",
                String::from_utf8(body.to_vec())
                    .unwrap_or_else(|_| "Could not convert Bytes -> String".to_string()),
                status
            )
        })
    }

    /// Helper for HTTP GET integration tests
    pub async fn test_get<R>(store: &Arc<MemoryStore>, route: &str) -> (u16, R)
    where
        R: DeserializeOwned,
    {
        let (status, body) = send(store, test::TestRequest::get().uri(route)).await;

        (status, parse_json(status, body))
    }

    /// Helper for HTTP POST integration tests
    pub async fn test_post<T: Serialize, R>(
        store: &Arc<MemoryStore>,
        route: &str,
        params: T,
    ) -> (u16, R)
    where
        R: DeserializeOwned,
    {
        let req = test::TestRequest::post().set_json(&params).uri(route);
        let (status, body) = send(store, req).await;

        (status, parse_json(status, body))
    }

    /// POSTs `payload` verbatim as a JSON body, for malformed input
    pub async fn test_post_raw<R>(
        store: &Arc<MemoryStore>,
        route: &str,
        payload: &'static str,
    ) -> (u16, R)
    where
        R: DeserializeOwned,
    {
        let req = test::TestRequest::post()
            .insert_header(ContentType::json())
            .set_payload(payload)
            .uri(route);
        let (status, body) = send(store, req).await;

        (status, parse_json(status, body))
    }

    /// Helper for HTTP DELETE integration tests, returns the status only
    pub async fn test_delete(store: &Arc<MemoryStore>, route: &str) -> u16 {
        let (status, body) = send(store, test::TestRequest::delete().uri(route)).await;
        if status == 204 {
            assert!(body.is_empty());
        }

        status
    }
}
