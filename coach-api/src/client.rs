use reqwest::{Client, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::dto::{
    CreateExerciseRequest, EvaluationTemplateDto, ExerciseDto, ExerciseResponseDto,
    ExerciseSearchQuery, ExerciseSummaryDto, PracticeHistoryItemDto, PracticeSessionDetailDto,
};

/// HTTP client for the coaching backend.
///
/// Every method maps to exactly one endpoint and returns the raw DTO; display
/// normalization happens in the caller.
#[derive(Debug, Clone)]
pub struct CoachApiClient {
    client: Client,
    base_url: Url,
}

impl CoachApiClient {
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let client = Client::builder()
            .build()
            .map_err(|e| ApiError::Other(format!("Failed to build HTTP client: {}", e)))?;
        Self::with_client(base_url, client)
    }

    pub fn with_client(base_url: &str, client: Client) -> Result<Self, ApiError> {
        // Trailing slash so relative joins keep any path prefix (e.g. /api).
        let normalized = format!("{}/", base_url.trim_end_matches('/'));
        let base_url =
            Url::parse(&normalized).map_err(|e| ApiError::InvalidUrl(format!("{base_url}: {e}")))?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| ApiError::InvalidUrl(format!("{path}: {e}")))
    }

    async fn send(&self, request: RequestBuilder, call_name: &str) -> Result<Response, ApiError> {
        let response = request.send().await.map_err(|e| ApiError::Request {
            call: call_name.to_string(),
            message: e.to_string(),
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::debug!(call = call_name, %status, "request failed");
            return Err(ApiError::Status {
                call: call_name.to_string(),
                status: status.as_u16(),
                body,
            });
        }

        Ok(response)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        call_name: &str,
    ) -> Result<T, ApiError> {
        let response = self.send(request, call_name).await?;
        let raw = response.text().await.map_err(|e| ApiError::Request {
            call: call_name.to_string(),
            message: e.to_string(),
        })?;

        serde_json::from_str(&raw).map_err(|e| ApiError::Parse {
            call: call_name.to_string(),
            message: e.to_string(),
        })
    }

    async fn send_without_body(
        &self,
        request: RequestBuilder,
        call_name: &str,
    ) -> Result<(), ApiError> {
        let response = self.send(request, call_name).await?;
        response.bytes().await.map_err(|e| ApiError::Request {
            call: call_name.to_string(),
            message: e.to_string(),
        })?;
        Ok(())
    }

    pub async fn search_exercises(
        &self,
        query: &ExerciseSearchQuery,
    ) -> Result<Vec<ExerciseSummaryDto>, ApiError> {
        self.get_json(
            self.client
                .get(self.endpoint("exercises")?)
                .query(&query.to_pairs()),
            "GET /exercises",
        )
        .await
    }

    pub async fn popular_exercises(&self, limit: u32) -> Result<Vec<ExerciseSummaryDto>, ApiError> {
        self.get_json(
            self.client
                .get(self.endpoint("exercises/popular")?)
                .query(&[("limit", limit)]),
            "GET /exercises/popular",
        )
        .await
    }

    pub async fn exercise(&self, id: i64) -> Result<ExerciseDto, ApiError> {
        self.get_json(
            self.client.get(self.endpoint(&format!("exercises/{id}"))?),
            "GET /exercises/{id}",
        )
        .await
    }

    pub async fn lesson_planning_exercises(
        &self,
        team_id: Option<i64>,
    ) -> Result<Vec<ExerciseSummaryDto>, ApiError> {
        let mut request = self.client.get(self.endpoint("exercises/lesson-planning")?);
        if let Some(team_id) = team_id {
            request = request.query(&[("teamId", team_id)]);
        }

        self.get_json(request, "GET /exercises/lesson-planning")
            .await
    }

    pub async fn create_exercise(
        &self,
        request: &CreateExerciseRequest,
    ) -> Result<ExerciseResponseDto, ApiError> {
        self.get_json(
            self.client.post(self.endpoint("exercises")?).json(request),
            "POST /exercises",
        )
        .await
    }

    pub async fn update_exercise(
        &self,
        id: i64,
        request: &CreateExerciseRequest,
    ) -> Result<ExerciseResponseDto, ApiError> {
        self.get_json(
            self.client
                .put(self.endpoint(&format!("exercises/{id}"))?)
                .json(request),
            "PUT /exercises/{id}",
        )
        .await
    }

    pub async fn delete_exercise(&self, id: i64) -> Result<(), ApiError> {
        self.send_without_body(
            self.client.delete(self.endpoint(&format!("exercises/{id}"))?),
            "DELETE /exercises/{id}",
        )
        .await
    }

    pub async fn duplicate_exercise(&self, id: i64) -> Result<ExerciseResponseDto, ApiError> {
        self.get_json(
            self.client
                .post(self.endpoint(&format!("exercises/{id}/duplicate"))?),
            "POST /exercises/{id}/duplicate",
        )
        .await
    }

    pub async fn evaluation_templates(&self) -> Result<Vec<EvaluationTemplateDto>, ApiError> {
        self.get_json(
            self.client.get(self.endpoint("evaluation-templates")?),
            "GET /evaluation-templates",
        )
        .await
    }

    pub async fn practice_history(&self) -> Result<Vec<PracticeHistoryItemDto>, ApiError> {
        self.get_json(
            self.client.get(self.endpoint("practice-history")?),
            "GET /practice-history",
        )
        .await
    }

    pub async fn practice_session(&self, id: i64) -> Result<PracticeSessionDetailDto, ApiError> {
        self.get_json(
            self.client
                .get(self.endpoint(&format!("practice-history/{id}"))?),
            "GET /practice-history/{id}",
        )
        .await
    }
}

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Invalid API URL: {0}")]
    InvalidUrl(String),
    #[error("Failed to call {call}: {message}")]
    Request { call: String, message: String },
    #[error("{call} returned status {status}")]
    Status {
        call: String,
        status: u16,
        body: String,
    },
    #[error("Failed to parse {call} response: {message}")]
    Parse { call: String, message: String },
    #[error("{0}")]
    Other(String),
}

impl ApiError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Status { status: 404, .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn endpoint_keeps_base_path_prefix() {
        let client = CoachApiClient::new("http://localhost:8080/api/").unwrap();

        assert_eq!(
            client.endpoint("/exercises/popular").unwrap().as_str(),
            "http://localhost:8080/api/exercises/popular"
        );
    }

    #[test]
    fn new_rejects_invalid_url() {
        let result = CoachApiClient::new("not a url");
        assert!(matches!(result, Err(ApiError::InvalidUrl(_))));
    }

    #[tokio::test]
    async fn search_sends_query_pairs() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/exercises"))
            .and(query_param("search", "freeze"))
            .and(query_param("focusAreaIds", "1,2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"id": 1, "name": "Freeze Tag", "minimumDurationMinutes": 10, "popular": true}
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let client = CoachApiClient::new(&server.uri()).unwrap();
        let query = ExerciseSearchQuery::default()
            .with_search("freeze")
            .with_focus_areas([1, 2]);
        let exercises = client.search_exercises(&query).await.unwrap();

        assert_eq!(exercises.len(), 1);
        assert_eq!(exercises[0].name, "Freeze Tag");
        assert_eq!(exercises[0].popular, Some(true));
    }

    #[tokio::test]
    async fn create_posts_camel_case_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/exercises"))
            .and(body_json(serde_json::json!({
                "name": "Yes, And",
                "description": null,
                "minimumDurationMinutes": 15,
                "focusAreaIds": [4],
                "public": false,
                "evaluationTemplateId": null
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
                "id": 42, "name": "Yes, And", "minimumDurationMinutes": 15
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = CoachApiClient::new(&server.uri()).unwrap();
        let created = client
            .create_exercise(&CreateExerciseRequest {
                name: "Yes, And".to_string(),
                description: None,
                minimum_duration_minutes: 15,
                focus_area_ids: vec![4],
                public: false,
                evaluation_template_id: None,
                custom_criteria: vec![],
            })
            .await
            .unwrap();

        assert_eq!(created.id, 42);
        assert!(!created.archived);
    }

    #[tokio::test]
    async fn error_status_is_reported_with_call_name() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/exercises/99"))
            .respond_with(ResponseTemplate::new(404).set_body_string("no such exercise"))
            .mount(&server)
            .await;

        let client = CoachApiClient::new(&server.uri()).unwrap();
        let err = client.exercise(99).await.unwrap_err();

        assert!(err.is_not_found());
        match err {
            ApiError::Status { call, body, .. } => {
                assert_eq!(call, "GET /exercises/{id}");
                assert_eq!(body, "no such exercise");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn malformed_body_is_a_parse_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/practice-history"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{not json"))
            .mount(&server)
            .await;

        let client = CoachApiClient::new(&server.uri()).unwrap();
        let err = client.practice_history().await.unwrap_err();

        assert!(matches!(err, ApiError::Parse { .. }));
    }

    #[tokio::test]
    async fn delete_ignores_response_body() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/exercises/5"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let client = CoachApiClient::new(&server.uri()).unwrap();
        client.delete_exercise(5).await.unwrap();
    }

    #[tokio::test]
    async fn delete_reports_truncated_response_body() {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};
        use tokio::net::TcpListener;

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let server = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = [0u8; 1024];
            let _ = socket.read(&mut request).await.unwrap();
            socket
                .write_all(b"HTTP/1.1 200 OK\r\nContent-Length: 10\r\n\r\nok")
                .await
                .unwrap();
        });

        let client = CoachApiClient::new(&format!("http://{}", addr)).unwrap();
        let err = client.delete_exercise(5).await.unwrap_err();
        server.await.unwrap();

        match err {
            ApiError::Request { call, .. } => assert_eq!(call, "DELETE /exercises/{id}"),
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
