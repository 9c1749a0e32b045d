//! In-memory backend for service and hook tests.

use std::sync::atomic::{AtomicBool, AtomicI64, AtomicUsize, Ordering};
use std::sync::{Mutex, RwLock};

use async_trait::async_trait;
use coach_api::dto::{
    CreateExerciseRequest, EvaluationTemplateDto, ExerciseDto, ExerciseResponseDto,
    ExerciseSearchQuery, ExerciseSummaryDto, FocusAreaDto, PracticeHistoryItemDto,
    PracticeSessionDetailDto,
};
use coach_api::ApiError;
use tokio::sync::oneshot;

use super::{ExerciseApi, PracticeHistoryApi};

const FIRST_CREATED_ID: i64 = 1000;

#[derive(Default)]
pub struct MockCoachApi {
    exercises: RwLock<Vec<ExerciseDto>>,
    templates: RwLock<Vec<EvaluationTemplateDto>>,
    history: RwLock<Vec<PracticeHistoryItemDto>>,
    sessions: RwLock<Vec<PracticeSessionDetailDto>>,
    failing: AtomicBool,
    calls: AtomicUsize,
    created: AtomicI64,
    write_gate: Mutex<Option<oneshot::Receiver<()>>>,
}

impl MockCoachApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_exercises(self, exercises: Vec<ExerciseDto>) -> Self {
        *self.exercises.write().unwrap() = exercises;
        self
    }

    pub fn with_templates(self, templates: Vec<EvaluationTemplateDto>) -> Self {
        *self.templates.write().unwrap() = templates;
        self
    }

    pub fn with_history(self, history: Vec<PracticeHistoryItemDto>) -> Self {
        *self.history.write().unwrap() = history;
        self
    }

    pub fn with_sessions(self, sessions: Vec<PracticeSessionDetailDto>) -> Self {
        *self.sessions.write().unwrap() = sessions;
        self
    }

    /// Make every following call fail with a request error.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Hold the next create or update until the returned sender fires.
    pub fn hold_writes(&self) -> oneshot::Sender<()> {
        let (release, gate) = oneshot::channel();
        *self.write_gate.lock().unwrap() = Some(gate);
        release
    }

    /// Snapshot of the stored exercises (for test assertions).
    pub fn stored_exercises(&self) -> Vec<ExerciseDto> {
        self.exercises.read().unwrap().clone()
    }

    fn record_call(&self, call: &str) -> Result<(), ApiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing.load(Ordering::SeqCst) {
            return Err(ApiError::Request {
                call: call.to_string(),
                message: "connection refused".to_string(),
            });
        }
        Ok(())
    }

    async fn pass_write_gate(&self) {
        let gate = self.write_gate.lock().unwrap().take();
        if let Some(gate) = gate {
            let _ = gate.await;
        }
    }

    fn next_id(&self) -> i64 {
        FIRST_CREATED_ID + self.created.fetch_add(1, Ordering::SeqCst)
    }
}

fn not_found(call: &str) -> ApiError {
    ApiError::Status {
        call: call.to_string(),
        status: 404,
        body: String::new(),
    }
}

/// A minimal exercise fixture.
pub fn sample_exercise(id: i64, name: &str, minutes: u32) -> ExerciseDto {
    ExerciseDto {
        id,
        name: name.to_string(),
        description: None,
        minimum_duration_minutes: minutes,
        formatted_minimum_duration: None,
        focus_areas: vec![],
        public: None,
        favorite: None,
        popular: None,
        usage_count: None,
        created_by_coach_name: None,
        source_label: None,
        has_default_evaluation_template: None,
        evaluation_template_id: None,
        evaluation_template_name: None,
    }
}

pub fn focus_area(id: i64, name: &str) -> FocusAreaDto {
    FocusAreaDto {
        id,
        name: name.to_string(),
        color_code: None,
    }
}

fn to_summary(dto: &ExerciseDto) -> ExerciseSummaryDto {
    ExerciseSummaryDto {
        id: dto.id,
        name: dto.name.clone(),
        description: dto.description.clone(),
        minimum_duration_minutes: dto.minimum_duration_minutes,
        formatted_minimum_duration: dto.formatted_minimum_duration.clone(),
        focus_areas: dto.focus_areas.clone(),
        source_label: dto.source_label.clone(),
        public: dto.public,
        favorite: dto.favorite,
        popular: dto.popular,
        usage_count: dto.usage_count,
        has_default_evaluation_template: dto.has_default_evaluation_template,
    }
}

fn to_response(dto: &ExerciseDto) -> ExerciseResponseDto {
    ExerciseResponseDto {
        id: dto.id,
        name: dto.name.clone(),
        description: dto.description.clone(),
        minimum_duration_minutes: dto.minimum_duration_minutes,
        focus_areas: dto.focus_areas.clone(),
        public: dto.public,
        created_by_coach_name: dto.created_by_coach_name.clone(),
        has_default_evaluation_template: dto.has_default_evaluation_template,
        evaluation_template_id: dto.evaluation_template_id,
        evaluation_template_name: dto.evaluation_template_name.clone(),
        archived: false,
    }
}

fn apply_request(dto: &mut ExerciseDto, request: &CreateExerciseRequest) {
    dto.name = request.name.clone();
    dto.description = request.description.clone();
    dto.minimum_duration_minutes = request.minimum_duration_minutes;
    dto.focus_areas = request
        .focus_area_ids
        .iter()
        .map(|id| focus_area(*id, &format!("Focus {}", id)))
        .collect();
    dto.public = Some(request.public);
    dto.evaluation_template_id = request.evaluation_template_id;
}

#[async_trait]
impl ExerciseApi for MockCoachApi {
    async fn search_exercises(
        &self,
        query: &ExerciseSearchQuery,
    ) -> Result<Vec<ExerciseSummaryDto>, ApiError> {
        self.record_call("GET /exercises")?;
        let needle = query.search.as_deref().unwrap_or("").to_lowercase();
        let limit = query.limit.map(|l| l as usize).unwrap_or(usize::MAX);

        Ok(self
            .exercises
            .read()
            .unwrap()
            .iter()
            .filter(|dto| dto.name.to_lowercase().contains(&needle))
            .filter(|dto| {
                query.focus_area_ids.is_empty()
                    || dto
                        .focus_areas
                        .iter()
                        .any(|fa| query.focus_area_ids.contains(&fa.id))
            })
            .take(limit)
            .map(to_summary)
            .collect())
    }

    async fn popular_exercises(&self, limit: u32) -> Result<Vec<ExerciseSummaryDto>, ApiError> {
        self.record_call("GET /exercises/popular")?;
        Ok(self
            .exercises
            .read()
            .unwrap()
            .iter()
            .filter(|dto| dto.popular == Some(true))
            .take(limit as usize)
            .map(to_summary)
            .collect())
    }

    async fn exercise(&self, id: i64) -> Result<ExerciseDto, ApiError> {
        self.record_call("GET /exercises/{id}")?;
        self.exercises
            .read()
            .unwrap()
            .iter()
            .find(|dto| dto.id == id)
            .cloned()
            .ok_or_else(|| not_found("GET /exercises/{id}"))
    }

    async fn lesson_planning_exercises(
        &self,
        _team_id: Option<i64>,
    ) -> Result<Vec<ExerciseSummaryDto>, ApiError> {
        self.record_call("GET /exercises/lesson-planning")?;
        Ok(self.exercises.read().unwrap().iter().map(to_summary).collect())
    }

    async fn create_exercise(
        &self,
        request: &CreateExerciseRequest,
    ) -> Result<ExerciseResponseDto, ApiError> {
        self.record_call("POST /exercises")?;
        self.pass_write_gate().await;
        let mut dto = sample_exercise(self.next_id(), &request.name, 0);
        apply_request(&mut dto, request);

        let response = to_response(&dto);
        self.exercises.write().unwrap().push(dto);
        Ok(response)
    }

    async fn update_exercise(
        &self,
        id: i64,
        request: &CreateExerciseRequest,
    ) -> Result<ExerciseResponseDto, ApiError> {
        self.record_call("PUT /exercises/{id}")?;
        self.pass_write_gate().await;
        let mut exercises = self.exercises.write().unwrap();
        let dto = exercises
            .iter_mut()
            .find(|dto| dto.id == id)
            .ok_or_else(|| not_found("PUT /exercises/{id}"))?;

        apply_request(dto, request);
        Ok(to_response(dto))
    }

    async fn delete_exercise(&self, id: i64) -> Result<(), ApiError> {
        self.record_call("DELETE /exercises/{id}")?;
        let mut exercises = self.exercises.write().unwrap();
        let before = exercises.len();
        exercises.retain(|dto| dto.id != id);

        if exercises.len() == before {
            return Err(not_found("DELETE /exercises/{id}"));
        }
        Ok(())
    }

    async fn duplicate_exercise(&self, id: i64) -> Result<ExerciseResponseDto, ApiError> {
        self.record_call("POST /exercises/{id}/duplicate")?;
        let original = self
            .exercises
            .read()
            .unwrap()
            .iter()
            .find(|dto| dto.id == id)
            .cloned()
            .ok_or_else(|| not_found("POST /exercises/{id}/duplicate"))?;

        let copy = ExerciseDto {
            id: self.next_id(),
            name: format!("{} (Copy)", original.name),
            public: Some(false),
            popular: None,
            favorite: None,
            usage_count: None,
            ..original
        };

        let response = to_response(&copy);
        self.exercises.write().unwrap().push(copy);
        Ok(response)
    }

    async fn evaluation_templates(&self) -> Result<Vec<EvaluationTemplateDto>, ApiError> {
        self.record_call("GET /evaluation-templates")?;
        Ok(self.templates.read().unwrap().clone())
    }
}

#[async_trait]
impl PracticeHistoryApi for MockCoachApi {
    async fn practice_history(&self) -> Result<Vec<PracticeHistoryItemDto>, ApiError> {
        self.record_call("GET /practice-history")?;
        Ok(self.history.read().unwrap().clone())
    }

    async fn practice_session(&self, id: i64) -> Result<PracticeSessionDetailDto, ApiError> {
        self.record_call("GET /practice-history/{id}")?;
        self.sessions
            .read()
            .unwrap()
            .iter()
            .find(|session| session.id == id)
            .cloned()
            .ok_or_else(|| not_found("GET /practice-history/{id}"))
    }
}
