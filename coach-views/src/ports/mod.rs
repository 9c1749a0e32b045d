//! Network seams the services depend on.
//!
//! `CoachApiClient` implements both traits; tests swap in an in-memory mock.

mod http;
#[cfg(test)]
pub mod mock;

use async_trait::async_trait;
use coach_api::dto::{
    CreateExerciseRequest, EvaluationTemplateDto, ExerciseDto, ExerciseResponseDto,
    ExerciseSearchQuery, ExerciseSummaryDto, PracticeHistoryItemDto, PracticeSessionDetailDto,
};
use coach_api::ApiError;

#[async_trait]
pub trait ExerciseApi: Send + Sync + 'static {
    async fn search_exercises(
        &self,
        query: &ExerciseSearchQuery,
    ) -> Result<Vec<ExerciseSummaryDto>, ApiError>;

    async fn popular_exercises(&self, limit: u32) -> Result<Vec<ExerciseSummaryDto>, ApiError>;

    async fn exercise(&self, id: i64) -> Result<ExerciseDto, ApiError>;

    /// Exercises offered when planning a lesson, optionally scoped to a team.
    async fn lesson_planning_exercises(
        &self,
        team_id: Option<i64>,
    ) -> Result<Vec<ExerciseSummaryDto>, ApiError>;

    async fn create_exercise(
        &self,
        request: &CreateExerciseRequest,
    ) -> Result<ExerciseResponseDto, ApiError>;

    async fn update_exercise(
        &self,
        id: i64,
        request: &CreateExerciseRequest,
    ) -> Result<ExerciseResponseDto, ApiError>;

    async fn delete_exercise(&self, id: i64) -> Result<(), ApiError>;

    async fn duplicate_exercise(&self, id: i64) -> Result<ExerciseResponseDto, ApiError>;

    async fn evaluation_templates(&self) -> Result<Vec<EvaluationTemplateDto>, ApiError>;
}

#[async_trait]
pub trait PracticeHistoryApi: Send + Sync + 'static {
    async fn practice_history(&self) -> Result<Vec<PracticeHistoryItemDto>, ApiError>;

    async fn practice_session(&self, id: i64) -> Result<PracticeSessionDetailDto, ApiError>;
}
