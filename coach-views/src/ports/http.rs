use async_trait::async_trait;
use coach_api::dto::{
    CreateExerciseRequest, EvaluationTemplateDto, ExerciseDto, ExerciseResponseDto,
    ExerciseSearchQuery, ExerciseSummaryDto, PracticeHistoryItemDto, PracticeSessionDetailDto,
};
use coach_api::{ApiError, CoachApiClient};

use super::{ExerciseApi, PracticeHistoryApi};

#[async_trait]
impl ExerciseApi for CoachApiClient {
    async fn search_exercises(
        &self,
        query: &ExerciseSearchQuery,
    ) -> Result<Vec<ExerciseSummaryDto>, ApiError> {
        CoachApiClient::search_exercises(self, query).await
    }

    async fn popular_exercises(&self, limit: u32) -> Result<Vec<ExerciseSummaryDto>, ApiError> {
        CoachApiClient::popular_exercises(self, limit).await
    }

    async fn exercise(&self, id: i64) -> Result<ExerciseDto, ApiError> {
        CoachApiClient::exercise(self, id).await
    }

    async fn lesson_planning_exercises(
        &self,
        team_id: Option<i64>,
    ) -> Result<Vec<ExerciseSummaryDto>, ApiError> {
        CoachApiClient::lesson_planning_exercises(self, team_id).await
    }

    async fn create_exercise(
        &self,
        request: &CreateExerciseRequest,
    ) -> Result<ExerciseResponseDto, ApiError> {
        CoachApiClient::create_exercise(self, request).await
    }

    async fn update_exercise(
        &self,
        id: i64,
        request: &CreateExerciseRequest,
    ) -> Result<ExerciseResponseDto, ApiError> {
        CoachApiClient::update_exercise(self, id, request).await
    }

    async fn delete_exercise(&self, id: i64) -> Result<(), ApiError> {
        CoachApiClient::delete_exercise(self, id).await
    }

    async fn duplicate_exercise(&self, id: i64) -> Result<ExerciseResponseDto, ApiError> {
        CoachApiClient::duplicate_exercise(self, id).await
    }

    async fn evaluation_templates(&self) -> Result<Vec<EvaluationTemplateDto>, ApiError> {
        CoachApiClient::evaluation_templates(self).await
    }
}

#[async_trait]
impl PracticeHistoryApi for CoachApiClient {
    async fn practice_history(&self) -> Result<Vec<PracticeHistoryItemDto>, ApiError> {
        CoachApiClient::practice_history(self).await
    }

    async fn practice_session(&self, id: i64) -> Result<PracticeSessionDetailDto, ApiError> {
        CoachApiClient::practice_session(self, id).await
    }
}
