use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::FocusAreaDto;

/// One planned exercise slot inside a lesson.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonExerciseDto {
    pub exercise_id: i64,
    pub exercise_name: String,
    pub duration_minutes: u32,
    pub order_index: u32,
    #[serde(default)]
    pub focus_areas: Vec<FocusAreaDto>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonDetailDto {
    pub id: i64,
    pub title: String,
    #[serde(with = "time::serde::rfc3339")]
    pub scheduled_at: OffsetDateTime,
    pub team_id: Option<i64>,
    pub team_name: Option<String>,
    #[serde(default)]
    pub exercises: Vec<LessonExerciseDto>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonSummaryDto {
    pub id: i64,
    pub title: String,
    #[serde(with = "time::serde::rfc3339")]
    pub scheduled_at: OffsetDateTime,
    pub team_name: Option<String>,
    pub exercise_count: u32,
    pub total_duration_minutes: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonExerciseRequest {
    pub exercise_id: i64,
    pub order_index: u32,
    pub duration_minutes: u32,
}

/// Body for creating or updating a lesson plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLessonRequest {
    pub title: String,
    #[serde(with = "time::serde::rfc3339")]
    pub scheduled_at: OffsetDateTime,
    pub team_id: Option<i64>,
    pub exercises: Vec<LessonExerciseRequest>,
}
