//! Editable form state for exercises and lessons.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseFormModel {
    pub name: String,
    pub description: String,
    pub minimum_duration_minutes: u32,
    pub focus_area_ids: Vec<i64>,
    pub is_public: bool,
    pub evaluation_template_id: Option<i64>,
    /// Criteria typed into the form. Never restored from a saved exercise.
    pub custom_criteria: Vec<CriterionFormModel>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CriterionFormModel {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonFormModel {
    pub title: String,
    #[serde(with = "time::serde::rfc3339")]
    pub scheduled_at: OffsetDateTime,
    pub team_id: Option<i64>,
    pub exercises: Vec<LessonExerciseFormModel>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonExerciseFormModel {
    pub exercise_id: i64,
    pub order: u32,
    pub duration_minutes: u32,
}

/// A validation failure tied to one form field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormFieldError {
    pub field: &'static str,
    pub message: String,
}

impl FormFieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}
