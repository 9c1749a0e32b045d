use serde::Serialize;
use time::OffsetDateTime;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonViewModel {
    pub id: i64,
    pub title: String,
    pub team_id: Option<i64>,
    pub team_name: Option<String>,
    pub scheduling: LessonScheduling,
    pub exercises: LessonExercises,
    pub focus_areas: LessonFocusAreas,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonScheduling {
    #[serde(with = "time::serde::rfc3339")]
    pub date: OffsetDateTime,
    pub formatted: String,
    pub is_upcoming: bool,
    pub is_past: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonExercises {
    pub count: u32,
    pub total_duration: u32,
    pub total_duration_formatted: String,
    /// Sorted by `order`.
    pub list: Vec<LessonExerciseViewModel>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonExerciseViewModel {
    pub exercise_id: i64,
    pub name: String,
    pub order: u32,
    pub duration_minutes: u32,
    pub duration_formatted: String,
    pub focus_areas: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonFocusAreas {
    /// Minutes per focus area, in first-seen order.
    pub breakdown: Vec<FocusAreaMinutes>,
    /// Up to three focus area names with the most minutes.
    pub primary: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FocusAreaMinutes {
    pub id: i64,
    pub name: String,
    pub minutes: u32,
}
