use serde::Serialize;
use time::OffsetDateTime;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PracticeSessionViewModel {
    pub id: i64,
    pub title: String,
    pub team: Option<String>,
    pub timing: SessionTiming,
    pub participants: SessionParticipants,
    pub progress: SessionProgress,
    pub metrics: SessionMetrics,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionTiming {
    #[serde(with = "time::serde::rfc3339")]
    pub start: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339::option")]
    pub end: Option<OffsetDateTime>,
    /// Whole minutes; `None` while the session is running.
    pub duration_minutes: Option<u32>,
    pub duration_formatted: Option<String>,
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionParticipants {
    pub count: u32,
    pub names: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionProgress {
    pub current_exercise_index: u32,
    pub total_exercises: u32,
    pub percent_complete: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionMetrics {
    pub evaluation_count: u32,
    pub note_count: u32,
}
