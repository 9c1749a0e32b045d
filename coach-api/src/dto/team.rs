use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMemberDto {
    pub id: i64,
    pub name: String,
    pub email: Option<String>,
    pub role: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpcomingLessonDto {
    pub id: i64,
    pub title: String,
    #[serde(with = "time::serde::rfc3339")]
    pub scheduled_at: OffsetDateTime,
}

/// Team row in listings. Carries counts only.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamSummaryDto {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub member_count: u32,
    pub upcoming_lesson_count: Option<u32>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub next_lesson_date: Option<OffsetDateTime>,
}

/// Team with its roster and upcoming lessons.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamDetailDto {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub members: Vec<TeamMemberDto>,
    #[serde(default)]
    pub upcoming_lessons: Vec<UpcomingLessonDto>,
}
