use serde::Serialize;
use time::OffsetDateTime;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamViewModel {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub members: TeamMembers,
    pub activity: TeamActivity,
    pub display: TeamDisplay,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMembers {
    pub count: u32,
    /// Empty when the source only carried a count.
    pub list: Vec<TeamMemberViewModel>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMemberViewModel {
    pub id: i64,
    pub name: String,
    pub email: Option<String>,
    pub role: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamActivity {
    pub upcoming_lessons_count: u32,
    #[serde(with = "time::serde::rfc3339::option")]
    pub next_lesson_date: Option<OffsetDateTime>,
    pub next_lesson_formatted: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamDisplay {
    pub is_empty: bool,
    pub member_summary: String,
}
