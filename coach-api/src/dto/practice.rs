use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::SessionEvaluationDto;

/// A row from `GET /practice-history`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PracticeHistoryItemDto {
    pub session_id: i64,
    pub lesson_title: Option<String>,
    pub team_name: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub started_at: OffsetDateTime,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub ended_at: Option<OffsetDateTime>,
    #[serde(default)]
    pub participant_count: u32,
    #[serde(default)]
    pub participant_names: Vec<String>,
    #[serde(default)]
    pub exercise_count: u32,
    pub completed_exercise_count: Option<u32>,
    #[serde(default)]
    pub evaluation_count: u32,
    #[serde(default)]
    pub note_count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantDto {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionExerciseDto {
    pub exercise_id: i64,
    pub exercise_name: String,
    pub duration_minutes: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionNoteDto {
    pub id: i64,
    pub content: String,
    pub exercise_id: Option<i64>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

/// Full session from `GET /practice-history/{id}`. Has no team name.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PracticeSessionDetailDto {
    pub id: i64,
    pub lesson_id: Option<i64>,
    pub lesson_title: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub start_time: OffsetDateTime,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub end_time: Option<OffsetDateTime>,
    #[serde(default)]
    pub participants: Vec<ParticipantDto>,
    #[serde(default)]
    pub exercises: Vec<SessionExerciseDto>,
    pub current_exercise_index: Option<u32>,
    #[serde(default)]
    pub evaluations: Vec<SessionEvaluationDto>,
    #[serde(default)]
    pub notes: Vec<SessionNoteDto>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn history_item_without_end_time() {
        let json = r#"{
            "sessionId": 9,
            "teamName": "Thursday Troupe",
            "startedAt": "2026-03-14T18:00:00Z",
            "exerciseCount": 4
        }"#;
        let dto: PracticeHistoryItemDto = serde_json::from_str(json).unwrap();

        assert!(dto.ended_at.is_none());
        assert_eq!(dto.exercise_count, 4);
        assert_eq!(dto.participant_count, 0);
    }

    #[test]
    fn detail_parses_nested_collections() {
        let json = r#"{
            "id": 4,
            "startTime": "2026-03-14T18:00:00Z",
            "endTime": "2026-03-14T19:30:00Z",
            "participants": [{"id": 1, "name": "Ana"}],
            "exercises": [{"exerciseId": 2, "exerciseName": "Freeze", "durationMinutes": 15}],
            "evaluations": [{"id": 5, "exerciseId": 2, "scores": [{"name": "Listening", "score": 3}]}],
            "notes": [{"id": 6, "content": "Great energy", "createdAt": "2026-03-14T18:20:00Z"}]
        }"#;
        let dto: PracticeSessionDetailDto = serde_json::from_str(json).unwrap();

        assert!(dto.end_time.is_some());
        assert_eq!(dto.evaluations[0].scores[0].score, 3);
        assert_eq!(dto.notes.len(), 1);
    }
}
