use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CriterionScoreDto {
    pub criterion_id: Option<i64>,
    pub name: String,
    pub score: u32,
    pub notes: Option<String>,
}

/// A stored evaluation, as listed on its own.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationDto {
    pub id: i64,
    pub exercise_id: i64,
    pub exercise_name: Option<String>,
    pub performer_name: Option<String>,
    pub evaluator_name: Option<String>,
    #[serde(default)]
    pub criteria: Vec<CriterionScoreDto>,
    pub notes: Option<String>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub evaluated_at: Option<OffsetDateTime>,
}

/// An evaluation nested in a practice session detail. Scores live under
/// `scores` and no names are resolved.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionEvaluationDto {
    pub id: i64,
    pub exercise_id: i64,
    pub participant_id: Option<i64>,
    #[serde(default)]
    pub scores: Vec<CriterionScoreDto>,
    pub notes: Option<String>,
}
