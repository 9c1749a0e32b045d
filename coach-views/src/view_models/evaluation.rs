use serde::Serialize;
use time::OffsetDateTime;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationViewModel {
    pub id: i64,
    pub exercise_id: i64,
    pub exercise_name: Option<String>,
    pub performer_name: Option<String>,
    pub notes: Option<String>,
    #[serde(with = "time::serde::rfc3339::option")]
    pub evaluated_at: Option<OffsetDateTime>,
    pub scores: EvaluationScores,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationScores {
    pub criteria: Vec<CriterionScoreViewModel>,
    pub overall: OverallScore,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CriterionScoreViewModel {
    pub name: String,
    pub score: u32,
    pub max_score: u32,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverallScore {
    pub total: u64,
    pub max_total: u64,
    pub percentage: u32,
    pub grade: &'static str,
}

/// An evaluation template offered when attaching one to an exercise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationTemplateViewModel {
    pub id: i64,
    pub name: String,
    pub criteria: Vec<String>,
    pub max_score: u32,
}
