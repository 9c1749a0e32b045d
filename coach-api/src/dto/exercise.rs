use serde::{Deserialize, Serialize};

/// A focus area tag attached to an exercise.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FocusAreaDto {
    pub id: i64,
    pub name: String,
    pub color_code: Option<String>,
}

/// Full exercise as returned by `GET /exercises/{id}`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseDto {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub minimum_duration_minutes: u32,
    pub formatted_minimum_duration: Option<String>,
    #[serde(default)]
    pub focus_areas: Vec<FocusAreaDto>,
    pub public: Option<bool>,
    pub favorite: Option<bool>,
    pub popular: Option<bool>,
    pub usage_count: Option<u32>,
    pub created_by_coach_name: Option<String>,
    pub source_label: Option<String>,
    pub has_default_evaluation_template: Option<bool>,
    pub evaluation_template_id: Option<i64>,
    pub evaluation_template_name: Option<String>,
}

/// Exercise echoed back by create, update and duplicate calls.
///
/// Carries no usage statistics or per-user flags.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseResponseDto {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub minimum_duration_minutes: u32,
    #[serde(default)]
    pub focus_areas: Vec<FocusAreaDto>,
    pub public: Option<bool>,
    pub created_by_coach_name: Option<String>,
    pub has_default_evaluation_template: Option<bool>,
    pub evaluation_template_id: Option<i64>,
    pub evaluation_template_name: Option<String>,
    #[serde(default)]
    pub archived: bool,
}

/// Exercise row in search and listing results.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseSummaryDto {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub minimum_duration_minutes: u32,
    pub formatted_minimum_duration: Option<String>,
    #[serde(default)]
    pub focus_areas: Vec<FocusAreaDto>,
    pub source_label: Option<String>,
    pub public: Option<bool>,
    pub favorite: Option<bool>,
    pub popular: Option<bool>,
    pub usage_count: Option<u32>,
    pub has_default_evaluation_template: Option<bool>,
}

/// Query parameters for `GET /exercises`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExerciseSearchQuery {
    pub search: Option<String>,
    pub focus_area_ids: Vec<i64>,
    pub limit: Option<u32>,
}

impl ExerciseSearchQuery {
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn with_focus_areas(mut self, ids: impl IntoIterator<Item = i64>) -> Self {
        self.focus_area_ids = ids.into_iter().collect();
        self
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Render as query pairs, skipping unset parameters.
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(search) = self.search.as_deref().map(str::trim) {
            if !search.is_empty() {
                pairs.push(("search", search.to_string()));
            }
        }
        if !self.focus_area_ids.is_empty() {
            let ids = self
                .focus_area_ids
                .iter()
                .map(|id| id.to_string())
                .collect::<Vec<_>>()
                .join(",");
            pairs.push(("focusAreaIds", ids));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        pairs
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CriterionRequest {
    pub name: String,
    pub description: Option<String>,
}

/// Body for `POST /exercises` and `PUT /exercises/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateExerciseRequest {
    pub name: String,
    pub description: Option<String>,
    pub minimum_duration_minutes: u32,
    pub focus_area_ids: Vec<i64>,
    pub public: bool,
    pub evaluation_template_id: Option<i64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub custom_criteria: Vec<CriterionRequest>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateCriterionDto {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
}

/// Evaluation template as returned by `GET /evaluation-templates`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationTemplateDto {
    pub id: i64,
    pub name: String,
    /// Highest score a single criterion can receive. Absent on legacy templates.
    pub max_score: Option<u32>,
    #[serde(default)]
    pub criteria: Vec<TemplateCriterionDto>,
}
