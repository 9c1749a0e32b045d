use serde::Serialize;

pub const BADGE_POPULAR: &str = "Popular";
pub const BADGE_FAVORITE: &str = "Favorite";

/// One exercise, ready for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseViewModel {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub duration: ExerciseDuration,
    pub focus_areas: Vec<FocusAreaTag>,
    pub metadata: ExerciseMetadata,
    pub evaluation: ExerciseEvaluationInfo,
    pub display: ExerciseDisplay,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseDuration {
    pub minutes: u32,
    pub formatted: String,
    /// The minutes are a lower bound, not a fixed length.
    pub is_minimum: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FocusAreaTag {
    pub id: i64,
    pub name: String,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseMetadata {
    pub author: Option<String>,
    pub is_public: bool,
    pub is_favorite: bool,
    pub is_popular: bool,
    pub usage_count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseEvaluationInfo {
    pub has_template: bool,
    pub template_id: Option<i64>,
    pub template_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseDisplay {
    pub source_label: String,
    /// At most `Popular` then `Favorite`, in that order.
    pub status_badges: Vec<&'static str>,
    /// Lowercased title, description and focus area names.
    pub searchable_text: String,
}

impl ExerciseViewModel {
    pub fn has_focus_area(&self, focus_area_id: i64) -> bool {
        self.focus_areas.iter().any(|fa| fa.id == focus_area_id)
    }
}
