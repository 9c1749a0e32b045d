use std::sync::Arc;

use coach_api::dto::ExerciseSearchQuery;
use itertools::Itertools;
use serde::Serialize;
use strum::{Display, EnumString};

use crate::adapters::evaluation::template_to_view_model;
use crate::adapters::exercise::{self, DEFAULT_FOCUS_AREA_COLOR};
use crate::ports::ExerciseApi;
use crate::view_models::{EvaluationTemplateViewModel, ExerciseFormModel, ExerciseViewModel};

use super::{fail_as, ServiceError};

/// Group name for exercises without any focus area.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Exercise operations for the UI: network calls normalized through the
/// exercise adapter.
///
/// Failures are logged here and replaced by the operation's fixed
/// [`ServiceError`] message.
pub struct ExerciseService<A> {
    api: Arc<A>,
}

impl<A> Clone for ExerciseService<A> {
    fn clone(&self) -> Self {
        Self {
            api: Arc::clone(&self.api),
        }
    }
}

impl<A: ExerciseApi> ExerciseService<A> {
    pub fn new(api: Arc<A>) -> Self {
        Self { api }
    }

    pub async fn search_exercises(
        &self,
        query: &ExerciseSearchQuery,
    ) -> Result<Vec<ExerciseViewModel>, ServiceError> {
        let dtos = self
            .api
            .search_exercises(query)
            .await
            .map_err(fail_as(ServiceError::LoadExercises))?;
        tracing::debug!(count = dtos.len(), "loaded exercises");

        Ok(exercise::to_view_models(&dtos))
    }

    pub async fn popular_exercises(&self, limit: u32) -> Result<Vec<ExerciseViewModel>, ServiceError> {
        let dtos = self
            .api
            .popular_exercises(limit)
            .await
            .map_err(fail_as(ServiceError::LoadPopularExercises))?;

        Ok(exercise::to_view_models(&dtos))
    }

    pub async fn exercise_by_id(&self, id: i64) -> Result<ExerciseViewModel, ServiceError> {
        let dto = self
            .api
            .exercise(id)
            .await
            .map_err(fail_as(ServiceError::LoadExercise))?;

        Ok(exercise::to_view_model(&dto))
    }

    pub async fn lesson_planning_exercises(
        &self,
        team_id: Option<i64>,
    ) -> Result<Vec<ExerciseViewModel>, ServiceError> {
        let dtos = self
            .api
            .lesson_planning_exercises(team_id)
            .await
            .map_err(fail_as(ServiceError::LoadLessonPlanningExercises))?;

        Ok(exercise::to_view_models(&dtos))
    }

    pub async fn create_exercise(
        &self,
        form: &ExerciseFormModel,
    ) -> Result<ExerciseViewModel, ServiceError> {
        let request = exercise::from_form_model(form);
        let dto = self
            .api
            .create_exercise(&request)
            .await
            .map_err(fail_as(ServiceError::CreateExercise))?;
        tracing::info!(id = dto.id, "created exercise");

        Ok(exercise::to_view_model(&dto))
    }

    pub async fn update_exercise(
        &self,
        id: i64,
        form: &ExerciseFormModel,
    ) -> Result<ExerciseViewModel, ServiceError> {
        let request = exercise::from_form_model(form);
        let dto = self
            .api
            .update_exercise(id, &request)
            .await
            .map_err(fail_as(ServiceError::UpdateExercise))?;

        Ok(exercise::to_view_model(&dto))
    }

    pub async fn delete_exercise(&self, id: i64) -> Result<(), ServiceError> {
        self.api
            .delete_exercise(id)
            .await
            .map_err(fail_as(ServiceError::DeleteExercise))?;
        tracing::info!(id, "deleted exercise");

        Ok(())
    }

    pub async fn duplicate_exercise(&self, id: i64) -> Result<ExerciseViewModel, ServiceError> {
        let dto = self
            .api
            .duplicate_exercise(id)
            .await
            .map_err(fail_as(ServiceError::DuplicateExercise))?;

        Ok(exercise::to_view_model(&dto))
    }

    pub async fn evaluation_templates(
        &self,
    ) -> Result<Vec<EvaluationTemplateViewModel>, ServiceError> {
        let templates = self
            .api
            .evaluation_templates()
            .await
            .map_err(fail_as(ServiceError::LoadEvaluationTemplates))?;

        Ok(templates.iter().map(template_to_view_model).collect())
    }
}

/// Client-side narrowing over already-loaded exercises. Unset fields match
/// everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExerciseFilter {
    pub search: Option<String>,
    /// Matches exercises carrying any of these focus areas.
    pub focus_area_ids: Vec<i64>,
    pub max_duration_minutes: Option<u32>,
    pub favorites_only: bool,
    pub public_only: bool,
    pub with_template_only: bool,
}

impl ExerciseFilter {
    pub fn matches(&self, exercise: &ExerciseViewModel) -> bool {
        if let Some(search) = self.search.as_deref().map(str::trim) {
            if !search.is_empty()
                && !exercise
                    .display
                    .searchable_text
                    .contains(&search.to_lowercase())
            {
                return false;
            }
        }
        if !self.focus_area_ids.is_empty()
            && !self
                .focus_area_ids
                .iter()
                .any(|id| exercise.has_focus_area(*id))
        {
            return false;
        }
        if let Some(max) = self.max_duration_minutes {
            if exercise.duration.minutes > max {
                return false;
            }
        }
        if self.favorites_only && !exercise.metadata.is_favorite {
            return false;
        }
        if self.public_only && !exercise.metadata.is_public {
            return false;
        }
        if self.with_template_only && !exercise.evaluation.has_template {
            return false;
        }
        true
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum SortKey {
    #[default]
    Name,
    Duration,
    Popularity,
    /// Creation date isn't part of the view model, so this sorts by name.
    Created,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseGroup {
    pub focus_area: String,
    pub color: String,
    pub exercises: Vec<ExerciseViewModel>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseStats {
    pub total: usize,
    pub public_count: usize,
    pub favorite_count: usize,
    pub popular_count: usize,
    pub with_template_count: usize,
    pub focus_area_count: usize,
    pub total_minutes: u32,
    pub average_minutes: u32,
}

pub fn filter_exercises(
    exercises: &[ExerciseViewModel],
    filter: &ExerciseFilter,
) -> Vec<ExerciseViewModel> {
    exercises
        .iter()
        .filter(|exercise| filter.matches(exercise))
        .cloned()
        .collect()
}

/// Stable sort; ties keep their incoming order.
pub fn sort_exercises(mut exercises: Vec<ExerciseViewModel>, key: SortKey) -> Vec<ExerciseViewModel> {
    match key {
        SortKey::Name | SortKey::Created => {
            exercises.sort_by_cached_key(|exercise| exercise.title.to_lowercase())
        }
        SortKey::Duration => exercises.sort_by_key(|exercise| exercise.duration.minutes),
        SortKey::Popularity => exercises.sort_by(|a, b| {
            b.metadata
                .usage_count
                .cmp(&a.metadata.usage_count)
                .then_with(|| b.metadata.is_popular.cmp(&a.metadata.is_popular))
        }),
    }
    exercises
}

/// Group by focus area in first-seen order. An exercise with several focus
/// areas appears in each group; those with none go to [`UNCATEGORIZED`], last.
pub fn group_by_focus_area(exercises: &[ExerciseViewModel]) -> Vec<ExerciseGroup> {
    let mut groups: Vec<(i64, ExerciseGroup)> = Vec::new();
    let mut uncategorized: Vec<ExerciseViewModel> = Vec::new();

    for exercise in exercises {
        if exercise.focus_areas.is_empty() {
            uncategorized.push(exercise.clone());
            continue;
        }
        for focus_area in &exercise.focus_areas {
            match groups.iter_mut().find(|(id, _)| *id == focus_area.id) {
                Some((_, group)) => group.exercises.push(exercise.clone()),
                None => groups.push((
                    focus_area.id,
                    ExerciseGroup {
                        focus_area: focus_area.name.clone(),
                        color: focus_area.color.clone(),
                        exercises: vec![exercise.clone()],
                    },
                )),
            }
        }
    }

    let mut groups: Vec<ExerciseGroup> = groups.into_iter().map(|(_, group)| group).collect();
    if !uncategorized.is_empty() {
        groups.push(ExerciseGroup {
            focus_area: UNCATEGORIZED.to_string(),
            color: DEFAULT_FOCUS_AREA_COLOR.to_string(),
            exercises: uncategorized,
        });
    }
    groups
}

pub fn exercise_stats(exercises: &[ExerciseViewModel]) -> ExerciseStats {
    if exercises.is_empty() {
        return ExerciseStats::default();
    }

    let total_minutes: u32 = exercises.iter().map(|e| e.duration.minutes).sum();
    let average_minutes =
        (f64::from(total_minutes) / exercises.len() as f64).round() as u32;

    ExerciseStats {
        total: exercises.len(),
        public_count: exercises.iter().filter(|e| e.metadata.is_public).count(),
        favorite_count: exercises.iter().filter(|e| e.metadata.is_favorite).count(),
        popular_count: exercises.iter().filter(|e| e.metadata.is_popular).count(),
        with_template_count: exercises
            .iter()
            .filter(|e| e.evaluation.has_template)
            .count(),
        focus_area_count: exercises
            .iter()
            .flat_map(|e| e.focus_areas.iter())
            .unique_by(|fa| fa.id)
            .count(),
        total_minutes,
        average_minutes,
    }
}
