use coach_api::dto::{
    CreateExerciseRequest, CriterionRequest, ExerciseDto, ExerciseResponseDto, ExerciseSummaryDto,
    FocusAreaDto,
};

use crate::format::format_duration;
use crate::view_models::{
    ExerciseDisplay, ExerciseDuration, ExerciseEvaluationInfo, ExerciseFormModel,
    ExerciseMetadata, ExerciseViewModel, FocusAreaTag, FormFieldError, BADGE_FAVORITE,
    BADGE_POPULAR,
};

/// Color used for focus areas that come without one.
pub const DEFAULT_FOCUS_AREA_COLOR: &str = "#6B7280";

/// Which backend shape an exercise was read from.
#[derive(Debug, Clone, Copy)]
pub enum ExerciseSource<'a> {
    Full(&'a ExerciseDto),
    Response(&'a ExerciseResponseDto),
    Summary(&'a ExerciseSummaryDto),
}

impl<'a> From<&'a ExerciseDto> for ExerciseSource<'a> {
    fn from(dto: &'a ExerciseDto) -> Self {
        ExerciseSource::Full(dto)
    }
}

impl<'a> From<&'a ExerciseResponseDto> for ExerciseSource<'a> {
    fn from(dto: &'a ExerciseResponseDto) -> Self {
        ExerciseSource::Response(dto)
    }
}

impl<'a> From<&'a ExerciseSummaryDto> for ExerciseSource<'a> {
    fn from(dto: &'a ExerciseSummaryDto) -> Self {
        ExerciseSource::Summary(dto)
    }
}

/// The union of every field any exercise shape can carry.
struct ExerciseFields<'a> {
    id: i64,
    name: &'a str,
    description: Option<&'a str>,
    minutes: u32,
    formatted_duration: Option<&'a str>,
    focus_areas: &'a [FocusAreaDto],
    public: Option<bool>,
    favorite: Option<bool>,
    popular: Option<bool>,
    usage_count: Option<u32>,
    created_by: Option<&'a str>,
    source_label: Option<&'a str>,
    has_default_template: Option<bool>,
    template_id: Option<i64>,
    template_name: Option<&'a str>,
}

impl<'a> ExerciseSource<'a> {
    fn fields(self) -> ExerciseFields<'a> {
        match self {
            ExerciseSource::Full(dto) => ExerciseFields {
                id: dto.id,
                name: &dto.name,
                description: dto.description.as_deref(),
                minutes: dto.minimum_duration_minutes,
                formatted_duration: dto.formatted_minimum_duration.as_deref(),
                focus_areas: &dto.focus_areas,
                public: dto.public,
                favorite: dto.favorite,
                popular: dto.popular,
                usage_count: dto.usage_count,
                created_by: dto.created_by_coach_name.as_deref(),
                source_label: dto.source_label.as_deref(),
                has_default_template: dto.has_default_evaluation_template,
                template_id: dto.evaluation_template_id,
                template_name: dto.evaluation_template_name.as_deref(),
            },
            ExerciseSource::Response(dto) => ExerciseFields {
                id: dto.id,
                name: &dto.name,
                description: dto.description.as_deref(),
                minutes: dto.minimum_duration_minutes,
                formatted_duration: None,
                focus_areas: &dto.focus_areas,
                public: dto.public,
                favorite: None,
                popular: None,
                usage_count: None,
                created_by: dto.created_by_coach_name.as_deref(),
                source_label: None,
                has_default_template: dto.has_default_evaluation_template,
                template_id: dto.evaluation_template_id,
                template_name: dto.evaluation_template_name.as_deref(),
            },
            ExerciseSource::Summary(dto) => ExerciseFields {
                id: dto.id,
                name: &dto.name,
                description: dto.description.as_deref(),
                minutes: dto.minimum_duration_minutes,
                formatted_duration: dto.formatted_minimum_duration.as_deref(),
                focus_areas: &dto.focus_areas,
                public: dto.public,
                favorite: dto.favorite,
                popular: dto.popular,
                usage_count: dto.usage_count,
                created_by: None,
                source_label: dto.source_label.as_deref(),
                has_default_template: dto.has_default_evaluation_template,
                template_id: None,
                template_name: None,
            },
        }
    }
}

/// Convert any exercise shape to an `ExerciseViewModel`.
pub fn to_view_model<'a>(source: impl Into<ExerciseSource<'a>>) -> ExerciseViewModel {
    let fields = source.into().fields();

    let is_public = fields.public.unwrap_or(false);
    let is_favorite = fields.favorite.unwrap_or(false);
    let is_popular = fields.popular.unwrap_or(false);
    let author = fields.created_by.or(fields.source_label).map(str::to_string);

    let focus_areas: Vec<FocusAreaTag> = fields.focus_areas.iter().map(to_focus_area_tag).collect();

    let formatted = fields
        .formatted_duration
        .map(str::to_string)
        .unwrap_or_else(|| format_duration(fields.minutes));

    let display = ExerciseDisplay {
        source_label: source_label(is_public, author.as_deref()),
        status_badges: status_badges(is_popular, is_favorite),
        searchable_text: searchable_text(fields.name, fields.description, &focus_areas),
    };

    ExerciseViewModel {
        id: fields.id,
        title: fields.name.to_string(),
        description: fields.description.map(str::to_string),
        duration: ExerciseDuration {
            minutes: fields.minutes,
            formatted,
            is_minimum: true,
        },
        focus_areas,
        metadata: ExerciseMetadata {
            author,
            is_public,
            is_favorite,
            is_popular,
            usage_count: fields.usage_count.unwrap_or(0),
        },
        evaluation: ExerciseEvaluationInfo {
            has_template: fields.has_default_template.unwrap_or(false)
                || fields.template_id.is_some(),
            template_id: fields.template_id,
            template_name: fields.template_name.map(str::to_string),
        },
        display,
    }
}

pub fn to_view_models<'a, T>(dtos: &'a [T]) -> Vec<ExerciseViewModel>
where
    &'a T: Into<ExerciseSource<'a>>,
{
    dtos.iter().map(to_view_model).collect()
}

fn to_focus_area_tag(dto: &FocusAreaDto) -> FocusAreaTag {
    FocusAreaTag {
        id: dto.id,
        name: dto.name.clone(),
        color: dto
            .color_code
            .clone()
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| DEFAULT_FOCUS_AREA_COLOR.to_string()),
    }
}

fn source_label(is_public: bool, author: Option<&str>) -> String {
    if is_public {
        return "Public".to_string();
    }
    match author {
        Some(author) => format!("Created by {}", author),
        None => "Custom".to_string(),
    }
}

fn status_badges(is_popular: bool, is_favorite: bool) -> Vec<&'static str> {
    let mut badges = Vec::with_capacity(2);
    if is_popular {
        badges.push(BADGE_POPULAR);
    }
    if is_favorite {
        badges.push(BADGE_FAVORITE);
    }
    badges
}

fn searchable_text(title: &str, description: Option<&str>, focus_areas: &[FocusAreaTag]) -> String {
    let mut parts = vec![title];
    if let Some(description) = description {
        parts.push(description);
    }
    parts.extend(focus_areas.iter().map(|fa| fa.name.as_str()));
    parts.join(" ").to_lowercase()
}

/// Seed an edit form from a saved exercise. Custom criteria start empty.
pub fn to_form_model(view_model: &ExerciseViewModel) -> ExerciseFormModel {
    ExerciseFormModel {
        name: view_model.title.clone(),
        description: view_model.description.clone().unwrap_or_default(),
        minimum_duration_minutes: view_model.duration.minutes,
        focus_area_ids: view_model.focus_areas.iter().map(|fa| fa.id).collect(),
        is_public: view_model.metadata.is_public,
        evaluation_template_id: view_model.evaluation.template_id,
        custom_criteria: Vec::new(),
    }
}

/// Build the create/update request body from a submitted form.
pub fn from_form_model(form: &ExerciseFormModel) -> CreateExerciseRequest {
    CreateExerciseRequest {
        name: form.name.trim().to_string(),
        description: non_empty(&form.description),
        minimum_duration_minutes: form.minimum_duration_minutes,
        focus_area_ids: form.focus_area_ids.clone(),
        public: form.is_public,
        evaluation_template_id: form.evaluation_template_id,
        custom_criteria: form
            .custom_criteria
            .iter()
            .map(|criterion| CriterionRequest {
                name: criterion.name.trim().to_string(),
                description: non_empty(&criterion.description),
            })
            .collect(),
    }
}

/// Field errors for a form; empty when it can be submitted.
pub fn validate_form(form: &ExerciseFormModel) -> Vec<FormFieldError> {
    let mut errors = Vec::new();

    if form.name.trim().is_empty() {
        errors.push(FormFieldError::new("name", "Name is required"));
    }
    if form.minimum_duration_minutes == 0 {
        errors.push(FormFieldError::new(
            "minimumDurationMinutes",
            "Duration must be at least 1 minute",
        ));
    }
    if form
        .custom_criteria
        .iter()
        .any(|criterion| criterion.name.trim().is_empty())
    {
        errors.push(FormFieldError::new(
            "customCriteria",
            "Every criterion needs a name",
        ));
    }

    errors
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
