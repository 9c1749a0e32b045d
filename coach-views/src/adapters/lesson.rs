use coach_api::dto::{
    CreateLessonRequest, LessonDetailDto, LessonExerciseDto, LessonExerciseRequest,
    LessonSummaryDto,
};
use time::OffsetDateTime;

use crate::format::{format_duration, format_relative_date};
use crate::view_models::{
    FocusAreaMinutes, LessonExerciseFormModel, LessonExerciseViewModel, LessonExercises,
    LessonFocusAreas, LessonFormModel, LessonScheduling, LessonViewModel,
};

/// How many focus areas are highlighted as a lesson's primary focus.
const PRIMARY_FOCUS_AREAS: usize = 3;

#[derive(Debug, Clone, Copy)]
pub enum LessonSource<'a> {
    Summary(&'a LessonSummaryDto),
    Detail(&'a LessonDetailDto),
}

impl<'a> From<&'a LessonSummaryDto> for LessonSource<'a> {
    fn from(dto: &'a LessonSummaryDto) -> Self {
        LessonSource::Summary(dto)
    }
}

impl<'a> From<&'a LessonDetailDto> for LessonSource<'a> {
    fn from(dto: &'a LessonDetailDto) -> Self {
        LessonSource::Detail(dto)
    }
}

pub fn to_view_model<'a>(source: impl Into<LessonSource<'a>>, now: OffsetDateTime) -> LessonViewModel {
    match source.into() {
        LessonSource::Summary(dto) => LessonViewModel {
            id: dto.id,
            title: dto.title.clone(),
            team_id: None,
            team_name: dto.team_name.clone(),
            scheduling: scheduling(dto.scheduled_at, now),
            exercises: LessonExercises {
                count: dto.exercise_count,
                total_duration: dto.total_duration_minutes,
                total_duration_formatted: format_duration(dto.total_duration_minutes),
                list: Vec::new(),
            },
            focus_areas: LessonFocusAreas {
                breakdown: Vec::new(),
                primary: Vec::new(),
            },
        },
        LessonSource::Detail(dto) => {
            let mut ordered: Vec<&LessonExerciseDto> = dto.exercises.iter().collect();
            ordered.sort_by_key(|exercise| exercise.order_index);

            let total: u32 = ordered.iter().map(|e| e.duration_minutes).sum();
            let breakdown = focus_area_breakdown(&ordered);
            let primary = primary_focus_areas(&breakdown);

            LessonViewModel {
                id: dto.id,
                title: dto.title.clone(),
                team_id: dto.team_id,
                team_name: dto.team_name.clone(),
                scheduling: scheduling(dto.scheduled_at, now),
                exercises: LessonExercises {
                    count: ordered.len() as u32,
                    total_duration: total,
                    total_duration_formatted: format_duration(total),
                    list: ordered.into_iter().map(to_lesson_exercise).collect(),
                },
                focus_areas: LessonFocusAreas { breakdown, primary },
            }
        }
    }
}

fn scheduling(date: OffsetDateTime, now: OffsetDateTime) -> LessonScheduling {
    LessonScheduling {
        date,
        formatted: format_relative_date(date, now),
        is_upcoming: date > now,
        is_past: date < now,
    }
}

fn to_lesson_exercise(dto: &LessonExerciseDto) -> LessonExerciseViewModel {
    LessonExerciseViewModel {
        exercise_id: dto.exercise_id,
        name: dto.exercise_name.clone(),
        order: dto.order_index,
        duration_minutes: dto.duration_minutes,
        duration_formatted: format_duration(dto.duration_minutes),
        focus_areas: dto.focus_areas.iter().map(|fa| fa.name.clone()).collect(),
    }
}

/// Attribute each exercise's minutes to every focus area it carries, keyed
/// by focus area id.
fn focus_area_breakdown(exercises: &[&LessonExerciseDto]) -> Vec<FocusAreaMinutes> {
    let mut breakdown: Vec<FocusAreaMinutes> = Vec::new();

    for exercise in exercises {
        for focus_area in &exercise.focus_areas {
            match breakdown.iter_mut().find(|entry| entry.id == focus_area.id) {
                Some(entry) => entry.minutes += exercise.duration_minutes,
                None => breakdown.push(FocusAreaMinutes {
                    id: focus_area.id,
                    name: focus_area.name.clone(),
                    minutes: exercise.duration_minutes,
                }),
            }
        }
    }

    breakdown
}

fn primary_focus_areas(breakdown: &[FocusAreaMinutes]) -> Vec<String> {
    let mut ranked: Vec<&FocusAreaMinutes> = breakdown.iter().collect();
    // Stable, so equal minutes keep first-seen order.
    ranked.sort_by(|a, b| b.minutes.cmp(&a.minutes));
    ranked
        .into_iter()
        .take(PRIMARY_FOCUS_AREAS)
        .map(|entry| entry.name.clone())
        .collect()
}

pub fn to_form_model(view_model: &LessonViewModel) -> LessonFormModel {
    LessonFormModel {
        title: view_model.title.clone(),
        scheduled_at: view_model.scheduling.date,
        team_id: view_model.team_id,
        exercises: view_model
            .exercises
            .list
            .iter()
            .map(|exercise| LessonExerciseFormModel {
                exercise_id: exercise.exercise_id,
                order: exercise.order,
                duration_minutes: exercise.duration_minutes,
            })
            .collect(),
    }
}

pub fn from_form_model(form: &LessonFormModel) -> CreateLessonRequest {
    CreateLessonRequest {
        title: form.title.trim().to_string(),
        scheduled_at: form.scheduled_at,
        team_id: form.team_id,
        exercises: form
            .exercises
            .iter()
            .map(|exercise| LessonExerciseRequest {
                exercise_id: exercise.exercise_id,
                order_index: exercise.order,
                duration_minutes: exercise.duration_minutes,
            })
            .collect(),
    }
}
