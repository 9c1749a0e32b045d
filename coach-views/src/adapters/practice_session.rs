use coach_api::dto::{PracticeHistoryItemDto, PracticeSessionDetailDto};
use time::OffsetDateTime;

use crate::format::{format_duration, percentage};
use crate::view_models::{
    PracticeSessionViewModel, SessionMetrics, SessionParticipants, SessionProgress,
    SessionTiming,
};

/// Convert a practice-history row.
pub fn to_view_model(dto: &PracticeHistoryItemDto) -> PracticeSessionViewModel {
    let is_active = dto.ended_at.is_none();
    let total = dto.exercise_count;
    let current = dto
        .completed_exercise_count
        .unwrap_or(if is_active { 0 } else { total });

    PracticeSessionViewModel {
        id: dto.session_id,
        title: session_title(dto.session_id, dto.lesson_title.as_deref()),
        team: dto.team_name.clone(),
        timing: timing(dto.started_at, dto.ended_at),
        participants: SessionParticipants {
            count: dto.participant_count,
            names: dto.participant_names.clone(),
        },
        progress: progress(current, total, is_active),
        metrics: SessionMetrics {
            evaluation_count: dto.evaluation_count,
            note_count: dto.note_count,
        },
    }
}

/// Convert a full session detail. The detail shape has no team name, so
/// `team` is always `None` here.
pub fn to_detail_view_model(dto: &PracticeSessionDetailDto) -> PracticeSessionViewModel {
    let is_active = dto.end_time.is_none();
    let total = dto.exercises.len() as u32;
    let current = dto
        .current_exercise_index
        .unwrap_or(if is_active { 0 } else { total });

    PracticeSessionViewModel {
        id: dto.id,
        title: session_title(dto.id, dto.lesson_title.as_deref()),
        team: None,
        timing: timing(dto.start_time, dto.end_time),
        participants: SessionParticipants {
            count: dto.participants.len() as u32,
            names: dto.participants.iter().map(|p| p.name.clone()).collect(),
        },
        progress: progress(current, total, is_active),
        metrics: SessionMetrics {
            evaluation_count: dto.evaluations.len() as u32,
            note_count: dto.notes.len() as u32,
        },
    }
}

fn session_title(id: i64, lesson_title: Option<&str>) -> String {
    match lesson_title {
        Some(title) if !title.trim().is_empty() => title.to_string(),
        _ => format!("Practice session #{}", id),
    }
}

fn timing(start: OffsetDateTime, end: Option<OffsetDateTime>) -> SessionTiming {
    let duration_minutes = end.map(|end| (end - start).whole_minutes().max(0) as u32);

    SessionTiming {
        start,
        end,
        duration_minutes,
        duration_formatted: duration_minutes.map(format_duration),
        is_active: end.is_none(),
    }
}

fn progress(current: u32, total: u32, is_active: bool) -> SessionProgress {
    let current = current.min(total);
    let percent_complete = match (is_active, total) {
        (_, 0) => 0,
        (false, _) => 100,
        (true, _) => percentage(current.into(), total.into()),
    };

    SessionProgress {
        current_exercise_index: current,
        total_exercises: total,
        percent_complete,
    }
}
