//! Plain-text output for the terminal.

use coach_views::format::{format_duration, format_relative_date, pluralize};
use coach_views::services::{ExerciseGroup, ExerciseStats};
use coach_views::view_models::{
    EvaluationTemplateViewModel, EvaluationViewModel, ExerciseViewModel, FormFieldError,
    PracticeSessionViewModel,
};
use time::OffsetDateTime;

pub fn exercise_line(exercise: &ExerciseViewModel) -> String {
    let mut line = format!(
        "#{:<5} {:<32} {:>8}  {}",
        exercise.id, exercise.title, exercise.duration.formatted, exercise.display.source_label
    );
    if !exercise.display.status_badges.is_empty() {
        line.push_str(&format!("  [{}]", exercise.display.status_badges.join(", ")));
    }
    line
}

pub fn exercise_list(exercises: &[ExerciseViewModel]) -> String {
    if exercises.is_empty() {
        return "No exercises found.".to_string();
    }
    exercises
        .iter()
        .map(exercise_line)
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn exercise_detail(exercise: &ExerciseViewModel) -> String {
    let mut lines = vec![
        format!("{} (#{})", exercise.title, exercise.id),
        format!("Duration: {} minimum", exercise.duration.formatted),
        format!("Source:   {}", exercise.display.source_label),
    ];
    if let Some(description) = &exercise.description {
        lines.push(String::new());
        lines.push(description.clone());
    }
    if !exercise.focus_areas.is_empty() {
        let names: Vec<&str> = exercise.focus_areas.iter().map(|fa| fa.name.as_str()).collect();
        lines.push(format!("Focus:    {}", names.join(", ")));
    }
    if exercise.metadata.usage_count > 0 {
        lines.push(format!(
            "Used:     {}",
            pluralize(exercise.metadata.usage_count, "time", "times")
        ));
    }
    if exercise.evaluation.has_template {
        let template = exercise
            .evaluation
            .template_name
            .as_deref()
            .unwrap_or("default template");
        lines.push(format!("Evaluated with {}", template));
    }
    lines.join("\n")
}

pub fn exercise_groups(groups: &[ExerciseGroup]) -> String {
    if groups.is_empty() {
        return "No exercises found.".to_string();
    }
    groups
        .iter()
        .map(|group| {
            let mut block = format!(
                "{} {} ({})",
                group.color,
                group.focus_area,
                group.exercises.len()
            );
            for exercise in &group.exercises {
                block.push_str(&format!("\n  {}", exercise_line(exercise)));
            }
            block
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

pub fn exercise_stats(stats: &ExerciseStats) -> String {
    [
        format!("Exercises:      {}", stats.total),
        format!("Public:         {}", stats.public_count),
        format!("Favorites:      {}", stats.favorite_count),
        format!("Popular:        {}", stats.popular_count),
        format!("With template:  {}", stats.with_template_count),
        format!("Focus areas:    {}", stats.focus_area_count),
        format!("Total time:     {}", format_duration(stats.total_minutes)),
        format!("Average time:   {}", format_duration(stats.average_minutes)),
    ]
    .join("\n")
}

pub fn templates(templates: &[EvaluationTemplateViewModel]) -> String {
    if templates.is_empty() {
        return "No evaluation templates.".to_string();
    }
    templates
        .iter()
        .map(|t| {
            format!(
                "#{:<5} {} (0-{}): {}",
                t.id,
                t.name,
                t.max_score,
                t.criteria.join(", ")
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn session_line(session: &PracticeSessionViewModel, now: OffsetDateTime) -> String {
    let status = if session.timing.is_active {
        "running".to_string()
    } else {
        session
            .timing
            .duration_formatted
            .clone()
            .unwrap_or_default()
    };
    let mut line = format!(
        "#{:<5} {:<28} {:<28} {:>8} {:>4}%",
        session.id,
        session.title,
        format_relative_date(session.timing.start, now),
        status,
        session.progress.percent_complete
    );
    if let Some(team) = &session.team {
        line.push_str(&format!("  {}", team));
    }
    line
}

pub fn session_list(sessions: &[PracticeSessionViewModel], now: OffsetDateTime) -> String {
    if sessions.is_empty() {
        return "No practice sessions yet.".to_string();
    }
    sessions
        .iter()
        .map(|s| session_line(s, now))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn session_detail(
    session: &PracticeSessionViewModel,
    evaluations: &[EvaluationViewModel],
    now: OffsetDateTime,
) -> String {
    let mut lines = vec![
        session.title.clone(),
        format!("Started:   {}", format_relative_date(session.timing.start, now)),
        format!(
            "Progress:  {} of {} exercises ({}%)",
            session.progress.current_exercise_index,
            session.progress.total_exercises,
            session.progress.percent_complete
        ),
        format!(
            "People:    {}",
            pluralize(session.participants.count, "participant", "participants")
        ),
    ];
    if let Some(duration) = &session.timing.duration_formatted {
        lines.push(format!("Duration:  {}", duration));
    }
    if !session.participants.names.is_empty() {
        lines.push(format!("           {}", session.participants.names.join(", ")));
    }

    for evaluation in evaluations {
        let overall = &evaluation.scores.overall;
        lines.push(format!(
            "Evaluation #{} (exercise #{}): {}/{} = {}% {}",
            evaluation.id,
            evaluation.exercise_id,
            overall.total,
            overall.max_total,
            overall.percentage,
            overall.grade
        ));
        for criterion in &evaluation.scores.criteria {
            lines.push(format!(
                "  {:<20} {}/{}",
                criterion.name, criterion.score, criterion.max_score
            ));
        }
    }
    lines.join("\n")
}

pub fn form_errors(errors: &[FormFieldError]) -> String {
    errors
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join("\n")
}
