use coach_api::ApiError;

mod error;
pub mod exercise;
pub mod practice;

pub use error::ServiceError;
pub use exercise::{
    exercise_stats, filter_exercises, group_by_focus_area, sort_exercises, ExerciseFilter,
    ExerciseGroup, ExerciseService, ExerciseStats, SortKey, UNCATEGORIZED,
};
pub use practice::{PracticeHistoryService, SessionReport};

/// Logs the API failure and replaces it with the operation's fixed error.
pub(crate) fn fail_as(error: ServiceError) -> impl FnOnce(ApiError) -> ServiceError {
    move |cause| {
        tracing::error!("{}: {:?}", error, cause);
        error
    }
}
