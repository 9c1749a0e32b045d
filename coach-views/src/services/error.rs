use thiserror::Error;

/// Failures surfaced by the services.
///
/// Each variant carries a fixed, user-facing message. The underlying
/// `ApiError` is logged where it is caught and never shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ServiceError {
    #[error("Failed to load exercises. Please try again.")]
    LoadExercises,
    #[error("Failed to load popular exercises. Please try again.")]
    LoadPopularExercises,
    #[error("Failed to load exercise. Please try again.")]
    LoadExercise,
    #[error("Failed to load exercises for lesson planning. Please try again.")]
    LoadLessonPlanningExercises,
    #[error("Failed to create exercise. Please try again.")]
    CreateExercise,
    #[error("Failed to update exercise. Please try again.")]
    UpdateExercise,
    #[error("Failed to delete exercise. Please try again.")]
    DeleteExercise,
    #[error("Failed to duplicate exercise. Please try again.")]
    DuplicateExercise,
    #[error("Failed to load evaluation templates. Please try again.")]
    LoadEvaluationTemplates,
    #[error("Failed to load practice history. Please try again.")]
    LoadPracticeHistory,
    #[error("Failed to load practice session. Please try again.")]
    LoadPracticeSession,
}
