//! Request-lifecycle wrappers around the services.
//!
//! Each hook owns its dependencies and a [`QueryState`]. Changing a
//! dependency refetches only when the new value differs.

mod exercise_form;
mod exercises;
mod query_state;

pub use exercise_form::{ExerciseFormHook, ExerciseFormState};
pub use exercises::{
    ExerciseByIdHook, ExercisesHook, LessonPlanningExercisesHook, PopularExercisesHook,
    DEFAULT_POPULAR_LIMIT,
};
pub use query_state::{QueryState, RequestTicket, SharedQuery};
