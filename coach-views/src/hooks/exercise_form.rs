use std::sync::Arc;

use serde::Serialize;
use tokio::sync::RwLock;

use crate::adapters::exercise::{to_form_model, validate_form};
use crate::ports::ExerciseApi;
use crate::services::ExerciseService;
use crate::view_models::{ExerciseFormModel, ExerciseViewModel, FormFieldError};

/// Everything the create/edit form renders.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseFormState {
    pub editing_id: Option<i64>,
    pub form: ExerciseFormModel,
    pub errors: Vec<FormFieldError>,
    pub submitting: bool,
    pub error: Option<String>,
    pub saved: Option<ExerciseViewModel>,
}

/// Create or edit form for one exercise.
///
/// State lives behind a shared lock that is released while a save is in
/// flight, so readers see `submitting` flip on and off.
pub struct ExerciseFormHook<A> {
    service: ExerciseService<A>,
    state: Arc<RwLock<ExerciseFormState>>,
}

impl<A> Clone for ExerciseFormHook<A> {
    fn clone(&self) -> Self {
        Self {
            service: self.service.clone(),
            state: Arc::clone(&self.state),
        }
    }
}

impl<A: ExerciseApi> ExerciseFormHook<A> {
    /// An empty form that creates a new exercise on submit.
    pub fn new(service: ExerciseService<A>) -> Self {
        Self::with_state(service, ExerciseFormState::default())
    }

    /// A form seeded from an already loaded exercise; submit updates it.
    pub fn edit(service: ExerciseService<A>, exercise: &ExerciseViewModel) -> Self {
        Self::with_state(
            service,
            ExerciseFormState {
                editing_id: Some(exercise.id),
                form: to_form_model(exercise),
                ..ExerciseFormState::default()
            },
        )
    }

    fn with_state(service: ExerciseService<A>, state: ExerciseFormState) -> Self {
        Self {
            service,
            state: Arc::new(RwLock::new(state)),
        }
    }

    /// Fetch an exercise and switch the form to editing it.
    pub async fn load(&self, id: i64) -> bool {
        let result = self.service.exercise_by_id(id).await;

        let mut state = self.state.write().await;
        match result {
            Ok(exercise) => {
                state.editing_id = Some(exercise.id);
                state.form = to_form_model(&exercise);
                state.errors.clear();
                state.error = None;
                true
            }
            Err(e) => {
                state.error = Some(e.to_string());
                false
            }
        }
    }

    pub async fn state(&self) -> ExerciseFormState {
        self.state.read().await.clone()
    }

    pub async fn form(&self) -> ExerciseFormModel {
        self.state.read().await.form.clone()
    }

    /// Edit the form fields in place.
    pub async fn update_form(&self, edit: impl FnOnce(&mut ExerciseFormModel)) {
        edit(&mut self.state.write().await.form);
    }

    pub async fn is_editing(&self) -> bool {
        self.state.read().await.editing_id.is_some()
    }

    pub async fn errors(&self) -> Vec<FormFieldError> {
        self.state.read().await.errors.clone()
    }

    pub async fn submitting(&self) -> bool {
        self.state.read().await.submitting
    }

    pub async fn error(&self) -> Option<String> {
        self.state.read().await.error.clone()
    }

    pub async fn saved(&self) -> Option<ExerciseViewModel> {
        self.state.read().await.saved.clone()
    }

    /// Validate, then create or update. Returns whether the exercise was
    /// saved; on failure `errors()` or `error()` explain why.
    ///
    /// A submit while another is still pending is ignored.
    pub async fn submit(&self) -> bool {
        let (editing_id, form) = {
            let mut state = self.state.write().await;
            if state.submitting {
                tracing::debug!("Exercise form is already submitting");
                return false;
            }
            state.errors = validate_form(&state.form);
            if !state.errors.is_empty() {
                tracing::debug!(errors = state.errors.len(), "Exercise form is invalid");
                return false;
            }
            state.submitting = true;
            state.error = None;
            (state.editing_id, state.form.clone())
        };

        let result = match editing_id {
            Some(id) => self.service.update_exercise(id, &form).await,
            None => self.service.create_exercise(&form).await,
        };

        let mut state = self.state.write().await;
        state.submitting = false;
        match result {
            Ok(exercise) => {
                state.editing_id = Some(exercise.id);
                state.saved = Some(exercise);
                true
            }
            Err(e) => {
                state.error = Some(e.to_string());
                false
            }
        }
    }

    /// Back to an empty create form.
    pub async fn reset(&self) {
        *self.state.write().await = ExerciseFormState::default();
    }
}
