use std::sync::Arc;

use crate::adapters::evaluation::{self, ScoreScale};
use crate::adapters::practice_session;
use crate::ports::PracticeHistoryApi;
use crate::view_models::{EvaluationViewModel, PracticeSessionViewModel};

use super::{fail_as, ServiceError};

/// One session together with its evaluations, both built from the same
/// backend response.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionReport {
    pub session: PracticeSessionViewModel,
    pub evaluations: Vec<EvaluationViewModel>,
}

pub struct PracticeHistoryService<A> {
    api: Arc<A>,
}

impl<A> Clone for PracticeHistoryService<A> {
    fn clone(&self) -> Self {
        Self {
            api: Arc::clone(&self.api),
        }
    }
}

impl<A: PracticeHistoryApi> PracticeHistoryService<A> {
    pub fn new(api: Arc<A>) -> Self {
        Self { api }
    }

    /// Past and running sessions, newest first as the backend returns them.
    pub async fn session_history(&self) -> Result<Vec<PracticeSessionViewModel>, ServiceError> {
        let items = self
            .api
            .practice_history()
            .await
            .map_err(fail_as(ServiceError::LoadPracticeHistory))?;

        Ok(items.iter().map(practice_session::to_view_model).collect())
    }

    pub async fn session_detail(&self, id: i64) -> Result<PracticeSessionViewModel, ServiceError> {
        let detail = self
            .api
            .practice_session(id)
            .await
            .map_err(fail_as(ServiceError::LoadPracticeSession))?;

        Ok(practice_session::to_detail_view_model(&detail))
    }

    /// Evaluations recorded during a session, scored on `scale`.
    pub async fn session_evaluations(
        &self,
        id: i64,
        scale: ScoreScale,
    ) -> Result<Vec<EvaluationViewModel>, ServiceError> {
        Ok(self.session_report(id, scale).await?.evaluations)
    }

    /// Session and evaluations from a single fetch, so the evaluation count
    /// in the session metrics always matches the evaluations returned.
    pub async fn session_report(
        &self,
        id: i64,
        scale: ScoreScale,
    ) -> Result<SessionReport, ServiceError> {
        let detail = self
            .api
            .practice_session(id)
            .await
            .map_err(fail_as(ServiceError::LoadPracticeSession))?;
        tracing::debug!(
            session_id = id,
            evaluations = detail.evaluations.len(),
            "loaded practice session"
        );

        Ok(SessionReport {
            session: practice_session::to_detail_view_model(&detail),
            evaluations: detail
                .evaluations
                .iter()
                .map(|dto| evaluation::to_view_model(dto, scale))
                .collect(),
        })
    }
}
