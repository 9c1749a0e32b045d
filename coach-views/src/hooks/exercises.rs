use coach_api::dto::ExerciseSearchQuery;

use crate::ports::ExerciseApi;
use crate::services::{
    filter_exercises, group_by_focus_area, sort_exercises, ExerciseFilter, ExerciseGroup,
    ExerciseService, SortKey,
};
use crate::view_models::ExerciseViewModel;

use super::query_state::{QueryState, SharedQuery};

pub const DEFAULT_POPULAR_LIMIT: u32 = 10;

/// Exercise search results, refetched whenever the query changes.
pub struct ExercisesHook<A> {
    service: ExerciseService<A>,
    query: ExerciseSearchQuery,
    state: SharedQuery<Vec<ExerciseViewModel>>,
}

impl<A: ExerciseApi> ExercisesHook<A> {
    pub fn new(service: ExerciseService<A>, query: ExerciseSearchQuery) -> Self {
        Self {
            service,
            query,
            state: SharedQuery::default(),
        }
    }

    pub async fn state(&self) -> QueryState<Vec<ExerciseViewModel>> {
        self.state.snapshot().await
    }

    pub fn query(&self) -> &ExerciseSearchQuery {
        &self.query
    }

    pub async fn mount(&self) {
        self.refetch().await;
    }

    /// Returns whether the query changed (and a fetch ran).
    pub async fn set_query(&mut self, query: ExerciseSearchQuery) -> bool {
        if query == self.query {
            return false;
        }
        self.query = query;
        self.refetch().await;
        true
    }

    pub async fn refetch(&self) {
        self.state
            .run(self.service.search_exercises(&self.query))
            .await;
    }
}

pub struct PopularExercisesHook<A> {
    service: ExerciseService<A>,
    limit: u32,
    state: SharedQuery<Vec<ExerciseViewModel>>,
}

impl<A: ExerciseApi> PopularExercisesHook<A> {
    pub fn new(service: ExerciseService<A>, limit: u32) -> Self {
        Self {
            service,
            limit,
            state: SharedQuery::default(),
        }
    }

    pub async fn state(&self) -> QueryState<Vec<ExerciseViewModel>> {
        self.state.snapshot().await
    }

    pub async fn mount(&self) {
        self.refetch().await;
    }

    pub async fn set_limit(&mut self, limit: u32) -> bool {
        if limit == self.limit {
            return false;
        }
        self.limit = limit;
        self.refetch().await;
        true
    }

    pub async fn refetch(&self) {
        self.state
            .run(self.service.popular_exercises(self.limit))
            .await;
    }
}

/// A single exercise. Without an id nothing is fetched and the state stays
/// empty.
pub struct ExerciseByIdHook<A> {
    service: ExerciseService<A>,
    id: Option<i64>,
    state: SharedQuery<ExerciseViewModel>,
}

impl<A: ExerciseApi> ExerciseByIdHook<A> {
    pub fn new(service: ExerciseService<A>, id: Option<i64>) -> Self {
        Self {
            service,
            id,
            state: SharedQuery::default(),
        }
    }

    pub async fn state(&self) -> QueryState<ExerciseViewModel> {
        self.state.snapshot().await
    }

    pub async fn mount(&self) {
        self.refetch().await;
    }

    pub async fn set_id(&mut self, id: Option<i64>) -> bool {
        if id == self.id {
            return false;
        }
        self.id = id;
        self.refetch().await;
        true
    }

    pub async fn refetch(&self) {
        match self.id {
            Some(id) => {
                self.state.run(self.service.exercise_by_id(id)).await;
            }
            None => self.state.clear().await,
        }
    }
}

/// Exercises available while planning a lesson, with client-side narrowing.
pub struct LessonPlanningExercisesHook<A> {
    service: ExerciseService<A>,
    team_id: Option<i64>,
    state: SharedQuery<Vec<ExerciseViewModel>>,
}

impl<A: ExerciseApi> LessonPlanningExercisesHook<A> {
    pub fn new(service: ExerciseService<A>, team_id: Option<i64>) -> Self {
        Self {
            service,
            team_id,
            state: SharedQuery::default(),
        }
    }

    pub async fn state(&self) -> QueryState<Vec<ExerciseViewModel>> {
        self.state.snapshot().await
    }

    pub async fn mount(&self) {
        self.refetch().await;
    }

    pub async fn set_team(&mut self, team_id: Option<i64>) -> bool {
        if team_id == self.team_id {
            return false;
        }
        self.team_id = team_id;
        self.refetch().await;
        true
    }

    pub async fn refetch(&self) {
        self.state
            .run(self.service.lesson_planning_exercises(self.team_id))
            .await;
    }

    /// The loaded exercises narrowed by `filter` and ordered by `sort`.
    /// Empty until the first fetch succeeds.
    pub async fn filtered(&self, filter: &ExerciseFilter, sort: SortKey) -> Vec<ExerciseViewModel> {
        let exercises = self.state.snapshot().await.data.unwrap_or_default();
        sort_exercises(filter_exercises(&exercises, filter), sort)
    }

    pub async fn grouped(&self, filter: &ExerciseFilter) -> Vec<ExerciseGroup> {
        let exercises = self.state.snapshot().await.data.unwrap_or_default();
        group_by_focus_area(&filter_exercises(&exercises, filter))
    }
}
