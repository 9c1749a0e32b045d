mod cli;
mod config;
mod render;

use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::Parser;
use cli::{Cli, Commands, CreateArgs, ListArgs};
use coach_api::dto::ExerciseSearchQuery;
use coach_api::CoachApiClient;
use coach_views::adapters::evaluation::ScoreScale;
use coach_views::hooks::{
    ExerciseByIdHook, ExerciseFormHook, ExercisesHook, LessonPlanningExercisesHook,
    PopularExercisesHook, QueryState,
};
use coach_views::services::{
    exercise_stats, filter_exercises, sort_exercises, ExerciseFilter, ExerciseService,
    PracticeHistoryService,
};
use coach_views::view_models::CriterionFormModel;
use config::CoachConfig;
use time::OffsetDateTime;

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing()?;
    let cli = Cli::parse();

    if let Commands::ConfigPath = cli.command {
        let path = CoachConfig::ensure_exists()?;
        println!("{}", path.display());
        return Ok(());
    }

    let config = CoachConfig::load()?;
    let api_url = cli.api_url.unwrap_or_else(|| config.api_url.clone());
    let client = Arc::new(
        CoachApiClient::new(&api_url).with_context(|| format!("Invalid API URL {}", api_url))?,
    );
    tracing::debug!(base_url = %client.base_url(), "Using coaching API");

    let app = App {
        exercises: ExerciseService::new(client.clone()),
        history: PracticeHistoryService::new(client),
        page_size: config.page_size,
        now: OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc()),
    };
    app.run(cli.command).await
}

fn init_tracing() -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_env("COACH_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}

/// The data of a finished query, or its user-facing error.
fn loaded<T>(state: QueryState<T>) -> Result<T> {
    if let Some(error) = state.error {
        bail!(error);
    }
    state.data.context("No data loaded")
}

struct App {
    exercises: ExerciseService<CoachApiClient>,
    history: PracticeHistoryService<CoachApiClient>,
    page_size: u32,
    now: OffsetDateTime,
}

impl App {
    async fn run(&self, command: Commands) -> Result<()> {
        match command {
            Commands::List(args) => self.list(args).await,
            Commands::Popular { limit } => {
                let hook = PopularExercisesHook::new(
                    self.exercises.clone(),
                    limit.unwrap_or(self.page_size),
                );
                hook.mount().await;
                println!("{}", render::exercise_list(&loaded(hook.state().await)?));
                Ok(())
            }
            Commands::Show { id } => {
                let hook = ExerciseByIdHook::new(self.exercises.clone(), Some(id));
                hook.mount().await;
                println!("{}", render::exercise_detail(&loaded(hook.state().await)?));
                Ok(())
            }
            Commands::Create(args) => self.create(args).await,
            Commands::Duplicate { id } => {
                let copy = self.exercises.duplicate_exercise(id).await?;
                println!("Created {}", render::exercise_line(&copy));
                Ok(())
            }
            Commands::Delete { id } => {
                self.exercises.delete_exercise(id).await?;
                println!("Deleted exercise #{}", id);
                Ok(())
            }
            Commands::Stats { team } => {
                let hook = LessonPlanningExercisesHook::new(self.exercises.clone(), team);
                hook.mount().await;
                let exercises = loaded(hook.state().await)?;
                println!("{}", render::exercise_stats(&exercise_stats(&exercises)));
                Ok(())
            }
            Commands::Groups { team } => {
                let hook = LessonPlanningExercisesHook::new(self.exercises.clone(), team);
                hook.mount().await;
                loaded(hook.state().await)?;
                let groups = hook.grouped(&ExerciseFilter::default()).await;
                println!("{}", render::exercise_groups(&groups));
                Ok(())
            }
            Commands::Templates => {
                let templates = self.exercises.evaluation_templates().await?;
                println!("{}", render::templates(&templates));
                Ok(())
            }
            Commands::Sessions => {
                let sessions = self.history.session_history().await?;
                println!("{}", render::session_list(&sessions, self.now));
                Ok(())
            }
            Commands::Session { id, max_score } => {
                let scale = max_score.map(ScoreScale::new).unwrap_or_default();
                let report = self.history.session_report(id, scale).await?;
                println!(
                    "{}",
                    render::session_detail(&report.session, &report.evaluations, self.now)
                );
                Ok(())
            }
            // Handled before the client is built.
            Commands::ConfigPath => Ok(()),
        }
    }

    async fn list(&self, args: ListArgs) -> Result<()> {
        let query = ExerciseSearchQuery::default()
            .with_focus_areas(args.focus_areas.iter().copied())
            .with_limit(self.page_size);
        let query = match &args.search {
            Some(search) => query.with_search(search.as_str()),
            None => query,
        };

        let hook = ExercisesHook::new(self.exercises.clone(), query);
        hook.mount().await;
        let exercises = loaded(hook.state().await)?;

        let filter = ExerciseFilter {
            search: None,
            focus_area_ids: Vec::new(),
            max_duration_minutes: args.max_minutes,
            favorites_only: args.favorites,
            public_only: args.public,
            with_template_only: args.with_template,
        };
        let shown = sort_exercises(filter_exercises(&exercises, &filter), args.sort);
        println!("{}", render::exercise_list(&shown));
        Ok(())
    }

    async fn create(&self, args: CreateArgs) -> Result<()> {
        let hook = ExerciseFormHook::new(self.exercises.clone());
        hook.update_form(|form| {
            form.name = args.name;
            form.description = args.description;
            form.minimum_duration_minutes = args.minutes;
            form.focus_area_ids = args.focus_areas;
            form.is_public = args.public;
            form.evaluation_template_id = args.template;
            form.custom_criteria = args
                .criteria
                .into_iter()
                .map(|name| CriterionFormModel {
                    name,
                    description: String::new(),
                })
                .collect();
        })
        .await;

        let submitted = hook.submit().await;
        let state = hook.state().await;
        if submitted {
            if let Some(saved) = &state.saved {
                println!("Created {}", render::exercise_line(saved));
            }
            return Ok(());
        }
        if !state.errors.is_empty() {
            bail!("{}", render::form_errors(&state.errors));
        }
        bail!(state
            .error
            .unwrap_or_else(|| "Failed to create exercise".to_string()))
    }
}
