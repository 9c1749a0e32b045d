use clap::{Args, Parser, Subcommand};
use coach_views::services::SortKey;

#[derive(Debug, Parser)]
#[command(name = "coach-cli")]
#[command(about = "Browse improv exercises and practice history")]
pub struct Cli {
    /// Override the API base URL from the config file
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Search the exercise library
    List(ListArgs),
    /// Most used exercises
    Popular {
        #[arg(short, long)]
        limit: Option<u32>,
    },
    /// Show one exercise
    Show { id: i64 },
    /// Create an exercise
    Create(CreateArgs),
    /// Copy an exercise under a new id
    Duplicate { id: i64 },
    /// Delete an exercise
    Delete { id: i64 },
    /// Summary numbers over the lesson-planning library
    Stats {
        #[arg(long)]
        team: Option<i64>,
    },
    /// Lesson-planning exercises grouped by focus area
    Groups {
        #[arg(long)]
        team: Option<i64>,
    },
    /// List evaluation templates
    Templates,
    /// Practice session history
    Sessions,
    /// Show one practice session with its evaluations
    Session {
        id: i64,
        /// Highest score per criterion, when the template isn't the default
        #[arg(long)]
        max_score: Option<u32>,
    },
    /// Print config path and create default file if missing
    ConfigPath,
}

#[derive(Debug, Args)]
pub struct ListArgs {
    #[arg(short, long)]
    pub search: Option<String>,
    /// Focus area ids, comma separated
    #[arg(long = "focus-area", value_delimiter = ',')]
    pub focus_areas: Vec<i64>,
    #[arg(long, default_value_t = SortKey::Name)]
    pub sort: SortKey,
    #[arg(long)]
    pub max_minutes: Option<u32>,
    #[arg(long)]
    pub favorites: bool,
    #[arg(long)]
    pub public: bool,
    #[arg(long)]
    pub with_template: bool,
}

#[derive(Debug, Args)]
pub struct CreateArgs {
    pub name: String,
    #[arg(short, long)]
    pub minutes: u32,
    #[arg(short, long, default_value = "")]
    pub description: String,
    #[arg(long = "focus-area", value_delimiter = ',')]
    pub focus_areas: Vec<i64>,
    #[arg(long)]
    pub public: bool,
    #[arg(long)]
    pub template: Option<i64>,
    /// Custom evaluation criterion, repeatable
    #[arg(long = "criterion")]
    pub criteria: Vec<String>,
}
