use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "cafe-data")]
#[command(
    author,
    version,
    about = "Browse cafe locations and reviews from the command line"
)]
pub struct Cli {
    /// Path to the configuration file
    #[clap(short, long, global = true, default_value = "cafe-data.toml")]
    pub config: String,

    /// Override the API root from the configuration
    #[clap(long, global = true)]
    pub base_url: Option<String>,

    /// Display language, e.g. en or de
    #[clap(short, long, global = true)]
    pub locale: Option<String>,

    /// Access token of the signed-in user
    #[clap(long, global = true, env = "CAFE_DATA_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Enable verbose output with additional information
    #[clap(short, long, global = true, default_value_t = false)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a default configuration file
    Init,

    /// List locations
    Locations {
        /// Only trending locations
        #[clap(short, long, default_value_t = false)]
        trending: bool,
    },

    /// List the reviews of a cafe followed by their summary
    Reviews {
        /// Cafe slug
        slug: String,
    },

    /// Print per-dimension rating averages for a cafe
    Summary {
        /// Cafe slug
        slug: String,
    },

    /// List the signed-in user's favorite cafes
    Favorites,

    /// List the signed-in user's reviews
    MyReviews,
}
