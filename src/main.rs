mod cli;
mod ui;

use cafe_data::config::ensure_config_file_exists;
use cafe_data::{
    compute_summary, coverage, ApiClient, CafeDataConfig, ChannelNotifier, CurrentUser, RequestContext, Result,
    Toast,
};
use clap::Parser;
use cli::{Cli, Commands};
use colored::Colorize;
use std::path::Path;
use std::process;
use tokio::runtime::Runtime;
use tokio::sync::mpsc::UnboundedReceiver;
use tracing_subscriber::EnvFilter;

type CliClient = ApiClient<cafe_data::HttpTransport, ChannelNotifier>;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(cli) {
        eprintln!("{} {}", "Error:".bold().red(), err.user_message());
        process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default_directive = if verbose { "cafe_data=debug" } else { "cafe_data=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    if matches!(cli.command, Commands::Init) {
        if ensure_config_file_exists(&cli.config)? {
            ui::success_message(&format!("Created {}", cli.config));
        } else {
            ui::info_message(&format!("{} already exists, leaving it untouched", cli.config));
        }
        return Ok(());
    }

    let config = load_config(&cli)?;
    let rt = Runtime::new()?;
    rt.block_on(execute(cli, config))
}

/// Config file when present, defaults otherwise; flags override both
fn load_config(cli: &Cli) -> Result<CafeDataConfig> {
    let path = Path::new(&cli.config);
    let mut config = if path.exists() {
        CafeDataConfig::load_with_validation(path)?
    } else {
        tracing::debug!(path = %path.display(), "no configuration file, using defaults");
        CafeDataConfig::default()
    };

    if let Some(base_url) = &cli.base_url {
        config.api.base_url = base_url.clone();
    }
    if let Some(locale) = &cli.locale {
        config.api.default_locale = Some(locale.clone());
    }

    config.validate()?;
    Ok(config)
}

async fn execute(cli: Cli, config: CafeDataConfig) -> Result<()> {
    let (notifier, mut toasts) = ChannelNotifier::channel();
    let client = ApiClient::new(config, notifier)?;

    let mut ctx = client.default_context();
    if let Some(token) = cli.token.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
        ctx = ctx.with_user(CurrentUser::new("cli", "CLI user", token));
    }
    tracing::info!(locale = %ctx.locale, authenticated = ctx.is_authenticated(), "starting");

    match cli.command {
        Commands::Init => {}
        Commands::Locations { trending } => show_locations(&client, ctx, trending).await,
        Commands::Reviews { slug } => show_reviews(&client, ctx, slug, true).await,
        Commands::Summary { slug } => show_reviews(&client, ctx, slug, false).await,
        Commands::Favorites => {
            let favorites = client.favorites();
            favorites.load(Some(()), ctx).await;
            let state = favorites.snapshot();

            ui::section_header("Favorites");
            if ui::state_banner(&state, "No favorites yet") {
                ui::favorites(&state.data);
            }
        }
        Commands::MyReviews => {
            let reviews = client.my_reviews();
            reviews.load(Some(()), ctx).await;
            let state = reviews.snapshot();

            ui::section_header("My reviews");
            if ui::state_banner(&state, "You have not reviewed any cafe yet") {
                ui::reviews(&state.data);
            }
        }
    }

    ui::toasts(&drain(&mut toasts));
    Ok(())
}

async fn show_locations(client: &CliClient, ctx: RequestContext, trending_only: bool) {
    let trending = client.trending_locations();

    if trending_only {
        trending.load(Some(()), ctx).await;
    } else {
        let all = client.locations();
        futures::future::join(all.load(Some(()), ctx.clone()), trending.load(Some(()), ctx)).await;

        let state = all.snapshot();
        ui::section_header("Locations");
        if ui::state_banner(&state, "No locations yet") {
            ui::locations(&state.data);
        }
    }

    let state = trending.snapshot();
    ui::section_header("Trending");
    if ui::state_banner(&state, "Nothing trending right now") {
        ui::locations(&state.data);
    }
}

async fn show_reviews(client: &CliClient, ctx: RequestContext, slug: String, list: bool) {
    let reviews = client.cafe_reviews();
    reviews.load(Some(slug.clone()), ctx).await;
    let state = reviews.snapshot();

    ui::section_header(&format!("Reviews for {}", slug));
    // A cafe with no reviews still gets an all-zero summary
    if ui::state_banner(&state, "No reviews yet") && list {
        ui::reviews(&state.data);
    }

    if state.error.is_none() {
        ui::section_header("Summary");
        ui::summary(&compute_summary(&state.data), &coverage(&state.data));
    }
}

fn drain(receiver: &mut UnboundedReceiver<Toast>) -> Vec<Toast> {
    let mut drained = Vec::new();
    while let Ok(toast) = receiver.try_recv() {
        drained.push(toast);
    }
    drained
}
