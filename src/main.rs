//! userdeck - Entry Point

use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use userdeck::config::ResolvedConfig;
use userdeck::state::{AppState, SearchQuery, SearchState, ThemeMode};
use userdeck::store::RecordStore;

/// userdeck - manage user records from the terminal
#[derive(Parser, Debug)]
#[command(name = "userdeck")]
#[command(version)]
#[command(about = "TUI for browsing, searching and editing user records")]
pub struct Args {
    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Start with this theme
    #[arg(long, value_parser = ["light", "dark"])]
    pub theme: Option<String>,

    /// Start with search query active
    #[arg(short, long)]
    pub search: Option<String>,

    /// Start with no records instead of the demo users
    #[arg(long)]
    pub empty: bool,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,
}

/// Build the initial state from the resolved config and startup search term.
fn build_app_state(
    config: &ResolvedConfig,
    search: Option<&str>,
) -> Result<AppState, serde_json::Error> {
    let store = if config.seed_demo_users {
        RecordStore::with_demo_users()?
    } else {
        RecordStore::new()
    };

    let mut state = AppState::new(store);
    state.theme = config.theme;
    if let Some(query) = search.and_then(SearchQuery::new) {
        state.set_search(SearchState::Active { query });
    }
    Ok(state)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Load configuration with full precedence chain:
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = userdeck::config::load_config_with_precedence(args.config.clone())?;
        let merged = userdeck::config::merge_config(config_file);
        let with_env = userdeck::config::apply_env_overrides(merged);

        // Flags only override when given
        let theme_override = args
            .theme
            .as_deref()
            .map(str::parse::<ThemeMode>)
            .transpose()?;
        let seed_override = args.empty.then_some(false);

        userdeck::config::apply_cli_overrides(with_env, theme_override, seed_override)
    };

    userdeck::logging::init(&config.log_file_path)?;

    info!(
        config = ?config,
        "Configuration loaded and resolved"
    );

    let app_state = build_app_state(&config, args.search.as_deref())?;
    let colors = userdeck::view::ColorConfig::from_env_and_args(args.no_color);

    userdeck::view::run(app_state, colors)?;

    Ok(())
}
