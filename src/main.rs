//! medsearch: doctor and medical-center search with live suggestions
//!
//! Usage:
//!   medsearch                 - Open the search window
//!   medsearch suggest <term>  - Print suggestions for a term
//!   medsearch search <term>   - Open the results page in the browser
//!   medsearch url <term>      - Print the results page URL
//!   medsearch help            - Show help

mod app;
mod backend;
mod commands;
mod config;
mod error;
mod search;
mod ui;

use app::MedSearch;
use backend::api::BackendClient;
use commands::Command;
use config::Config;
use iced::{window, Size};
use search::state::{select_target, MIN_LOOKUP_CHARS};
use std::env;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> iced::Result {
    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    let args: Vec<String> = env::args().skip(1).collect();
    let config = Config::load();

    match Command::parse(&args) {
        Command::Ui => start_ui(config),
        Command::Suggest { term } => {
            suggest(&config, &term);
            Ok(())
        }
        Command::Search { term } => {
            match results_url(&config, term) {
                Some(url) => {
                    if let Err(e) = search::navigation::open(&url) {
                        eprintln!("Error: {}", e);
                    }
                }
                None => eprintln!("{}", NOTHING_TO_SEARCH),
            }
            Ok(())
        }
        Command::Url { term } => {
            match results_url(&config, term) {
                Some(url) => println!("{}", url),
                None => eprintln!("{}", NOTHING_TO_SEARCH),
            }
            Ok(())
        }
        Command::Config => {
            println!(
                "config file      {}",
                Config::default_path()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "(none)".to_string())
            );
            println!("suggestions_url  {}", config.suggestions_url);
            println!("search_url       {}", config.search_url);
            println!("debounce_ms      {}", config.debounce_ms);
            match config.request_timeout() {
                Some(timeout) => println!("request_timeout  {}ms", timeout.as_millis()),
                None => println!("request_timeout  none"),
            }
            Ok(())
        }
        Command::Help => {
            println!("{}", Command::help_text());
            Ok(())
        }
        Command::Unknown { name } => {
            eprintln!("Unknown command: {}", name);
            eprintln!("Run 'medsearch help' for usage");
            Ok(())
        }
    }
}

const NOTHING_TO_SEARCH: &str = "Nothing to search for";

/// Submit semantics for the CLI: `None` for a blank term.
fn results_url(config: &Config, term: String) -> Option<String> {
    let mut state = search::SearchState::new();
    state.set_query(term);
    state.submit(&config.search_url)
}

/// One immediate lookup, printed as `<suggestion>\t<results url>` lines.
fn suggest(config: &Config, term: &str) {
    if term.chars().count() < MIN_LOOKUP_CHARS {
        tracing::debug!("Query {:?} too short for suggestions", term);
        return;
    }

    let rt = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("Error: failed to create tokio runtime: {}", e);
            return;
        }
    };

    let backend = BackendClient::new(&config.suggestions_url, config.request_timeout());
    match rt.block_on(backend.suggestions(term)) {
        Ok(list) => {
            for suggestion in &list {
                println!("{}\t{}", suggestion, select_target(suggestion, &config.search_url));
            }
        }
        Err(e) => {
            tracing::warn!("{}", e);
            eprintln!("Error: {}", e);
        }
    }
}

fn start_ui(config: Config) -> iced::Result {
    tracing::info!(
        "Starting medsearch (suggestions: {}, results: {})",
        config.suggestions_url,
        config.search_url
    );

    iced::application(MedSearch::title, MedSearch::update, MedSearch::view)
        .subscription(MedSearch::subscription)
        .theme(MedSearch::theme)
        .window(window::Settings {
            size: Size::new(640.0, 420.0),
            position: window::Position::Centered,
            resizable: true,
            ..Default::default()
        })
        .antialiasing(true)
        .run_with(move || MedSearch::new(&config))
}
