//! Command-line parsing
//!
//! Parses `medsearch <command> [term...]` into a [`Command`].

/// Parsed command-line invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Open the search window (default)
    Ui,
    /// One immediate lookup: suggest <term>
    Suggest { term: String },
    /// Open the results page: search <term>
    Search { term: String },
    /// Print the results URL: url <term>
    Url { term: String },
    /// Print the effective configuration
    Config,
    /// Show help
    Help,
    /// Anything else
    Unknown { name: String },
}

impl Command {
    /// Parse arguments, excluding the program name
    pub fn parse(args: &[String]) -> Self {
        let Some(first) = args.first() else {
            return Command::Ui;
        };

        // terms are passed through untrimmed, like typed input
        let term = args[1..].join(" ");

        match first.to_lowercase().as_str() {
            "ui" | "open" => Command::Ui,
            "suggest" | "s" => Command::Suggest { term },
            "search" | "go" => Command::Search { term },
            "url" => Command::Url { term },
            "config" => Command::Config,
            "help" | "--help" | "-h" => Command::Help,
            _ => Command::Unknown {
                name: first.clone(),
            },
        }
    }

    /// Get help text for all commands
    pub fn help_text() -> &'static str {
        r#"medsearch - doctor and medical-center search

Usage: medsearch [command] [term...]

Commands:
  (none), ui      Open the search window
  suggest <term>  Print backend suggestions for <term>
  search <term>   Open the results page for <term> in the browser
  url <term>      Print the results page URL for <term>
  config          Print the effective configuration
  help            Show this help

Configuration: <config_dir>/medsearch/config.toml
Overrides: MEDSEARCH_SUGGESTIONS_URL, MEDSEARCH_SEARCH_URL
Logging: RUST_LOG=medsearch=debug"#
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_empty_is_ui() {
        assert_eq!(Command::parse(&[]), Command::Ui);
    }

    #[test]
    fn test_parse_suggest_joins_words() {
        match Command::parse(&args(&["suggest", "Dr.", "Jane"])) {
            Command::Suggest { term } => assert_eq!(term, "Dr. Jane"),
            other => panic!("Expected Suggest, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_search_keeps_whitespace() {
        match Command::parse(&args(&["search", " flu "])) {
            Command::Search { term } => assert_eq!(term, " flu "),
            other => panic!("Expected Search, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!(Command::parse(&args(&["HELP"])), Command::Help);
        assert_eq!(Command::parse(&args(&["Config"])), Command::Config);
    }

    #[test]
    fn test_parse_unknown() {
        match Command::parse(&args(&["book"])) {
            Command::Unknown { name } => assert_eq!(name, "book"),
            other => panic!("Expected Unknown, got {:?}", other),
        }
    }
}
