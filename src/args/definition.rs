//! Command-line argument definition and processing.

use clap::Parser;

use crate::theme::{Settings, ThemeMode};

/// dexterm - browse the Pokémon catalog from your terminal
#[derive(Parser, Debug, Default)]
#[command(name = "dexterm")]
#[command(version)]
#[command(about = "Browse and search the Pokémon catalog from your terminal", long_about = None)]
pub struct Args {
    /// Catalog base URL (overrides `base_url` in settings.conf)
    #[arg(long)]
    pub base_url: Option<String>,

    /// Items fetched per page (overrides `page_size`)
    #[arg(long)]
    pub page_size: Option<usize>,

    /// Start with the light or dark theme
    #[arg(long, value_parser = ["light", "dark"])]
    pub theme: Option<String>,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Enable verbose output (equivalent to --log-level debug)
    #[arg(short, long)]
    pub verbose: bool,
}

/// What: Apply command-line overrides on top of the file settings.
///
/// Inputs:
/// - `args`: Parsed command-line arguments
/// - `settings`: Settings loaded from `settings.conf`, updated in place
///
/// Details:
/// - A zero page size is ignored with a warning so the list can still paginate.
pub fn apply_overrides(args: &Args, settings: &mut Settings) {
    if let Some(url) = &args.base_url {
        let url = url.trim().trim_end_matches('/');
        if url.is_empty() {
            tracing::warn!("ignoring empty --base-url");
        } else {
            settings.base_url = url.to_string();
        }
    }
    match args.page_size {
        Some(0) => tracing::warn!("ignoring --page-size 0"),
        Some(size) => settings.page_size = size,
        None => {}
    }
    if let Some(theme) = args.theme.as_deref().and_then(ThemeMode::from_config_key) {
        settings.theme = theme;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Flags override file values; absent flags leave them alone.
    fn overrides_only_what_was_given() {
        let args = Args::parse_from([
            "dexterm",
            "--base-url",
            "http://localhost:8080/api/v2/",
            "--theme",
            "dark",
        ]);
        let mut settings = Settings {
            page_size: 30,
            ..Settings::default()
        };
        apply_overrides(&args, &mut settings);
        assert_eq!(settings.base_url, "http://localhost:8080/api/v2");
        assert_eq!(settings.theme, ThemeMode::Dark);
        assert_eq!(settings.page_size, 30);
    }

    #[test]
    fn zero_page_size_is_ignored() {
        let args = Args::parse_from(["dexterm", "--page-size", "0"]);
        let mut settings = Settings::default();
        apply_overrides(&args, &mut settings);
        assert_eq!(settings.page_size, Settings::default().page_size);
    }

    #[test]
    fn unknown_theme_is_rejected_by_the_parser() {
        assert!(Args::try_parse_from(["dexterm", "--theme", "sepia"]).is_err());
    }
}
