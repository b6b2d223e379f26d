use std::fs;
use std::path::Path;

use tracing::{debug, info, warn};

use crate::sources::{DEFAULT_SEARCH_INDEX_CAP, DEFAULT_SEARCH_RESULT_LIMIT};
use crate::state::{DEFAULT_PAGE_SIZE, DEFAULT_SEARCH_DEBOUNCE_MS, DEFAULT_SEARCH_MIN_CHARS};
use crate::theme::ThemeMode;
use crate::theme::parsing::{normalize_key, parse_positive, strip_inline_comment};
use crate::theme::paths::{resolve_settings_config_path, settings_path};

/// Default catalog base URL.
pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// User-configurable settings parsed from `settings.conf`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    /// Catalog base URL without trailing slash.
    pub base_url: String,
    /// Items per page.
    pub page_size: usize,
    /// Search debounce window in milliseconds.
    pub search_debounce_ms: u64,
    /// Minimum trimmed query length before searching.
    pub search_min_chars: usize,
    /// Index entries scanned by the substring search.
    pub search_index_cap: usize,
    /// Matches resolved by the substring search.
    pub search_result_limit: usize,
    /// Grid rows from the end that count as "near the bottom".
    pub near_bottom_rows: usize,
    /// Initial theme.
    pub theme: ThemeMode,
    /// HTTP connect timeout in seconds.
    pub connect_timeout_secs: u64,
    /// HTTP total request timeout in seconds.
    pub request_timeout_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            search_debounce_ms: DEFAULT_SEARCH_DEBOUNCE_MS,
            search_min_chars: DEFAULT_SEARCH_MIN_CHARS,
            search_index_cap: DEFAULT_SEARCH_INDEX_CAP,
            search_result_limit: DEFAULT_SEARCH_RESULT_LIMIT,
            near_bottom_rows: 1,
            theme: ThemeMode::Light,
            connect_timeout_secs: 15,
            request_timeout_secs: 30,
        }
    }
}

/// Commented skeleton written when no settings file exists.
pub const SETTINGS_SKELETON: &str = "# dexterm settings\n\
#\n\
# Format: key = value\n\
# Lines starting with # are comments. Invalid values fall back to defaults.\n\
#\n\
# Catalog endpoint (PokeAPI compatible)\n\
base_url = https://pokeapi.co/api/v2\n\
#\n\
# Browse list\n\
page_size = 12\n\
near_bottom_rows = 1\n\
#\n\
# Search\n\
search_debounce_ms = 300\n\
search_min_chars = 2\n\
search_index_cap = 200\n\
search_result_limit = 6\n\
#\n\
# Appearance: light | dark\n\
theme = light\n\
#\n\
# Network timeouts (seconds)\n\
connect_timeout_secs = 15\n\
request_timeout_secs = 30\n";

/// What: Apply `key = value` lines from settings content onto `settings`.
///
/// Inputs:
/// - `content`: File content
/// - `settings`: Settings to update in place
///
/// Details:
/// - Keys are case-insensitive and accept `.`/`-`/space as separators.
/// - Unknown keys are logged at debug level; unparsable or zero values keep the current value.
pub fn parse_settings(content: &str, settings: &mut Settings) {
    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with("//") {
            continue;
        }
        let Some((raw_key, raw_val)) = trimmed.split_once('=') else {
            continue;
        };
        let key = normalize_key(raw_key);
        let val = strip_inline_comment(raw_val.trim());
        let applied = match key.as_str() {
            "base_url" | "api_base_url" => {
                let url = val.trim_end_matches('/');
                let ok = url.starts_with("http://") || url.starts_with("https://");
                if ok {
                    settings.base_url = url.to_string();
                }
                ok
            }
            "page_size" | "limit" => parse_positive(val).map(|v| settings.page_size = v).is_some(),
            "search_debounce_ms" => val
                .parse::<u64>()
                .ok()
                .map(|v| settings.search_debounce_ms = v)
                .is_some(),
            "search_min_chars" => parse_positive(val)
                .map(|v| settings.search_min_chars = v)
                .is_some(),
            "search_index_cap" => parse_positive(val)
                .map(|v| settings.search_index_cap = v)
                .is_some(),
            "search_result_limit" => parse_positive(val)
                .map(|v| settings.search_result_limit = v)
                .is_some(),
            "near_bottom_rows" => val
                .parse::<usize>()
                .ok()
                .map(|v| settings.near_bottom_rows = v)
                .is_some(),
            "theme" | "theme_mode" => ThemeMode::from_config_key(val)
                .map(|t| settings.theme = t)
                .is_some(),
            "connect_timeout_secs" => parse_positive(val)
                .map(|v| settings.connect_timeout_secs = v)
                .is_some(),
            "request_timeout_secs" => parse_positive(val)
                .map(|v| settings.request_timeout_secs = v)
                .is_some(),
            _ => {
                debug!(key = %key, "[Config] ignoring unknown settings key");
                continue;
            }
        };
        if !applied {
            warn!(key = %key, value = %val, "[Config] invalid value; keeping default");
        }
    }
}

/// What: Load settings from a specific file.
///
/// Output:
/// - Defaults overlaid with the file's values; plain defaults when the file cannot be read.
#[must_use]
pub fn load_settings_from(path: &Path) -> Settings {
    let mut out = Settings::default();
    match fs::read_to_string(path) {
        Ok(content) => {
            parse_settings(&content, &mut out);
            debug!(path = %path.display(), "[Config] settings loaded");
        }
        Err(e) => warn!(path = %path.display(), error = %e, "[Config] cannot read settings"),
    }
    out
}

/// What: Load user settings from the config directory, writing a skeleton on first run.
///
/// Output:
/// - Parsed settings, or defaults when no file exists yet.
#[must_use]
pub fn load_settings() -> Settings {
    if let Some(path) = resolve_settings_config_path() {
        return load_settings_from(&path);
    }
    let path = settings_path();
    match fs::write(&path, SETTINGS_SKELETON) {
        Ok(()) => info!(path = %path.display(), "[Config] wrote default settings"),
        Err(e) => warn!(path = %path.display(), error = %e, "[Config] cannot write default settings"),
    }
    Settings::default()
}
