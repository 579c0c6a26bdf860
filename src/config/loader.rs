//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{PrimeError, PrimeResult};

use super::types::{Config, Verbosity};

/// File name of the project-level configuration
pub const PROJECT_CONFIG_FILE: &str = "prime-pages.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Configuration together with where it came from
#[derive(Debug, Clone, Default)]
pub struct LoadedConfig {
    pub config: Config,
    pub warnings: Vec<ConfigWarning>,
    /// The file the configuration was read from, if any
    pub source: Option<PathBuf>,
    /// Files that were looked for, in priority order
    pub searched: Vec<PathBuf>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> PrimeResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|source| PrimeError::ConfigRead {
        file: path.to_path_buf(),
        source,
    })?;

    let mut ignored: Vec<String> = Vec::new();
    let config: Config =
        serde_ignored::deserialize(toml::de::Deserializer::new(&content), |key_path| {
            ignored.push(key_path.to_string());
        })
        .map_err(|e| PrimeError::InvalidConfig {
            file: path.to_path_buf(),
            message: e.to_string(),
        })?;

    let warnings = ignored
        .iter()
        .map(|key_path| unknown_key_warning(path, &content, key_path))
        .collect();

    Ok((config, warnings))
}

/// Warning for one ignored key path such as `table.rowz`
fn unknown_key_warning(file: &Path, content: &str, key_path: &str) -> ConfigWarning {
    let key = key_path.rsplit('.').next().unwrap_or(key_path);
    ConfigWarning {
        key: key.to_string(),
        file: file.to_path_buf(),
        line: find_line_number(content, key),
        suggestion: suggest_key(key),
    }
}

/// User-level configuration file, `<config dir>/prime-pages/config.toml`
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("prime-pages").join("config.toml"))
}

/// Load configuration for a run started in `project_root`.
///
/// An explicit path must exist. Otherwise the project file and then the
/// user file are tried, and the first one present wins. Environment
/// overrides are applied last.
pub fn load_layered(explicit: Option<&Path>, project_root: &Path) -> PrimeResult<LoadedConfig> {
    let mut candidates = vec![project_root.join(PROJECT_CONFIG_FILE)];
    candidates.extend(user_config_path());

    resolve(explicit, &candidates, |key| std::env::var(key).ok())
}

/// Resolve configuration from an explicit file or the first existing candidate.
pub fn resolve(
    explicit: Option<&Path>,
    candidates: &[PathBuf],
    get_env: impl Fn(&str) -> Option<String>,
) -> PrimeResult<LoadedConfig> {
    let mut loaded = LoadedConfig::default();

    let chosen = match explicit {
        Some(path) => {
            loaded.searched.push(path.to_path_buf());
            Some(path.to_path_buf())
        }
        None => {
            let mut found = None;
            for candidate in candidates {
                loaded.searched.push(candidate.clone());
                if candidate.is_file() {
                    found = Some(candidate.clone());
                    break;
                }
            }
            found
        }
    };

    if let Some(path) = chosen {
        let (config, warnings) = load_with_warnings(&path)?;
        loaded.config = config;
        loaded.warnings = warnings;
        loaded.source = Some(path);
    }

    loaded.config = apply_env_overrides(loaded.config, get_env);
    Ok(loaded)
}

/// Apply `PRIME_PAGES_*` overrides read through `get_env`. Unparsable values are ignored.
pub fn apply_env_overrides(mut config: Config, get_env: impl Fn(&str) -> Option<String>) -> Config {
    if let Some(count) = get_env("PRIME_PAGES_COUNT").and_then(|v| v.trim().parse().ok()) {
        config.table.count = count;
    }

    if let Some(rows) = get_env("PRIME_PAGES_ROWS").and_then(|v| v.trim().parse().ok()) {
        config.table.rows_per_page = rows;
    }

    if let Some(columns) = get_env("PRIME_PAGES_COLUMNS").and_then(|v| v.trim().parse().ok()) {
        config.table.columns_per_page = columns;
    }

    if let Some(header) = get_env("PRIME_PAGES_HEADER") {
        config.table.header = Some(header);
    }

    if let Some(layout) = get_env("PRIME_PAGES_LAYOUT").and_then(|v| v.parse().ok()) {
        config.output.layout = layout;
    }

    if let Some(verbosity) =
        get_env("PRIME_PAGES_VERBOSITY").and_then(|v| v.parse::<Verbosity>().ok())
    {
        config.output.verbosity = verbosity;
    }

    config
}

/// 1-based number of the first line mentioning `needle`
fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|index| index + 1)
}

/// Closest known key within two edits, first match on ties
fn suggest_key(unknown: &str) -> Option<String> {
    const KNOWN_KEYS: &[&str] = &[
        "table",
        "count",
        "rows_per_page",
        "columns_per_page",
        "header",
        "output",
        "layout",
        "column_width",
        "verbosity",
    ];

    KNOWN_KEYS
        .iter()
        .map(|&known| (known, edit_distance(unknown, known)))
        .min_by_key(|&(_, distance)| distance)
        .filter(|&(_, distance)| distance <= 2)
        .map(|(known, _)| known.to_string())
}

/// Levenshtein distance over chars, keeping a single DP row
fn edit_distance(from: &str, to: &str) -> usize {
    let to: Vec<char> = to.chars().collect();
    let mut row: Vec<usize> = (0..=to.len()).collect();

    for (i, from_char) in from.chars().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, &to_char) in to.iter().enumerate() {
            let substitute = diagonal + usize::from(from_char != to_char);
            diagonal = row[j + 1];
            row[j + 1] = substitute.min(diagonal + 1).min(row[j] + 1);
        }
    }

    row[to.len()]
}
