//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{MenuError, MenuResult};

use super::types::{ColorMode, Config};

/// File name looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = "menucli.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> MenuResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| MenuError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load from project config, user config, or defaults
pub fn load_or_default(project_root: Option<&Path>) -> Config {
    let candidates = project_root
        .map(|root| root.join(PROJECT_CONFIG_FILE))
        .into_iter()
        .chain(dirs::config_dir().map(|dir| dir.join("menucli/config.toml")));

    for path in candidates {
        if !path.exists() {
            continue;
        }
        match load_with_warnings(&path) {
            Ok((config, warnings)) => {
                report_warnings(&warnings);
                debug!(file = %path.display(), "loaded config");
                return Config::with_env_overrides(config);
            }
            Err(err) => warn!(file = %path.display(), error = %err, "ignoring unreadable config"),
        }
    }

    Config::with_env_overrides(Config::default())
}

/// Log unknown-key warnings collected while loading
pub fn report_warnings(warnings: &[ConfigWarning]) {
    for w in warnings {
        match &w.suggestion {
            Some(s) => warn!(key = %w.key, file = %w.file.display(), line = ?w.line, "unknown config key, did you mean '{}'?", s),
            None => warn!(key = %w.key, file = %w.file.display(), line = ?w.line, "unknown config key"),
        }
    }
}

/// Apply environment variable overrides (MENUCLI_* prefix)
pub fn with_env_overrides(mut config: Config, get_env: impl Fn(&str) -> Option<String>) -> Config {
    if let Some(title) = get_env("MENUCLI_ROOT_TITLE") {
        config.menu.root_title = title;
    }

    if let Some(prompt) = get_env("MENUCLI_PROMPT") {
        config.menu.prompt = prompt;
    }

    if let Some(lines) = get_env("MENUCLI_BLANK_LINES") {
        match lines.trim().parse::<u32>() {
            Ok(n) => config.menu.blank_lines_before_menu = n,
            Err(_) => warn!(value = %lines, "MENUCLI_BLANK_LINES is not a number, ignoring"),
        }
    }

    if let Some(color) = get_env("MENUCLI_COLOR") {
        match ColorMode::parse(&color) {
            Some(mode) => config.output.color = mode,
            None => warn!(value = %color, "MENUCLI_COLOR must be auto, always or never"),
        }
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

pub(super) fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "menu",
        "root_title",
        "blank_lines_before_menu",
        "prompt",
        "farewell",
        "not_found_message",
        "input",
        "submenu_separator",
        "output",
        "color",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
