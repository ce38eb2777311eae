use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result};
use glob::Pattern;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".tscatrc.json";

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Directory searched for catalogs, relative to the config location.
    #[serde(default = "default_catalogs_root")]
    pub catalogs_root: String,
    #[serde(default = "default_includes")]
    pub includes: Vec<String>,
    #[serde(default)]
    pub ignores: Vec<String>,
    /// TS contexts skipped by every rule (e.g. "QPrintDialog").
    #[serde(default)]
    pub ignore_contexts: Vec<String>,
    /// Only look at catalogs of this language (e.g. "ka" or "ka_GE").
    #[serde(default)]
    pub primary_language: Option<String>,
    /// Answer lookups from unfinished translations too.
    #[serde(default)]
    pub include_unfinished: bool,
}

fn default_catalogs_root() -> String {
    ".".to_string()
}

fn default_includes() -> Vec<String> {
    vec!["**/*.ts".to_string()]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalogs_root: default_catalogs_root(),
            includes: default_includes(),
            ignores: Vec::new(),
            ignore_contexts: Vec::new(),
            primary_language: None,
            include_unfinished: false,
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if any glob patterns in `ignores` or `includes` are invalid.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        // Patterns without wildcards are literal paths and need no validation.
        for pattern in &self.includes {
            if pattern.contains('*') || pattern.contains('?') {
                Pattern::new(pattern).with_context(|| {
                    format!("Invalid glob pattern in 'includes': \"{}\"", pattern)
                })?;
            }
        }

        Ok(())
    }

    /// True if a catalog language passes the `primaryLanguage` filter.
    ///
    /// "ka" matches "ka" and "ka_GE"; "ka_GE" only matches "ka_GE".
    pub fn accepts_language(&self, language: Option<&str>) -> bool {
        let Some(wanted) = self.primary_language.as_deref() else {
            return true;
        };
        let Some(language) = language else {
            return false;
        };
        let language = language.replace('-', "_");
        let wanted = wanted.replace('-', "_");
        language == wanted || language.split('_').next() == Some(wanted.as_str())
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            tracing::debug!("Loaded config from {}", path.display());
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
