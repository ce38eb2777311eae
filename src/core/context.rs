use std::{
    cell::OnceCell,
    collections::{BTreeSet, HashSet},
    path::{Component, Path, PathBuf},
};

use anyhow::{Context as _, Result, anyhow};
use rayon::prelude::*;
use tracing::{debug, warn};

use crate::{
    cli::args::CommonArgs,
    config::{Config, load_config},
    core::{
        parsers::ts::{SchemaViolation, parse_ts_file},
        scanner::{catalog_language, scan_catalogs},
        Catalog,
    },
    issues::{ParseErrorIssue, SchemaIssue},
};

/// A parsed catalog together with its structural findings.
#[derive(Debug, Clone)]
pub struct LoadedCatalog {
    pub catalog: Catalog,
    pub violations: Vec<SchemaViolation>,
}

impl LoadedCatalog {
    /// Catalog language, guessed from the file name when the `language`
    /// attribute is missing.
    pub fn language(&self) -> Option<String> {
        catalog_language(&self.catalog)
    }
}

/// Catalogs loaded for one run of the checks.
///
/// `CheckContext` owns the configuration, the scanned file list and the
/// parsed catalogs. Parsing is lazy so that commands which only need the
/// file list stay cheap.
///
/// # Configuration Priority
///
/// 1. CLI arguments (e.g., `--language ka`)
/// 2. `.tscatrc.json` config file
/// 3. Built-in defaults
pub struct CheckContext {
    /// Merged configuration (CLI args > config file > defaults).
    pub config: Config,

    /// Root directory the run started from.
    pub root_dir: PathBuf,

    /// Directory that was scanned for catalogs.
    pub catalogs_dir: PathBuf,

    /// Catalog files found by the scanner.
    pub files: BTreeSet<String>,

    /// Whether to print verbose diagnostic messages.
    pub verbose: bool,

    /// Parsed catalogs, filtered by `primaryLanguage`.
    catalogs: OnceCell<Vec<LoadedCatalog>>,

    /// Files that could not be read or parsed.
    parse_errors: OnceCell<Vec<ParseErrorIssue>>,
}

impl CheckContext {
    /// Create a new `CheckContext` from command line arguments.
    ///
    /// Loads the configuration found from the root directory upward,
    /// applies CLI overrides and scans for catalog files.
    ///
    /// # Errors
    ///
    /// Returns error if the config file is invalid or the root path is not UTF-8.
    pub fn new(common_args: &CommonArgs) -> Result<Self> {
        let root_dir = common_args
            .root
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));
        root_dir
            .to_str()
            .with_context(|| anyhow!("Invalid path: {:?}", root_dir))?;

        let config_result = load_config(&root_dir)?;
        if !config_result.from_file {
            debug!("No .tscatrc.json found, using default configuration");
        }

        let mut config = config_result.config;
        if let Some(language) = &common_args.language {
            config.primary_language = Some(language.clone());
        }

        Ok(Self::with_config(config, root_dir, common_args.verbose))
    }

    /// Create a context from an already merged configuration.
    pub fn with_config(config: Config, root_dir: PathBuf, verbose: bool) -> Self {
        let catalogs_dir = resolve_dir(&root_dir, &config.catalogs_root);
        let scan_result = scan_catalogs(
            &catalogs_dir.to_string_lossy(),
            &config.includes,
            &config.ignores,
        );

        if scan_result.skipped_count > 0 {
            warn!(
                "{} path(s) skipped due to access errors",
                scan_result.skipped_count
            );
        }
        debug!(
            "Found {} catalog(s) in {}",
            scan_result.files.len(),
            catalogs_dir.display()
        );

        Self {
            config,
            root_dir,
            catalogs_dir,
            files: scan_result.files,
            verbose,
            catalogs: OnceCell::new(),
            parse_errors: OnceCell::new(),
        }
    }

    /// Parsed catalogs (lazy initialization).
    ///
    /// Files are read and parsed in parallel. Failures are collected
    /// separately and can be retrieved via `parse_errors()`.
    pub fn catalogs(&self) -> &[LoadedCatalog] {
        self.catalogs.get_or_init(|| {
            let results: Vec<_> = self
                .files
                .par_iter()
                .map(|file_path| (file_path.clone(), parse_ts_file(Path::new(file_path))))
                .collect();

            let mut catalogs = Vec::new();
            let mut errors = Vec::new();
            for (file_path, result) in results {
                match result {
                    Ok(parsed) => {
                        let loaded = LoadedCatalog {
                            catalog: parsed.catalog,
                            violations: parsed.violations,
                        };
                        if self.config.accepts_language(loaded.language().as_deref()) {
                            catalogs.push(loaded);
                        } else {
                            debug!("Skipping {}: language filter", file_path);
                        }
                    }
                    Err(e) => {
                        warn!("{}", e);
                        errors.push(ParseErrorIssue {
                            file_path,
                            error: e.to_string(),
                        });
                    }
                }
            }

            let _ = self.parse_errors.set(errors);
            catalogs
        })
    }

    /// Files that could not be parsed. Populated by `catalogs()`.
    pub fn parse_errors(&self) -> &[ParseErrorIssue] {
        self.catalogs();
        self.parse_errors.get_or_init(Vec::new)
    }

    /// Structural violations of all catalogs as issues.
    pub fn schema_issues(&self) -> Vec<SchemaIssue> {
        self.catalogs()
            .iter()
            .flat_map(|c| &c.violations)
            .map(|v| SchemaIssue {
                location: v.location.clone(),
                source_line: v.source_line.clone(),
                message: v.message.clone(),
            })
            .collect()
    }

    /// Contexts every rule skips.
    pub fn ignored_contexts(&self) -> HashSet<&str> {
        self.config
            .ignore_contexts
            .iter()
            .map(String::as_str)
            .collect()
    }
}

/// Resolve a configured directory against the root directory.
fn resolve_dir(root_dir: &Path, dir: &str) -> PathBuf {
    let p = Path::new(dir);
    if p.is_absolute() {
        return p.to_path_buf();
    }
    let is_cur_dir = root_dir
        .components()
        .all(|c| matches!(c, Component::CurDir));
    if is_cur_dir {
        p.to_path_buf()
    } else {
        let rel = p.strip_prefix(Path::new(".")).unwrap_or(p);
        root_dir.join(rel)
    }
}
