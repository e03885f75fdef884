//! Configuration for coursekit.
//!
//! Configuration sources (highest priority first):
//! 1. Environment variables (COURSEKIT_FORMAT, COURSEKIT_LOG)
//! 2. Config file (.coursekit/config.yaml)
//! 3. Defaults (text output, `info` logging, stop on first failed edit)
//!
//! Config file discovery:
//! - Searches current directory and parents for .coursekit/config.yaml
//! - Falls back to ~/.coursekit/config.yaml

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::plan::OutputFormat;

/// Global cached configuration (stores Result to handle init errors)
static CONFIG: OnceLock<Result<ResolvedConfig, String>> = OnceLock::new();

const CONFIG_DIR: &str = ".coursekit";
const CONFIG_FILE: &str = "config.yaml";
const DEFAULT_LOG_FILTER: &str = "info";

/// Raw config file schema (matches YAML structure)
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigFile {
    pub version: String,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub log: LogConfig,
    #[serde(default)]
    pub edits: EditsConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutputConfig {
    /// Outline format when --format is not given
    pub format: Option<OutputFormat>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LogConfig {
    /// tracing filter directive, used when RUST_LOG is unset
    pub filter: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EditsConfig {
    /// Keep applying edits after one is rejected
    pub keep_going: Option<bool>,
}

/// Resolved configuration
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub format: OutputFormat,
    pub log_filter: String,
    pub keep_going: bool,
    /// Path to config file (if found)
    pub config_file: Option<PathBuf>,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            keep_going: false,
            config_file: None,
        }
    }
}

/// Find config file by searching `start` and its parents
fn find_config_file_from(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_DIR).join(CONFIG_FILE);
        if config_path.exists() {
            return Some(config_path);
        }

        if !current.pop() {
            break;
        }
    }

    None
}

fn find_config_file() -> Option<PathBuf> {
    let from_cwd = std::env::current_dir()
        .ok()
        .and_then(|cwd| find_config_file_from(&cwd));

    from_cwd.or_else(|| {
        let home_config = dirs::home_dir()?.join(CONFIG_DIR).join(CONFIG_FILE);
        home_config.exists().then_some(home_config)
    })
}

/// Load and parse config file
fn load_config_file(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Merge the config file (if any) with environment overrides
fn resolve(
    config_file: Option<PathBuf>,
    env: impl Fn(&str) -> Option<String>,
) -> Result<ResolvedConfig> {
    let mut resolved = ResolvedConfig::default();

    if let Some(ref path) = config_file {
        let file = load_config_file(path)?;

        if let Some(format) = file.output.format {
            resolved.format = format;
        }
        if let Some(filter) = file.log.filter {
            resolved.log_filter = filter;
        }
        if let Some(keep_going) = file.edits.keep_going {
            resolved.keep_going = keep_going;
        }
    }

    if let Some(format) = env("COURSEKIT_FORMAT") {
        resolved.format = format
            .parse()
            .with_context(|| format!("Invalid COURSEKIT_FORMAT: {}", format))?;
    }
    if let Some(filter) = env("COURSEKIT_LOG") {
        resolved.log_filter = filter;
    }

    resolved.config_file = config_file;
    Ok(resolved)
}

/// Load configuration from all sources
fn load_config() -> Result<ResolvedConfig> {
    resolve(find_config_file(), |key| std::env::var(key).ok())
}

/// Get the global configuration (loads once, then cached)
pub fn config() -> Result<&'static ResolvedConfig> {
    let result = CONFIG.get_or_init(|| load_config().map_err(|e| format!("{:#}", e)));

    match result {
        Ok(config) => Ok(config),
        Err(e) => anyhow::bail!("{}", e),
    }
}

/// Force reload configuration (useful for testing)
pub fn reload_config() -> Result<ResolvedConfig> {
    load_config()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::TempDir;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    fn write_config(dir: &Path, body: &str) -> PathBuf {
        let config_dir = dir.join(CONFIG_DIR);
        std::fs::create_dir_all(&config_dir).unwrap();

        let config_path = config_dir.join(CONFIG_FILE);
        let mut file = std::fs::File::create(&config_path).unwrap();
        writeln!(file, "{}", body).unwrap();
        config_path
    }

    #[test]
    fn test_defaults_without_file() {
        let config = resolve(None, no_env).unwrap();

        assert_eq!(config.format, OutputFormat::Text);
        assert_eq!(config.log_filter, "info");
        assert!(!config.keep_going);
        assert!(config.config_file.is_none());
    }

    #[test]
    fn test_config_file_parsing() {
        let temp = TempDir::new().unwrap();
        let path = write_config(
            temp.path(),
            r#"
version: "1.0"
output:
  format: json
log:
  filter: coursekit=debug
edits:
  keep_going: true
"#,
        );

        let config = resolve(Some(path.clone()), no_env).unwrap();
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.log_filter, "coursekit=debug");
        assert!(config.keep_going);
        assert_eq!(config.config_file, Some(path));
    }

    #[test]
    fn test_env_overrides_file() {
        let temp = TempDir::new().unwrap();
        let path = write_config(temp.path(), "version: \"1.0\"\noutput:\n  format: json");

        let env: HashMap<&str, &str> = [("COURSEKIT_FORMAT", "text"), ("COURSEKIT_LOG", "warn")]
            .into_iter()
            .collect();
        let config = resolve(Some(path), |key| env.get(key).map(|v| v.to_string())).unwrap();

        assert_eq!(config.format, OutputFormat::Text);
        assert_eq!(config.log_filter, "warn");
    }

    #[test]
    fn test_invalid_env_format() {
        let result = resolve(None, |key| {
            (key == "COURSEKIT_FORMAT").then(|| "xml".to_string())
        });
        assert!(result.is_err());
    }

    #[test]
    fn test_find_config_in_parent() {
        let temp = TempDir::new().unwrap();
        let path = write_config(temp.path(), "version: \"1.0\"");
        let nested = temp.path().join("courses").join("azure");
        std::fs::create_dir_all(&nested).unwrap();

        assert_eq!(find_config_file_from(&nested), Some(path));
    }
}
