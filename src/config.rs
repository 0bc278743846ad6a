//! Configuration for the converter
//!
//! Configuration is loaded in order of precedence:
//! 1. Environment variables (highest priority)
//! 2. Config file (~/.config/ghostforge/config.toml)
//! 3. Built-in defaults (lowest priority)
//!
//! Color-derivation policy (brightness deltas, palette fallbacks) is
//! deliberately NOT configurable; those are compatibility constants in
//! `crate::derive`.

use serde::Deserialize;
use std::path::PathBuf;

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ─────────────────────────────────────────────────────────────────────────────
// Log rotation
// ─────────────────────────────────────────────────────────────────────────────

/// Log file rotation strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogRotation {
    /// Rotate log files hourly
    Hourly,
    /// Rotate log files daily (default)
    #[default]
    Daily,
    /// Never rotate - single log file
    Never,
}

impl LogRotation {
    /// Parse rotation string from config
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "hourly" => Self::Hourly,
            "never" => Self::Never,
            _ => Self::Daily, // Default to daily for unknown values
        }
    }

    /// Convert to string for TOML serialization
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hourly => "hourly",
            Self::Daily => "daily",
            Self::Never => "never",
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Application configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Application configuration
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Logging configuration
    pub logging: LoggingConfig,
    /// Output packaging defaults
    pub output: OutputConfig,
    /// Metadata stamped into generated plugin manifests
    pub plugin: PluginConfig,
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    pub level: String,
    /// Enable file logging (in addition to stderr)
    pub file_enabled: bool,
    /// Directory for log files
    pub file_dir: PathBuf,
    /// Log file rotation strategy
    pub file_rotation: LogRotation,
    /// Prefix for log file names
    pub file_prefix: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file_enabled: false, // Opt-in feature
            file_dir: PathBuf::from("./logs"),
            file_rotation: LogRotation::Daily,
            file_prefix: "ghostforge".to_string(),
        }
    }
}

/// Output packaging defaults (overridable per run via CLI flags)
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Default packaging mode: "archive" or "directory"
    pub packaging: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            packaging: "archive".to_string(),
        }
    }
}

/// Manifest metadata
#[derive(Debug, Clone)]
pub struct PluginConfig {
    /// Vendor name embedded in generated plugin.xml files
    pub vendor: String,
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self {
            vendor: "ghostforge".to_string(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Config file structure
// ─────────────────────────────────────────────────────────────────────────────

/// Raw structure as loaded from the TOML file; all fields optional
#[derive(Debug, Deserialize, Default)]
pub struct FileConfig {
    pub logging: Option<FileLogging>,
    pub output: Option<FileOutput>,
    pub plugin: Option<FilePlugin>,
}

#[derive(Debug, Deserialize, Default)]
pub struct FileLogging {
    pub level: Option<String>,
    pub file_enabled: Option<bool>,
    pub file_dir: Option<String>,
    pub file_rotation: Option<String>,
    pub file_prefix: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
pub struct FileOutput {
    pub packaging: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
pub struct FilePlugin {
    pub vendor: Option<String>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Loading
// ─────────────────────────────────────────────────────────────────────────────

impl Config {
    /// Get the config file path: ~/.config/ghostforge/config.toml
    /// Uses Unix-style ~/.config on all platforms for consistency
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("ghostforge").join("config.toml"))
    }

    /// Create config file with defaults if it doesn't exist
    /// Called during startup to help users discover configuration options
    pub fn ensure_config_exists() {
        let Some(path) = Self::config_path() else {
            return;
        };

        // Don't overwrite existing config
        if path.exists() {
            return;
        }

        if let Some(parent) = path.parent() {
            if std::fs::create_dir_all(parent).is_err() {
                return; // Silently fail - config is optional
            }
        }

        // Write config (ignore errors - config is optional)
        let _ = std::fs::write(&path, Self::default().to_toml());
    }

    /// Load file config if it exists
    ///
    /// A config file that exists but cannot be parsed fails fast with a
    /// clear error instead of silently falling back to defaults.
    fn load_file_config() -> FileConfig {
        let Some(path) = Self::config_path() else {
            return FileConfig::default();
        };

        match std::fs::read_to_string(&path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("Error: failed to parse config file {}", path.display());
                    eprintln!("  {e}");
                    eprintln!("  To reset, delete the file and rerun ghostforge.");
                    std::process::exit(1);
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => FileConfig::default(),
            Err(e) => {
                eprintln!("Error: cannot read config file {}: {e}", path.display());
                std::process::exit(1);
            }
        }
    }

    /// Load configuration: env vars -> file -> defaults
    pub fn from_env() -> Self {
        let file = Self::load_file_config();
        let defaults = Self::default();

        let file_logging = file.logging.unwrap_or_default();
        let logging = LoggingConfig {
            level: std::env::var("GHOSTFORGE_LOG")
                .ok()
                .or(file_logging.level)
                .unwrap_or(defaults.logging.level),
            file_enabled: file_logging
                .file_enabled
                .unwrap_or(defaults.logging.file_enabled),
            file_dir: std::env::var("GHOSTFORGE_LOG_DIR")
                .ok()
                .or(file_logging.file_dir)
                .map(PathBuf::from)
                .unwrap_or(defaults.logging.file_dir),
            file_rotation: file_logging
                .file_rotation
                .map(|s| LogRotation::parse(&s))
                .unwrap_or(defaults.logging.file_rotation),
            file_prefix: file_logging
                .file_prefix
                .unwrap_or(defaults.logging.file_prefix),
        };

        let file_output = file.output.unwrap_or_default();
        let output = OutputConfig {
            packaging: file_output.packaging.unwrap_or(defaults.output.packaging),
        };

        let file_plugin = file.plugin.unwrap_or_default();
        let plugin = PluginConfig {
            vendor: file_plugin.vendor.unwrap_or(defaults.plugin.vendor),
        };

        Self {
            logging,
            output,
            plugin,
        }
    }

    /// Serialize to TOML template; single source of truth for the config
    /// file format (also used by `ensure_config_exists`)
    pub fn to_toml(&self) -> String {
        format!(
            r#"# ghostforge configuration
# Delete this file to regenerate it with defaults.

[logging]
# Log level: trace, debug, info, warn, error
level = "{level}"
# Write JSON logs to rotating files in addition to stderr
file_enabled = {file_enabled}
file_dir = "{file_dir}"
# Rotation: hourly, daily, never
file_rotation = "{file_rotation}"
file_prefix = "{file_prefix}"

[output]
# Default packaging mode: "archive" (theme dir + .jar) or "directory"
packaging = "{packaging}"

[plugin]
# Vendor name stamped into generated plugin manifests
vendor = "{vendor}"
"#,
            level = self.logging.level,
            file_enabled = self.logging.file_enabled,
            file_dir = self.logging.file_dir.display(),
            file_rotation = self.logging.file_rotation.as_str(),
            file_prefix = self.logging.file_prefix,
            packaging = self.output.packaging,
            vendor = self.plugin.vendor,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Verify that the serialized template parses back. Catches TOML
    /// syntax errors in the hand-written template.
    #[test]
    fn test_config_roundtrip_default() {
        let config = Config::default();
        let toml_str = config.to_toml();

        let parsed: Result<FileConfig, _> = toml::from_str(&toml_str);
        assert!(
            parsed.is_ok(),
            "Default config should round-trip.\nTOML:\n{}\nError: {:?}",
            toml_str,
            parsed.err()
        );

        let file = parsed.unwrap();
        let logging = file.logging.unwrap();
        assert_eq!(logging.level.as_deref(), Some("info"));
        assert_eq!(logging.file_enabled, Some(false));
        assert_eq!(file.output.unwrap().packaging.as_deref(), Some("archive"));
        assert_eq!(file.plugin.unwrap().vendor.as_deref(), Some("ghostforge"));
    }

    #[test]
    fn test_rotation_parse() {
        assert_eq!(LogRotation::parse("hourly"), LogRotation::Hourly);
        assert_eq!(LogRotation::parse("DAILY"), LogRotation::Daily);
        assert_eq!(LogRotation::parse("never"), LogRotation::Never);
        assert_eq!(LogRotation::parse("banana"), LogRotation::Daily);
    }

    #[test]
    fn test_partial_file_config_fills_defaults() {
        let file: FileConfig = toml::from_str("[logging]\nlevel = \"debug\"\n").unwrap();
        let logging = file.logging.unwrap();
        assert_eq!(logging.level.as_deref(), Some("debug"));
        assert!(logging.file_dir.is_none());
        assert!(file.output.is_none());
    }
}
