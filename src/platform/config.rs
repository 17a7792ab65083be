// SymptomLens - platform/config.rs
//
// Platform-specific configuration directory resolution and config.toml
// loading with startup validation.
//
// Uses the `directories` crate for XDG (Linux), AppData (Windows),
// Library (macOS) compliance.

use crate::core::model::Lang;
use crate::util::constants;
use crate::util::error::ConfigError;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Resolved platform paths for SymptomLens configuration.
#[derive(Debug, Clone)]
pub struct PlatformPaths {
    /// Configuration directory (e.g. ~/.config/symptomlens/ or %APPDATA%\SymptomLens\config\)
    pub config_dir: PathBuf,
}

impl PlatformPaths {
    /// Resolve platform-appropriate paths.
    ///
    /// Falls back to current directory if platform dirs cannot be determined.
    pub fn resolve() -> Self {
        if let Some(proj_dirs) = ProjectDirs::from("", "", constants::APP_ID) {
            let config_dir = proj_dirs.config_dir().to_path_buf();
            tracing::debug!(config = %config_dir.display(), "Platform paths resolved");
            Self { config_dir }
        } else {
            tracing::warn!("Could not determine platform directories, using current directory");
            Self {
                config_dir: PathBuf::from("."),
            }
        }
    }
}

// =============================================================================
// config.toml loading and validation
// =============================================================================

/// Raw deserialisable shape of config.toml.
///
/// Unknown keys are silently ignored for forward compatibility.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// `[api]` section.
    pub api: ApiSection,
    /// `[ui]` section.
    pub ui: UiSection,
    /// `[logging]` section.
    pub logging: LoggingSection,
}

/// `[api]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct ApiSection {
    /// Base URL of the analysis service, e.g. "https://example.org".
    pub base_url: Option<String>,
}

/// `[ui]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct UiSection {
    /// Startup language: "en" or "zh".
    pub language: Option<String>,
    /// Theme: "dark" or "light".
    pub theme: Option<String>,
    /// Body font size in points.
    pub font_size: Option<f32>,
}

/// `[logging]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level: "error", "warn", "info", "debug", "trace".
    pub level: Option<String>,
    /// Log file path (empty = stderr only).
    pub file: Option<String>,
}

/// Validated application configuration derived from `config.toml`.
///
/// Invalid values produce actionable warnings and fall back to defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Base URL of the analysis service.
    pub base_url: String,
    /// Language at startup.
    pub language: Lang,
    /// Dark mode (true) or light mode (false).
    pub dark_mode: bool,
    /// Body font size in points.
    pub font_size: f32,
    /// Logging level string (for init before tracing is available).
    pub log_level: Option<String>,
    /// Log file path.
    pub log_file: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: constants::DEFAULT_BASE_URL.to_string(),
            language: Lang::default(),
            dark_mode: true,
            font_size: constants::DEFAULT_FONT_SIZE,
            log_level: None,
            log_file: None,
        }
    }
}

/// Check a base URL from config or CLI.
pub fn validate_base_url(url: &str) -> Result<(), ConfigError> {
    let valid = url.len() <= constants::MAX_BASE_URL_LEN
        && (url.starts_with("http://") || url.starts_with("https://"));
    if valid {
        Ok(())
    } else {
        Err(ConfigError::ValueOutOfRange {
            field: "api.base_url".to_string(),
            value: url.to_string(),
            expected: format!(
                "an http:// or https:// URL of at most {} characters",
                constants::MAX_BASE_URL_LEN
            ),
        })
    }
}

/// Base URL for this run: the `--base-url` override when given, else the
/// validated config value. An explicit but unusable override is an error
/// rather than a silent fallback.
pub fn resolve_base_url(
    config: &AppConfig,
    cli_override: Option<&str>,
) -> crate::util::error::Result<String> {
    match cli_override.map(str::trim) {
        Some(url) => {
            validate_base_url(url)?;
            Ok(url.to_string())
        }
        None => Ok(config.base_url.clone()),
    }
}

/// Load and validate `config.toml` from the given config directory.
///
/// Returns `AppConfig` with validated values and a list of non-fatal warnings.
/// If the file does not exist, returns defaults with no warnings (first-run).
/// If the file is unparseable, returns defaults with a warning; the
/// application still starts but the user is informed.
pub fn load_config(config_dir: &Path) -> (AppConfig, Vec<String>) {
    let config_path = config_dir.join(constants::CONFIG_FILE_NAME);
    let mut warnings: Vec<String> = Vec::new();

    if !config_path.exists() {
        tracing::debug!(path = %config_path.display(), "No config.toml found; using defaults");
        return (AppConfig::default(), warnings);
    }

    let content = match std::fs::read_to_string(&config_path) {
        Ok(c) => c,
        Err(e) => {
            let err = ConfigError::Io {
                path: config_path.clone(),
                source: e,
            };
            let msg = format!("{err}. Using defaults.");
            tracing::warn!("{}", msg);
            warnings.push(msg);
            return (AppConfig::default(), warnings);
        }
    };

    let raw: RawConfig = match toml::from_str(&content) {
        Ok(r) => r,
        Err(e) => {
            let err = ConfigError::TomlParse {
                path: config_path.clone(),
                source: e,
            };
            let msg = format!("{err}. Using defaults.");
            tracing::warn!("{}", msg);
            warnings.push(msg);
            return (AppConfig::default(), warnings);
        }
    };

    tracing::info!(path = %config_path.display(), "Loaded config.toml");

    let mut config = AppConfig::default();

    // -- API: base_url --
    if let Some(ref url) = raw.api.base_url {
        let url = url.trim();
        match validate_base_url(url) {
            Ok(()) => config.base_url = url.to_string(),
            Err(err) => warnings.push(format!(
                "{err}. Using default ({}).",
                constants::DEFAULT_BASE_URL,
            )),
        }
    }

    // -- UI: language --
    if let Some(ref language) = raw.ui.language {
        match language.parse::<Lang>() {
            Ok(lang) => config.language = lang,
            Err(_) => warnings.push(format!(
                "[ui] language = \"{language}\" is not recognised. \
                 Expected \"en\" or \"zh\". Using default (en).",
            )),
        }
    }

    // -- UI: theme --
    if let Some(ref theme) = raw.ui.theme {
        match theme.to_lowercase().as_str() {
            "dark" => config.dark_mode = true,
            "light" => config.dark_mode = false,
            other => {
                warnings.push(format!(
                    "[ui] theme = \"{other}\" is not recognised. Expected \"dark\" or \"light\". Using default (dark).",
                ));
            }
        }
    }

    // -- UI: font_size --
    if let Some(size) = raw.ui.font_size {
        if (constants::MIN_FONT_SIZE..=constants::MAX_FONT_SIZE).contains(&size) {
            config.font_size = size;
        } else {
            let err = ConfigError::ValueOutOfRange {
                field: "ui.font_size".to_string(),
                value: size.to_string(),
                expected: format!(
                    "{}-{}",
                    constants::MIN_FONT_SIZE,
                    constants::MAX_FONT_SIZE
                ),
            };
            warnings.push(format!(
                "{err}. Using default ({}).",
                constants::DEFAULT_FONT_SIZE
            ));
        }
    }

    // -- Logging: level --
    if let Some(ref level) = raw.logging.level {
        let valid = ["error", "warn", "info", "debug", "trace"];
        if valid.contains(&level.to_lowercase().as_str()) {
            config.log_level = Some(level.clone());
        } else {
            warnings.push(format!(
                "[logging] level = \"{level}\" is not recognised. \
                 Valid values: error, warn, info, debug, trace. Using default (info).",
            ));
        }
    }

    // -- Logging: file --
    if let Some(ref file) = raw.logging.file {
        if !file.is_empty() {
            config.log_file = Some(file.clone());
        }
    }

    if !warnings.is_empty() {
        tracing::warn!(
            count = warnings.len(),
            "Config validation produced warnings"
        );
    }

    (config, warnings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_config(dir: &Path, content: &str) {
        fs::write(dir.join(constants::CONFIG_FILE_NAME), content).unwrap();
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let (config, warnings) = load_config(dir.path());
        assert_eq!(config, AppConfig::default());
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_valid_config_is_applied() {
        let dir = tempfile::tempdir().unwrap();
        write_config(
            dir.path(),
            r#"
[api]
base_url = "https://tcm.example.org"

[ui]
language = "zh"
theme = "light"
font_size = 16.0

[logging]
level = "debug"
file = "/tmp/symptomlens.log"
"#,
        );
        let (config, warnings) = load_config(dir.path());
        assert!(warnings.is_empty(), "unexpected warnings: {warnings:?}");
        assert_eq!(config.base_url, "https://tcm.example.org");
        assert_eq!(config.language, Lang::Zh);
        assert!(!config.dark_mode);
        assert_eq!(config.font_size, 16.0);
        assert_eq!(config.log_level.as_deref(), Some("debug"));
        assert_eq!(config.log_file.as_deref(), Some("/tmp/symptomlens.log"));
    }

    #[test]
    fn test_invalid_values_fall_back_with_warnings() {
        let dir = tempfile::tempdir().unwrap();
        write_config(
            dir.path(),
            r#"
[api]
base_url = "ftp://nope"

[ui]
language = "fr"
theme = "blue"
font_size = 99.0

[logging]
level = "loud"
"#,
        );
        let (config, warnings) = load_config(dir.path());
        assert_eq!(warnings.len(), 5, "got {warnings:?}");
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_unparseable_file_gives_defaults_and_one_warning() {
        let dir = tempfile::tempdir().unwrap();
        write_config(dir.path(), "[api\nbase_url = ");
        let (config, warnings) = load_config(dir.path());
        assert_eq!(config, AppConfig::default());
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("Failed to parse config file"));
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let dir = tempfile::tempdir().unwrap();
        write_config(dir.path(), "[future]\nflag = true\n[ui]\ntheme = \"dark\"\n");
        let (_, warnings) = load_config(dir.path());
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_validate_base_url() {
        assert!(validate_base_url("http://127.0.0.1:3000").is_ok());
        assert!(validate_base_url("https://x.org/").is_ok());
        assert!(validate_base_url("localhost:3000").is_err());
        assert!(validate_base_url("").is_err());
        let too_long = format!("https://{}", "a".repeat(constants::MAX_BASE_URL_LEN));
        assert!(validate_base_url(&too_long).is_err());
    }

    #[test]
    fn test_resolve_base_url_prefers_valid_override() {
        let config = AppConfig::default();
        assert_eq!(
            resolve_base_url(&config, None).unwrap(),
            constants::DEFAULT_BASE_URL
        );
        assert_eq!(
            resolve_base_url(&config, Some(" https://tcm.example.org ")).unwrap(),
            "https://tcm.example.org"
        );
    }

    #[test]
    fn test_resolve_base_url_rejects_bad_override() {
        let err = resolve_base_url(&AppConfig::default(), Some("localhost:3000")).unwrap_err();
        assert!(
            matches!(
                err,
                crate::util::error::SymptomLensError::Config(ConfigError::ValueOutOfRange { .. })
            ),
            "got {err:?}"
        );
        assert!(err.to_string().contains("api.base_url"));
    }
}
