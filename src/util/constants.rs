// SymptomLens - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "SymptomLens";

/// Application identifier used for config/data directories.
pub const APP_ID: &str = "SymptomLens";

/// Current application version (updated by release script).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Remote API
// =============================================================================

/// Base URL used when neither config.toml nor the CLI provides one.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:3000";

/// Path of the symptom catalog endpoint, relative to the base URL.
pub const SYMPTOMS_PATH: &str = "/api/symptoms";

/// Path of the analysis endpoint, relative to the base URL.
pub const ANALYZE_PATH: &str = "/api/analyze";

/// Region token sent by the whole-body hotspot on the body map.
pub const WHOLE_REGION: &str = "whole";

/// Upper bound on the base URL length accepted from config or CLI.
pub const MAX_BASE_URL_LEN: usize = 2048;

// =============================================================================
// UI
// =============================================================================

/// Default body font size in points.
pub const DEFAULT_FONT_SIZE: f32 = 14.0;

/// Minimum configurable font size.
pub const MIN_FONT_SIZE: f32 = 8.0;

/// Maximum configurable font size.
pub const MAX_FONT_SIZE: f32 = 32.0;

/// Repaint interval while a request is outstanding (ms).
pub const REQUEST_POLL_INTERVAL_MS: u64 = 100;

// =============================================================================
// Files & logging
// =============================================================================

/// Config file name inside the platform config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Default log level when neither RUST_LOG, --debug, nor config sets one.
pub const DEFAULT_LOG_LEVEL: &str = "info";
