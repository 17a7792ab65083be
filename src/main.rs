// SymptomLens - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. config.toml loading
// 3. Logging initialisation (debug mode support)
// 4. eframe GUI launch

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod gui;

// Re-export modules from the library crate so that `gui.rs` can still use
// `crate::app::...`, `crate::core::...` etc.
pub use symptomlens::app;
pub use symptomlens::core;
pub use symptomlens::platform;
pub use symptomlens::ui;
pub use symptomlens::util;

use clap::Parser;
use symptomlens::core::model::Lang;
use std::path::PathBuf;

/// System fonts with CJK coverage, tried in order. The first one that loads
/// is used as a fallback after the egui built-ins so Chinese labels render.
#[cfg(target_os = "windows")]
const CJK_FONT_CANDIDATES: &[&str] = &[
    r"C:\Windows\Fonts\msyh.ttc",
    r"C:\Windows\Fonts\simhei.ttf",
    r"C:\Windows\Fonts\simsun.ttc",
];

#[cfg(target_os = "macos")]
const CJK_FONT_CANDIDATES: &[&str] = &[
    "/System/Library/Fonts/PingFang.ttc",
    "/System/Library/Fonts/STHeiti Medium.ttc",
    "/Library/Fonts/Arial Unicode.ttf",
];

#[cfg(not(any(target_os = "windows", target_os = "macos")))]
const CJK_FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/google-noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/truetype/wqy/wqy-microhei.ttc",
    "/usr/share/fonts/wenquanyi/wqy-microhei/wqy-microhei.ttc",
];

/// Configure fonts for the egui context.
///
/// The egui built-in fonts have no CJK glyphs, so Chinese symptom labels
/// would render as empty boxes. Loads the first available system CJK font and
/// appends it to both families; the built-ins stay first so Latin text keeps
/// its usual look.
fn configure_fonts(ctx: &egui::Context) {
    const CJK_FONT_NAME: &str = "system-cjk";

    for path in CJK_FONT_CANDIDATES {
        match std::fs::read(path) {
            Ok(data) => {
                let mut fonts = egui::FontDefinitions::default();
                fonts.font_data.insert(
                    CJK_FONT_NAME.to_owned(),
                    egui::FontData::from_owned(data).into(),
                );
                for family in [egui::FontFamily::Proportional, egui::FontFamily::Monospace] {
                    if let Some(list) = fonts.families.get_mut(&family) {
                        list.push(CJK_FONT_NAME.to_owned());
                    }
                }
                ctx.set_fonts(fonts);
                tracing::info!(font = path, "CJK fallback font configured");
                return;
            }
            Err(e) => {
                tracing::debug!(font = path, error = %e, "CJK font candidate not available");
            }
        }
    }

    tracing::warn!("No system CJK font found; Chinese labels may render as boxes");
}

/// SymptomLens - pick symptoms and view the remote analysis.
#[derive(Parser, Debug)]
#[command(name = "SymptomLens", version, about)]
struct Cli {
    /// Base URL of the analysis service (overrides config.toml).
    #[arg(short = 'u', long = "base-url")]
    base_url: Option<String>,

    /// Startup language: en or zh (overrides config.toml).
    #[arg(short = 'l', long = "lang")]
    lang: Option<Lang>,

    /// Directory containing config.toml (defaults to the platform config dir).
    #[arg(short = 'c', long = "config-dir")]
    config_dir: Option<PathBuf>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

/// Pick the base URL (CLI over config) and build the request manager.
fn start_requests(
    config: &platform::config::AppConfig,
    cli_base_url: Option<&str>,
) -> util::error::Result<app::requests::RequestManager> {
    let base_url = platform::config::resolve_base_url(config, cli_base_url)?;
    app::requests::RequestManager::connect(&base_url)
}

fn main() {
    let cli = Cli::parse();

    // Config is loaded before logging so [logging] settings take effect;
    // its warnings are replayed once the subscriber is up.
    let platform_paths = platform::config::PlatformPaths::resolve();
    let config_dir = cli
        .config_dir
        .clone()
        .unwrap_or_else(|| platform_paths.config_dir.clone());
    let (config, config_warnings) = platform::config::load_config(&config_dir);

    util::logging::init(
        cli.debug,
        config.log_level.as_deref(),
        config.log_file.as_deref(),
    );

    tracing::info!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        "SymptomLens starting"
    );

    for warning in &config_warnings {
        tracing::warn!(warning = %warning, "Configuration warning");
    }

    let lang = cli.lang.unwrap_or(config.language);
    let requests = match start_requests(&config, cli.base_url.as_deref()) {
        Ok(r) => r,
        Err(e) => {
            tracing::error!(error = %e, "Startup failed");
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };
    tracing::info!(base_url = %requests.base_url(), lang = %lang, "Ready to launch GUI");

    let mut state = app::state::AppState::new(lang, cli.debug);
    if let Some(last) = config_warnings.last() {
        state.status_message = last.clone();
    }
    state.warnings = config_warnings;

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(format!(
                "{} v{}",
                util::constants::APP_NAME,
                util::constants::APP_VERSION
            ))
            .with_inner_size([1100.0, 760.0])
            .with_min_inner_size([720.0, 480.0]),
        ..Default::default()
    };

    let dark_mode = config.dark_mode;
    let font_size = config.font_size;
    let result = eframe::run_native(
        util::constants::APP_NAME,
        native_options,
        Box::new(move |cc| {
            configure_fonts(&cc.egui_ctx);
            ui::theme::apply(&cc.egui_ctx, dark_mode, font_size);
            Ok(Box::new(gui::SymptomLensApp::new(state, requests)))
        }),
    );

    if let Err(e) = result {
        tracing::error!(error = %e, "Failed to launch GUI");
        eprintln!("Error: Failed to launch SymptomLens GUI: {e}");
        std::process::exit(1);
    }
}
