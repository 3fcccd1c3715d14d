// ShowBill - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. Logging initialisation (debug mode support)
// 3. Config and show definition loading
// 4. eframe GUI launch

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod gui;

// Re-export modules from the library crate so that `gui.rs` and other
// binary-side code can still use `crate::app::...`, `crate::core::...` etc.
pub use showbill::app;

pub use showbill::core;
pub use showbill::platform;
pub use showbill::ui;
pub use showbill::util;

use clap::Parser;
use std::path::PathBuf;

/// Build the window icon at startup: a red play triangle on a dark tile.
///
/// Generated procedurally so the binary carries no image asset and the
/// icon is always available regardless of the working directory.
fn build_icon() -> egui::IconData {
    const SIZE: usize = 64;
    let bg = ui::theme::PAGE_BG;
    let fg = ui::theme::ACCENT;
    let mut rgba = vec![0u8; SIZE * SIZE * 4];

    for y in 0..SIZE {
        for x in 0..SIZE {
            let i = (y * SIZE + x) * 4;

            // Dark tile background.
            rgba[i] = bg.r();
            rgba[i + 1] = bg.g();
            rgba[i + 2] = bg.b();
            rgba[i + 3] = 255;

            // Play triangle: apex pointing right, inset from the edges.
            let fy = y as f32;
            let fx = x as f32;
            let half_span = (fx - 18.0) * 0.55;
            if fx >= 18.0 && fx <= 48.0 && (fy - 32.0).abs() <= (16.0 - half_span).max(0.0) {
                rgba[i] = fg.r();
                rgba[i + 1] = fg.g();
                rgba[i + 2] = fg.b();
            }
        }
    }

    egui::IconData {
        rgba,
        width: SIZE as u32,
        height: SIZE as u32,
    }
}

/// Apply the configured base font size to every text style.
fn configure_text_styles(ctx: &egui::Context, font_size: f32) {
    let scale = font_size / util::constants::DEFAULT_FONT_SIZE;
    ctx.style_mut(|style| {
        for (_, font_id) in style.text_styles.iter_mut() {
            font_id.size *= scale;
        }
    });
}

/// ShowBill - Streaming-style promo page for a single show.
///
/// Presents a hero banner, theme selector, episode grid, and footer for
/// the built-in show or a show definition file of your own.
#[derive(Parser, Debug)]
#[command(name = "ShowBill", version, about)]
struct Cli {
    /// Show definition TOML file (uses the built-in show if omitted).
    show_file: Option<PathBuf>,

    /// Theme variant to select at startup (falls back to the show default).
    #[arg(short = 't', long = "theme")]
    theme: Option<String>,

    /// Print the resolved show definition as JSON and exit.
    #[arg(long = "print-show")]
    print_show: bool,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    // Resolve platform paths and load config before logging so the
    // configured level can participate in the filter priority ladder.
    let platform_paths = platform::config::PlatformPaths::resolve();
    let (config, config_warnings) = platform::config::load_config(&platform_paths.config_dir);

    util::logging::init(cli.debug, config.log_level.as_deref());

    tracing::info!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        "ShowBill starting"
    );

    for warning in &config_warnings {
        tracing::warn!(%warning, "Config warning");
    }

    // Load the show definition: CLI file > user show.toml > built-in.
    let (result, show_errors) =
        app::showfile::load_showcase(cli.show_file.as_deref(), &platform_paths.config_dir);

    let showcase = match result {
        Ok(showcase) => showcase,
        Err(e) => {
            // Only reachable if the built-in show itself is invalid.
            tracing::error!(error = %e, "Built-in show definition failed to load");
            eprintln!("Error: built-in show definition failed to load: {e}");
            std::process::exit(1);
        }
    };

    if cli.print_show {
        match serde_json::to_string_pretty(&showcase) {
            Ok(json) => {
                println!("{json}");
                return;
            }
            Err(e) => {
                eprintln!("Error: could not serialise show definition: {e}");
                std::process::exit(1);
            }
        }
    }

    let mut warnings: Vec<String> = config_warnings;
    warnings.extend(show_errors.iter().map(|e| e.to_string()));

    // Create application state
    let mut state = app::state::AppState::new(showcase, warnings);

    // Apply the CLI theme selection (unknown keys keep the default).
    if let Some(ref theme) = cli.theme {
        state.select_theme(theme);
    }

    tracing::info!(
        show = %state.showcase.show.title,
        theme = %state.selected_theme,
        "Ready to launch GUI"
    );

    let cache_dir = platform_paths.data_dir.clone();
    let poster_enabled = config.poster_enabled;
    let poster_timeout_secs = config.poster_timeout_secs;
    let font_size = config.font_size;

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(format!(
                "{} v{}",
                util::constants::APP_NAME,
                util::constants::APP_VERSION
            ))
            .with_inner_size(util::constants::WINDOW_SIZE)
            .with_min_inner_size(util::constants::MIN_WINDOW_SIZE)
            .with_icon(build_icon()),
        ..Default::default()
    };

    let result = eframe::run_native(
        util::constants::APP_NAME,
        native_options,
        Box::new(move |cc| {
            configure_text_styles(&cc.egui_ctx, font_size);
            Ok(Box::new(gui::ShowBillApp::new(
                state,
                cache_dir,
                poster_enabled,
                poster_timeout_secs,
            )))
        }),
    );

    if let Err(e) = result {
        tracing::error!(error = %e, "Failed to launch GUI");
        eprintln!("Error: Failed to launch ShowBill GUI: {e}");
        std::process::exit(1);
    }
}
