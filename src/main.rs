// PlantTox - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. config.toml loading and logging initialisation
// 3. Dataset and session restore
// 4. Headless HTML export or eframe GUI launch

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod gui;

// Re-export modules from the library crate so that `gui.rs` and other
// binary-side code can still use `crate::app::...`, `crate::core::...` etc.
pub use planttox::app;
pub use planttox::core;
pub use planttox::platform;
pub use planttox::ui;
pub use planttox::util;

use clap::Parser;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use util::error::{ExportError, Result};

/// PlantTox - Which house and garden plants are toxic to your pets?
///
/// Search a table of plants by common or scientific name and see at a glance
/// whether each one is safe for cats, dogs and horses.
#[derive(Parser, Debug)]
#[command(name = "PlantTox", version, about)]
struct Cli {
    /// Dataset JSON to open (built-in dataset if omitted).
    dataset: Option<PathBuf>,

    /// Initial search text.
    #[arg(short = 'q', long = "query")]
    query: Option<String>,

    /// Write the filtered table as an HTML page to PATH and exit.
    #[arg(long = "export-html", value_name = "PATH")]
    export_html: Option<PathBuf>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    // Config is read before logging so its [logging] level can take part in
    // the filter; its warnings are replayed once tracing is up.
    let platform_paths = platform::config::PlatformPaths::resolve();
    let (config, config_warnings) = platform::config::load_config(&platform_paths.config_dir);

    util::logging::init(cli.debug, config.log_level.as_deref());

    tracing::info!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        "PlantTox starting"
    );
    for w in &config_warnings {
        tracing::warn!("{}", w);
    }

    let headless = cli.export_html.is_some();
    let mut state = app::state::AppState::new(&config);

    // Session restore is a GUI concern; headless runs only see the CLI.
    let session = if headless {
        None
    } else {
        let path = app::session::session_path(&platform_paths.data_dir);
        let restored = app::session::load(&path);
        state.session_path = Some(path);
        restored
    };

    // Dataset priority: CLI > session > config > built-in.
    let dataset_path = cli
        .dataset
        .clone()
        .or_else(|| session.as_ref().and_then(|s| s.dataset_path.clone()))
        .or_else(|| config.dataset_path.clone());

    if let Err(e) = load_initial_dataset(&mut state, dataset_path.as_deref()) {
        tracing::error!(error = %e, "Failed to load dataset");
        // A headless export must not silently fall back to the built-in plants.
        if headless {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
        state.load_builtin();
        state.status_message = format!("Cannot open dataset: {e}. Showing built-in dataset.");
    }

    // Loading replaces the dataset warnings; keep config warnings in front.
    let mut warnings = config_warnings;
    warnings.append(&mut state.warnings);
    state.warnings = warnings;

    let query = cli
        .query
        .clone()
        .or_else(|| session.map(|s| s.query))
        .unwrap_or_default();
    state.restore_query(&query);

    if let Some(ref dest) = cli.export_html {
        match run_headless_export(&state, dest) {
            Ok(n) => {
                println!("Wrote {n} plants to {}", dest.display());
                std::process::exit(0);
            }
            Err(e) => {
                tracing::error!(error = %e, "HTML export failed");
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        }
    }

    tracing::info!(
        plants = state.filterer.len(),
        visible = state.filterer.visible_count(),
        "Ready to launch GUI"
    );

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(format!(
                "{} v{}",
                util::constants::APP_NAME,
                util::constants::APP_VERSION
            ))
            .with_inner_size([1100.0, 760.0])
            .with_min_inner_size([720.0, 460.0]),
        ..Default::default()
    };

    let result = eframe::run_native(
        util::constants::APP_NAME,
        native_options,
        Box::new(move |cc| {
            ui::theme::apply(&cc.egui_ctx, state.dark_mode, state.font_size);
            Ok(Box::new(gui::PlantToxApp::new(state)))
        }),
    );

    if let Err(e) = result {
        tracing::error!(error = %e, "Failed to launch GUI");
        eprintln!("Error: Failed to launch PlantTox GUI: {e}");
        std::process::exit(1);
    }
}

/// Load the startup dataset: the file at `path`, or the built-in one.
fn load_initial_dataset(state: &mut app::state::AppState, path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => {
            state.load_dataset(path)?;
        }
        None => state.load_builtin(),
    }
    Ok(())
}

/// Render the filtered table to `dest`, returning the number of plants written.
fn run_headless_export(state: &app::state::AppState, dest: &Path) -> Result<usize> {
    let file = std::fs::File::create(dest).map_err(|e| ExportError::Io {
        path: dest.to_path_buf(),
        source: e,
    })?;
    let written =
        core::export::export_html(&state.filterer, &state.animals, BufWriter::new(file), dest)?;
    Ok(written)
}
