//! # DrawerZen
//!
//! Grid layout engine for drawer organiser bins.
//!
//! ## Architecture
//!
//! DrawerZen is organized as a workspace with multiple crates:
//!
//! 1. **drawerzen-core** - Data model, coordinate system, units, configuration, errors
//! 2. **drawerzen-layout** - Validator, bin store, gestures, packing engine, layout state
//! 3. **drawerzen** - Layout file handling and the command-line tool
//!
//! ## Features
//!
//! - **Grid Placement**: bins snap to a 21mm grid and never overlap
//! - **Interactive Gestures**: draw-to-create and drag-to-move with live previews
//! - **Auto-Sort**: repack placed bins largest first
//! - **Gap Fill**: generate standard bins into the free space

pub mod layout_file;

pub use drawerzen_core::{
    Bin, BinConstraints, BinId, BinSize, CatalogEntry, ConfigError, Drawer, EngineConfig,
    ErrorKind, GridSpec, LayoutError, MeasurementSystem,
};
pub use drawerzen_layout::{
    auto_sort, generate_bins, BinUpdate, DrawOutcome, DropOutcome, FillReport, LayoutSnapshot,
    LayoutState, PreviewRect, SortResult, UndoHook,
};
pub use layout_file::{CheckReport, LayoutFile, RejectedBin};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging
///
/// Sets up structured logging on stderr with:
/// - RUST_LOG environment variable support, `info` when unset
/// - human readable output, or one JSON object per event when `json` is set
pub fn init_logging(json: bool) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let env_filter = log_filter(rust_log.as_deref());

    if json {
        let fmt_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .json();
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()?;
    } else {
        let fmt_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_level(true)
            .with_line_number(true);
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()?;
    }

    Ok(())
}

/// Filter for `RUST_LOG`, falling back to `info` when it is unset, empty or invalid.
fn log_filter(rust_log: Option<&str>) -> tracing_subscriber::EnvFilter {
    use tracing_subscriber::EnvFilter;

    rust_log
        .filter(|directives| !directives.trim().is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}
