//! # DraftKit
//!
//! A headless viewport engine for a 2D line-drawing workspace:
//! - Pan, anchor-preserving zoom and an adaptive grid
//! - Line drawing with point reuse and proximity snapping
//! - Window and crossing rubber-band selection
//! - Render-ready view models for any front end
//!
//! ## Architecture
//!
//! DraftKit is organized as a workspace with multiple crates:
//!
//! 1. **draftkit-core** - Geometry, entity types, store intents, errors
//! 2. **draftkit-settings** - Workspace configuration, load/save/validate
//! 3. **draftkit-workspace** - Viewport state machine, derived view, reference store
//! 4. **draftkit** - Event replay and the command-line host

pub mod replay;

pub use draftkit_core::{
    Error, IdSource, IntentDispatcher, Point, PointEntity, PointRef, PositionedRect, Rect, Result,
    Segment, SegmentEntity, SegmentState, SequentialIds, StoreError, StoreIntent, UuidIds, Vector,
};
pub use draftkit_settings::{SettingsError, WorkspaceConfig};
pub use draftkit_workspace::{
    Command, MemoryStore, SegmentViewModel, Workspace, WorkspaceEvent, WorkspaceState,
    WorkspaceView,
};
pub use replay::{load_script, parse_script, Replay};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Log output style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable, multi-line
    #[default]
    Pretty,
    /// One JSON object per event
    Json,
}

/// Level used when `RUST_LOG` is unset or unparsable.
const DEFAULT_LOG_FILTER: &str = "warn";

/// Builds the log filter from a `RUST_LOG`-style directive string.
fn log_filter(directives: Option<&str>) -> tracing_subscriber::EnvFilter {
    use tracing_subscriber::EnvFilter;

    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Initialize logging
///
/// Sets up structured logging with:
/// - Output on stderr, keeping stdout for results
/// - RUST_LOG environment variable support, `warn` otherwise
/// - Pretty or JSON formatting
pub fn init_logging(format: LogFormat) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let env_filter = log_filter(directives.as_deref());

    match format {
        LogFormat::Pretty => {
            let fmt_layer = fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_level(true)
                .with_line_number(true)
                .pretty();
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt_layer)
                .try_init()?;
        }
        LogFormat::Json => {
            let fmt_layer = fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .json();
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt_layer)
                .try_init()?;
        }
    }

    Ok(())
}
