//! Tracing targets for the field editor.
//!
//! The editor emits `tracing` events but never installs a subscriber. To see
//! them, install one in the host application:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("horizon_field_editor::coercion=debug")
//!     .init();
//! ```

/// Span names used by the field editor.
pub mod span_names {
    /// A single render of the field editor.
    pub const RENDER: &str = "horizon_field_editor::render";
    /// Routing of a widget event to `on_change`.
    pub const EMIT: &str = "horizon_field_editor::emit";
}

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Crate-wide target.
    pub const EDITOR: &str = "horizon_field_editor";
    /// Strategy selection.
    pub const DISPATCH: &str = "horizon_field_editor::dispatch";
    /// Value normalization in either direction.
    pub const COERCION: &str = "horizon_field_editor::coercion";
    /// Widget events delivered to a rendered editor.
    pub const EVENT: &str = "horizon_field_editor::event";
    /// Settings and column definition loading.
    pub const CONFIG: &str = "horizon_field_editor::config";
}
