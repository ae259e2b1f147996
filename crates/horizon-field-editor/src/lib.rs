//! Horizon Field Editor - in-place cell editors for data grids.
//!
//! Given a column's definition and a cell's current value, the editor picks
//! one editing strategy, renders a description of the widget bound to the
//! coerced value, and turns the widget's native events back into typed
//! values for the grid.
//!
//! # Architecture
//!
//! - **Dispatcher** ([`FieldKind::for_column`]): one strategy per column
//! - **Strategies** ([`strategy`]): text/numeric, currency, boolean, lookup,
//!   date, time, datetime
//! - **Coercion** ([`coercion`]): widget payloads to and from [`EditValue`]
//! - **Accessibility** ([`accessibility`]): labels derived from the title
//!
//! The editor is stateless. The grid owns the value and the error state and
//! passes them in on every render.
//!
//! # Example
//!
//! ```
//! use std::sync::{Arc, Mutex};
//! use horizon_field_editor::{
//!     ChangeCallback, ColumnDefinition, EditFieldProps, EditValue, FieldEditor, WidgetEvent,
//! };
//!
//! let reported = Arc::new(Mutex::new(Vec::new()));
//! let sink = reported.clone();
//!
//! let props = EditFieldProps::new(
//!     ColumnDefinition::new("Amount", "currency"),
//!     ChangeCallback::new(move |value| sink.lock().unwrap().push(value)),
//! );
//!
//! let widget = FieldEditor::new().render(&props);
//! assert_eq!(widget.accessible.name, "Amount");
//!
//! widget.emit(WidgetEvent::TextInput("0".into())).unwrap();
//! widget.emit(WidgetEvent::TextInput("abc".into())).unwrap();
//!
//! assert_eq!(
//!     *reported.lock().unwrap(),
//!     vec![EditValue::Number(0.0), EditValue::Empty]
//! );
//! ```

pub mod accessibility;
pub mod callback;
pub mod coercion;
pub mod column;
pub mod dispatcher;
pub mod error;
pub mod locale;
pub mod logging;
pub mod props;
pub mod settings;
pub mod strategy;
pub mod value;
pub mod widget;

pub use accessibility::{AccessibleLabel, AccessibleRole};
pub use callback::{Callback, ChangeCallback, KeyDownCallback, KeyPress, RowDataCallback};
pub use column::{ColumnDefinition, ColumnType, Lookup, LookupEntry};
pub use dispatcher::{render, FieldEditor, FieldKind};
pub use error::{Error, Result};
pub use locale::{Locale, PickerLocalization};
pub use props::{EditFieldProps, ErrorState, ForwardedProps};
pub use settings::EditorSettings;
pub use value::EditValue;
pub use widget::{
    Alignment, Checkbox, Control, EditWidget, FieldContainer, InputMode, Picker, Select,
    SelectOption, TemporalFormat, TextInput, WidgetEvent,
};
