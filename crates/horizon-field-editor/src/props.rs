//! Editor inputs and the props forwarded to widgets.
//!
//! The grid builds an [`EditFieldProps`] for every render. Only the subset
//! in [`ForwardedProps`] ever reaches a widget: the column definition, row
//! data, row-data callback and error state are editor-level concerns and
//! have no field there. Error state is re-applied on the wrapping
//! container by each strategy.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::callback::{ChangeCallback, KeyDownCallback, RowDataCallback};
use crate::column::ColumnDefinition;
use crate::locale::{Locale, PickerLocalization};
use crate::value::EditValue;

/// Validation feedback supplied by the grid. Rendered, never produced here.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ErrorState {
    /// Helper text shown beneath the control.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub helper_text: Option<String>,
    /// Whether the control is in error.
    pub error: bool,
}

impl ErrorState {
    /// An error with a message.
    pub fn error(helper_text: impl Into<String>) -> Self {
        Self {
            helper_text: Some(helper_text.into()),
            error: true,
        }
    }

    /// Helper text without an error flag.
    pub fn hint(helper_text: impl Into<String>) -> Self {
        Self {
            helper_text: Some(helper_text.into()),
            error: false,
        }
    }

    /// The helper text when it is set and non-empty.
    pub fn visible_helper_text(&self) -> Option<&str> {
        self.helper_text.as_deref().filter(|text| !text.is_empty())
    }
}

/// Props forwarded verbatim to the widget.
///
/// This is an allow-list: anything not named here stays with the editor.
#[derive(Debug, Clone, Default)]
pub struct ForwardedProps {
    /// Key handler for the widget's input.
    pub on_key_down: Option<KeyDownCallback>,
    /// Focus the widget when it mounts.
    pub auto_focus: bool,
    /// Render the widget disabled.
    pub disabled: bool,
    /// Opaque attributes for the widget layer (e.g. `id`, `name`).
    pub attributes: BTreeMap<String, String>,
}

/// Everything the grid supplies to the editor for one render.
#[derive(Debug, Clone)]
pub struct EditFieldProps {
    /// The column being edited.
    pub column_def: Arc<ColumnDefinition>,
    /// The cell's current value.
    pub value: EditValue,
    /// Receives the coerced value after every user-driven change.
    pub on_change: ChangeCallback,
    /// The whole row. Carried for the grid, never read by the editor.
    pub row_data: Option<serde_json::Value>,
    /// Row-level change callback. Carried for the grid, never invoked here.
    pub on_row_data_change: Option<RowDataCallback>,
    /// Validation feedback to display.
    pub error_state: ErrorState,
    /// Locale handed to date and time pickers.
    pub locale: Option<Locale>,
    /// Button labels handed to date and time pickers.
    pub picker_localization: Option<PickerLocalization>,
    /// Props forwarded to the widget.
    pub forwarded: ForwardedProps,
}

impl EditFieldProps {
    /// Creates props for a column with an empty value.
    ///
    /// `on_change` is required; there is no way to build props without it.
    pub fn new(column_def: impl Into<Arc<ColumnDefinition>>, on_change: ChangeCallback) -> Self {
        Self {
            column_def: column_def.into(),
            value: EditValue::Empty,
            on_change,
            row_data: None,
            on_row_data_change: None,
            error_state: ErrorState::default(),
            locale: None,
            picker_localization: None,
            forwarded: ForwardedProps::default(),
        }
    }

    /// Sets the current value using builder pattern.
    pub fn with_value(mut self, value: impl Into<EditValue>) -> Self {
        self.value = value.into();
        self
    }

    /// Sets the row data using builder pattern.
    pub fn with_row_data(mut self, row_data: serde_json::Value) -> Self {
        self.row_data = Some(row_data);
        self
    }

    /// Sets the row-data callback using builder pattern.
    pub fn with_on_row_data_change(mut self, callback: RowDataCallback) -> Self {
        self.on_row_data_change = Some(callback);
        self
    }

    /// Sets the error state using builder pattern.
    pub fn with_error_state(mut self, error_state: ErrorState) -> Self {
        self.error_state = error_state;
        self
    }

    /// Sets the picker locale using builder pattern.
    pub fn with_locale(mut self, locale: impl Into<Locale>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    /// Sets the picker labels using builder pattern.
    pub fn with_picker_localization(mut self, localization: PickerLocalization) -> Self {
        self.picker_localization = Some(localization);
        self
    }

    /// Sets the key handler using builder pattern.
    pub fn with_on_key_down(mut self, callback: KeyDownCallback) -> Self {
        self.forwarded.on_key_down = Some(callback);
        self
    }

    /// Sets auto-focus using builder pattern.
    pub fn with_auto_focus(mut self, auto_focus: bool) -> Self {
        self.forwarded.auto_focus = auto_focus;
        self
    }

    /// Sets the disabled flag using builder pattern.
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.forwarded.disabled = disabled;
        self
    }

    /// Adds an opaque widget attribute using builder pattern.
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.forwarded.attributes.insert(name.into(), value.into());
        self
    }

    /// The props a widget receives.
    pub fn widget_props(&self) -> ForwardedProps {
        self.forwarded.clone()
    }
}
