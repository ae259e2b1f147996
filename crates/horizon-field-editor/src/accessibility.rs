//! Accessible names and roles for editor widgets.

use crate::column::ColumnDefinition;
use crate::dispatcher::FieldKind;

/// Suffix appended to picker labels to hint at keyboard activation.
pub const PICKER_HINT: &str = ": press space to edit";

/// The accessibility role of an editor widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AccessibleRole {
    /// A single-line text input field.
    #[default]
    TextInput,
    /// A numeric input.
    SpinBox,
    /// A checkbox that can be checked or unchecked.
    CheckBox,
    /// A combo box / dropdown.
    ComboBox,
    /// A date input with a calendar popup.
    DateEdit,
    /// A time-of-day input.
    TimeEdit,
    /// A combined date and time input.
    DateTimeEdit,
}

/// Accessible name plus role for a rendered editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessibleLabel {
    /// The role announced by assistive technology.
    pub role: AccessibleRole,
    /// The accessible name.
    pub name: String,
}

/// Builds the accessible name for a column edited with `kind`.
///
/// The name is the column title. Pickers append [`PICKER_HINT`].
pub fn accessible_name(column: &ColumnDefinition, kind: FieldKind) -> String {
    if kind.is_temporal() {
        format!("{}{}", column.title, PICKER_HINT)
    } else {
        column.title.clone()
    }
}

/// The role for a column edited with `kind`.
pub fn accessible_role(column: &ColumnDefinition, kind: FieldKind) -> AccessibleRole {
    match kind {
        FieldKind::Lookup => AccessibleRole::ComboBox,
        FieldKind::Boolean => AccessibleRole::CheckBox,
        FieldKind::Date => AccessibleRole::DateEdit,
        FieldKind::Time => AccessibleRole::TimeEdit,
        FieldKind::DateTime => AccessibleRole::DateTimeEdit,
        FieldKind::Currency => AccessibleRole::SpinBox,
        FieldKind::Text if column.is_numeric() => AccessibleRole::SpinBox,
        FieldKind::Text => AccessibleRole::TextInput,
    }
}

/// Builds the full accessible label for a column edited with `kind`.
pub fn accessible_label(column: &ColumnDefinition, kind: FieldKind) -> AccessibleLabel {
    AccessibleLabel {
        role: accessible_role(column, kind),
        name: accessible_name(column, kind),
    }
}
