//! Rendered widget descriptions.
//!
//! Rendering produces an [`EditWidget`]: a plain description of the control
//! to show, bound to the coerced value and to the grid's callbacks. The
//! widget layer draws it and feeds native events back through
//! [`EditWidget::emit`].

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::accessibility::AccessibleLabel;
use crate::callback::{ChangeCallback, KeyPress};
use crate::dispatcher::{self, FieldKind};
use crate::error::Result;
use crate::locale::{Locale, PickerLocalization};
use crate::logging::{span_names, targets};
use crate::props::{ErrorState, ForwardedProps};
use crate::value::EditValue;

/// Horizontal alignment of an input's text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    /// Align to the left edge.
    #[default]
    Left,
    /// Align to the right edge.
    Right,
}

/// Virtual keyboard / input filtering hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Free text.
    #[default]
    Text,
    /// Numbers only.
    Numeric,
}

/// When the container renders its helper-text line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HelperTextPolicy {
    /// Always, even when empty, so the row height does not jump.
    Always,
    /// Only when there is non-empty helper text.
    WhenPresent,
}

/// The error-aware container wrapped around every control.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldContainer {
    /// Render the container in its error style.
    pub error: bool,
    /// The helper-text line, if one is rendered.
    pub helper_text: Option<String>,
}

impl FieldContainer {
    /// Applies the grid's error state under the given helper-text policy.
    pub fn from_error_state(state: &ErrorState, policy: HelperTextPolicy) -> Self {
        let helper_text = match policy {
            HelperTextPolicy::Always => Some(state.helper_text.clone().unwrap_or_default()),
            HelperTextPolicy::WhenPresent => state.visible_helper_text().map(str::to_string),
        };
        Self {
            error: state.error,
            helper_text,
        }
    }
}

/// A single-line text or number input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextInput {
    /// The text shown in the input.
    pub value: String,
    /// Placeholder shown while empty.
    pub placeholder: String,
    /// Input filtering hint.
    pub input_mode: InputMode,
    /// Text alignment.
    pub alignment: Alignment,
    /// Stretch to the cell width.
    pub full_width: bool,
}

/// A checkbox.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checkbox {
    /// Whether the box is checked.
    pub checked: bool,
    /// Visible label next to the box.
    pub label: String,
}

/// One option of a dropdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    /// The key reported on selection.
    pub key: String,
    /// The text shown to the user.
    pub label: String,
}

/// A single-choice dropdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Select {
    /// The selected key, or `None` for no selection.
    pub selected: Option<String>,
    /// Options in presentation order.
    pub options: Vec<SelectOption>,
}

impl Select {
    /// Iterates over the option keys.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.options.iter().map(|o| o.key.as_str())
    }

    /// Returns `true` if `key` is one of the options.
    pub fn contains_key(&self, key: &str) -> bool {
        self.options.iter().any(|o| o.key == key)
    }

    /// The label of the selected option, if the selection matches one.
    pub fn selected_label(&self) -> Option<&str> {
        let selected = self.selected.as_deref()?;
        self.options
            .iter()
            .find(|o| o.key == selected)
            .map(|o| o.label.as_str())
    }
}

/// Display pattern of a picker.
///
/// Patterns use the picker's `dd`/`MM`/`yyyy`/`HH`/`mm`/`ss` tokens. They
/// are display-only; nothing in the editor parses with them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemporalFormat {
    /// `dd.MM.yyyy`
    Date,
    /// `HH:mm:ss`
    Time,
    /// `dd.MM.yyyy HH:mm:ss`
    DateTime,
}

impl TemporalFormat {
    /// The pattern handed to the picker.
    pub fn pattern(&self) -> &'static str {
        match self {
            TemporalFormat::Date => "dd.MM.yyyy",
            TemporalFormat::Time => "HH:mm:ss",
            TemporalFormat::DateTime => "dd.MM.yyyy HH:mm:ss",
        }
    }

    /// The same pattern in `chrono` strftime syntax.
    pub fn chrono_pattern(&self) -> &'static str {
        match self {
            TemporalFormat::Date => "%d.%m.%Y",
            TemporalFormat::Time => "%H:%M:%S",
            TemporalFormat::DateTime => "%d.%m.%Y %H:%M:%S",
        }
    }

    /// Renders a value with this pattern, for widget layers that draw the
    /// text themselves. Returns `None` for values of another shape.
    pub fn display(&self, value: &EditValue) -> Option<String> {
        let pattern = self.chrono_pattern();
        match (self, value) {
            (TemporalFormat::Date, EditValue::Date(d)) => Some(d.format(pattern).to_string()),
            (TemporalFormat::Time, EditValue::Time(t)) => Some(t.format(pattern).to_string()),
            (TemporalFormat::DateTime, EditValue::DateTime(dt)) => {
                Some(dt.format(pattern).to_string())
            }
            _ => None,
        }
    }
}

/// A date, time or datetime picker.
#[derive(Debug, Clone, PartialEq)]
pub struct Picker {
    /// Display pattern.
    pub format: TemporalFormat,
    /// The selected value, or `None` for no selection.
    pub selection: Option<EditValue>,
    /// Whether the picker offers a clear action.
    pub clearable: bool,
    /// Locale handed to the picker's date handling.
    pub locale: Option<Locale>,
    /// Labels for the picker's buttons.
    pub localization: Option<PickerLocalization>,
}

impl Picker {
    /// The selection rendered with the display pattern.
    pub fn display_text(&self) -> Option<String> {
        self.selection.as_ref().and_then(|v| self.format.display(v))
    }
}

/// The control at the heart of a rendered editor.
#[derive(Debug, Clone, PartialEq)]
pub enum Control {
    /// Text, numeric and currency inputs.
    TextInput(TextInput),
    /// Boolean toggle.
    Checkbox(Checkbox),
    /// Lookup dropdown.
    Select(Select),
    /// Date, time and datetime pickers.
    Picker(Picker),
}

/// A native event reported by the widget layer.
#[derive(Debug, Clone, PartialEq)]
pub enum WidgetEvent {
    /// The input's text changed.
    TextInput(String),
    /// The checkbox was toggled to the given state.
    Toggled(bool),
    /// A dropdown option was chosen.
    Selected(String),
    /// A date was picked.
    DatePicked(NaiveDate),
    /// A time was picked.
    TimePicked(NaiveTime),
    /// A date and time were picked.
    DateTimePicked(NaiveDateTime),
    /// The picker was cleared.
    Cleared,
}

impl WidgetEvent {
    /// Short event name, for logs and errors.
    pub fn name(&self) -> &'static str {
        match self {
            WidgetEvent::TextInput(_) => "text-input",
            WidgetEvent::Toggled(_) => "toggled",
            WidgetEvent::Selected(_) => "selected",
            WidgetEvent::DatePicked(_) => "date-picked",
            WidgetEvent::TimePicked(_) => "time-picked",
            WidgetEvent::DateTimePicked(_) => "datetime-picked",
            WidgetEvent::Cleared => "cleared",
        }
    }
}

/// A rendered cell editor.
#[derive(Debug, Clone)]
pub struct EditWidget {
    /// The strategy that produced this widget.
    pub kind: FieldKind,
    /// Accessible name and role.
    pub accessible: AccessibleLabel,
    /// Error-aware container.
    pub container: FieldContainer,
    /// The control itself.
    pub control: Control,
    /// Props forwarded from the grid.
    pub props: ForwardedProps,
    on_change: ChangeCallback,
}

impl EditWidget {
    pub(crate) fn new(
        kind: FieldKind,
        accessible: AccessibleLabel,
        container: FieldContainer,
        control: Control,
        props: ForwardedProps,
        on_change: ChangeCallback,
    ) -> Self {
        Self {
            kind,
            accessible,
            container,
            control,
            props,
            on_change,
        }
    }

    /// Feeds a native widget event through coercion to `on_change`.
    ///
    /// On success `on_change` has been called exactly once and the reported
    /// value is returned. Events the strategy cannot interpret are rejected
    /// without calling `on_change`.
    pub fn emit(&self, event: WidgetEvent) -> Result<EditValue> {
        let _span = tracing::trace_span!(span_names::EMIT, kind = %self.kind).entered();
        let event_name = event.name();

        match dispatcher::coerce_event(self.kind, &self.control, event) {
            Ok(value) => {
                tracing::trace!(
                    target: targets::EVENT,
                    event = event_name,
                    value_type = value.type_name(),
                    "reporting change"
                );
                self.on_change.call(value.clone());
                Ok(value)
            }
            Err(err) => {
                tracing::warn!(target: targets::EVENT, event = event_name, "rejected widget event: {}", err);
                Err(err)
            }
        }
    }

    /// Forwards a key press to the grid's key handler.
    ///
    /// Returns `true` if a handler was installed.
    pub fn key_down(&self, key: KeyPress) -> bool {
        match &self.props.on_key_down {
            Some(handler) => {
                handler.call(key);
                true
            }
            None => false,
        }
    }

    /// The text input, for text, numeric and currency editors.
    pub fn text_input(&self) -> Option<&TextInput> {
        match &self.control {
            Control::TextInput(input) => Some(input),
            _ => None,
        }
    }

    /// The checkbox, for boolean editors.
    pub fn checkbox(&self) -> Option<&Checkbox> {
        match &self.control {
            Control::Checkbox(checkbox) => Some(checkbox),
            _ => None,
        }
    }

    /// The dropdown, for lookup editors.
    pub fn select(&self) -> Option<&Select> {
        match &self.control {
            Control::Select(select) => Some(select),
            _ => None,
        }
    }

    /// The picker, for date, time and datetime editors.
    pub fn picker(&self) -> Option<&Picker> {
        match &self.control {
            Control::Picker(picker) => Some(picker),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_container_always_renders_helper_line() {
        let container =
            FieldContainer::from_error_state(&ErrorState::default(), HelperTextPolicy::Always);
        assert_eq!(container.helper_text.as_deref(), Some(""));
        assert!(!container.error);
    }

    #[test]
    fn test_container_when_present() {
        let empty =
            FieldContainer::from_error_state(&ErrorState::hint(""), HelperTextPolicy::WhenPresent);
        assert_eq!(empty.helper_text, None);

        let error = FieldContainer::from_error_state(
            &ErrorState::error("required"),
            HelperTextPolicy::WhenPresent,
        );
        assert_eq!(error.helper_text.as_deref(), Some("required"));
        assert!(error.error);
    }

    #[test]
    fn test_temporal_patterns() {
        assert_eq!(TemporalFormat::Date.pattern(), "dd.MM.yyyy");
        assert_eq!(TemporalFormat::Time.pattern(), "HH:mm:ss");
        assert_eq!(TemporalFormat::DateTime.pattern(), "dd.MM.yyyy HH:mm:ss");
    }

    #[test]
    fn test_temporal_display() {
        let dt = NaiveDate::from_ymd_opt(2025, 1, 5)
            .unwrap()
            .and_hms_opt(9, 3, 7)
            .unwrap();
        assert_eq!(
            TemporalFormat::DateTime.display(&EditValue::from(dt)).as_deref(),
            Some("05.01.2025 09:03:07")
        );
        assert_eq!(
            TemporalFormat::Date.display(&EditValue::from(dt.date())).as_deref(),
            Some("05.01.2025")
        );
        assert_eq!(
            TemporalFormat::Time.display(&EditValue::from(dt.time())).as_deref(),
            Some("09:03:07")
        );
        assert_eq!(TemporalFormat::Date.display(&EditValue::from("x")), None);
    }

    #[test]
    fn test_select_selected_label() {
        let select = Select {
            selected: Some("b".into()),
            options: vec![
                SelectOption { key: "a".into(), label: "Alpha".into() },
                SelectOption { key: "b".into(), label: "Beta".into() },
            ],
        };
        assert_eq!(select.selected_label(), Some("Beta"));
        assert!(select.contains_key("a"));
        assert!(!select.contains_key("Alpha"));
        assert_eq!(select.keys().collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn test_event_names() {
        assert_eq!(WidgetEvent::Cleared.name(), "cleared");
        assert_eq!(WidgetEvent::Toggled(true).name(), "toggled");
    }
}
