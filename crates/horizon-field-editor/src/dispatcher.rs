//! Strategy selection and the editor entry point.
//!
//! [`FieldKind::for_column`] picks exactly one strategy per column, first
//! match wins:
//!
//! 1. a lookup table → [`FieldKind::Lookup`]
//! 2. `boolean` → [`FieldKind::Boolean`]
//! 3. `date` → [`FieldKind::Date`]
//! 4. `time` → [`FieldKind::Time`]
//! 5. `datetime` → [`FieldKind::DateTime`]
//! 6. `currency` → [`FieldKind::Currency`]
//! 7. anything else → [`FieldKind::Text`]
//!
//! The last rule is lenient on purpose: `numeric` and unknown type tags
//! alike are edited as text, and nothing here rejects a column.
//!
//! # Example
//!
//! ```
//! use horizon_field_editor::{
//!     ChangeCallback, ColumnDefinition, EditFieldProps, FieldEditor, FieldKind, Lookup,
//! };
//!
//! let column = ColumnDefinition::new("Status", "boolean")
//!     .with_lookup(Lookup::new().with_entry("y", "Yes").with_entry("n", "No"));
//!
//! let props = EditFieldProps::new(column, ChangeCallback::new(|value| println!("{value:?}")));
//! let widget = FieldEditor::new().render(&props);
//!
//! assert_eq!(widget.kind, FieldKind::Lookup);
//! ```

use std::fmt;

use crate::column::{ColumnDefinition, ColumnType};
use crate::error::{Error, Result};
use crate::logging::{span_names, targets};
use crate::props::EditFieldProps;
use crate::settings::EditorSettings;
use crate::strategy::{boolean, lookup, temporal, text};
use crate::value::EditValue;
use crate::widget::{Control, EditWidget, WidgetEvent};

/// The editing strategy chosen for a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// Plain text, including numeric columns.
    Text,
    /// Monetary amount.
    Currency,
    /// Checkbox.
    Boolean,
    /// Single-choice dropdown.
    Lookup,
    /// Date picker.
    Date,
    /// Time picker.
    Time,
    /// Date and time picker.
    DateTime,
}

impl FieldKind {
    /// Selects the strategy for a column.
    pub fn for_column(column: &ColumnDefinition) -> Self {
        let kind = if column.lookup.is_some() {
            FieldKind::Lookup
        } else {
            match &column.column_type {
                ColumnType::Boolean => FieldKind::Boolean,
                ColumnType::Date => FieldKind::Date,
                ColumnType::Time => FieldKind::Time,
                ColumnType::DateTime => FieldKind::DateTime,
                ColumnType::Currency => FieldKind::Currency,
                ColumnType::Text | ColumnType::Numeric | ColumnType::Other(_) => FieldKind::Text,
            }
        };

        tracing::trace!(
            target: targets::DISPATCH,
            column_type = %column.column_type,
            has_lookup = column.lookup.is_some(),
            kind = %kind,
            "strategy selected"
        );
        kind
    }

    /// Returns `true` for the picker strategies.
    pub fn is_temporal(&self) -> bool {
        matches!(self, FieldKind::Date | FieldKind::Time | FieldKind::DateTime)
    }

    /// Lowercase name of the strategy.
    pub fn name(&self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Currency => "currency",
            FieldKind::Boolean => "boolean",
            FieldKind::Lookup => "lookup",
            FieldKind::Date => "date",
            FieldKind::Time => "time",
            FieldKind::DateTime => "datetime",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Routes a widget event to the coercion rules of the strategy that
/// rendered the control.
pub(crate) fn coerce_event(kind: FieldKind, control: &Control, event: WidgetEvent) -> Result<EditValue> {
    match (kind, control) {
        (FieldKind::Text, Control::TextInput(input)) => text::coerce_text(input, event),
        (FieldKind::Currency, Control::TextInput(_)) => text::coerce_currency(event),
        (FieldKind::Boolean, Control::Checkbox(_)) => boolean::coerce(event),
        (FieldKind::Lookup, Control::Select(select)) => lookup::coerce(select, event),
        (FieldKind::Date | FieldKind::Time | FieldKind::DateTime, Control::Picker(picker)) => {
            temporal::coerce(picker, kind, event)
        }
        _ => Err(Error::event_mismatch(kind, event.name())),
    }
}

/// Renders cell editors.
///
/// The editor holds no per-cell state. Its only configuration is the
/// grid-wide [`EditorSettings`], which fill in a locale and picker labels
/// when the props leave them unset.
#[derive(Debug, Clone, Default)]
pub struct FieldEditor {
    settings: EditorSettings,
}

impl FieldEditor {
    /// Creates an editor with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an editor with the given settings.
    pub fn with_settings(settings: EditorSettings) -> Self {
        Self { settings }
    }

    /// The editor's settings.
    pub fn settings(&self) -> &EditorSettings {
        &self.settings
    }

    /// Renders the editor for one cell.
    ///
    /// Identical props always produce an identical widget.
    pub fn render(&self, props: &EditFieldProps) -> EditWidget {
        let kind = FieldKind::for_column(&props.column_def);
        let _span = tracing::trace_span!(span_names::RENDER, kind = %kind).entered();

        if kind.is_temporal() && self.settings.has_picker_defaults() {
            render_kind(kind, &self.settings.apply(props.clone()))
        } else {
            render_kind(kind, props)
        }
    }
}

/// Renders one cell with default settings.
pub fn render(props: &EditFieldProps) -> EditWidget {
    render_kind(FieldKind::for_column(&props.column_def), props)
}

fn render_kind(kind: FieldKind, props: &EditFieldProps) -> EditWidget {
    match kind {
        FieldKind::Lookup => lookup::render(props),
        FieldKind::Boolean => boolean::render(props),
        FieldKind::Date => temporal::render_date(props),
        FieldKind::Time => temporal::render_time(props),
        FieldKind::DateTime => temporal::render_datetime(props),
        FieldKind::Currency => text::render_currency(props),
        FieldKind::Text => text::render_text(props),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::callback::ChangeCallback;
    use crate::column::Lookup;
    use crate::locale::Locale;

    fn kind_of(column_type: &str) -> FieldKind {
        FieldKind::for_column(&ColumnDefinition::new("Col", column_type))
    }

    #[test]
    fn test_type_precedence() {
        assert_eq!(kind_of("boolean"), FieldKind::Boolean);
        assert_eq!(kind_of("date"), FieldKind::Date);
        assert_eq!(kind_of("time"), FieldKind::Time);
        assert_eq!(kind_of("datetime"), FieldKind::DateTime);
        assert_eq!(kind_of("currency"), FieldKind::Currency);
        assert_eq!(kind_of("numeric"), FieldKind::Text);
        assert_eq!(kind_of("text"), FieldKind::Text);
    }

    #[test]
    fn test_unknown_type_falls_back_to_text() {
        assert_eq!(kind_of("rating"), FieldKind::Text);
        assert_eq!(kind_of(""), FieldKind::Text);
    }

    #[test]
    fn test_lookup_wins_over_every_type() {
        let lookup = Lookup::new().with_entry("a", "A");
        for column_type in ["boolean", "date", "time", "datetime", "currency", "numeric"] {
            let column = ColumnDefinition::new("Col", column_type).with_lookup(lookup.clone());
            assert_eq!(FieldKind::for_column(&column), FieldKind::Lookup);
        }
    }

    #[test]
    fn test_empty_lookup_still_wins() {
        let column = ColumnDefinition::new("Col", "boolean").with_lookup(Lookup::new());
        assert_eq!(FieldKind::for_column(&column), FieldKind::Lookup);
    }

    #[test]
    fn test_mismatched_control_is_rejected() {
        let props = EditFieldProps::new(ColumnDefinition::new("Col", "boolean"), ChangeCallback::new(|_| {}));
        let widget = render(&props);
        assert!(coerce_event(FieldKind::Date, &widget.control, WidgetEvent::Cleared).is_err());
    }

    #[test]
    fn test_settings_fill_picker_locale() {
        let editor = FieldEditor::with_settings(EditorSettings {
            locale: Some(Locale::parse("tr-TR")),
            picker_localization: None,
        });
        let props = EditFieldProps::new(ColumnDefinition::new("Col", "date"), ChangeCallback::new(|_| {}));

        let widget = editor.render(&props);
        assert_eq!(
            widget.picker().and_then(|p| p.locale.as_ref()).map(|l| l.identifier.as_str()),
            Some("tr-TR")
        );

        let widget = editor.render(&props.clone().with_locale("fr-FR"));
        assert_eq!(
            widget.picker().and_then(|p| p.locale.as_ref()).map(|l| l.identifier.as_str()),
            Some("fr-FR")
        );
    }

    #[test]
    fn test_render_is_idempotent() {
        let props = EditFieldProps::new(ColumnDefinition::new("Qty", "numeric"), ChangeCallback::new(|_| {}))
            .with_value(7);
        let first = render(&props);
        let second = render(&props);
        assert_eq!(first.control, second.control);
        assert_eq!(first.container, second.container);
        assert_eq!(first.accessible, second.accessible);
    }
}
