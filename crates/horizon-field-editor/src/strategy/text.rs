//! Text, numeric and currency inputs.
//!
//! Numeric columns are a specialization of the text strategy: same control,
//! right-aligned, numeric input mode, and a numeric outbound value.
//! Currency has its own strategy because it normalizes failed parses to
//! `Empty` where numeric forwards `NaN`.

use crate::accessibility;
use crate::coercion;
use crate::dispatcher::FieldKind;
use crate::error::{Error, Result};
use crate::props::EditFieldProps;
use crate::value::EditValue;
use crate::widget::{
    Alignment, Control, EditWidget, FieldContainer, HelperTextPolicy, InputMode, TextInput,
    WidgetEvent,
};

/// Renders a text input, numeric when the column type is numeric.
pub fn render_text(props: &EditFieldProps) -> EditWidget {
    let column = &props.column_def;
    let numeric = column.is_numeric();

    let input = TextInput {
        value: coercion::input_text(&props.value),
        placeholder: column.placeholder().to_string(),
        input_mode: if numeric {
            InputMode::Numeric
        } else {
            InputMode::Text
        },
        alignment: if numeric {
            Alignment::Right
        } else {
            Alignment::Left
        },
        full_width: true,
    };

    EditWidget::new(
        FieldKind::Text,
        accessibility::accessible_label(column, FieldKind::Text),
        FieldContainer::from_error_state(&props.error_state, HelperTextPolicy::WhenPresent),
        Control::TextInput(input),
        props.widget_props(),
        props.on_change.clone(),
    )
}

/// Renders a right-aligned currency input.
///
/// `on_key_down` and `auto_focus` are part of [`ForwardedProps`], so the
/// grid's keyboard handling keeps working inside the currency cell.
///
/// [`ForwardedProps`]: crate::props::ForwardedProps
pub fn render_currency(props: &EditFieldProps) -> EditWidget {
    let column = &props.column_def;

    let input = TextInput {
        value: coercion::input_text(&props.value),
        placeholder: column.placeholder().to_string(),
        input_mode: InputMode::Numeric,
        alignment: Alignment::Right,
        full_width: false,
    };

    EditWidget::new(
        FieldKind::Currency,
        accessibility::accessible_label(column, FieldKind::Currency),
        FieldContainer::from_error_state(&props.error_state, HelperTextPolicy::WhenPresent),
        Control::TextInput(input),
        props.widget_props(),
        props.on_change.clone(),
    )
}

/// Interprets an event delivered to a text or numeric input.
pub(crate) fn coerce_text(input: &TextInput, event: WidgetEvent) -> Result<EditValue> {
    match event {
        WidgetEvent::TextInput(text) => Ok(match input.input_mode {
            InputMode::Numeric => coercion::numeric_change(&text),
            InputMode::Text => coercion::text_change(&text),
        }),
        other => Err(Error::event_mismatch(FieldKind::Text, other.name())),
    }
}

/// Interprets an event delivered to a currency input.
pub(crate) fn coerce_currency(event: WidgetEvent) -> Result<EditValue> {
    match event {
        WidgetEvent::TextInput(text) => Ok(coercion::currency_change(&text)),
        other => Err(Error::event_mismatch(FieldKind::Currency, other.name())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::callback::{ChangeCallback, KeyDownCallback};
    use crate::column::ColumnDefinition;
    use crate::props::ErrorState;

    fn props(column: ColumnDefinition) -> EditFieldProps {
        EditFieldProps::new(column, ChangeCallback::new(|_| {}))
    }

    #[test]
    fn test_text_empty_value_renders_empty_string() {
        let widget = render_text(&props(ColumnDefinition::new("Name", "text")));
        let input = widget.text_input().unwrap();
        assert_eq!(input.value, "");
        assert_eq!(input.placeholder, "Name");
        assert_eq!(input.input_mode, InputMode::Text);
        assert_eq!(input.alignment, Alignment::Left);
        assert!(input.full_width);
    }

    #[test]
    fn test_numeric_column_specializes_text() {
        let widget = render_text(&props(ColumnDefinition::new("Qty", "numeric")).with_value(3));
        let input = widget.text_input().unwrap();
        assert_eq!(input.value, "3");
        assert_eq!(input.input_mode, InputMode::Numeric);
        assert_eq!(input.alignment, Alignment::Right);
        assert_eq!(widget.kind, FieldKind::Text);
    }

    #[test]
    fn test_numeric_zero_renders_zero() {
        let widget = render_text(&props(ColumnDefinition::new("Qty", "numeric")).with_value(0));
        assert_eq!(widget.text_input().unwrap().value, "0");
    }

    #[test]
    fn test_text_coercion() {
        let text = render_text(&props(ColumnDefinition::new("Name", "text")));
        let input = text.text_input().unwrap();
        assert_eq!(
            coerce_text(input, WidgetEvent::TextInput("42".into())).unwrap(),
            EditValue::from("42")
        );

        let numeric = render_text(&props(ColumnDefinition::new("Qty", "numeric")));
        let input = numeric.text_input().unwrap();
        assert_eq!(
            coerce_text(input, WidgetEvent::TextInput("42".into())).unwrap(),
            EditValue::from(42)
        );
        assert!(coerce_text(input, WidgetEvent::Toggled(true)).is_err());
    }

    #[test]
    fn test_currency_render() {
        let column = ColumnDefinition::new("Price", "currency").with_edit_placeholder("0.00");
        let widget = render_currency(
            &props(column)
                .with_auto_focus(true)
                .with_on_key_down(KeyDownCallback::new(|_| {}))
                .with_error_state(ErrorState::error("negative")),
        );

        let input = widget.text_input().unwrap();
        assert_eq!(input.placeholder, "0.00");
        assert_eq!(input.alignment, Alignment::Right);
        assert_eq!(input.input_mode, InputMode::Numeric);
        assert!(widget.props.auto_focus);
        assert!(widget.props.on_key_down.is_some());
        assert!(widget.container.error);
        assert_eq!(widget.container.helper_text.as_deref(), Some("negative"));
    }

    #[test]
    fn test_currency_coercion() {
        assert_eq!(
            coerce_currency(WidgetEvent::TextInput("0".into())).unwrap(),
            EditValue::Number(0.0)
        );
        assert_eq!(
            coerce_currency(WidgetEvent::TextInput("abc".into())).unwrap(),
            EditValue::Empty
        );
        assert!(coerce_currency(WidgetEvent::Cleared).is_err());
    }
}
