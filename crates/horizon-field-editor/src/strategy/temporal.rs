//! Date, time and datetime pickers.
//!
//! All three share one rendering path and differ only in display pattern
//! and in which picked payload they accept. Every picker is clearable and
//! receives the active locale and button labels unchanged.

use crate::accessibility;
use crate::coercion;
use crate::dispatcher::FieldKind;
use crate::error::{Error, Result};
use crate::props::EditFieldProps;
use crate::value::EditValue;
use crate::widget::{
    Control, EditWidget, FieldContainer, HelperTextPolicy, Picker, TemporalFormat, WidgetEvent,
};

/// Renders a `dd.MM.yyyy` date picker.
pub fn render_date(props: &EditFieldProps) -> EditWidget {
    render(props, FieldKind::Date, TemporalFormat::Date)
}

/// Renders an `HH:mm:ss` time picker.
pub fn render_time(props: &EditFieldProps) -> EditWidget {
    render(props, FieldKind::Time, TemporalFormat::Time)
}

/// Renders a `dd.MM.yyyy HH:mm:ss` datetime picker.
pub fn render_datetime(props: &EditFieldProps) -> EditWidget {
    render(props, FieldKind::DateTime, TemporalFormat::DateTime)
}

fn render(props: &EditFieldProps, kind: FieldKind, format: TemporalFormat) -> EditWidget {
    let picker = Picker {
        format,
        selection: coercion::picker_selection(&props.value),
        clearable: true,
        locale: props.locale.clone(),
        localization: props.picker_localization.clone(),
    };

    EditWidget::new(
        kind,
        accessibility::accessible_label(&props.column_def, kind),
        FieldContainer::from_error_state(&props.error_state, HelperTextPolicy::WhenPresent),
        Control::Picker(picker),
        props.widget_props(),
        props.on_change.clone(),
    )
}

/// Interprets an event delivered to a picker.
pub(crate) fn coerce(picker: &Picker, kind: FieldKind, event: WidgetEvent) -> Result<EditValue> {
    match (picker.format, event) {
        (_, WidgetEvent::Cleared) if picker.clearable => Ok(EditValue::Empty),
        (TemporalFormat::Date, WidgetEvent::DatePicked(date)) => {
            Ok(coercion::picker_change(Some(date)))
        }
        (TemporalFormat::Time, WidgetEvent::TimePicked(time)) => {
            Ok(coercion::picker_change(Some(time)))
        }
        (TemporalFormat::DateTime, WidgetEvent::DateTimePicked(datetime)) => {
            Ok(coercion::picker_change(Some(datetime)))
        }
        (_, other) => Err(Error::event_mismatch(kind, other.name())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::callback::ChangeCallback;
    use crate::column::ColumnDefinition;
    use crate::locale::PickerLocalization;
    use chrono::{NaiveDate, NaiveTime};

    fn props(column_type: &str) -> EditFieldProps {
        EditFieldProps::new(
            ColumnDefinition::new("Due", column_type),
            ChangeCallback::new(|_| {}),
        )
    }

    #[test]
    fn test_falsy_values_render_no_selection() {
        for value in [EditValue::Empty, EditValue::from(0), EditValue::from("")] {
            let widget = render_date(&props("date").with_value(value));
            assert_eq!(widget.picker().unwrap().selection, None);
        }
    }

    #[test]
    fn test_picker_configuration() {
        let widget = render_time(
            &props("time")
                .with_locale("de-DE")
                .with_picker_localization(PickerLocalization::default().with_clear_label("Leeren")),
        );
        let picker = widget.picker().unwrap();
        assert_eq!(picker.format.pattern(), "HH:mm:ss");
        assert!(picker.clearable);
        assert_eq!(picker.locale.as_ref().map(|l| l.language.as_str()), Some("de"));
        assert_eq!(
            picker.localization.as_ref().and_then(|l| l.clear_label.as_deref()),
            Some("Leeren")
        );
        assert_eq!(widget.accessible.name, "Due: press space to edit");
    }

    #[test]
    fn test_selected_date_display() {
        let date = NaiveDate::from_ymd_opt(2025, 12, 24).unwrap();
        let widget = render_date(&props("date").with_value(date));
        let picker = widget.picker().unwrap();
        assert_eq!(picker.selection, Some(EditValue::Date(date)));
        assert_eq!(picker.display_text().as_deref(), Some("24.12.2025"));
    }

    #[test]
    fn test_coerce_matches_format() {
        let widget = render_time(&props("time"));
        let picker = widget.picker().unwrap();
        let noon = NaiveTime::from_hms_opt(12, 0, 0).unwrap();

        assert_eq!(
            coerce(picker, FieldKind::Time, WidgetEvent::TimePicked(noon)).unwrap(),
            EditValue::Time(noon)
        );
        assert_eq!(
            coerce(picker, FieldKind::Time, WidgetEvent::Cleared).unwrap(),
            EditValue::Empty
        );

        let date = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let err = coerce(picker, FieldKind::Time, WidgetEvent::DatePicked(date)).unwrap_err();
        assert!(matches!(
            err,
            Error::EventMismatch { kind: FieldKind::Time, event: "date-picked" }
        ));
    }
}
