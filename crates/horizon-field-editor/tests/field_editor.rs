//! Rendering behaviour across all strategies.

use std::sync::Arc;

use chrono::{NaiveDate, NaiveTime};
use horizon_field_editor::{
    AccessibleRole, ChangeCallback, ColumnDefinition, Control, EditFieldProps, EditValue,
    ErrorState, FieldEditor, FieldKind, Lookup,
};

fn noop() -> ChangeCallback {
    ChangeCallback::new(|_| {})
}

fn render(column: ColumnDefinition, value: EditValue) -> horizon_field_editor::EditWidget {
    FieldEditor::new().render(&EditFieldProps::new(column, noop()).with_value(value))
}

#[test]
fn test_empty_value_renders_type_appropriate_empty() {
    let lookup = Lookup::new().with_entry("a", "A");

    for column_type in ["text", "numeric", "currency", "unknown"] {
        let widget = render(ColumnDefinition::new("Col", column_type), EditValue::Empty);
        assert_eq!(widget.text_input().unwrap().value, "", "{column_type}");
    }

    let widget = render(ColumnDefinition::new("Col", "boolean"), EditValue::Empty);
    assert!(!widget.checkbox().unwrap().checked);

    let widget = render(
        ColumnDefinition::new("Col", "text").with_lookup(lookup),
        EditValue::Empty,
    );
    assert_eq!(widget.select().unwrap().selected, None);

    let widget = render(
        ColumnDefinition::new("Col", "text").with_lookup(Lookup::new().with_entry("a", "A")),
        EditValue::from(""),
    );
    assert_eq!(widget.select().unwrap().selected, None);

    for column_type in ["date", "time", "datetime"] {
        let widget = render(ColumnDefinition::new("Col", column_type), EditValue::Empty);
        assert_eq!(widget.picker().unwrap().selection, None, "{column_type}");
    }
}

#[test]
fn test_lookup_beats_boolean() {
    let column = ColumnDefinition::new("Flag", "boolean")
        .with_lookup(Lookup::new().with_entry("1", "On").with_entry("0", "Off"));
    let widget = render(column, EditValue::from(true));

    assert_eq!(widget.kind, FieldKind::Lookup);
    assert!(matches!(widget.control, Control::Select(_)));
    assert_eq!(widget.accessible.role, AccessibleRole::ComboBox);
}

#[test]
fn test_lookup_keys_equal_table_keys() {
    let lookup: Lookup = [("x", "Ex"), ("y", "Why"), ("z", "Zed")].into_iter().collect();
    let widget = render(
        ColumnDefinition::new("Letter", "text").with_lookup(lookup.clone()),
        EditValue::Empty,
    );

    let keys: Vec<_> = widget.select().unwrap().keys().collect();
    let expected: Vec<_> = lookup.keys().collect();
    assert_eq!(keys, expected);
}

#[test]
fn test_boolean_truthy_values_render_checked() {
    for value in [EditValue::from(1), EditValue::from("x"), EditValue::from(true)] {
        let widget = render(ColumnDefinition::new("Active", "boolean"), value);
        assert!(widget.checkbox().unwrap().checked);
    }
}

#[test]
fn test_temporal_falsy_values_render_no_selection() {
    for column_type in ["date", "time", "datetime"] {
        for value in [
            EditValue::Empty,
            EditValue::from(0),
            EditValue::from(""),
            EditValue::from(false),
        ] {
            let widget = render(ColumnDefinition::new("When", column_type), value.clone());
            assert_eq!(
                widget.picker().unwrap().selection,
                None,
                "{column_type} with {value:?}"
            );
        }
    }
}

#[test]
fn test_temporal_values_pass_through_unchanged() {
    let date = NaiveDate::from_ymd_opt(2024, 7, 1).unwrap();
    let time = NaiveTime::from_hms_opt(23, 59, 58).unwrap();
    let datetime = date.and_time(time);

    let widget = render(ColumnDefinition::new("When", "date"), EditValue::from(date));
    assert_eq!(widget.picker().unwrap().selection, Some(EditValue::Date(date)));

    let widget = render(ColumnDefinition::new("When", "time"), EditValue::from(time));
    assert_eq!(widget.picker().unwrap().display_text().as_deref(), Some("23:59:58"));

    let widget = render(
        ColumnDefinition::new("When", "datetime"),
        EditValue::from(datetime),
    );
    assert_eq!(
        widget.picker().unwrap().display_text().as_deref(),
        Some("01.07.2024 23:59:58")
    );
}

#[test]
fn test_accessible_labels() {
    let widget = render(ColumnDefinition::new("Amount", "currency"), EditValue::Empty);
    assert_eq!(widget.accessible.name, "Amount");

    let widget = render(ColumnDefinition::new("Amount", "text"), EditValue::Empty);
    assert_eq!(widget.accessible.name, "Amount");

    let widget = render(ColumnDefinition::new("Amount", "date"), EditValue::Empty);
    assert_eq!(widget.accessible.name, "Amount: press space to edit");
}

#[test]
fn test_error_state_lands_on_container() {
    let state = ErrorState::error("Required");
    for column_type in ["text", "currency", "boolean", "date"] {
        let widget = FieldEditor::new().render(
            &EditFieldProps::new(ColumnDefinition::new("Col", column_type), noop())
                .with_error_state(state.clone()),
        );
        assert!(widget.container.error, "{column_type}");
        assert_eq!(widget.container.helper_text.as_deref(), Some("Required"));
    }
}

#[test]
fn test_boolean_helper_line_is_always_rendered() {
    let widget = render(ColumnDefinition::new("Active", "boolean"), EditValue::Empty);
    assert_eq!(widget.container.helper_text.as_deref(), Some(""));

    let widget = render(ColumnDefinition::new("Name", "text"), EditValue::Empty);
    assert_eq!(widget.container.helper_text, None);
}

#[test]
fn test_shared_column_definition() {
    let column = Arc::new(ColumnDefinition::new("Qty", "numeric"));
    let first = FieldEditor::new().render(&EditFieldProps::new(column.clone(), noop()).with_value(1));
    let second = FieldEditor::new().render(&EditFieldProps::new(column, noop()).with_value(2));

    assert_eq!(first.text_input().unwrap().value, "1");
    assert_eq!(second.text_input().unwrap().value, "2");
}

#[test]
fn test_columns_from_json() {
    let columns = ColumnDefinition::list_from_json_str(
        r#"[
            { "title": "Name" },
            { "title": "Birth", "type": "date" },
            { "title": "City", "type": "numeric", "lookup": { "34": "Istanbul" } },
            { "title": "Score", "type": "stars" }
        ]"#,
    )
    .unwrap();

    let kinds: Vec<_> = columns.iter().map(FieldKind::for_column).collect();
    assert_eq!(
        kinds,
        vec![FieldKind::Text, FieldKind::Date, FieldKind::Lookup, FieldKind::Text]
    );
}
