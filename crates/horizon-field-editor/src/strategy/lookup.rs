//! Single-choice lookup dropdown.
//!
//! Options are the lookup table's keys, labelled with the table's labels.
//! Selection reports the key, never the label.

use crate::accessibility;
use crate::coercion;
use crate::column::Lookup;
use crate::dispatcher::FieldKind;
use crate::error::{Error, Result};
use crate::props::EditFieldProps;
use crate::value::EditValue;
use crate::widget::{
    Control, EditWidget, FieldContainer, HelperTextPolicy, Select, SelectOption, WidgetEvent,
};

/// Renders a dropdown over the column's lookup table.
///
/// A column without a lookup table renders an empty dropdown; the
/// dispatcher never routes such a column here.
pub fn render(props: &EditFieldProps) -> EditWidget {
    let empty = Lookup::new();
    let lookup = props.column_def.lookup.as_ref().unwrap_or(&empty);

    let select = Select {
        selected: coercion::lookup_selection(&props.value, lookup),
        options: lookup
            .iter()
            .map(|entry| SelectOption {
                key: entry.key.clone(),
                label: entry.label.clone(),
            })
            .collect(),
    };

    EditWidget::new(
        FieldKind::Lookup,
        accessibility::accessible_label(&props.column_def, FieldKind::Lookup),
        FieldContainer::from_error_state(&props.error_state, HelperTextPolicy::WhenPresent),
        Control::Select(select),
        props.widget_props(),
        props.on_change.clone(),
    )
}

/// Interprets an event delivered to the dropdown.
pub(crate) fn coerce(select: &Select, event: WidgetEvent) -> Result<EditValue> {
    match event {
        WidgetEvent::Selected(key) if select.contains_key(&key) => Ok(EditValue::Text(key)),
        WidgetEvent::Selected(key) => Err(Error::unknown_lookup_key(key)),
        other => Err(Error::event_mismatch(FieldKind::Lookup, other.name())),
    }
}
