//! Boolean checkbox.

use crate::accessibility;
use crate::coercion;
use crate::dispatcher::FieldKind;
use crate::error::{Error, Result};
use crate::props::EditFieldProps;
use crate::value::EditValue;
use crate::widget::{Checkbox, Control, EditWidget, FieldContainer, HelperTextPolicy, WidgetEvent};

/// Renders a checkbox with an empty visible label.
///
/// Any truthy value renders checked. The helper-text line is always present
/// so toggling the error state does not change the row height.
pub fn render(props: &EditFieldProps) -> EditWidget {
    let checkbox = Checkbox {
        checked: coercion::is_checked(&props.value),
        label: String::new(),
    };

    EditWidget::new(
        FieldKind::Boolean,
        accessibility::accessible_label(&props.column_def, FieldKind::Boolean),
        FieldContainer::from_error_state(&props.error_state, HelperTextPolicy::Always),
        Control::Checkbox(checkbox),
        props.widget_props(),
        props.on_change.clone(),
    )
}

/// Interprets an event delivered to the checkbox.
pub(crate) fn coerce(event: WidgetEvent) -> Result<EditValue> {
    match event {
        WidgetEvent::Toggled(checked) => Ok(coercion::checkbox_change(checked)),
        other => Err(Error::event_mismatch(FieldKind::Boolean, other.name())),
    }
}
