//! Value coercion between grid values and widget payloads.
//!
//! Inbound rules turn an [`EditValue`] into what a widget displays. Outbound
//! rules turn a widget's native payload into the [`EditValue`] reported to
//! the grid. None of these validate; they only change shape.
//!
//! | Widget | Inbound | Outbound |
//! |---|---|---|
//! | text input | `Empty` → `""` | raw text |
//! | number input | `Empty` → `""` | native parse, may be `NaN` |
//! | currency input | `Empty` → `""` | native parse, `NaN` → `Empty` |
//! | checkbox | truthy → checked | checked state |
//! | dropdown | `Empty` or `""` → no selection | selected key |
//! | picker | falsy → no selection | picked value or `Empty` |

use crate::column::Lookup;
use crate::logging::targets;
use crate::value::EditValue;

/// The text a text or number input shows for a value.
///
/// `Empty` shows as the empty string. Numbers print without a trailing
/// fraction when integral; non-finite numbers show as empty.
pub fn input_text(value: &EditValue) -> String {
    match value {
        EditValue::Empty => String::new(),
        EditValue::Text(s) => s.clone(),
        EditValue::Number(n) => format_number(*n),
        EditValue::Bool(b) => b.to_string(),
        EditValue::Date(d) => d.format("%Y-%m-%d").to_string(),
        EditValue::Time(t) => t.format("%H:%M:%S").to_string(),
        EditValue::DateTime(dt) => dt.format("%Y-%m-%dT%H:%M:%S").to_string(),
    }
}

/// Formats a number the way a number input displays it.
pub fn format_number(n: f64) -> String {
    if !n.is_finite() {
        String::new()
    } else if n == 0.0 {
        // Covers negative zero.
        "0".to_string()
    } else {
        n.to_string()
    }
}

/// Whether a checkbox bound to `value` renders checked.
pub fn is_checked(value: &EditValue) -> bool {
    value.is_truthy()
}

/// The key a dropdown over `lookup` shows as selected for `value`.
///
/// `Empty` means no selection, and so does `""` unless the table has an
/// empty key. Numbers select the key with the same textual form, so `1`
/// selects key `"1"`.
pub fn lookup_selection(value: &EditValue, lookup: &Lookup) -> Option<String> {
    match value {
        EditValue::Empty => None,
        EditValue::Text(key) if key.is_empty() && !lookup.contains_key("") => None,
        other => Some(input_text(other)),
    }
}

/// The value a date, time or datetime picker shows as selected.
///
/// Falsy values mean no selection. Anything else is handed to the picker
/// unchanged; the picker owns interpretation of non-temporal values.
pub fn picker_selection(value: &EditValue) -> Option<EditValue> {
    if value.is_truthy() {
        Some(value.clone())
    } else {
        if value.is_present() {
            tracing::debug!(
                target: targets::COERCION,
                value_type = value.type_name(),
                "falsy value rendered as no selection"
            );
        }
        None
    }
}

/// Parses number-input text the way a browser's `valueAsNumber` does.
///
/// Accepts an optional leading `-`, digits with an optional fraction (or a
/// bare fraction such as `.5`), and an optional exponent. Anything else,
/// including surrounding whitespace, a leading `+`, a trailing `.`, the
/// empty string and out-of-range values, yields `NaN`. `-0` parses as `0`.
pub fn parse_number_input(input: &str) -> f64 {
    if !is_valid_number_text(input) {
        return f64::NAN;
    }
    match input.parse::<f64>() {
        // No negative zero.
        Ok(value) if value == 0.0 => 0.0,
        Ok(value) if value.is_finite() => value,
        _ => f64::NAN,
    }
}

fn is_valid_number_text(input: &str) -> bool {
    let bytes = input.as_bytes();
    let mut i = 0;

    if bytes.first() == Some(&b'-') {
        i += 1;
    }

    let int_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let has_int = i > int_start;

    let mut has_fraction = false;
    if i < bytes.len() && bytes[i] == b'.' {
        i += 1;
        let frac_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        if i == frac_start {
            return false;
        }
        has_fraction = true;
    }

    if !has_int && !has_fraction {
        return false;
    }

    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        i += 1;
        if i < bytes.len() && (bytes[i] == b'+' || bytes[i] == b'-') {
            i += 1;
        }
        let exp_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        if i == exp_start {
            return false;
        }
    }

    i == bytes.len()
}

/// Outbound value for a plain text input.
pub fn text_change(input: &str) -> EditValue {
    EditValue::Text(input.to_string())
}

/// Outbound value for a numeric column: the native parse, `NaN` included.
pub fn numeric_change(input: &str) -> EditValue {
    EditValue::Number(parse_number_input(input))
}

/// Outbound value for a currency column.
///
/// A failed parse becomes `Empty`. Zero is a value, not an absence.
pub fn currency_change(input: &str) -> EditValue {
    let parsed = parse_number_input(input);
    if parsed.is_nan() {
        tracing::debug!(target: targets::COERCION, input, "unparseable currency input reported as empty");
        EditValue::Empty
    } else {
        EditValue::Number(parsed)
    }
}

/// Outbound value for a checkbox.
pub fn checkbox_change(checked: bool) -> EditValue {
    EditValue::Bool(checked)
}

/// Outbound value for a picker: the picked value, or `Empty` when cleared.
pub fn picker_change<T: Into<EditValue>>(picked: Option<T>) -> EditValue {
    picked.map_or(EditValue::Empty, Into::into)
}
