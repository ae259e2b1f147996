//! Cell values exchanged with the grid.
//!
//! [`EditValue`] is the value the grid hands to the editor on each render
//! and the value the editor reports back through `on_change`. Its shape
//! depends on the active strategy. The editor coerces between widget
//! payloads and these shapes but never validates them.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// A cell value.
///
/// # Example
///
/// ```
/// use horizon_field_editor::EditValue;
///
/// let value = EditValue::from(0.0);
/// assert!(value.is_present());
/// assert!(!value.is_truthy());
///
/// assert!(EditValue::from("x").is_truthy());
/// assert!(!EditValue::Empty.is_present());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub enum EditValue {
    /// No value entered.
    #[default]
    Empty,
    /// Text.
    Text(String),
    /// A number. Numeric columns may carry `NaN` when the input did not parse.
    Number(f64),
    /// A boolean.
    Bool(bool),
    /// A calendar date.
    Date(NaiveDate),
    /// A time of day.
    Time(NaiveTime),
    /// A date and time of day.
    DateTime(NaiveDateTime),
}

impl EditValue {
    /// Returns `true` unless this is [`EditValue::Empty`].
    ///
    /// This is a presence check only: `0`, `""` and `false` are present.
    pub fn is_present(&self) -> bool {
        !matches!(self, EditValue::Empty)
    }

    /// Truthiness as the grid's value model defines it.
    ///
    /// `Empty`, `""`, `0`, `NaN` and `false` are falsy. Every date, time and
    /// datetime is truthy, including the Unix epoch.
    pub fn is_truthy(&self) -> bool {
        match self {
            EditValue::Empty => false,
            EditValue::Text(s) => !s.is_empty(),
            EditValue::Number(n) => *n != 0.0 && !n.is_nan(),
            EditValue::Bool(b) => *b,
            EditValue::Date(_) | EditValue::Time(_) | EditValue::DateTime(_) => true,
        }
    }

    /// Short name of the variant, for logs.
    pub fn type_name(&self) -> &'static str {
        match self {
            EditValue::Empty => "empty",
            EditValue::Text(_) => "text",
            EditValue::Number(_) => "number",
            EditValue::Bool(_) => "bool",
            EditValue::Date(_) => "date",
            EditValue::Time(_) => "time",
            EditValue::DateTime(_) => "datetime",
        }
    }

    /// Attempts to get the value as a string slice.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            EditValue::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Attempts to get the value as a number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            EditValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to get the value as a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            EditValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Attempts to get the value as a date.
    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            EditValue::Date(d) => Some(*d),
            _ => None,
        }
    }

    /// Attempts to get the value as a time.
    pub fn as_time(&self) -> Option<NaiveTime> {
        match self {
            EditValue::Time(t) => Some(*t),
            _ => None,
        }
    }

    /// Attempts to get the value as a datetime.
    pub fn as_datetime(&self) -> Option<NaiveDateTime> {
        match self {
            EditValue::DateTime(dt) => Some(*dt),
            _ => None,
        }
    }
}

impl From<String> for EditValue {
    fn from(s: String) -> Self {
        EditValue::Text(s)
    }
}

impl From<&str> for EditValue {
    fn from(s: &str) -> Self {
        EditValue::Text(s.to_string())
    }
}

impl From<f64> for EditValue {
    fn from(n: f64) -> Self {
        EditValue::Number(n)
    }
}

impl From<i64> for EditValue {
    fn from(n: i64) -> Self {
        EditValue::Number(n as f64)
    }
}

impl From<i32> for EditValue {
    fn from(n: i32) -> Self {
        EditValue::Number(n as f64)
    }
}

impl From<bool> for EditValue {
    fn from(b: bool) -> Self {
        EditValue::Bool(b)
    }
}

impl From<NaiveDate> for EditValue {
    fn from(d: NaiveDate) -> Self {
        EditValue::Date(d)
    }
}

impl From<NaiveTime> for EditValue {
    fn from(t: NaiveTime) -> Self {
        EditValue::Time(t)
    }
}

impl From<NaiveDateTime> for EditValue {
    fn from(dt: NaiveDateTime) -> Self {
        EditValue::DateTime(dt)
    }
}

impl<T: Into<EditValue>> From<Option<T>> for EditValue {
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(v) => v.into(),
            None => EditValue::Empty,
        }
    }
}
