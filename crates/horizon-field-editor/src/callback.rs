//! Callbacks supplied by the grid.
//!
//! A [`Callback`] wraps a shared closure so it can be stored on props and
//! cloned into a rendered widget without copying the closure itself.

use std::fmt;
use std::sync::Arc;

use crate::value::EditValue;

/// A cloneable, thread-safe callback taking `Args` by value.
pub struct Callback<Args> {
    slot: Arc<dyn Fn(Args) + Send + Sync>,
}

impl<Args> Callback<Args> {
    /// Wrap a closure.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(Args) + Send + Sync + 'static,
    {
        Self { slot: Arc::new(f) }
    }

    /// Invoke the callback synchronously.
    #[inline]
    pub fn call(&self, args: Args) {
        (self.slot)(args)
    }

    /// Returns `true` if both handles wrap the same closure.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.slot, &other.slot)
    }
}

impl<Args> Clone for Callback<Args> {
    fn clone(&self) -> Self {
        Self {
            slot: Arc::clone(&self.slot),
        }
    }
}

impl<Args> fmt::Debug for Callback<Args> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Callback(..)")
    }
}

/// Receives the coerced value after each user-driven change.
pub type ChangeCallback = Callback<EditValue>;

/// Receives raw key presses from the widget.
pub type KeyDownCallback = Callback<KeyPress>;

/// Receives whole-row updates. Carried for the grid; the editor never calls it.
pub type RowDataCallback = Callback<serde_json::Value>;

/// A key press delivered by the widget layer.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeyPress {
    /// The key name, e.g. `"Enter"`, `"Escape"` or `"a"`.
    pub key: String,
    /// Shift was held.
    pub shift: bool,
    /// Control (or Command) was held.
    pub ctrl: bool,
    /// Alt (or Option) was held.
    pub alt: bool,
}

impl KeyPress {
    /// A key press without modifiers.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Default::default()
        }
    }

    /// Sets shift using builder pattern.
    pub fn with_shift(mut self, shift: bool) -> Self {
        self.shift = shift;
        self
    }

    /// Sets control using builder pattern.
    pub fn with_ctrl(mut self, ctrl: bool) -> Self {
        self.ctrl = ctrl;
        self
    }

    /// Sets alt using builder pattern.
    pub fn with_alt(mut self, alt: bool) -> Self {
        self.alt = alt;
        self
    }
}
