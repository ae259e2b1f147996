//! Column definitions.
//!
//! A [`ColumnDefinition`] describes how a grid column is edited: its value
//! type, an optional lookup table for single-choice columns, its title and
//! an optional placeholder. Definitions are read-only to the editor and can
//! be loaded from JSON or TOML.
//!
//! # Example
//!
//! ```
//! use horizon_field_editor::{ColumnDefinition, ColumnType};
//!
//! let column = ColumnDefinition::from_json_str(
//!     r#"{ "type": "currency", "title": "Amount", "editPlaceholder": "0.00" }"#,
//! )
//! .unwrap();
//!
//! assert_eq!(column.column_type, ColumnType::Currency);
//! assert_eq!(column.placeholder(), "0.00");
//! ```

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::Result;
use crate::logging::targets;

/// The declared value type of a column.
///
/// Unrecognized type tags are kept as [`ColumnType::Other`] rather than
/// rejected; they are edited as plain text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ColumnType {
    /// Free text.
    #[default]
    Text,
    /// A plain number.
    Numeric,
    /// A monetary amount.
    Currency,
    /// A true/false flag.
    Boolean,
    /// A calendar date.
    Date,
    /// A time of day.
    Time,
    /// A date with a time of day.
    DateTime,
    /// Any other tag.
    Other(String),
}

impl ColumnType {
    /// Parse a type tag. Never fails.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "text" => ColumnType::Text,
            "numeric" => ColumnType::Numeric,
            "currency" => ColumnType::Currency,
            "boolean" => ColumnType::Boolean,
            "date" => ColumnType::Date,
            "time" => ColumnType::Time,
            "datetime" => ColumnType::DateTime,
            other => ColumnType::Other(other.to_string()),
        }
    }

    /// Returns the type tag.
    pub fn tag(&self) -> &str {
        match self {
            ColumnType::Text => "text",
            ColumnType::Numeric => "numeric",
            ColumnType::Currency => "currency",
            ColumnType::Boolean => "boolean",
            ColumnType::Date => "date",
            ColumnType::Time => "time",
            ColumnType::DateTime => "datetime",
            ColumnType::Other(tag) => tag,
        }
    }
}

impl From<String> for ColumnType {
    fn from(tag: String) -> Self {
        ColumnType::from_tag(&tag)
    }
}

impl From<&str> for ColumnType {
    fn from(tag: &str) -> Self {
        ColumnType::from_tag(tag)
    }
}

impl From<ColumnType> for String {
    fn from(column_type: ColumnType) -> Self {
        column_type.tag().to_string()
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// One entry of a lookup table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupEntry {
    /// The stored key. This is what the grid receives on selection.
    pub key: String,
    /// The human-readable label shown in the dropdown.
    pub label: String,
}

/// A fixed mapping from stored key to display label.
///
/// Entries keep the order they were inserted or deserialized in. Selection
/// is always by exact key match, so order only affects presentation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Lookup {
    entries: Vec<LookupEntry>,
}

impl Lookup {
    /// Creates an empty lookup table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a key's label using builder pattern.
    pub fn with_entry(mut self, key: impl Into<String>, label: impl Into<String>) -> Self {
        self.insert(key, label);
        self
    }

    /// Inserts a key, replacing the label if the key already exists.
    pub fn insert(&mut self, key: impl Into<String>, label: impl Into<String>) {
        let key = key.into();
        let label = label.into();
        match self.entries.iter_mut().find(|e| e.key == key) {
            Some(entry) => entry.label = label,
            None => self.entries.push(LookupEntry { key, label }),
        }
    }

    /// Returns the label for a key.
    pub fn label(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.key == key)
            .map(|e| e.label.as_str())
    }

    /// Returns `true` if the key is part of the table.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|e| e.key == key)
    }

    /// Iterates over the keys.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.key.as_str())
    }

    /// Iterates over the entries.
    pub fn iter(&self) -> impl Iterator<Item = &LookupEntry> {
        self.entries.iter()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, L: Into<String>> FromIterator<(K, L)> for Lookup {
    fn from_iter<I: IntoIterator<Item = (K, L)>>(iter: I) -> Self {
        let mut lookup = Lookup::new();
        for (key, label) in iter {
            lookup.insert(key, label);
        }
        lookup
    }
}

impl Serialize for Lookup {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in &self.entries {
            map.serialize_entry(&entry.key, &entry.label)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Lookup {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct LookupVisitor;

        impl<'de> Visitor<'de> for LookupVisitor {
            type Value = Lookup;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of lookup keys to labels")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> std::result::Result<Lookup, A::Error> {
                let mut lookup = Lookup::new();
                while let Some((key, label)) = access.next_entry::<String, String>()? {
                    lookup.insert(key, label);
                }
                Ok(lookup)
            }
        }

        deserializer.deserialize_map(LookupVisitor)
    }
}

/// Describes how a column's cells are edited.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnDefinition {
    /// The declared value type.
    #[serde(rename = "type", default)]
    pub column_type: ColumnType,
    /// Optional lookup table. When present it decides the editor regardless
    /// of `column_type`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lookup: Option<Lookup>,
    /// Column title, used for labels and as the fallback placeholder.
    #[serde(default)]
    pub title: String,
    /// Placeholder shown in empty text inputs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edit_placeholder: Option<String>,
}

impl ColumnDefinition {
    /// Creates a definition with the given title and type.
    pub fn new(title: impl Into<String>, column_type: impl Into<ColumnType>) -> Self {
        Self {
            column_type: column_type.into(),
            lookup: None,
            title: title.into(),
            edit_placeholder: None,
        }
    }

    /// Sets the lookup table using builder pattern.
    pub fn with_lookup(mut self, lookup: Lookup) -> Self {
        self.lookup = Some(lookup);
        self
    }

    /// Sets the edit placeholder using builder pattern.
    pub fn with_edit_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.edit_placeholder = Some(placeholder.into());
        self
    }

    /// The placeholder for text inputs: `edit_placeholder` when it is set
    /// and non-empty, the title otherwise.
    pub fn placeholder(&self) -> &str {
        match self.edit_placeholder.as_deref() {
            Some(placeholder) if !placeholder.is_empty() => placeholder,
            _ => &self.title,
        }
    }

    /// Returns `true` for numeric columns.
    pub fn is_numeric(&self) -> bool {
        self.column_type == ColumnType::Numeric
    }

    /// Parse a single column definition from JSON.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let column: Self = serde_json::from_str(json)?;
        tracing::debug!(target: targets::CONFIG, title = %column.title, column_type = %column.column_type, "column definition loaded");
        Ok(column)
    }

    /// Parse a single column definition from TOML.
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        let column: Self = toml::from_str(toml_str)?;
        tracing::debug!(target: targets::CONFIG, title = %column.title, column_type = %column.column_type, "column definition loaded");
        Ok(column)
    }

    /// Parse a list of column definitions from a JSON array.
    pub fn list_from_json_str(json: &str) -> Result<Vec<Self>> {
        Ok(serde_json::from_str(json)?)
    }
}
