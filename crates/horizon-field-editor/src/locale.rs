//! Locale passthrough for date and time pickers.
//!
//! The editor does not format or parse dates itself. It carries the active
//! [`Locale`] and the optional [`PickerLocalization`] labels to each picker
//! it renders, unchanged.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A BCP 47 locale identifier split into its components.
///
/// # Example
///
/// ```
/// use horizon_field_editor::Locale;
///
/// let locale = Locale::parse("de_DE");
/// assert_eq!(locale.language, "de");
/// assert_eq!(locale.region.as_deref(), Some("DE"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Locale {
    /// The identifier as given (e.g. "en-US", "de_DE").
    pub identifier: String,
    /// Lowercase language code (e.g. "en").
    pub language: String,
    /// Uppercase region code (e.g. "US"), if present.
    pub region: Option<String>,
    /// Title-case script code (e.g. "Latn"), if present.
    pub script: Option<String>,
}

impl Locale {
    /// Parse a locale identifier. Never fails; an empty identifier yields
    /// language "en".
    ///
    /// Subtags are matched case-insensitively and normalized, so `en-us`,
    /// `EN_US` and `en-US` parse alike. A POSIX charset or modifier suffix
    /// (`de_DE.UTF-8`, `ca_ES@valencia`) is ignored. Only the first script
    /// and the first region are kept; variants and extensions are dropped.
    pub fn parse(identifier: &str) -> Self {
        let trimmed = identifier.trim();
        let tag = trimmed.split(['.', '@']).next().unwrap_or_default();
        let mut subtags = tag.split(['-', '_']).filter(|s| !s.is_empty());

        let language = subtags
            .next()
            .filter(|lang| lang.chars().all(|c| c.is_ascii_alphabetic()))
            .map_or_else(|| "en".to_string(), str::to_ascii_lowercase);

        let mut region = None;
        let mut script = None;
        for subtag in subtags {
            match classify_subtag(subtag) {
                Some(Subtag::Script) if script.is_none() && region.is_none() => {
                    script = Some(title_case(subtag));
                }
                Some(Subtag::Region) if region.is_none() => {
                    region = Some(subtag.to_ascii_uppercase());
                }
                _ => {}
            }
        }

        Self {
            identifier: trimmed.to_string(),
            language,
            region,
            script,
        }
    }

    /// The operating system locale, or "en-US" when it cannot be read.
    #[cfg(feature = "localization")]
    pub fn system() -> Self {
        Self::parse(&sys_locale::get_locale().unwrap_or_else(|| "en-US".to_string()))
    }

    /// The operating system locale, or "en-US" when it cannot be read.
    #[cfg(not(feature = "localization"))]
    pub fn system() -> Self {
        Self::default()
    }

    /// The identifier in canonical hyphenated form (e.g. "de-DE").
    pub fn tag(&self) -> String {
        let mut tag = self.language.clone();
        if let Some(script) = &self.script {
            tag.push('-');
            tag.push_str(script);
        }
        if let Some(region) = &self.region {
            tag.push('-');
            tag.push_str(region);
        }
        tag
    }
}

enum Subtag {
    Script,
    Region,
}

/// Scripts are four letters (`Latn`); regions are two letters (`US`) or
/// three digits (`419`).
fn classify_subtag(subtag: &str) -> Option<Subtag> {
    let letters = subtag.chars().all(|c| c.is_ascii_alphabetic());
    match subtag.len() {
        4 if letters => Some(Subtag::Script),
        2 if letters => Some(Subtag::Region),
        3 if subtag.chars().all(|c| c.is_ascii_digit()) => Some(Subtag::Region),
        _ => None,
    }
}

fn title_case(subtag: &str) -> String {
    let mut out = subtag.to_ascii_lowercase();
    if let Some(first) = out.get_mut(0..1) {
        first.make_ascii_uppercase();
    }
    out
}

impl Default for Locale {
    fn default() -> Self {
        Self::parse("en-US")
    }
}

impl From<String> for Locale {
    fn from(identifier: String) -> Self {
        Self::parse(&identifier)
    }
}

impl From<&str> for Locale {
    fn from(identifier: &str) -> Self {
        Self::parse(identifier)
    }
}

impl From<Locale> for String {
    fn from(locale: Locale) -> Self {
        locale.identifier
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.identifier)
    }
}

/// Labels for the action buttons of a date or time picker.
///
/// Unset labels leave the picker's own defaults in place.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PickerLocalization {
    /// Label of the confirm button.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ok_label: Option<String>,
    /// Label of the cancel button.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancel_label: Option<String>,
    /// Label of the clear button.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clear_label: Option<String>,
    /// Label of the jump-to-today button.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub today_label: Option<String>,
}

impl PickerLocalization {
    /// Sets the confirm label using builder pattern.
    pub fn with_ok_label(mut self, label: impl Into<String>) -> Self {
        self.ok_label = Some(label.into());
        self
    }

    /// Sets the cancel label using builder pattern.
    pub fn with_cancel_label(mut self, label: impl Into<String>) -> Self {
        self.cancel_label = Some(label.into());
        self
    }

    /// Sets the clear label using builder pattern.
    pub fn with_clear_label(mut self, label: impl Into<String>) -> Self {
        self.clear_label = Some(label.into());
        self
    }

    /// Sets the today label using builder pattern.
    pub fn with_today_label(mut self, label: impl Into<String>) -> Self {
        self.today_label = Some(label.into());
        self
    }
}
