//! Grid-wide editor settings.
//!
//! Settings supply defaults the per-render props may leave unset: the
//! picker locale and the picker button labels. They load from TOML or JSON
//! with the same camelCase keys as column definitions. Unknown keys are
//! rejected.
//!
//! ```toml
//! locale = "de-DE"
//!
//! [pickerLocalization]
//! okLabel = "OK"
//! cancelLabel = "Abbrechen"
//! clearLabel = "Leeren"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::locale::{Locale, PickerLocalization};
use crate::logging::targets;
use crate::props::EditFieldProps;

/// Defaults applied to every render.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct EditorSettings {
    /// Picker locale used when the props carry none.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<Locale>,
    /// Picker labels used when the props carry none.
    #[serde(
        alias = "dateTimePickerLocalization",
        skip_serializing_if = "Option::is_none"
    )]
    pub picker_localization: Option<PickerLocalization>,
}

impl EditorSettings {
    /// Settings whose locale is the operating system's.
    pub fn from_system() -> Self {
        Self {
            locale: Some(Locale::system()),
            picker_localization: None,
        }
    }

    /// Parse settings from TOML.
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Parse settings from JSON.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load settings from a `.toml` or `.json` file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let format = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        let settings = match format.as_deref() {
            Some("toml") => Self::from_toml_str(&read(path)?)?,
            Some("json") => Self::from_json_str(&read(path)?)?,
            _ => return Err(Error::unsupported_format(path)),
        };

        tracing::debug!(
            target: targets::CONFIG,
            path = %path.display(),
            locale = ?settings.locale.as_ref().map(|l| l.identifier.as_str()),
            "editor settings loaded"
        );
        Ok(settings)
    }

    /// Returns `true` if any picker default is configured.
    pub fn has_picker_defaults(&self) -> bool {
        self.locale.is_some() || self.picker_localization.is_some()
    }

    /// Fills unset picker fields of `props` from these settings.
    pub fn apply(&self, mut props: EditFieldProps) -> EditFieldProps {
        if props.locale.is_none() {
            props.locale = self.locale.clone();
        }
        if props.picker_localization.is_none() {
            props.picker_localization = self.picker_localization.clone();
        }
        props
    }
}

fn read(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| Error::io(path, e))
}
