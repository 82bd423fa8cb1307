//! Extension configuration.
//!
//! [`Md1Config`] is read once when the extension loads and never changes
//! afterwards. Missing keys fall back to their defaults, so a host can
//! override a single key:
//!
//! ```rust
//! use md1::Md1Config;
//!
//! let config = Md1Config::from_yaml("time_pickseconds: false").unwrap();
//! assert!(!config.time_pickseconds);
//! assert_eq!(config.static_folder, "md1");
//! ```

use serde::{Deserialize, Serialize};

use md1_render::{StyleConfig, DEFAULT_DATETIME_FORMAT, DEFAULT_DATE_FORMAT};

use crate::error::ExtensionError;

/// Default folder, under the host's static root, that receives the assets.
pub const DEFAULT_STATIC_FOLDER: &str = "md1";

/// Process-wide MD1 configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Md1Config {
    /// Install [`Md1FormStyle`](md1_render::Md1FormStyle) as the host's
    /// default form style.
    pub set_as_default_style: bool,
    /// Folder under the static root holding the theme assets.
    pub static_folder: String,
    pub date_format: String,
    pub datetime_format: String,
    /// Whether time pickers edit seconds.
    pub time_pickseconds: bool,
}

impl Default for Md1Config {
    fn default() -> Self {
        Self {
            set_as_default_style: true,
            static_folder: DEFAULT_STATIC_FOLDER.to_string(),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            datetime_format: DEFAULT_DATETIME_FORMAT.to_string(),
            time_pickseconds: true,
        }
    }
}

impl Md1Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a YAML mapping. Unknown keys are rejected.
    pub fn from_yaml(yaml: &str) -> Result<Self, ExtensionError> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Md1Config =
            serde_yaml::from_str(yaml).map_err(|e| ExtensionError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn set_as_default_style(mut self, enabled: bool) -> Self {
        self.set_as_default_style = enabled;
        self
    }

    pub fn static_folder(mut self, folder: impl Into<String>) -> Self {
        self.static_folder = folder.into();
        self
    }

    pub fn date_format(mut self, format: impl Into<String>) -> Self {
        self.date_format = format.into();
        self
    }

    pub fn datetime_format(mut self, format: impl Into<String>) -> Self {
        self.datetime_format = format.into();
        self
    }

    pub fn time_pickseconds(mut self, enabled: bool) -> Self {
        self.time_pickseconds = enabled;
        self
    }

    /// The subset of the configuration the form style needs.
    pub fn style_config(&self) -> StyleConfig {
        StyleConfig {
            date_format: self.date_format.clone(),
            datetime_format: self.datetime_format.clone(),
            time_pickseconds: self.time_pickseconds,
        }
    }

    /// Checks that the static folder is a single relative path segment.
    pub fn validate(&self) -> Result<(), ExtensionError> {
        let folder = self.static_folder.as_str();
        if folder.is_empty() || folder == "." || folder == ".." || folder.contains(['/', '\\']) {
            return Err(ExtensionError::Config(format!(
                "static_folder must be a single folder name, got '{}'",
                folder
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Md1Config::default();
        assert!(config.set_as_default_style);
        assert_eq!(config.static_folder, "md1");
        assert_eq!(config.date_format, "dd mmm, yyyy");
        assert_eq!(config.datetime_format, "dd mmm, yyyy");
        assert!(config.time_pickseconds);
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = Md1Config::from_yaml(
            r#"
static_folder: theme
date_format: "yyyy-mm-dd"
"#,
        )
        .unwrap();
        assert_eq!(config.static_folder, "theme");
        assert_eq!(config.date_format, "yyyy-mm-dd");
        assert_eq!(config.datetime_format, "dd mmm, yyyy");
        assert!(config.set_as_default_style);
    }

    #[test]
    fn test_empty_yaml_is_default() {
        assert_eq!(Md1Config::from_yaml("  \n").unwrap(), Md1Config::default());
    }

    #[test]
    fn test_invalid_yaml() {
        let err = Md1Config::from_yaml("time_pickseconds: [1, 2]").unwrap_err();
        assert!(matches!(err, ExtensionError::Config(_)));
    }

    #[test]
    fn test_nested_static_folder_rejected() {
        assert!(Md1Config::from_yaml("static_folder: ../outside").is_err());
        assert!(Md1Config::new().static_folder("a/b").validate().is_err());
    }

    #[test]
    fn test_style_config_projection() {
        let style = Md1Config::new().time_pickseconds(false).style_config();
        assert!(!style.time_pickseconds);
        assert_eq!(style.date_format, "dd mmm, yyyy");
    }
}
