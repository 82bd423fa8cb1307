//! Render attributes: per-call overrides resolved against the style config.
//!
//! [`StyleConfig`] carries the process-wide defaults the widgets need and is
//! handed to [`Md1FormStyle`](crate::Md1FormStyle) at construction. A caller
//! can override any of them for a single render with [`RenderAttributes`];
//! [`RenderAttributes::resolve`] merges the two into a fresh
//! [`ResolvedAttributes`] per call.

/// Default display format for date pickers.
pub const DEFAULT_DATE_FORMAT: &str = "dd mmm, yyyy";

/// Default display format for datetime pickers.
pub const DEFAULT_DATETIME_FORMAT: &str = "dd mmm, yyyy";

/// Widget defaults shared by every render call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleConfig {
    pub date_format: String,
    pub datetime_format: String,
    pub time_pickseconds: bool,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            datetime_format: DEFAULT_DATETIME_FORMAT.to_string(),
            time_pickseconds: true,
        }
    }
}

/// Call-site overrides for one render.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderAttributes {
    pub date_format: Option<String>,
    pub datetime_format: Option<String>,
    pub time_pickseconds: Option<bool>,
    /// CSS class for selects and plain inputs.
    pub class: Option<String>,
    /// Element id; defaults to the field name.
    pub id: Option<String>,
}

impl RenderAttributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn date_format(mut self, format: impl Into<String>) -> Self {
        self.date_format = Some(format.into());
        self
    }

    pub fn datetime_format(mut self, format: impl Into<String>) -> Self {
        self.datetime_format = Some(format.into());
        self
    }

    pub fn time_pickseconds(mut self, pickseconds: bool) -> Self {
        self.time_pickseconds = Some(pickseconds);
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Merges these overrides over `config`. Overrides win.
    pub fn resolve(&self, config: &StyleConfig) -> ResolvedAttributes {
        ResolvedAttributes {
            date_format: self
                .date_format
                .clone()
                .unwrap_or_else(|| config.date_format.clone()),
            datetime_format: self
                .datetime_format
                .clone()
                .unwrap_or_else(|| config.datetime_format.clone()),
            time_pickseconds: self.time_pickseconds.unwrap_or(config.time_pickseconds),
            class: self.class.clone(),
            id: self.id.clone(),
        }
    }
}

/// Attributes after merging overrides with the style config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedAttributes {
    pub date_format: String,
    pub datetime_format: String,
    pub time_pickseconds: bool,
    pub class: Option<String>,
    pub id: Option<String>,
}

impl Default for ResolvedAttributes {
    fn default() -> Self {
        RenderAttributes::default().resolve(&StyleConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_uses_config_defaults() {
        let resolved = RenderAttributes::new().resolve(&StyleConfig::default());
        assert_eq!(resolved.date_format, "dd mmm, yyyy");
        assert_eq!(resolved.datetime_format, "dd mmm, yyyy");
        assert!(resolved.time_pickseconds);
        assert_eq!(resolved.id, None);
    }

    #[test]
    fn test_call_site_overrides_win() {
        let config = StyleConfig {
            date_format: "yyyy-mm-dd".into(),
            datetime_format: "yyyy-mm-dd".into(),
            time_pickseconds: true,
        };
        let resolved = RenderAttributes::new()
            .date_format("mm/dd/yyyy")
            .time_pickseconds(false)
            .resolve(&config);
        assert_eq!(resolved.date_format, "mm/dd/yyyy");
        assert_eq!(resolved.datetime_format, "yyyy-mm-dd");
        assert!(!resolved.time_pickseconds);
    }
}
