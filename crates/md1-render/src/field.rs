//! Field descriptors: the read-only view of a form field that widgets render.
//!
//! Descriptors are built with [`FieldDescriptor::builder`], which checks that
//! the attributes required by the field's [`FieldKind`] are present. A select
//! field without options, for example, is rejected at construction instead of
//! failing half-way through a form render.
//!
//! ```rust
//! use md1_render::{FieldDescriptor, FieldKind};
//!
//! let role = FieldDescriptor::builder("role", FieldKind::Select)
//!     .options([("a", "Admin"), ("u", "User")])
//!     .value("u")
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(role.options().len(), 2);
//! assert!(FieldDescriptor::builder("role", FieldKind::Select).build().is_err());
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::RenderError;

/// The kind of a form field, which selects the widget used to render it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    String,
    Text,
    Password,
    Int,
    Float,
    Decimal,
    Bool,
    Date,
    Time,
    DateTime,
    Select,
    Multi,
}

impl FieldKind {
    /// Whether the kind renders a `<select>` and therefore needs options.
    pub fn is_select(self) -> bool {
        matches!(self, FieldKind::Select | FieldKind::Multi)
    }

    /// The lowercase name, also used as the default CSS class of plain inputs.
    pub fn as_str(self) -> &'static str {
        match self {
            FieldKind::String => "string",
            FieldKind::Text => "text",
            FieldKind::Password => "password",
            FieldKind::Int => "int",
            FieldKind::Float => "float",
            FieldKind::Decimal => "decimal",
            FieldKind::Bool => "bool",
            FieldKind::Date => "date",
            FieldKind::Time => "time",
            FieldKind::DateTime => "datetime",
            FieldKind::Select => "select",
            FieldKind::Multi => "multi",
        }
    }
}

/// A scalar (or list of scalars) held by a field.
///
/// Values are stringified the way the host's form parser reads them back:
/// booleans become `True`/`False`, whole floats keep one decimal place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    List(Vec<FieldValue>),
}

impl FieldValue {
    /// Whether the value stringifies to nothing.
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Text(s) => s.is_empty(),
            FieldValue::List(items) => items.is_empty(),
            _ => false,
        }
    }

    /// Whether an option keyed `key` should be marked selected.
    ///
    /// Scalars compare as strings; lists match if any item does.
    pub fn selects(&self, key: &str) -> bool {
        match self {
            FieldValue::List(items) => items.iter().any(|item| item.selects(key)),
            other => other.to_string() == key,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Bool(true) => f.write_str("True"),
            FieldValue::Bool(false) => f.write_str("False"),
            FieldValue::Int(n) => write!(f, "{}", n),
            FieldValue::Float(x) if x.is_finite() && x.fract() == 0.0 => write!(f, "{:.1}", x),
            FieldValue::Float(x) => write!(f, "{}", x),
            FieldValue::Text(s) => f.write_str(s),
            FieldValue::List(items) => {
                let parts: Vec<String> = items.iter().map(ToString::to_string).collect();
                f.write_str(&parts.join(","))
            }
        }
    }
}

impl From<bool> for FieldValue {
    fn from(v: bool) -> Self {
        FieldValue::Bool(v)
    }
}

impl From<i64> for FieldValue {
    fn from(v: i64) -> Self {
        FieldValue::Int(v)
    }
}

impl From<i32> for FieldValue {
    fn from(v: i32) -> Self {
        FieldValue::Int(v.into())
    }
}

impl From<f64> for FieldValue {
    fn from(v: f64) -> Self {
        FieldValue::Float(v)
    }
}

impl From<&str> for FieldValue {
    fn from(v: &str) -> Self {
        FieldValue::Text(v.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(v: String) -> Self {
        FieldValue::Text(v)
    }
}

impl<T: Into<FieldValue>> From<Vec<T>> for FieldValue {
    fn from(items: Vec<T>) -> Self {
        FieldValue::List(items.into_iter().map(Into::into).collect())
    }
}

/// One `(key, label)` entry of a select field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub key: String,
    pub label: String,
}

impl<K: Into<String>, L: Into<String>> From<(K, L)> for SelectOption {
    fn from((key, label): (K, L)) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
        }
    }
}

/// A validated form field.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDescriptor {
    name: String,
    kind: FieldKind,
    label: Option<String>,
    value: Option<FieldValue>,
    options: Option<Vec<SelectOption>>,
    multiple: bool,
    error: Option<String>,
    comment: Option<String>,
}

impl FieldDescriptor {
    /// Starts building a field named `name` of the given kind.
    pub fn builder(name: impl Into<String>, kind: FieldKind) -> FieldBuilder {
        FieldBuilder {
            inner: FieldDescriptor {
                name: name.into(),
                kind,
                label: None,
                value: None,
                options: None,
                multiple: false,
                error: None,
                comment: None,
            },
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    /// Display label; falls back to the field name.
    pub fn label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.name)
    }

    pub fn value(&self) -> Option<&FieldValue> {
        self.value.as_ref()
    }

    /// Select options. Empty for non-select kinds.
    pub fn options(&self) -> &[SelectOption] {
        self.options.as_deref().unwrap_or(&[])
    }

    /// Whether multiple selection is allowed.
    pub fn multiple(&self) -> bool {
        self.multiple || self.kind == FieldKind::Multi
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }
}

/// Builder for [`FieldDescriptor`].
#[derive(Debug, Clone)]
pub struct FieldBuilder {
    inner: FieldDescriptor,
}

impl FieldBuilder {
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.inner.label = Some(label.into());
        self
    }

    pub fn value(mut self, value: impl Into<FieldValue>) -> Self {
        self.inner.value = Some(value.into());
        self
    }

    /// Sets the value only when present.
    pub fn value_opt(mut self, value: Option<FieldValue>) -> Self {
        self.inner.value = value;
        self
    }

    pub fn options<I, O>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = O>,
        O: Into<SelectOption>,
    {
        self.inner.options = Some(options.into_iter().map(Into::into).collect());
        self
    }

    pub fn multiple(mut self, multiple: bool) -> Self {
        self.inner.multiple = multiple;
        self
    }

    pub fn error(mut self, error: impl Into<String>) -> Self {
        self.inner.error = Some(error.into());
        self
    }

    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.inner.comment = Some(comment.into());
        self
    }

    /// Validates the descriptor against its kind.
    ///
    /// # Errors
    ///
    /// [`RenderError::Configuration`] when the name is empty, a select-like
    /// field has no options, or `multiple` is set on a non-select field.
    pub fn build(self) -> Result<FieldDescriptor, RenderError> {
        let field = self.inner;
        if field.name.is_empty() {
            return Err(RenderError::configuration("<unnamed>", "name"));
        }
        if field.kind.is_select() && field.options.is_none() {
            return Err(RenderError::configuration(&field.name, "options"));
        }
        if field.multiple && !field.kind.is_select() {
            return Err(RenderError::configuration(&field.name, "multiple"));
        }
        Ok(field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bool_value_display() {
        assert_eq!(FieldValue::from(true).to_string(), "True");
        assert_eq!(FieldValue::from(false).to_string(), "False");
    }

    #[test]
    fn test_float_display_keeps_decimal() {
        assert_eq!(FieldValue::from(2.0).to_string(), "2.0");
        assert_eq!(FieldValue::from(2.5).to_string(), "2.5");
    }

    #[test]
    fn test_selects_compares_as_strings() {
        assert!(FieldValue::from(3).selects("3"));
        assert!(!FieldValue::from("3 ").selects("3"));
        assert!(FieldValue::from(vec!["a", "c"]).selects("c"));
        assert!(!FieldValue::from(vec!["a", "c"]).selects("b"));
    }

    #[test]
    fn test_select_without_options_is_rejected() {
        let err = FieldDescriptor::builder("role", FieldKind::Select)
            .build()
            .unwrap_err();
        assert_eq!(err, RenderError::configuration("role", "options"));
    }

    #[test]
    fn test_multiple_on_text_field_is_rejected() {
        let err = FieldDescriptor::builder("title", FieldKind::String)
            .multiple(true)
            .build()
            .unwrap_err();
        assert_eq!(err, RenderError::configuration("title", "multiple"));
    }

    #[test]
    fn test_empty_name_is_rejected() {
        assert!(FieldDescriptor::builder("", FieldKind::Bool).build().is_err());
    }

    #[test]
    fn test_label_falls_back_to_name() {
        let field = FieldDescriptor::builder("active", FieldKind::Bool)
            .build()
            .unwrap();
        assert_eq!(field.label(), "active");
    }

    #[test]
    fn test_multi_kind_is_multiple() {
        let field = FieldDescriptor::builder("tags", FieldKind::Multi)
            .options([("x", "X")])
            .build()
            .unwrap();
        assert!(field.multiple());
    }

    #[test]
    fn test_kind_deserializes_lowercase() {
        let kind: FieldKind = serde_json::from_str("\"datetime\"").unwrap();
        assert_eq!(kind, FieldKind::DateTime);
    }

    #[test]
    fn test_value_deserializes_untagged() {
        let value: FieldValue = serde_json::from_str("[\"a\", 1, true]").unwrap();
        assert_eq!(
            value,
            FieldValue::List(vec!["a".into(), 1.into(), true.into()])
        );
    }
}
