//! Materialize form style.
//!
//! [`Md1FormStyle`] turns a [`Form`] into Materialize markup: a card panel
//! holding one row per field (control, floating label, optional helper text,
//! init scripts) and a submit row, wrapped in a `<form>` element.
//!
//! The style holds only immutable configuration, so one instance can be
//! shared across requests. Each call to [`Md1FormStyle::render`] runs a fresh
//! [`FormPass`].
//!
//! ```rust
//! use md1_render::{FieldDescriptor, FieldKind, Form, Md1FormStyle, StyleConfig};
//!
//! let style = Md1FormStyle::new(StyleConfig::default());
//! let form = Form::new()
//!     .field(
//!         FieldDescriptor::builder("active", FieldKind::Bool)
//!             .value(true)
//!             .build()
//!             .unwrap(),
//!     )
//!     .submit("Save");
//!
//! let html = style.render(&form).unwrap().to_string();
//! assert!(html.starts_with(r#"<form class="col s12" method="POST">"#));
//! assert!(html.contains(r#"value="True""#));
//! ```

mod pass;

pub use pass::{FormPass, DEFAULT_FORM_CLASS, FIELD_CONTAINER_CLASS, SUBMIT_CLASS};

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::attrs::{RenderAttributes, ResolvedAttributes, StyleConfig};
use crate::error::RenderError;
use crate::field::FieldDescriptor;
use crate::html::Element;
use crate::widget::{render_widget, Widget, WidgetFragment};

/// Default submit button text.
pub const DEFAULT_SUBMIT: &str = "Submit";

/// A form to render: fields in order plus form-level attributes.
#[derive(Debug, Clone)]
pub struct Form {
    fields: Vec<FieldDescriptor>,
    submit: String,
    class: Option<String>,
    action: Option<String>,
    method: String,
    enctype: Option<String>,
    hidden: Vec<(String, String)>,
    overrides: RenderAttributes,
}

impl Default for Form {
    fn default() -> Self {
        Self::new()
    }
}

impl Form {
    pub fn new() -> Self {
        Self {
            fields: Vec::new(),
            submit: DEFAULT_SUBMIT.to_string(),
            class: None,
            action: None,
            method: "POST".to_string(),
            enctype: None,
            hidden: Vec::new(),
            overrides: RenderAttributes::default(),
        }
    }

    /// Appends a field.
    pub fn field(mut self, field: FieldDescriptor) -> Self {
        self.fields.push(field);
        self
    }

    /// Appends several fields.
    pub fn fields(mut self, fields: impl IntoIterator<Item = FieldDescriptor>) -> Self {
        self.fields.extend(fields);
        self
    }

    /// Submit button text.
    pub fn submit(mut self, text: impl Into<String>) -> Self {
        self.submit = text.into();
        self
    }

    /// Class of the `<form>` element; defaults to [`DEFAULT_FORM_CLASS`].
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn action(mut self, action: impl Into<String>) -> Self {
        self.action = Some(action.into());
        self
    }

    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }

    pub fn enctype(mut self, enctype: impl Into<String>) -> Self {
        self.enctype = Some(enctype.into());
        self
    }

    /// Adds a hidden input (form keys, CSRF tokens) after the panel.
    pub fn hidden(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.hidden.push((name.into(), value.into()));
        self
    }

    /// Widget overrides applied to every field of this form.
    ///
    /// An `id` override is dropped: ids must stay unique per field. Use
    /// [`Md1FormStyle::render_field`] to render a single field under a
    /// custom id.
    pub fn render_attributes(mut self, mut overrides: RenderAttributes) -> Self {
        if let Some(id) = overrides.id.take() {
            tracing::warn!(id = %id, "ignoring form-level id override");
        }
        self.overrides = overrides;
        self
    }

    pub fn field_list(&self) -> &[FieldDescriptor] {
        &self.fields
    }
}

/// The Materialize form style.
#[derive(Clone, Default)]
pub struct Md1FormStyle {
    config: StyleConfig,
    widgets: HashMap<String, Arc<dyn Widget>>,
}

impl fmt::Debug for Md1FormStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut custom: Vec<&str> = self.widgets.keys().map(String::as_str).collect();
        custom.sort_unstable();
        f.debug_struct("Md1FormStyle")
            .field("config", &self.config)
            .field("widgets", &custom)
            .finish()
    }
}

impl Md1FormStyle {
    /// Creates a style with the given widget defaults.
    pub fn new(config: StyleConfig) -> Self {
        Self {
            config,
            widgets: HashMap::new(),
        }
    }

    pub fn config(&self) -> &StyleConfig {
        &self.config
    }

    /// Uses `widget` for the field named `field` instead of the built-in one.
    pub fn with_widget(mut self, field: impl Into<String>, widget: impl Widget + 'static) -> Self {
        self.widgets.insert(field.into(), Arc::new(widget));
        self
    }

    /// Renders a single field with call-site overrides.
    pub fn render_field(
        &self,
        field: &FieldDescriptor,
        overrides: &RenderAttributes,
    ) -> Result<WidgetFragment, RenderError> {
        self.render_fragment(field, &overrides.resolve(&self.config))
    }

    pub(crate) fn render_fragment(
        &self,
        field: &FieldDescriptor,
        attrs: &ResolvedAttributes,
    ) -> Result<WidgetFragment, RenderError> {
        match self.widgets.get(field.name()) {
            Some(widget) => widget.render(attrs, field, field.value()),
            None => render_widget(attrs, field, field.value()),
        }
    }

    /// Renders a whole form.
    ///
    /// # Errors
    ///
    /// Returns the first widget error; nothing is emitted for a failed form.
    pub fn render(&self, form: &Form) -> Result<Element, RenderError> {
        let mut pass = FormPass::start(self, form.overrides.resolve(&self.config));
        for field in &form.fields {
            pass.add_field(field)?;
        }
        Ok(pass.finish(form))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::{FieldKind, FieldValue};
    use crate::html::Node;

    #[test]
    fn test_empty_form_has_submit_row_only() {
        let style = Md1FormStyle::default();
        let html = style.render(&Form::new()).unwrap().to_string();
        assert_eq!(
            html,
            concat!(
                r#"<form class="col s12" method="POST">"#,
                r#"<div class="card-panel">"#,
                r#"<div class="row"><div class="col s12">"#,
                r#"<button type="submit" class="waves-effect waves-light btn">Submit</button>"#,
                "</div></div></div></form>"
            )
        );
    }

    #[test]
    fn test_form_attributes() {
        let style = Md1FormStyle::default();
        let form = Form::new()
            .class("col s6")
            .action("/users")
            .method("GET")
            .hidden("_csrf_token", "abc");
        let html = style.render(&form).unwrap().to_string();
        assert!(html.starts_with(r#"<form class="col s6" action="/users" method="GET">"#));
        assert!(html.ends_with(r#"<input type="hidden" name="_csrf_token" value="abc"></form>"#));
    }

    #[test]
    fn test_custom_widget_replaces_builtin() {
        let style = Md1FormStyle::default().with_widget(
            "color",
            |_: &ResolvedAttributes, field: &FieldDescriptor, _: Option<&FieldValue>| {
                Ok::<_, RenderError>(WidgetFragment::unpack(
                    field.name(),
                    vec![
                        Node::from(Element::new("input").attr("type", "color").attr("id", "color")),
                        Node::Raw("<script>pick()</script>".into()),
                    ],
                ))
            },
        );
        let field = FieldDescriptor::builder("color", FieldKind::String)
            .build()
            .unwrap();
        let fragment = style.render_field(&field, &RenderAttributes::new()).unwrap();
        assert_eq!(fragment.main.get_attr("type"), Some("color"));
        assert_eq!(fragment.scripts.len(), 1);
    }

    #[test]
    fn test_widget_error_aborts_form() {
        let style = Md1FormStyle::default();
        let form = Form::new()
            .field(
                FieldDescriptor::builder("start", FieldKind::Time)
                    .value("noon")
                    .build()
                    .unwrap(),
            )
            .render_attributes(RenderAttributes::new().time_pickseconds(false));
        assert!(style.render(&form).is_err());
    }

    #[test]
    fn test_style_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Md1FormStyle>();
    }
}
