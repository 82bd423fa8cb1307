//! Form widgets: one rendering function per field kind.
//!
//! Every widget returns a [`WidgetFragment`]: the main control the form style
//! decorates with a label and error text, plus the inline scripts that
//! initialize it on the client.
//!
//! ## Main Control
//!
//! The built-in widgets name their main control directly. For markup produced
//! elsewhere (custom [`Widget`] implementations that return a loose list of
//! nodes), [`WidgetFragment::unpack`] recovers it: script nodes are split off,
//! and the last element containing an `input` or `select` becomes the main
//! control.
//!
//! ## Custom Widgets
//!
//! ```rust
//! use md1_render::html::Element;
//! use md1_render::{FieldDescriptor, FieldValue, RenderError, ResolvedAttributes, Widget, WidgetFragment};
//!
//! struct ColorWidget;
//!
//! impl Widget for ColorWidget {
//!     fn render(
//!         &self,
//!         _attrs: &ResolvedAttributes,
//!         field: &FieldDescriptor,
//!         value: Option<&FieldValue>,
//!     ) -> Result<WidgetFragment, RenderError> {
//!         let input = Element::new("input")
//!             .attr("type", "color")
//!             .attr("name", field.name())
//!             .attr("id", field.name())
//!             .attr("value", value.map(ToString::to_string).unwrap_or_default());
//!         Ok(WidgetFragment::new(input))
//!     }
//! }
//! ```

mod render;

pub use render::{
    render_bool, render_date, render_datetime, render_input, render_multi, render_select,
    render_text, render_time, render_widget, PLACEHOLDER_OPTION,
};

use crate::attrs::ResolvedAttributes;
use crate::error::RenderError;
use crate::field::{FieldDescriptor, FieldValue};
use crate::html::{Element, Node};

/// Tags that identify a main control.
const MAIN_WIDGETS: &[&str] = &["select", "input"];

/// The output of rendering one field.
#[derive(Debug, Clone, PartialEq)]
pub struct WidgetFragment {
    /// The control placed in the form row.
    pub main: Element,
    /// Inline scripts emitted after the control's container.
    pub scripts: Vec<Node>,
}

impl WidgetFragment {
    /// A fragment with no scripts.
    pub fn new(main: Element) -> Self {
        Self {
            main,
            scripts: Vec::new(),
        }
    }

    /// Adds a script.
    pub fn with_script(mut self, script: Node) -> Self {
        self.scripts.push(script);
        self
    }

    /// Splits loose markup into a main control and scripts.
    ///
    /// When several elements qualify as the main control the last one wins.
    /// When none does, a warning is logged and the first element is used; if
    /// there are no elements at all, the whole markup is wrapped in a `div`.
    pub fn unpack(field: &str, nodes: Vec<Node>) -> Self {
        let mut main: Option<Element> = None;
        let mut fallback: Option<Element> = None;
        let mut scripts = Vec::new();
        let mut other = Vec::new();

        for node in nodes {
            if node.is_script() {
                scripts.push(node);
                continue;
            }
            match node {
                Node::Element(el) if el.contains_any(MAIN_WIDGETS) => {
                    if let Some(previous) = main.replace(el) {
                        other.push(Node::Element(previous));
                    }
                }
                Node::Element(el) if fallback.is_none() => fallback = Some(el),
                node => other.push(node),
            }
        }

        let main = match (main, fallback) {
            (Some(main), _) => main,
            (None, Some(first)) => {
                tracing::warn!(field, "no input or select in widget markup, using first element");
                first
            }
            (None, None) => {
                tracing::warn!(field, "widget produced no elements, wrapping markup");
                Element::new("div").children_from(other.drain(..))
            }
        };

        if !other.is_empty() {
            tracing::debug!(field, dropped = other.len(), "ignoring extra widget nodes");
        }

        Self { main, scripts }
    }
}

/// A renderer for one field, used in place of the built-in widget for its kind.
pub trait Widget: Send + Sync {
    /// Renders `field` with the current `value`.
    fn render(
        &self,
        attrs: &ResolvedAttributes,
        field: &FieldDescriptor,
        value: Option<&FieldValue>,
    ) -> Result<WidgetFragment, RenderError>;
}

impl<F> Widget for F
where
    F: Fn(&ResolvedAttributes, &FieldDescriptor, Option<&FieldValue>) -> Result<WidgetFragment, RenderError>
        + Send
        + Sync,
{
    fn render(
        &self,
        attrs: &ResolvedAttributes,
        field: &FieldDescriptor,
        value: Option<&FieldValue>,
    ) -> Result<WidgetFragment, RenderError> {
        self(attrs, field, value)
    }
}
