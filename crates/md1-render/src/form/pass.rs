//! One render pass over a form.
//!
//! A pass moves through three states: [`FormPass::start`] opens an empty card
//! panel, [`FormPass::add_field`] appends one row per field in form order, and
//! [`FormPass::finish`] appends the submit row and wraps everything in the
//! `<form>` element. `finish` consumes the pass, so a pass renders exactly one
//! form.

use crate::attrs::ResolvedAttributes;
use crate::error::RenderError;
use crate::field::FieldDescriptor;
use crate::html::{Element, Node};
use crate::widget::WidgetFragment;

use super::{Form, Md1FormStyle};

/// Class of the container wrapping each field's control and label.
pub const FIELD_CONTAINER_CLASS: &str = "input-field col s12";
/// Class of the submit button.
pub const SUBMIT_CLASS: &str = "waves-effect waves-light btn";
/// Default class of the `<form>` element.
pub const DEFAULT_FORM_CLASS: &str = "col s12";

/// In-progress rendering of one form.
#[derive(Debug)]
pub struct FormPass<'a> {
    style: &'a Md1FormStyle,
    attrs: ResolvedAttributes,
    parent: Element,
}

impl<'a> FormPass<'a> {
    /// Opens a pass with an empty card panel.
    pub fn start(style: &'a Md1FormStyle, attrs: ResolvedAttributes) -> Self {
        Self {
            style,
            attrs,
            parent: Element::new("div").attr("class", "card-panel"),
        }
    }

    /// Renders `field` and appends its row.
    pub fn add_field(&mut self, field: &FieldDescriptor) -> Result<(), RenderError> {
        let WidgetFragment { mut main, scripts } =
            self.style.render_fragment(field, &self.attrs)?;

        let label = create_label(&main, field.label());
        let helper = match (field.error(), field.comment()) {
            (None, None) => None,
            (error, comment) => Some(create_helper(&mut main, error, comment)),
        };

        let mut container = Element::new("div").child(main).child(label);
        if let Some(helper) = helper {
            container.push(helper);
        }
        let container = container.attr("class", FIELD_CONTAINER_CLASS);

        let row = Element::new("div")
            .child(container)
            .children_from(scripts)
            .attr("class", "row");
        self.parent.push(row);
        Ok(())
    }

    /// Appends the submit row and wraps the panel in a `<form>`.
    pub fn finish(mut self, form: &Form) -> Element {
        let submit = Element::new("button")
            .child(form.submit.as_str())
            .attr("type", "submit")
            .attr("class", SUBMIT_CLASS);
        let buttons = Element::new("div").child(submit).attr("class", "col s12");
        self.parent
            .push(Element::new("div").child(buttons).attr("class", "row"));

        let hidden = form.hidden.iter().map(|(name, value)| {
            Node::from(
                Element::new("input")
                    .attr("type", "hidden")
                    .attr("name", name.as_str())
                    .attr("value", value.as_str()),
            )
        });

        Element::new("form")
            .attr(
                "class",
                form.class.as_deref().unwrap_or(DEFAULT_FORM_CLASS),
            )
            .attr_opt("action", form.action.as_deref())
            .attr("method", form.method.as_str())
            .attr_opt("enctype", form.enctype.as_deref())
            .child(self.parent)
            .children_from(hidden)
    }
}

/// Label for the main control.
///
/// Materialize floats labels over empty inputs; the `active` class keeps the
/// label raised for controls that already show something.
fn create_label(main: &Element, text: &str) -> Element {
    let active = main.class().is_some_and(|class| class.contains("switch"))
        || main.value().is_some_and(|value| !value.is_empty())
        || main.contains_any(&["select"]);

    Element::new("label")
        .child(text)
        .attr_opt("for", main.id())
        .attr_opt("class", active.then_some("active"))
}

fn create_helper(main: &mut Element, error: Option<&str>, comment: Option<&str>) -> Element {
    let mut helper = Element::new("span")
        .child(comment.unwrap_or(""))
        .attr("class", "helper-text");
    if let Some(error) = error {
        helper = helper.attr("data-error", error).attr("data-success", "");
        main.add_class("invalid");
        main.add_class("validate");
    }
    helper
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_active_for_value() {
        let main = Element::new("input").attr("id", "x").attr("value", "v");
        assert_eq!(
            create_label(&main, "X").to_string(),
            r#"<label for="x" class="active">X</label>"#
        );
    }

    #[test]
    fn test_label_inactive_for_empty_input() {
        let main = Element::new("input").attr("id", "x").attr("value", "");
        assert_eq!(create_label(&main, "X").to_string(), r#"<label for="x">X</label>"#);
    }

    #[test]
    fn test_label_active_for_select_and_switch() {
        let select = Element::new("select").attr("id", "s");
        assert_eq!(create_label(&select, "S").class(), Some("active"));

        let switch = Element::new("div").attr("id", "w").attr("class", "switch");
        assert_eq!(create_label(&switch, "W").class(), Some("active"));
    }

    #[test]
    fn test_helper_marks_control_invalid() {
        let mut main = Element::new("input").attr("class", "datepicker");
        let helper = create_helper(&mut main, Some("Bad date"), None);
        assert_eq!(main.class(), Some("datepicker invalid validate"));
        assert_eq!(
            helper.to_string(),
            r#"<span class="helper-text" data-error="Bad date" data-success=""></span>"#
        );
    }

    #[test]
    fn test_helper_comment_only() {
        let mut main = Element::new("input");
        let helper = create_helper(&mut main, None, Some("Optional"));
        assert_eq!(main.class(), None);
        assert_eq!(
            helper.to_string(),
            r#"<span class="helper-text">Optional</span>"#
        );
    }
}
