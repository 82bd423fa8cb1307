//! Built-in widget renderers.
//!
//! Each function is `(attributes, field, value) -> WidgetFragment`. The element
//! id defaults to the field name and can be overridden through
//! [`ResolvedAttributes::id`]. Date and time inputs use `<id>_cat` so the
//! picker's generated markup does not collide with the host's own ids.

use crate::attrs::ResolvedAttributes;
use crate::error::RenderError;
use crate::field::{FieldDescriptor, FieldKind, FieldValue};
use crate::html::{Element, Node};
use crate::scripts;

use super::WidgetFragment;

/// Label of the empty option that heads every select.
pub const PLACEHOLDER_OPTION: &str = "Choose your option";

fn element_id<'a>(attrs: &'a ResolvedAttributes, field: &'a FieldDescriptor) -> &'a str {
    attrs.id.as_deref().unwrap_or(field.name())
}

fn display(value: Option<&FieldValue>) -> String {
    value.map(ToString::to_string).unwrap_or_default()
}

/// Renders `field` with the widget for its kind.
pub fn render_widget(
    attrs: &ResolvedAttributes,
    field: &FieldDescriptor,
    value: Option<&FieldValue>,
) -> Result<WidgetFragment, RenderError> {
    match field.kind() {
        FieldKind::Bool => render_bool(attrs, field, value),
        FieldKind::Date => render_date(attrs, field, value),
        FieldKind::Time => render_time(attrs, field, value),
        FieldKind::DateTime => render_datetime(attrs, field, value),
        FieldKind::Select => render_select(attrs, field, value),
        FieldKind::Multi => render_multi(attrs, field, value),
        FieldKind::Text => render_text(attrs, field, value),
        FieldKind::String
        | FieldKind::Password
        | FieldKind::Int
        | FieldKind::Float
        | FieldKind::Decimal => render_input(attrs, field, value),
    }
}

/// Checkbox wrapped in a label, inside a `<p>` that carries the field id.
///
/// The checkbox value is the stringified field value, or `0` when unset. Only
/// a boolean `true` value renders the box checked; strings such as `"False"`
/// are submitted values, not state.
pub fn render_bool(
    attrs: &ResolvedAttributes,
    field: &FieldDescriptor,
    value: Option<&FieldValue>,
) -> Result<WidgetFragment, RenderError> {
    let fid = element_id(attrs, field);
    let checkbox_value = value
        .map(ToString::to_string)
        .unwrap_or_else(|| "0".to_string());

    let mut input = Element::new("input")
        .attr("name", field.name())
        .attr("type", "checkbox")
        .attr("id", fid)
        .attr("value", checkbox_value);
    if matches!(value, Some(FieldValue::Bool(true))) {
        input.set_attr("checked", "checked");
    }

    let label = Element::new("label")
        .child(input)
        .child(Element::new("span").child(field.name()));

    Ok(WidgetFragment::new(
        Element::new("p").child(label).attr("id", fid),
    ))
}

/// Text input bound to the Materialize date picker.
pub fn render_date(
    attrs: &ResolvedAttributes,
    field: &FieldDescriptor,
    value: Option<&FieldValue>,
) -> Result<WidgetFragment, RenderError> {
    date_picker(attrs, field, value, &attrs.date_format)
}

/// Datetime fields render as date pickers; the time component is not
/// editable. The display format comes from `datetime_format`.
pub fn render_datetime(
    attrs: &ResolvedAttributes,
    field: &FieldDescriptor,
    value: Option<&FieldValue>,
) -> Result<WidgetFragment, RenderError> {
    date_picker(attrs, field, value, &attrs.datetime_format)
}

fn date_picker(
    attrs: &ResolvedAttributes,
    field: &FieldDescriptor,
    value: Option<&FieldValue>,
    format: &str,
) -> Result<WidgetFragment, RenderError> {
    let fid = format!("{}_cat", element_id(attrs, field));
    let input = Element::new("input")
        .attr("name", field.name())
        .attr("type", "text")
        .attr("id", fid)
        .attr("class", "datepicker")
        .attr("value", display(value));

    Ok(WidgetFragment::new(input).with_script(scripts::datepicker(format)?))
}

/// Text input bound to the Materialize time picker.
///
/// With `time_pickseconds` off, `HH:MM:SS` values are shown as `HH:MM`;
/// `HH:MM` values are shown as they are.
pub fn render_time(
    attrs: &ResolvedAttributes,
    field: &FieldDescriptor,
    value: Option<&FieldValue>,
) -> Result<WidgetFragment, RenderError> {
    let fid = format!("{}_cat", element_id(attrs, field));
    let mut shown = display(value);
    if !attrs.time_pickseconds && !shown.is_empty() {
        shown = strip_seconds(field, &shown)?.to_string();
    }

    let input = Element::new("input")
        .attr("name", field.name())
        .attr("type", "text")
        .attr("id", fid.as_str())
        .attr("class", "timepicker")
        .attr("value", shown);

    Ok(WidgetFragment::new(input)
        .with_script(scripts::timepicker(&fid, attrs.time_pickseconds)?))
}

fn strip_seconds<'a>(field: &FieldDescriptor, value: &'a str) -> Result<&'a str, RenderError> {
    let minutes = value.get(..5).filter(|hm| is_clock(hm));
    match (value.len(), minutes) {
        (5, Some(hm)) => Ok(hm),
        (8, Some(hm)) if value.get(3..).is_some_and(is_clock) => Ok(hm),
        _ => Err(RenderError::invalid_value(
            field.name(),
            format!(
                "expected HH:MM or HH:MM:SS when seconds are hidden, got '{}'",
                value
            ),
        )),
    }
}

/// `NN:NN` with ASCII digits.
fn is_clock(part: &str) -> bool {
    let bytes = part.as_bytes();
    bytes.len() == 5
        && bytes[2] == b':'
        && [0, 1, 3, 4].iter().all(|&i| bytes[i].is_ascii_digit())
}

/// Single select with a placeholder option. Delegates to [`render_multi`]
/// when the field allows multiple selection.
pub fn render_select(
    attrs: &ResolvedAttributes,
    field: &FieldDescriptor,
    value: Option<&FieldValue>,
) -> Result<WidgetFragment, RenderError> {
    if !field.kind().is_select() {
        return Err(RenderError::configuration(field.name(), "options"));
    }
    if field.multiple() {
        return render_multi(attrs, field, value);
    }

    let fid = element_id(attrs, field);
    let select = Element::new("select")
        .children_from(option_items(field, value))
        .attr("name", field.name())
        .attr_opt("class", attrs.class.as_deref())
        .attr("id", fid);

    Ok(WidgetFragment::new(select).with_script(scripts::select(fid)?))
}

/// Select allowing multiple choices. List values select every matching key.
pub fn render_multi(
    attrs: &ResolvedAttributes,
    field: &FieldDescriptor,
    value: Option<&FieldValue>,
) -> Result<WidgetFragment, RenderError> {
    if !field.kind().is_select() {
        return Err(RenderError::configuration(field.name(), "options"));
    }

    let fid = element_id(attrs, field);
    let select = Element::new("select")
        .children_from(option_items(field, value))
        .attr("multiple", "multiple")
        .attr("name", field.name())
        .attr_opt("class", attrs.class.as_deref())
        .attr("id", fid);

    Ok(WidgetFragment::new(select).with_script(scripts::select_multi(fid)?))
}

fn option_items(field: &FieldDescriptor, value: Option<&FieldValue>) -> Vec<Node> {
    let mut items = Vec::with_capacity(field.options().len() + 1);
    items.push(
        Element::new("option")
            .child(PLACEHOLDER_OPTION)
            .attr("value", "")
            .into(),
    );
    for option in field.options() {
        let mut item = Element::new("option")
            .child(option.label.as_str())
            .attr("value", option.key.as_str());
        if value.is_some_and(|v| v.selects(&option.key)) {
            item.set_attr("selected", "selected");
        }
        items.push(item.into());
    }
    items
}

/// Plain `<input>` for string, numeric and password fields.
///
/// Password inputs never echo the current value.
pub fn render_input(
    attrs: &ResolvedAttributes,
    field: &FieldDescriptor,
    value: Option<&FieldValue>,
) -> Result<WidgetFragment, RenderError> {
    let (input_type, shown) = match field.kind() {
        FieldKind::Password => ("password", String::new()),
        _ => ("text", display(value)),
    };
    let class = attrs
        .class
        .as_deref()
        .unwrap_or_else(|| field.kind().as_str());

    let input = Element::new("input")
        .attr("type", input_type)
        .attr("name", field.name())
        .attr("value", shown)
        .attr("class", class)
        .attr("id", element_id(attrs, field));

    Ok(WidgetFragment::new(input))
}

/// Multi-line `<textarea>`.
pub fn render_text(
    attrs: &ResolvedAttributes,
    field: &FieldDescriptor,
    value: Option<&FieldValue>,
) -> Result<WidgetFragment, RenderError> {
    let class = attrs.class.as_deref().unwrap_or("materialize-textarea");
    let textarea = Element::new("textarea")
        .child(display(value))
        .attr("name", field.name())
        .attr("class", class)
        .attr("id", element_id(attrs, field));

    Ok(WidgetFragment::new(textarea))
}
