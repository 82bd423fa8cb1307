//! End-to-end tests for the Materialize form layout.

use md1_render::html::Element;
use md1_render::{
    FieldDescriptor, FieldKind, Form, Md1FormStyle, RenderAttributes, StyleConfig,
};

fn style() -> Md1FormStyle {
    Md1FormStyle::new(StyleConfig::default())
}

fn rows(form: &Element) -> Vec<&Element> {
    let panel = form.find("div").expect("card panel");
    assert_eq!(panel.class(), Some("card-panel"));
    panel
        .children()
        .iter()
        .filter_map(|node| node.as_element())
        .collect()
}

// ============================================================================
// Test: checkbox + select form
// ============================================================================

fn user_form() -> Form {
    Form::new()
        .field(
            FieldDescriptor::builder("active", FieldKind::Bool)
                .value(true)
                .build()
                .unwrap(),
        )
        .field(
            FieldDescriptor::builder("role", FieldKind::Select)
                .options([("a", "Admin"), ("u", "User")])
                .value("u")
                .build()
                .unwrap(),
        )
}

#[test]
fn user_form_has_one_row_per_field_then_submit() {
    let form = style().render(&user_form()).unwrap();
    let rows = rows(&form);
    assert_eq!(rows.len(), 3);
    assert!(rows.iter().all(|row| row.class() == Some("row")));

    assert_eq!(rows[0].find_all("input").len(), 1);
    assert!(rows[1].find("select").is_some());
    assert!(rows[2].find("button").is_some());
    assert_eq!(form.find_all("button").len(), 1);
}

#[test]
fn user_form_checkbox_row() {
    let form = style().render(&user_form()).unwrap();
    let row = rows(&form)[0].to_string();
    assert_eq!(
        row,
        concat!(
            r#"<div class="row"><div class="input-field col s12">"#,
            r#"<p id="active"><label>"#,
            r#"<input name="active" type="checkbox" id="active" value="True" checked="checked">"#,
            r#"<span>active</span></label></p>"#,
            r#"<label for="active">active</label>"#,
            "</div></div>"
        )
    );
}

#[test]
fn user_form_select_row() {
    let form = style().render(&user_form()).unwrap();
    let row = rows(&form)[1];

    let options = row.find_all("option");
    assert_eq!(options.len(), 3);
    assert_eq!(options[0].value(), Some(""));
    let selected: Vec<_> = options
        .iter()
        .filter(|o| o.get_attr("selected").is_some())
        .map(|o| o.to_string())
        .collect();
    assert_eq!(selected, vec![r#"<option value="u" selected="selected">User</option>"#]);

    let label = row.find("label").unwrap();
    assert_eq!(label.get_attr("for"), Some("role"));
    assert_eq!(label.class(), Some("active"));

    let html = row.to_string();
    assert!(html.ends_with("var elems = document.querySelectorAll('#role');\n        var instances = M.FormSelect.init(elems, {});\n      });\n</script></div>"));
}

// ============================================================================
// Test: errors, comments and labels
// ============================================================================

#[test]
fn error_field_gets_helper_and_invalid_classes() {
    let form = Form::new().field(
        FieldDescriptor::builder("title", FieldKind::String)
            .label("Title")
            .error("Cannot be empty")
            .comment("Shown on the card")
            .build()
            .unwrap(),
    );
    let html = style().render(&form).unwrap().to_string();
    assert!(html.contains(
        r#"<input type="text" name="title" value="" class="string invalid validate" id="title">"#
    ));
    assert!(html.contains(r#"<label for="title">Title</label>"#));
    assert!(html.contains(
        r#"<span class="helper-text" data-error="Cannot be empty" data-success="">Shown on the card</span>"#
    ));
}

#[test]
fn field_without_error_or_comment_has_no_helper() {
    let form = Form::new().field(
        FieldDescriptor::builder("title", FieldKind::String)
            .value("Hello")
            .build()
            .unwrap(),
    );
    let html = style().render(&form).unwrap().to_string();
    assert!(!html.contains("helper-text"));
    assert!(html.contains(r#"<label for="title" class="active">title</label>"#));
}

#[test]
fn date_row_label_targets_picker_input() {
    let form = Form::new().field(
        FieldDescriptor::builder("born", FieldKind::Date)
            .value("01 Apr, 2018")
            .build()
            .unwrap(),
    );
    let html = style().render(&form).unwrap().to_string();
    assert!(html.contains(r#"<label for="born_cat" class="active">born</label>"#));
    assert!(html.contains("format: 'dd mmm, yyyy',"));
}

// ============================================================================
// Test: configuration injection
// ============================================================================

#[test]
fn style_config_drives_widgets() {
    let style = Md1FormStyle::new(StyleConfig {
        date_format: "yyyy-mm-dd".into(),
        datetime_format: "yyyy-mm-dd".into(),
        time_pickseconds: false,
    });
    let form = Form::new()
        .field(
            FieldDescriptor::builder("day", FieldKind::Date)
                .build()
                .unwrap(),
        )
        .field(
            FieldDescriptor::builder("at", FieldKind::Time)
                .value("08:30:00")
                .build()
                .unwrap(),
        );
    let html = style.render(&form).unwrap().to_string();
    assert!(html.contains("format: 'yyyy-mm-dd',"));
    assert!(html.contains("useSeconds: false,"));
    assert!(html.contains(r#"value="08:30""#));
}

#[test]
fn form_overrides_beat_style_config() {
    let form = Form::new()
        .field(
            FieldDescriptor::builder("day", FieldKind::Date)
                .build()
                .unwrap(),
        )
        .render_attributes(RenderAttributes::new().date_format("mm/dd/yyyy"));
    let html = style().render(&form).unwrap().to_string();
    assert!(html.contains("format: 'mm/dd/yyyy',"));
}

#[test]
fn form_level_id_override_keeps_field_ids_unique() {
    let form = Form::new()
        .field(
            FieldDescriptor::builder("first", FieldKind::String)
                .build()
                .unwrap(),
        )
        .field(
            FieldDescriptor::builder("second", FieldKind::String)
                .build()
                .unwrap(),
        )
        .render_attributes(RenderAttributes::new().id("x").class("wide"));
    let html = style().render(&form).unwrap().to_string();
    assert!(!html.contains(r#"id="x""#));
    assert!(html.contains(r#"class="wide" id="first""#));
    assert!(html.contains(r#"class="wide" id="second""#));
}

#[test]
fn redisplayed_minutes_survive_hidden_seconds() {
    let style = Md1FormStyle::new(StyleConfig {
        time_pickseconds: false,
        ..StyleConfig::default()
    });
    let form = Form::new()
        .field(
            FieldDescriptor::builder("title", FieldKind::String)
                .error("Cannot be empty")
                .build()
                .unwrap(),
        )
        .field(
            FieldDescriptor::builder("start", FieldKind::Time)
                .value("13:45")
                .build()
                .unwrap(),
        );
    let html = style.render(&form).unwrap().to_string();
    assert!(html.contains(r#"class="timepicker" value="13:45""#));
    assert!(html.contains(r#"data-error="Cannot be empty""#));
}

#[test]
fn multi_flag_on_select_uses_multiple_select() {
    let form = Form::new().field(
        FieldDescriptor::builder("tags", FieldKind::Select)
            .options([("r", "Red"), ("g", "Green")])
            .multiple(true)
            .value(vec!["g"])
            .build()
            .unwrap(),
    );
    let html = style().render(&form).unwrap().to_string();
    assert!(html.contains(r#"<select multiple="multiple" name="tags" id="tags">"#));
    assert!(html.contains(r#"<option value="g" selected="selected">Green</option>"#));
    assert!(html.contains("M.FormSelect.init"));
}
