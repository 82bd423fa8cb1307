//! Inline initialization scripts for Materialize widgets.
//!
//! Templates are stored as `(name, content)` pairs and compiled once into a
//! shared MiniJinja environment. Names carry no file extension, so no
//! auto-escaping is applied: values are interpolated literally, which is what
//! the Materialize initializers expect.

use minijinja::{context, Environment};
use once_cell::sync::Lazy;

use crate::error::RenderError;
use crate::html::Node;

/// Date picker initializer. Binds every `.datepicker` on the page.
pub const DATEPICKER: &str = "md1/datepicker";
/// Time picker initializer, keyed by element id.
pub const TIMEPICKER: &str = "md1/timepicker";
/// Single select initializer, keyed by element id.
pub const SELECT: &str = "md1/select";
/// Multi select initializer, keyed by element id.
pub const SELECT_MULTI: &str = "md1/select-multi";

/// Script templates, `(name, content)`.
pub const SCRIPT_TEMPLATES: &[(&str, &str)] = &[
    (DATEPICKER, DATEPICKER_TEMPLATE),
    (TIMEPICKER, TIMEPICKER_TEMPLATE),
    (SELECT, SELECT_TEMPLATE),
    (SELECT_MULTI, SELECT_MULTI_TEMPLATE),
];

/// Variables: `format`.
const DATEPICKER_TEMPLATE: &str = r#"
<script type="text/javascript">
     document.addEventListener('DOMContentLoaded', function() {
        var options = {
            autoClose: true,
            firstDay: 1,
            format: '{{ format }}',
        }
        var elems = document.querySelectorAll('.datepicker');
        var instances = M.Datepicker.init(elems, options);
      });
</script>"#;

/// Variables: `divid`, `use_seconds` (`true`/`false`).
const TIMEPICKER_TEMPLATE: &str = r#"
<script type="text/javascript">
    document.addEventListener('DOMContentLoaded', function() {
        var options = {
            showClearBtn: true,
            useSeconds: {{ use_seconds }},
            autoClose: true,
            twelveHour: false
        }
        var elems = document.querySelectorAll('#{{ divid }}');
        var instances = M.Timepicker.init(elems, options);
      });
</script>"#;

/// Variables: `divid`.
const SELECT_TEMPLATE: &str = r#"
<script type="text/javascript">
    document.addEventListener('DOMContentLoaded', function() {
        var elems = document.querySelectorAll('#{{ divid }}');
        var instances = M.FormSelect.init(elems, {});
      });
</script>"#;

/// Variables: `divid`.
const SELECT_MULTI_TEMPLATE: &str = r#"
<script type="text/javascript">
    document.addEventListener('DOMContentLoaded', function() {
        var elems = document.querySelectorAll('#{{ divid }}');
        var instances = M.FormSelect.init(elems, {});
      });
</script>"#;

static ENV: Lazy<Environment<'static>> = Lazy::new(|| {
    let mut env = Environment::new();
    env.set_keep_trailing_newline(true);
    for (name, source) in SCRIPT_TEMPLATES {
        env.add_template(name, source)
            .expect("built-in script template");
    }
    env
});

fn render(name: &str, ctx: minijinja::Value) -> Result<Node, RenderError> {
    let tmpl = ENV.get_template(name)?;
    Ok(Node::Raw(tmpl.render(ctx)?))
}

/// Date picker script with the given display format.
pub fn datepicker(format: &str) -> Result<Node, RenderError> {
    render(DATEPICKER, context! { format })
}

/// Time picker script for element `divid`.
pub fn timepicker(divid: &str, use_seconds: bool) -> Result<Node, RenderError> {
    let use_seconds = if use_seconds { "true" } else { "false" };
    render(TIMEPICKER, context! { divid, use_seconds })
}

/// Select script for element `divid`.
pub fn select(divid: &str) -> Result<Node, RenderError> {
    render(SELECT, context! { divid })
}

/// Multi select script for element `divid`.
pub fn select_multi(divid: &str) -> Result<Node, RenderError> {
    render(SELECT_MULTI, context! { divid })
}
