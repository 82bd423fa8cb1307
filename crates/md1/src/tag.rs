//! The `include_md1` template tag.
//!
//! Page templates call the tag once, usually in `<head>`, to pull in the theme:
//!
//! ```jinja
//! <head>
//!   {{ include_md1() }}
//! </head>
//! ```
//!
//! The same tag is reachable through the `MD1` namespace object as
//! `{{ MD1.include_md1() }}`. Output is marked safe, so it is not escaped even
//! in auto-escaped `.html` templates.

use std::sync::Arc;

use minijinja::value::{Object, Value};
use minijinja::{Environment, Error, ErrorKind, State};

use md1_render::html::Element;

/// Name of the namespace object registered in the template environment.
pub const TEMPLATE_NAMESPACE: &str = "MD1";

/// Name of the tag function.
pub const TAG_NAME: &str = "include_md1";

/// Icon font stylesheet, always included.
pub const MATERIAL_ICONS_URL: &str = "//fonts.googleapis.com/icon?family=Material+Icons";

/// Emits `<link>`/`<script>` includes for the theme assets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncludeTag {
    base_url: String,
    assets: Vec<String>,
}

impl IncludeTag {
    /// Creates a tag serving `assets` from `<static_url>/<static_folder>/`.
    pub fn new<I, S>(static_url: &str, static_folder: &str, assets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            base_url: format!("{}/{}", static_url.trim_end_matches('/'), static_folder),
            assets: assets.into_iter().map(Into::into).collect(),
        }
    }

    /// URL prefix of the assets, without trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn assets(&self) -> &[String] {
        &self.assets
    }

    /// Renders the includes. Assets that are neither `.js` nor `.css` are
    /// skipped.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for asset in &self.assets {
            let url = format!("{}/{}", self.base_url, asset);
            let include = match asset.rsplit('.').next() {
                Some("js") => Element::new("script")
                    .attr("type", "text/javascript")
                    .attr("src", url),
                Some("css") => Element::new("link")
                    .attr("rel", "stylesheet")
                    .attr("href", url)
                    .attr("type", "text/css"),
                _ => {
                    tracing::debug!(asset = %asset, "skipping asset with unknown type");
                    continue;
                }
            };
            out.push_str(&include.to_string());
        }
        let icons = Element::new("link")
            .attr("href", MATERIAL_ICONS_URL)
            .attr("rel", "stylesheet");
        out.push_str(&icons.to_string());
        out
    }

    /// Registers the tag function and the `MD1` namespace in `env`.
    pub fn register(&self, env: &mut Environment<'_>) {
        let tag = self.clone();
        env.add_function(TAG_NAME, move || Value::from_safe_string(tag.render()));
        env.add_global(
            TEMPLATE_NAMESPACE,
            Value::from_object(Namespace { tag: self.clone() }),
        );
    }
}

/// Template-side `MD1` object.
#[derive(Debug)]
struct Namespace {
    tag: IncludeTag,
}

impl Object for Namespace {
    fn call_method(
        self: &Arc<Self>,
        _state: &State<'_, '_>,
        method: &str,
        _args: &[Value],
    ) -> Result<Value, Error> {
        match method {
            TAG_NAME => Ok(Value::from_safe_string(self.tag.render())),
            _ => Err(Error::from(ErrorKind::UnknownMethod)),
        }
    }
}
