//! A minimal MiniJinja-backed host.
//!
//! [`App`] implements [`Host`] for applications that render pages with
//! MiniJinja directly. It owns the template environment and remembers the
//! default form style the extension installs.
//!
//! ```rust,ignore
//! let mut app = App::new("./static");
//! Md1::new(Md1Config::default()).on_load(&mut app)?;
//!
//! app.add_template("layout.html", "<head>{{ include_md1() }}</head>")?;
//! let page = app.render("layout.html", minijinja::context! {})?;
//! ```

use std::path::{Path, PathBuf};

use minijinja::Environment;
use serde::Serialize;

use md1_render::{Form, Md1FormStyle};

use crate::error::ExtensionError;
use crate::extension::{Host, DEFAULT_STATIC_URL};
use crate::tag::IncludeTag;

/// Host application with a static root and a MiniJinja environment.
#[derive(Debug)]
pub struct App {
    static_path: PathBuf,
    static_url: String,
    env: Environment<'static>,
    form_style: Option<Md1FormStyle>,
    template_extensions: Vec<IncludeTag>,
}

impl App {
    /// Creates an app serving `static_path` under `/static`.
    pub fn new(static_path: impl Into<PathBuf>) -> Self {
        Self {
            static_path: static_path.into(),
            static_url: DEFAULT_STATIC_URL.to_string(),
            env: Environment::new(),
            form_style: None,
            template_extensions: Vec::new(),
        }
    }

    /// Serves the static root under a different URL prefix.
    pub fn with_static_url(mut self, url: impl Into<String>) -> Self {
        self.static_url = url.into();
        self
    }

    pub fn environment(&self) -> &Environment<'static> {
        &self.env
    }

    pub fn environment_mut(&mut self) -> &mut Environment<'static> {
        &mut self.env
    }

    /// The default form style, if an extension installed one.
    pub fn form_style(&self) -> Option<&Md1FormStyle> {
        self.form_style.as_ref()
    }

    /// Template extensions registered so far.
    pub fn template_extensions(&self) -> &[IncludeTag] {
        &self.template_extensions
    }

    /// Adds a named page template.
    pub fn add_template(&mut self, name: &str, source: &str) -> Result<(), ExtensionError> {
        self.env
            .add_template_owned(name.to_string(), source.to_string())?;
        Ok(())
    }

    /// Renders a named page template.
    pub fn render<S: Serialize>(&self, name: &str, ctx: S) -> Result<String, ExtensionError> {
        Ok(self.env.get_template(name)?.render(ctx)?)
    }

    /// Renders `form` with the default form style.
    ///
    /// # Errors
    ///
    /// [`ExtensionError::Config`] if no form style has been installed.
    pub fn render_form(&self, form: &Form) -> Result<String, ExtensionError> {
        let style = self.form_style.as_ref().ok_or_else(|| {
            ExtensionError::Config("no default form style installed".to_string())
        })?;
        Ok(style.render(form)?.to_string())
    }
}

impl Host for App {
    fn static_path(&self) -> &Path {
        &self.static_path
    }

    fn static_url(&self) -> &str {
        &self.static_url
    }

    fn set_form_style(&mut self, style: Md1FormStyle) {
        self.form_style = Some(style);
    }

    fn add_template_extension(&mut self, tag: IncludeTag) -> Result<(), ExtensionError> {
        tag.register(&mut self.env);
        self.template_extensions.push(tag);
        Ok(())
    }
}
