//! The MD1 extension and the host seam it plugs into.
//!
//! A host application exposes three things to the extension through the
//! [`Host`] trait: where its static files live, a slot for the default form
//! style, and a template environment to register the include tag in.
//! [`App`](crate::App) is a ready-made host backed by MiniJinja.
//!
//! Loading is meant to run once at startup:
//!
//! 1. Create `<static root>/<static_folder>` if missing
//! 2. Copy each bundled asset that is not already there
//! 3. Install [`Md1FormStyle`] as the default form style (if configured)
//! 4. Register the `include_md1` tag
//!
//! Any I/O failure aborts the load.

use std::path::{Path, PathBuf};

use md1_render::Md1FormStyle;

use crate::assets::{install_assets, AssetSource, InstallReport, ASSETS};
use crate::config::Md1Config;
use crate::error::ExtensionError;
use crate::tag::IncludeTag;

/// Default URL prefix under which a host serves its static root.
pub const DEFAULT_STATIC_URL: &str = "/static";

/// What the extension needs from the host application.
pub trait Host {
    /// Filesystem root of the application's static files.
    fn static_path(&self) -> &Path;

    /// URL prefix the static root is served under.
    fn static_url(&self) -> &str {
        DEFAULT_STATIC_URL
    }

    /// Installs `style` as the application-wide default form style.
    fn set_form_style(&mut self, style: Md1FormStyle);

    /// Makes `tag` available to page templates.
    fn add_template_extension(&mut self, tag: IncludeTag) -> Result<(), ExtensionError>;
}

/// State produced by a successful load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Md1Env {
    /// Folder the assets were installed into.
    pub folder: PathBuf,
    /// Assets served by the include tag.
    pub assets: Vec<String>,
    /// What the installation pass did.
    pub report: InstallReport,
}

/// The Materialize theme extension.
#[derive(Debug, Clone, Default)]
pub struct Md1 {
    config: Md1Config,
    source: AssetSource,
}

impl Md1 {
    pub fn new(config: Md1Config) -> Self {
        Self {
            config,
            source: AssetSource::default(),
        }
    }

    /// Reads assets from `source` instead of the bundled folder.
    pub fn with_asset_source(mut self, source: AssetSource) -> Self {
        self.source = source;
        self
    }

    pub fn config(&self) -> &Md1Config {
        &self.config
    }

    /// A form style built from this extension's configuration.
    ///
    /// Available whether or not the style was installed as the default.
    pub fn form_style(&self) -> Md1FormStyle {
        Md1FormStyle::new(self.config.style_config())
    }

    /// Loads the extension into `host`.
    ///
    /// Safe to call on every startup: existing assets are left untouched.
    pub fn on_load<H: Host + ?Sized>(&self, host: &mut H) -> Result<Md1Env, ExtensionError> {
        self.config.validate()?;

        let folder = host.static_path().join(&self.config.static_folder);
        let report = install_assets(&folder, &self.source, ASSETS)?;

        if self.config.set_as_default_style {
            host.set_form_style(self.form_style());
            tracing::debug!("installed md1 as default form style");
        }

        let tag = IncludeTag::new(
            host.static_url(),
            &self.config.static_folder,
            ASSETS.iter().copied(),
        );
        host.add_template_extension(tag)?;

        tracing::info!(
            folder = %folder.display(),
            copied = report.copied.len(),
            kept = report.kept.len(),
            "md1 loaded"
        );

        Ok(Md1Env {
            folder,
            assets: ASSETS.iter().map(|a| a.to_string()).collect(),
            report,
        })
    }
}
