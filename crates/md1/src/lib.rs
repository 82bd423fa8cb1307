//! # MD1 - Materialize Theme Extension
//!
//! `md1` plugs the [Materialize](https://materializecss.com) CSS framework into
//! a web application:
//!
//! - Installs the theme's CSS and JS into the application's static folder
//! - Registers an `include_md1` template tag that emits the `<link>` and
//!   `<script>` includes
//! - Provides [`Md1FormStyle`], a form style that renders fields with
//!   Materialize markup (floating labels, date/time pickers, enhanced selects)
//!
//! Form rendering lives in [`md1_render`] and is re-exported here.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use md1::{App, FieldDescriptor, FieldKind, Form, Md1, Md1Config};
//!
//! # fn main() -> Result<(), md1::ExtensionError> {
//! let mut app = App::new("./static");
//! let env = Md1::new(Md1Config::default()).on_load(&mut app)?;
//! println!("assets in {}", env.folder.display());
//!
//! app.add_template("layout.html", "<head>{{ include_md1() }}</head>")?;
//! let head = app.render("layout.html", ())?;
//!
//! let form = Form::new().field(
//!     FieldDescriptor::builder("active", FieldKind::Bool).value(true).build()?,
//! );
//! let body = app.render_form(&form)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Configuration
//!
//! | Key | Default | Meaning |
//! |-----|---------|---------|
//! | `set_as_default_style` | `true` | Install the form style as the host default |
//! | `static_folder` | `md1` | Folder under the static root for the assets |
//! | `date_format` | `dd mmm, yyyy` | Date picker display format |
//! | `datetime_format` | `dd mmm, yyyy` | Datetime picker display format |
//! | `time_pickseconds` | `true` | Whether time pickers edit seconds |

mod app;
pub mod assets;
mod config;
mod error;
mod extension;
pub mod tag;

pub use app::App;
pub use assets::{install_assets, AssetSource, InstallReport, ASSETS};
pub use config::{Md1Config, DEFAULT_STATIC_FOLDER};
pub use error::ExtensionError;
pub use extension::{Host, Md1, Md1Env, DEFAULT_STATIC_URL};
pub use tag::{IncludeTag, MATERIAL_ICONS_URL, TAG_NAME, TEMPLATE_NAMESPACE};

// Rendering (re-exported from md1-render)
pub use md1_render::{
    html, render_widget, FieldBuilder, FieldDescriptor, FieldKind, FieldValue, Form, FormPass,
    Md1FormStyle, RenderAttributes, RenderError, ResolvedAttributes, SelectOption, StyleConfig,
    Widget, WidgetFragment,
};
