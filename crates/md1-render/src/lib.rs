//! # MD1 Render - Materialize Form Widgets
//!
//! `md1-render` renders HTML form fields with the markup conventions of the
//! [Materialize](https://materializecss.com) CSS framework: floating labels,
//! helper text for errors, and the inline scripts that initialize date
//! pickers, time pickers and enhanced selects.
//!
//! This crate is the rendering half of the `md1` theme extension. It does no
//! I/O and holds no global state, so it can be used directly by any web
//! application that builds its forms in Rust.
//!
//! ## Core Concepts
//!
//! - [`FieldDescriptor`]: A validated, read-only view of one form field
//! - [`StyleConfig`]: Widget defaults (date formats, seconds on time pickers)
//! - [`RenderAttributes`]: Per-call overrides merged over the config
//! - [`WidgetFragment`]: The main control of a field plus its init scripts
//! - [`Md1FormStyle`]: Lays out a whole [`Form`] as Materialize rows
//!
//! ## Quick Start
//!
//! ```rust
//! use md1_render::{FieldDescriptor, FieldKind, Form, Md1FormStyle, StyleConfig};
//!
//! let style = Md1FormStyle::new(StyleConfig::default());
//!
//! let form = Form::new()
//!     .field(
//!         FieldDescriptor::builder("role", FieldKind::Select)
//!             .label("Role")
//!             .options([("a", "Admin"), ("u", "User")])
//!             .value("u")
//!             .build()
//!             .unwrap(),
//!     )
//!     .field(
//!         FieldDescriptor::builder("born", FieldKind::Date)
//!             .error("Enter a date")
//!             .build()
//!             .unwrap(),
//!     );
//!
//! let html = style.render(&form).unwrap().to_string();
//! assert!(html.contains(r#"<option value="u" selected="selected">User</option>"#));
//! assert!(html.contains(r#"class="datepicker invalid validate""#));
//! assert!(html.contains("M.Datepicker.init"));
//! ```
//!
//! ## Single Widgets
//!
//! ```rust
//! use md1_render::{FieldDescriptor, FieldKind, Md1FormStyle, RenderAttributes, StyleConfig};
//!
//! let style = Md1FormStyle::new(StyleConfig::default());
//! let field = FieldDescriptor::builder("start", FieldKind::Time)
//!     .value("13:45:30")
//!     .build()
//!     .unwrap();
//!
//! let fragment = style
//!     .render_field(&field, &RenderAttributes::new().time_pickseconds(false))
//!     .unwrap();
//! assert_eq!(fragment.main.value(), Some("13:45"));
//! ```

mod attrs;
mod error;
mod field;
pub mod form;
pub mod html;
pub mod scripts;
pub mod widget;

pub use attrs::{
    RenderAttributes, ResolvedAttributes, StyleConfig, DEFAULT_DATETIME_FORMAT,
    DEFAULT_DATE_FORMAT,
};
pub use error::RenderError;
pub use field::{FieldBuilder, FieldDescriptor, FieldKind, FieldValue, SelectOption};
pub use form::{Form, FormPass, Md1FormStyle, DEFAULT_SUBMIT};
pub use widget::{render_widget, Widget, WidgetFragment};
