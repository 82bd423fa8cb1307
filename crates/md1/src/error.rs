//! Error types for loading the extension.

use std::io;
use std::path::PathBuf;

use md1_render::RenderError;

/// Errors raised while loading or using the extension.
///
/// Load errors are fatal: a host should abort startup rather than serve pages
/// without their assets.
#[derive(Debug, thiserror::Error)]
pub enum ExtensionError {
    /// Creating the asset folder or copying an asset failed.
    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The configuration could not be parsed or is inconsistent.
    #[error("configuration error: {0}")]
    Config(String),

    /// Registering or rendering a template failed.
    #[error("template error: {0}")]
    Template(String),

    /// A form or widget failed to render.
    #[error(transparent)]
    Render(#[from] RenderError),
}

impl ExtensionError {
    /// Wraps an I/O error with the path it concerns.
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<minijinja::Error> for ExtensionError {
    fn from(err: minijinja::Error) -> Self {
        ExtensionError::Template(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_names_path() {
        let err = ExtensionError::io(
            "/srv/static/md1",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        let msg = err.to_string();
        assert!(msg.contains("/srv/static/md1"));
        assert!(msg.contains("denied"));
    }

    #[test]
    fn test_render_error_is_transparent() {
        let err: ExtensionError = RenderError::configuration("role", "options").into();
        assert_eq!(
            err.to_string(),
            RenderError::configuration("role", "options").to_string()
        );
    }
}
