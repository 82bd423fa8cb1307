//! Theme assets and their installation into the host's static folder.
//!
//! Assets are copied once: a file already present in the destination is never
//! overwritten, so a hand-edited copy survives restarts. The flip side is that
//! a truncated or corrupted copy is not detected either; delete it to have it
//! reinstalled on the next load.

use std::borrow::Cow;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::ExtensionError;

/// Files shipped with the theme, in include order.
pub const ASSETS: &[&str] = &["materialize.min.css", "materialize.min.js"];

/// Asset contents compiled into the crate.
const BUNDLED: &[(&str, &[u8])] = &[
    (
        "materialize.min.css",
        include_bytes!("../assets/materialize.min.css"),
    ),
    (
        "materialize.min.js",
        include_bytes!("../assets/materialize.min.js"),
    ),
];

/// Where asset contents are read from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AssetSource {
    /// The copies compiled into this crate.
    #[default]
    Bundled,
    /// Any folder holding files named as in [`ASSETS`].
    Dir(PathBuf),
}

impl AssetSource {
    /// Reads the contents of `asset`.
    ///
    /// # Errors
    ///
    /// [`ExtensionError::Io`] naming the source path, or the asset name for
    /// an asset that is not bundled.
    pub fn read(&self, asset: &str) -> Result<Cow<'static, [u8]>, ExtensionError> {
        match self {
            AssetSource::Bundled => BUNDLED
                .iter()
                .find(|(name, _)| *name == asset)
                .map(|(_, bytes)| Cow::Borrowed(*bytes))
                .ok_or_else(|| {
                    ExtensionError::io(
                        asset,
                        io::Error::new(io::ErrorKind::NotFound, "asset is not bundled"),
                    )
                }),
            AssetSource::Dir(dir) => {
                let src = dir.join(asset);
                fs::read(&src)
                    .map(Cow::Owned)
                    .map_err(|e| ExtensionError::io(&src, e))
            }
        }
    }
}

/// Outcome of an installation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstallReport {
    /// Whether the destination folder had to be created.
    pub created_folder: bool,
    /// Assets written in this pass.
    pub copied: Vec<String>,
    /// Assets already present and left untouched.
    pub kept: Vec<String>,
}

impl InstallReport {
    /// Whether the pass changed nothing on disk.
    pub fn is_noop(&self) -> bool {
        !self.created_folder && self.copied.is_empty()
    }
}

/// Creates `folder` if needed and writes every missing asset into it.
///
/// # Errors
///
/// Any I/O failure, including a missing source file, is returned with the
/// path involved. Assets written before the failure stay in place.
pub fn install_assets(
    folder: &Path,
    source: &AssetSource,
    assets: &[&str],
) -> Result<InstallReport, ExtensionError> {
    let mut report = InstallReport::default();

    if !folder.exists() {
        fs::create_dir_all(folder).map_err(|e| ExtensionError::io(folder, e))?;
        tracing::info!(folder = %folder.display(), "created asset folder");
        report.created_folder = true;
    }

    for asset in assets {
        let dest = folder.join(asset);
        if dest.exists() {
            tracing::debug!(asset, dest = %dest.display(), "asset present, keeping");
            report.kept.push(asset.to_string());
            continue;
        }
        let contents = source.read(asset)?;
        fs::write(&dest, &contents).map_err(|e| ExtensionError::io(&dest, e))?;
        tracing::info!(asset, dest = %dest.display(), bytes = contents.len(), "installed asset");
        report.copied.push(asset.to_string());
    }

    Ok(report)
}
