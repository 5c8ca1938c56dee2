//! Discovery of bundler-emitted assets in the output directory.
//!
//! The external bundler finalizes its output chunks before sitekit runs, so
//! the output directory's top level is the source of truth for what the HTML
//! shell must reference.

use crate::html::{AssetDescriptor, EmittedFiles};
use std::io;
use std::path::Path;
use walkdir::WalkDir;

/// Kinds of emitted files referenced by the HTML shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    Script,
    Stylesheet,
}

impl AssetKind {
    /// Classify a file extension. Anything else is not referenced by the shell.
    #[must_use]
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "js" | "mjs" => Some(Self::Script),
            "css" => Some(Self::Stylesheet),
            _ => None,
        }
    }
}

/// Scan the top level of the output directory for emitted scripts and stylesheets.
///
/// Entries are sorted by file name so the rendered HTML is stable across runs.
/// A missing output directory yields empty groups; the bundler may simply not
/// have run yet.
pub fn discover_assets(out_dir: &Path) -> io::Result<EmittedFiles> {
    let mut files = EmittedFiles::default();
    if !out_dir.exists() {
        return Ok(files);
    }

    for entry in WalkDir::new(out_dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(io::Error::from)?;
        if !entry.file_type().is_file() {
            continue;
        }
        let Some(name) = entry.file_name().to_str() else {
            continue;
        };
        let ext = Path::new(name)
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("");

        match AssetKind::from_extension(ext) {
            Some(AssetKind::Script) => files.js.push(AssetDescriptor {
                file_name: name.to_string(),
            }),
            Some(AssetKind::Stylesheet) => files.css.push(AssetDescriptor {
                file_name: name.to_string(),
            }),
            None => {}
        }
    }

    Ok(files)
}
