//! `sitekit render` command implementation.
//!
//! Renders the HTML document once for a bundler-provided manifest of emitted
//! files and prints it to stdout. This is the hook the external bundler
//! pipeline invokes after it finalizes its output chunks.

use miette::{IntoDiagnostic, Result};
use sitekit_core::config::{BuildConfig, CONFIG_FILE};
use sitekit_core::html::{EmittedFiles, RenderOptions, TemplateRenderer};
use std::path::{Path, PathBuf};

/// Run the render command.
pub fn run(cwd: &Path, config: Option<PathBuf>, files: &Path) -> Result<()> {
    let config_path = config.unwrap_or_else(|| cwd.join(CONFIG_FILE));
    let config = BuildConfig::load(&config_path).into_diagnostic()?;

    let raw = std::fs::read_to_string(files).into_diagnostic()?;
    let files: EmittedFiles = serde_json::from_str(&raw).into_diagnostic()?;

    let renderer = TemplateRenderer::new(cwd.join(&config.template));
    let options = RenderOptions {
        attributes: config.attributes,
        files,
        meta: config.meta,
        public_path: config.public_path,
        title: config.title,
    };

    let document = renderer.render(&options).into_diagnostic()?;
    print!("{document}");
    Ok(())
}
