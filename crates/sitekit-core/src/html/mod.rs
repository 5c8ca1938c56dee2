//! HTML shell rendering.
//!
//! Produces the final HTML document for a build: script, link, and meta tags
//! computed from the emitted bundle assets are substituted into an on-disk
//! template alongside the page title.
//!
//! ## Usage
//!
//! ```ignore
//! use sitekit_core::html::{RenderOptions, TemplateRenderer};
//!
//! let renderer = TemplateRenderer::new("src/index.html");
//! let document = renderer.render(&options)?;
//! std::fs::write("dist/index.html", document)?;
//! ```
//!
//! Rendering is a pure function of the template content and the options: the
//! renderer mutates nothing, performs exactly one file read per call, and
//! identical inputs produce byte-identical output.

mod attrs;
mod template;

pub use attrs::{AttrValue, AttributeSet, MetaEntry};

use crate::error::Error;
use serde::Deserialize;
use std::path::PathBuf;

/// One emitted output file, identified by name.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetDescriptor {
    pub file_name: String,
}

/// Emitted script and stylesheet files, grouped by kind.
///
/// Deserializes from the manifest shape bundlers hand over:
/// `{"js": [{"fileName": "bundle.js"}], "css": [{"fileName": "style.css"}]}`.
/// Either group may be absent.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct EmittedFiles {
    pub js: Vec<AssetDescriptor>,
    pub css: Vec<AssetDescriptor>,
}

/// Attribute sets applied uniformly to every emitted tag of each kind.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TagAttributes {
    pub script: AttributeSet,
    pub link: AttributeSet,
}

/// Inputs for one render call. Constructed fresh per build; never persisted.
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    pub attributes: TagAttributes,
    pub files: EmittedFiles,
    pub meta: Vec<MetaEntry>,
    /// Prefix prepended to every emitted asset URL; may be empty.
    pub public_path: String,
    /// Inserted verbatim into the template's title placeholder.
    pub title: String,
}

/// Renders the HTML document for a build.
///
/// The template is re-read on every call, so edits between builds are picked
/// up without restarting anything.
#[derive(Debug, Clone)]
pub struct TemplateRenderer {
    template_path: PathBuf,
}

impl TemplateRenderer {
    pub fn new(template_path: impl Into<PathBuf>) -> Self {
        Self {
            template_path: template_path.into(),
        }
    }

    /// Render the document: build the tag blocks, load the template, and
    /// substitute `${scripts}`, `${links}`, `${metas}`, and `${title}`.
    ///
    /// # Errors
    /// `TemplateLoad` if the template file is missing or unreadable;
    /// `TemplateSyntax` if it references anything outside the four names.
    pub fn render(&self, options: &RenderOptions) -> Result<String, Error> {
        let scripts = script_tags(
            &options.files.js,
            &options.attributes.script,
            &options.public_path,
        );
        let links = link_tags(
            &options.files.css,
            &options.attributes.link,
            &options.public_path,
        );
        let metas = meta_tags(&options.meta);

        let source =
            std::fs::read_to_string(&self.template_path).map_err(|source| Error::TemplateLoad {
                path: self.template_path.clone(),
                source,
            })?;

        template::substitute(
            &source,
            &[
                ("scripts", &scripts),
                ("links", &links),
                ("metas", &metas),
                ("title", &options.title),
            ],
        )
    }
}

fn script_tags(files: &[AssetDescriptor], attrs: &AttributeSet, public_path: &str) -> String {
    let attrs = attrs.to_html();
    files
        .iter()
        .map(|f| format!("<script src=\"{public_path}{}\"{attrs}></script>", f.file_name))
        .collect::<Vec<_>>()
        .join("\n")
}

fn link_tags(files: &[AssetDescriptor], attrs: &AttributeSet, public_path: &str) -> String {
    let attrs = attrs.to_html();
    files
        .iter()
        .map(|f| format!("<link href=\"{public_path}{}\" rel=\"stylesheet\"{attrs}>", f.file_name))
        .collect::<Vec<_>>()
        .join("\n")
}

fn meta_tags(meta: &[MetaEntry]) -> String {
    meta.iter()
        .map(|entry| format!("<meta{}>", entry.to_html()))
        .collect::<Vec<_>>()
        .join("\n")
}
