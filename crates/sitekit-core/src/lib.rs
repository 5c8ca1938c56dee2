#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

//! Core library for sitekit: finalizes front-end builds.
//!
//! The external bundler compiles, minifies, and emits script/stylesheet chunks
//! into the output directory; sitekit then renders the HTML shell from a
//! template, copies static assets, and (for production builds) cleans the
//! output directory first.

pub mod assets;
pub mod config;
pub mod error;
pub mod html;
pub mod pipeline;
pub mod version;

pub use config::{BuildConfig, BuildMode};
pub use error::Error;
pub use html::{
    AssetDescriptor, AttrValue, AttributeSet, EmittedFiles, MetaEntry, RenderOptions,
    TagAttributes, TemplateRenderer,
};
pub use pipeline::{assemble, run_pipeline, BuildContext, BuildSummary, Stage, StageReport};
pub use version::VERSION;
