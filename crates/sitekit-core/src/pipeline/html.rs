//! HTML shell emission.

use super::{BuildContext, Stage, StageReport};
use crate::assets::discover_assets;
use crate::error::Error;
use crate::html::{RenderOptions, TemplateRenderer};
use sitekit_util::fs::atomic_write;

/// Renders `index.html` from the template and the assets already emitted into
/// the output directory.
pub struct HtmlStage;

impl Stage for HtmlStage {
    fn name(&self) -> &'static str {
        "html"
    }

    fn run(&self, ctx: &BuildContext) -> Result<StageReport, Error> {
        let out_dir = ctx.out_dir();
        let files = discover_assets(&out_dir)?;

        let renderer = TemplateRenderer::new(ctx.template_path());
        let options = RenderOptions {
            attributes: ctx.config.attributes.clone(),
            files,
            meta: ctx.config.meta.clone(),
            public_path: ctx.config.public_path.clone(),
            title: ctx.config.title.clone(),
        };
        let document = renderer.render(&options)?;

        std::fs::create_dir_all(&out_dir)?;
        let dest = out_dir.join("index.html");
        atomic_write(&dest, document.as_bytes())?;

        Ok(StageReport {
            stage: self.name().to_string(),
            outputs: vec![dest.display().to_string()],
        })
    }
}
