//! Build pipeline assembly and execution.
//!
//! Stages mirror the plugin chain of the original build: clean stale outputs
//! on production builds, copy static assets, emit the HTML shell. The pipeline
//! runs after the external bundler has emitted its chunks, so the clean keeps
//! those chunks in place for the html stage to reference. Compilation,
//! minification, serving, and live reload belong to the external bundler and
//! have no stages here.
//!
//! Assembly is a pure function of the build mode so the stage list for either
//! mode can be asserted without touching the filesystem.

mod clean;
mod copy;
mod html;

pub use clean::CleanStage;
pub use copy::CopyStage;
pub use html::HtmlStage;

use crate::config::{BuildConfig, BuildMode};
use crate::error::Error;
use serde::Serialize;
use std::path::PathBuf;

/// One step of the finalize pipeline.
pub trait Stage {
    fn name(&self) -> &'static str;

    /// Whether this stage runs for the given mode. Defaults to always.
    fn enabled(&self, mode: BuildMode) -> bool {
        let _ = mode;
        true
    }

    fn run(&self, ctx: &BuildContext) -> Result<StageReport, Error>;
}

/// Everything a stage needs to do its work.
#[derive(Debug, Clone)]
pub struct BuildContext {
    /// Project root; config paths resolve against it.
    pub root: PathBuf,
    pub mode: BuildMode,
    pub config: BuildConfig,
}

impl BuildContext {
    #[must_use]
    pub fn out_dir(&self) -> PathBuf {
        self.root.join(&self.config.out_dir)
    }

    #[must_use]
    pub fn template_path(&self) -> PathBuf {
        self.root.join(&self.config.template)
    }
}

/// What one stage produced.
#[derive(Debug, Clone, Serialize)]
pub struct StageReport {
    pub stage: String,
    /// Paths of files the stage wrote.
    pub outputs: Vec<String>,
}

/// Result of a full pipeline run.
#[derive(Debug, Serialize)]
pub struct BuildSummary {
    pub mode: BuildMode,
    pub stages: Vec<StageReport>,
}

/// Assemble the stage list for a build mode, in execution order.
#[must_use]
pub fn assemble(mode: BuildMode) -> Vec<Box<dyn Stage>> {
    let stages: Vec<Box<dyn Stage>> = vec![
        Box::new(CleanStage),
        Box::new(CopyStage),
        Box::new(HtmlStage),
    ];
    stages.into_iter().filter(|s| s.enabled(mode)).collect()
}

/// Run stages in order, stopping at the first failure.
pub fn run_pipeline(ctx: &BuildContext, stages: &[Box<dyn Stage>]) -> Result<BuildSummary, Error> {
    let mut reports = Vec::with_capacity(stages.len());
    for stage in stages {
        reports.push(stage.run(ctx)?);
    }
    Ok(BuildSummary {
        mode: ctx.mode,
        stages: reports,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::html::TagAttributes;
    use std::fs;
    use std::path::Path;
    use tempfile::tempdir;

    pub(crate) fn test_config(template: &str, out_dir: &str) -> BuildConfig {
        BuildConfig {
            template: template.into(),
            out_dir: out_dir.into(),
            public_path: String::new(),
            title: "Test".to_string(),
            meta: Vec::new(),
            attributes: TagAttributes::default(),
            copy: Vec::new(),
        }
    }

    pub(crate) fn test_context(root: &Path, mode: BuildMode) -> BuildContext {
        BuildContext {
            root: root.to_path_buf(),
            mode,
            config: test_config("index.html", "dist"),
        }
    }

    #[test]
    fn test_assemble_development_skips_clean() {
        let names: Vec<&str> = assemble(BuildMode::Development)
            .iter()
            .map(|s| s.name())
            .collect();
        assert_eq!(names, vec!["copy", "html"]);
    }

    #[test]
    fn test_assemble_production_includes_clean_first() {
        let names: Vec<&str> = assemble(BuildMode::Production)
            .iter()
            .map(|s| s.name())
            .collect();
        assert_eq!(names, vec!["clean", "copy", "html"]);
    }

    #[test]
    fn test_run_pipeline_end_to_end() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("index.html"),
            "<title>${title}</title>${metas}${links}${scripts}",
        )
        .unwrap();
        fs::create_dir(dir.path().join("dist")).unwrap();
        fs::write(dir.path().join("dist/bundle.js"), "code").unwrap();

        let ctx = test_context(dir.path(), BuildMode::Development);
        let stages = assemble(ctx.mode);
        let summary = run_pipeline(&ctx, &stages).unwrap();

        assert_eq!(summary.stages.len(), 2);
        let html = fs::read_to_string(dir.path().join("dist/index.html")).unwrap();
        assert!(html.contains("<title>Test</title>"));
        assert!(html.contains(r#"<script src="bundle.js"></script>"#));
    }

    #[test]
    fn test_production_pipeline_keeps_bundler_chunks() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("index.html"),
            "<title>${title}</title>${metas}${links}${scripts}",
        )
        .unwrap();
        fs::create_dir(dir.path().join("dist")).unwrap();
        fs::write(dir.path().join("dist/bundle.js"), "code").unwrap();
        fs::write(dir.path().join("dist/stale.txt"), "old").unwrap();

        let ctx = test_context(dir.path(), BuildMode::Production);
        let stages = assemble(ctx.mode);
        run_pipeline(&ctx, &stages).unwrap();

        // The clean must not eat the chunk the bundler just emitted
        assert!(dir.path().join("dist/bundle.js").exists());
        assert!(!dir.path().join("dist/stale.txt").exists());
        let html = fs::read_to_string(dir.path().join("dist/index.html")).unwrap();
        assert!(html.contains(r#"<script src="bundle.js"></script>"#));
    }

    #[test]
    fn test_run_pipeline_stops_on_first_error() {
        let dir = tempdir().unwrap();
        // No template on disk: the html stage must fail with TemplateLoad
        let ctx = test_context(dir.path(), BuildMode::Development);
        let stages = assemble(ctx.mode);
        let err = run_pipeline(&ctx, &stages).unwrap_err();
        assert!(matches!(err, Error::TemplateLoad { .. }));
    }
}
