//! Output directory cleanup, production builds only.

use super::{BuildContext, Stage, StageReport};
use crate::assets::AssetKind;
use crate::config::BuildMode;
use crate::error::Error;
use std::path::Path;

/// Removes stale finalizer outputs from the output directory before a
/// production build: copied assets, a previous `index.html`, anything left
/// over from earlier runs.
///
/// sitekit runs after the external bundler, so scripts, stylesheets, and
/// sourcemaps found in the output directory are the current build's chunks,
/// not leftovers — the clean keeps them, and the html stage references them.
/// Development builds skip the stage entirely.
pub struct CleanStage;

/// Chunks the bundler just emitted; the clean must not eat these.
fn is_bundler_output(name: &str) -> bool {
    let ext = Path::new(name)
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("");
    AssetKind::from_extension(ext).is_some() || ext.eq_ignore_ascii_case("map")
}

impl Stage for CleanStage {
    fn name(&self) -> &'static str {
        "clean"
    }

    fn enabled(&self, mode: BuildMode) -> bool {
        mode.is_production()
    }

    fn run(&self, ctx: &BuildContext) -> Result<StageReport, Error> {
        let out_dir = ctx.out_dir();
        if !out_dir.exists() {
            std::fs::create_dir_all(&out_dir)?;
            return Ok(StageReport {
                stage: self.name().to_string(),
                outputs: Vec::new(),
            });
        }

        for entry in std::fs::read_dir(&out_dir)? {
            let entry = entry?;
            if is_bundler_output(&entry.file_name().to_string_lossy()) {
                continue;
            }
            if entry.file_type()?.is_dir() {
                std::fs::remove_dir_all(entry.path())?;
            } else {
                std::fs::remove_file(entry.path())?;
            }
        }

        Ok(StageReport {
            stage: self.name().to_string(),
            outputs: Vec::new(),
        })
    }
}
