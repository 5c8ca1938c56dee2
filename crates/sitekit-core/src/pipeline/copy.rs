//! Static asset copying.
//!
//! Each copy target is a glob over the project root plus a destination
//! directory inside the output directory. Matched files copy in by file name;
//! matched directories copy recursively. Dotfiles match.

use super::{BuildContext, Stage, StageReport};
use crate::error::Error;
use glob::{glob_with, MatchOptions};
use sitekit_util::fs::copy_dir_all;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Copies configured static assets (manifests, favicons, image trees) into the
/// output directory.
pub struct CopyStage;

impl Stage for CopyStage {
    fn name(&self) -> &'static str {
        "copy"
    }

    fn run(&self, ctx: &BuildContext) -> Result<StageReport, Error> {
        let mut outputs = Vec::new();
        let out_dir = ctx.out_dir();

        // Dotfiles must match: manifest/favicon style targets rely on it
        let options = MatchOptions {
            require_literal_leading_dot: false,
            ..MatchOptions::new()
        };

        for target in &ctx.config.copy {
            let pattern = ctx.root.join(&target.src);
            let pattern = pattern.to_string_lossy();
            let dest_dir = out_dir.join(&target.dest);

            let paths = glob_with(&pattern, options).map_err(|source| Error::CopyGlob {
                pattern: target.src.clone(),
                source,
            })?;

            let mut matched: Vec<PathBuf> = Vec::new();
            for entry in paths {
                matched.push(entry.map_err(|e| Error::Io(e.into_error()))?);
            }

            // A `**/*` pattern matches a directory and everything inside it.
            // The recursive copy of the directory already covers its contents,
            // so entries under a matched directory are skipped.
            let matched_dirs: HashSet<&Path> = matched
                .iter()
                .filter(|p| p.is_dir())
                .map(PathBuf::as_path)
                .collect();

            for path in &matched {
                if path.ancestors().skip(1).any(|a| matched_dirs.contains(a)) {
                    continue;
                }
                let Some(name) = path.file_name() else {
                    continue;
                };
                std::fs::create_dir_all(&dest_dir)?;
                let dest = dest_dir.join(name);

                if path.is_dir() {
                    copy_dir_all(path, &dest)?;
                } else {
                    std::fs::copy(path, &dest)?;
                }
                outputs.push(dest.display().to_string());
            }
        }

        Ok(StageReport {
            stage: self.name().to_string(),
            outputs,
        })
    }
}
