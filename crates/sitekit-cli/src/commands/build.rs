//! `sitekit build` command implementation.
//!
//! Runs the finalize pipeline against the working directory: clean the output
//! directory (production only), copy static assets, emit `index.html`.

use miette::Result;
use serde::Serialize;
use sitekit_core::config::{BuildConfig, BuildMode, CONFIG_FILE};
use sitekit_core::pipeline::{assemble, run_pipeline, BuildContext, StageReport};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// JSON output for the build command.
#[derive(Serialize)]
struct BuildResultJson {
    ok: bool,
    mode: String,
    stages: Vec<StageReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    html_hash: Option<String>,
    duration_ms: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<BuildErrorJson>,
}

#[derive(Serialize)]
struct BuildErrorJson {
    code: String,
    message: String,
}

/// Run the build command.
pub fn run(cwd: &Path, production: bool, config: Option<PathBuf>, json: bool) -> Result<()> {
    let start = Instant::now();
    let mode = if production {
        BuildMode::Production
    } else {
        BuildMode::Development
    };
    let config_path = config.unwrap_or_else(|| cwd.join(CONFIG_FILE));

    let result = BuildConfig::load(&config_path).and_then(|config| {
        let ctx = BuildContext {
            root: cwd.to_path_buf(),
            mode,
            config,
        };
        let stages = assemble(mode);
        run_pipeline(&ctx, &stages)
    });

    let duration_ms = start.elapsed().as_millis() as u64;

    match result {
        Ok(summary) => {
            // Fingerprint of the rendered document, for stable-output checks
            let html_hash = summary
                .stages
                .iter()
                .find(|s| s.stage == "html")
                .and_then(|s| s.outputs.first())
                .and_then(|p| std::fs::read(p).ok())
                .map(|bytes| sitekit_util::hash::short_hash(&bytes));

            if json {
                let json_result = BuildResultJson {
                    ok: true,
                    mode: mode.as_str().to_string(),
                    stages: summary.stages,
                    html_hash,
                    duration_ms,
                    error: None,
                };
                println!("{}", serde_json::to_string(&json_result).unwrap());
            } else {
                for stage in &summary.stages {
                    if stage.outputs.is_empty() {
                        println!("  {}", stage.stage);
                    } else {
                        for output in &stage.outputs {
                            println!("  {} -> {}", stage.stage, output);
                        }
                    }
                }
                match html_hash {
                    Some(hash) => println!("  done ({mode}, {hash}, {duration_ms}ms)", mode = mode.as_str()),
                    None => println!("  done ({mode}, {duration_ms}ms)", mode = mode.as_str()),
                }
            }

            Ok(())
        }
        Err(e) => {
            if json {
                let json_result = BuildResultJson {
                    ok: false,
                    mode: mode.as_str().to_string(),
                    stages: Vec::new(),
                    html_hash: None,
                    duration_ms,
                    error: Some(BuildErrorJson {
                        code: e.code().to_string(),
                        message: e.to_string(),
                    }),
                };
                println!("{}", serde_json::to_string(&json_result).unwrap());
            } else {
                eprintln!("error: {}", e);
            }
            std::process::exit(1);
        }
    }
}
