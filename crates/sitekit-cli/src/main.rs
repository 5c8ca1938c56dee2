#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::uninlined_format_args)]

mod commands;
mod logging;

use clap::Parser;
use miette::{IntoDiagnostic, Result};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "sitekit")]
#[command(author, version, about = "Finalize front-end builds: render the HTML shell, copy static assets", long_about = None)]
struct Cli {
    /// Increase logging verbosity (-v for DEBUG, -vv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Emit JSON formatted output (stable, machine-readable)
    #[arg(long, global = true)]
    json: bool,

    /// Override the working directory
    #[arg(long, global = true, value_name = "PATH")]
    cwd: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Print version information
    Version,

    /// Run the finalize pipeline: clean (production only), copy assets, emit index.html
    Build {
        /// Production mode: the output directory is wiped before the build
        #[arg(long)]
        production: bool,

        /// Config file path (default: sitekit.json in the working directory)
        #[arg(long, value_name = "PATH")]
        config: Option<PathBuf>,
    },

    /// Render the HTML document for an emitted-files manifest and print it to stdout
    Render {
        /// Config file path (default: sitekit.json in the working directory)
        #[arg(long, value_name = "PATH")]
        config: Option<PathBuf>,

        /// JSON manifest of emitted files: {"js":[{"fileName":"..."}],"css":[...]}
        #[arg(long, value_name = "PATH")]
        files: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.json);

    let cwd = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir().into_diagnostic()?,
    };

    match cli.command {
        Commands::Version => commands::version::run(cli.json),
        Commands::Build { production, config } => {
            let span = tracing::info_span!("build", cwd = %cwd.display(), production);
            let _guard = span.enter();
            commands::build::run(&cwd, production, config, cli.json)
        }
        Commands::Render { config, files } => commands::render::run(&cwd, config, &files),
    }
}
