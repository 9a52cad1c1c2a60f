use std::{
    env, fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use clap::Parser;
use log::{debug, info};
use sunder::{config::Config, orchestrator::Orchestrator};

/// Rewrite barrel-module imports into per-symbol imports
#[derive(Parser, Debug)]
#[command(name = "sunder", version, about, long_about = None)]
struct Cli {
    /// ESTree JSON files to rewrite
    #[arg(required = true, value_name = "INPUT")]
    inputs: Vec<PathBuf>,

    /// Configuration file (TOML, or JSON babel-style options)
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Rewrite a single library with default options, ignoring config files
    #[arg(short, long, value_name = "NAME")]
    library: Option<String>,

    /// Output file for one input, output directory for several
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = load_config(&cli)?;
    let mut orchestrator = Orchestrator::new(&config)?;

    let several = cli.inputs.len() > 1;
    if several && let Some(dir) = &cli.output {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;
    }

    for input in &cli.inputs {
        let processed = orchestrator.process_file(input)?;
        match &cli.output {
            Some(output) => {
                let target = if several {
                    output_path_in(output, input)?
                } else {
                    output.clone()
                };
                fs::write(&target, &processed.code)
                    .with_context(|| format!("Failed to write {}", target.display()))?;
                info!("Wrote {} ({})", target.display(), processed.stats);
            }
            None => {
                let mut stdout = io::stdout().lock();
                stdout.write_all(processed.code.as_bytes())?;
                stdout.flush()?;
            }
        }
    }

    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn load_config(cli: &Cli) -> Result<Config> {
    if let Some(library) = &cli.library {
        debug!("Using ad-hoc configuration for {library}");
        return Ok(Config::single(library.clone()));
    }
    let cwd = env::current_dir().context("Failed to determine the working directory")?;
    let config = Config::discover(cli.config.as_deref(), &cwd)?;
    if config.libraries.is_empty() {
        bail!("no libraries configured: pass --library or provide a sunder.toml");
    }
    Ok(config)
}

/// `<dir>/<input stem>.js`
fn output_path_in(dir: &Path, input: &Path) -> Result<PathBuf> {
    let Some(stem) = input.file_stem() else {
        bail!("Input path has no file name: {}", input.display());
    };
    Ok(dir.join(stem).with_extension("js"))
}
