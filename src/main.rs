use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use vup::config::{self, CliOptions};
use vup::ui;

#[derive(clap::Parser)]
#[command(
    name = "vup",
    version,
    about = "Bump, commit and tag the version number recorded in your files"
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<PathBuf>,

    #[arg(long, global = true, help = "Preview what would happen without making changes")]
    dry_run: bool,

    #[arg(short, long, global = true, help = "Print diagnostic logging to stderr")]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Release the current version and open the next prerelease
    Bump {
        #[arg(value_name = "TYPE", help = "major, minor, or patch")]
        kind: String,

        #[arg(value_name = "FILE", help = "Files containing the version number")]
        files: Vec<PathBuf>,

        #[arg(long, help = "Command that must succeed before anything changes")]
        prehook: Option<String>,

        #[arg(long, help = "Command run after the release is tagged")]
        posthook: Option<String>,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    match args.command {
        Command::Bump {
            kind,
            files,
            prehook,
            posthook,
        } => {
            let options = config.resolve(CliOptions {
                files,
                prehook,
                posthook,
            });

            if let Err(e) = vup::bump(
                &options.files,
                &kind,
                options.prehook,
                options.posthook,
                args.dry_run,
            ) {
                ui::display_error(&e.to_string());
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("vup=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
