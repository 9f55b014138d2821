//! # formgen-cli
//!
//! Generate SwiftUI surfaces from Rust source files.
//!
//! ```bash
//! # Generate surfaces from the current directory
//! formgen generate
//!
//! # One file per surface, into a specific directory
//! formgen generate --output ./App/Generated --layout per-artifact
//!
//! # Regenerate on every save
//! formgen generate --watch
//!
//! # Preview without writing
//! formgen generate --dry-run
//!
//! # Write a commented formgen.toml
//! formgen init
//!
//! # Fail (exit code 2) if generated files are out of date
//! formgen validate
//! ```

use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use formgen_cli::{
    config::{CliArgs, Config, ConfigManager, Layout, CONFIG_FILENAME},
    error::{CliError, ParseError},
    logging,
    pipeline::{Pipeline, Stale},
    watcher::{FileWatcher, WatchEvent},
    writer::WriteOutcome,
};

#[derive(Parser)]
#[command(name = "formgen")]
#[command(author, version, about = "Generate SwiftUI surfaces from Rust structs", long_about = None)]
struct Cli {
    /// Log pipeline details to stderr (overridden by FORMGEN_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate SwiftUI sources from Rust source files
    Generate {
        /// Directory to scan for `#[derive(Surface)]` models
        #[arg(short, long, default_value = ".")]
        input: PathBuf,

        /// Where generated .swift files go
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output file name for the bundle layout
        #[arg(long)]
        file: Option<String>,

        /// How surfaces are split into files
        #[arg(long, value_enum)]
        layout: Option<Layout>,

        /// Write formgen-manifest.json next to the sources
        #[arg(long)]
        manifest: bool,

        /// Omit doc comments
        #[arg(long)]
        no_docs: bool,

        /// Regenerate whenever a Rust source changes
        #[arg(short, long)]
        watch: bool,

        /// Print what would be written without touching disk
        #[arg(long)]
        dry_run: bool,

        /// Path to formgen.toml
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Only scan files matching this glob
        #[arg(long)]
        filter: Option<String>,
    },

    /// Create a formgen configuration file
    Init {
        #[arg(short, long, default_value = CONFIG_FILENAME)]
        output: PathBuf,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Check that generated files are up to date
    Validate {
        /// Directory to scan for `#[derive(Surface)]` models
        #[arg(short, long, default_value = ".")]
        input: PathBuf,

        /// Output directory the files were generated into
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Path to formgen.toml
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_tracing(cli.verbose);

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "error:".red().bold(), e);
            ExitCode::from(e.exit_code())
        }
    }
}

fn run(command: Commands) -> Result<(), CliError> {
    match command {
        Commands::Generate {
            input,
            output,
            file,
            layout,
            manifest,
            no_docs,
            watch,
            dry_run,
            config,
            filter,
        } => {
            let args = CliArgs {
                output,
                output_file: file,
                layout,
                manifest: manifest.then_some(true),
                docs: no_docs.then_some(false),
                filter,
            };
            let config = load_config(config.as_deref(), &args)?;
            let pipeline = Pipeline::new(input, config);

            if watch {
                run_watch_mode(&pipeline, dry_run)
            } else {
                run_generate(&pipeline, dry_run)
            }
        }

        Commands::Init { output, force } => cmd_init(&output, force),

        Commands::Validate {
            input,
            output,
            config,
        } => {
            let args = CliArgs {
                output,
                ..Default::default()
            };
            let config = load_config(config.as_deref(), &args)?;
            cmd_validate(&Pipeline::new(input, config))
        }
    }
}

fn load_config(path: Option<&Path>, args: &CliArgs) -> Result<Config, CliError> {
    let config = ConfigManager::load(path)?;
    Ok(ConfigManager::merge_cli_args(config, args))
}

fn run_generate(pipeline: &Pipeline, dry_run: bool) -> Result<(), CliError> {
    let run = pipeline.run()?;
    report_parse_errors(&run.parse_errors);

    if run.output.is_empty() {
        println!(
            "{} no #[derive(Surface)] models in {} file(s) under {}",
            "!".yellow(),
            run.files_scanned,
            pipeline.input().display()
        );
        return Ok(());
    }

    println!(
        "{} {} surface(s) from {} model(s) in {} file(s)",
        "generated".green().bold(),
        run.output.artifact_count(),
        run.output.models.len(),
        run.files_scanned
    );

    for name in &run.output.unresolved {
        println!("{} `{}` is referenced but never generated", "!".yellow(), name);
    }

    for outcome in pipeline.write(&run.output, dry_run)? {
        match outcome {
            WriteOutcome::Written { path, bytes } => {
                println!("  {} {} ({} bytes)", "wrote".green(), path.display(), bytes);
            }
            WriteOutcome::Unchanged { path } => {
                println!("  {} {}", "same".dimmed(), path.display());
            }
            WriteOutcome::Planned { path, content } => {
                println!("  {} {}", "would write".yellow(), path.display());
                for line in content.lines() {
                    println!("    {}", line.dimmed());
                }
            }
        }
    }

    Ok(())
}

fn run_watch_mode(pipeline: &Pipeline, dry_run: bool) -> Result<(), CliError> {
    let (_debouncer, events) = FileWatcher::new(pipeline.input()).watch()?;
    println!(
        "{} {} (Ctrl+C to stop)",
        "watching".cyan().bold(),
        pipeline.input().display()
    );

    regenerate(pipeline, dry_run);
    while let Ok(event) = events.recv() {
        match event {
            WatchEvent::Changed(paths) => {
                for path in &paths {
                    println!("{} {}", "changed".cyan(), path.display());
                }
                regenerate(pipeline, dry_run);
            }
            WatchEvent::Failed(message) => println!("{} {}", "watch error:".red(), message),
        }
    }

    Ok(())
}

/// Generate, reporting failures instead of leaving watch mode.
fn regenerate(pipeline: &Pipeline, dry_run: bool) {
    if let Err(e) = run_generate(pipeline, dry_run) {
        println!("{} {}", "error:".red().bold(), e);
    }
}

fn cmd_init(output: &Path, force: bool) -> Result<(), CliError> {
    if output.exists() && !force {
        return Err(CliError::Validation(format!(
            "{} already exists (pass --force to replace it)",
            output.display()
        )));
    }

    std::fs::write(output, ConfigManager::default_config_content())?;
    println!("{} {}", "created".green().bold(), output.display());
    Ok(())
}

fn cmd_validate(pipeline: &Pipeline) -> Result<(), CliError> {
    let run = pipeline.run()?;
    report_parse_errors(&run.parse_errors);

    let stale = pipeline.stale_files(&run.output)?;
    if stale.is_empty() {
        println!("{} generated surfaces are up to date", "ok".green().bold());
        return Ok(());
    }

    for entry in &stale {
        let status = match entry {
            Stale::Missing(_) => "missing",
            Stale::Outdated(_) => "outdated",
        };
        println!("  {} {}", status.red(), entry.path().display());
    }

    Err(CliError::Validation(format!(
        "{} generated file(s) need `formgen generate`",
        stale.len()
    )))
}

fn report_parse_errors(errors: &[ParseError]) {
    for error in errors {
        println!("{} skipped {}", "!".yellow(), error);
    }
}
