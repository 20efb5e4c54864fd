//! locfmt CLI entry point.
//!
//! Provides command-line tools for post-processing gettext catalogs:
//! - `locfmt process` - Resolve name and plurality tokens in place
//! - `locfmt check` - Report tokens that resolve through a fallback
//! - `locfmt eval` - Resolve a single template string

mod commands;
mod output;

use std::io;
use std::process::exit;

use clap::{Parser, Subcommand, ValueEnum};
use commands::{run_check, run_eval, run_process, CheckArgs, EvalArgs, ProcessArgs};
use locfmt::names::{PLURAL_PREFIX, SINGULAR_PREFIX};
use locfmt::Namespaces;
use tracing_subscriber::EnvFilter;

/// Name and plurality token resolver for gettext catalogs.
#[derive(Debug, Parser)]
#[command(name = "locfmt")]
#[command(about = "Name and plurality token resolver for gettext catalogs", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Color output control
    #[arg(long, value_enum, default_value_t = ColorWhen::Auto, global = true)]
    pub color: ColorWhen,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Context prefix of singular name definitions
    #[arg(long, env = "LOCFMT_NAMES_PREFIX", default_value = SINGULAR_PREFIX, global = true)]
    pub names_prefix: String,

    /// Context prefix of plural name definitions
    #[arg(long, env = "LOCFMT_PLURAL_PREFIX", default_value = PLURAL_PREFIX, global = true)]
    pub plural_prefix: String,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    fn namespaces(&self) -> Namespaces {
        Namespaces::builder()
            .singular(self.names_prefix.as_str())
            .plural(self.plural_prefix.as_str())
            .build()
    }
}

/// When to use colored output.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Resolve tokens in a catalog, keeping a backup of the original
    Process(ProcessArgs),
    /// Report unknown names and out-of-range plurality indices
    Check(CheckArgs),
    /// Resolve a single template string
    Eval(EvalArgs),
}

/// Set up color output based on user preference.
fn setup_colors(color_when: ColorWhen) {
    match color_when {
        ColorWhen::Auto => {
            // owo-colors checks TTY, NO_COLOR and FORCE_COLOR
        }
        ColorWhen::Always => {
            owo_colors::set_override(true);
        }
        ColorWhen::Never => {
            owo_colors::set_override(false);
        }
    }
}

/// Log to stderr. `RUST_LOG` takes precedence over `--verbose`.
fn setup_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    setup_colors(cli.color);
    setup_logging(cli.verbose);

    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .build(),
        )
    }))?;

    let namespaces = cli.namespaces();
    let result = match cli.command {
        Commands::Process(args) => run_process(args, &namespaces),
        Commands::Check(args) => run_check(args, &namespaces),
        Commands::Eval(args) => run_eval(args, &namespaces),
    };

    match result {
        Ok(code) => exit(code),
        Err(e) => {
            eprintln!("{:?}", e);
            exit(exitcode::SOFTWARE);
        }
    }
}
