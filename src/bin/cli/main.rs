//! CLI tool for browsing archives with vshell.

mod commands;
mod exit_codes;
mod output;

use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use std::path::PathBuf;

use exit_codes::ExitCode;

/// Shell-like navigation inside ZIP archives
#[derive(Parser)]
#[command(name = "vshell")]
#[command(author, version, about = "Shell-like navigation inside ZIP archives", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, short = 'f', value_enum, default_value = "human", global = true)]
    format: OutputFormat,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive session (alias: sh)
    #[command(alias = "sh")]
    Shell {
        #[command(flatten)]
        archive: ArchiveArgs,
    },

    /// Run the commands of a script file, one per line
    Run {
        #[command(flatten)]
        archive: ArchiveArgs,

        /// Script file to execute
        script: PathBuf,
    },

    /// Run a single command line
    Exec {
        #[command(flatten)]
        archive: ArchiveArgs,

        /// Command and its arguments, e.g. `head -n 3 docs/a.txt`
        #[arg(required = true, num_args = 1.., trailing_var_arg = true, allow_hyphen_values = true)]
        command: Vec<String>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Archive selection and session settings shared by all session commands.
#[derive(Args)]
pub struct ArchiveArgs {
    /// ZIP archive to open
    #[arg(env = "VSHELL_ARCHIVE")]
    pub archive: PathBuf,

    /// Lines printed by `head` without `-n`
    #[arg(long, default_value_t = vshell::ops::DEFAULT_HEAD_LINES)]
    pub head_lines: usize,

    /// Label printed by `pwd` (default: archive path without extension)
    #[arg(long)]
    pub label: Option<String>,

    /// Keep `ls` output in index order instead of sorting it
    #[arg(long)]
    pub unsorted: bool,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn main() {
    // Set up Ctrl+C handler
    ctrlc::set_handler(move || {
        eprintln!("\nInterrupted");
        std::process::exit(ExitCode::UserInterrupt.code());
    })
    .ok();

    let cli = Cli::parse();
    init_logging(cli.verbose);

    let exit_code = match &cli.command {
        Commands::Shell { archive } => commands::shell(archive, cli.format),

        Commands::Run { archive, script } => commands::run(archive, script, cli.format),

        Commands::Exec { archive, command } => commands::exec(archive, command, cli.format),

        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(*shell, &mut cmd, name, &mut std::io::stdout());
            ExitCode::Success
        }
    };

    std::process::exit(exit_code.code());
}
