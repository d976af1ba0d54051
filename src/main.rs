//! # Dossier CLI (`dossier`)
//!
//! Look up people across a directory of JSON record files.
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `dossier shell` | Interactive lookup (default when no command is given) |
//! | `dossier search "<query>"` | One-shot lookup |
//! | `dossier sources` | List source files and how each one loaded |
//! | `dossier export` | Dump the normalized corpus as JSON |
//! | `dossier completions <shell>` | Print shell completions |
//!
//! ## Examples
//!
//! ```bash
//! # Interactive lookup over ./database
//! dossier
//!
//! # Full-name lookup against another directory
//! dossier --database /data/people search "Andi Saputra"
//!
//! # Nickname lookup, machine-readable
//! dossier search andi --json
//! ```

use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

use dossier::{config, export, logging, search_cmd, shell, sources};

const DEFAULT_CONFIG: &str = "./config/dossier.toml";

/// Dossier: look up people across semi-structured JSON record files.
///
/// Sources are read once at startup, their field names are normalized
/// onto a fixed schema, and queries are matched by full name (near-exact)
/// or nickname (fuzzy).
#[derive(Parser)]
#[command(
    name = "dossier",
    about = "Dossier: normalize JSON person records and look them up by name",
    version
)]
struct Cli {
    /// Path to configuration file (TOML).
    ///
    /// Defaults to `./config/dossier.toml`; if that file does not exist,
    /// built-in defaults are used.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Source directory, overriding `sources.root` from the config.
    #[arg(long, global = true)]
    database: Option<PathBuf>,

    /// Show debug diagnostics on stderr.
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Top-level CLI commands.
#[derive(Subcommand)]
enum Commands {
    /// Interactive lookup.
    ///
    /// Loads every source once, then reads one query per line. Type
    /// `exit`, `quit`, or `q` (or press Ctrl-C) to leave.
    Shell,

    /// Look up a single query and exit.
    ///
    /// A query containing whitespace is matched as a full name; a single
    /// word is matched as a nickname.
    Search {
        /// The name or nickname to look up.
        query: String,

        /// Print results as a JSON array instead of tables.
        #[arg(long)]
        json: bool,
    },

    /// List source files and their load status.
    Sources,

    /// Export the normalized corpus as JSON.
    Export {
        /// Write to this file instead of stdout.
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Print a shell completion script.
    Completions {
        /// Target shell.
        shell: clap_complete::Shell,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    // Commands that don't require config
    if let Some(Commands::Completions { shell }) = &cli.command {
        let mut cmd = Cli::command();
        clap_complete::generate(*shell, &mut cmd, "dossier", &mut std::io::stdout());
        return Ok(());
    }

    let mut cfg = match &cli.config {
        Some(path) => config::load_or_default(path, false)?,
        None => config::load_or_default(&PathBuf::from(DEFAULT_CONFIG), true)?,
    };
    if let Some(dir) = cli.database {
        cfg.sources.root = dir;
    }

    match cli.command.unwrap_or(Commands::Shell) {
        Commands::Shell => {
            shell::run_shell(&cfg).await?;
        }
        Commands::Search { query, json } => {
            search_cmd::run_search(&cfg, &query, json)?;
        }
        Commands::Sources => {
            sources::list_sources(&cfg)?;
        }
        Commands::Export { output } => {
            export::run_export(&cfg, output.as_deref())?;
        }
        Commands::Completions { .. } => {
            // Handled above (before config loading)
            unreachable!()
        }
    }

    Ok(())
}
