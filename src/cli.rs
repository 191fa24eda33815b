//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands;
use dirtidy::output::OutputMode;

/// dirtidy - merge, sort and date-stamp files
#[derive(Parser, Debug)]
#[command(
    name = "dirtidy",
    version,
    about = "Merge, sort and date-stamp files and journals",
    long_about = "Housekeeping for folders of files and plain-text journals.\n\n\
                  Merge directory trees, gather files by extension, file dated notes\n\
                  into year folders, and split chat logs into one file per day."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Config file to use instead of ~/.dirtidy/config.toml
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Merge INPUT into OUTPUT, deleting files OUTPUT already has
    Merge {
        /// Directory to empty out
        input: PathBuf,

        /// Directory to merge into (created if missing)
        output: PathBuf,
    },

    /// Move files into ROOT/<ext>/ folders by extension
    Organize {
        /// Folder to organize
        root: PathBuf,

        /// Extensions to gather, comma separated (e.g. md,txt,jpg)
        #[arg(short, long = "ext", value_delimiter = ',')]
        extensions: Vec<String>,

        /// Do not ask for confirmation
        #[arg(short, long)]
        yes: bool,
    },

    /// File and stamp journal notes
    Journal {
        #[command(subcommand)]
        action: JournalAction,
    },

    /// Split a chat log into one markdown file per date
    SplitLog {
        /// Log file to read
        input: PathBuf,

        /// Label written into every segment header
        #[arg(short, long)]
        user: Option<String>,

        /// Folder for the segment files
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Inspect configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Show version
    Version,
}

#[derive(Subcommand, Debug)]
pub enum JournalAction {
    /// Move notes named with YYYY_MM_DD into OUTPUT/YYYY/YYYY_MM_DD.ext
    Collect {
        /// Folder holding the notes
        input: PathBuf,

        /// Folder receiving year subfolders (created if missing)
        output: PathBuf,
    },

    /// Add a "# name" header to each note and rename it after its creation date
    Stamp {
        /// Folder to process recursively
        dir: PathBuf,

        /// Keep the original name as a prefix: name_YYYY_MM_DD.ext
        #[arg(long)]
        keep_name: bool,

        /// Do not ask for confirmation
        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,

    /// Print the config file location
    Path,

    /// Write a default config file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };
    let config_path = cli.config.as_deref();

    match cli.command {
        Some(Command::Merge { input, output }) => {
            commands::merge(&input, &output, config_path, output_mode)
        },
        Some(Command::Organize {
            root,
            extensions,
            yes,
        }) => commands::organize(&root, &extensions, yes, config_path, output_mode),
        Some(Command::Journal { action }) => match action {
            JournalAction::Collect { input, output } => {
                commands::collect(&input, &output, config_path, output_mode)
            },
            JournalAction::Stamp {
                dir,
                keep_name,
                yes,
            } => commands::stamp(&dir, keep_name, yes, config_path, output_mode),
        },
        Some(Command::SplitLog { input, user, out }) => {
            commands::split_log(&input, user, out, config_path, output_mode)
        },
        Some(Command::Config { action }) => commands::config_cmd(&action, config_path, output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("dirtidy v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("dirtidy v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'dirtidy --help' for usage");
            }
            Ok(())
        },
    }
}
