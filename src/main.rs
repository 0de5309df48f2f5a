//! Lanai - Main entrypoint.
//!
//! Loads configuration and a word list, builds a trie and answers one query
//! against it.

use clap::{Parser, Subcommand};
use lanai_lib::config::{self, ConfigLoader, LanaiConfig, LogConfig};
use lanai_lib::data_structures::LanaiTrie;
use lanai_lib::error::{ErrorContext, ErrorReporter, LanaiError, LanaiResult, TracingErrorReporter};
use std::path::{Path, PathBuf};
use std::process;
use tracing::info;

/// Command line arguments for Lanai.
#[derive(Parser, Debug)]
#[clap(name = "lanai", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Word list to load, one word per line
    #[clap(short, long, value_parser)]
    words: Option<PathBuf>,

    /// Print results as JSON
    #[clap(long)]
    json: bool,

    /// Command to execute
    #[clap(subcommand)]
    command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// List every word
    Words,

    /// Check whether a word is present
    Search {
        /// Word to look up
        word: String,
    },

    /// List words starting with a prefix
    Suggest {
        /// Prefix to complete
        prefix: String,
    },

    /// List words within two edits of a word
    Spell {
        /// Possibly misspelled word
        word: String,
    },

    /// Print the structure of the trie
    Dump,

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Initialize the logging system.
fn init_logging(log: &LogConfig) -> LanaiResult<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_line_number(log.source_location)
        .with_file(log.source_location);

    let result = if log.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.pretty().finish())
    };

    result.map_err(|e| LanaiError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

/// Reads a word list, skipping blank lines and words the trie rejects.
fn load_words(trie: &mut LanaiTrie, path: &Path) -> LanaiResult<()> {
    let contents = std::fs::read_to_string(path)?;
    let words = contents
        .lines()
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| !line.is_empty());
    let inserted = trie.insert_all(words);

    info!("Loaded {} words from {:?}", inserted, path);
    Ok(())
}

fn print_words(words: &[String], json: bool) -> LanaiResult<()> {
    if json {
        println!("{}", serde_json::to_string(words)?);
    } else {
        for word in words {
            println!("{word}");
        }
    }
    Ok(())
}

fn run(args: Args, config: LanaiConfig) -> LanaiResult<()> {
    if let Command::GenConfig { output } = &args.command {
        info!("Generating default configuration");
        if let Some(parent) = output.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let toml = toml::to_string_pretty(&LanaiConfig::default())
            .map_err(|e| LanaiError::Custom(format!("Failed to serialize config: {e}")))?;
        std::fs::write(output, toml)?;

        info!("Default configuration written to {:?}", output);
        return Ok(());
    }

    if let Command::Validate = args.command {
        info!("Configuration validated successfully");
        return Ok(());
    }

    let mut trie = LanaiTrie::with_config(config.trie);
    if let Some(path) = &args.words {
        load_words(&mut trie, path)?;
    }

    match &args.command {
        Command::Words => print_words(&trie.get_all_words(), args.json),
        Command::Suggest { prefix } => print_words(&trie.auto_suggest(prefix), args.json),
        Command::Spell { word } => print_words(&trie.get_spelling_suggestions(word), args.json),
        Command::Search { word } => {
            let found = trie.search(word);
            if args.json {
                println!("{}", serde_json::to_string(&found)?);
            } else {
                println!("{found}");
            }
            Ok(())
        }
        Command::Dump => {
            info!("Dumping {} words in {} nodes", trie.len(), trie.node_count());
            print!("{trie}");
            Ok(())
        }
        Command::Validate | Command::GenConfig { .. } => Ok(()),
    }
}

/// Main entry point for the application.
fn main() {
    let args = Args::parse();
    let reporter = TracingErrorReporter;

    let loaded = ConfigLoader::new(args.config.as_deref(), config::ENV_PREFIX).load();

    // Logging falls back to defaults so configuration errors are still reported
    let log = loaded
        .as_ref()
        .map(|config| config.log.clone())
        .unwrap_or_default();
    if let Err(e) = init_logging(&log) {
        eprintln!("{e}");
        process::exit(1);
    }

    let config = match loaded {
        Ok(config) => config,
        Err(e) => {
            reporter.report(ErrorContext::new(e.into(), "config"));
            process::exit(1);
        }
    };

    if let Err(e) = run(args, config) {
        reporter.report(ErrorContext::new(e, "cli"));
        process::exit(1);
    }
}
