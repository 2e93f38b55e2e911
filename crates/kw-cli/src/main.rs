//! Diagnostic CLI for the Klotzwelt interpreter.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "kw",
    about = "Klotzwelt — blocks-world command interpretation",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a scene file and report its shape
    Check {
        /// Scene JSON file
        #[arg(short, long)]
        world: PathBuf,
    },

    /// List the objects in a scene
    List {
        /// Scene JSON file
        #[arg(short, long)]
        world: PathBuf,

        /// Filter by form (e.g. ball, box)
        #[arg(short, long)]
        form: Option<String>,
    },

    /// Interpret parse candidates against a scene
    Interpret {
        /// Parse-candidates JSON file
        parses: PathBuf,

        /// Scene JSON file
        #[arg(short, long)]
        world: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Check { world } => commands::check::run(&world),
        Commands::List { world, form } => commands::list::run(&world, form.as_deref()),
        Commands::Interpret { parses, world } => commands::interpret::run(&parses, &world),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
