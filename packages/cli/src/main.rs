mod commands;
mod config;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{convert, init, ConvertArgs, InitArgs};
use tracing::Level;

/// MTT - Generate TypeScript interfaces from model classes
#[derive(Parser, Debug)]
#[command(name = "mtt")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Initialize a new MTT project
    Init(InitArgs),

    /// Convert model files to TypeScript interfaces
    Convert(ConvertArgs),
}

fn main() {
    let cli = Cli::parse();

    let verbose = matches!(&cli.command, Command::Convert(args) if args.verbose);
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let result = std::env::current_dir()
        .map_err(anyhow::Error::from)
        .and_then(|cwd| {
            let cwd = cwd.display().to_string();
            match cli.command {
                Command::Init(args) => init(args, &cwd),
                Command::Convert(args) => convert(args, &cwd),
            }
        });

    if let Err(err) = result {
        eprintln!();
        eprintln!("{} {}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
