mod analyze;
mod cli;

use clap::Parser;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze { path, json } => {
            if let Err(err) = analyze::run(&path, json) {
                eprintln!("error: {err}");
                std::process::exit(1);
            }
        }
    }
}
