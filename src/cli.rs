/// CLI argument definitions for the `sqc` command.
use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Top-level CLI parser with a single subcommand selector.
#[derive(Parser)]
#[command(name = "sqc", version, about = "SQL complexity estimator")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score a SQL script's structural complexity
    #[command(long_about = "\
Score a SQL script's structural complexity.

Counts surface-level patterns in the script text and combines them with
fixed weights into a single score:

  Loc (30%)              non-blank lines after comment stripping
  Joins (30%)            JOIN clauses of any flavor
  Unique Tables (10%)    distinct identifiers after FROM/JOIN
  Virtual Tables (10%)   CTE openings and derived-table aliases
  Updates Deletes (20%)  UPDATE and DELETE keywords

This is a regex heuristic, not a SQL parser: dialects, string literals,
and quoted identifiers are not understood.")]
    Analyze {
        /// SQL file to analyze
        path: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
