//! Command-line interface

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Mouse gesture recognizer - replay pointer recordings and test gesture tables
#[derive(Parser, Debug)]
#[command(name = "navi-gestures")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Settings JSON file (defaults are used when absent)
    #[arg(short, long, global = true)]
    pub settings: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run a recorded pointer event stream through the recognizer
    Replay {
        /// JSON array of pointer events
        #[arg(short, long)]
        input: PathBuf,

        /// Write the report here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Drop approximate matches farther than this (0.0 - 1.0)
        #[arg(long)]
        max_distance: Option<f64>,
    },

    /// Score a direction sequence such as `D U` or `D,R` against the gesture table
    Match {
        #[arg(required = true, num_args = 1..)]
        directions: Vec<String>,
    },

    /// Print the default settings document
    Defaults {
        /// Also write it to this file
        #[arg(short, long)]
        write: Option<PathBuf>,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
