//! Command-line interface for course-planner.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **menu**: Interactive menu (the default when no command is given)
//! - **list**: Print every course in sorted order
//! - **show**: Print the title and prerequisites of one course
//!
//! ## Usage
//!
//! ```text
//! # Interactive menu reading courses.csv from the current directory
//! course-planner
//!
//! # Use a different data file
//! course-planner --catalog data/abet.csv menu
//!
//! # One-shot queries
//! course-planner list
//! course-planner show csci400
//!
//! # JSON output for scripting
//! course-planner show csci400 --format json
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub mod catalog;
pub mod format;
pub mod menu;

/// Data file used when `--catalog` is not given
pub const DEFAULT_CATALOG: &str = "courses.csv";

#[derive(Parser)]
#[command(name = "course-planner")]
#[command(version)]
#[command(about = "Load a course catalog and look up courses and their prerequisites")]
#[command(
    long_about = "course-planner reads a comma-delimited course file (id, title, prerequisite ids...) into memory.\n\nIt can print the full course list in sorted order or show the title and prerequisites of a single course, either from an interactive menu or as one-shot commands."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Course data file
    #[arg(
        short,
        long,
        global = true,
        env = "COURSE_PLANNER_CATALOG",
        default_value = DEFAULT_CATALOG
    )]
    pub catalog: PathBuf,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the interactive menu
    Menu,

    /// Print all courses in sorted order
    List,

    /// Show details of a specific course
    Show(catalog::ShowArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
