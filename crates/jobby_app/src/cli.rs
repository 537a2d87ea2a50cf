use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "jobby")]
#[command(about = "Browse job listings from the jobs API")]
pub struct Cli {
    /// Path to a RON config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Print resource state as JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Log debug output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Store a bearer token for later requests
    Login {
        #[arg(long)]
        token: String,
    },

    /// Forget the stored token
    Logout,

    /// Show the signed-in user's profile
    Profile,

    /// List jobs, optionally filtered
    Jobs {
        /// Employment type (FULLTIME, PARTTIME, FREELANCE, INTERNSHIP); repeatable
        #[arg(short = 't', long = "type")]
        employment_types: Vec<String>,

        /// Minimum package per annum, e.g. 1000000
        #[arg(short, long)]
        min_package: Option<u64>,

        /// Search term
        #[arg(short, long)]
        search: Option<String>,

        /// Keep a session open and read filter commands from stdin
        #[arg(short, long)]
        interactive: bool,
    },

    /// Show a job with its similar jobs
    Job {
        /// Job ID
        id: String,
    },
}
