use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "fieldlog")]
#[command(about = "Baseline and daily logging for the 14-day field trial")]
pub struct Cli {
    /// Path to the config file
    #[arg(long, env = "FIELDLOG_CONFIG")]
    pub config: Option<PathBuf>,

    /// Directory holding the participant records (overrides config file)
    #[arg(long, env = "FIELDLOG_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Resume as this participant (overrides config file)
    #[arg(long, env = "FIELDLOG_PARTICIPANT")]
    pub participant: Option<String>,

    /// Emit logs as JSON
    #[arg(long)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the current phase, trial progress and last notice
    Status,
    /// List the questions a form currently shows
    Questions {
        /// "baseline" or "daily"
        questionnaire: String,
        /// Answers so far, to resolve conditional questions
        #[arg(long = "answer", value_name = "ID=VALUE")]
        answers: Vec<String>,
        /// Print the question definitions as JSON
        #[arg(long)]
        json: bool,
    },
    /// Submit the baseline profile
    Baseline {
        #[arg(long = "answer", value_name = "ID=VALUE")]
        answers: Vec<String>,
    },
    /// Log the next daily entry
    Entry {
        #[arg(long = "answer", value_name = "ID=VALUE")]
        answers: Vec<String>,
    },
    /// Replace the baseline answers, keeping the trial start date
    Amend {
        #[arg(long = "answer", value_name = "ID=VALUE")]
        answers: Vec<String>,
    },
    /// List logged entries, newest first
    History,
    /// Print the participant id and data directory
    Whoami,
}
