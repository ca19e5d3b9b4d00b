use anyhow::Result;
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};

pub mod add_meeting;
pub mod init;
pub mod lookup;
pub mod serve;

use crate::core::AppConfig;

#[derive(Subcommand)]
enum Command {
    /// Create the db directory and tables
    Init {},
    /// Run the API server
    Serve {
        /// Set the server host address
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Set the server port
        #[arg(long, default_value = "2222")]
        port: String,
    },
    /// Show the meetings key and meetings for an identity key
    Lookup {
        #[arg(long)]
        firmandname: String,
    },
    /// Add a meeting between two identity keys
    AddMeeting {
        #[arg(long)]
        attendee1: String,
        #[arg(long)]
        attendee2: String,
        #[arg(long)]
        table: Option<i64>,
        /// Start time in RFC 3339, e.g. 2025-08-20T14:00:00Z
        #[arg(long)]
        start: DateTime<Utc>,
        /// End time in RFC 3339
        #[arg(long)]
        end: DateTime<Utc>,
    },
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

pub async fn run() -> Result<()> {
    let args = Cli::parse();
    let config = AppConfig::default();

    // Handle each sub command
    match args.command {
        Some(Command::Init {}) => {
            init::run(&config.db_path).await?;
        }
        Some(Command::Serve { host, port }) => {
            serve::run(host, port, config).await?;
        }
        Some(Command::Lookup { firmandname }) => {
            lookup::run(&firmandname, &config).await?;
        }
        Some(Command::AddMeeting {
            attendee1,
            attendee2,
            table,
            start,
            end,
        }) => {
            add_meeting::run(attendee1, attendee2, table, start, end, &config.db_path).await?;
        }
        None => {}
    }

    Ok(())
}
