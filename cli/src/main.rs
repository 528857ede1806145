//! scrutin — command-line invoker for the campus election vote contract.
//!
//! Stands in for the surrounding application layer: opens the LMDB-backed
//! ledger at a data directory, runs one contract operation, and prints the
//! operation's JSON result to stdout.

mod config;
mod error;
mod logging;

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};

use scrutin_contract::VotingContract;
use scrutin_store_lmdb::LmdbEnvironment;
use scrutin_types::{Candidate, ElectionId, StudentId};

use crate::config::CliConfig;

#[derive(Parser)]
#[command(name = "scrutin", about = "Campus election vote ledger")]
struct Cli {
    /// Data directory for ledger storage.
    #[arg(long, env = "SCRUTIN_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Path to a TOML configuration file. File settings are the base;
    /// CLI flags and environment variables override them.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[arg(long, env = "SCRUTIN_LOG_LEVEL")]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create (or re-create) an election with status OPEN.
    InitElection {
        /// Election identifier (no ':' allowed).
        id: String,
        /// Human-readable election name.
        name: String,
    },
    /// Record a student's vote for a candidate.
    CastVote {
        election: String,
        student: String,
        candidate: String,
    },
    /// Show the vote a student cast in an election.
    GetVote { election: String, student: String },
    /// Tally per-candidate results for an election.
    Results { election: String },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let file_config = match cli.config {
        Some(ref path) => CliConfig::from_toml_file(path)?,
        None => CliConfig::default(),
    };
    let config = CliConfig {
        data_dir: cli.data_dir.clone().unwrap_or_else(|| file_config.data_dir.clone()),
        log_level: cli.log_level.clone().unwrap_or_else(|| file_config.log_level.clone()),
        ..file_config
    };

    logging::init_tracing(&config.log_level);
    tracing::debug!(data_dir = %config.data_dir.display(), "opening ledger");

    let env = LmdbEnvironment::open(&config.data_dir, config.map_size_bytes())?;
    let contract = VotingContract::new(Arc::new(env.state_store()));

    let output = match cli.command {
        Command::InitElection { id, name } => {
            contract.init_election(&ElectionId::new(id)?, &name)?
        }
        Command::CastVote {
            election,
            student,
            candidate,
        } => contract.cast_vote(
            &ElectionId::new(election)?,
            &StudentId::new(student)?,
            &Candidate::new(candidate),
        )?,
        Command::GetVote { election, student } => {
            contract.get_vote(&ElectionId::new(election)?, &StudentId::new(student)?)?
        }
        Command::Results { election } => contract.query_results(&ElectionId::new(election)?)?,
    };
    println!("{output}");

    Ok(())
}
