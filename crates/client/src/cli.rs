//! clap command surface.

use anyhow::Result;
use clap::{Parser, Subcommand};
use pocket_core::{Condition, Die, RecordKey};

use crate::App;
use crate::commands;

/// Convert creatures into tabletop stats and manage a party of up to six.
#[derive(Parser, Debug)]
#[command(name = "pocket")]
#[command(version, long_about = None)]
pub struct Cli {
    /// Echo debug logs to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the tabletop conversion of a creature
    Convert {
        /// Creature id or name
        #[arg(value_parser = parse_key)]
        creature: RecordKey,
    },

    /// Browse the creature dataset
    Records {
        #[arg(long, default_value_t = 0)]
        offset: usize,
        #[arg(long, default_value_t = 20)]
        limit: usize,
    },

    /// Manage the party roster
    #[command(subcommand)]
    Party(PartyCommand),

    /// Roll a die and show recent results
    Roll {
        /// d4, d6, d8, d10, d12 or d20
        #[arg(value_parser = parse_die)]
        die: Die,
    },

    /// List personalities or conditions
    #[command(subcommand)]
    Catalog(CatalogCommand),
}

#[derive(Subcommand, Debug)]
pub enum PartyCommand {
    /// One line per party member
    List,

    /// Full sheet for one member
    Show { id: u32 },

    /// Add a creature to the party
    Add {
        /// Creature id or name
        #[arg(value_parser = parse_key)]
        creature: RecordKey,

        /// Personality name; drawn at random when omitted
        #[arg(long)]
        personality: Option<String>,
    },

    Remove { id: u32 },

    /// Add (or with a negative amount, remove) experience
    Xp {
        id: u32,
        #[arg(allow_hyphen_values = true)]
        amount: i64,
    },

    /// Set current HP (clamped to the maximum)
    Hp {
        id: u32,
        #[arg(allow_hyphen_values = true)]
        hp: i32,
    },

    #[command(subcommand)]
    Move(MoveCommand),

    #[command(subcommand)]
    Condition(ConditionCommand),

    /// Replace a member with its evolved form
    Evolve { id: u32 },
}

#[derive(Subcommand, Debug)]
pub enum MoveCommand {
    Add { id: u32, name: String },
    Remove { id: u32, name: String },
    /// Replace the whole selection (up to four moves)
    Set {
        id: u32,
        #[arg(num_args = 0..=4)]
        names: Vec<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConditionCommand {
    Add {
        id: u32,
        #[arg(value_parser = parse_condition)]
        condition: Condition,
    },
    Remove {
        id: u32,
        #[arg(value_parser = parse_condition)]
        condition: Condition,
    },
}

#[derive(Subcommand, Debug)]
pub enum CatalogCommand {
    Personalities,
    Conditions,
}

impl Command {
    /// Runs the command and returns its text output.
    pub fn execute(self, app: &App) -> Result<String> {
        match self {
            Command::Convert { creature } => commands::convert::run(app, &creature),
            Command::Records { offset, limit } => commands::convert::records(app, offset, limit),
            Command::Party(cmd) => commands::party::run(app, cmd),
            Command::Roll { die } => commands::roll::run(app, die),
            Command::Catalog(cmd) => Ok(commands::catalog::run(cmd)),
        }
    }
}

fn parse_key(s: &str) -> Result<RecordKey, String> {
    let key: RecordKey = match s.parse() {
        Ok(key) => key,
        Err(never) => match never {},
    };
    match &key {
        RecordKey::Name(name) if name.is_empty() => Err("creature name is empty".to_string()),
        _ => Ok(key),
    }
}

fn parse_die(s: &str) -> Result<Die, String> {
    s.parse()
        .map_err(|_| format!("unknown die '{s}' (expected d4, d6, d8, d10, d12 or d20)"))
}

fn parse_condition(s: &str) -> Result<Condition, String> {
    s.parse().map_err(|_| format!("unknown condition '{s}'"))
}
