use clap::{Parser, Subcommand};

use crate::config::OutputFormat;

#[derive(Parser)]
#[command(
    name = "wtt",
    version,
    about = "WhatTheTokens - estimate the energy impact of an LLM query",
    after_help = "NOTE: All figures are rough educational approximations based on a \
                  4 chars/token heuristic, a parameter-scaled per-token energy model, \
                  a datacenter PUE of 1.2 and a global average grid carbon intensity."
)]
pub struct Cli {
    /// Output format (overrides .wtt/config.toml)
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Estimate tokens, energy, CO2 and real-world equivalents for a query.
    ///
    /// Output tokens default to three times the input tokens. Without a
    /// model the estimate assumes an average ~7B parameter model.
    Estimate {
        /// The LLM query text
        query: String,
        /// Model id from `wtt models`
        #[arg(short, long)]
        model: Option<String>,
        /// Expected completion length in tokens
        #[arg(short, long)]
        output_tokens: Option<u64>,
    },

    /// Estimate the token count of a text
    Tokens {
        /// Text to measure
        text: String,
    },

    /// Show what an energy amount (in Wh) could power
    Compare {
        /// Energy in watt-hours
        #[arg(allow_negative_numbers = true)]
        energy_wh: f64,
    },

    /// List catalog models grouped by provider
    Models {
        /// Only show this provider (case-insensitive)
        #[arg(short, long)]
        provider: Option<String>,
    },

    /// List equivalence definitions
    Equivalences {
        /// Include disabled entries
        #[arg(long)]
        all: bool,
    },

    /// Start MCP server (stdio transport)
    Mcp,
}
