// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the hirescore command-line interface.
//!
//! Three subcommands: `search` to run a query over a candidate file,
//! `inspect` to summarize a candidate file, and `tokens` to see exactly
//! what the tokenizer makes of a piece of text.

pub mod display;

use clap::{ArgAction, Parser, Subcommand};
use hirescore::{FilterSet, SearchMode};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "hirescore",
    about = "Keyword and cosine-similarity candidate search",
    version
)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace). RUST_LOG wins if set.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search a candidate file and display ranked results
    Search {
        /// JSON file: an array of candidates or {"candidates": [...]}
        candidates: PathBuf,

        /// Free-text query (may be empty when filters are given)
        #[arg(default_value = "")]
        query: String,

        /// How keyword and semantic scores combine
        #[arg(short, long, default_value = "both")]
        mode: SearchMode,

        #[command(flatten)]
        filters: FilterArgs,

        /// Maximum number of results to return
        #[arg(short, long)]
        limit: Option<usize>,

        /// Print results as JSON instead of a table
        #[arg(long)]
        json: bool,

        /// Scorer weights file (JSON). Falls back to $HIRESCORE_CONFIG, then defaults.
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Summarize a candidate file: skills, locations, missing fields
    Inspect {
        /// JSON file: an array of candidates or {"candidates": [...]}
        candidates: PathBuf,

        /// How many skills and locations to list
        #[arg(long, default_value = "10")]
        top: usize,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the tokens and term counts produced for a piece of text
    Tokens {
        /// Text to tokenize
        text: String,
    },
}

/// Structured filters, one flag per category. Each flag repeats.
#[derive(clap::Args, Debug, Default)]
pub struct FilterArgs {
    /// Location must contain this (any of)
    #[arg(long = "location", value_name = "TEXT")]
    pub locations: Vec<String>,

    /// Candidate must have this skill (all of)
    #[arg(long = "skill", value_name = "SKILL")]
    pub skills_include: Vec<String>,

    /// Candidate must not have this skill
    #[arg(long = "exclude-skill", value_name = "SKILL")]
    pub skills_exclude: Vec<String>,

    /// Current company must contain this (any of)
    #[arg(long = "company", value_name = "TEXT")]
    pub current_companies: Vec<String>,

    /// A past company must contain this (any of)
    #[arg(long = "past-company", value_name = "TEXT")]
    pub past_companies: Vec<String>,

    /// A school must contain this (any of)
    #[arg(long = "school", value_name = "TEXT")]
    pub schools: Vec<String>,
}

impl From<FilterArgs> for FilterSet {
    fn from(args: FilterArgs) -> Self {
        FilterSet {
            locations: args.locations,
            skills_include: args.skills_include,
            skills_exclude: args.skills_exclude,
            current_companies: args.current_companies,
            past_companies: args.past_companies,
            schools: args.schools,
        }
    }
}
