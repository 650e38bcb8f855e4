//! Command-line driver for the Swiss tournament store.
//!
//! Parses a subcommand, runs it against a [`swiss_tournament::TournamentManager`]
//! and renders the result as text or JSON.

pub mod commands;
pub mod config;
pub mod output;
