//! # ledger-cli
//!
//! Operator CLI: parses a subcommand into a [`ledger_core::ports::inbound::Payload`],
//! submits it to a `ledger-gateway` instance, and optionally polls for
//! settlement. Carries no business rules of its own.

pub mod cli;
pub mod client;
pub mod domain;

pub use cli::{Cli, Command};
pub use client::LedgerClient;
pub use domain::{CliConfig, CliError};
