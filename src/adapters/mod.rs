//! Adapters Layer - External System Implementations
//!
//! This module contains implementations of the port traits:
//! - Conveyor: swap aggregator API client
//! - CLI: Command-line interface handlers

pub mod conveyor;
pub mod cli;

pub use conveyor::ConveyorClient;
pub use cli::CliApp;
