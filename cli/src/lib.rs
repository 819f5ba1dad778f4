//! Command-line access to an OmegaNews data directory.

/// Command-line arguments.
pub mod cli;
/// Subcommand implementations.
pub mod commands;
/// Data directory storage.
pub mod storage;
