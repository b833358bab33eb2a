//! CLI command implementations for pkg-scaffold.
//!
//! Each module corresponds to a subcommand (`pkg-scaffold <command>`).

pub mod check;
pub mod generate;
pub mod init;
