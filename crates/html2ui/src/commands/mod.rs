//! CLI subcommands.

pub mod build;
pub mod components;
pub mod convert;
pub mod init;
