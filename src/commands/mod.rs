//! CLI commands

pub mod new;
pub mod snippet;
