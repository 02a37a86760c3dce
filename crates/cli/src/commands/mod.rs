//! Command implementations

pub mod file;
pub mod init;
pub mod plan;
pub mod structure;
