//! CLI commands for dupcheck

pub mod check;
pub mod config;
pub mod dispatch;
pub mod import;
pub mod init;
pub mod scores;
