//! CLI commands for galaxy

pub mod account;
pub mod constellation;
pub mod discover;
pub mod dispatch;
pub mod format;
pub mod idea;
pub mod init;
pub mod keywords;
pub mod profile;
pub mod reindex;
pub mod related;
