//! Galaxy Core Library
//!
//! Domain logic for the Galaxy idea journal: the keyword-based similarity
//! engine, the idea/user/constellation model, and the SQLite-backed store.

pub mod config;
pub mod constellation;
pub mod db;
pub mod error;
pub mod format;
pub mod id;
pub mod idea;
pub mod logging;
pub mod records;
pub mod similarity;
pub mod store;
pub mod text;
pub mod user;
