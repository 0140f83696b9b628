//! Dupcheck Core Library
//!
//! Duplicate project detection for the project-tracking portal: TF-IDF
//! vectors and cosine similarity over every registered project's title and
//! description, recomputed from a fresh snapshot on every check.

pub mod check;
pub mod config;
pub mod error;
pub mod format;
pub mod logging;
pub mod project;
pub mod similarity;
pub mod store;
pub mod text;
