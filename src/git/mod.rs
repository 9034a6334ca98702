//! Git Layout Module
//!
//! Locates and prepares the directories an install works with.

pub mod repository;

pub use repository::*;
