//! Catalog filter and comparison engine for language-model directories.
//!
//! `llm-directory` narrows an immutable catalog of model entries by name
//! search, model type and parameter range, and keeps an independent
//! comparison set keyed by entry id. Every operation is a pure function over
//! value snapshots; rendering is left to the caller.

pub mod catalog;
pub mod comparison;
pub mod config;
pub mod directory;
pub mod filtering;
pub mod format;
pub mod types;

pub use directory::Directory;
