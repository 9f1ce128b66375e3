//! # Psalmz Architecture
//!
//! Psalmz looks up numbered entries in a plain text "book" file, where every
//! entry is an id line followed by a text line:
//!
//! ```text
//! 23
//! The Lord is my shepherd
//! ```
//!
//! It is a small library with a CLI client, layered the same way top to bottom:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, prints results, terminal prompts       │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs) + Session (session.rs)                  │
//! │  - Owns the loaded RecordBook                               │
//! │  - Returns structured CmdResults / drives an Interaction    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (loader.rs → parser.rs → model.rs → lookup.rs)        │
//! │  - Read the file, pair lines into records, check order,     │
//! │    binary search                                            │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Errors
//!
//! Loading and parsing fail fast with a [`error::PsalmzError`]: a missing,
//! unreadable, empty or truncated file, a non-integer id line, or ids that are
//! not strictly ascending. A lookup that finds nothing is not an error.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Lookup, list, check and config logic
//! - [`session`]: The interactive prompt loop
//! - [`interaction`]: The prompt/display trait the session talks to
//! - [`loader`], [`parser`], [`lookup`], [`model`]: The core
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod interaction;
pub mod loader;
pub mod lookup;
pub mod model;
pub mod parser;
pub mod session;

#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;
