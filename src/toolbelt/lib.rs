//! # Toolbelt Architecture
//!
//! Toolbelt is a **UI-agnostic catalog library**: the datastore is a plain
//! Markdown file you also read and edit by hand, and this crate is the
//! machinery that keeps that file's structured parts in sync. The CLI is
//! just one client of it.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs + args.rs)                              │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Resolves the catalog path, parses bucket names           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One module per user action, returns CmdResult            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Engine (catalog.rs over scan.rs, frontmatter.rs,           │
//! │  record.rs, cache.rs)                                       │
//! │  - Scanner finds byte spans, codecs map YAML to types,      │
//! │    the synchronizer splices and appends                     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Document Is the Database
//!
//! A catalog file carries its own completion cache in YAML front matter and
//! its entries in fenced YAML blocks; everything in between is free prose
//! that this crate never touches. Two rules keep hand edits safe:
//!
//! - Rewrites replace exactly one located byte span (the front matter).
//! - New entries are appended in append mode, so existing bytes cannot move.
//!
//! Anything the scanner does not positively recognize is left alone, and a
//! block that does not decode is skipped with a count, never an error.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`catalog`]: The synchronizer: open, persist, append, create
//! - [`scan`]: Byte-span scanner for front matter and entry blocks
//! - [`frontmatter`]: Cache mapping codec
//! - [`record`]: Entry block codec
//! - [`cache`]: The five suggestion buckets
//! - [`model`]: Core data types (`Entry`, `CategoryFacet`, links)
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod cache;
pub mod catalog;
pub mod commands;
pub mod config;
pub mod error;
pub mod frontmatter;
pub mod model;
pub mod record;
pub mod scan;
