//! # Docdeck Architecture
//!
//! Docdeck is a **UI-agnostic documentation-browsing library**. The crate
//! ships a terminal client, but the browsing core takes plain Rust inputs
//! and returns plain Rust values—any other front end could sit on top of it.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, args.rs, wired by main.rs)                │
//! │  - Parses arguments, formats output, runs the browse loop   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Normalizes inputs (language casing, config fallbacks)    │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic over the catalog                     │
//! │  - No I/O assumptions whatsoever (export's archive aside)   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Browsing Core (catalog, render, nav, host)                 │
//! │  - Immutable catalog, pure section rendering                │
//! │  - Navigator: the single owner of session state             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The One Piece of Mutable State
//!
//! Two inputs decide which section is highlighted: picking a navigation
//! entry and scrolling the document. Both are funneled through
//! [`nav::Navigator`], the single writer. Selection updates optimistically
//! and scroll snapshots recompute; whichever ran last wins. See `nav.rs`
//! for the exact rules.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade—entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`catalog`]: Ordered, id-addressable section collection
//! - [`content`]: The built-in catalog data
//! - [`model`]: Core data types (`Section`, `Endpoint`, `Parameter`)
//! - [`render`]: Pure section → display-tree rendering
//! - [`example`]: Per-language example selection and trimming
//! - [`nav`]: Active-section and language state machine
//! - [`host`]: Document layout, anchors, and scrolling
//! - [`clipboard`]: Cross-platform clipboard support
//! - [`config`]: Configuration management
//! - [`error`]: Error types
//! - `cli`: Argument parsing and terminal rendering for the binary (not
//!   part of the lib API)

pub mod api;
pub mod catalog;
pub mod clipboard;
pub mod commands;
pub mod config;
pub mod content;
pub mod error;
pub mod example;
pub mod host;
pub mod model;
pub mod nav;
pub mod render;
