//! # Agenda Architecture
//!
//! Agenda is a **UI-agnostic appointment book library** with a small CLI
//! client on top.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, owns the Session              │
//! │  - Normalizes inputs (selector strings → Selectors)         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - create, list, sort, update, delete, search, view, config │
//! │  - Saves the full snapshot after every mutation             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait: load/save the whole sequence            │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! The algorithms the commands build on are plain generic functions:
//! [`ordering::sort_by`] (three-way-partition quicksort) and
//! [`lookup::find_by_key`] (binary search with a sortedness check).
//!
//! ## Identity
//!
//! Users pick appointments by their position in the listing, but every
//! appointment also carries a stable UUID. Positions are resolved to ids at
//! the start of a command (see [`index`]) so sorting or deleting never makes
//! a command hit the wrong record.
//!
//! ## No I/O Assumptions in Core
//!
//! From `api.rs` inward, code never writes to stdout/stderr, never calls
//! `std::process::exit` and only logs through the `log` facade.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Business logic for each operation
//! - [`store`]: Snapshot persistence and the in-memory session
//! - [`model`]: The `Appointment` record
//! - [`ordering`], [`lookup`]: sort and search engines
//! - [`index`]: Display indexes and selectors
//! - [`time`]: 12-hour clock conversion
//! - [`config`], [`init`]: Configuration and data directory wiring
//! - [`logging`]: Logger bootstrap for the binary
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod index;
pub mod init;
pub mod logging;
pub mod lookup;
pub mod model;
pub mod ordering;
pub mod store;
pub mod time;
