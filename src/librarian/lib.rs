//! # Librarian Architecture
//!
//! Librarian is a small book inventory library with an interactive CLI on
//! top. The library side never touches stdout, stdin or the process exit code;
//! the binary is the only place that does.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Menu loop, prompts, table rendering, colored messages    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, returns Result<CmdResult>     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Validation and copy-count invariants                     │
//! │  - Saves after every mutation                               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - BookStore: the id -> Book catalog                        │
//! │  - StorageBackend: FileBackend (JSON), MemoryBackend (tests)│
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//!
//! For every book, `issued_count <= total_copies`, and ids are non-empty and
//! unique. Commands check these before mutating, so a failed command leaves
//! the catalog as it was.
//!
//! ## Durability
//!
//! Every mutating command saves the whole catalog. If the save fails, the
//! command still succeeds and carries an error-level message; the in-memory
//! catalog stays authoritative until the next successful save.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: One module per operation
//! - [`store`]: Catalog ownership and storage backends
//! - [`model`]: The [`model::Book`] record and its field-map serialization
//! - [`config`]: Configuration
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
