//! # Rolodex Architecture
//!
//! Rolodex is a **personal address book library**: named contacts with validated phone
//! numbers and an optional birthday, searchable and paginated, stored as a single JSON
//! file. The `rolodex` binary is a thin client over it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs, args.rs)                               │
//! │  - Parses arguments, prompts, prints, picks exit codes      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Opens the book from disk, saves after modifications      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Operates on an AddressBook, returns CmdResult            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Domain (fields.rs, record.rs, book.rs) + Storage (store/)  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! From `api.rs` inward nothing writes to stdout or stderr; diagnostics go through
//! `tracing` and the binary decides where they end up.
//!
//! ## Quick Example
//!
//! ```
//! use rolodex::book::AddressBook;
//! use rolodex::record::Record;
//!
//! let mut book = AddressBook::new();
//! let mut john = Record::new("John Smith");
//! john.add_phone("5551234567").unwrap();
//! book.add_record(john);
//!
//! let hits: Vec<_> = book.search("john").collect();
//! assert_eq!(hits.len(), 1);
//! ```
//!
//! ## Module Overview
//!
//! - [`fields`]: `Name`, `Phone`, `Birthday` value types
//! - [`record`]: a single contact
//! - [`book`]: the keyed collection, pagination and search
//! - [`store`]: JSON document and file persistence
//! - [`commands`]: business logic behind each CLI command
//! - [`api`]: file-backed facade over the commands
//! - [`config`]: `rolodex.json` settings
//! - [`logging`]: tracing subscriber setup
//! - [`error`]: error types

pub mod api;
pub mod book;
pub mod commands;
pub mod config;
pub mod error;
pub mod fields;
pub mod logging;
pub mod record;
pub mod store;
