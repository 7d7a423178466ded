//! # Course Catalog Architecture
//!
//! An in-memory course catalog: courses are loaded from a comma-separated file,
//! kept in a hash-indexed store, and browsed or edited from an interactive menu.
//! The store is rebuilt from file every session; nothing is written back.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Shell (cli/, wired by main.rs)                             │
//! │  - Menu loop, prompts, confirmations, rendering             │
//! │  - The ONLY place that reads stdin or writes stdout         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, owns the store                │
//! │  - Times every operation                                    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs, loader.rs)                   │
//! │  - Validation and business rules                            │
//! │  - Checks everything before writing anything                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - CourseStore trait                                        │
//! │  - ChainedStore (default), SortedStore                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Prerequisite Consistency
//!
//! A load only commits when every prerequisite in the file names a course in
//! the same file, and an add only commits when every prerequisite is already in
//! the store. Removal is the one place references can dangle: the shell asks
//! separately whether to strip the removed course from other prerequisite
//! lists, and declining keeps the removal.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: One module per operation
//! - [`loader`]: Parse, validate and commit a data file
//! - [`store`]: Storage trait and implementations
//! - [`model`]: The `Course` record
//! - [`text`]: Trimming, splitting and identifier normalization
//! - [`config`]: `catalog.json` settings
//! - [`error`]: Error types
//! - [`cli`]: The interactive shell

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod loader;
pub mod model;
pub mod store;
pub mod text;
