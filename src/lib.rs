//! # Rollbook Architecture
//!
//! Rollbook is a **UI-agnostic student records library**. The CLI in
//! `main.rs` is one client of it; the same core could sit behind a TUI or a
//! web service without touching a line in here.
//!
//! ## Layers
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │  CLI (args.rs + main.rs, bin only)                        │
//! │  - Parses arguments, prompts, formats tables and charts   │
//! │  - The ONLY place that knows about stdout/stderr/exit     │
//! └───────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌───────────────────────────────────────────────────────────┐
//! │  Services (auth.rs, repo.rs, stats.rs, validation.rs)     │
//! │  - Session handling, business rules, roster operations    │
//! │  - Operates on Rust types, returns Rust types             │
//! └───────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌───────────────────────────────────────────────────────────┐
//! │  Storage (store/)                                         │
//! │  - Abstract RecordStore trait                             │
//! │  - JsonStore (production), MemoryStore (testing)          │
//! └───────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: the Store Never Fails the Caller
//!
//! `RecordStore` reads degrade instead of erroring: a missing or corrupt
//! users document yields the bootstrap accounts (and persists them), a bad
//! students document yields an empty roster. Writes are fire-and-forget,
//! logged on failure. Services above the trait therefore only surface
//! *domain* errors (validation, duplicate ID, not found), which is exactly
//! what a UI wants to show.
//!
//! ## Testing Strategy
//!
//! 1. **Services** (`auth.rs`, `repo.rs`, `stats.rs`, `validation.rs`):
//!    unit tests against `MemoryStore`. The lion's share of testing.
//! 2. **Storage** (`store/json.rs`): temp-dir tests for the fallback and
//!    bootstrap contracts.
//! 3. **CLI** (`tests/cli_e2e.rs`): full binary runs against an isolated
//!    data dir via the `ROLLBOOK_DATA` override.
//!
//! ## Module Overview
//!
//! - [`auth`]: credential checks and the logged-in session
//! - [`repo`]: the student roster, validation-on-write, search
//! - [`stats`]: roster summary figures for the dashboard
//! - [`validation`]: the individual field rules as pure predicates
//! - [`store`]: storage abstraction and implementations
//! - [`model`]: core data types (`Student`, `User`, `Role`)
//! - [`config`]: configuration (the department list)
//! - [`error`]: error types

pub mod auth;
pub mod config;
pub mod error;
pub mod model;
pub mod repo;
pub mod stats;
pub mod store;
pub mod validation;
