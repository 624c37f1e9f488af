//! # phxlog Architecture
//!
//! phxlog is the **core of a structured training diary**. A day of training is a
//! [`model::WorkoutDay`]: a date, a scenario and an ordered list of typed blocks
//! (circuit, strength, kettlebell, activity, note). Clients stage one day at a time,
//! edit it in place and save it to a [`store::WorkoutStore`].
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Facade owning store, config and the editor session       │
//! │  - Fills in configured limits, resolves template ids        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Session + Editor (session.rs, editor/)                     │
//! │  - One staged day, structural and nested field edits        │
//! │  - No I/O: nothing reaches the store until save             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Save reconciliation, listings, search, templates         │
//! │  - Returns CmdResult with days paired with their digest     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract WorkoutStore trait                              │
//! │  - FileStore (JSON files), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! Nothing here prints, prompts or installs a logging subscriber. Diagnostics go
//! through `tracing`; the embedding application decides where they end up.
//!
//! ## Concurrency
//!
//! Single-threaded. Every mutation and every save takes `&mut self`, so a day cannot
//! be edited while its save is in flight, and one session never has two saves
//! outstanding.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`session`]: The working copy being edited
//! - [`editor`]: Structural and nested edits on one staged day
//! - [`commands`]: Business logic that talks to the store
//! - [`store`]: Storage abstraction and implementations
//! - [`block`]: Block variants and their payloads
//! - [`model`]: Workout days, templates, scenarios, analytics
//! - [`digest`]: One-line day summaries
//! - [`template`]: Day/template projection
//! - [`analytics`]: Reference analytics computation
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod analytics;
pub mod api;
pub mod block;
pub mod commands;
pub mod config;
pub mod digest;
pub mod editor;
pub mod error;
pub mod model;
pub mod session;
pub mod store;
pub mod template;

#[cfg(test)]
pub mod test_utils;
