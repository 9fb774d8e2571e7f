//! # FileX Architecture
//!
//! FileX is a **UI-agnostic vault query/filter engine**. It computes what a
//! file panel should display; it never renders anything itself. The host
//! application owns the widgets, the event loop, and the actual file store.
//!
//! ## The Three-Layer Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Host UI (not in this crate)                                │
//! │  - Renders lists, handles clicks/keystrokes, shows notices  │
//! │  - The ONLY place that knows about widgets or the DOM       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  View State (filter.rs)                                     │
//! │  - Declarative description of the requested view            │
//! │  - Tags every transition with its action kind               │
//! │  - Reports whether a change needs a fresh query             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Query Engine (engine.rs)                                   │
//! │  - Runs query handlers, caches the base result              │
//! │  - Derives the visible, ordered ResultSet per filter        │
//! │  - Owns the tag index and the tallies                       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Vault Layer (vault/)                                       │
//! │  - Abstract Vault trait over the host's store               │
//! │  - InMemoryVault for tests and in-memory hosts              │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! Everything in this crate:
//! - Takes regular Rust function arguments
//! - Returns regular Rust types (`Result`, `ResultSet`)
//! - **Never** writes to stdout/stderr
//! - **Never** calls `std::process::exit`
//! - **Never** assumes a terminal or a browser environment
//!
//! This means the same core could serve a desktop plugin, a TUI, or a web
//! front end.
//!
//! ## Caching Model
//!
//! The engine caches the *base* result of the last query-affecting action
//! (search, segment, folder, tag, command). View-only actions (visibility
//! toggles, sort changes) only re-derive the emitted set from that cached
//! base, so they never touch the vault. See [`engine`] for the details.
//!
//! ## Module Overview
//!
//! - [`engine`]: The query engine, entry point for all queries
//! - [`filter`]: View state and its change reducer
//! - [`vault`]: Storage abstraction and the in-memory implementation
//! - [`model`]: Core data types (`FileEntry`, `FolderEntry`, `ResultSet`)
//! - [`tag_index`]: Tag name → files index with the reserved no-tag bucket
//! - [`sorting`]: Pure sort and classification primitives
//! - [`props`]: Front-matter property values and their comparison rules
//! - [`frontmatter`]: Front-matter parse/merge/persist helpers
//! - [`settings`]: Host-facing configuration
//! - [`debounce`]: Cooperative search input debouncing
//! - [`error`]: Error types

pub mod debounce;
pub mod engine;
pub mod error;
pub mod filter;
pub mod frontmatter;
pub mod model;
pub mod props;
pub mod settings;
pub mod sorting;
pub mod tag_index;
pub mod vault;
