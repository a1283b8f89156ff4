//! # Document Q&A Client
//!
//! A client for a document question-answering backend. The backend owns
//! parsing, chunking, embedding, ranking, and storage; this crate speaks its
//! JSON/HTTP contract and models the three user-facing workflows as explicit
//! finite state machines:
//!
//! ```text
//! ┌──────────┐     ┌────────────────────┐     ┌─────────────┐
//! │   CLI    │────▶│ Workflow controller │────▶│ Q&A backend │
//! │  (dqa)   │     │ Idle → InFlight →   │     │  JSON/HTTP  │
//! └──────────┘     │ Succeeded | Failed  │     └─────────────┘
//!                  └────────────────────┘
//! ```
//!
//! Each workflow owns one backend endpoint, validates its input before
//! anything is sent, issues exactly one HTTP call per submission, and keeps
//! its failures local.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | TOML configuration (backend base URL) |
//! | [`models`] | Wire types for the backend contract |
//! | [`error`] | Validation / server / transport error kinds |
//! | [`api`] | HTTP client, one method per endpoint |
//! | [`workflow`] | Shared submission state machine |
//! | [`upload`] | Document upload workflow |
//! | [`search`] | Similarity search workflow |
//! | [`lookup`] | Journal chunk lookup workflow |
//! | [`shell`] | Composition root: active workflow + upload overlay |

pub mod api;
pub mod config;
pub mod error;
pub mod lookup;
pub mod models;
pub mod search;
pub mod shell;
pub mod upload;
pub mod workflow;
