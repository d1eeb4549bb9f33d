// Transitive dependency version mismatches we can't control
#![allow(clippy::multiple_crate_versions)]

//! # Retouch
//!
//! Inline paragraph editing for wiki pages backed by a content-storage API.
//!
//! Retouch lets a reader fix one paragraph without leaving the rendered
//! page: it matches the paragraph back to the exact line of source markup
//! that produced it, shows that line in a small form, and submits the
//! updated document through the host's content API.
//!
//! The one non-trivial piece is the matcher ([`document::locate`]): source
//! markup and rendered output only coincide in literal text runs, so the
//! longest direct text run of a block is used as a uniqueness anchor into
//! the source. Matching is deliberately conservative: when the anchor is
//! missing or ambiguous the session hands the user to the full editor
//! rather than guess.
//!
//! ## Architecture
//!
//! - **Locator**: pure matching from rendered block to source line
//! - **Session**: the edit state machine around it
//! - **Collaborators**: traits the host implements for storage, rendering
//!   and view manipulation ([`api`])
//! - **Context**: per-page-view cache of source text and message catalog
//!
//! ## Modules
//!
//! - [`document`]: rendered-page structure and the locator
//! - [`session`]: the edit session controller
//! - [`api`]: external collaborator traits and the save payload
//! - [`context`]: shared page-view state
//! - [`source`]: the mutable document source and its edit operations
//! - [`messages`]: layered localization catalog
//! - [`summary`]: edit summary construction
//! - [`env`]: host environment snapshot and eligibility gating
//! - [`config`]: deployment settings

pub mod api;
pub mod config;
pub mod context;
pub mod document;
pub mod env;
pub mod messages;
pub mod session;
pub mod source;
pub mod summary;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::api::{ContentApi, EditRequest, PageView};
    pub use crate::config::Settings;
    pub use crate::context::PageContext;
    pub use crate::document::{Block, RenderedPage, Segment, locate};
    pub use crate::env::HostEnv;
    pub use crate::session::{EditSession, Opened, PageScope, Submitted};
}
