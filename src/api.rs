//! External collaborator interfaces.
//!
//! The crate never talks to the network or the rendered view directly; the
//! host hands in implementations of [`ContentApi`] (content storage and
//! rendering) and [`PageView`] (the live rendered page). Sessions run on the
//! host's single-threaded event loop, so the trait futures carry no `Send`
//! bounds.

use anyhow::Result;
use serde::Serialize;

use crate::document::Block;
use crate::session::EditForm;

/// Wire payload of one save: the complete updated source plus its
/// provenance metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EditRequest {
    /// Canonical page name.
    pub page: String,
    /// Full updated document source.
    pub text: String,
    /// Computed edit summary.
    pub summary: String,
    /// Whether the edit is flagged minor.
    pub minor: bool,
    /// Deployment change tags.
    pub tags: Vec<String>,
}

/// Content storage and rendering, as exposed by the host's API transport.
#[allow(async_fn_in_trait)] // sessions run on a single-threaded event loop
pub trait ContentApi {
    /// Fetch the full source markup of a page.
    async fn fetch_source(&self, page: &str) -> Result<String>;

    /// Fetch the raw (base64-encoded JSON) message catalog for a language.
    /// Failing for a language with no translation is a normal outcome.
    async fn fetch_messages(&self, language: &str) -> Result<String>;

    /// Persist a full-document update.
    async fn save(&self, request: &EditRequest) -> Result<()>;

    /// Render fragment markup into display HTML, styled consistently with
    /// the rest of `page`.
    async fn render(&self, page: &str, fragment: &str) -> Result<String>;
}

/// Verbatim capture of a block's rendered content, taken before editing
/// begins so cancel can restore the block exactly.
///
/// Restoring hands this back to the view, which must re-attach the edit
/// affordance itself: interaction hooks are not part of the captured
/// content and never survive it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockSnapshot {
    /// The block's rendered content at capture time.
    pub content: String,
}

/// The live rendered page, as manipulated by an edit session.
pub trait PageView {
    /// Capture a block's current rendered content.
    fn snapshot(&self, block: &Block) -> BlockSnapshot;

    /// Replace the block's affordance with a busy indicator while the
    /// session loads its dependencies.
    fn show_busy(&mut self, block: &Block);

    /// Replace the block's content with the edit form.
    fn show_form(&mut self, block: &Block, form: &EditForm);

    /// Enable or disable the form controls (disabled during submission).
    fn set_form_enabled(&mut self, enabled: bool);

    /// Restore a block from its snapshot, re-attaching the edit affordance.
    fn restore(&mut self, block: &Block, snapshot: BlockSnapshot);

    /// Remove a block from the view entirely (fragment deletion).
    fn remove_block(&mut self, block: &Block);

    /// Replace a block with freshly rendered HTML. The HTML may expand to
    /// several blocks; each must receive a fresh edit affordance.
    fn splice_rendered(&mut self, block: &Block, html: &str);

    /// URL of the full editor for the given section (`0` = lead section),
    /// used when inline matching fails.
    fn fallback_edit_url(&self, section: usize) -> String;

    /// Navigate the host away from the rendered page.
    fn navigate(&mut self, url: &str);
}
