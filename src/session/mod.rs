//! The edit session controller.
//!
//! One [`EditSession`] drives the whole life of an inline edit:
//!
//! ```text
//! Idle -> Loading -> Editing -> Submitting -> Saved
//!              \        \-> Restored (cancel / unchanged submit)
//!               \-> Abandoned (no match, full-editor fallback)
//! ```
//!
//! The session owns no I/O: content storage comes in as a [`ContentApi`]
//! and the rendered page as a [`PageView`]. Shared page-view state (source
//! text, message catalog) lives in the [`PageContext`] handed in by the
//! host, so later sessions on the same page skip the loading step.

mod form;

pub use form::EditForm;

use anyhow::{Context, Result, bail};
use tracing::{debug, info};

use crate::api::{BlockSnapshot, ContentApi, EditRequest, PageView};
use crate::config::Settings;
use crate::context::PageContext;
use crate::document::{Block, Fragment, RenderedPage, locate};
use crate::env::{HostEnv, UserStatus};
use crate::source::normalize_replacement;
use crate::summary::build_summary;

/// Where a session currently is in its life cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Created, nothing happened yet.
    Idle,
    /// Fetching shared dependencies and matching the block.
    Loading,
    /// Form shown, waiting for the user.
    Editing,
    /// Save in flight.
    Submitting,
    /// Persisted and the view updated.
    Saved,
    /// Cancelled (or submitted unchanged); block restored as it was.
    Restored,
    /// Matching failed; the user was sent to the full editor.
    Abandoned,
}

/// Outcome of opening a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Opened {
    /// The block was matched; the form is showing.
    Editing(EditForm),
    /// The block could not be matched; the view was navigated to the full
    /// editor at this URL.
    Fallback { url: String },
}

/// Outcome of a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submitted {
    /// The text was not changed; treated exactly like cancel.
    Unchanged,
    /// The fragment was replaced and the re-rendered block spliced in.
    Saved,
    /// The fragment was deleted and the block removed.
    Deleted,
}

/// Everything shared by every session on one rendered page.
#[derive(Debug, Clone, Copy)]
pub struct PageScope<'a> {
    pub env: &'a HostEnv,
    pub settings: &'a Settings,
    pub page: &'a RenderedPage,
}

/// The transient editing interaction for one block.
pub struct EditSession<'a, A, V> {
    api: &'a A,
    view: &'a mut V,
    ctx: &'a mut PageContext,
    scope: PageScope<'a>,
    block: &'a Block,
    state: SessionState,
    fragment: Option<Fragment>,
    snapshot: Option<BlockSnapshot>,
}

impl<'a, A: ContentApi, V: PageView> EditSession<'a, A, V> {
    /// Tie a new session to one block of the rendered page.
    pub fn begin(
        api: &'a A,
        view: &'a mut V,
        ctx: &'a mut PageContext,
        scope: PageScope<'a>,
        block: &'a Block,
    ) -> Self {
        Self {
            api,
            view,
            ctx,
            scope,
            block,
            state: SessionState::Idle,
            fragment: None,
            snapshot: None,
        }
    }

    pub const fn state(&self) -> SessionState {
        self.state
    }

    /// Start editing: load shared dependencies if this is the first session
    /// on the page, match the block against the source, and either show the
    /// form or hand the user off to the full editor.
    ///
    /// # Errors
    ///
    /// Fails when the source or default-catalog fetch fails; the view is
    /// left showing the busy indicator (no recovery path is defined for
    /// transport failure while loading).
    pub async fn open(&mut self) -> Result<Opened> {
        if self.state != SessionState::Idle {
            bail!("cannot open a session in state {:?}", self.state);
        }
        self.state = SessionState::Loading;
        self.snapshot = Some(self.view.snapshot(self.block));

        if self.ctx.is_primed() {
            debug!("page context already primed, skipping fetches");
        } else {
            self.view.show_busy(self.block);
            self.ctx
                .prime(self.api, self.scope.env, self.scope.settings)
                .await?;
        }
        let source = self
            .ctx
            .source()
            .context("page context has no source after priming")?;

        match locate(self.block, source.text()) {
            Ok(fragment) => {
                let minor_allowed = self.scope.env.user == UserStatus::Identified;
                let form = EditForm::new(fragment.text(), minor_allowed);
                self.fragment = Some(fragment);
                self.view.show_form(self.block, &form);
                self.state = SessionState::Editing;
                Ok(Opened::Editing(form))
            }
            Err(reason) => {
                debug!(%reason, "no inline match, handing off to the full editor");
                let section = self.scope.page.section_number(self.block);
                let url = self.view.fallback_edit_url(section);
                self.view.navigate(&url);
                self.state = SessionState::Abandoned;
                Ok(Opened::Fallback { url })
            }
        }
    }

    /// Discard the edit and put the block back exactly as it was.
    pub fn cancel(&mut self) {
        self.restore();
    }

    /// Submit the form. Unchanged text short-circuits to cancel semantics;
    /// otherwise the fragment replacement is computed on a scratch copy of
    /// the source, persisted, committed to the shared context, and the view
    /// updated (block removed on deletion, re-rendered and spliced
    /// otherwise).
    ///
    /// # Errors
    ///
    /// On persistence failure the form is re-enabled with the user's text
    /// intact and the shared source keeps its last persisted value, so the
    /// user can retry manually. On render failure the edit is already
    /// persisted; only the view update is lost.
    pub async fn submit(&mut self, form: &EditForm) -> Result<Submitted> {
        if self.state != SessionState::Editing {
            bail!("cannot submit a session in state {:?}", self.state);
        }
        let fragment = self
            .fragment
            .clone()
            .context("editing session lost its fragment")?;

        if form.text == fragment.text() {
            self.restore();
            return Ok(Submitted::Unchanged);
        }

        self.state = SessionState::Submitting;
        self.view.set_form_enabled(false);

        let new_text = normalize_replacement(&form.text);
        let mut updated = self
            .ctx
            .source()
            .cloned()
            .context("submitting session lost its source")?;
        if !updated.replace_fragment(&fragment, &new_text) {
            // A competing edit consumed the fragment; the save below then
            // persists the source unchanged, which the backend treats as a
            // null edit.
            debug!("fragment went stale before submission");
        }

        let summary = build_summary(
            &form.summary,
            &new_text,
            self.scope.page.enclosing_heading(self.block),
            self.ctx.messages(),
            self.scope.settings,
        );
        let request = EditRequest {
            page: self.scope.env.page_name.clone(),
            text: updated.text().to_string(),
            summary,
            minor: form.effective_minor(),
            tags: self.scope.settings.change_tags.clone(),
        };

        if let Err(err) = self.api.save(&request).await {
            self.view.set_form_enabled(true);
            self.state = SessionState::Editing;
            return Err(err.context("persisting edit"));
        }
        self.ctx.commit_source(updated);
        info!(page = %self.scope.env.page_name, deleted = new_text.is_empty(), "edit saved");

        if new_text.is_empty() {
            self.view.remove_block(self.block);
            self.state = SessionState::Saved;
            return Ok(Submitted::Deleted);
        }

        let html = self
            .api
            .render(&self.scope.env.page_name, &new_text)
            .await
            .context("rendering saved fragment")?;
        self.view.splice_rendered(self.block, &html);
        self.state = SessionState::Saved;
        Ok(Submitted::Saved)
    }

    fn restore(&mut self) {
        if let Some(snapshot) = self.snapshot.take() {
            self.view.restore(self.block, snapshot);
        }
        self.state = SessionState::Restored;
    }
}
