//! Page-view-wide state shared by every edit session on one page.

use anyhow::{Context, Result};
use tracing::debug;

use crate::api::ContentApi;
use crate::config::Settings;
use crate::env::HostEnv;
use crate::messages::MessageCatalog;
use crate::source::PageSource;

/// The cumulative cache behind all edit sessions in one page view: the
/// document source and the message catalog, loaded on the first session and
/// reused by every later one until the page is reloaded.
///
/// This is deliberately an explicit object handed to sessions by reference
/// rather than hidden process-global state; the host owns exactly one per
/// rendered page.
#[derive(Debug, Default)]
pub struct PageContext {
    source: Option<PageSource>,
    messages: MessageCatalog,
}

impl PageContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the first session already loaded the shared dependencies.
    /// Source presence is the flag, as the source fetch and the catalog
    /// fetch only ever succeed together.
    pub fn is_primed(&self) -> bool {
        self.source.is_some()
    }

    /// The cached document source, once primed.
    pub fn source(&self) -> Option<&PageSource> {
        self.source.as_ref()
    }

    /// The layered message catalog.
    pub fn messages(&self) -> &MessageCatalog {
        &self.messages
    }

    /// Commit an updated source after confirmed persistence.
    pub(crate) fn commit_source(&mut self, source: PageSource) {
        self.source = Some(source);
    }

    /// Load the shared dependencies: the document source and the
    /// default-language catalog fetch concurrently and must both succeed;
    /// afterwards the content-language catalog is overlaid best-effort;
    /// a missing translation is a normal outcome and never blocks the
    /// session, but the attempt is always awaited so catalog layering
    /// stays ordered.
    pub async fn prime<A: ContentApi>(
        &mut self,
        api: &A,
        env: &HostEnv,
        settings: &Settings,
    ) -> Result<()> {
        let (source, catalog) = futures::join!(
            api.fetch_source(&env.page_name),
            api.fetch_messages(&settings.catalog_language),
        );
        let source = source.context("fetching page source")?;
        let payload = catalog.context("fetching default message catalog")?;
        self.messages
            .load(&payload)
            .context("decoding default message catalog")?;
        self.source = Some(PageSource::new(source));

        let overlay = match api.fetch_messages(&env.content_language).await {
            Ok(payload) => self.messages.load(&payload),
            Err(err) => Err(err),
        };
        if let Err(err) = overlay {
            debug!(
                language = %env.content_language,
                %err,
                "content-language catalog unavailable"
            );
        }
        Ok(())
    }
}
