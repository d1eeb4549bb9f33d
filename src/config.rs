//! Deployment-tunable settings with sensible defaults.

/// Values a deployment may override without touching code: the catalog
/// language everything falls back to, the change tags stamped on saves, and
/// the page the promotional summary suffix links to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Language whose message catalog is always loaded first.
    pub catalog_language: String,
    /// Change tags attached to every save for edit-filtering dashboards.
    pub change_tags: Vec<String>,
    /// Target page of the `#retouch` summary suffix link.
    pub tag_page: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            catalog_language: "en".to_string(),
            change_tags: vec!["retouch".to_string()],
            tag_page: "Project:Retouch".to_string(),
        }
    }
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the default catalog language.
    #[must_use]
    pub fn with_catalog_language(mut self, language: impl Into<String>) -> Self {
        self.catalog_language = language.into();
        self
    }

    /// Override the change tags attached to saves.
    #[must_use]
    pub fn with_change_tags(mut self, tags: Vec<String>) -> Self {
        self.change_tags = tags;
        self
    }

    /// Override the summary suffix link target.
    #[must_use]
    pub fn with_tag_page(mut self, page: impl Into<String>) -> Self {
        self.tag_page = page.into();
        self
    }
}
