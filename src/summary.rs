//! Edit summary construction.

use crate::config::Settings;
use crate::document::Heading;
use crate::messages::MessageCatalog;

/// Build the summary string for a save.
///
/// A user-supplied summary is used verbatim; otherwise a default is drawn
/// from the catalog, keyed on whether the fragment was edited or deleted.
/// The enclosing section (when known) is prefixed in section-link form, and
/// a fixed promotional tag is appended so the edits can be tracked.
pub fn build_summary(
    user_summary: &str,
    new_text: &str,
    section: Option<&Heading>,
    messages: &MessageCatalog,
    settings: &Settings,
) -> String {
    let mut summary = if user_summary.is_empty() {
        let key = if new_text.is_empty() {
            "summary-delete"
        } else {
            "summary-edit"
        };
        messages.text(key).to_string()
    } else {
        user_summary.to_string()
    };

    if let Some(heading) = section {
        summary = format!("/* {} */ {summary}", heading.section_label());
    }

    summary.push_str(&format!(" [[{}| #retouch]]", settings.tag_page));
    summary
}
