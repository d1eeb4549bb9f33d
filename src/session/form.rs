//! The inline edit form model.

/// State of the small editing form shown in place of a block: the editable
/// fragment text, an optional summary, and the minor-edit flag.
///
/// The minor flag is only offered to identified users; for anonymous users
/// it is carried but never honored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditForm {
    /// Editable fragment text, prefilled with the matched source line.
    pub text: String,
    /// User-supplied edit summary; empty means "use the default".
    pub summary: String,
    /// Minor-edit checkbox state.
    pub minor: bool,
    minor_allowed: bool,
}

impl EditForm {
    pub(crate) fn new(prefill: &str, minor_allowed: bool) -> Self {
        Self {
            text: prefill.to_string(),
            summary: String::new(),
            minor: false,
            minor_allowed,
        }
    }

    /// Whether the minor-edit toggle should be shown at all.
    pub const fn minor_allowed(&self) -> bool {
        self.minor_allowed
    }

    /// The minor flag as it goes on the wire: checked AND allowed.
    pub const fn effective_minor(&self) -> bool {
        self.minor && self.minor_allowed
    }
}
