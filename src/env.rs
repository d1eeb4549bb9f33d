//! Read-only host environment snapshot and session eligibility.

/// What the host is currently doing with the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Plain page viewing; the only mode where inline editing arms.
    View,
    Edit,
    History,
    Other,
}

/// Content model of the page source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentModel {
    /// Line-oriented wiki markup; the only model the locator understands.
    Wikitext,
    Javascript,
    Css,
    Json,
    Other,
}

/// The host's visual skin, as far as this crate cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Skin {
    Desktop,
    /// The mobile skin: no hover events, sectioned page structure.
    Mobile,
}

/// Authentication status of the current user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserStatus {
    Anonymous,
    Identified,
}

/// How the edit affordance should be presented on a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AffordanceMode {
    /// Show only while the pointer hovers the block.
    OnHover,
    /// Show permanently; hover does not exist on the mobile skin.
    AlwaysVisible,
}

/// Read-only snapshot of the host environment, taken once per page view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostEnv {
    /// Canonical name of the current page.
    pub page_name: String,
    pub action: Action,
    /// Namespace number of the current page. Talk namespaces are odd;
    /// virtual namespaces are negative.
    pub namespace: i32,
    pub content_model: ContentModel,
    /// Language code of the page content (not the UI language).
    pub content_language: String,
    pub skin: Skin,
    pub user: UserStatus,
}

/// Subject namespaces where inline editing is worth offering: main, user,
/// project, help and category pages.
const EDITABLE_NAMESPACES: [i32; 5] = [0, 2, 4, 12, 14];

/// Whether inline editing should arm at all in this environment.
///
/// Requires plain viewing of a wikitext page in an editable namespace.
/// Talk namespaces (odd numbers) are always editable.
pub fn editing_enabled(env: &HostEnv) -> bool {
    if env.action != Action::View {
        return false;
    }
    let talk = env.namespace % 2 == 1;
    if !EDITABLE_NAMESPACES.contains(&env.namespace) && !talk {
        return false;
    }
    env.content_model == ContentModel::Wikitext
}

/// How affordances behave for this environment's skin.
pub const fn affordance_mode(env: &HostEnv) -> AffordanceMode {
    match env.skin {
        Skin::Mobile => AffordanceMode::AlwaysVisible,
        Skin::Desktop => AffordanceMode::OnHover,
    }
}
