//! Bulletins and bulletin categories.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Audience of a bulletin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BulletinScope {
    /// Everyone in the faction.
    #[default]
    Faction,
    /// Seats of one term.
    Term,
    /// Members of one group.
    Group,
    /// A single principal.
    Principal,
}

/// Kind of bulletin body section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BulletinSectionKind {
    /// Heading.
    Header,
    /// Paragraph.
    #[default]
    Text,
}

/// Bulletin body section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BulletinSection {
    /// Section kind.
    pub kind: BulletinSectionKind,
    /// Section text.
    pub text: Option<String>,
}

/// Bulletin.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Bulletin {
    /// Bulletin ID, assigned by the server.
    pub bulletin_id: Uuid,
    /// Faction ID.
    pub faction_id: Uuid,
    /// Owning account.
    pub account_id_owner: Uuid,
    /// Category.
    pub bulletin_category_id: Uuid,
    /// Audience.
    pub scope: BulletinScope,
    /// Stack tab; -1 when no stack is configured.
    pub stack_tab: i32,
    /// Title.
    pub title: String,
    /// Summary.
    pub summary: String,
    /// Suppresses the push notification on publish.
    pub disable_push: bool,
    /// Whether the bulletin is visible.
    pub active: bool,
    /// Body sections.
    pub sections: Vec<BulletinSection>,
    /// Form config offered as call-to-action.
    pub cta_form_config_id: Option<Uuid>,
    /// Target term when scope is `Term`.
    pub term_id: Option<Uuid>,
    /// Target group when scope is `Group`.
    pub group_id: Option<Uuid>,
    /// Target principal when scope is `Principal`.
    pub principal_id: Option<Uuid>,
}

/// Bulletin category.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BulletinCategory {
    /// Category ID.
    pub bulletin_category_id: Uuid,
    /// Faction ID.
    pub faction_id: Uuid,
    /// Name.
    pub name: Option<String>,
}
