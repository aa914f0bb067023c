//! Terms, groups, seats, principals and staff invites.
//!
//! An account is a member of a principal, and the principal holds a seat in
//! a term. Tenants rename these freely: "an account manages a student who is
//! part of a class" and "an account joined a subscription granting a course"
//! describe the same shape.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Time-bounded grouping of seats.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Term {
    /// Term ID.
    pub term_id: Uuid,
    /// Faction ID.
    pub faction_id: Uuid,
    /// Name.
    pub name: Option<String>,
    /// Whether the term is active.
    pub active: bool,
}

/// Group.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Group {
    /// Group ID.
    pub group_id: Uuid,
    /// Faction ID.
    pub faction_id: Uuid,
    /// Name.
    pub name: Option<String>,
}

/// What a group membership points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GroupTargetKind {
    /// An account.
    Account,
    /// A principal; the usual choice.
    #[default]
    Principal,
}

/// Role of a group member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GroupMemberRole {
    /// Read-only.
    #[default]
    Reader,
    /// May post.
    Writer,
    /// May manage the group.
    Admin,
}

/// Group membership.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupTarget {
    /// Membership ID, assigned by the server.
    pub group_target_id: Uuid,
    /// Group ID.
    pub group_id: Uuid,
    /// Account that created the membership.
    pub account_id: Uuid,
    /// Principal member.
    pub principal_id: Option<Uuid>,
    /// Target kind.
    pub kind: GroupTargetKind,
    /// Role; not fully enforced by the server.
    pub role: GroupMemberRole,
    /// Hides the group from the member.
    pub hidden: bool,
    /// Keeps group posts out of the main feed.
    pub suppress_main: bool,
}

/// Seat type.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SeatType {
    /// Seat type ID.
    pub seat_type_id: Uuid,
    /// Faction ID.
    pub faction_id: Uuid,
    /// Name.
    pub name: Option<String>,
}

/// Enrollment of a principal in a term.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Seat {
    /// Seat ID, assigned by the server.
    pub seat_id: Uuid,
    /// Faction ID.
    pub faction_id: Uuid,
    /// Seated principal; filled by the server on registration.
    pub principal_id: Option<Uuid>,
    /// Term ID.
    pub term_id: Uuid,
    /// Seat type ID.
    pub seat_type_id: Uuid,
    /// When the seat was added.
    pub added_utc: Option<DateTime<Utc>>,
}

/// End entity, e.g. a student, that accounts are members of.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Principal {
    /// Principal ID, assigned by the server.
    pub principal_id: Uuid,
    /// Faction ID.
    pub faction_id: Uuid,
    /// External identifier.
    pub external_identifier: Option<String>,
    /// Access code; generated when empty.
    pub access_code: String,
    /// Display name.
    pub display_name: String,
    /// Full name.
    pub full_name: String,
    /// Whether the principal is enabled.
    pub enabled: bool,
    /// Signers expected by document integrations.
    pub expected_signers: u32,
    /// Maximum number of accounts that may join.
    pub limit: u32,
}

/// Combined principal + seat + invites registration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PrincipalRegisterInput {
    /// Emails to invite.
    pub invite_emails: Vec<String>,
    /// Seat to create.
    pub seat: Seat,
    /// Principal to create.
    pub principal: Principal,
}

/// Invitation for an email to join a principal.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PrincipalInvite {
    /// Invite ID, assigned by the server.
    pub principal_invite_id: Uuid,
    /// Faction ID.
    pub faction_id: Uuid,
    /// Principal ID.
    pub principal_id: Uuid,
    /// Invited email.
    pub email: String,
    /// When the invite was issued.
    pub stamp_utc: Option<DateTime<Utc>>,
}

/// Kind of staff invite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum InviteType {
    /// Faction administrator.
    #[default]
    Administrator,
    /// Staff member.
    Staff,
}

/// Staff invite.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Invite {
    /// Invite ID, assigned by the server.
    pub invite_id: Uuid,
    /// Faction ID.
    pub faction_id: Uuid,
    /// Invited email.
    pub email: String,
    /// Redemption code; generated when absent.
    pub code: Option<String>,
    /// Invite kind.
    #[serde(rename = "type")]
    pub invite_type: InviteType,
}

/// Manager level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ManagerType {
    /// Faction administrator.
    #[default]
    Administrator,
    /// Staff member.
    Staff,
}

impl ManagerType {
    /// Wire value used in paths.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Administrator => "Administrator",
            Self::Staff => "Staff",
        }
    }
}
