use serde::{Deserialize, Serialize};

use super::fresh_id;

/// A household participant.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    /// UUID v4, assigned at creation.
    pub id: String,

    pub name: String,
}

/// Fallback label for contributions whose member no longer exists.
pub const UNKNOWN_MEMBER: &str = "Unknown";

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberDraft {
    pub name: String,
}

impl From<MemberDraft> for Member {
    fn from(draft: MemberDraft) -> Self {
        Member {
            id: fresh_id(),
            name: draft.name,
        }
    }
}
