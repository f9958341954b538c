use serde::{Deserialize, Serialize};

use super::fresh_id;

/**
Reference data describing how a group of expenses is labelled and drawn.

Categories are immutable by convention: clients add and delete them but do
not edit them in place. Deleting a category that is still referenced leaves
dangling `category_id`s behind, which resolve to the fallback label at
read time.
*/
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// UUID v4, assigned at creation.
    pub id: String,

    pub name: String,

    /// Name of the icon the client renders for this category.
    pub icon: String,

    /// Display color as a hex string, e.g. "#4caf50".
    pub color: String,
}

/// Fallback label for expenses whose category no longer exists.
pub const UNCATEGORIZED: &str = "Uncategorized";

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryDraft {
    pub name: String,
    pub icon: String,
    pub color: String,
}

impl From<CategoryDraft> for Category {
    fn from(draft: CategoryDraft) -> Self {
        Category {
            id: fresh_id(),
            name: draft.name,
            icon: draft.icon,
            color: draft.color,
        }
    }
}
