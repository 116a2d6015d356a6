// ── Presentation list model ──
//
// Immutable value objects published to block consumers. Each publish
// replaces the previous snapshot wholesale; nothing here is mutated
// after construction.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display};

use crate::labels::LabelId;

/// Icon shown next to a list row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, AsRefStr)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum IconRef {
    /// Standalone tag.
    Tag,
    /// Folded category of several tags.
    FolderMultiple,
}

/// A single text row with an optional value column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListItem {
    pub text: String,
    pub value: Option<String>,
    pub icon: IconRef,
}

impl ListItem {
    pub fn new(text: impl Into<String>, value: Option<String>, icon: IconRef) -> Self {
        Self {
            text: text.into(),
            value,
            icon,
        }
    }
}

/// One entry of a block's rendered list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BlockListItem {
    Title {
        text: LabelId,
    },
    Item(ListItem),
    ExpandableItem {
        header: ListItem,
        expanded_items: Vec<ListItem>,
    },
    Empty,
    Link {
        text: LabelId,
    },
}

/// Outcome of a block fetch, as seen by subscribers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InsightItem {
    List {
        items: Vec<BlockListItem>,
    },
    Failed {
        /// Display name of the block that failed to load.
        failed_label: LabelId,
        error_message: String,
    },
}

impl InsightItem {
    pub fn items(&self) -> Option<&[BlockListItem]> {
        match self {
            Self::List { items } => Some(items),
            Self::Failed { .. } => None,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}
