// ── Tags & categories payload ──
//
// Rows of the "tags and categories" insight as returned by the store.
// A group with one member is a standalone tag; two or more members
// form a folded category sharing one aggregate view count.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

/// Whether an entry is a tag or a category on the site.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, AsRefStr, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TagKind {
    Tag,
    Category,
}

/// A single leaf record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagEntry {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: TagKind,
    pub link: String,
    #[serde(default)]
    pub views: u64,
}

impl TagEntry {
    pub fn new(name: impl Into<String>, kind: TagKind, link: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind,
            link: link.into(),
            views: 0,
        }
    }

    pub fn with_views(mut self, views: u64) -> Self {
        self.views = views;
        self
    }
}

/// One row of the raw dataset.
///
/// `views` is the aggregate reported by the backend and is not required
/// to equal the sum of the member views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagGroup {
    #[serde(rename = "tags")]
    pub members: Vec<TagEntry>,
    pub views: u64,
}

impl TagGroup {
    pub fn new(members: Vec<TagEntry>, views: u64) -> Self {
        Self { members, views }
    }

    /// A group with two or more members is shown as a folded category.
    pub fn is_folded(&self) -> bool {
        self.members.len() >= 2
    }
}

/// The full page of groups, in display order. May be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagsModel {
    #[serde(rename = "tags")]
    pub groups: Vec<TagGroup>,
}

impl TagsModel {
    pub fn new(groups: Vec<TagGroup>) -> Self {
        Self { groups }
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Keep only the first `max` groups.
    pub(crate) fn truncated(mut self, max: usize) -> Self {
        self.groups.truncate(max);
        self
    }
}
