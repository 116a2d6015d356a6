// ── Localized label lookup ──
//
// The core never hardcodes user-visible text. Titles and links carry a
// `LabelId`; the folded category name is rendered through a
// `LabelProvider` because it is locale and plural sensitive.

use std::fmt;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Identifier of a localizable string resource.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    AsRefStr,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum LabelId {
    /// Display name of the tags & categories block.
    StatsViewTagsAndCategories,
    /// Header of a folded category: first member name plus the
    /// number of remaining members.
    StatsCategoryFoldedName,
    /// Trailing "view more" link.
    StatsInsightsViewMore,
}

/// A substitution argument for a label template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelArg<'a> {
    Text(&'a str),
    Count(u64),
}

impl fmt::Display for LabelArg<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Count(n) => write!(f, "{n}"),
        }
    }
}

/// Renders localized, pluralized strings.
pub trait LabelProvider: Send + Sync {
    fn render(&self, id: LabelId, args: &[LabelArg<'_>]) -> String;
}

impl<T: LabelProvider + ?Sized> LabelProvider for std::sync::Arc<T> {
    fn render(&self, id: LabelId, args: &[LabelArg<'_>]) -> String {
        (**self).render(id, args)
    }
}
