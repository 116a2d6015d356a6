// ── Label catalog ──
//
// A `LabelProvider` backed by a table of templates. Templates use
// positional `{0}`, `{1}` placeholders; plural entries pick their
// `one`/`other` form from the first count argument.

use std::collections::HashMap;
use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use sitestats_core::{LabelArg, LabelId, LabelProvider};

/// Template text for one label.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum LabelText {
    Plain(String),
    Plural { one: String, other: String },
}

impl LabelText {
    fn select(&self, args: &[LabelArg<'_>]) -> &str {
        match self {
            Self::Plain(text) => text,
            Self::Plural { one, other } => {
                let count = args.iter().find_map(|arg| match arg {
                    LabelArg::Count(n) => Some(*n),
                    LabelArg::Text(_) => None,
                });
                if count == Some(1) { one } else { other }
            }
        }
    }
}

/// Label templates keyed by [`LabelId`].
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: HashMap<LabelId, LabelText>,
}

impl Catalog {
    /// The built-in English strings.
    pub fn english() -> Self {
        let entries = HashMap::from([
            (
                LabelId::StatsViewTagsAndCategories,
                LabelText::Plain("Tags & Categories".into()),
            ),
            (
                LabelId::StatsCategoryFoldedName,
                LabelText::Plural {
                    one: "{0} and {1} other".into(),
                    other: "{0} and {1} others".into(),
                },
            ),
            (
                LabelId::StatsInsightsViewMore,
                LabelText::Plain("View more".into()),
            ),
        ]);
        Self { entries }
    }

    /// Replace individual templates, keeping the rest.
    pub fn with_overrides(
        mut self,
        overrides: impl IntoIterator<Item = (LabelId, LabelText)>,
    ) -> Self {
        self.entries.extend(overrides);
        self
    }

    pub fn text(&self, id: LabelId) -> Option<&LabelText> {
        self.entries.get(&id)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::english()
    }
}

impl LabelProvider for Catalog {
    fn render(&self, id: LabelId, args: &[LabelArg<'_>]) -> String {
        self.entries.get(&id).map_or_else(
            || id.to_string(),
            |text| substitute(text.select(args), args),
        )
    }
}

/// Replace `{n}` placeholders with the matching argument. Placeholders
/// without a matching argument are left as written.
fn substitute(template: &str, args: &[LabelArg<'_>]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let replaced = after.find('}').and_then(|close| {
            let arg = after[..close].parse::<usize>().ok().and_then(|i| args.get(i))?;
            Some((arg, close))
        });
        if let Some((arg, close)) = replaced {
            let _ = write!(out, "{arg}");
            rest = &after[close + 1..];
        } else {
            out.push('{');
            rest = after;
        }
    }
    out.push_str(rest);
    out
}
