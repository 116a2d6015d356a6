// ── Payload-to-list conversions ──
//
// Turns raw `TagsModel` groups into the ordered list a block renders:
// a title, one row per standalone tag, one expandable row per folded
// category, and a trailing "view more" link. Pure and deterministic;
// the store already applied the display cap.

use crate::error::CoreError;
use crate::labels::{LabelArg, LabelId, LabelProvider};
use crate::model::{BlockListItem, IconRef, ListItem, TagEntry, TagGroup, TagsModel};

/// Map a tags & categories page into block list items.
///
/// An empty page yields exactly `[Title, Empty]`. Otherwise the output
/// is the title, one item per group in input order, then the link.
///
/// Returns [`CoreError::EmptyTagGroup`] if any group has no members.
pub fn map_tags<L>(model: &TagsModel, labels: &L) -> Result<Vec<BlockListItem>, CoreError>
where
    L: LabelProvider + ?Sized,
{
    let mut items = Vec::with_capacity(model.groups.len() + 2);
    items.push(BlockListItem::Title {
        text: LabelId::StatsViewTagsAndCategories,
    });

    if model.is_empty() {
        items.push(BlockListItem::Empty);
        return Ok(items);
    }

    for (position, group) in model.groups.iter().enumerate() {
        items.push(map_group(position, group, labels)?);
    }

    items.push(BlockListItem::Link {
        text: LabelId::StatsInsightsViewMore,
    });
    Ok(items)
}

fn map_group<L>(position: usize, group: &TagGroup, labels: &L) -> Result<BlockListItem, CoreError>
where
    L: LabelProvider + ?Sized,
{
    match group.members.as_slice() {
        [] => Err(CoreError::EmptyTagGroup { position }),
        [single] => Ok(BlockListItem::Item(ListItem::new(
            single.name.clone(),
            Some(group.views.to_string()),
            IconRef::Tag,
        ))),
        [first, rest @ ..] => {
            let remaining = u64::try_from(rest.len()).unwrap_or(u64::MAX);
            let header = ListItem::new(
                labels.render(
                    LabelId::StatsCategoryFoldedName,
                    &[LabelArg::Text(&first.name), LabelArg::Count(remaining)],
                ),
                Some(group.views.to_string()),
                IconRef::FolderMultiple,
            );
            Ok(BlockListItem::ExpandableItem {
                header,
                expanded_items: group.members.iter().map(member_item).collect(),
            })
        }
    }
}

/// Rows inside a folded category never show their own view count.
fn member_item(entry: &TagEntry) -> ListItem {
    ListItem::new(entry.name.clone(), None, IconRef::Tag)
}
