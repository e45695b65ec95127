use forge_core::{ArmorSlot, Element, Rank, WeaponClass};
use serde::{Deserialize, Serialize};

/// Page size used when a query sets no limit.
pub const DEFAULT_PAGE_LIMIT: usize = 50;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WeaponQuery {
    pub class: Option<WeaponClass>,
    pub element: Option<Element>,
    pub rank: Option<Rank>,
    pub limit: Option<usize>,
    pub offset: usize,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ArmorQuery {
    pub slot: Option<ArmorSlot>,
    pub rank: Option<Rank>,
    pub search: Option<String>,
    pub limit: Option<usize>,
    pub offset: usize,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TextQuery {
    pub search: Option<String>,
    pub limit: Option<usize>,
    pub offset: usize,
}

impl TextQuery {
    pub fn search(text: impl Into<String>) -> Self {
        Self {
            search: Some(text.into()),
            ..Self::default()
        }
    }
}

/// One page of query results.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Matches before pagination.
    pub total: usize,
    pub offset: usize,
}

impl<T> Page<T> {
    /// Slices `matches` by `offset` and `limit`.
    pub fn paginate(matches: Vec<T>, offset: usize, limit: Option<usize>) -> Self {
        let total = matches.len();
        let items = matches
            .into_iter()
            .skip(offset)
            .take(limit.unwrap_or(DEFAULT_PAGE_LIMIT))
            .collect();
        Self {
            items,
            total,
            offset,
        }
    }

    pub fn has_more(&self) -> bool {
        self.offset + self.items.len() < self.total
    }
}

/// Case-insensitive substring match; an absent or blank needle matches everything.
pub(crate) fn matches_text(name: &str, needle: Option<&str>) -> bool {
    match needle.map(str::trim) {
        None | Some("") => true,
        Some(needle) => name.to_lowercase().contains(&needle.to_lowercase()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pagination_reports_the_full_total() {
        let page = Page::paginate((0..10).collect::<Vec<_>>(), 8, Some(5));
        assert_eq!(page.items, vec![8, 9]);
        assert_eq!(page.total, 10);
        assert!(!page.has_more());

        let page = Page::paginate((0..10).collect::<Vec<_>>(), 0, Some(3));
        assert!(page.has_more());
    }

    #[test]
    fn text_match_ignores_case_and_blanks() {
        assert!(matches_text("Attack Jewel 1", Some("jewel")));
        assert!(matches_text("Attack Jewel 1", Some("  ")));
        assert!(matches_text("Attack Jewel 1", None));
        assert!(!matches_text("Attack Jewel 1", Some("expert")));
    }
}
