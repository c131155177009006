//! Category chips, tabs and result state
//!
//! Presentation-agnostic state for the horizontal category scroller, the
//! tab bars, and the "no results" decision.

use serde::{Deserialize, Serialize};
use shared::models::Category;
use shared::types::{ALL_CATEGORIES, CategoryId};

use crate::filter::FilterCriteria;

/// One entry of the category scroller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryChip {
    /// `ALL_CATEGORIES` for the leading "All" chip
    pub id: CategoryId,
    pub name: String,
    pub icon: Option<String>,
    pub selected: bool,
}

/// Build the scroller: an "All" chip followed by every category
///
/// "All" is selected when nothing (or the sentinel) is selected.
pub fn category_chips(categories: &[Category], selected: Option<CategoryId>) -> Vec<CategoryChip> {
    let selected = selected.filter(|id| *id != ALL_CATEGORIES);
    let mut chips = Vec::with_capacity(categories.len() + 1);
    chips.push(CategoryChip {
        id: ALL_CATEGORIES,
        name: "All".to_string(),
        icon: None,
        selected: selected.is_none(),
    });
    chips.extend(categories.iter().map(|c| CategoryChip {
        id: c.id,
        name: c.name.clone(),
        icon: Some(c.icon.clone()),
        selected: selected == Some(c.id),
    }));
    chips
}

/// Tabs on the search screen
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchTab {
    #[default]
    Boutiques,
    Products,
}

impl SearchTab {
    /// The `filter` navigation parameter; `"trending"` opens products
    pub fn from_filter_param(param: Option<&str>) -> Self {
        match param {
            Some("trending") => Self::Products,
            _ => Self::Boutiques,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Boutiques => "boutiques",
            Self::Products => "products",
        }
    }
}

/// Tabs on the favorites screen
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FavoritesTab {
    #[default]
    Boutiques,
    Malls,
}

impl FavoritesTab {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Boutiques => "boutiques",
            Self::Malls => "malls",
        }
    }
}

/// What a list area should render
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "count", rename_all = "snake_case")]
pub enum ResultState {
    /// At least one entity to show
    Items(usize),
    /// Criteria are active and nothing matched; offer "reset filters"
    NoMatches,
    /// No criteria active and the source list itself is empty
    Empty,
}

impl ResultState {
    /// Decide from the criteria and the filtered length only
    pub fn classify(criteria: &FilterCriteria, len: usize) -> Self {
        if len > 0 {
            Self::Items(len)
        } else if criteria.is_active() {
            Self::NoMatches
        } else {
            Self::Empty
        }
    }

    pub fn offers_reset(&self) -> bool {
        matches!(self, Self::NoMatches)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn categories() -> Vec<Category> {
        vec![
            Category {
                id: 1,
                name: "Clothing".to_string(),
                icon: "shirt".to_string(),
            },
            Category {
                id: 2,
                name: "Shoes".to_string(),
                icon: "footprints".to_string(),
            },
        ]
    }

    #[test]
    fn test_chips_all_selected_by_default() {
        let chips = category_chips(&categories(), None);
        assert_eq!(chips.len(), 3);
        assert_eq!(chips[0].id, ALL_CATEGORIES);
        assert!(chips[0].selected);
        assert!(chips[1..].iter().all(|c| !c.selected));
    }

    #[test]
    fn test_chips_selection() {
        let chips = category_chips(&categories(), Some(2));
        let selected: Vec<i64> = chips.iter().filter(|c| c.selected).map(|c| c.id).collect();
        assert_eq!(selected, vec![2]);
        assert_eq!(chips[2].icon.as_deref(), Some("footprints"));
    }

    #[test]
    fn test_chips_sentinel_selects_all() {
        let chips = category_chips(&categories(), Some(ALL_CATEGORIES));
        assert!(chips[0].selected);
    }

    #[test]
    fn test_chips_unknown_selection_highlights_nothing() {
        let chips = category_chips(&categories(), Some(42));
        assert!(chips.iter().all(|c| !c.selected));
    }

    #[test]
    fn test_search_tab_from_param() {
        assert_eq!(SearchTab::from_filter_param(Some("trending")), SearchTab::Products);
        assert_eq!(SearchTab::from_filter_param(Some("new")), SearchTab::Boutiques);
        assert_eq!(SearchTab::from_filter_param(None), SearchTab::Boutiques);
    }

    #[test]
    fn test_tab_serde() {
        assert_eq!(serde_json::to_string(&SearchTab::Products).unwrap(), "\"products\"");
        assert_eq!(FavoritesTab::Malls.as_str(), "malls");
        let tab: FavoritesTab = serde_json::from_str("\"boutiques\"").unwrap();
        assert_eq!(tab, FavoritesTab::Boutiques);
    }

    #[test]
    fn test_result_state() {
        let idle = FilterCriteria::new();
        let active = FilterCriteria::new().with_query("x");

        assert_eq!(ResultState::classify(&idle, 3), ResultState::Items(3));
        assert_eq!(ResultState::classify(&active, 1), ResultState::Items(1));
        assert_eq!(ResultState::classify(&active, 0), ResultState::NoMatches);
        assert_eq!(ResultState::classify(&idle, 0), ResultState::Empty);
        assert!(ResultState::NoMatches.offers_reset());
        assert!(!ResultState::Empty.offers_reset());
    }
}
