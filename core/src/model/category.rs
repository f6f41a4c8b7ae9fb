use serde::{Deserialize, Serialize};

/// Category assigned to tasks created without one.
pub const DEFAULT_CATEGORY: &str = "personal";

pub const ALL_ID: &str = "all";
pub const TODAY_ID: &str = "today";
pub const UPCOMING_ID: &str = "upcoming";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Category {
    #[serde(rename = "Id")]
    pub id: String,
    pub name: String,
    pub icon: String,
    pub order: u32,
}

impl Category {
    pub fn new(id: &str, name: &str, icon: &str, order: u32) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            icon: icon.to_string(),
            order,
        }
    }

    /// Ids reserved for the computed views; never persisted.
    pub fn is_virtual_id(id: &str) -> bool {
        matches!(id, ALL_ID | TODAY_ID | UPCOMING_ID)
    }
}

/// The three virtual categories, injected ahead of persisted ones on
/// every fetch. They have no lifecycle of their own.
pub fn virtual_categories() -> Vec<Category> {
    vec![
        Category::new(ALL_ID, "All Tasks", "List", 0),
        Category::new(TODAY_ID, "Today", "Calendar", 1),
        Category::new(UPCOMING_ID, "Upcoming", "Clock", 2),
    ]
}

/// Seed set matching the demo data shipped with the web client.
pub fn default_categories() -> Vec<Category> {
    vec![
        Category::new("work", "Work", "Briefcase", 3),
        Category::new(DEFAULT_CATEGORY, "Personal", "User", 4),
        Category::new("shopping", "Shopping", "ShoppingCart", 5),
    ]
}

/// Which tasks a category view selects. Virtual views are variants of
/// their own so callers never string-compare reserved ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategorySelector {
    All,
    Today,
    Upcoming,
    Persisted(String),
}

impl Default for CategorySelector {
    fn default() -> Self {
        CategorySelector::All
    }
}

impl CategorySelector {
    pub fn parse(id: &str) -> Self {
        match id {
            ALL_ID => CategorySelector::All,
            TODAY_ID => CategorySelector::Today,
            UPCOMING_ID => CategorySelector::Upcoming,
            other => CategorySelector::Persisted(other.to_string()),
        }
    }

    pub fn id(&self) -> &str {
        match self {
            CategorySelector::All => ALL_ID,
            CategorySelector::Today => TODAY_ID,
            CategorySelector::Upcoming => UPCOMING_ID,
            CategorySelector::Persisted(id) => id,
        }
    }
}
