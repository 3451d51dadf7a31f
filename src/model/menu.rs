use crate::model::Station;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Catalog identifier of a menu item (e.g. `"m1"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MenuItemId(pub String);

impl From<&str> for MenuItemId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl Display for MenuItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Dietary and merchandising tags shown on a menu card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MenuTag {
    Veg,
    NonVeg,
    Jain,
    Bestseller,
    Spicy,
}

impl MenuTag {
    /// Tag colour used by the menu grid.
    pub fn color(&self) -> &'static str {
        match self {
            MenuTag::Veg => "green",
            MenuTag::NonVeg => "red",
            MenuTag::Jain => "cyan",
            MenuTag::Bestseller => "gold",
            MenuTag::Spicy => "volcano",
        }
    }
}

/// A sellable catalog entry.
///
/// The cart copies `price`, `name` and `station` when the item is added, so later catalog
/// edits never reach an open cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: MenuItemId,
    pub name: String,
    /// Short code typed at the register; blank in config means the upper-cased id.
    #[serde(default)]
    pub code: String,
    pub category_id: String,
    pub price: f64,
    #[serde(default = "default_available")]
    pub available: bool,
    /// Preparation station; `None` routes to the main kitchen.
    #[serde(default)]
    pub station: Option<Station>,
    #[serde(default)]
    pub tags: Vec<MenuTag>,
}

fn default_available() -> bool {
    true
}

impl MenuItem {
    /// Creates an available item whose code is the upper-cased id.
    ///
    /// # Arguments
    /// * `id` - Catalog identifier
    /// * `name` - Display name
    /// * `category_id` - Category the item is listed under
    /// * `price` - Unit price
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category_id: impl Into<String>,
        price: f64,
    ) -> Self {
        let id = id.into();
        Self {
            code: id.to_uppercase(),
            id: MenuItemId(id),
            name: name.into(),
            category_id: category_id.into(),
            price,
            available: true,
            station: None,
            tags: Vec::new(),
        }
    }

    pub fn with_station(mut self, station: Station) -> Self {
        self.station = Some(station);
        self
    }

    pub fn with_tags(mut self, tags: impl IntoIterator<Item = MenuTag>) -> Self {
        self.tags = tags.into_iter().collect();
        self
    }

    /// Station the item's kitchen ticket is routed to.
    pub fn routed_station(&self) -> Station {
        self.station.clone().unwrap_or_default()
    }
}

/// Category selector for [`Menu::filter`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Category(String),
}

/// The outlet's catalog.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Menu {
    items: Vec<MenuItem>,
}

impl Menu {
    pub fn new(items: Vec<MenuItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn get(&self, id: &MenuItemId) -> Option<&MenuItem> {
        self.items.iter().find(|item| &item.id == id)
    }

    /// Category ids in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for item in &self.items {
            if !seen.contains(&item.category_id.as_str()) {
                seen.push(&item.category_id);
            }
        }
        seen
    }

    /// Available items in `category` whose name or code contains `search`
    /// (case-insensitive). An empty search matches everything.
    pub fn filter(&self, category: &CategoryFilter, search: &str) -> Vec<&MenuItem> {
        let needle = search.trim().to_lowercase();
        self.items
            .iter()
            .filter(|item| item.available)
            .filter(|item| match category {
                CategoryFilter::All => true,
                CategoryFilter::Category(id) => &item.category_id == id,
            })
            .filter(|item| {
                item.name.to_lowercase().contains(&needle)
                    || item.code.to_lowercase().contains(&needle)
            })
            .collect()
    }
}
