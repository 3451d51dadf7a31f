//! # Outlet Configuration
//!
//! [`PosConfig`] describes one outlet: its name and currency, the kitchen stations shown on
//! the board, where order numbering starts, actor channel sizes, and the menu.
//!
//! Loaded from TOML with the search order:
//! 1. `$POS_CONFIG`
//! 2. `./pos_config.toml`
//! 3. Built-in defaults
//!
//! Every section is optional; missing fields take their defaults.
//!
//! ```toml
//! [outlet]
//! name = "Spice Route"
//!
//! [kitchen]
//! stations = ["Main Kitchen", "Tandoor", "Grill"]
//! first_order_number = 2001
//!
//! [[menu]]
//! id = "m1"
//! name = "Butter Chicken"
//! category_id = "mains"
//! price = 350.0
//! tags = ["non-veg", "bestseller"]
//! ```

use crate::model::{Menu, MenuItem, MenuTag, Station};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

/// Environment variable naming the config file.
pub const CONFIG_ENV: &str = "POS_CONFIG";

/// Config file looked for in the working directory.
pub const LOCAL_CONFIG_FILE: &str = "pos_config.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PosConfig {
    pub outlet: OutletConfig,
    pub actors: ActorConfig,
    pub kitchen: KitchenConfig,
    pub menu: Vec<MenuItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutletConfig {
    pub name: String,
    pub currency: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActorConfig {
    /// Request channel capacity per actor.
    pub buffer_size: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KitchenConfig {
    /// Board tabs after "All", in display order.
    pub stations: Vec<Station>,
    pub first_order_number: u32,
}

impl Default for PosConfig {
    fn default() -> Self {
        Self {
            outlet: OutletConfig::default(),
            actors: ActorConfig::default(),
            kitchen: KitchenConfig::default(),
            menu: sample_menu(),
        }
    }
}

impl Default for OutletConfig {
    fn default() -> Self {
        Self {
            name: "Spice Route".to_string(),
            currency: "INR".to_string(),
        }
    }
}

impl Default for ActorConfig {
    fn default() -> Self {
        Self { buffer_size: 32 }
    }
}

impl Default for KitchenConfig {
    fn default() -> Self {
        Self {
            stations: Station::standard(),
            first_order_number: 1024,
        }
    }
}

fn sample_menu() -> Vec<MenuItem> {
    use MenuTag::*;
    vec![
        MenuItem::new("m1", "Butter Chicken", "mains", 350.0).with_tags([NonVeg, Bestseller]),
        MenuItem::new("m2", "Paneer Tikka Masala", "mains", 300.0).with_tags([Veg]),
        MenuItem::new("m3", "Dal Makhani", "mains", 250.0).with_tags([Veg, Jain]),
        MenuItem::new("m4", "Garlic Naan", "breads", 40.0)
            .with_station(Station::Tandoor)
            .with_tags([Veg]),
        MenuItem::new("m5", "Chicken 65", "starters", 220.0)
            .with_station(Station::Fryer)
            .with_tags([NonVeg, Spicy]),
        MenuItem::new("m6", "Gulab Jamun", "desserts", 90.0)
            .with_station(Station::Dessert)
            .with_tags([Veg]),
        MenuItem::new("m7", "Mango Lassi", "beverages", 80.0)
            .with_station(Station::Beverage)
            .with_tags([Veg, Bestseller]),
    ]
}

impl PosConfig {
    /// Load configuration using the standard search order:
    /// 1. `$POS_CONFIG` environment variable
    /// 2. `./pos_config.toml` in the current working directory
    /// 3. Built-in defaults
    ///
    /// A file that fails to load is logged and skipped.
    pub fn load() -> Self {
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            let p = PathBuf::from(&path);
            if p.exists() {
                match Self::load_from_file(&p) {
                    Ok(config) => {
                        info!(path = %p.display(), outlet = %config.outlet.name, "Loaded config from POS_CONFIG");
                        return config;
                    }
                    Err(e) => {
                        warn!(path = %p.display(), error = %e, "Failed to load config from POS_CONFIG, falling back");
                    }
                }
            } else {
                warn!(path = %path, "POS_CONFIG points to non-existent file, falling back");
            }
        }

        let local = PathBuf::from(LOCAL_CONFIG_FILE);
        if local.exists() {
            match Self::load_from_file(&local) {
                Ok(config) => {
                    info!(outlet = %config.outlet.name, "Loaded config from ./pos_config.toml");
                    return config;
                }
                Err(e) => {
                    warn!(error = %e, "Failed to load ./pos_config.toml, using defaults");
                }
            }
        }

        info!("No pos_config.toml found, using built-in defaults");
        Self::default()
    }

    /// Load and validate a specific TOML file.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        let config: Self =
            toml::from_str(&contents).map_err(|e| ConfigError::Parse(path.to_path_buf(), e))?;
        config.validate()?;
        Ok(config)
    }

    /// Reports every problem at once rather than stopping at the first.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        if self.actors.buffer_size == 0 {
            errors.push("actors.buffer_size must be at least 1".to_string());
        }
        if self.kitchen.stations.is_empty() {
            errors.push("kitchen.stations must list at least one station".to_string());
        }

        let mut stations = HashSet::new();
        for station in &self.kitchen.stations {
            if !stations.insert(station) {
                errors.push(format!("kitchen station '{station}' is duplicated"));
            }
        }

        let mut seen = HashSet::new();
        for item in &self.menu {
            if !seen.insert(&item.id) {
                errors.push(format!("menu id '{}' is duplicated", item.id));
            }
            if !item.price.is_finite() || item.price < 0.0 {
                errors.push(format!("menu item '{}' has invalid price {}", item.id, item.price));
            }
            // An empty station list is already reported above.
            let station = item.routed_station();
            if !stations.is_empty() && !stations.contains(&station) {
                errors.push(format!(
                    "menu item '{}' routes to '{station}', which is not in kitchen.stations",
                    item.id
                ));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// The catalog, with blank codes filled from the item id.
    pub fn menu(&self) -> Menu {
        let items = self
            .menu
            .iter()
            .cloned()
            .map(|mut item| {
                if item.code.trim().is_empty() {
                    item.code = item.id.0.to_uppercase();
                }
                item
            })
            .collect();
        Menu::new(items)
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config I/O error ({}): {}", .0.display(), .1)]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Config parse error ({}): {}", .0.display(), .1)]
    Parse(PathBuf, #[source] toml::de::Error),

    #[error("Config validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = PosConfig::default();
        config.validate().unwrap();
        assert_eq!(config.kitchen.first_order_number, 1024);
        assert_eq!(config.actors.buffer_size, 32);
        assert_eq!(config.kitchen.stations.len(), 5);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let config: PosConfig = toml::from_str(
            r#"
            [kitchen]
            stations = ["Main Kitchen", "Grill"]

            [[menu]]
            id = "c1"
            name = "Masala Chai"
            category_id = "beverages"
            price = 30.0
            station = "Beverage"
            tags = ["veg"]
            "#,
        )
        .unwrap();

        assert_eq!(
            config.kitchen.stations,
            vec![Station::MainKitchen, Station::Other("Grill".into())]
        );
        assert_eq!(config.kitchen.first_order_number, 1024);
        assert_eq!(config.outlet.currency, "INR");

        let menu = config.menu();
        let chai = &menu.items()[0];
        assert_eq!(chai.code, "C1");
        assert!(chai.available);
        assert_eq!(chai.routed_station(), Station::Beverage);
        assert_eq!(chai.tags, vec![MenuTag::Veg]);
    }

    #[test]
    fn test_validation_collects_every_problem() {
        let mut config = PosConfig::default();
        config.actors.buffer_size = 0;
        config.kitchen.stations.clear();
        config.menu.push(MenuItem::new("m1", "Duplicate", "mains", 10.0));
        config.menu.push(MenuItem::new("m9", "Broken", "mains", f64::NAN));

        match config.validate() {
            Err(ConfigError::Validation(errors)) => assert_eq!(errors.len(), 4),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_menu_item_must_route_to_a_listed_station() {
        let mut config = PosConfig::default();
        let kebab = MenuItem::new("m9", "Seekh Kebab", "starters", 280.0)
            .with_station(Station::from("Grill"));
        config.menu.push(kebab);

        match config.validate() {
            Err(ConfigError::Validation(errors)) => {
                assert_eq!(errors.len(), 1);
                assert!(errors[0].contains("m9"));
                assert!(errors[0].contains("Grill"));
            }
            other => panic!("expected validation error, got {other:?}"),
        }

        config.kitchen.stations.push(Station::from("Grill"));
        config.validate().unwrap();
    }

    #[test]
    fn test_duplicate_stations_are_rejected() {
        let mut config = PosConfig::default();
        config.kitchen.stations.push(Station::Other("Tandoor".into()));

        match config.validate() {
            Err(ConfigError::Validation(errors)) => {
                assert_eq!(errors, vec!["kitchen station 'Tandoor' is duplicated".to_string()]);
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_load_from_file_reports_parse_errors() {
        let path = std::env::temp_dir().join(format!("pos_config_{}.toml", std::process::id()));
        std::fs::write(&path, "[actors]\nbuffer_size = \"lots\"\n").unwrap();

        let err = PosConfig::load_from_file(&path).unwrap_err();
        std::fs::remove_file(&path).ok();

        assert!(matches!(err, ConfigError::Parse(..)));
        assert!(err.to_string().contains("pos_config_"));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = PosConfig::load_from_file(Path::new("/nonexistent/pos_config.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(..)));
    }
}
