//! App Configuration
//!
//! Optional JSON block embedded in `index.html`:
//!
//! ```html
//! <script id="far-away-config" type="application/json">
//!   { "start_empty": true, "max_quantity": 10 }
//! </script>
//! ```

use log::LevelFilter;
use serde::Deserialize;

use crate::error::ConfigError;
use crate::models::{Item, ItemId};
use crate::packing_list::{PackingList, DEFAULT_CLEAR_MESSAGE};

pub const CONFIG_ELEMENT_ID: &str = "far-away-config";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SeedItem {
    pub description: String,
    pub quantity: u32,
    #[serde(default)]
    pub packed: bool,
}

impl SeedItem {
    fn new(description: &str, quantity: u32) -> Self {
        Self {
            description: description.to_string(),
            quantity,
            packed: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub seed: Vec<SeedItem>,
    pub start_empty: bool,
    pub max_quantity: u32,
    pub confirm_clear_message: String,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed: vec![
                SeedItem::new("Passports", 2),
                SeedItem::new("Socks", 12),
                SeedItem::new("Shoes", 4),
            ],
            start_empty: false,
            max_quantity: 20,
            confirm_clear_message: DEFAULT_CLEAR_MESSAGE.to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read the inline config block, falling back to defaults
    pub fn load() -> Self {
        let text = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());

        let Some(text) = text else {
            return Self::default();
        };
        match Self::from_json(&text) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("[CONFIG] {}; using defaults", e);
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_quantity == 0 {
            return Err(ConfigError::Invalid("max_quantity must be at least 1".to_string()));
        }
        for seed in &self.seed {
            if seed.description.is_empty() {
                return Err(ConfigError::Invalid("seed item with empty description".to_string()));
            }
            if !(1..=self.max_quantity).contains(&seed.quantity) {
                return Err(ConfigError::Invalid(format!(
                    "seed item {:?} has quantity {} outside 1..={}",
                    seed.description, seed.quantity, self.max_quantity
                )));
            }
        }
        self.log_level
            .parse::<LevelFilter>()
            .map_err(|_| ConfigError::Invalid(format!("unknown log_level {:?}", self.log_level)))?;
        Ok(())
    }

    /// Starting list, ids numbered from 1 in seed order
    pub fn initial_list(&self) -> PackingList {
        if self.start_empty {
            return PackingList::new();
        }
        PackingList::from_items(self.seed.iter().enumerate().map(|(i, seed)| Item {
            id: ItemId(i as u64 + 1),
            description: seed.description.clone(),
            quantity: seed.quantity,
            packed: seed.packed,
        }))
    }

    pub fn level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_seed() {
        let list = AppConfig::default().initial_list();
        let rows: Vec<(u64, &str, u32, bool)> = list
            .iter()
            .map(|i| (i.id.0, i.description.as_str(), i.quantity, i.packed))
            .collect();
        assert_eq!(
            rows,
            vec![(1, "Passports", 2, false), (2, "Socks", 12, false), (3, "Shoes", 4, false)]
        );
    }

    #[test]
    fn test_empty_json_is_default() {
        assert_eq!(AppConfig::from_json("{}").unwrap(), AppConfig::default());
    }

    #[test]
    fn test_start_empty() {
        let config = AppConfig::from_json(r#"{"start_empty": true}"#).unwrap();
        assert!(config.initial_list().is_empty());
    }

    #[test]
    fn test_custom_seed() {
        let config = AppConfig::from_json(
            r#"{"seed": [{"description": "Tent", "quantity": 1, "packed": true}], "max_quantity": 5}"#,
        )
        .unwrap();
        let list = config.initial_list();
        assert_eq!(list.len(), 1);
        assert!(list.items()[0].packed);
        assert_eq!(config.max_quantity, 5);
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(AppConfig::from_json("{"), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_invalid_values() {
        assert!(matches!(
            AppConfig::from_json(r#"{"max_quantity": 0}"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            AppConfig::from_json(r#"{"seed": [{"description": "Tent", "quantity": 30}]}"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            AppConfig::from_json(r#"{"seed": [{"description": "", "quantity": 1}]}"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            AppConfig::from_json(r#"{"log_level": "loud"}"#),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn test_level_filter() {
        let config = AppConfig::from_json(r#"{"log_level": "debug"}"#).unwrap();
        assert_eq!(config.level_filter(), LevelFilter::Debug);
        assert_eq!(AppConfig::default().level_filter(), LevelFilter::Info);
    }
}
