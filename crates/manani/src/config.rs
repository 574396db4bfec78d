use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Where the storefront finds its elements in the page markup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageConfig {
    #[serde(default = "default_grid_selector")]
    pub grid_selector: String,
    #[serde(default = "default_hero_selector")]
    pub hero_selector: String,
}

fn default_grid_selector() -> String {
    ".product-grid".to_string()
}

fn default_hero_selector() -> String {
    ".hero-section .btn".to_string()
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            grid_selector: default_grid_selector(),
            hero_selector: default_hero_selector(),
        }
    }
}

impl PageConfig {
    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_page_defaults() {
        let cfg = PageConfig::from_json("{}").unwrap();
        assert_eq!(cfg, PageConfig::default());
        assert_eq!(cfg.grid_selector, ".product-grid");
        assert_eq!(cfg.hero_selector, ".hero-section .btn");

        let cfg = PageConfig::from_json(r##"{"hero_selector": "#shop-now"}"##).unwrap();
        assert_eq!(cfg.grid_selector, ".product-grid");
        assert_eq!(cfg.hero_selector, "#shop-now");
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(PageConfig::from_json("{ nope").is_err());
    }
}
