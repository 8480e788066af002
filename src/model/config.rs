use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::todo::FilterMode;

/// Configuration from config.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// View shown at startup
    #[serde(default)]
    pub default_filter: FilterMode,
    #[serde(default = "default_true")]
    pub show_key_hints: bool,
    /// Theme slot overrides, e.g. `background = "#000000"`
    #[serde(default)]
    pub colors: HashMap<String, String>,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            default_filter: FilterMode::All,
            show_key_hints: true,
            colors: HashMap::new(),
        }
    }
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.ui.default_filter, FilterMode::All);
        assert!(config.ui.show_key_hints);
        assert!(config.ui.colors.is_empty());
    }

    #[test]
    fn ui_section_parses() {
        let config: Config = toml::from_str(
            r##"[ui]
default_filter = "removed"
show_key_hints = false

[ui.colors]
highlight = "#112233"
"##,
        )
        .unwrap();
        assert_eq!(config.ui.default_filter, FilterMode::Removed);
        assert!(!config.ui.show_key_hints);
        assert_eq!(config.ui.colors.get("highlight").unwrap(), "#112233");
    }
}
