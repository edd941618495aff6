//! Conversion settings.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::Deserialize;

use crate::traits::{ComponentFactory, ComponentModule};
use crate::vocab::{html, CoreModule, HtmlModule};

/// What to do when a tag or attribute has no counterpart in the target
/// component vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Policy {
    /// Log a warning and drop the element or attribute
    #[default]
    Warn,
    /// Abort the conversion with an error
    Raise,
    /// Drop the element or attribute silently
    Ignore,
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Policy::Warn => "warn",
            Policy::Raise => "raise",
            Policy::Ignore => "ignore",
        };
        f.write_str(name)
    }
}

#[derive(Debug, thiserror::Error)]
#[error("Unknown policy '{0}': expected one of warn, raise, ignore")]
pub struct PolicyParseError(String);

impl FromStr for Policy {
    type Err = PolicyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "warn" => Ok(Policy::Warn),
            "raise" => Ok(Policy::Raise),
            "ignore" => Ok(Policy::Ignore),
            _ => Err(PolicyParseError(s.to_string())),
        }
    }
}

/// Settings for one conversion.
#[derive(Debug, Clone)]
pub struct ConvertSettings {
    /// Modules searched in order for tags without an override
    pub modules: Vec<Arc<dyn ComponentModule>>,

    /// Tag name -> constructor overrides, checked before any module
    pub element_map: HashMap<String, Arc<dyn ComponentFactory>>,

    /// Wrap the converted nodes in a single root container
    pub parent_container: bool,

    /// Constructor used for the root container
    pub root_container: Arc<dyn ComponentFactory>,

    /// Policy for tags no module provides
    pub on_missing_element: Policy,

    /// Policy for attributes a constructor rejects
    pub on_missing_attribute: Policy,
}

impl Default for ConvertSettings {
    fn default() -> Self {
        Self {
            modules: vec![Arc::new(HtmlModule), Arc::new(CoreModule)],
            element_map: HashMap::new(),
            parent_container: true,
            root_container: html::div(),
            on_missing_element: Policy::Warn,
            on_missing_attribute: Policy::Warn,
        }
    }
}

impl ConvertSettings {
    /// Map a tag name to a constructor, taking precedence over module search.
    pub fn with_element(
        mut self,
        tag: impl Into<String>,
        factory: Arc<dyn ComponentFactory>,
    ) -> Self {
        self.element_map.insert(tag.into(), factory);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_policies_case_insensitively() {
        assert_eq!("warn".parse::<Policy>().unwrap(), Policy::Warn);
        assert_eq!("RAISE".parse::<Policy>().unwrap(), Policy::Raise);
        assert_eq!("Ignore".parse::<Policy>().unwrap(), Policy::Ignore);
        assert!("explode".parse::<Policy>().is_err());
    }

    #[test]
    fn defaults_search_html_then_core() {
        let settings = ConvertSettings::default();
        let names: Vec<_> = settings.modules.iter().map(|m| m.name()).collect();

        assert_eq!(names, vec!["html", "core"]);
        assert!(settings.parent_container);
        assert_eq!(settings.on_missing_element, Policy::Warn);
        assert_eq!(settings.on_missing_attribute, Policy::Warn);
        assert_eq!(settings.root_container.name(), "Div");
    }
}
