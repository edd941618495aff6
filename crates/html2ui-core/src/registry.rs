//! Component registry for resolving tag names to constructors.
//!
//! Built once per converter by probing the configured modules, so resolution
//! is a map lookup rather than a walk over the modules for every element.

use std::collections::HashMap;
use std::sync::Arc;

use crate::settings::ConvertSettings;
use crate::traits::ComponentFactory;

/// A registered component and the search rank of the module providing it.
#[derive(Debug, Clone)]
struct Entry {
    rank: usize,
    factory: Arc<dyn ComponentFactory>,
}

/// A registry of constructors keyed by component name.
#[derive(Debug, Default)]
pub struct ComponentRegistry {
    /// Explicit tag overrides
    overrides: HashMap<String, Arc<dyn ComponentFactory>>,

    /// Module components by name; the earliest module wins a name clash
    components: HashMap<String, Entry>,

    /// Registered names in module order
    order: Vec<String>,
}

impl ComponentRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from the overrides and module list of `settings`.
    pub fn from_settings(settings: &ConvertSettings) -> Self {
        let mut registry = Self::new();

        for (rank, module) in settings.modules.iter().enumerate() {
            let mut count = 0;
            for factory in module.components() {
                let name = factory.name().to_string();
                if registry.components.contains_key(&name) {
                    continue;
                }
                registry.order.push(name.clone());
                registry.components.insert(name, Entry { rank, factory });
                count += 1;
            }
            tracing::debug!("Registered {} components from module '{}'", count, module.name());
        }

        for (tag, factory) in &settings.element_map {
            registry.overrides.insert(tag.clone(), Arc::clone(factory));
        }

        registry
    }

    /// Resolve a tag name to a constructor.
    ///
    /// Overrides win. Otherwise the tag is matched against each module's
    /// components, by exact name and then by its title-cased form (`div` ->
    /// `Div`), and the earliest module with either match wins.
    pub fn resolve(&self, tag: &str) -> Option<Arc<dyn ComponentFactory>> {
        if let Some(factory) = self.overrides.get(tag) {
            return Some(Arc::clone(factory));
        }

        let exact = self.components.get(tag);
        let titled = self.components.get(&title_case(tag));

        let entry = match (exact, titled) {
            (Some(e), Some(t)) if t.rank < e.rank => t,
            (Some(e), _) => e,
            (None, Some(t)) => t,
            (None, None) => return None,
        };

        Some(Arc::clone(&entry.factory))
    }

    /// Check if a tag resolves.
    pub fn contains(&self, tag: &str) -> bool {
        self.resolve(tag).is_some()
    }

    /// Override tags, sorted.
    pub fn override_tags(&self) -> Vec<&str> {
        let mut tags: Vec<&str> = self.overrides.keys().map(String::as_str).collect();
        tags.sort_unstable();
        tags
    }

    /// All module component names, in module search order.
    pub fn names(&self) -> Vec<&str> {
        self.order.iter().map(String::as_str).collect()
    }
}

/// Title-case a name: the first letter of every alphabetic run is
/// upper-cased and the rest lower-cased (`h1` -> `H1`, `my-tag` -> `My-Tag`).
pub fn title_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut previous_is_letter = false;

    for c in name.chars() {
        if c.is_alphabetic() {
            if previous_is_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            previous_is_letter = true;
        } else {
            out.push(c);
            previous_is_letter = false;
        }
    }

    out
}
