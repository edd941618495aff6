//! Built-in component vocabularies.
//!
//! `html` mirrors the standard HTML elements one-to-one; `core` (see
//! [`widgets`]) provides interactive widgets. Both are plain tables of [`ComponentSpec`] values.

pub mod html;
pub mod widgets;

use std::sync::Arc;

use crate::component::{Component, PropValue, Props};
use crate::traits::{ComponentFactory, ComponentModule, ConstructError};

pub use self::html::HtmlModule;
pub use self::widgets::CoreModule;

/// Value shape a prop must have.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Check {
    /// JSON number or numeric string
    Number,
    /// JSON array
    Array,
    /// JSON object
    Object,
}

impl Check {
    fn accepts(self, value: &PropValue) -> bool {
        match self {
            Check::Number => value.is_numeric(),
            Check::Array => matches!(value, PropValue::Json(v) if v.is_array()),
            Check::Object => matches!(value, PropValue::Json(v) if v.is_object()),
        }
    }

    fn describe(self) -> &'static str {
        match self {
            Check::Number => "expected a number",
            Check::Array => "expected a JSON array",
            Check::Object => "expected a JSON object",
        }
    }
}

/// Static description of a component constructor.
#[derive(Debug, Clone, Copy)]
pub struct ComponentSpec {
    pub namespace: &'static str,
    pub name: &'static str,

    /// Props shared by every component of the vocabulary
    pub common: &'static [&'static str],

    /// Props specific to this component
    pub props: &'static [&'static str],

    /// Prop name prefixes accepted wholesale (e.g., "data-")
    pub prefixes: &'static [&'static str],

    /// Value checks applied after the keyword check
    pub checks: &'static [(&'static str, Check)],
}

impl ComponentSpec {
    /// Whether the constructor accepts a keyword.
    pub fn accepts(&self, keyword: &str) -> bool {
        self.common.iter().any(|p| *p == keyword)
            || self.props.iter().any(|p| *p == keyword)
            || self.prefixes.iter().any(|p| keyword.starts_with(p))
    }
}

impl ComponentFactory for ComponentSpec {
    fn name(&self) -> &str {
        self.name
    }

    fn namespace(&self) -> &str {
        self.namespace
    }

    fn construct(&self, props: Props) -> Result<Component, ConstructError> {
        if let Some(keyword) = props.keys().find(|k| !self.accepts(k)).cloned() {
            return Err(ConstructError::UnexpectedKeyword {
                component: self.name.to_string(),
                keyword,
                props,
            });
        }

        for (prop, check) in self.checks {
            if let Some(value) = props.get(*prop) {
                if !check.accepts(value) {
                    return Err(ConstructError::InvalidProp {
                        component: self.name.to_string(),
                        prop: prop.to_string(),
                        message: check.describe().to_string(),
                    });
                }
            }
        }

        Ok(Component::new(self.namespace, self.name, props))
    }
}

/// Wrap a spec table as factories.
fn factories(specs: &'static [ComponentSpec]) -> Vec<Arc<dyn ComponentFactory>> {
    specs
        .iter()
        .map(|spec| Arc::new(*spec) as Arc<dyn ComponentFactory>)
        .collect()
}

/// Look up a built-in module by name.
pub fn builtin_module(name: &str) -> Option<Arc<dyn ComponentModule>> {
    match name {
        "html" => Some(Arc::new(HtmlModule)),
        "core" => Some(Arc::new(CoreModule)),
        _ => None,
    }
}
