//! Trait definitions for component frameworks.

use std::fmt::Debug;
use std::sync::Arc;

use crate::component::{Component, Props};

/// Errors a component constructor can report.
#[derive(Debug, thiserror::Error)]
pub enum ConstructError {
    /// The constructor does not accept `keyword`. The props it was called with
    /// are handed back so the caller can strip the keyword and retry.
    #[error("{component} received an unexpected keyword argument: `{keyword}`")]
    UnexpectedKeyword {
        component: String,
        keyword: String,
        props: Props,
    },

    #[error("Invalid value for `{prop}` in {component}: {message}")]
    InvalidProp {
        component: String,
        prop: String,
        message: String,
    },

    #[error("Failed to construct {component}: {message}")]
    Failed { component: String, message: String },
}

/// A constructible component type.
pub trait ComponentFactory: Debug + Send + Sync {
    /// Component type name (e.g., "Div", "Dropdown")
    fn name(&self) -> &str;

    /// Namespace the component belongs to (e.g., "html")
    fn namespace(&self) -> &str;

    /// Construct the component from keyword arguments.
    fn construct(&self, props: Props) -> Result<Component, ConstructError>;
}

/// A namespace of component types, searched in priority order.
pub trait ComponentModule: Debug + Send + Sync {
    /// Module identifier (e.g., "html", "core")
    fn name(&self) -> &str;

    /// All component types the module exposes.
    fn components(&self) -> Vec<Arc<dyn ComponentFactory>>;

    /// Look up one component by its exact name.
    fn get(&self, name: &str) -> Option<Arc<dyn ComponentFactory>> {
        self.components().into_iter().find(|c| c.name() == name)
    }
}

/// A factory with preset props, merged under the call-time props.
#[derive(Debug, Clone)]
pub struct Preset {
    inner: Arc<dyn ComponentFactory>,
    props: Props,
}

impl Preset {
    pub fn new(inner: Arc<dyn ComponentFactory>, props: Props) -> Self {
        Self { inner, props }
    }
}

impl ComponentFactory for Preset {
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn namespace(&self) -> &str {
        self.inner.namespace()
    }

    fn construct(&self, props: Props) -> Result<Component, ConstructError> {
        let mut merged = self.props.clone();
        merged.extend(props);
        self.inner.construct(merged)
    }
}
