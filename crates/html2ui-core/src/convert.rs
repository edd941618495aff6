//! HTML to component tree conversion.

use html2ui_markup::{parse_fragment, Element, MarkupNode, ParseError, ROOT_TAG};
use serde::Serialize;

use crate::attrs::normalize_attrs;
use crate::component::{Child, Component, PropValue, Props, CHILDREN};
use crate::registry::ComponentRegistry;
use crate::settings::{ConvertSettings, Policy};
use crate::traits::{ComponentFactory, ConstructError};

/// Errors that can occur during conversion.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Could not find the element '{tag}' in any of the modules")]
    MissingElement { tag: String },

    #[error("Unrecognized attribute '{attribute}' in the element '{element}'")]
    AttributeRejected { attribute: String, element: String },

    #[error("Failed to construct the element '{element}': {source}")]
    Construct {
        element: String,
        #[source]
        source: ConstructError,
    },
}

/// Result of converting a fragment.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Converted {
    /// Converted nodes wrapped in the root container
    Root(Component),
    /// Converted top-level nodes without a container
    Fragment(Vec<Child>),
}

impl Converted {
    /// Top-level converted nodes.
    pub fn nodes(&self) -> &[Child] {
        match self {
            Converted::Root(root) => root.children(),
            Converted::Fragment(children) => children,
        }
    }

    /// The root container, if the result has one.
    pub fn root(&self) -> Option<&Component> {
        match self {
            Converted::Root(root) => Some(root),
            Converted::Fragment(_) => None,
        }
    }

    /// Number of components in the result, the root container included.
    pub fn component_count(&self) -> usize {
        match self {
            Converted::Root(root) => root.count(),
            Converted::Fragment(children) => children
                .iter()
                .filter_map(Child::as_component)
                .map(Component::count)
                .sum(),
        }
    }
}

/// Converts markup into component trees using one set of settings.
///
/// The component registry is built once, when the converter is created, and
/// shared by every conversion. A converter holds no per-call state, so one
/// instance can serve conversions on several threads.
#[derive(Debug)]
pub struct Converter {
    settings: ConvertSettings,
    registry: ComponentRegistry,
}

impl Converter {
    /// Create a converter, probing the configured modules.
    pub fn new(settings: ConvertSettings) -> Self {
        let registry = ComponentRegistry::from_settings(&settings);
        Self { settings, registry }
    }

    pub fn settings(&self) -> &ConvertSettings {
        &self.settings
    }

    pub fn registry(&self) -> &ComponentRegistry {
        &self.registry
    }

    /// Convert an HTML fragment.
    pub fn convert(&self, source: &str) -> Result<Converted, ConvertError> {
        let root = parse_fragment(source)?;
        self.convert_root(&root)
    }

    /// Convert the children of an already parsed root element.
    pub fn convert_root(&self, root: &Element) -> Result<Converted, ConvertError> {
        let children = self.build_children(&root.children)?;

        if !self.settings.parent_container {
            return Ok(Converted::Fragment(children));
        }

        let mut props = Props::new();
        props.insert(CHILDREN.to_string(), PropValue::Children(children));
        let root = self.construct(ROOT_TAG, self.settings.root_container.as_ref(), props)?;

        Ok(Converted::Root(root))
    }

    /// Convert one markup node.
    ///
    /// Comments and whitespace-only text yield `None`, as do elements that
    /// cannot be resolved when the missing-element policy is not `raise`.
    pub fn build(&self, node: &MarkupNode) -> Result<Option<Child>, ConvertError> {
        match node {
            MarkupNode::Comment(_) => Ok(None),
            MarkupNode::Text(text) => {
                let text = text.trim();
                if text.is_empty() {
                    Ok(None)
                } else {
                    Ok(Some(Child::Text(text.to_string())))
                }
            }
            MarkupNode::Element(element) => {
                Ok(self.build_element(element)?.map(Child::Component))
            }
        }
    }

    fn build_children(&self, nodes: &[MarkupNode]) -> Result<Vec<Child>, ConvertError> {
        let mut children = Vec::with_capacity(nodes.len());
        for node in nodes {
            if let Some(child) = self.build(node)? {
                children.push(child);
            }
        }
        Ok(children)
    }

    fn build_element(&self, element: &Element) -> Result<Option<Component>, ConvertError> {
        let tag = element.name.as_str();

        let Some(factory) = self.registry.resolve(tag) else {
            return match self.settings.on_missing_element {
                Policy::Warn => {
                    tracing::warn!("Could not find the element '{}' in any of the modules", tag);
                    Ok(None)
                }
                Policy::Raise => Err(ConvertError::MissingElement {
                    tag: tag.to_string(),
                }),
                Policy::Ignore => Ok(None),
            };
        };
        tracing::debug!(
            "Resolved <{}> to {}.{}",
            tag,
            factory.namespace(),
            factory.name()
        );

        let children = self.build_children(&element.children)?;

        let mut props = normalize_attrs(&element.attrs);
        if !children.is_empty() {
            props.insert(CHILDREN.to_string(), PropValue::Children(children));
        }

        self.construct(tag, factory.as_ref(), props).map(Some)
    }

    /// Call a constructor, stripping rejected keywords one at a time until it
    /// succeeds. Errors other than a rejected keyword are returned as is.
    fn construct(
        &self,
        tag: &str,
        factory: &dyn ComponentFactory,
        mut props: Props,
    ) -> Result<Component, ConvertError> {
        let mut rejected: Vec<String> = Vec::new();

        loop {
            match factory.construct(props) {
                Ok(component) => return Ok(component),
                Err(ConstructError::UnexpectedKeyword {
                    component,
                    keyword,
                    props: returned,
                }) => {
                    // A keyword we cannot strip would be rejected forever.
                    if rejected.contains(&keyword) || !returned.contains_key(&keyword) {
                        return Err(ConvertError::Construct {
                            element: tag.to_string(),
                            source: ConstructError::UnexpectedKeyword {
                                component,
                                keyword,
                                props: returned,
                            },
                        });
                    }

                    match self.settings.on_missing_attribute {
                        Policy::Warn => tracing::warn!(
                            "Removed the attribute '{}' from the element '{}' because it was not valid",
                            keyword,
                            tag
                        ),
                        Policy::Raise => {
                            return Err(ConvertError::AttributeRejected {
                                attribute: keyword,
                                element: tag.to_string(),
                            })
                        }
                        Policy::Ignore => {}
                    }

                    props = returned;
                    props.shift_remove(&keyword);
                    rejected.push(keyword);
                }
                Err(source) => {
                    return Err(ConvertError::Construct {
                        element: tag.to_string(),
                        source,
                    })
                }
            }
        }
    }
}

/// Convert an HTML fragment with the given settings.
///
/// Builds a fresh [`Converter`]; reuse one converter when converting many
/// documents with the same settings.
pub fn html_to_components(
    source: &str,
    settings: &ConvertSettings,
) -> Result<Converted, ConvertError> {
    Converter::new(settings.clone()).convert(source)
}
