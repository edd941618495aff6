//! Component object model.

use indexmap::IndexMap;
use serde::Serialize;

/// Constructor keyword arguments, in insertion order.
pub type Props = IndexMap<String, PropValue>;

/// Reserved prop carrying built children.
pub const CHILDREN: &str = "children";

/// A constructed UI component.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Component {
    /// Component type name (e.g., "Div")
    #[serde(rename = "type")]
    pub kind: String,

    /// Module the component came from (e.g., "html")
    pub namespace: String,

    /// Props the component was constructed with
    pub props: Props,
}

impl Component {
    /// Create a component.
    pub fn new(namespace: impl Into<String>, kind: impl Into<String>, props: Props) -> Self {
        Self {
            kind: kind.into(),
            namespace: namespace.into(),
            props,
        }
    }

    /// Look up a prop by name.
    pub fn prop(&self, name: &str) -> Option<&PropValue> {
        self.props.get(name)
    }

    /// Built children, empty when the component has none.
    pub fn children(&self) -> &[Child] {
        match self.props.get(CHILDREN) {
            Some(PropValue::Children(children)) => children,
            _ => &[],
        }
    }

    /// Number of components in this subtree, including this one.
    pub fn count(&self) -> usize {
        1 + self
            .children()
            .iter()
            .map(|child| match child {
                Child::Component(c) => c.count(),
                Child::Text(_) => 0,
            })
            .sum::<usize>()
    }
}

/// A child of a component: either a nested component or a text run.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Child {
    Text(String),
    Component(Component),
}

impl Child {
    /// Get as text if it's a text run.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Child::Text(s) => Some(s),
            Child::Component(_) => None,
        }
    }

    /// Get as component if it's a nested component.
    pub fn as_component(&self) -> Option<&Component> {
        match self {
            Child::Component(c) => Some(c),
            Child::Text(_) => None,
        }
    }
}

impl From<Component> for Child {
    fn from(component: Component) -> Self {
        Child::Component(component)
    }
}

impl From<&str> for Child {
    fn from(text: &str) -> Self {
        Child::Text(text.to_string())
    }
}

/// A normalized prop value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PropValue {
    /// Plain string
    String(String),
    /// Native boolean coerced from `"true"`/`"false"`
    Bool(bool),
    /// Number or structured value parsed from a JSON-like literal
    Json(serde_json::Value),
    /// Parsed `style` declarations, camelCase property to value
    Style(IndexMap<String, String>),
    /// Built children
    Children(Vec<Child>),
}

impl PropValue {
    /// Get as string if it's a plain string value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Whether the value is numeric, either a JSON number or a string holding
    /// a finite number.
    pub fn is_numeric(&self) -> bool {
        match self {
            PropValue::Json(value) => value.is_number(),
            PropValue::String(s) => s.trim().parse::<f64>().is_ok_and(f64::is_finite),
            _ => false,
        }
    }
}

impl From<&str> for PropValue {
    fn from(value: &str) -> Self {
        PropValue::String(value.to_string())
    }
}

impl From<String> for PropValue {
    fn from(value: String) -> Self {
        PropValue::String(value)
    }
}

impl From<bool> for PropValue {
    fn from(value: bool) -> Self {
        PropValue::Bool(value)
    }
}

impl From<serde_json::Value> for PropValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::String(s) => PropValue::String(s),
            serde_json::Value::Bool(b) => PropValue::Bool(b),
            other => PropValue::Json(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn div(children: Vec<Child>) -> Component {
        let mut props = Props::new();
        props.insert(CHILDREN.to_string(), PropValue::Children(children));
        Component::new("html", "Div", props)
    }

    #[test]
    fn serializes_like_a_layout_tree() {
        let mut props = Props::new();
        props.insert("id".to_string(), "main".into());
        props.insert(
            CHILDREN.to_string(),
            PropValue::Children(vec!["hi".into()]),
        );
        let component = Component::new("html", "P", props);

        let value = serde_json::to_value(&component).unwrap();

        assert_eq!(
            value,
            json!({
                "type": "P",
                "namespace": "html",
                "props": { "id": "main", "children": ["hi"] }
            })
        );
    }

    #[test]
    fn counts_nested_components() {
        let tree = div(vec![div(vec!["a".into()]).into(), "b".into(), div(vec![]).into()]);

        assert_eq!(tree.count(), 3);
        assert_eq!(tree.children().len(), 3);
        assert_eq!(tree.children()[1].as_text(), Some("b"));
    }

    #[test]
    fn converts_json_scalars_to_native_props() {
        assert_eq!(PropValue::from(json!("x")), PropValue::String("x".to_string()));
        assert_eq!(PropValue::from(json!(true)), PropValue::Bool(true));
        assert_eq!(PropValue::from(json!(3)), PropValue::Json(json!(3)));
    }

    #[test]
    fn detects_numeric_values() {
        assert!(PropValue::from("4.5").is_numeric());
        assert!(PropValue::Json(json!(2)).is_numeric());
        assert!(!PropValue::from("wide").is_numeric());
        assert!(!PropValue::Bool(true).is_numeric());
        assert!(!PropValue::from("NaN").is_numeric());
        assert!(!PropValue::from("inf").is_numeric());
        assert!(!PropValue::from("infinity").is_numeric());
    }
}
