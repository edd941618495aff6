//! Interactive widget components (`core` namespace).

use std::sync::Arc;

use super::{factories, Check, ComponentSpec};
use crate::traits::{ComponentFactory, ComponentModule};

const NAMESPACE: &str = "core";

const COMMON: &[&str] = &["id", "className", "style"];

const fn widget(
    name: &'static str,
    props: &'static [&'static str],
    checks: &'static [(&'static str, Check)],
) -> ComponentSpec {
    ComponentSpec {
        namespace: NAMESPACE,
        name,
        common: COMMON,
        props,
        prefixes: &[],
        checks,
    }
}

const OPTION_LIST: &[&str] = &[
    "options",
    "value",
    "inline",
    "inputClassName",
    "labelClassName",
    "persistence",
];

const RANGE_CHECKS: &[(&str, Check)] = &[
    ("min", Check::Number),
    ("max", Check::Number),
    ("step", Check::Number),
];

static WIDGETS: &[ComponentSpec] = &[
    widget(
        "Input",
        &[
            "value",
            "type",
            "placeholder",
            "debounce",
            "min",
            "max",
            "step",
            "disabled",
            "readOnly",
            "required",
            "name",
            "autoComplete",
            "autoFocus",
            "pattern",
            "size",
            "n_submit",
            "n_blur",
            "persistence",
        ],
        RANGE_CHECKS,
    ),
    widget(
        "Textarea",
        &[
            "value",
            "placeholder",
            "rows",
            "cols",
            "disabled",
            "readOnly",
            "required",
            "name",
            "maxLength",
            "minLength",
            "persistence",
        ],
        &[("rows", Check::Number), ("cols", Check::Number)],
    ),
    widget(
        "Dropdown",
        &[
            "options",
            "value",
            "multi",
            "clearable",
            "searchable",
            "placeholder",
            "disabled",
            "optionHeight",
            "maxHeight",
            "persistence",
        ],
        &[("options", Check::Array)],
    ),
    widget("Checklist", OPTION_LIST, &[("options", Check::Array)]),
    widget("RadioItems", OPTION_LIST, &[("options", Check::Array)]),
    widget(
        "Slider",
        &[
            "min",
            "max",
            "step",
            "value",
            "marks",
            "vertical",
            "disabled",
            "included",
            "tooltip",
            "updatemode",
            "dots",
        ],
        &[
            ("min", Check::Number),
            ("max", Check::Number),
            ("step", Check::Number),
            ("marks", Check::Object),
            ("tooltip", Check::Object),
        ],
    ),
    widget(
        "Markdown",
        &[
            "children",
            "dangerously_allow_html",
            "link_target",
            "mathjax",
            "highlight_config",
        ],
        &[("highlight_config", Check::Object)],
    ),
    widget(
        "Graph",
        &["figure", "config", "responsive", "animate"],
        &[("figure", Check::Object), ("config", Check::Object)],
    ),
    widget(
        "Link",
        &["children", "href", "refresh", "target", "title"],
        &[],
    ),
    widget(
        "Store",
        &["data", "storage_type", "modified_timestamp", "clear_data"],
        &[],
    ),
    widget(
        "Loading",
        &[
            "children",
            "type",
            "color",
            "fullscreen",
            "debug",
            "delay_show",
            "delay_hide",
        ],
        &[("delay_show", Check::Number), ("delay_hide", Check::Number)],
    ),
    widget(
        "Tabs",
        &[
            "children",
            "value",
            "vertical",
            "colors",
            "content_className",
            "parent_className",
        ],
        &[("colors", Check::Object)],
    ),
    widget(
        "Tab",
        &["children", "label", "value", "disabled", "selected_className"],
        &[],
    ),
    widget(
        "Title",
        &["children", "order", "align", "color", "size"],
        &[("order", Check::Number)],
    ),
    widget(
        "Progress",
        &["value", "color", "size", "radius", "striped", "animate", "label"],
        &[("value", Check::Number)],
    ),
];

/// Interactive widgets: inputs, option lists, sliders, graphs, tabs.
#[derive(Debug, Default, Clone, Copy)]
pub struct CoreModule;

impl ComponentModule for CoreModule {
    fn name(&self) -> &str {
        NAMESPACE
    }

    fn components(&self) -> Vec<Arc<dyn ComponentFactory>> {
        factories(WIDGETS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::{PropValue, Props};
    use crate::traits::ConstructError;
    use serde_json::json;

    #[test]
    fn store_rejects_children() {
        let store = CoreModule.get("Store").unwrap();
        let mut props = Props::new();
        props.insert("children".to_string(), PropValue::Children(vec![]));

        assert!(matches!(
            store.construct(props),
            Err(ConstructError::UnexpectedKeyword { ref keyword, .. }) if keyword == "children"
        ));
    }

    #[test]
    fn slider_accepts_numeric_strings() {
        let slider = CoreModule.get("Slider").unwrap();
        let mut props = Props::new();
        props.insert("min".to_string(), "0".into());
        props.insert("max".to_string(), PropValue::Json(json!(10)));
        props.insert("marks".to_string(), PropValue::Json(json!({ "5": "half" })));

        let component = slider.construct(props).unwrap();
        assert_eq!(component.namespace, "core");
    }

    #[test]
    fn slider_rejects_non_numeric_bounds() {
        let slider = CoreModule.get("Slider").unwrap();
        let mut props = Props::new();
        props.insert("max".to_string(), "lots".into());

        let err = slider.construct(props).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid value for `max` in Slider: expected a number"
        );
    }

    #[test]
    fn slider_rejects_non_finite_bounds() {
        let slider = CoreModule.get("Slider").unwrap();

        for value in ["NaN", "inf", "-Infinity"] {
            let mut props = Props::new();
            props.insert("max".to_string(), value.into());

            assert!(
                matches!(slider.construct(props), Err(ConstructError::InvalidProp { .. })),
                "{value} should be rejected"
            );
        }
    }
}
