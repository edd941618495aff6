//! Attribute normalization.
//!
//! Translates raw HTML attribute names and values into the keyword names and
//! value shapes component constructors expect. Normalization never fails:
//! malformed `style` declarations are skipped and malformed structured
//! literals fall back to the raw string.

use std::sync::LazyLock;

use html2ui_markup::{AttrValue, Attributes};
use indexmap::IndexMap;
use regex::{Captures, Regex};

use crate::component::{PropValue, Props};

/// HTML attribute names that component frameworks spell differently.
pub const ATTRIBUTE_RENAMES: &[(&str, &str)] = &[
    ("autocomplete", "autoComplete"),
    ("autofocus", "autoFocus"),
    ("class", "className"),
    ("colspan", "colSpan"),
    ("for", "htmlFor"),
    ("maxlength", "maxLength"),
    ("minlength", "minLength"),
    ("novalidate", "noValidate"),
    ("readonly", "readOnly"),
    ("rowspan", "rowSpan"),
    ("tabindex", "tabIndex"),
];

/// Prefixes of custom-data attributes that keep their hyphenated names.
const PASSTHROUGH_PREFIXES: &[&str] = &["data-", "aria-"];

static HYPHEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-(\w)").expect("Invalid hyphen regex"));

/// Convert a hyphenated name to camelCase: `margin-top` -> `marginTop`.
pub fn fix_hyphenated(name: &str) -> String {
    HYPHEN_RE
        .replace_all(name, |caps: &Captures| caps[1].to_uppercase())
        .into_owned()
}

/// Parse a `style` attribute into camelCase property -> value pairs.
///
/// Declarations without a colon or without a property name are skipped.
pub fn parse_style(style: &str) -> IndexMap<String, String> {
    style
        .split(';')
        .filter_map(|declaration| declaration.split_once(':'))
        .filter_map(|(property, value)| {
            let property = property.trim();
            if property.is_empty() {
                return None;
            }
            Some((fix_hyphenated(property), value.trim().to_string()))
        })
        .collect()
}

/// Look up the native boolean for a `"true"`/`"false"` token, in any case.
fn coerce_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

fn rename(name: &str) -> Option<&'static str> {
    ATTRIBUTE_RENAMES
        .iter()
        .find(|(from, _)| *from == name)
        .map(|(_, to)| *to)
}

/// Attribute value after boolean coercion.
enum Raw<'a> {
    Bool(bool),
    Text(&'a str),
    List(&'a [String]),
}

impl Raw<'_> {
    fn into_prop(self) -> PropValue {
        match self {
            Raw::Bool(b) => PropValue::Bool(b),
            Raw::Text(s) => PropValue::String(s.to_string()),
            Raw::List(items) => PropValue::String(items.join(" ")),
        }
    }
}

/// Normalize raw HTML attributes into constructor keyword arguments.
pub fn normalize_attrs(attrs: &Attributes) -> Props {
    let mut props = Props::with_capacity(attrs.len());

    for (name, value) in attrs {
        let raw = match value {
            AttrValue::Text(s) => coerce_bool(s).map_or(Raw::Text(s), Raw::Bool),
            AttrValue::List(items) => Raw::List(items),
        };

        if name == "style" {
            let value = match raw {
                Raw::Text(s) => PropValue::Style(parse_style(s)),
                other => other.into_prop(),
            };
            props.insert(name.clone(), value);
        } else if let Some(renamed) = rename(name) {
            props.insert(renamed.to_string(), raw.into_prop());
        } else if PASSTHROUGH_PREFIXES.iter().any(|p| name.starts_with(p)) {
            props.insert(name.clone(), raw.into_prop());
        } else {
            let value = match raw {
                Raw::Text(s) if s.contains(['{', '[']) => parse_structured(s),
                other => other.into_prop(),
            };
            props.insert(fix_hyphenated(name), value);
        }
    }

    props
}

/// Parse a JSON-like literal embedded in attribute text, keeping the raw
/// string when it does not parse.
fn parse_structured(raw: &str) -> PropValue {
    match serde_json::from_str::<serde_json::Value>(raw) {
        Ok(value) => PropValue::from(value),
        Err(_) => PropValue::String(raw.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn attrs(pairs: &[(&str, &str)]) -> Attributes {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), AttrValue::from(*v)))
            .collect()
    }

    #[test]
    fn fixes_hyphenated_names() {
        assert_eq!(fix_hyphenated("foo-bar"), "fooBar");
        assert_eq!(fix_hyphenated("baz-qux-quux"), "bazQuxQuux");
        assert_eq!(fix_hyphenated("plain"), "plain");
        assert_eq!(fix_hyphenated("trailing-"), "trailing-");
    }

    #[test]
    fn parses_style_declarations() {
        let style = parse_style("color: red; margin-top: 4px");

        let expected: IndexMap<String, String> = [
            ("color".to_string(), "red".to_string()),
            ("marginTop".to_string(), "4px".to_string()),
        ]
        .into_iter()
        .collect();
        assert_eq!(style, expected);
    }

    #[test]
    fn skips_malformed_style_declarations() {
        let style = parse_style("color red; ; :bare; background: url(http://x/y.png);");

        assert_eq!(style.len(), 1);
        assert_eq!(style["background"], "url(http://x/y.png)");
    }

    #[test]
    fn coerces_boolean_strings() {
        let props = normalize_attrs(&attrs(&[
            ("hidden", "true"),
            ("draggable", "FALSE"),
            ("title", "truth"),
        ]));

        assert_eq!(props["hidden"], PropValue::Bool(true));
        assert_eq!(props["draggable"], PropValue::Bool(false));
        assert_eq!(props["title"], PropValue::from("truth"));
    }

    #[test]
    fn renames_known_attributes() {
        let props = normalize_attrs(&attrs(&[
            ("for", "email"),
            ("tabindex", "1"),
            ("readonly", "true"),
            ("colspan", "2"),
        ]));

        let keys: Vec<_> = props.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["htmlFor", "tabIndex", "readOnly", "colSpan"]);
        assert_eq!(props["readOnly"], PropValue::Bool(true));
    }

    #[test]
    fn keeps_data_and_aria_names() {
        let props = normalize_attrs(&attrs(&[("data-user-id", "7"), ("aria-label", "Close")]));

        assert_eq!(props["data-user-id"], PropValue::from("7"));
        assert_eq!(props["aria-label"], PropValue::from("Close"));
    }

    #[test]
    fn camel_cases_other_names() {
        let props = normalize_attrs(&attrs(&[("with-border", "yes"), ("id", "main")]));

        assert!(props.contains_key("withBorder"));
        assert!(props.contains_key("id"));
    }

    #[test]
    fn joins_list_values() {
        let mut raw = Attributes::new();
        raw.insert(
            "class".to_string(),
            AttrValue::List(vec!["card".to_string(), "shadow".to_string()]),
        );
        raw.insert(
            "accept-charset".to_string(),
            AttrValue::List(vec!["utf-8".to_string(), "latin1".to_string()]),
        );

        let props = normalize_attrs(&raw);

        assert_eq!(props["className"], PropValue::from("card shadow"));
        assert_eq!(props["acceptCharset"], PropValue::from("utf-8 latin1"));
    }

    #[test]
    fn parses_structured_values() {
        let props = normalize_attrs(&attrs(&[
            ("options", r#"[{"label": "A", "value": "a"}]"#),
            ("figure", r#"{"data": []}"#),
            ("label", "{not json"),
            ("value", "42"),
        ]));

        assert_eq!(
            props["options"],
            PropValue::Json(json!([{ "label": "A", "value": "a" }]))
        );
        assert_eq!(props["figure"], PropValue::Json(json!({ "data": [] })));
        assert_eq!(props["label"], PropValue::from("{not json"));
        assert_eq!(props["value"], PropValue::from("42"));
    }

    #[test]
    fn converts_style_attribute() {
        let props = normalize_attrs(&attrs(&[("style", "color: red; margin-top: 4px")]));

        match &props["style"] {
            PropValue::Style(style) => {
                assert_eq!(style["color"], "red");
                assert_eq!(style["marginTop"], "4px");
            }
            other => panic!("expected style map, got {other:?}"),
        }
    }

    #[test]
    fn renormalizing_is_a_no_op() {
        let normalized = normalize_attrs(&attrs(&[
            ("class", "card"),
            ("data-x", "1"),
            ("tab-index", "3"),
            ("title", "Hello"),
        ]));

        let again: Attributes = normalized
            .iter()
            .map(|(k, v)| (k.clone(), AttrValue::from(v.as_str().unwrap())))
            .collect();

        assert_eq!(normalize_attrs(&again), normalized);
    }
}
