//! Standard HTML element components.

use std::sync::Arc;

use super::{factories, ComponentSpec};
use crate::traits::{ComponentFactory, ComponentModule};

const NAMESPACE: &str = "html";

/// Props every HTML component accepts.
const GLOBAL: &[&str] = &[
    "children",
    "id",
    "className",
    "style",
    "key",
    "role",
    "accessKey",
    "contentEditable",
    "dir",
    "draggable",
    "hidden",
    "lang",
    "spellCheck",
    "tabIndex",
    "title",
    "n_clicks",
    "n_clicks_timestamp",
    "disable_n_clicks",
];

const PREFIXES: &[&str] = &["data-", "aria-"];

const fn element(name: &'static str, props: &'static [&'static str]) -> ComponentSpec {
    ComponentSpec {
        namespace: NAMESPACE,
        name,
        common: GLOBAL,
        props,
        prefixes: PREFIXES,
        checks: &[],
    }
}

const CITE: &[&str] = &["cite"];
const MEDIA: &[&str] = &[
    "autoPlay",
    "controls",
    "crossOrigin",
    "loop",
    "muted",
    "preload",
    "src",
];

static ELEMENTS: &[ComponentSpec] = &[
    element(
        "A",
        &["href", "download", "hrefLang", "media", "referrerPolicy", "rel", "shape", "target"],
    ),
    element("Abbr", &[]),
    element("Address", &[]),
    element(
        "Area",
        &["alt", "coords", "download", "href", "hrefLang", "media", "referrerPolicy", "rel", "shape", "target"],
    ),
    element("Article", &[]),
    element("Aside", &[]),
    element("Audio", MEDIA),
    element("B", &[]),
    element("Bdi", &[]),
    element("Bdo", &[]),
    element("Blockquote", CITE),
    element("Br", &[]),
    element(
        "Button",
        &[
            "autoFocus",
            "disabled",
            "form",
            "formAction",
            "formEncType",
            "formMethod",
            "formNoValidate",
            "formTarget",
            "name",
            "type",
            "value",
        ],
    ),
    element("Canvas", &["height", "width"]),
    element("Caption", &[]),
    element("Cite", &[]),
    element("Code", &[]),
    element("Col", &["span"]),
    element("Colgroup", &["span"]),
    element("Data", &["value"]),
    element("Datalist", &[]),
    element("Dd", &[]),
    element("Del", &["cite", "dateTime"]),
    element("Details", &["open"]),
    element("Dfn", &[]),
    element("Dialog", &["open"]),
    element("Div", &[]),
    element("Dl", &[]),
    element("Dt", &[]),
    element("Em", &[]),
    element("Embed", &["height", "src", "type", "width"]),
    element("Fieldset", &["disabled", "form", "name"]),
    element("Figcaption", &[]),
    element("Figure", &[]),
    element("Footer", &[]),
    element(
        "Form",
        &["accept", "acceptCharset", "action", "autoComplete", "encType", "method", "name", "noValidate", "target"],
    ),
    element("H1", &[]),
    element("H2", &[]),
    element("H3", &[]),
    element("H4", &[]),
    element("H5", &[]),
    element("H6", &[]),
    element("Header", &[]),
    element("Hgroup", &[]),
    element("Hr", &[]),
    element("I", &[]),
    element(
        "Iframe",
        &["allow", "height", "name", "referrerPolicy", "sandbox", "src", "srcDoc", "width"],
    ),
    element(
        "Img",
        &["alt", "crossOrigin", "height", "referrerPolicy", "sizes", "src", "srcSet", "useMap", "width"],
    ),
    element(
        "Input",
        &[
            "accept",
            "alt",
            "autoComplete",
            "autoFocus",
            "checked",
            "disabled",
            "form",
            "height",
            "inputMode",
            "list",
            "max",
            "maxLength",
            "min",
            "minLength",
            "multiple",
            "name",
            "pattern",
            "placeholder",
            "readOnly",
            "required",
            "size",
            "src",
            "step",
            "type",
            "value",
            "width",
            "n_blur",
            "n_submit",
        ],
    ),
    element("Ins", &["cite", "dateTime"]),
    element("Kbd", &[]),
    element("Label", &["form", "htmlFor"]),
    element("Legend", &[]),
    element("Li", &["value"]),
    element(
        "Link",
        &["crossOrigin", "href", "hrefLang", "integrity", "media", "referrerPolicy", "rel", "sizes", "type"],
    ),
    element("Main", &[]),
    element("Map", &["name"]),
    element("Mark", &[]),
    element("Menu", &[]),
    element(
        "Meter",
        &["form", "high", "low", "max", "min", "optimum", "value"],
    ),
    element("Nav", &[]),
    element("Noscript", &[]),
    element("Object", &["data", "form", "height", "name", "type", "useMap", "width"]),
    element("Ol", &["reversed", "start", "type"]),
    element("Optgroup", &["disabled", "label"]),
    element("Option", &["disabled", "label", "selected", "value"]),
    element("Output", &["form", "htmlFor", "name"]),
    element("P", &[]),
    element("Picture", &[]),
    element("Pre", &[]),
    element("Progress", &["form", "max", "value"]),
    element("Q", CITE),
    element("Rp", &[]),
    element("Rt", &[]),
    element("Ruby", &[]),
    element("S", &[]),
    element("Samp", &[]),
    element(
        "Script",
        &["async", "crossOrigin", "defer", "integrity", "noModule", "referrerPolicy", "src", "type"],
    ),
    element("Section", &[]),
    element("Select", &["autoComplete", "autoFocus", "disabled", "form", "multiple", "name", "required", "size"]),
    element("Small", &[]),
    element("Source", &["media", "sizes", "src", "srcSet", "type"]),
    element("Span", &[]),
    element("Strong", &[]),
    element("Sub", &[]),
    element("Summary", &[]),
    element("Sup", &[]),
    element("Table", &[]),
    element("Tbody", &[]),
    element("Td", &["colSpan", "headers", "rowSpan"]),
    element("Template", &[]),
    element(
        "Textarea",
        &[
            "autoComplete",
            "autoFocus",
            "cols",
            "disabled",
            "form",
            "inputMode",
            "maxLength",
            "minLength",
            "name",
            "placeholder",
            "readOnly",
            "required",
            "rows",
            "value",
            "wrap",
        ],
    ),
    element("Tfoot", &[]),
    element("Th", &["colSpan", "headers", "rowSpan", "scope"]),
    element("Thead", &[]),
    element("Time", &["dateTime"]),
    element("Title", &[]),
    element("Tr", &[]),
    element("Track", &["default", "kind", "label", "src", "srcLang"]),
    element("U", &[]),
    element("Ul", &[]),
    element("Var", &[]),
    element(
        "Video",
        &[
            "autoPlay",
            "controls",
            "crossOrigin",
            "height",
            "loop",
            "muted",
            "poster",
            "preload",
            "src",
            "width",
        ],
    ),
    element("Wbr", &[]),
];

/// One component per standard HTML element, named in title case (`Div`,
/// `H1`, `Textarea`).
#[derive(Debug, Default, Clone, Copy)]
pub struct HtmlModule;

impl ComponentModule for HtmlModule {
    fn name(&self) -> &str {
        NAMESPACE
    }

    fn components(&self) -> Vec<Arc<dyn ComponentFactory>> {
        factories(ELEMENTS)
    }

    fn get(&self, name: &str) -> Option<Arc<dyn ComponentFactory>> {
        ELEMENTS
            .iter()
            .find(|spec| spec.name == name)
            .map(|spec| Arc::new(*spec) as Arc<dyn ComponentFactory>)
    }
}

/// The `Div` component, the default root container.
pub fn div() -> Arc<dyn ComponentFactory> {
    Arc::new(element("Div", &[]))
}
