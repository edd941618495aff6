//! Lenient HTML fragment parser.
//!
//! Built on the `quick-xml` tokenizer with HTML-friendly relaxations: void
//! elements need no closing tag, stray end tags are dropped, unclosed elements
//! are closed at end of input, and valueless attributes are accepted. A `<`
//! that cannot open a tag is text, and `script`/`style` content is raw text.

use quick_xml::escape::{resolve_html5_entity, unescape_with};
use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;

use crate::node::{AttrValue, Attributes, Element, MarkupNode};

/// Tag of the synthetic element every fragment is wrapped in.
pub const ROOT_TAG: &str = "body";

/// Elements that never have content and need no closing tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source",
    "track", "wbr",
];

/// Elements whose content is raw text rather than markup.
const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style"];

/// Attributes whose values are whitespace-separated token lists.
const MULTI_VALUED_ATTRIBUTES: &[&str] = &[
    "class",
    "rel",
    "rev",
    "headers",
    "accesskey",
    "accept-charset",
];

/// Errors that can occur when parsing markup.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Malformed markup at byte {position}: {message}")]
    Xml { position: usize, message: String },

    #[error("Malformed attribute on <{element}>: {message}")]
    Attribute { element: String, message: String },

    #[error("Decode error: {0}")]
    Decode(String),
}

/// Parse an HTML fragment.
///
/// The fragment is wrapped in a synthetic [`ROOT_TAG`] element so that any
/// number of top-level siblings come back as children of one node.
pub fn parse_fragment(source: &str) -> Result<Element, ParseError> {
    let wrapped = format!("<{ROOT_TAG}>{}</{ROOT_TAG}>", escape_stray_markup(source));
    let mut reader = Reader::from_str(&wrapped);
    {
        let config = reader.config_mut();
        config.trim_text(false);
        config.check_end_names = false;
        config.allow_unmatched_ends = true;
        config.allow_dangling_amp = true;
    }

    // The synthetic root stays at the bottom of the stack until EOF.
    let mut stack: Vec<Element> = Vec::with_capacity(16);

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                let element = element_from_start(&reader, &e)?;
                if is_void(&element.name) && !stack.is_empty() {
                    append_child(&mut stack, MarkupNode::Element(element));
                } else {
                    stack.push(element);
                }
            }
            Ok(Event::Empty(e)) => {
                let element = element_from_start(&reader, &e)?;
                append_child(&mut stack, MarkupNode::Element(element));
            }
            Ok(Event::End(e)) => {
                let name = decode(&reader, e.name().as_ref())?;
                if is_void(&name) {
                    continue;
                }
                // Stray end tags, including the synthetic root's, are ignored.
                let open = stack
                    .iter()
                    .skip(1)
                    .rposition(|el| el.name == name)
                    .map(|pos| pos + 1);
                if let Some(pos) = open {
                    while stack.len() > pos {
                        close_top(&mut stack);
                    }
                }
            }
            Ok(Event::Text(e)) => {
                let text = e.decode().map_err(|err| ParseError::Decode(err.to_string()))?;
                append_text(&mut stack, &text);
            }
            Ok(Event::CData(e)) => {
                let text = reader
                    .decoder()
                    .decode(&e)
                    .map_err(|err| ParseError::Decode(err.to_string()))?;
                append_text(&mut stack, &text);
            }
            Ok(Event::GeneralRef(e)) => {
                let name = e.decode().map_err(|err| ParseError::Decode(err.to_string()))?;
                let raw = format!("&{name};");
                let resolved = unescape_entities(&raw);
                append_text(&mut stack, &resolved);
            }
            Ok(Event::Comment(e)) => {
                let text = e.decode().map_err(|err| ParseError::Decode(err.to_string()))?;
                append_child(&mut stack, MarkupNode::Comment(text.into_owned()));
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(err) => {
                return Err(ParseError::Xml {
                    position: usize::try_from(reader.error_position()).unwrap_or(usize::MAX),
                    message: err.to_string(),
                });
            }
        }
    }

    while stack.len() > 1 {
        close_top(&mut stack);
    }

    Ok(stack.pop().unwrap_or_else(|| Element::new(ROOT_TAG)))
}

/// Escape every `<` that does not open a tag, comment, or declaration, and all
/// markup inside raw text elements, so the tokenizer reads them as text.
fn escape_stray_markup(source: &str) -> String {
    let mut out = String::with_capacity(source.len());
    let mut rest = source;

    while let Some(pos) = rest.find('<') {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];

        let section_end = if tail.starts_with("<!--") {
            Some(("-->", 4))
        } else if tail.starts_with("<![CDATA[") {
            Some(("]]>", 9))
        } else {
            None
        };
        if let Some((terminator, open_len)) = section_end {
            match tail[open_len..].find(terminator) {
                Some(end) => {
                    let end = open_len + end + terminator.len();
                    out.push_str(&tail[..end]);
                    rest = &tail[end..];
                    continue;
                }
                // Left for the tokenizer to report.
                None => {
                    out.push_str(tail);
                    return out;
                }
            }
        }

        match tail[1..].chars().next() {
            Some(c) if c.is_ascii_alphabetic() => {
                let name_len = tail[1..]
                    .find(|c: char| c.is_whitespace() || c == '>' || c == '/')
                    .unwrap_or(tail.len() - 1);
                let name = &tail[1..1 + name_len];

                if RAW_TEXT_ELEMENTS.iter().any(|raw| raw.eq_ignore_ascii_case(name)) {
                    if let Some(consumed) = copy_raw_text_element(tail, name, &mut out) {
                        rest = &tail[consumed..];
                        continue;
                    }
                    return out;
                }

                out.push('<');
                rest = &tail[1..];
            }
            Some('/' | '!' | '?') => {
                out.push('<');
                rest = &tail[1..];
            }
            _ => {
                out.push_str("&lt;");
                rest = &tail[1..];
            }
        }
    }

    out.push_str(rest);
    out
}

/// Copy a raw text element's open tag verbatim and its content escaped.
/// Returns the number of bytes consumed up to the closing tag, or `None` when
/// the rest of the input was consumed.
fn copy_raw_text_element(tail: &str, name: &str, out: &mut String) -> Option<usize> {
    let Some(gt) = tail.find('>') else {
        out.push_str(tail);
        return None;
    };
    out.push_str(&tail[..=gt]);
    if tail[..gt].ends_with('/') {
        return Some(gt + 1);
    }

    let content = &tail[gt + 1..];
    let close = content
        .to_ascii_lowercase()
        .find(&format!("</{}", name.to_ascii_lowercase()));
    let raw = &content[..close.unwrap_or(content.len())];
    for c in raw.chars() {
        match c {
            '<' => out.push_str("&lt;"),
            '&' => out.push_str("&amp;"),
            _ => out.push(c),
        }
    }

    close.map(|close| gt + 1 + close)
}

fn is_void(name: &str) -> bool {
    VOID_ELEMENTS
        .iter()
        .any(|void| void.eq_ignore_ascii_case(name))
}

fn append_child(stack: &mut [Element], node: MarkupNode) {
    if let Some(parent) = stack.last_mut() {
        parent.children.push(node);
    }
}

fn append_text(stack: &mut [Element], text: &str) {
    if let Some(parent) = stack.last_mut() {
        parent.push_text(text);
    }
}

fn close_top(stack: &mut Vec<Element>) {
    if let Some(element) = stack.pop() {
        append_child(stack, MarkupNode::Element(element));
    }
}

fn decode(reader: &Reader<&[u8]>, raw: &[u8]) -> Result<String, ParseError> {
    reader
        .decoder()
        .decode(raw)
        .map(|s| s.into_owned())
        .map_err(|err| ParseError::Decode(err.to_string()))
}

/// Resolve HTML named entities and character references one at a time,
/// keeping bare ampersands and unknown references verbatim.
fn unescape_entities(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;

    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let tail = &rest[amp..];

        let reference = tail[1..]
            .find(|c: char| c == ';' || c == '&' || c.is_whitespace())
            .filter(|&end| tail.as_bytes()[end + 1] == b';')
            .map(|end| &tail[..end + 2]);

        if let Some(reference) = reference {
            if let Ok(resolved) = unescape_with(reference, resolve_html5_entity) {
                out.push_str(&resolved);
                rest = &tail[reference.len()..];
                continue;
            }
        }

        out.push('&');
        rest = &tail[1..];
    }

    out.push_str(rest);
    out
}

fn element_from_start(reader: &Reader<&[u8]>, e: &BytesStart<'_>) -> Result<Element, ParseError> {
    let name = decode(reader, e.name().as_ref())?;
    if name.is_empty() {
        return Err(ParseError::Xml {
            position: usize::try_from(reader.buffer_position()).unwrap_or(usize::MAX),
            message: "tag without a name".to_string(),
        });
    }
    let mut attrs = Attributes::new();

    for attr in e.html_attributes().with_checks(false) {
        let attr = attr.map_err(|err| ParseError::Attribute {
            element: name.clone(),
            message: err.to_string(),
        })?;
        let key = decode(reader, attr.key.as_ref())?;
        let raw = decode(reader, &attr.value)?;
        let value = unescape_entities(&raw);

        let value = if MULTI_VALUED_ATTRIBUTES
            .iter()
            .any(|m| m.eq_ignore_ascii_case(&key))
        {
            AttrValue::List(value.split_whitespace().map(str::to_string).collect())
        } else {
            AttrValue::Text(value)
        };

        // First occurrence wins, as in HTML.
        attrs.entry(key).or_insert(value);
    }

    Ok(Element {
        name,
        attrs,
        children: Vec::new(),
    })
}
