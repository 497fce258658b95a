//! Minimal element tree over `quick-xml` events.
//!
//! The side indices are small, attribute-driven documents; reading them into
//! a tree first keeps each loader a plain walk over elements.

use indexmap::IndexMap;
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use super::InterchangeError;

/// An XML element with its attributes and child elements. Text is dropped.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct XmlElement {
    pub name: String,
    pub attributes: IndexMap<String, String>,
    pub children: Vec<XmlElement>,
}

impl XmlElement {
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Attribute value, or a missing-attribute error naming the element.
    pub fn required_attr(&self, name: &str) -> Result<&str, InterchangeError> {
        self.attr(name)
            .ok_or_else(|| InterchangeError::missing_attribute(format!("{}@{}", self.name, name)))
    }

    /// First child element with the given name.
    pub fn child(&self, name: &str) -> Option<&XmlElement> {
        self.children.iter().find(|c| c.name == name)
    }

    pub fn required_child(&self, name: &str) -> Result<&XmlElement, InterchangeError> {
        self.child(name)
            .ok_or_else(|| InterchangeError::missing_element(format!("{}/{}", self.name, name)))
    }

    /// Child elements with the given name, in document order.
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a XmlElement> + 'a {
        self.children.iter().filter(move |c| c.name == name)
    }
}

/// Parse a document and return its root element.
pub fn parse_document(input: &[u8]) -> Result<XmlElement, InterchangeError> {
    let mut reader = Reader::from_reader(input);
    reader.config_mut().trim_text(true);

    let mut buf = Vec::new();
    let mut stack: Vec<XmlElement> = Vec::new();
    let mut root: Option<XmlElement> = None;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                stack.push(start_element(e)?);
            }
            Ok(Event::Empty(ref e)) => {
                let element = start_element(e)?;
                close(&mut stack, &mut root, element);
            }
            Ok(Event::End(_)) => {
                let element = stack
                    .pop()
                    .ok_or_else(|| InterchangeError::xml("unbalanced end tag"))?;
                close(&mut stack, &mut root, element);
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(InterchangeError::xml(format!(
                    "XML parse error at position {}: {e}",
                    reader.error_position()
                )));
            }
            _ => {}
        }
        buf.clear();
    }

    if !stack.is_empty() {
        return Err(InterchangeError::xml("unexpected end of document"));
    }
    root.ok_or_else(|| InterchangeError::missing_element("document root"))
}

fn close(stack: &mut Vec<XmlElement>, root: &mut Option<XmlElement>, element: XmlElement) {
    match stack.last_mut() {
        Some(parent) => parent.children.push(element),
        None => {
            if root.is_none() {
                *root = Some(element);
            }
        }
    }
}

fn start_element(e: &BytesStart<'_>) -> Result<XmlElement, InterchangeError> {
    let name_bytes = e.name();
    let name = std::str::from_utf8(name_bytes.as_ref())
        .map_err(|e| InterchangeError::xml(format!("Invalid tag name: {e}")))?
        .to_string();

    let mut attributes = IndexMap::new();
    for attr_result in e.attributes() {
        let attr =
            attr_result.map_err(|e| InterchangeError::xml(format!("Attribute error: {e}")))?;
        let key = std::str::from_utf8(attr.key.as_ref())
            .map_err(|e| InterchangeError::xml(format!("Attribute key error: {e}")))?
            .to_string();
        let value = attr
            .unescape_value()
            .map_err(|e| InterchangeError::xml(format!("Attribute value error: {e}")))?
            .to_string();
        attributes.insert(key, value);
    }

    Ok(XmlElement {
        name,
        attributes,
        children: Vec::new(),
    })
}
