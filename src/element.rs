//! Parsed-document elements.
//!
//! The catalogue protocol delivers entities as small XML documents. This
//! module reads one document into an owned element tree that the model
//! constructors walk by child name and attribute; the wire transport itself
//! lives outside this crate.

use std::collections::HashMap;

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use crate::error::{ModelError, Result};

/// One element of a parsed catalogue document: tag name, attributes,
/// accumulated text content and child elements in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    name: String,
    attributes: HashMap<String, String>,
    text: String,
    children: Vec<Element>,
}

impl Element {
    /// Parses a document into its root element.
    ///
    /// Text is unescaped and whitespace-trimmed. Comments, processing
    /// instructions and the XML declaration are skipped.
    pub fn parse(input: &str) -> Result<Element> {
        let mut reader = Reader::from_str(input);
        reader.config_mut().trim_text(true);

        let mut stack: Vec<Element> = Vec::new();
        loop {
            match reader.read_event().map_err(document_error)? {
                Event::Start(ref tag) => stack.push(Element::from_tag(tag)?),
                Event::Empty(ref tag) => {
                    let element = Element::from_tag(tag)?;
                    match stack.last_mut() {
                        Some(parent) => parent.children.push(element),
                        None => return Ok(element),
                    }
                }
                Event::Text(ref text) => {
                    if let Some(current) = stack.last_mut() {
                        current
                            .text
                            .push_str(&text.unescape().map_err(document_error)?);
                    }
                }
                Event::CData(ref data) => {
                    if let Some(current) = stack.last_mut() {
                        current.text.push_str(&String::from_utf8_lossy(data));
                    }
                }
                Event::End(_) => {
                    let element = stack.pop().ok_or_else(|| {
                        ModelError::Document("unexpected closing tag".into())
                    })?;
                    match stack.last_mut() {
                        Some(parent) => parent.children.push(element),
                        None => return Ok(element),
                    }
                }
                Event::Eof => {
                    return Err(ModelError::Document(
                        "missing root element".into(),
                    ));
                }
                _ => {}
            }
        }
    }

    fn from_tag(tag: &BytesStart<'_>) -> Result<Element> {
        let name = String::from_utf8_lossy(tag.name().as_ref()).into_owned();
        let mut attributes = HashMap::new();
        for attribute in tag.attributes() {
            let attribute = attribute.map_err(document_error)?;
            attributes.insert(
                String::from_utf8_lossy(attribute.key.as_ref()).into_owned(),
                attribute
                    .unescape_value()
                    .map_err(document_error)?
                    .into_owned(),
            );
        }
        Ok(Element {
            name,
            attributes,
            text: String::new(),
            children: Vec::new(),
        })
    }

    /// Tag name of this element.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Text content of this element.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Attribute value by name.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Child elements in document order.
    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// First child element with the given tag name.
    pub fn child(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|child| child.name == name)
    }

    /// Returns true if a child with the given tag name exists.
    pub fn has_child(&self, name: &str) -> bool {
        self.child(name).is_some()
    }

    /// Text content of the first child with the given tag name.
    pub fn child_text(&self, name: &str) -> Option<&str> {
        self.child(name).map(Element::text)
    }
}

fn document_error(err: impl std::fmt::Display) -> ModelError {
    ModelError::Document(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::Element;
    use crate::error::ModelError;

    #[test]
    fn parses_children_and_text() {
        let element = Element::parse(
            "<track><id>abc123</id><title>Some Title</title></track>",
        )
        .unwrap();

        assert_eq!(element.name(), "track");
        assert!(element.has_child("id"));
        assert!(!element.has_child("album"));
        assert_eq!(element.child_text("id"), Some("abc123"));
        assert_eq!(element.child_text("title"), Some("Some Title"));
        assert_eq!(element.child_text("album"), None);
    }

    #[test]
    fn parses_attributes_on_empty_tags() {
        let element = Element::parse(
            r#"<restrictions><restriction catalogues="on-demand" forbidden="US,CA"/></restrictions>"#,
        )
        .unwrap();

        let child = element.child("restriction").unwrap();
        assert_eq!(child.attribute("catalogues"), Some("on-demand"));
        assert_eq!(child.attribute("forbidden"), Some("US,CA"));
        assert_eq!(child.attribute("allowed"), None);
    }

    #[test]
    fn unescapes_text_content() {
        let element =
            Element::parse("<title>Tom &amp; Jerry</title>").unwrap();
        assert_eq!(element.text(), "Tom & Jerry");
    }

    #[test]
    fn nested_children_keep_document_order() {
        let element = Element::parse(
            "<a><b><c>one</c></b><b><c>two</c></b></a>",
        )
        .unwrap();

        assert_eq!(element.children().len(), 2);
        assert_eq!(element.children()[0].child_text("c"), Some("one"));
        assert_eq!(element.children()[1].child_text("c"), Some("two"));
        // `child` returns the first match.
        assert_eq!(element.child("b").unwrap().child_text("c"), Some("one"));
    }

    #[test]
    fn rejects_unbalanced_documents() {
        assert!(matches!(
            Element::parse("<a><b></a>"),
            Err(ModelError::Document(_))
        ));
        assert!(matches!(
            Element::parse(""),
            Err(ModelError::Document(_))
        ));
    }
}
