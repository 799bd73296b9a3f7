//! Generic markup tree used between document text and the splits model.
//!
//! Reading goes through `roxmltree`, which rejects malformed documents before
//! any splits-specific parsing starts. The result is copied into an owned
//! [`Element`] tree so that the parser and the exporter work on the same node
//! type. Writing renders that tree back to text with standard escaping
//! (via `quick-xml`) and the `<Name />` form for empty elements.

use crate::{Result, SplitsError};
use quick_xml::escape::{escape, partial_escape};
use std::fmt::Write;

/// Whitespace that attribute-value normalization would fold into spaces on reload.
const ATTRIBUTE_CHAR_REFS: &[char] = &['\t', '\n', '\r'];
/// Carriage returns in text are folded into line feeds on reload.
const TEXT_CHAR_REFS: &[char] = &['\r'];

/// One element with its attributes, leading text and child elements.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    pub name: String,
    /// Attributes in document order
    pub attributes: Vec<(String, String)>,
    /// Text before the first child element, if any
    pub text: Option<String>,
    pub children: Vec<Element>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), ..Default::default() }
    }

    /// Element holding only text. Empty text produces an empty element.
    pub fn with_text(name: impl Into<String>, text: impl Into<String>) -> Self {
        let text = text.into();
        Self { name: name.into(), text: (!text.is_empty()).then_some(text), ..Default::default() }
    }

    /// Builder-style attribute append.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    /// Builder-style child append.
    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    /// Append a child and return a handle to it.
    pub fn push(&mut self, child: Element) -> &mut Element {
        self.children.push(child);
        let last = self.children.len() - 1;
        &mut self.children[last]
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.iter().find(|(key, _)| key == name).map(|(_, value)| value.as_str())
    }

    /// Attribute that the document grammar requires.
    pub fn required_attribute(&self, name: &str) -> Result<&str> {
        self.attribute(name).ok_or_else(|| SplitsError::missing_attribute(&self.name, name))
    }

    /// First child element with the given name.
    pub fn find(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|child| child.name == name)
    }

    /// Leading text, or an empty string when there is none.
    pub fn text(&self) -> &str {
        self.text.as_deref().unwrap_or("")
    }

    /// Parse a full document and return its root element.
    pub fn parse_document(text: &str) -> Result<Element> {
        let document = roxmltree::Document::parse(text)?;
        Ok(Self::from_node(document.root_element()))
    }

    fn from_node(node: roxmltree::Node<'_, '_>) -> Element {
        Element {
            name: node.tag_name().name().to_string(),
            attributes: node
                .attributes()
                .map(|attr| (attr.name().to_string(), attr.value().to_string()))
                .collect(),
            text: node.text().map(str::to_string),
            children: node.children().filter(|n| n.is_element()).map(Self::from_node).collect(),
        }
    }

    /// Render this element and its descendants without an XML declaration.
    pub fn to_xml_string(&self) -> String {
        let mut out = String::new();
        self.write_into(&mut out);
        out
    }

    fn write_into(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.name);
        for (key, value) in &self.attributes {
            out.push(' ');
            out.push_str(key);
            out.push_str("=\"");
            push_with_char_refs(out, &escape(value.as_str()), ATTRIBUTE_CHAR_REFS);
            out.push('"');
        }

        let text = self.text();
        if text.is_empty() && self.children.is_empty() {
            out.push_str(" />");
            return;
        }

        out.push('>');
        push_with_char_refs(out, &partial_escape(text), TEXT_CHAR_REFS);
        for child in &self.children {
            child.write_into(out);
        }
        out.push_str("</");
        out.push_str(&self.name);
        out.push('>');
    }
}

/// Append already-escaped text, writing `encoded` characters as numeric references.
fn push_with_char_refs(out: &mut String, escaped: &str, encoded: &[char]) {
    for c in escaped.chars() {
        if encoded.contains(&c) {
            let _ = write!(out, "&#{};", u32::from(c));
        } else {
            out.push(c);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_attributes_text_and_children() {
        let root = Element::parse_document(
            r#"<Run version="1.7.0"><GameName>Foo &amp; Bar</GameName><Icon /></Run>"#,
        )
        .unwrap();

        assert_eq!(root.name, "Run");
        assert_eq!(root.attribute("version"), Some("1.7.0"));
        assert_eq!(root.children.len(), 2);
        assert_eq!(root.find("GameName").map(Element::text), Some("Foo & Bar"));
        assert_eq!(root.find("Icon").and_then(|e| e.text.as_deref()), None);
    }

    #[test]
    fn skips_comments_and_processing_instructions() {
        let root = Element::parse_document(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<!-- saved -->\n<Run>\n  <!-- x -->\n  <A>1</A>\n</Run>",
        )
        .unwrap();
        assert_eq!(root.children.len(), 1);
        assert_eq!(root.children[0].text(), "1");
    }

    #[test]
    fn malformed_markup_is_an_error() {
        let result = Element::parse_document("<Run><GameName></Run>");
        assert!(matches!(result, Err(SplitsError::Markup { .. })));
    }

    #[test]
    fn renders_empty_elements_in_short_form() {
        let tree = Element::new("Run")
            .attr("version", "1.7.0")
            .child(Element::new("GameIcon"))
            .child(Element::with_text("GameName", "Foo"))
            .child(Element::with_text("CategoryName", ""));
        assert_eq!(
            tree.to_xml_string(),
            r#"<Run version="1.7.0"><GameIcon /><GameName>Foo</GameName><CategoryName /></Run>"#
        );
    }

    #[test]
    fn escapes_text_and_attributes() {
        let tree = Element::new("SplitTime")
            .attr("name", r#"Say "hi" & <go>"#)
            .child(Element::with_text("Name", "A < B & C > D"));
        let text = tree.to_xml_string();
        assert_eq!(
            text,
            r#"<SplitTime name="Say &quot;hi&quot; &amp; &lt;go&gt;"><Name>A &lt; B &amp; C &gt; D</Name></SplitTime>"#
        );

        let reparsed = Element::parse_document(&text).unwrap();
        assert_eq!(reparsed, tree);
    }

    #[test]
    fn whitespace_in_attributes_survives_reload() {
        let tree = Element::new("SplitTime")
            .attr("name", "Line1\nLine2\tTab\r\nEnd")
            .child(Element::with_text("Name", "first\r\nsecond\tthird"));
        let text = tree.to_xml_string();
        assert_eq!(
            text,
            "<SplitTime name=\"Line1&#10;Line2&#9;Tab&#13;&#10;End\"><Name>first&#13;\nsecond\tthird</Name></SplitTime>"
        );

        let reparsed = Element::parse_document(&text).unwrap();
        assert_eq!(reparsed, tree);
    }

    #[test]
    fn missing_required_attribute_names_the_element() {
        let element = Element::new("Attempt").attr("started", "x");
        match element.required_attribute("id") {
            Err(SplitsError::MissingAttribute { element, attribute }) => {
                assert_eq!(element, "Attempt");
                assert_eq!(attribute, "id");
            }
            other => panic!("expected MissingAttribute, got {other:?}"),
        }
    }

    #[test]
    fn push_returns_the_new_child() {
        let mut root = Element::new("Segments");
        root.push(Element::new("Segment")).push(Element::with_text("Name", "End"));
        assert_eq!(root.children[0].children[0].text(), "End");
    }
}
