//! Rich-text document tree consumed by the serializer.
//!
//! The tree is a plain owned structure that any editor model can build or
//! deserialize into. It matches the common rich-text editor JSON shape:
//!
//! ```json
//! {"type": "paragraph", "content": [
//!     {"type": "text", "text": "Hello", "marks": [{"type": "em"}]}
//! ]}
//! ```

use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;

use crate::Result;

/// Attribute mapping carried by nodes and marks
pub type Attrs = IndexMap<String, Value>;

/// Inline formatting attached to a text run
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Mark {
    /// Mark kind name (e.g. "em", "link")
    #[serde(rename = "type")]
    pub kind: String,

    /// Kind-specific attributes
    #[serde(default)]
    pub attrs: Attrs,
}

impl Mark {
    /// Create a mark without attributes
    pub fn new(kind: &str) -> Self {
        Self {
            kind: kind.to_string(),
            attrs: Attrs::new(),
        }
    }

    /// Set an attribute, builder style
    pub fn with_attr(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.attrs.insert(name.to_string(), value.into());
        self
    }

    /// Get a raw attribute value; `null` counts as absent
    pub fn attr(&self, name: &str) -> Option<&Value> {
        self.attrs.get(name).filter(|v| !v.is_null())
    }

    pub fn attr_str(&self, name: &str) -> Option<&str> {
        self.attr(name).and_then(Value::as_str)
    }
}

/// A document tree element.
///
/// Text nodes carry `text` and `marks`; every other node carries a kind,
/// attributes and an ordered list of children.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Node {
    /// Node kind name (e.g. "paragraph", "text")
    #[serde(rename = "type")]
    pub kind: String,

    #[serde(default)]
    pub attrs: Attrs,

    /// Child nodes, in document order
    #[serde(default, rename = "content")]
    pub children: Vec<Node>,

    /// Literal content for text nodes
    #[serde(default)]
    pub text: Option<String>,

    /// Marks applied to a text node, outermost first
    #[serde(default)]
    pub marks: Vec<Mark>,
}

impl Node {
    /// Create an empty node of the given kind
    pub fn new(kind: &str) -> Self {
        Self {
            kind: kind.to_string(),
            attrs: Attrs::new(),
            children: Vec::new(),
            text: None,
            marks: Vec::new(),
        }
    }

    /// Create a text node
    pub fn text(content: &str) -> Self {
        Self {
            text: Some(content.to_string()),
            ..Self::new("text")
        }
    }

    /// Parse a node tree from its JSON representation
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Set an attribute, builder style
    pub fn with_attr(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.attrs.insert(name.to_string(), value.into());
        self
    }

    /// Append a child, builder style
    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    /// Append several children, builder style
    pub fn with_children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    /// Add a mark (innermost so far), builder style
    pub fn with_mark(mut self, mark: Mark) -> Self {
        self.marks.push(mark);
        self
    }

    /// Add a child node
    pub fn add_child(&mut self, child: Node) {
        self.children.push(child);
    }

    pub fn is_text(&self) -> bool {
        self.text.is_some()
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Iterate over child nodes
    pub fn children(&self) -> impl Iterator<Item = &Node> {
        self.children.iter()
    }

    /// Get a raw attribute value; `null` counts as absent
    pub fn attr(&self, name: &str) -> Option<&Value> {
        self.attrs.get(name).filter(|v| !v.is_null())
    }

    pub fn attr_str(&self, name: &str) -> Option<&str> {
        self.attr(name).and_then(Value::as_str)
    }

    pub fn attr_u64(&self, name: &str) -> Option<u64> {
        self.attr(name).and_then(Value::as_u64)
    }

    pub fn attr_bool(&self, name: &str) -> Option<bool> {
        self.attr(name).and_then(Value::as_bool)
    }

    /// Get all text content from this node and descendants
    pub fn text_content(&self) -> String {
        match &self.text {
            Some(text) => text.clone(),
            None => self.children().map(Node::text_content).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_text() {
        let node = Node::text("Hello World");
        assert!(node.is_text());
        assert_eq!(node.kind, "text");
        assert_eq!(node.text_content(), "Hello World");
    }

    #[test]
    fn test_attributes() {
        let node = Node::new("image")
            .with_attr("src", "a.png")
            .with_attr("title", Value::Null)
            .with_attr("width", 3);
        assert_eq!(node.attr_str("src"), Some("a.png"));
        assert_eq!(node.attr_str("title"), None);
        assert_eq!(node.attr_str("width"), None);
        assert_eq!(node.attr_u64("width"), Some(3));
        assert_eq!(node.attr_bool("tight"), None);
    }

    #[test]
    fn test_text_content() {
        let block = Node::new("code_block")
            .with_child(Node::text("let x = 1;\n"))
            .with_child(Node::text("let y = 2;"));
        assert_eq!(block.child_count(), 2);
        assert_eq!(block.text_content(), "let x = 1;\nlet y = 2;");
    }

    #[test]
    fn test_mark_equality() {
        let a = Mark::new("link").with_attr("href", "x").with_attr("title", "t");
        let b = Mark::new("link").with_attr("title", "t").with_attr("href", "x");
        assert_eq!(a, b);
        assert_ne!(a, Mark::new("link").with_attr("href", "y"));
        assert_ne!(Mark::new("em"), Mark::new("strong"));
    }

    #[test]
    fn test_mark_null_attribute_is_absent() {
        let link = Mark::new("link")
            .with_attr("href", "x")
            .with_attr("title", Value::Null);
        assert_eq!(link.attr("title"), None);
        assert_eq!(link.attr_str("title"), None);
        assert_eq!(link.attr("href"), Some(&Value::from("x")));
        assert_eq!(link.attr_str("href"), Some("x"));
    }

    #[test]
    fn test_from_json() {
        let json = r#"{
            "type": "doc",
            "content": [{
                "type": "heading",
                "attrs": {"level": 2},
                "content": [{"type": "text", "text": "Hi", "marks": [{"type": "em"}]}]
            }]
        }"#;
        let doc = Node::from_json(json).unwrap();
        assert_eq!(doc.kind, "doc");
        let heading = &doc.children[0];
        assert_eq!(heading.attr_u64("level"), Some(2));
        assert_eq!(heading.children[0].marks, vec![Mark::new("em")]);
        assert_eq!(heading.text_content(), "Hi");
    }

    #[test]
    fn test_from_json_invalid() {
        assert!(Node::from_json(r#"{"content": []}"#).is_err());
    }
}
