//! MarkdownSerializer - the main entry point for document to Markdown conversion.

use crate::node::Node;
use crate::options::Options;
use crate::rules::{MarkRule, NodeRule, Rules};
use crate::state::SerializerState;
use crate::Result;

/// The main service for converting document trees to Markdown
pub struct MarkdownSerializer {
    options: Options,
    rules: Rules,
}

impl MarkdownSerializer {
    /// Create a new MarkdownSerializer with default options
    pub fn new() -> Self {
        Self {
            options: Options::default(),
            rules: Rules::new(),
        }
    }

    /// Create a MarkdownSerializer with custom options
    pub fn with_options(options: Options) -> Self {
        Self {
            options,
            rules: Rules::new(),
        }
    }

    /// Create a MarkdownSerializer with a custom rule set
    pub fn with_rules(rules: Rules, options: Options) -> Self {
        Self { options, rules }
    }

    /// Convert a document to Markdown.
    ///
    /// The children of `doc` are rendered as top-level blocks. Any failure
    /// aborts the whole conversion.
    pub fn serialize(&self, doc: &Node) -> Result<String> {
        tracing::debug!(kind = %doc.kind, children = doc.child_count(), "serializing document");
        let mut state = SerializerState::new(&self.rules, &self.options);
        state.render_content(doc)?;
        let output = state.into_output();
        tracing::debug!(bytes = output.len(), "serialized document");
        Ok(output)
    }

    /// Parse a JSON document tree and convert it to Markdown
    pub fn serialize_json(&self, json: &str) -> Result<String> {
        let doc = Node::from_json(json)?;
        self.serialize(&doc)
    }

    /// Add or replace the rule for a node kind
    pub fn add_node_rule(&mut self, kind: &str, rule: NodeRule) -> &mut Self {
        self.rules.add_node(kind, rule);
        self
    }

    /// Add or replace the rule for a mark kind
    pub fn add_mark_rule(&mut self, kind: &str, rule: MarkRule) -> &mut Self {
        self.rules.add_mark(kind, rule);
        self
    }

    /// Apply a plugin
    pub fn use_plugin<F>(&mut self, plugin: F) -> &mut Self
    where
        F: FnOnce(&mut Self),
    {
        plugin(self);
        self
    }

    /// Get the current options
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Get mutable access to options
    pub fn options_mut(&mut self) -> &mut Options {
        &mut self.options
    }
}

impl Default for MarkdownSerializer {
    fn default() -> Self {
        Self::new()
    }
}

/// Convert a document with the default rules and options
pub fn to_markdown(doc: &Node) -> Result<String> {
    MarkdownSerializer::new().serialize(doc)
}
