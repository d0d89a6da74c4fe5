//! Rule registry for node and mark kinds.

mod commonmark;
mod rule;

pub use commonmark::{commonmark_mark_rules, commonmark_node_rules};
pub use rule::{MarkRule, Markup, MarkupFn, NodeRule, RenderFn};

use indexmap::IndexMap;

use crate::{Result, SerializeError};

/// Collection of rules, keyed by kind name
pub struct Rules {
    nodes: IndexMap<String, NodeRule>,
    marks: IndexMap<String, MarkRule>,
}

impl Rules {
    /// Create a new Rules instance with CommonMark rules
    pub fn new() -> Self {
        let mut rules = Self::empty();
        for (kind, rule) in commonmark_node_rules() {
            rules.add_node(kind, rule);
        }
        for (kind, rule) in commonmark_mark_rules() {
            rules.add_mark(kind, rule);
        }
        rules
    }

    /// Create a registry with no rules at all
    pub fn empty() -> Self {
        Self {
            nodes: IndexMap::new(),
            marks: IndexMap::new(),
        }
    }

    /// Register or replace the rule for a node kind
    pub fn add_node(&mut self, kind: &str, rule: NodeRule) {
        self.nodes.insert(kind.to_string(), rule);
    }

    /// Register or replace the rule for a mark kind
    pub fn add_mark(&mut self, kind: &str, rule: MarkRule) {
        self.marks.insert(kind.to_string(), rule);
    }

    /// Find the rule for a node kind
    pub fn node(&self, kind: &str) -> Result<&NodeRule> {
        self.nodes
            .get(kind)
            .ok_or_else(|| SerializeError::UnknownNode(kind.to_string()))
    }

    /// Find the rule for a mark kind
    pub fn mark(&self, kind: &str) -> Result<&MarkRule> {
        self.marks
            .get(kind)
            .ok_or_else(|| SerializeError::UnknownMark(kind.to_string()))
    }
}

impl Default for Rules {
    fn default() -> Self {
        Self::new()
    }
}
