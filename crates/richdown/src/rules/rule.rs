//! Node and mark rule types.

use crate::node::{Mark, Node};
use crate::state::SerializerState;
use crate::Result;

/// Type alias for node render functions
pub type RenderFn = Box<dyn Fn(&mut SerializerState<'_>, &Node) -> Result<()> + Send + Sync>;

/// Type alias for computed mark markup
pub type MarkupFn = Box<dyn Fn(&SerializerState<'_>, &Mark) -> String + Send + Sync>;

/// A node rule renders one node kind into the serializer state
pub struct NodeRule {
    render: RenderFn,
}

impl NodeRule {
    /// Create a new rule
    pub fn new<F>(render: F) -> Self
    where
        F: Fn(&mut SerializerState<'_>, &Node) -> Result<()> + Send + Sync + 'static,
    {
        Self {
            render: Box::new(render),
        }
    }

    /// Apply this rule
    pub fn render(&self, state: &mut SerializerState<'_>, node: &Node) -> Result<()> {
        (self.render)(state, node)
    }
}

/// Opening or closing markup of a mark
pub enum Markup {
    /// Fixed string
    Static(String),
    /// Computed from the mark's attributes
    Dynamic(MarkupFn),
}

impl Markup {
    /// Create computed markup
    pub fn dynamic<F>(f: F) -> Self
    where
        F: Fn(&SerializerState<'_>, &Mark) -> String + Send + Sync + 'static,
    {
        Markup::Dynamic(Box::new(f))
    }

    /// Resolve the markup for a mark
    pub fn resolve(&self, state: &SerializerState<'_>, mark: &Mark) -> String {
        match self {
            Markup::Static(s) => s.clone(),
            Markup::Dynamic(f) => f(state, mark),
        }
    }
}

impl From<&str> for Markup {
    fn from(s: &str) -> Self {
        Markup::Static(s.to_string())
    }
}

/// A mark rule defines how a mark kind wraps its text
pub struct MarkRule {
    pub open: Markup,
    pub close: Markup,
    /// Nesting order against other mixable marks is irrelevant
    pub mixable: bool,
    /// Content is emitted unescaped as one atomic unit
    pub literal: bool,
}

impl MarkRule {
    /// Create a plain (non-mixable, non-literal) mark rule
    pub fn new(open: impl Into<Markup>, close: impl Into<Markup>) -> Self {
        Self {
            open: open.into(),
            close: close.into(),
            mixable: false,
            literal: false,
        }
    }

    /// Mark as mixable
    pub fn mixable(mut self) -> Self {
        self.mixable = true;
        self
    }

    /// Mark as literal
    pub fn literal(mut self) -> Self {
        self.literal = true;
        self
    }

    /// Markup for opening (`open = true`) or closing the mark
    pub fn markup(&self, state: &SerializerState<'_>, mark: &Mark, open: bool) -> String {
        if open {
            self.open.resolve(state, mark)
        } else {
            self.close.resolve(state, mark)
        }
    }
}
