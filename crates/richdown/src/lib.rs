//! # richdown
//!
//! Serialize rich-text document trees to CommonMark.
//!
//! The input is a tree of typed block and inline nodes, with marks such as
//! emphasis or links attached to text runs. It is the shape rich-text
//! editors use for their JSON documents. The output is Markdown that parses
//! back to the same structure.
//!
//! ## Design
//!
//! Rendering is driven by a registry of rules keyed by node and mark kind:
//!
//! - **Node rules** write block or inline markup into a [`SerializerState`],
//!   recursing into children as needed
//! - **Mark rules** declare opening and closing markup, plus whether the mark
//!   may be reordered against other marks (`mixable`) or must be emitted
//!   verbatim (`literal`)
//!
//! Unknown kinds are a hard error; register rules for custom kinds with
//! [`MarkdownSerializer::add_node_rule`] and [`MarkdownSerializer::add_mark_rule`].
//!
//! ## Example
//!
//! ```rust
//! use richdown::{MarkdownSerializer, Mark, Node};
//!
//! let doc = Node::new("doc").with_child(
//!     Node::new("paragraph")
//!         .with_child(Node::text("Hello "))
//!         .with_child(Node::text("world").with_mark(Mark::new("strong"))),
//! );
//!
//! let markdown = MarkdownSerializer::new().serialize(&doc).unwrap();
//! assert_eq!(markdown, "Hello **world**");
//! ```

pub mod node;
mod options;
mod rules;
mod service;
mod state;
mod utilities;

pub use node::{Attrs, Mark, Node};
pub use options::Options;
pub use rules::{
    commonmark_mark_rules, commonmark_node_rules, MarkRule, Markup, MarkupFn, NodeRule, RenderFn,
    Rules,
};
pub use service::{to_markdown, MarkdownSerializer};
pub use state::SerializerState;
pub use utilities::{escape, quote, repeat};

/// Error type for serialization
#[derive(Debug, thiserror::Error)]
pub enum SerializeError {
    #[error("No rule registered for node kind: {0}")]
    UnknownNode(String),

    #[error("No rule registered for mark kind: {0}")]
    UnknownMark(String),

    #[error("Invalid document: {0}")]
    InvalidDocument(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SerializeError>;
