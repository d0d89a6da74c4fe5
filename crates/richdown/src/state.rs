//! Serializer state: output buffer, line-prefix stack and block spacing.
//!
//! Block closure is lazy. [`SerializerState::close_block`] only records the
//! node that just finished; the next write decides how many blank lines go
//! between it and whatever follows. That is how two adjacent lists of the
//! same kind get forced apart while items of a tight list stay together.

use crate::node::{Mark, Node};
use crate::options::Options;
use crate::rules::Rules;
use crate::utilities;
use crate::Result;

/// Mutable state for one serialization pass
pub struct SerializerState<'a> {
    rules: &'a Rules,
    options: &'a Options,
    out: String,
    /// Accumulated line prefix (indentation, quote markers)
    delim: String,
    /// Kind of the block closed last, if its spacing is still pending
    closed: Option<String>,
    in_tight_list: bool,
}

impl<'a> SerializerState<'a> {
    pub fn new(rules: &'a Rules, options: &'a Options) -> Self {
        Self {
            rules,
            options,
            out: String::with_capacity(4096),
            delim: String::new(),
            closed: None,
            in_tight_list: false,
        }
    }

    pub fn options(&self) -> &Options {
        self.options
    }

    /// Output produced so far
    pub fn output(&self) -> &str {
        &self.out
    }

    /// Consume the state, returning the output
    pub fn into_output(self) -> String {
        self.out
    }

    /// Emit pending block spacing: a line break, then `size - 1` blank lines
    pub fn flush_close(&mut self, size: usize) {
        if self.closed.take().is_none() {
            return;
        }
        if !self.at_blank() {
            self.out.push('\n');
        }
        if size > 1 {
            let delim_min = self.delim.trim_end();
            for _ in 1..size {
                self.out.push_str(delim_min);
                self.out.push('\n');
            }
        }
    }

    /// Render `f` with `delim` added to the line prefix, then close `node`.
    ///
    /// `first_delim` replaces `delim` on the opening line (list markers).
    pub fn wrap_block<F>(
        &mut self,
        delim: &str,
        first_delim: Option<&str>,
        node: &Node,
        f: F,
    ) -> Result<()>
    where
        F: FnOnce(&mut Self) -> Result<()>,
    {
        let old = self.delim.clone();
        self.write(first_delim.unwrap_or(delim));
        self.delim.push_str(delim);
        let result = f(self);
        self.delim = old;
        result?;
        self.close_block(node);
        Ok(())
    }

    /// Whether the buffer is empty or ends with a line break
    pub fn at_blank(&self) -> bool {
        self.out.is_empty() || self.out.ends_with('\n')
    }

    /// Make sure the buffer ends with a line break
    pub fn ensure_new_line(&mut self) {
        if !self.at_blank() {
            self.out.push('\n');
        }
    }

    /// Append `content` verbatim, after pending spacing and the line prefix
    pub fn write(&mut self, content: &str) {
        self.flush_close(2);
        if !self.delim.is_empty() && self.at_blank() {
            self.out.push_str(&self.delim);
        }
        self.out.push_str(content);
    }

    /// Record that `node`'s block has finished
    pub fn close_block(&mut self, node: &Node) {
        self.closed = Some(node.kind.clone());
    }

    /// Add text, escaping it when `escape` is set. Each line gets the prefix.
    pub fn text(&mut self, text: &str, escape: bool) {
        let mut lines = text.split('\n').peekable();
        while let Some(line) = lines.next() {
            let start_of_line = self.at_blank() || self.closed.is_some();
            self.write("");
            if escape {
                self.out.push_str(&utilities::escape(line, start_of_line));
            } else {
                self.out.push_str(line);
            }
            if lines.peek().is_some() {
                self.out.push('\n');
            }
        }
    }

    /// Render a single node through its registered rule
    pub fn render(&mut self, node: &Node) -> Result<()> {
        tracing::trace!(kind = %node.kind, "render node");
        let rules = self.rules;
        rules.node(&node.kind)?.render(self, node)
    }

    /// Render the children of `parent` as block content
    pub fn render_content(&mut self, parent: &Node) -> Result<()> {
        for child in parent.children() {
            self.render(child)?;
        }
        Ok(())
    }

    /// Render the inline children of `parent`, opening and closing marks as
    /// the runs change.
    pub fn render_inline(&mut self, parent: &Node) -> Result<()> {
        let mut active: Vec<&Mark> = Vec::new();
        for child in parent.children() {
            self.progress(&mut active, Some(child))?;
        }
        self.progress(&mut active, None)
    }

    fn progress<'n>(&mut self, active: &mut Vec<&'n Mark>, node: Option<&'n Node>) -> Result<()> {
        let rules = self.rules;
        let mut marks: Vec<&'n Mark> = node.map(|n| n.marks.iter().collect()).unwrap_or_default();

        let is_literal = match marks.last() {
            Some(mark) => rules.mark(&mark.kind)?.literal,
            None => false,
        };
        let literal = if is_literal { marks.pop() } else { None };

        // Move mixable marks that are already open to the position they have
        // in `active`, so emphasis and strong don't get closed and reopened
        // just because the runs list them in a different order.
        let len = marks.len();
        'outer: for i in 0..len {
            let mark = marks[i];
            if !rules.mark(&mark.kind)?.mixable {
                break;
            }
            for (j, other) in active.iter().enumerate() {
                if !rules.mark(&other.kind)?.mixable {
                    break;
                }
                if mark == *other {
                    let target = j.min(len - 1);
                    if target != i {
                        let moved = marks.remove(i);
                        marks.insert(target, moved);
                    }
                    continue 'outer;
                }
            }
        }

        let mut keep = 0;
        while keep < active.len().min(marks.len()) && marks[keep] == active[keep] {
            keep += 1;
        }

        while keep < active.len() {
            if let Some(mark) = active.pop() {
                let close = self.mark_string(mark, false)?;
                self.text(&close, false);
            }
        }

        while active.len() < marks.len() {
            let add = marks[active.len()];
            active.push(add);
            let open = self.mark_string(add, true)?;
            self.text(&open, false);
        }

        let Some(node) = node else {
            return Ok(());
        };
        match (literal, &node.text) {
            (Some(mark), Some(text)) => {
                let wrapped = format!(
                    "{}{}{}",
                    self.mark_string(mark, true)?,
                    text,
                    self.mark_string(mark, false)?
                );
                self.text(&wrapped, false);
                Ok(())
            }
            _ => self.render(node),
        }
    }

    /// Render a list node: one wrapped block per item.
    ///
    /// `first_delim` maps an item index to the marker on its first line.
    pub fn render_list<F>(&mut self, node: &Node, delim: &str, first_delim: F) -> Result<()>
    where
        F: Fn(usize) -> String,
    {
        if self.closed.as_deref() == Some(node.kind.as_str()) {
            tracing::trace!(kind = %node.kind, "separating adjacent lists");
            self.flush_close(3);
        } else if self.in_tight_list {
            self.flush_close(1);
        }

        let is_tight = node.attr_bool("tight").unwrap_or(self.options.tight_lists);
        let prev_tight = self.in_tight_list;
        self.in_tight_list = is_tight;
        let result = self.render_items(node, delim, &first_delim, is_tight);
        self.in_tight_list = prev_tight;
        result
    }

    fn render_items<F>(&mut self, node: &Node, delim: &str, first_delim: &F, tight: bool) -> Result<()>
    where
        F: Fn(usize) -> String,
    {
        for (i, child) in node.children().enumerate() {
            if i > 0 && tight {
                self.flush_close(1);
            }
            let marker = first_delim(i);
            self.wrap_block(delim, Some(marker.as_str()), node, |state| state.render(child))?;
        }
        Ok(())
    }

    /// Escape text for output; see [`utilities::escape`]
    pub fn esc(&self, text: &str, at_line_start: bool) -> String {
        utilities::escape(text, at_line_start)
    }

    /// Quote a title attribute; see [`utilities::quote`]
    pub fn quote(&self, text: &str) -> String {
        utilities::quote(text)
    }

    /// Resolve the opening or closing markup of a mark
    pub fn mark_string(&self, mark: &Mark, open: bool) -> Result<String> {
        let rule = self.rules.mark(&mark.kind)?;
        Ok(rule.markup(self, mark, open))
    }
}
