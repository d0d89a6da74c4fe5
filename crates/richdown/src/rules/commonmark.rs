//! CommonMark rules for the built-in node and mark kinds.

use super::{MarkRule, Markup, NodeRule};
use crate::utilities::repeat;

/// Create all CommonMark node rules
pub fn commonmark_node_rules() -> Vec<(&'static str, NodeRule)> {
    vec![
        ("blockquote", blockquote_rule()),
        ("code_block", code_block_rule()),
        ("heading", heading_rule()),
        ("horizontal_rule", horizontal_rule()),
        ("bullet_list", bullet_list_rule()),
        ("ordered_list", ordered_list_rule()),
        ("list_item", list_item_rule()),
        ("paragraph", paragraph_rule()),
        ("image", image_rule()),
        ("hard_break", hard_break_rule()),
        ("text", text_rule()),
    ]
}

/// Create all CommonMark mark rules
pub fn commonmark_mark_rules() -> Vec<(&'static str, MarkRule)> {
    vec![
        ("em", MarkRule::new("*", "*").mixable()),
        ("strong", MarkRule::new("**", "**").mixable()),
        ("link", link_rule()),
        ("code", MarkRule::new("`", "`").literal()),
    ]
}

fn blockquote_rule() -> NodeRule {
    NodeRule::new(|state, node| {
        state.wrap_block("> ", None, node, |state| state.render_content(node))
    })
}

fn code_block_rule() -> NodeRule {
    NodeRule::new(|state, node| match node.attr_str("params") {
        None => state.wrap_block("    ", None, node, |state| {
            state.text(&node.text_content(), false);
            Ok(())
        }),
        Some(params) => {
            state.write(&format!("```{}\n", params));
            state.text(&node.text_content(), false);
            state.ensure_new_line();
            state.write("```");
            state.close_block(node);
            Ok(())
        }
    })
}

fn heading_rule() -> NodeRule {
    NodeRule::new(|state, node| {
        let level = node.attr_u64("level").unwrap_or(1).clamp(1, 6) as usize;
        state.write(&format!("{} ", repeat("#", level)));
        state.render_inline(node)?;
        state.close_block(node);
        Ok(())
    })
}

fn horizontal_rule() -> NodeRule {
    NodeRule::new(|state, node| {
        state.write(node.attr_str("markup").unwrap_or("---"));
        state.close_block(node);
        Ok(())
    })
}

fn bullet_list_rule() -> NodeRule {
    NodeRule::new(|state, node| {
        let bullet = format!("{} ", node.attr_str("bullet").unwrap_or("*"));
        state.render_list(node, "  ", |_| bullet.clone())
    })
}

fn ordered_list_rule() -> NodeRule {
    NodeRule::new(|state, node| {
        let start = node.attr_u64("order").unwrap_or(1);
        let last = start.saturating_add((node.child_count() as u64).saturating_sub(1));
        let width = last.to_string().len();
        let indent = repeat(" ", width + 2);
        state.render_list(node, &indent, |i| {
            format!("{:>width$}. ", start.saturating_add(i as u64), width = width)
        })
    })
}

fn list_item_rule() -> NodeRule {
    NodeRule::new(|state, node| state.render_content(node))
}

fn paragraph_rule() -> NodeRule {
    NodeRule::new(|state, node| {
        state.render_inline(node)?;
        state.close_block(node);
        Ok(())
    })
}

fn image_rule() -> NodeRule {
    NodeRule::new(|state, node| {
        let alt = state.esc(node.attr_str("alt").unwrap_or(""), false);
        let src = state.esc(node.attr_str("src").unwrap_or(""), false);
        let title = node
            .attr_str("title")
            .filter(|t| !t.is_empty())
            .map(|t| format!(" {}", state.quote(t)))
            .unwrap_or_default();
        state.write(&format!("![{}]({}{})", alt, src, title));
        Ok(())
    })
}

fn hard_break_rule() -> NodeRule {
    NodeRule::new(|state, _| {
        let markup = state.options().hard_break.clone();
        state.write(&markup);
        Ok(())
    })
}

fn text_rule() -> NodeRule {
    NodeRule::new(|state, node| {
        state.text(node.text.as_deref().unwrap_or(""), true);
        Ok(())
    })
}

fn link_rule() -> MarkRule {
    MarkRule::new(
        "[",
        Markup::dynamic(|state, mark| {
            let href = state.esc(mark.attr_str("href").unwrap_or(""), false);
            let title = mark
                .attr_str("title")
                .filter(|t| !t.is_empty())
                .map(|t| format!(" {}", state.quote(t)))
                .unwrap_or_default();
            format!("]({}{})", href, title)
        }),
    )
}
