//! Escaping and quoting helpers for Markdown output.

use once_cell::sync::Lazy;
use regex::Regex;

/// Characters that are markup anywhere in a line
static INLINE_SPECIAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"[`*\\~+\[\]]").unwrap());

/// Characters that are only markup at the start of a line
static LINE_START_SPECIAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[:#-]").unwrap());

/// Backslash-escape Markdown special characters.
///
/// `` ` * \ ~ + [ ] `` are escaped everywhere. A leading `:`, `#` or `-` is
/// escaped only when `at_line_start` is set, since those only open block
/// structure at the beginning of a line.
pub fn escape(text: &str, at_line_start: bool) -> String {
    let escaped = INLINE_SPECIAL.replace_all(text, r"\$0");
    if at_line_start {
        LINE_START_SPECIAL.replace(&escaped, r"\$0").into_owned()
    } else {
        escaped.into_owned()
    }
}

/// Wrap a title attribute in the first delimiter pair it doesn't contain
pub fn quote(text: &str) -> String {
    let (open, close) = if !text.contains('"') {
        ('"', '"')
    } else if !text.contains('\'') {
        ('\'', '\'')
    } else {
        ('(', ')')
    };
    format!("{}{}{}", open, text, close)
}

/// Repeat a string n times
pub fn repeat(s: &str, n: usize) -> String {
    s.repeat(n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_inline() {
        assert_eq!(escape("Hello *world*", false), "Hello \\*world\\*");
        assert_eq!(escape("[link]", false), "\\[link\\]");
        assert_eq!(escape("a\\b", false), "a\\\\b");
        assert_eq!(escape("`x` ~y~ +z", false), "\\`x\\` \\~y\\~ \\+z");
        assert_eq!(escape("under_score", false), "under_score");
    }

    #[test]
    fn test_escape_line_start() {
        assert_eq!(escape("# title", true), "\\# title");
        assert_eq!(escape("- item", true), "\\- item");
        assert_eq!(escape(": def", true), "\\: def");
        assert_eq!(escape("# title", false), "# title");
        assert_eq!(escape("a - b # c", true), "a - b # c");
        assert_eq!(escape("--", true), "\\--");
    }

    #[test]
    fn test_quote() {
        assert_eq!(quote("plain"), "\"plain\"");
        assert_eq!(quote("say \"hi\""), "'say \"hi\"'");
        assert_eq!(quote("it's \"x\""), "(it's \"x\")");
    }

    #[test]
    fn test_repeat() {
        assert_eq!(repeat("#", 3), "###");
        assert_eq!(repeat(" ", 0), "");
    }
}
