//! Paragraph extraction with a regular expression

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref PARAGRAPH: Regex = Regex::new(r"<p>(.*)</p>").unwrap();
}

/// Inner text of every `<p>...</p>` pair.
///
/// Matching is greedy and does not cross line breaks, so several paragraphs
/// on one line come back as a single match.
pub fn get_paragraphs(html: &str) -> Vec<String> {
    PARAGRAPH
        .captures_iter(html)
        .map(|caps| caps[1].to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_paragraph_per_line() {
        let html = "<html>\n<p>First</p>\n<div>skip</div>\n<p>Second one</p>\n</html>";
        assert_eq!(get_paragraphs(html), vec!["First", "Second one"]);
    }

    #[test]
    fn test_greedy_on_single_line() {
        let html = "<p>a</p><p>b</p>";
        assert_eq!(get_paragraphs(html), vec!["a</p><p>b"]);
    }

    #[test]
    fn test_does_not_span_lines() {
        assert!(get_paragraphs("<p>open\nclose</p>").is_empty());
    }
}
