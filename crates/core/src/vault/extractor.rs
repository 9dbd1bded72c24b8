//! Wikilink extraction from note text.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// How many links a single line may contribute.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LinkMode {
    /// Every `[[target]]` on the line, left to right.
    #[default]
    All,
    /// At most one target per line: the greedy match spanning from the last
    /// `[[` to the last `]]`.
    Last,
}

/// A link extracted from a note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedLink {
    /// Target name, verbatim as written between the brackets.
    pub target: String,
    /// Line number where link appears (1-based).
    pub line_number: u32,
}

// Matches [[target]]; the target cannot contain brackets
static WIKILINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[\[([^\[\]]+)\]\]").unwrap());

static GREEDY_WIKILINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r".*\[\[(.*)\]\].*").unwrap());

/// Line-scoped wikilink matcher.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinkExtractor {
    mode: LinkMode,
}

impl LinkExtractor {
    pub fn new(mode: LinkMode) -> Self {
        Self { mode }
    }

    /// Link targets on one line of text. Empty targets are dropped.
    pub fn extract<'a>(&self, line: &'a str) -> Vec<&'a str> {
        match self.mode {
            LinkMode::All => WIKILINK_RE
                .captures_iter(line)
                .filter_map(|cap| cap.get(1))
                .map(|m| m.as_str())
                .collect(),
            LinkMode::Last => GREEDY_WIKILINK_RE
                .captures(line)
                .and_then(|cap| cap.get(1))
                .map(|m| m.as_str())
                .filter(|target| !target.is_empty())
                .into_iter()
                .collect(),
        }
    }

    /// All links of a document, in order of appearance.
    pub fn extract_links(&self, content: &str) -> Vec<ExtractedLink> {
        let mut links = Vec::new();

        for (line_num, line) in content.lines().enumerate() {
            let line_number = (line_num + 1) as u32;
            for target in self.extract(line) {
                links.push(ExtractedLink { target: target.to_string(), line_number });
            }
        }

        links
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_single_link() {
        let extractor = LinkExtractor::default();
        assert_eq!(extractor.extract("This links to [[other-note]]."), vec!["other-note"]);
    }

    #[test]
    fn test_extract_all_links_on_line() {
        let extractor = LinkExtractor::new(LinkMode::All);
        assert_eq!(extractor.extract("See [[B]] and [[pic.png]]."), vec!["B", "pic.png"]);
    }

    #[test]
    fn test_extract_embed_syntax() {
        let extractor = LinkExtractor::default();
        assert_eq!(extractor.extract("![[diagram.png]]"), vec!["diagram.png"]);
    }

    #[test]
    fn test_target_is_verbatim() {
        let extractor = LinkExtractor::default();
        assert_eq!(
            extractor.extract("[[ spaced name ]] and [[note|alias]]"),
            vec![" spaced name ", "note|alias"]
        );
    }

    #[test]
    fn test_no_links() {
        let extractor = LinkExtractor::default();
        assert!(extractor.extract("plain text with [single] brackets").is_empty());
        assert!(extractor.extract("empty [[]] link").is_empty());
    }

    #[test]
    fn test_last_mode_keeps_one_link_per_line() {
        let extractor = LinkExtractor::new(LinkMode::Last);
        assert_eq!(extractor.extract("See [[B]] and [[pic.png]]."), vec!["pic.png"]);
        assert_eq!(extractor.extract("only [[C]] here"), vec!["C"]);
    }

    #[test]
    fn test_last_mode_spans_to_last_closing_brackets() {
        let extractor = LinkExtractor::new(LinkMode::Last);
        assert_eq!(extractor.extract("[[a]] x]]"), vec!["a]] x"]);
        assert!(extractor.extract("[[]]").is_empty());
    }

    #[test]
    fn test_line_numbers() {
        let content = "Line 1\nLine 2 with [[link1]]\nLine 3\nLine 4 with [[link2]] [[link3]]\n";
        let links = LinkExtractor::default().extract_links(content);

        assert_eq!(links.len(), 3);
        assert_eq!(links[0], ExtractedLink { target: "link1".into(), line_number: 2 });
        assert_eq!(links[1].line_number, 4);
        assert_eq!(links[2].target, "link3");
    }

    #[test]
    fn test_crlf_lines() {
        let links = LinkExtractor::default().extract_links("[[a]]\r\n[[b]]\r\n");
        let targets: Vec<_> = links.iter().map(|l| l.target.as_str()).collect();
        assert_eq!(targets, vec!["a", "b"]);
    }
}
