//! Markdown rewriting applied to exported notes.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::{Captures, Regex};

/// Fenced code block delimiter.
pub const FENCE: &str = "```";

// Matches [[name.png]] and the ![[name.png]] embed form
static PNG_LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!?\[\[([^\[\]]+\.png)\]\]").unwrap());

/// Full rewrite of one exported note: title heading, image embeds, then
/// paragraph spacing.
pub fn transform_note(stem: &str, content: &str) -> String {
    let mut titled = format!("# {stem}\n");
    titled.push_str(&rewrite_image_links(content));
    fix_newlines(&titled)
}

/// Replace every `[[name.png]]` outside fenced code with a standard markdown
/// image.
pub fn rewrite_image_links(content: &str) -> String {
    map_outside_fences(content, |part| {
        PNG_LINK_RE.replace_all(part, |caps: &Captures| image_embed(&caps[1]))
    })
}

/// Double every newline outside fenced code. Fenced blocks, delimiters
/// included, are left untouched.
pub fn fix_newlines(content: &str) -> String {
    map_outside_fences(content, |part| Cow::Owned(part.replace('\n', "\n\n")))
}

fn image_embed(target: &str) -> String {
    if target.chars().any(char::is_whitespace) {
        format!("![_](<{target}>)")
    } else {
        format!("![_]({target})")
    }
}

/// Apply `f` to the text between fences. An unterminated fence runs to the
/// end of the document.
fn map_outside_fences<'a, F>(content: &'a str, f: F) -> String
where
    F: Fn(&'a str) -> Cow<'a, str>,
{
    let mut out = String::with_capacity(content.len() * 2);

    for (i, part) in content.split(FENCE).enumerate() {
        if i > 0 {
            out.push_str(FENCE);
        }
        if i % 2 == 0 {
            out.push_str(&f(part));
        } else {
            out.push_str(part);
        }
    }

    out
}
