//! Plain text <-> HTML passthrough.
//!
//! PaperFlow stores no formatting of its own, so HTML files are a wrapper
//! around the plain text: one `<p>` per line on the way out, block tags
//! turned back into line breaks on the way in.

use std::sync::LazyLock;

use regex_lite::{Captures, Regex};

static BODY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<body[^>]*>(.*)</body\s*>").unwrap());
static HIDDEN_BLOCKS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<(?:head|style|script|title)\b.*?</(?:head|style|script|title)\s*>").unwrap()
});
static COMMENTS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->").unwrap());
static SOURCE_BREAK_BETWEEN_TAGS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r">[ \t\r]*\n\s*<").unwrap());
static SOURCE_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t\r]*\n[ \t\r]*").unwrap());
static LINE_BREAK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)<br\s*/?>").unwrap());
static BLOCK_END: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)</(?:p|div|li|h[1-6]|tr|pre|blockquote)\s*>").unwrap());
static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").unwrap());
static ENTITY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"&(#[xX][0-9a-fA-F]+|#[0-9]+|[a-zA-Z]+);").unwrap());

pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Wrap plain text in a minimal HTML document.
pub fn to_html(text: &str) -> String {
    let mut body = String::with_capacity(text.len() + 64);
    for line in text.split('\n') {
        body.push_str("<p>");
        body.push_str(&escape(line));
        body.push_str("</p>");
    }
    format!(
        "<!DOCTYPE html>\n<html><head><meta charset=\"utf-8\"><title>PaperFlow</title></head>\
         <body>{}</body></html>\n",
        body
    )
}

/// Plain-text rendering of an HTML document.
pub fn to_plain_text(html: &str) -> String {
    let content = match BODY.captures(html) {
        Some(caps) => caps.get(1).map_or("", |m| m.as_str()).to_string(),
        None => HIDDEN_BLOCKS.replace_all(html, "").into_owned(),
    };

    let content = COMMENTS.replace_all(&content, "");
    let content = HIDDEN_BLOCKS.replace_all(&content, "");
    let content = SOURCE_BREAK_BETWEEN_TAGS.replace_all(content.trim(), "><");
    let content = SOURCE_BREAK.replace_all(&content, " ");
    let content = LINE_BREAK.replace_all(&content, "\n");
    let content = BLOCK_END.replace_all(&content, "\n");
    let content = TAG.replace_all(&content, "");
    let mut text = decode_entities(&content);

    // The last block closes with a break of its own.
    if text.ends_with('\n') {
        text.pop();
    }
    text
}

fn decode_entities(text: &str) -> String {
    ENTITY
        .replace_all(text, |caps: &Captures| {
            let name = &caps[1];
            decode_entity(name).unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

fn decode_entity(name: &str) -> Option<String> {
    if let Some(hex) = name.strip_prefix("#x").or_else(|| name.strip_prefix("#X")) {
        return u32::from_str_radix(hex, 16).ok().and_then(char::from_u32).map(String::from);
    }
    if let Some(dec) = name.strip_prefix('#') {
        return dec.parse::<u32>().ok().and_then(char::from_u32).map(String::from);
    }
    let decoded = match name {
        "amp" => "&",
        "lt" => "<",
        "gt" => ">",
        "quot" => "\"",
        "apos" => "'",
        "nbsp" => " ",
        _ => return None,
    };
    Some(decoded.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_special_characters() {
        assert_eq!(escape("a < b & \"c\" > 'd'"), "a &lt; b &amp; &quot;c&quot; &gt; &#39;d&#39;");
    }

    #[test]
    fn test_to_html_one_paragraph_per_line() {
        let html = to_html("first\nsecond");
        assert!(html.contains("<p>first</p><p>second</p>"));
        assert!(html.starts_with("<!DOCTYPE html>"));
    }

    #[test]
    fn test_plain_text_survives_html() {
        for text in ["", "Hello", "a\n\nb", "trailing\n", "\n", "x < y && \"z\"", "tab\there  spaced"] {
            assert_eq!(to_plain_text(&to_html(text)), text, "text {:?}", text);
        }
    }

    #[test]
    fn test_foreign_html_blocks_and_breaks() {
        let html = "<html>\n<head><title>T</title><style>p {}</style></head>\n<body>\n\
                    <h1>Title</h1>\n<p>One<br/>Two</p>\n<div>Three &amp; four</div>\n</body>\n</html>";
        assert_eq!(to_plain_text(html), "Title\nOne\nTwo\nThree & four");
    }

    #[test]
    fn test_source_newlines_inside_text_become_spaces() {
        assert_eq!(to_plain_text("<p>wrapped\n   line</p>"), "wrapped line");
    }

    #[test]
    fn test_fragment_without_body() {
        assert_eq!(to_plain_text("<b>bold</b> and <i>italic</i>"), "bold and italic");
    }

    #[test]
    fn test_numeric_and_unknown_entities() {
        assert_eq!(to_plain_text("&#65;&#x42;&nbsp;&bogus;"), "AB &bogus;");
    }

    #[test]
    fn test_comments_are_dropped() {
        assert_eq!(to_plain_text("<p>kept<!-- hidden --></p>"), "kept");
    }
}
