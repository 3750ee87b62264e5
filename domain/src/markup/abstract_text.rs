//! Session abstract to paragraph markup.
//!
//! The raw abstract is escaped as a whole before it is split into paragraphs.
//! The paragraph delimiter is escaped with the same escaper and the split
//! happens on that escaped form. Splitting first would let text that merely
//! looks like an escaped CR/LF act as a delimiter. The only unescaped markup
//! in the output is the `<p>`/`</p>` pairs added here.

use super::escape::TextEscaper;

/// Paragraph delimiter in raw abstracts
pub const PARAGRAPH_DELIMITER: &str = "\r\n";

/// Convert a raw abstract into escaped `<p>` paragraphs.
///
/// Returns `None` for an absent or empty abstract, and when no non-empty
/// paragraph remains after splitting.
pub fn format_abstract(raw: Option<&str>, escaper: &dyn TextEscaper) -> Option<String> {
    let raw = raw.filter(|text| !text.is_empty())?;

    let escaped = escaper.escape(raw);
    let delimiter = escaper.escape(PARAGRAPH_DELIMITER);

    let paragraphs: Vec<&str> = if delimiter.is_empty() {
        vec![escaped.as_str()]
    } else {
        escaped.split(delimiter.as_str()).collect()
    };

    let markup: String = paragraphs
        .into_iter()
        .filter(|p| !p.is_empty())
        .map(|p| format!("<p>{}</p>", p))
        .collect();

    if markup.is_empty() { None } else { Some(markup) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::escape::HtmlEscaper;

    /// Escapes like a full HTML encoder: CR and LF become numeric entities.
    fn entity_escaper(text: &str) -> String {
        HtmlEscaper
            .escape(text)
            .replace('\r', "&#xD;")
            .replace('\n', "&#xA;")
    }

    #[test]
    fn test_three_paragraphs() {
        assert_eq!(
            format_abstract(Some("A\r\nB\r\nC"), &HtmlEscaper).as_deref(),
            Some("<p>A</p><p>B</p><p>C</p>")
        );
    }

    #[test]
    fn test_absent_and_empty() {
        assert_eq!(format_abstract(None, &HtmlEscaper), None);
        assert_eq!(format_abstract(Some(""), &HtmlEscaper), None);
    }

    #[test]
    fn test_only_delimiters() {
        assert_eq!(format_abstract(Some("\r\n\r\n"), &HtmlEscaper), None);
    }

    #[test]
    fn test_empty_segments_dropped() {
        assert_eq!(
            format_abstract(Some("\r\nA\r\n\r\nB\r\n"), &HtmlEscaper).as_deref(),
            Some("<p>A</p><p>B</p>")
        );
    }

    #[test]
    fn test_script_tag_is_escaped() {
        let out = format_abstract(
            Some("Intro\r\n<script>alert('x')</script>"),
            &HtmlEscaper,
        )
        .unwrap();
        assert!(!out.contains("<script>"));
        assert_eq!(
            out,
            "<p>Intro</p><p>&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;</p>"
        );
    }

    #[test]
    fn test_entity_escaper_splits_on_escaped_delimiter() {
        assert_eq!(
            format_abstract(Some("A\r\nB"), &entity_escaper).as_deref(),
            Some("<p>A</p><p>B</p>")
        );
    }

    #[test]
    fn test_literal_escaped_delimiter_is_not_a_paragraph_break() {
        // Text that spells out the escaped delimiter must stay one paragraph
        let out = format_abstract(Some("A&#xD;&#xA;<b>B</b>"), &entity_escaper).unwrap();
        assert_eq!(out, "<p>A&amp;#xD;&amp;#xA;&lt;b&gt;B&lt;/b&gt;</p>");
        assert!(!out.contains("<b>"));
    }

    #[test]
    fn test_lone_newline_is_not_a_delimiter() {
        assert_eq!(
            format_abstract(Some("A\nB"), &HtmlEscaper).as_deref(),
            Some("<p>A\nB</p>")
        );
    }
}
