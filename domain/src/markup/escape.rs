//! Text escaping capability.

/// Escapes text so it can be embedded in markup.
///
/// Implemented for plain closures, so tests and callers can inject any
/// escaping function without defining a type.
pub trait TextEscaper {
    fn escape(&self, text: &str) -> String;
}

impl<F> TextEscaper for F
where
    F: Fn(&str) -> String,
{
    fn escape(&self, text: &str) -> String {
        self(text)
    }
}

/// Escapes the five HTML-significant characters.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlEscaper;

impl TextEscaper for HtmlEscaper {
    fn escape(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        for c in text.chars() {
            match c {
                '&' => out.push_str("&amp;"),
                '<' => out.push_str("&lt;"),
                '>' => out.push_str("&gt;"),
                '"' => out.push_str("&quot;"),
                '\'' => out.push_str("&#39;"),
                _ => out.push(c),
            }
        }
        out
    }
}
