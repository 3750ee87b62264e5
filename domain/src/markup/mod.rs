//! Safe markup generation for user-supplied text.
//!
//! - [`escape::TextEscaper`]: injected escaping capability
//! - [`abstract_text::format_abstract`]: abstract text to `<p>` paragraphs

pub mod abstract_text;
pub mod escape;
