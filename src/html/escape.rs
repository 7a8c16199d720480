use std::borrow::Cow;

/// How text is written into markup.
///
/// `Verbatim` copies names and URLs as-is, which lets markup inside a player name
/// through to the page. `Html` encodes the characters that would break out of a
/// text node or a quoted attribute.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Escaping {
    #[default]
    Verbatim,
    Html,
}

impl Escaping {
    pub fn apply(self, text: &str) -> Cow<'_, str> {
        match self {
            Escaping::Verbatim => Cow::Borrowed(text),
            Escaping::Html => escape_html(text),
        }
    }
}

fn escape_html(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }

    let mut escaped = String::with_capacity(text.len() + 16);
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}
