use super::Escaping;

pub const ICON_SIZE_PX: u32 = 24;

pub fn img_tag(url: &str) -> String {
    format!(
        "<img src=\"{}\" width=\"{size}\" height=\"{size}\">",
        url,
        size = ICON_SIZE_PX
    )
}

/// A cell of back-to-back icon images per row.
pub struct Icons {
    header: String,
    urls: Vec<Vec<String>>,
}

impl Icons {
    pub fn new(header: &str, urls: Vec<Vec<String>>) -> Self {
        Self {
            header: header.into(),
            urls,
        }
    }
}

impl crate::html::Column for Icons {
    fn len(&self) -> usize {
        self.urls.len()
    }

    fn header(&self) -> &str {
        &self.header
    }

    fn format_cell(&self, row_index: usize, escaping: Escaping) -> String {
        self.urls[row_index]
            .iter()
            .map(|url| img_tag(&escaping.apply(url)))
            .collect()
    }
}

impl From<Icons> for Box<dyn crate::html::Column> {
    fn from(i: Icons) -> Self {
        Box::new(i)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::html::Column;

    #[test]
    fn icons_are_concatenated_without_separator() {
        let column = Icons::new(
            "Character",
            vec![vec!["a.png".to_string(), "b.png".to_string()], vec![]],
        );
        assert_eq!(
            column.format_cell(0, Escaping::Verbatim),
            "<img src=\"a.png\" width=\"24\" height=\"24\"><img src=\"b.png\" width=\"24\" height=\"24\">"
        );
        assert_eq!(column.format_cell(1, Escaping::Verbatim), "");
    }

    #[test]
    fn urls_follow_the_escaping_policy() {
        let column = Icons::new("Character", vec![vec!["x.png?a=1&b=\"2\"".to_string()]]);
        assert_eq!(
            column.format_cell(0, Escaping::Html),
            "<img src=\"x.png?a=1&amp;b=&quot;2&quot;\" width=\"24\" height=\"24\">"
        );
    }
}
