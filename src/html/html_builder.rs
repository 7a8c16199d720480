/// A simple builder for constructing HTML fragments line by line.
#[derive(Debug, Default, Clone)]
pub struct HtmlBuilder {
    content: String,
}

impl HtmlBuilder {
    pub fn new() -> Self {
        Self {
            content: String::new(),
        }
    }

    pub fn build(self) -> String {
        self.content
    }

    pub fn text(&mut self, text: &str) -> &mut Self {
        self.content.push_str(text);
        self
    }

    pub fn line(&mut self, text: &str) -> &mut Self {
        self.content.push_str(text);
        self.content.push('\n');
        self
    }

    /// Writes `<tag class="class">content</tag>` on its own line.
    pub fn element(&mut self, tag: &str, class: &str, content: &str) -> &mut Self {
        self.content.push('<');
        self.content.push_str(tag);
        self.content.push_str(" class=\"");
        self.content.push_str(class);
        self.content.push_str("\">");
        self.content.push_str(content);
        self.content.push_str("</");
        self.content.push_str(tag);
        self.content.push_str(">\n");
        self
    }

    /// Writes one `<tr>` with a `cell_tag` element per cell.
    pub fn row<I, T>(&mut self, cell_tag: &str, class: &str, cells: I) -> &mut Self
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        self.line("<tr>");
        for cell in cells {
            self.element(cell_tag, class, cell.as_ref());
        }
        self.line("</tr>")
    }
}
