use super::Escaping;

pub struct Text {
    header: String,
    values: Vec<String>,
}

impl Text {
    pub fn new(header: &str, values: Vec<String>) -> Self {
        Self {
            header: header.into(),
            values,
        }
    }
}

impl crate::html::Column for Text {
    fn len(&self) -> usize {
        self.values.len()
    }

    fn header(&self) -> &str {
        &self.header
    }

    fn format_cell(&self, row_index: usize, escaping: Escaping) -> String {
        escaping.apply(&self.values[row_index]).into_owned()
    }
}

impl From<Text> for Box<dyn crate::html::Column> {
    fn from(t: Text) -> Self {
        Box::new(t)
    }
}
