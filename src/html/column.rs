use super::Escaping;

pub trait Column {
    fn len(&self) -> usize;
    fn header(&self) -> &str;
    fn format_cell(&self, row_index: usize, escaping: Escaping) -> String;
}

impl std::fmt::Debug for dyn Column {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Column")
    }
}
