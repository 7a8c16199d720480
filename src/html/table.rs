use tracing::trace;

use super::{Column, Escaping, HtmlBuilder};

pub const STYLE_DEFINITION: &str = concat!(
    "<style type=\"text/css\">\n",
    ".tg  {border-collapse:collapse;border-spacing:0;border-color:#ccc;}\n",
    ".tg td{font-family:Arial, sans-serif;font-size:14px;padding:10px 5px;border-style:solid;border-width:1px;overflow:hidden;word-break:normal;border-color:#ccc;color:#333;background-color:#fff;}\n",
    ".tg th{font-family:Arial, sans-serif;font-size:14px;font-weight:normal;padding:10px 5px;border-style:solid;border-width:1px;overflow:hidden;word-break:normal;border-color:#ccc;color:#333;background-color:#f0f0f0;}\n",
    ".tg .style1{vertical-align:top}\n",
    "</style>\n",
);

pub const TABLE_START: &str = concat!(
    "<table class=\"tg\" style=\"undefined;table-layout: fixed;\">\n",
    "<colgroup>\n",
    "<col style=\"width: 55px\">\n",
    "<col style=\"width: 80px\">\n",
    "<col style=\"width: 120px\" >\n",
    "</colgroup>\n",
);

pub const TABLE_END: &str = "</table>\n";

pub const CELL_CLASS: &str = "style1";

pub struct TableBuilder {
    columns: Vec<Box<dyn Column>>,
    row_count: Option<usize>,
    escaping: Escaping,
}

impl TableBuilder {
    pub fn new() -> Self {
        Self {
            columns: Vec::new(),
            row_count: None,
            escaping: Escaping::default(),
        }
    }

    pub fn with_escaping(mut self, escaping: Escaping) -> Self {
        self.escaping = escaping;
        self
    }

    pub fn add_column(mut self, column: impl Into<Box<dyn Column>>) -> Self {
        let column = column.into();
        let column_len = column.len();

        match self.row_count {
            None => self.row_count = Some(column_len),
            Some(existing) if existing == column_len => {}
            Some(existing) => {
                panic!(
                    "column length mismatch: expected {} rows but received {}",
                    existing, column_len
                );
            }
        }

        self.columns.push(column);
        self
    }

    /// Style block, table opening, header row, data rows and closing tag.
    pub fn build(self) -> String {
        let row_count = self.row_count.unwrap_or(0);
        let mut html = HtmlBuilder::new();

        html.text(STYLE_DEFINITION).text(TABLE_START);
        html.row(
            "th",
            CELL_CLASS,
            self.columns.iter().map(|col| self.escaping.apply(col.header())),
        );

        for row_index in 0..row_count {
            html.row(
                "td",
                CELL_CLASS,
                self.columns
                    .iter()
                    .map(|col| col.format_cell(row_index, self.escaping)),
            );
        }
        trace!(rows = row_count, columns = self.columns.len(), "Built HTML table");

        html.text(TABLE_END);
        html.build()
    }
}

impl Default for TableBuilder {
    fn default() -> Self {
        Self::new()
    }
}
