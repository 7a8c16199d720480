pub mod column;
pub mod escape;
pub mod html_builder;
pub mod icons;
pub mod table;
pub mod text;

pub use column::Column;
pub use escape::Escaping;
pub use html_builder::HtmlBuilder;
pub use icons::Icons;
pub use table::TableBuilder;
pub use text::Text;
