pub mod dates;
pub mod macros;
