/// Shorthand for `.to_string()` on anything `Display`.
#[macro_export]
macro_rules! str {
    ($value:expr) => {
        $value.to_string()
    };
}
