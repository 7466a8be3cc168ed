use crate::config::ROOT_FLAG_VALUE;

/// Whether an optional config value is exactly the literal `"true"`.
///
/// No trimming or case folding: `"TRUE"`, `" true"` and `"1"` are all false.
pub fn is_literal_true(value: Option<&str>) -> bool {
    value == Some(ROOT_FLAG_VALUE)
}
