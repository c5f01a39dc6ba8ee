use crate::error::{Result, TodoError};

pub const MIN_NAME_CHARS: usize = 1;
pub const MAX_NAME_CHARS: usize = 100;

pub(crate) const LIST_NAME: &str = "List name";
pub(crate) const TODO_NAME: &str = "Todo";

/// Strips surrounding whitespace from user-entered names
pub fn normalize_name(raw: &str) -> String {
    raw.trim().to_string()
}

/// Checks that a name is within the allowed length, counted in characters
pub fn check_length(subject: &'static str, name: &str) -> Result<()> {
    let len = name.chars().count();
    if (MIN_NAME_CHARS..=MAX_NAME_CHARS).contains(&len) {
        Ok(())
    } else {
        Err(TodoError::InvalidLength {
            subject,
            min: MIN_NAME_CHARS,
            max: MAX_NAME_CHARS,
        })
    }
}
