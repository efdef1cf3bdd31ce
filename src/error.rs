use std::fmt;

pub type Result<T> = std::result::Result<T, FiddleError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FiddleError {
    /// The constant pool outgrew the one-byte operand range.
    TooManyConstants,
}

impl fmt::Display for FiddleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FiddleError::TooManyConstants => f.write_str("Too many constants in one chunk."),
        }
    }
}

impl std::error::Error for FiddleError {}
