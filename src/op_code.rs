use num_enum::{IntoPrimitive, TryFromPrimitive};
use strum::{EnumCount, EnumIter};

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, IntoPrimitive, TryFromPrimitive, EnumCount, EnumIter,
)]
#[repr(u8)]
pub enum OpCode {
    /// Load constant for use; followed by a one-byte pool index
    Constant,
    Negate,
    Add,
    Subtract,
    Multiply,
    Divide,
    Return,
}
