//! ALU logical and comparison operations.
//!
//! Bitwise OR, AND, XOR, and the set-less-than pair. The comparisons
//! produce 1 or 0 in the low bit, matching the SLT/SLTU destination
//! register semantics.

use crate::core::pipeline::signals::AluOp;

/// Executes a logical or comparison operation.
///
/// Returns `0` for non-logical opcodes.
#[must_use]
pub fn execute(op: AluOp, a: u32, b: u32) -> u32 {
    match op {
        AluOp::Or => a | b,
        AluOp::And => a & b,
        AluOp::Xor => a ^ b,
        AluOp::Slt => u32::from((a as i32) < (b as i32)),
        AluOp::Sltu => u32::from(a < b),
        _ => 0,
    }
}
