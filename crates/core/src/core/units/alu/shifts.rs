//! ALU shift operations.
//!
//! Logical left, logical right, and arithmetic right shifts. Only the low
//! five bits of the second operand form the shift amount, so immediate and
//! register shift variants share one implementation.

use crate::core::pipeline::signals::AluOp;

/// Mask selecting the 5-bit shift amount.
const SHAMT_MASK: u32 = 0x1F;

/// Executes a shift operation.
///
/// Returns `0` for non-shift opcodes.
#[must_use]
pub fn execute(op: AluOp, a: u32, b: u32) -> u32 {
    let shamt = b & SHAMT_MASK;
    match op {
        AluOp::Sll => a << shamt,
        AluOp::Srl => a >> shamt,
        AluOp::Sra => ((a as i32) >> shamt) as u32,
        _ => 0,
    }
}
