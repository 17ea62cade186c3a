//! ALU arithmetic operations.
//!
//! Integer addition and subtraction with two's-complement wraparound;
//! overflow is never a fault in RV32I.

use crate::core::pipeline::signals::AluOp;

/// Executes an integer arithmetic operation.
///
/// Returns `0` for non-arithmetic opcodes.
#[must_use]
pub fn execute(op: AluOp, a: u32, b: u32) -> u32 {
    match op {
        AluOp::Add => a.wrapping_add(b),
        AluOp::Sub => a.wrapping_sub(b),
        _ => 0,
    }
}
