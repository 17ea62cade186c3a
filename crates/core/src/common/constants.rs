//! Architectural constants.

/// Number of general-purpose integer registers.
pub const GPR_COUNT: usize = 32;

/// The canonical NOP encoding (`addi x0, x0, 0`).
pub const INST_NOP: u32 = 0x0000_0013;

/// Width in bytes of one instruction word.
pub const INST_BYTES: u32 = 4;

/// JALR targets have their lowest bit cleared.
pub const JALR_ALIGN_MASK: u32 = !1;
