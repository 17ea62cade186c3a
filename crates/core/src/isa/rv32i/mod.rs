//! RV32I encoding constants.

/// funct3 codes per major opcode.
pub mod funct3;
/// Major opcodes (bits 6-0).
pub mod opcodes;
