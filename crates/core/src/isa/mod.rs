//! Instruction-set definitions for RV32I.

/// Parallel immediate synthesis for all base formats.
pub mod imm;
/// Field extraction from raw instruction words.
pub mod instruction;
/// RV32I opcode and funct3 constants.
pub mod rv32i;

pub use imm::Immediates;
pub use instruction::InstructionBits;
