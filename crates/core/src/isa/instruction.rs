//! Instruction field extraction.
//!
//! Provides bit extraction for the standard RV32I encoding fields from a raw
//! 32-bit instruction word. All extraction is purely combinational; no
//! legality checking happens here.

/// Bit mask for extracting the opcode field (bits 0-6).
pub const OPCODE_MASK: u32 = 0x7F;
/// Bit mask for extracting a 5-bit register index field.
pub const REG_MASK: u32 = 0x1F;
/// Bit mask for extracting the funct3 field (bits 12-14).
pub const FUNCT3_MASK: u32 = 0x7;
/// Bit mask for a single bit, used for the bit-30 discriminator.
pub const BIT_MASK: u32 = 0x1;

/// Trait for extracting instruction fields from encoded instructions.
///
/// Implemented on `u32` so a raw instruction word can be queried directly.
pub trait InstructionBits {
    /// Extracts the opcode field (bits 0-6).
    fn opcode(&self) -> u32;

    /// Extracts the destination register field (bits 7-11).
    ///
    /// Register 0 (x0) is hardwired to zero; writes to it are discarded.
    fn rd(&self) -> usize;

    /// Extracts the first source register field (bits 15-19).
    fn rs1(&self) -> usize;

    /// Extracts the second source register field (bits 20-24).
    fn rs2(&self) -> usize;

    /// Extracts the funct3 field (bits 12-14).
    ///
    /// Distinguishes operations that share an opcode (e.g. BEQ vs BNE).
    fn funct3(&self) -> u32;

    /// Extracts bit 30 of the instruction word.
    ///
    /// Bit 30 is the only funct7 bit RV32I needs; it separates ADD from SUB
    /// and SRL from SRA.
    fn bit30(&self) -> u32;
}

impl InstructionBits for u32 {
    #[inline(always)]
    fn opcode(&self) -> u32 {
        self & OPCODE_MASK
    }

    #[inline(always)]
    fn rd(&self) -> usize {
        ((self >> 7) & REG_MASK) as usize
    }

    #[inline(always)]
    fn rs1(&self) -> usize {
        ((self >> 15) & REG_MASK) as usize
    }

    #[inline(always)]
    fn rs2(&self) -> usize {
        ((self >> 20) & REG_MASK) as usize
    }

    #[inline(always)]
    fn funct3(&self) -> u32 {
        (self >> 12) & FUNCT3_MASK
    }

    #[inline(always)]
    fn bit30(&self) -> u32 {
        (self >> 30) & BIT_MASK
    }
}
