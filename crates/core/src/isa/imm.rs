//! Parallel immediate synthesis.
//!
//! Hardware decoders build every immediate format from the raw instruction
//! word at once and select the right one with the format code from the decode
//! table. This module mirrors that: [`Immediates::synthesize`] produces all
//! six candidates in one pass, and [`Immediates::select`] picks one.
//!
//! All formats sign-extend from instruction bit 31; B and J immediates have
//! an implicit zero in bit 0, and the U immediate occupies bits 31-12 with
//! the low twelve bits cleared.

/// Total width of an instruction word in bits.
const WORD_BITS: u32 = 32;

/// Width of the I/S immediate fields (12 bits, sign-extended).
const IS_IMM_BITS: u32 = 12;
/// Width of the B immediate (13 bits including the implicit zero).
const B_IMM_BITS: u32 = 13;
/// Width of the J immediate (21 bits including the implicit zero).
const J_IMM_BITS: u32 = 21;

/// Bit mask for the U-type immediate field (bits 31-12).
const U_IMM_MASK: u32 = 0xFFFF_F000;

/// Instruction format selector for the decoded immediate.
///
/// `R` exists so every table row carries a format; R-type instructions have
/// no immediate and the candidate is a constant zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ImmFormat {
    /// No immediate (R-type); the candidate is zero.
    #[default]
    R,
    /// 12-bit immediate in bits 31-20 (ALU-immediate, loads, JALR).
    I,
    /// 12-bit split immediate (stores).
    S,
    /// 13-bit even branch offset.
    B,
    /// Upper 20 bits, low twelve zero (LUI, AUIPC).
    U,
    /// 21-bit even jump offset (JAL).
    J,
}

/// All immediate candidates synthesized from one instruction word.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Immediates {
    /// R-type placeholder, always zero.
    pub r: u32,
    /// I-type: bits 31-20, sign-extended.
    pub i: u32,
    /// S-type: bits 31-25 over bits 11-7, sign-extended.
    pub s: u32,
    /// B-type: shuffled even offset, sign-extended.
    pub b: u32,
    /// U-type: bits 31-12 in place, low bits zero.
    pub u: u32,
    /// J-type: shuffled even offset, sign-extended.
    pub j: u32,
}

impl Immediates {
    /// Builds every immediate candidate from a raw instruction word.
    #[must_use]
    pub fn synthesize(inst: u32) -> Self {
        Self {
            r: 0,
            i: i_imm(inst),
            s: s_imm(inst),
            b: b_imm(inst),
            u: u_imm(inst),
            j: j_imm(inst),
        }
    }

    /// Selects the candidate named by the decode table's format code.
    #[must_use]
    pub fn select(&self, fmt: ImmFormat) -> u32 {
        match fmt {
            ImmFormat::R => self.r,
            ImmFormat::I => self.i,
            ImmFormat::S => self.s,
            ImmFormat::B => self.b,
            ImmFormat::U => self.u,
            ImmFormat::J => self.j,
        }
    }
}

/// I-type immediate: `imm[11:0]` in instruction bits 31-20.
fn i_imm(inst: u32) -> u32 {
    sign_extend(inst >> 20, IS_IMM_BITS)
}

/// S-type immediate: `imm[11:5]` in bits 31-25, `imm[4:0]` in bits 11-7.
fn s_imm(inst: u32) -> u32 {
    let low = (inst >> 7) & 0x1F;
    let high = (inst >> 25) & 0x7F;
    sign_extend((high << 5) | low, IS_IMM_BITS)
}

/// B-type immediate: `imm[12|10:5]` in bits 31-25, `imm[4:1|11]` in bits 11-7.
fn b_imm(inst: u32) -> u32 {
    let bit_11 = (inst >> 7) & 0x1;
    let bits_4_1 = (inst >> 8) & 0xF;
    let bits_10_5 = (inst >> 25) & 0x3F;
    let bit_12 = (inst >> 31) & 0x1;

    let combined = (bit_12 << 12) | (bit_11 << 11) | (bits_10_5 << 5) | (bits_4_1 << 1);
    sign_extend(combined, B_IMM_BITS)
}

/// U-type immediate: bits 31-12 kept in place, low twelve bits cleared.
fn u_imm(inst: u32) -> u32 {
    inst & U_IMM_MASK
}

/// J-type immediate: `imm[20|10:1|11|19:12]` in instruction bits 31-12.
fn j_imm(inst: u32) -> u32 {
    let bits_19_12 = (inst >> 12) & 0xFF;
    let bit_11 = (inst >> 20) & 0x1;
    let bits_10_1 = (inst >> 21) & 0x3FF;
    let bit_20 = (inst >> 31) & 0x1;

    let combined = (bit_20 << 20) | (bits_19_12 << 12) | (bit_11 << 11) | (bits_10_1 << 1);
    sign_extend(combined, J_IMM_BITS)
}

/// Sign extends a `bits`-wide value to the full word width.
fn sign_extend(val: u32, bits: u32) -> u32 {
    let shift = WORD_BITS - bits;
    (((val << shift) as i32) >> shift) as u32
}
