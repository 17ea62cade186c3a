//! Pipeline control signals.
//!
//! This module defines the typed control fields the decode table emits and the
//! downstream stages dispatch on. It covers:
//! 1. **Operation Classification:** ALU operation, branch kind, system opcode.
//! 2. **Operand Selection:** Sources for the two ALU inputs and the per-operand
//!    forwarding selection computed by the hazard unit.
//! 3. **Memory Control:** Access direction, width, sign treatment, and the
//!    destination register index that rides along with the memory channel.

use crate::isa::imm::ImmFormat;

/// ALU operation types.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AluOp {
    /// Integer addition (also the address adder for loads and stores).
    Add,

    /// Integer subtraction.
    Sub,

    /// Shift left logical.
    Sll,

    /// Set less than (signed).
    Slt,

    /// Set less than unsigned.
    Sltu,

    /// Bitwise XOR.
    Xor,

    /// Shift right logical.
    Srl,

    /// Shift right arithmetic.
    Sra,

    /// Bitwise OR.
    Or,

    /// Bitwise AND.
    And,

    /// No operation; the result is zero.
    #[default]
    Nop,
}

/// Source of the first ALU operand.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Op1Sel {
    /// The rs1 register value, after the forward mux.
    Reg1,
    /// The packet's program counter (AUIPC, JAL, JALR).
    Pc,
    /// Constant zero (LUI).
    #[default]
    Zero,
}

/// Source of the second ALU operand.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Op2Sel {
    /// The rs2 register value, after the forward mux.
    Reg2,
    /// The selected immediate.
    #[default]
    Imm,
    /// Constant 4, used to form the link value `pc + 4`.
    Const4,
}

/// Forwarding source for one register operand, chosen by the hazard unit.
///
/// Priority is nearest-stage-wins: a producer in execute shadows one in
/// memory, which shadows one in write-back.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FwdSel {
    /// No in-flight producer; use the register file read.
    #[default]
    Reg,
    /// Producer is in execute; use the execute bypass register.
    ExMem,
    /// Producer is in memory; use the memory bypass register.
    MemWb,
    /// Producer commits this cycle; the operand was already repaired with the
    /// write-back bypass value during decode.
    Wb,
}

/// Memory access direction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MemOp {
    /// No memory access.
    #[default]
    None,
    /// Read from memory.
    Load,
    /// Write to memory.
    Store,
}

/// Memory access width.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MemWidth {
    /// 8-bit access.
    Byte,
    /// 16-bit access.
    Half,
    /// 32-bit access.
    #[default]
    Word,
}

/// Branch or jump classification, resolved in the execute stage.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BranchKind {
    /// Not a control-flow instruction.
    #[default]
    None,
    /// Taken when rs1 == rs2.
    Eq,
    /// Taken when rs1 != rs2.
    Ne,
    /// Taken when rs1 < rs2, signed.
    Lt,
    /// Taken when rs1 >= rs2, signed.
    Ge,
    /// Taken when rs1 < rs2, unsigned.
    Ltu,
    /// Taken when rs1 >= rs2, unsigned.
    Geu,
    /// Unconditional jump to pc + immediate.
    Jal,
    /// Unconditional jump to rs1 + immediate.
    Jalr,
}

/// System instruction identity, recovered from the immediate field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SysOp {
    /// Not a system instruction.
    #[default]
    None,
    /// Environment call.
    Ecall,
    /// Environment breakpoint.
    Ebreak,
}

/// Memory-channel control.
///
/// The destination register index is folded in here rather than carried as a
/// separate field: it travels with the memory channel end to end, so the
/// write-back stage reads it from the same place for loads and ALU results
/// alike. A zero `rd` means the instruction writes no register.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MemCtrl {
    /// Access direction, or `None` for ALU-only packets.
    pub op: MemOp,
    /// Access width.
    pub width: MemWidth,
    /// Zero-extend rather than sign-extend load data.
    pub unsigned: bool,
    /// Destination register index; 0 when no write-back is wanted.
    pub rd: usize,
}

/// Full control word for one execute-stage packet.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ExCtrl {
    /// ALU operation.
    pub alu: AluOp,
    /// First ALU operand source.
    pub op1: Op1Sel,
    /// Second ALU operand source.
    pub op2: Op2Sel,
    /// Forwarding selection for rs1.
    pub rs1_fwd: FwdSel,
    /// Forwarding selection for rs2.
    pub rs2_fwd: FwdSel,
    /// Branch classification.
    pub branch: BranchKind,
    /// System instruction identity.
    pub sys: SysOp,
    /// The next PC the fetch unit predicted for this instruction.
    pub pred_next_pc: u32,
    /// Memory-channel control, including the destination register.
    pub mem: MemCtrl,
}

impl ExCtrl {
    /// The inert control word injected on a stall.
    ///
    /// Drives zero through the ALU, touches no memory, and targets x0, so the
    /// packet ages through the pipeline without architectural effect.
    #[must_use]
    pub fn bubble() -> Self {
        Self::default()
    }
}

/// One row's worth of decoded control, before hazard resolution.
///
/// This is what the lookup half of decode produces; the assembler half merges
/// it with the hazard unit's forwarding decision into an [`ExCtrl`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DecodedCtrl {
    /// ALU operation.
    pub alu: AluOp,
    /// First ALU operand source.
    pub op1: Op1Sel,
    /// Second ALU operand source.
    pub op2: Op2Sel,
    /// Branch classification.
    pub branch: BranchKind,
    /// System instruction identity.
    pub sys: SysOp,
    /// Memory-channel control, including the destination register.
    pub mem: MemCtrl,
    /// Immediate format the row selects.
    pub imm_fmt: ImmFormat,
    /// Whether the instruction actually reads rs1.
    pub rs1_used: bool,
    /// Whether the instruction actually reads rs2.
    pub rs2_used: bool,
}
