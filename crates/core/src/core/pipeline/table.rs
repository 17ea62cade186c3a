//! Static RV32I decode table.
//!
//! Decoding is a scan of this table: an instruction word is matched against
//! each row's key of (opcode, optional funct3, optional bit 30), and the
//! unique matching row supplies the typed control fields for the rest of the
//! pipeline. Rows are mutually exclusive by construction; [`validate`] checks
//! that no two rows can claim the same word.
//!
//! ECALL and EBREAK share one row. They are identical in every field this
//! table keys on, so the decoder recovers which one it has from the immediate
//! bits afterwards.

use crate::common::CoreError;
use crate::core::pipeline::signals::{AluOp, BranchKind, MemOp, MemWidth, Op1Sel, Op2Sel};
use crate::isa::imm::ImmFormat;
use crate::isa::instruction::InstructionBits;
use crate::isa::rv32i::{funct3, opcodes};

/// One decode-table row: a match key plus the control fields it emits.
#[derive(Debug, Clone, Copy)]
pub struct DecodeEntry {
    /// Assembly mnemonic, for diagnostics.
    pub mnemonic: &'static str,
    /// Major opcode the row matches.
    pub opcode: u32,
    /// funct3 key; `None` matches any funct3.
    pub funct3: Option<u32>,
    /// Bit-30 key; `None` matches either value.
    pub bit30: Option<u32>,
    /// Immediate format to select.
    pub imm: ImmFormat,
    /// ALU operation.
    pub alu: AluOp,
    /// First ALU operand source.
    pub op1: Op1Sel,
    /// Second ALU operand source.
    pub op2: Op2Sel,
    /// Branch classification.
    pub branch: BranchKind,
    /// Whether the instruction reads rs1.
    pub rs1_used: bool,
    /// Whether the instruction reads rs2.
    pub rs2_used: bool,
    /// Memory access direction.
    pub mem_op: MemOp,
    /// Memory access width.
    pub width: MemWidth,
    /// Zero-extend load data rather than sign-extend.
    pub unsigned: bool,
    /// Whether the instruction writes a register.
    pub reg_write: bool,
}

impl DecodeEntry {
    /// Whether this row matches the given instruction word.
    #[must_use]
    pub fn matches(&self, inst: u32) -> bool {
        self.opcode == inst.opcode()
            && self.funct3.is_none_or(|f| f == inst.funct3())
            && self.bit30.is_none_or(|b| b == inst.bit30())
    }

    /// Whether some instruction word could match both rows.
    fn overlaps(&self, other: &Self) -> bool {
        fn compatible(a: Option<u32>, b: Option<u32>) -> bool {
            match (a, b) {
                (Some(x), Some(y)) => x == y,
                _ => true,
            }
        }
        self.opcode == other.opcode
            && compatible(self.funct3, other.funct3)
            && compatible(self.bit30, other.bit30)
    }
}

/// Register-register ALU row (OP opcode).
const fn alu_reg(mnemonic: &'static str, f3: u32, bit30: u32, alu: AluOp) -> DecodeEntry {
    DecodeEntry {
        mnemonic,
        opcode: opcodes::OP_REG,
        funct3: Some(f3),
        bit30: Some(bit30),
        imm: ImmFormat::R,
        alu,
        op1: Op1Sel::Reg1,
        op2: Op2Sel::Reg2,
        branch: BranchKind::None,
        rs1_used: true,
        rs2_used: true,
        mem_op: MemOp::None,
        width: MemWidth::Word,
        unsigned: false,
        reg_write: true,
    }
}

/// Register-immediate ALU row (OP-IMM opcode). Shifts key on bit 30 as well.
const fn alu_imm(mnemonic: &'static str, f3: u32, bit30: Option<u32>, alu: AluOp) -> DecodeEntry {
    DecodeEntry {
        mnemonic,
        opcode: opcodes::OP_IMM,
        funct3: Some(f3),
        bit30,
        imm: ImmFormat::I,
        alu,
        op1: Op1Sel::Reg1,
        op2: Op2Sel::Imm,
        branch: BranchKind::None,
        rs1_used: true,
        rs2_used: false,
        mem_op: MemOp::None,
        width: MemWidth::Word,
        unsigned: false,
        reg_write: true,
    }
}

/// Load row: address is rs1 + I-immediate through the ALU adder.
const fn load(mnemonic: &'static str, f3: u32, width: MemWidth, unsigned: bool) -> DecodeEntry {
    DecodeEntry {
        mnemonic,
        opcode: opcodes::OP_LOAD,
        funct3: Some(f3),
        bit30: None,
        imm: ImmFormat::I,
        alu: AluOp::Add,
        op1: Op1Sel::Reg1,
        op2: Op2Sel::Imm,
        branch: BranchKind::None,
        rs1_used: true,
        rs2_used: false,
        mem_op: MemOp::Load,
        width,
        unsigned,
        reg_write: true,
    }
}

/// Store row: address is rs1 + S-immediate; rs2 supplies the store data.
const fn store(mnemonic: &'static str, f3: u32, width: MemWidth) -> DecodeEntry {
    DecodeEntry {
        mnemonic,
        opcode: opcodes::OP_STORE,
        funct3: Some(f3),
        bit30: None,
        imm: ImmFormat::S,
        alu: AluOp::Add,
        op1: Op1Sel::Reg1,
        op2: Op2Sel::Imm,
        branch: BranchKind::None,
        rs1_used: true,
        rs2_used: true,
        mem_op: MemOp::Store,
        width,
        unsigned: false,
        reg_write: false,
    }
}

/// Conditional branch row. The comparison itself runs on the forwarded
/// register values in execute; the ALU op only mirrors the comparison class.
const fn branch(mnemonic: &'static str, f3: u32, alu: AluOp, kind: BranchKind) -> DecodeEntry {
    DecodeEntry {
        mnemonic,
        opcode: opcodes::OP_BRANCH,
        funct3: Some(f3),
        bit30: None,
        imm: ImmFormat::B,
        alu,
        op1: Op1Sel::Reg1,
        op2: Op2Sel::Reg2,
        branch: kind,
        rs1_used: true,
        rs2_used: true,
        mem_op: MemOp::None,
        width: MemWidth::Word,
        unsigned: false,
        reg_write: false,
    }
}

/// The RV32I decode truth table.
pub static RV32I_TABLE: &[DecodeEntry] = &[
    alu_reg("add", funct3::ADD_SUB, 0, AluOp::Add),
    alu_reg("sub", funct3::ADD_SUB, 1, AluOp::Sub),
    alu_reg("sll", funct3::SLL, 0, AluOp::Sll),
    alu_reg("slt", funct3::SLT, 0, AluOp::Slt),
    alu_reg("sltu", funct3::SLTU, 0, AluOp::Sltu),
    alu_reg("xor", funct3::XOR, 0, AluOp::Xor),
    alu_reg("srl", funct3::SRL_SRA, 0, AluOp::Srl),
    alu_reg("sra", funct3::SRL_SRA, 1, AluOp::Sra),
    alu_reg("or", funct3::OR, 0, AluOp::Or),
    alu_reg("and", funct3::AND, 0, AluOp::And),
    alu_imm("addi", funct3::ADD_SUB, None, AluOp::Add),
    alu_imm("slti", funct3::SLT, None, AluOp::Slt),
    alu_imm("sltiu", funct3::SLTU, None, AluOp::Sltu),
    alu_imm("xori", funct3::XOR, None, AluOp::Xor),
    alu_imm("ori", funct3::OR, None, AluOp::Or),
    alu_imm("andi", funct3::AND, None, AluOp::And),
    alu_imm("slli", funct3::SLL, Some(0), AluOp::Sll),
    alu_imm("srli", funct3::SRL_SRA, Some(0), AluOp::Srl),
    alu_imm("srai", funct3::SRL_SRA, Some(1), AluOp::Sra),
    load("lb", funct3::LB, MemWidth::Byte, false),
    load("lh", funct3::LH, MemWidth::Half, false),
    load("lw", funct3::LW, MemWidth::Word, false),
    load("lbu", funct3::LBU, MemWidth::Byte, true),
    load("lhu", funct3::LHU, MemWidth::Half, true),
    store("sb", funct3::SB, MemWidth::Byte),
    store("sh", funct3::SH, MemWidth::Half),
    store("sw", funct3::SW, MemWidth::Word),
    branch("beq", funct3::BEQ, AluOp::Sub, BranchKind::Eq),
    branch("bne", funct3::BNE, AluOp::Sub, BranchKind::Ne),
    branch("blt", funct3::BLT, AluOp::Slt, BranchKind::Lt),
    branch("bge", funct3::BGE, AluOp::Slt, BranchKind::Ge),
    branch("bltu", funct3::BLTU, AluOp::Sltu, BranchKind::Ltu),
    branch("bgeu", funct3::BGEU, AluOp::Sltu, BranchKind::Geu),
    DecodeEntry {
        mnemonic: "jal",
        opcode: opcodes::OP_JAL,
        funct3: None,
        bit30: None,
        imm: ImmFormat::J,
        alu: AluOp::Add,
        op1: Op1Sel::Pc,
        op2: Op2Sel::Const4,
        branch: BranchKind::Jal,
        rs1_used: false,
        rs2_used: false,
        mem_op: MemOp::None,
        width: MemWidth::Word,
        unsigned: false,
        reg_write: true,
    },
    DecodeEntry {
        mnemonic: "jalr",
        opcode: opcodes::OP_JALR,
        funct3: Some(0),
        bit30: None,
        imm: ImmFormat::I,
        alu: AluOp::Add,
        op1: Op1Sel::Pc,
        op2: Op2Sel::Const4,
        branch: BranchKind::Jalr,
        rs1_used: true,
        rs2_used: false,
        mem_op: MemOp::None,
        width: MemWidth::Word,
        unsigned: false,
        reg_write: true,
    },
    DecodeEntry {
        mnemonic: "lui",
        opcode: opcodes::OP_LUI,
        funct3: None,
        bit30: None,
        imm: ImmFormat::U,
        alu: AluOp::Add,
        op1: Op1Sel::Zero,
        op2: Op2Sel::Imm,
        branch: BranchKind::None,
        rs1_used: false,
        rs2_used: false,
        mem_op: MemOp::None,
        width: MemWidth::Word,
        unsigned: false,
        reg_write: true,
    },
    DecodeEntry {
        mnemonic: "auipc",
        opcode: opcodes::OP_AUIPC,
        funct3: None,
        bit30: None,
        imm: ImmFormat::U,
        alu: AluOp::Add,
        op1: Op1Sel::Pc,
        op2: Op2Sel::Imm,
        branch: BranchKind::None,
        rs1_used: false,
        rs2_used: false,
        mem_op: MemOp::None,
        width: MemWidth::Word,
        unsigned: false,
        reg_write: true,
    },
    DecodeEntry {
        mnemonic: "ecall/ebreak",
        opcode: opcodes::OP_SYSTEM,
        funct3: Some(funct3::PRIV),
        bit30: None,
        imm: ImmFormat::I,
        alu: AluOp::Nop,
        op1: Op1Sel::Reg1,
        op2: Op2Sel::Imm,
        branch: BranchKind::None,
        rs1_used: false,
        rs2_used: false,
        mem_op: MemOp::None,
        width: MemWidth::Word,
        unsigned: false,
        reg_write: false,
    },
];

/// Finds the unique row matching an instruction word.
///
/// Returns `None` for words no row claims; the decoder turns those into an
/// inert packet rather than raising a fault.
#[must_use]
pub fn lookup(inst: u32) -> Option<&'static DecodeEntry> {
    RV32I_TABLE.iter().find(|entry| entry.matches(inst))
}

/// Checks that no two table rows can match the same instruction word.
///
/// Meant to run once before the table is used; a failure here is a table
/// authoring bug, not a runtime condition.
pub fn validate() -> Result<(), CoreError> {
    for (idx, a) in RV32I_TABLE.iter().enumerate() {
        for b in &RV32I_TABLE[idx + 1..] {
            if a.overlaps(b) {
                return Err(CoreError::DecodeTableOverlap {
                    first: a.mnemonic,
                    second: b.mnemonic,
                    opcode: a.opcode,
                    funct3: a.funct3,
                    bit30: a.bit30,
                });
            }
        }
    }
    Ok(())
}
