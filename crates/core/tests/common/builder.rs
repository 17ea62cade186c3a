//! Instruction encoders.
//!
//! Raw format encoders plus mnemonic helpers, so tests read like assembly.
//! Register arguments follow assembly operand order; store helpers take
//! `(rs2, rs1, imm)` to match `sw rs2, imm(rs1)`.

use rvpipe_core::isa::rv32i::{funct3, opcodes};

/// Encode an R-type instruction.
pub fn r_type(opcode: u32, rd: u32, f3: u32, rs1: u32, rs2: u32, funct7: u32) -> u32 {
    (funct7 & 0x7F) << 25
        | (rs2 & 0x1F) << 20
        | (rs1 & 0x1F) << 15
        | (f3 & 0x7) << 12
        | (rd & 0x1F) << 7
        | (opcode & 0x7F)
}

/// Encode an I-type instruction.
pub fn i_type(opcode: u32, rd: u32, f3: u32, rs1: u32, imm: i32) -> u32 {
    ((imm as u32) & 0xFFF) << 20
        | (rs1 & 0x1F) << 15
        | (f3 & 0x7) << 12
        | (rd & 0x1F) << 7
        | (opcode & 0x7F)
}

/// Encode an S-type instruction.
pub fn s_type(opcode: u32, f3: u32, rs1: u32, rs2: u32, imm: i32) -> u32 {
    let imm = imm as u32;
    ((imm >> 5) & 0x7F) << 25
        | (rs2 & 0x1F) << 20
        | (rs1 & 0x1F) << 15
        | (f3 & 0x7) << 12
        | (imm & 0x1F) << 7
        | (opcode & 0x7F)
}

/// Encode a B-type instruction. The offset must be even.
pub fn b_type(opcode: u32, f3: u32, rs1: u32, rs2: u32, imm: i32) -> u32 {
    let imm = imm as u32;
    ((imm >> 12) & 0x1) << 31
        | ((imm >> 5) & 0x3F) << 25
        | (rs2 & 0x1F) << 20
        | (rs1 & 0x1F) << 15
        | (f3 & 0x7) << 12
        | ((imm >> 1) & 0xF) << 8
        | ((imm >> 11) & 0x1) << 7
        | (opcode & 0x7F)
}

/// Encode a U-type instruction from the upper-20-bit value.
pub fn u_type(opcode: u32, rd: u32, imm20: u32) -> u32 {
    (imm20 & 0xF_FFFF) << 12 | (rd & 0x1F) << 7 | (opcode & 0x7F)
}

/// Encode a J-type instruction. The offset must be even.
pub fn j_type(opcode: u32, rd: u32, imm: i32) -> u32 {
    let imm = imm as u32;
    ((imm >> 20) & 0x1) << 31
        | ((imm >> 1) & 0x3FF) << 21
        | ((imm >> 11) & 0x1) << 20
        | ((imm >> 12) & 0xFF) << 12
        | (rd & 0x1F) << 7
        | (opcode & 0x7F)
}

// ── register-register ──

pub fn add(rd: u32, rs1: u32, rs2: u32) -> u32 {
    r_type(opcodes::OP_REG, rd, funct3::ADD_SUB, rs1, rs2, 0x00)
}

pub fn sub(rd: u32, rs1: u32, rs2: u32) -> u32 {
    r_type(opcodes::OP_REG, rd, funct3::ADD_SUB, rs1, rs2, 0x20)
}

pub fn sll(rd: u32, rs1: u32, rs2: u32) -> u32 {
    r_type(opcodes::OP_REG, rd, funct3::SLL, rs1, rs2, 0x00)
}

pub fn slt(rd: u32, rs1: u32, rs2: u32) -> u32 {
    r_type(opcodes::OP_REG, rd, funct3::SLT, rs1, rs2, 0x00)
}

pub fn sltu(rd: u32, rs1: u32, rs2: u32) -> u32 {
    r_type(opcodes::OP_REG, rd, funct3::SLTU, rs1, rs2, 0x00)
}

pub fn xor(rd: u32, rs1: u32, rs2: u32) -> u32 {
    r_type(opcodes::OP_REG, rd, funct3::XOR, rs1, rs2, 0x00)
}

pub fn srl(rd: u32, rs1: u32, rs2: u32) -> u32 {
    r_type(opcodes::OP_REG, rd, funct3::SRL_SRA, rs1, rs2, 0x00)
}

pub fn sra(rd: u32, rs1: u32, rs2: u32) -> u32 {
    r_type(opcodes::OP_REG, rd, funct3::SRL_SRA, rs1, rs2, 0x20)
}

pub fn or(rd: u32, rs1: u32, rs2: u32) -> u32 {
    r_type(opcodes::OP_REG, rd, funct3::OR, rs1, rs2, 0x00)
}

pub fn and(rd: u32, rs1: u32, rs2: u32) -> u32 {
    r_type(opcodes::OP_REG, rd, funct3::AND, rs1, rs2, 0x00)
}

// ── register-immediate ──

pub fn addi(rd: u32, rs1: u32, imm: i32) -> u32 {
    i_type(opcodes::OP_IMM, rd, funct3::ADD_SUB, rs1, imm)
}

pub fn slti(rd: u32, rs1: u32, imm: i32) -> u32 {
    i_type(opcodes::OP_IMM, rd, funct3::SLT, rs1, imm)
}

pub fn andi(rd: u32, rs1: u32, imm: i32) -> u32 {
    i_type(opcodes::OP_IMM, rd, funct3::AND, rs1, imm)
}

pub fn ori(rd: u32, rs1: u32, imm: i32) -> u32 {
    i_type(opcodes::OP_IMM, rd, funct3::OR, rs1, imm)
}

pub fn xori(rd: u32, rs1: u32, imm: i32) -> u32 {
    i_type(opcodes::OP_IMM, rd, funct3::XOR, rs1, imm)
}

pub fn slli(rd: u32, rs1: u32, shamt: u32) -> u32 {
    i_type(opcodes::OP_IMM, rd, funct3::SLL, rs1, (shamt & 0x1F) as i32)
}

pub fn srli(rd: u32, rs1: u32, shamt: u32) -> u32 {
    i_type(opcodes::OP_IMM, rd, funct3::SRL_SRA, rs1, (shamt & 0x1F) as i32)
}

pub fn srai(rd: u32, rs1: u32, shamt: u32) -> u32 {
    i_type(
        opcodes::OP_IMM,
        rd,
        funct3::SRL_SRA,
        rs1,
        ((shamt & 0x1F) | 0x400) as i32,
    )
}

// ── loads and stores ──

pub fn lb(rd: u32, rs1: u32, imm: i32) -> u32 {
    i_type(opcodes::OP_LOAD, rd, funct3::LB, rs1, imm)
}

pub fn lh(rd: u32, rs1: u32, imm: i32) -> u32 {
    i_type(opcodes::OP_LOAD, rd, funct3::LH, rs1, imm)
}

pub fn lw(rd: u32, rs1: u32, imm: i32) -> u32 {
    i_type(opcodes::OP_LOAD, rd, funct3::LW, rs1, imm)
}

pub fn lbu(rd: u32, rs1: u32, imm: i32) -> u32 {
    i_type(opcodes::OP_LOAD, rd, funct3::LBU, rs1, imm)
}

pub fn lhu(rd: u32, rs1: u32, imm: i32) -> u32 {
    i_type(opcodes::OP_LOAD, rd, funct3::LHU, rs1, imm)
}

pub fn sb(rs2: u32, rs1: u32, imm: i32) -> u32 {
    s_type(opcodes::OP_STORE, funct3::SB, rs1, rs2, imm)
}

pub fn sh(rs2: u32, rs1: u32, imm: i32) -> u32 {
    s_type(opcodes::OP_STORE, funct3::SH, rs1, rs2, imm)
}

pub fn sw(rs2: u32, rs1: u32, imm: i32) -> u32 {
    s_type(opcodes::OP_STORE, funct3::SW, rs1, rs2, imm)
}

// ── control flow ──

pub fn beq(rs1: u32, rs2: u32, imm: i32) -> u32 {
    b_type(opcodes::OP_BRANCH, funct3::BEQ, rs1, rs2, imm)
}

pub fn bne(rs1: u32, rs2: u32, imm: i32) -> u32 {
    b_type(opcodes::OP_BRANCH, funct3::BNE, rs1, rs2, imm)
}

pub fn blt(rs1: u32, rs2: u32, imm: i32) -> u32 {
    b_type(opcodes::OP_BRANCH, funct3::BLT, rs1, rs2, imm)
}

pub fn bge(rs1: u32, rs2: u32, imm: i32) -> u32 {
    b_type(opcodes::OP_BRANCH, funct3::BGE, rs1, rs2, imm)
}

pub fn bltu(rs1: u32, rs2: u32, imm: i32) -> u32 {
    b_type(opcodes::OP_BRANCH, funct3::BLTU, rs1, rs2, imm)
}

pub fn bgeu(rs1: u32, rs2: u32, imm: i32) -> u32 {
    b_type(opcodes::OP_BRANCH, funct3::BGEU, rs1, rs2, imm)
}

pub fn jal(rd: u32, imm: i32) -> u32 {
    j_type(opcodes::OP_JAL, rd, imm)
}

pub fn jalr(rd: u32, rs1: u32, imm: i32) -> u32 {
    i_type(opcodes::OP_JALR, rd, 0, rs1, imm)
}

// ── upper immediates and system ──

pub fn lui(rd: u32, imm20: u32) -> u32 {
    u_type(opcodes::OP_LUI, rd, imm20)
}

pub fn auipc(rd: u32, imm20: u32) -> u32 {
    u_type(opcodes::OP_AUIPC, rd, imm20)
}

pub fn ecall() -> u32 {
    0x0000_0073
}

pub fn ebreak() -> u32 {
    0x0010_0073
}

pub fn nop() -> u32 {
    addi(0, 0, 0)
}
