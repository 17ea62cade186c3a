//! Decode stage.
//!
//! Decode is split in two halves, mirroring the hardware:
//! 1. **Predecode:** field extraction, table lookup, and immediate selection.
//!    This half is pure and knows nothing about pipeline state.
//! 2. **Assembly:** the hazard unit's verdict is folded in. On a stall the
//!    whole packet is replaced with a bubble and the PC-freeze signal goes
//!    back upstream; otherwise the forwarding selections are attached and,
//!    when the producer is committing this very cycle, the stale register
//!    file read is repaired with the write-back bypass value before dispatch.

use tracing::trace;

use crate::core::pipeline::hazards::{self, HazardSources};
use crate::core::pipeline::latches::IdEx;
use crate::core::pipeline::signals::{DecodedCtrl, ExCtrl, FwdSel, MemCtrl, SysOp};
use crate::core::pipeline::table;
use crate::core::{Core, FetchBundle};
use crate::isa::imm::Immediates;
use crate::isa::instruction::InstructionBits;
use crate::isa::rv32i::opcodes;

/// Output of the pure half of decode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Predecoded {
    /// Typed control from the matching table row.
    pub ctrl: DecodedCtrl,
    /// rs1 field of the word.
    pub rs1: usize,
    /// rs2 field of the word.
    pub rs2: usize,
    /// The selected immediate.
    pub imm: u32,
}

impl Predecoded {
    /// The packet produced for words no table row claims: no register reads,
    /// no writes, no memory traffic. It ages through the pipeline inertly.
    #[must_use]
    pub fn inert() -> Self {
        Self::default()
    }
}

/// Looks up an instruction word and extracts its operand fields.
#[must_use]
pub fn predecode(inst: u32) -> Predecoded {
    let Some(entry) = table::lookup(inst) else {
        trace!(inst = format_args!("{inst:#010x}"), "unmatched encoding, packet is inert");
        return Predecoded::inert();
    };

    // The write-back channel is rd = 0 when the row writes no register, so
    // downstream stages need no separate enable bit.
    let rd = if entry.reg_write { inst.rd() } else { 0 };

    Predecoded {
        ctrl: DecodedCtrl {
            alu: entry.alu,
            op1: entry.op1,
            op2: entry.op2,
            branch: entry.branch,
            sys: recover_sys_op(entry.opcode, inst),
            mem: MemCtrl {
                op: entry.mem_op,
                width: entry.width,
                unsigned: entry.unsigned,
                rd,
            },
            imm_fmt: entry.imm,
            rs1_used: entry.rs1_used,
            rs2_used: entry.rs2_used,
        },
        rs1: inst.rs1(),
        rs2: inst.rs2(),
        imm: Immediates::synthesize(inst).select(entry.imm),
    }
}

/// ECALL and EBREAK share a table row; the immediate field tells them apart.
fn recover_sys_op(opcode: u32, inst: u32) -> SysOp {
    if opcode != opcodes::OP_SYSTEM {
        return SysOp::None;
    }
    match inst >> 20 {
        0 => SysOp::Ecall,
        1 => SysOp::Ebreak,
        _ => SysOp::None,
    }
}

/// Runs the full decode stage for one cycle.
///
/// Writes the decode/execute latch and returns the stall signal the fetch
/// unit uses to freeze the PC.
pub fn decode_stage(core: &mut Core, fetch: &FetchBundle, src: &HazardSources) -> bool {
    let pre = predecode(fetch.inst);
    let decision = hazards::resolve(pre.rs1, pre.rs2, pre.ctrl.rs1_used, pre.ctrl.rs2_used, src);

    if decision.stall {
        core.id_ex = IdEx::bubble();
        return true;
    }

    let mut rs1_data = core.regs.read(pre.rs1);
    let mut rs2_data = core.regs.read(pre.rs2);

    // The register file read raced an in-flight commit; the committing value
    // exists only on the write-back bypass this cycle.
    if decision.rs1 == FwdSel::Wb {
        rs1_data = core.bypass.wb;
    }
    if decision.rs2 == FwdSel::Wb {
        rs2_data = core.bypass.wb;
    }

    core.id_ex = IdEx {
        ctrl: ExCtrl {
            alu: pre.ctrl.alu,
            op1: pre.ctrl.op1,
            op2: pre.ctrl.op2,
            rs1_fwd: decision.rs1,
            rs2_fwd: decision.rs2,
            branch: pre.ctrl.branch,
            sys: pre.ctrl.sys,
            pred_next_pc: fetch.pred_next_pc,
            mem: pre.ctrl.mem,
        },
        pc: fetch.pc,
        rs1_data,
        rs2_data,
        imm: pre.imm,
    };

    false
}
