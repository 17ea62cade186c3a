//! Execute stage.
//!
//! Consumes one decode/execute packet per cycle and performs:
//! 1. **Forward mux:** applies the hazard unit's per-operand selection to the
//!    register-sourced values.
//! 2. **ALU:** dispatches the operation over the muxed operands.
//! 3. **Branch resolution:** compares the actual next PC against the fetch
//!    unit's prediction and writes the branch-target register, zero when the
//!    prediction held, the corrected target otherwise.
//! 4. **Bypass maintenance:** unconditionally publishes the ALU result on the
//!    execute bypass register, bubbles included.

use tracing::trace;

use crate::common::constants::{INST_BYTES, JALR_ALIGN_MASK};
use crate::core::Core;
use crate::core::pipeline::latches::{ExMem, IdEx};
use crate::core::pipeline::signals::{BranchKind, FwdSel, Op1Sel, Op2Sel, SysOp};
use crate::core::units::Alu;

/// Runs the execute stage for one cycle.
///
/// Returns the system-instruction identity of the executed packet so the
/// surrounding control can intercept ECALL/EBREAK; the core itself treats
/// them as inert.
pub fn execute_stage(core: &mut Core, packet: IdEx) -> SysOp {
    let ctrl = packet.ctrl;

    let rs1_val = forward(ctrl.rs1_fwd, packet.rs1_data, core);
    let rs2_val = forward(ctrl.rs2_fwd, packet.rs2_data, core);

    let op_a = match ctrl.op1 {
        Op1Sel::Reg1 => rs1_val,
        Op1Sel::Pc => packet.pc,
        Op1Sel::Zero => 0,
    };
    let op_b = match ctrl.op2 {
        Op2Sel::Reg2 => rs2_val,
        Op2Sel::Imm => packet.imm,
        Op2Sel::Const4 => INST_BYTES,
    };

    let alu_out = Alu::execute(ctrl.alu, op_a, op_b);

    resolve_branch(core, &packet, rs1_val, rs2_val);

    // Bubbles publish too; the registers are refreshed every cycle and
    // selection alone decides whether anyone reads them.
    core.bypass.ex_mem = alu_out;

    core.ex_mem = ExMem {
        alu: alu_out,
        store_data: rs2_val,
        mem: ctrl.mem,
    };

    ctrl.sys
}

/// Applies one operand's forwarding selection.
///
/// `Wb` means the operand was already repaired during decode, so the latched
/// value is the right one.
fn forward(sel: FwdSel, latched: u32, core: &Core) -> u32 {
    match sel {
        FwdSel::Reg | FwdSel::Wb => latched,
        FwdSel::ExMem => core.bypass.ex_mem,
        FwdSel::MemWb => core.bypass.mem_wb,
    }
}

/// Resolves control flow and writes the branch-target register.
fn resolve_branch(core: &mut Core, packet: &IdEx, rs1_val: u32, rs2_val: u32) {
    let kind = packet.ctrl.branch;
    if kind == BranchKind::None {
        core.branch_target.clear();
        return;
    }

    let taken = match kind {
        BranchKind::Eq => rs1_val == rs2_val,
        BranchKind::Ne => rs1_val != rs2_val,
        BranchKind::Lt => (rs1_val as i32) < (rs2_val as i32),
        BranchKind::Ge => (rs1_val as i32) >= (rs2_val as i32),
        BranchKind::Ltu => rs1_val < rs2_val,
        BranchKind::Geu => rs1_val >= rs2_val,
        BranchKind::Jal | BranchKind::Jalr => true,
        BranchKind::None => false,
    };

    let target = if kind == BranchKind::Jalr {
        rs1_val.wrapping_add(packet.imm) & JALR_ALIGN_MASK
    } else {
        packet.pc.wrapping_add(packet.imm)
    };
    let fallthrough = packet.pc.wrapping_add(INST_BYTES);
    let actual = if taken { target } else { fallthrough };

    if actual == packet.ctrl.pred_next_pc {
        core.branch_target.clear();
    } else {
        trace!(
            pc = format_args!("{:#010x}", packet.pc),
            predicted = format_args!("{:#010x}", packet.ctrl.pred_next_pc),
            actual = format_args!("{actual:#010x}"),
            "branch misprediction"
        );
        core.branch_target.set(actual);
    }
}
