//! Hazard detection and forwarding selection.
//!
//! Runs combinationally during decode, comparing the incoming instruction's
//! source registers against the destination registers of the three in-flight
//! packets downstream. For each operand it picks a forwarding source with
//! nearest-stage-wins priority (execute over memory over write-back), and it
//! raises the stall signal for the one case forwarding cannot cover: the
//! nearest producer is a load whose data does not exist yet.
//!
//! x0 never participates: a producer targeting x0 forwards to nobody, and an
//! operand reading x0 never forwards. Operands the instruction does not
//! actually read (per the decode table's used flags) are skipped entirely, so
//! an I-type's rs2 bit pattern cannot fabricate a dependence.

use tracing::trace;

use crate::core::pipeline::signals::FwdSel;

/// Destination bookkeeping for the three downstream packets, sampled at the
/// start of the cycle.
#[derive(Debug, Clone, Copy, Default)]
pub struct HazardSources {
    /// Destination of the packet entering execute this cycle.
    pub ex_rd: usize,
    /// Whether that packet is a load.
    pub ex_is_load: bool,
    /// Destination of the packet entering memory this cycle.
    pub mem_rd: usize,
    /// Destination of the packet committing in write-back this cycle.
    pub wb_rd: usize,
}

/// The hazard unit's verdict for one instruction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HazardDecision {
    /// Forwarding source for rs1.
    pub rs1: FwdSel,
    /// Forwarding source for rs2.
    pub rs2: FwdSel,
    /// Instruction must not issue this cycle; inject a bubble instead.
    pub stall: bool,
}

/// Resolves forwarding and the load-use interlock for one instruction.
#[must_use]
pub fn resolve(
    rs1: usize,
    rs2: usize,
    rs1_used: bool,
    rs2_used: bool,
    src: &HazardSources,
) -> HazardDecision {
    let mut stall = false;

    let mut pick = |idx: usize, used: bool| -> FwdSel {
        if !used || idx == 0 {
            return FwdSel::Reg;
        }
        if idx == src.ex_rd {
            // Data is still being produced; forwarding cannot close a
            // load-use gap of one cycle.
            if src.ex_is_load {
                stall = true;
            }
            return FwdSel::ExMem;
        }
        if idx == src.mem_rd {
            return FwdSel::MemWb;
        }
        if idx == src.wb_rd {
            return FwdSel::Wb;
        }
        FwdSel::Reg
    };

    let rs1_sel = pick(rs1, rs1_used);
    let rs2_sel = pick(rs2, rs2_used);
    let decision = HazardDecision {
        rs1: rs1_sel,
        rs2: rs2_sel,
        stall,
    };

    if decision.stall {
        trace!(rs1, rs2, ex_rd = src.ex_rd, "load-use interlock");
    }

    decision
}
