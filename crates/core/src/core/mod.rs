//! The pipeline core and its clock driver.
//!
//! [`Core`] owns the architectural and pipeline state: the register file, the
//! three inter-stage latches, the bypass registers, and the branch-target
//! register. [`Core::tick`] advances everything by one cycle by drawing a
//! snapshot of each latch and calling the stage functions in a fixed order:
//!
//! 1. write-back, so the committing value is on the write-back bypass before
//!    decode looks for it;
//! 2. execute, which must read the bypass registers before this cycle's
//!    memory result overwrites them;
//! 3. memory;
//! 4. decode.
//!
//! The register write staged by write-back is applied after decode, at the
//! end of the tick, so decode observes the pre-edge register file and the
//! decode-time repair carries the committing value instead.

/// The pipeline proper.
pub mod pipeline;
/// The general-purpose register file.
pub mod regfile;
/// Execution units.
pub mod units;

use crate::core::pipeline::hazards::HazardSources;
use crate::core::pipeline::latches::{BranchTarget, BypassRegs, ExMem, IdEx, MemWb};
use crate::core::pipeline::signals::{MemOp, SysOp};
use crate::core::pipeline::stages::{decode, execute, memory, writeback};
use crate::core::pipeline::table;
use crate::core::regfile::RegFile;
use crate::soc::DataPort;

/// The instruction the fetch unit hands to decode this cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FetchBundle {
    /// Raw instruction word.
    pub inst: u32,
    /// Address the word was fetched from.
    pub pc: u32,
    /// The next PC the fetch unit predicted after this instruction.
    pub pred_next_pc: u32,
}

/// What one tick tells the surrounding control.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickResult {
    /// Decode refused the incoming instruction; re-present it and freeze the
    /// PC.
    pub stall: bool,
    /// Execute corrected a control-flow prediction; redirect fetch here.
    pub redirect: Option<u32>,
    /// A system instruction reached execute this cycle.
    pub sys: SysOp,
}

/// The in-order RV32I pipeline core.
#[derive(Debug, Clone, Default)]
pub struct Core {
    /// Architectural register file.
    pub regs: RegFile,
    /// Decode → execute latch.
    pub id_ex: IdEx,
    /// Execute → memory latch.
    pub ex_mem: ExMem,
    /// Memory → write-back latch.
    pub mem_wb: MemWb,
    /// The three bypass registers.
    pub bypass: BypassRegs,
    /// Branch-target register written by execute.
    pub branch_target: BranchTarget,
    /// Register write staged by write-back, applied at the end of the tick.
    pub(crate) pending_wb: Option<(usize, u32)>,
}

impl Core {
    /// Creates a core in its reset state: registers cleared, every latch a
    /// bubble.
    #[must_use]
    pub fn new() -> Self {
        debug_assert!(table::validate().is_ok(), "decode table rows overlap");
        Self::default()
    }

    /// Advances the pipeline by one cycle.
    ///
    /// `fetch` is the instruction the external fetch unit presents this
    /// cycle; `bus` is the memory collaborator the memory stage drives.
    pub fn tick(&mut self, fetch: &FetchBundle, bus: &mut dyn DataPort) -> TickResult {
        // Latch snapshots: each stage consumes what the previous cycle left
        // behind, and `Default` is a bubble.
        let wb_in = std::mem::take(&mut self.mem_wb);
        let mem_in = std::mem::take(&mut self.ex_mem);
        let ex_in = std::mem::take(&mut self.id_ex);

        let hazard_src = HazardSources {
            ex_rd: ex_in.ctrl.mem.rd,
            ex_is_load: ex_in.ctrl.mem.op == MemOp::Load,
            mem_rd: mem_in.mem.rd,
            wb_rd: 0,
        };

        let wb_rd = writeback::wb_stage(self, wb_in);
        let hazard_src = HazardSources {
            wb_rd,
            ..hazard_src
        };

        let sys = execute::execute_stage(self, ex_in);
        memory::mem_stage(self, mem_in, bus);
        let stall = decode::decode_stage(self, fetch, &hazard_src);

        // Clock edge: the staged register write lands after decode's read.
        if let Some((rd, value)) = self.pending_wb.take() {
            self.regs.write(rd, value);
        }

        TickResult {
            stall,
            redirect: self.branch_target.redirect(),
            sys,
        }
    }

    /// Replaces the instruction sitting in the decode/execute latch with a
    /// bubble.
    ///
    /// The core never flushes itself; the fetch side calls this on a
    /// redirect to kill the one wrong-path instruction that entered decode
    /// during the resolution cycle.
    pub fn squash_decode(&mut self) {
        self.id_ex = IdEx::bubble();
    }
}
