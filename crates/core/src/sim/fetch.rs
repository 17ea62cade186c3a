//! Fetch unit.
//!
//! Predicts straight-line execution: every instruction is delivered with a
//! predicted next PC of `pc + 4`. The PC freezes while decode stalls and
//! snaps to the corrected target when execute reports a misprediction.

use crate::common::constants::INST_BYTES;
use crate::core::{FetchBundle, TickResult};
use crate::soc::SparseRam;

/// Program counter and next-PC policy for the reference harness.
#[derive(Debug, Clone, Copy)]
pub struct FetchUnit {
    /// Address of the instruction presented this cycle.
    pub pc: u32,
}

impl FetchUnit {
    /// Creates a fetch unit starting at `reset_pc`.
    #[must_use]
    pub fn new(reset_pc: u32) -> Self {
        Self { pc: reset_pc }
    }

    /// Fetches the current instruction word and attaches the prediction.
    #[must_use]
    pub fn bundle(&self, imem: &SparseRam) -> FetchBundle {
        FetchBundle {
            inst: imem.read_u32(self.pc),
            pc: self.pc,
            pred_next_pc: self.pc.wrapping_add(INST_BYTES),
        }
    }

    /// Advances the PC based on this cycle's outcome.
    ///
    /// Returns `true` when a redirect was taken, in which case the caller
    /// must also squash the wrong-path instruction that entered the core
    /// during the resolution cycle.
    pub fn advance(&mut self, result: &TickResult) -> bool {
        if let Some(target) = result.redirect {
            self.pc = target;
            return true;
        }
        if !result.stall {
            self.pc = self.pc.wrapping_add(INST_BYTES);
        }
        false
    }
}
