//! Write-back stage.
//!
//! Commits the packet's value to the register file, guarded so x0 stays
//! zero, and publishes the committing value on the write-back bypass
//! register. The destination index is reported upstream either way; the
//! hazard unit treats rd = 0 as "no producer" on its own.
//!
//! The register write is staged rather than applied immediately: decode
//! reads the register file later in the same tick and must observe the
//! pre-commit contents, that race being exactly what the decode-time repair
//! exists for. The clock driver applies the staged write at the end of the
//! tick.

use tracing::trace;

use crate::core::Core;
use crate::core::pipeline::latches::MemWb;

/// Runs the write-back stage for one cycle, returning the destination
/// register index for hazard bookkeeping.
pub fn wb_stage(core: &mut Core, packet: MemWb) -> usize {
    let rd = packet.mem.rd;

    core.bypass.wb = packet.value;

    if rd != 0 {
        trace!(rd, value = format_args!("{:#010x}", packet.value), "commit");
        core.pending_wb = Some((rd, packet.value));
    }

    rd
}
