//! Memory stage.
//!
//! Presents the packet's access, if any, to the external memory collaborator
//! and shapes the returned data: sub-word loads are sign- or zero-extended
//! per the control word. Addresses pass through exactly as the ALU produced
//! them; this stage never aligns or faults an access.

use crate::core::Core;
use crate::core::pipeline::latches::{ExMem, MemWb};
use crate::core::pipeline::signals::{MemOp, MemWidth};
use crate::soc::DataPort;

/// Runs the memory stage for one cycle.
pub fn mem_stage(core: &mut Core, packet: ExMem, bus: &mut dyn DataPort) {
    let value = match packet.mem.op {
        MemOp::None => packet.alu,
        MemOp::Load => {
            let raw = bus.read(packet.alu, packet.mem.width);
            if packet.mem.unsigned {
                raw
            } else {
                sign_extend(raw, packet.mem.width)
            }
        }
        MemOp::Store => {
            bus.write(packet.alu, packet.mem.width, packet.store_data);
            packet.alu
        }
    };

    // Refreshed every cycle, bubbles included.
    core.bypass.mem_wb = value;

    core.mem_wb = MemWb {
        value,
        mem: packet.mem,
    };
}

/// Sign-extends sub-word load data to the full register width.
fn sign_extend(raw: u32, width: MemWidth) -> u32 {
    match width {
        MemWidth::Byte => raw as u8 as i8 as i32 as u32,
        MemWidth::Half => raw as u16 as i16 as i32 as u32,
        MemWidth::Word => raw,
    }
}
