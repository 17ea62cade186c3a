//! Pipeline latches and architectural side registers.
//!
//! Each latch struct is the register between two stages; `Default` for every
//! latch is a bubble, so draining a latch with `mem::take` leaves a harmless
//! packet behind. The bypass and branch-target registers live here too: they
//! are ordinary registers the stages overwrite every cycle, not wires.

use crate::core::pipeline::signals::{ExCtrl, MemCtrl, MemOp, MemWidth};

/// Decode → execute latch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdEx {
    /// Control word for the execute stage.
    pub ctrl: ExCtrl,
    /// Program counter of the instruction.
    pub pc: u32,
    /// rs1 value as read (and possibly repaired) in decode.
    pub rs1_data: u32,
    /// rs2 value as read (and possibly repaired) in decode.
    pub rs2_data: u32,
    /// Selected immediate.
    pub imm: u32,
}

impl IdEx {
    /// An inert packet; what decode injects when the hazard unit stalls.
    #[must_use]
    pub fn bubble() -> Self {
        Self::default()
    }
}

/// Execute → memory latch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExMem {
    /// ALU result; doubles as the access address for loads and stores.
    pub alu: u32,
    /// Forwarded rs2 value, the data for stores.
    pub store_data: u32,
    /// Memory-channel control, still carrying the destination register.
    pub mem: MemCtrl,
}

impl ExMem {
    /// Builds the request this packet presents to the memory collaborator,
    /// or `None` for ALU-only packets.
    #[must_use]
    pub fn request(&self) -> Option<MemRequest> {
        match self.mem.op {
            MemOp::None => None,
            MemOp::Load => Some(MemRequest {
                addr: self.alu,
                read: true,
                write: false,
                wdata: 0,
                width: self.mem.width,
                unsigned: self.mem.unsigned,
            }),
            MemOp::Store => Some(MemRequest {
                addr: self.alu,
                read: false,
                write: true,
                wdata: self.store_data,
                width: self.mem.width,
                unsigned: false,
            }),
        }
    }
}

/// One access as presented to the external memory collaborator.
///
/// Addresses are passed through unmodified; alignment is the collaborator's
/// concern, not the core's.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemRequest {
    /// Byte address of the access.
    pub addr: u32,
    /// Read enable.
    pub read: bool,
    /// Write enable.
    pub write: bool,
    /// Data to write, for stores.
    pub wdata: u32,
    /// Access width.
    pub width: MemWidth,
    /// Zero-extend rather than sign-extend read data.
    pub unsigned: bool,
}

/// Memory → write-back latch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemWb {
    /// Value to commit: load data for loads, the ALU result otherwise.
    pub value: u32,
    /// Memory-channel control; write-back reads the destination from here.
    pub mem: MemCtrl,
}

/// The three bypass registers feeding the forwarding network.
///
/// Every field is overwritten unconditionally each cycle, bubbles included;
/// staleness is impossible because selection, not content, gates their use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BypassRegs {
    /// Result of the packet that just left execute.
    pub ex_mem: u32,
    /// Result of the packet that just left memory.
    pub mem_wb: u32,
    /// Value committed by the packet in write-back this cycle.
    pub wb: u32,
}

/// The branch-target register written by execute every cycle.
///
/// Zero means the predicted next PC was right (or the packet was not a
/// branch); any nonzero value is a corrected target the fetch unit must
/// redirect to. Address zero therefore cannot be expressed as a correction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BranchTarget {
    /// Corrected target, or zero for no correction.
    pub target: u32,
}

impl BranchTarget {
    /// Records a corrected target.
    pub fn set(&mut self, target: u32) {
        self.target = target;
    }

    /// Records that no correction is needed.
    pub fn clear(&mut self) {
        self.target = 0;
    }

    /// The pending redirect, if any.
    #[must_use]
    pub fn redirect(&self) -> Option<u32> {
        (self.target != 0).then_some(self.target)
    }
}
