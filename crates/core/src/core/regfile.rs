//! General-purpose register file.

use crate::common::constants::GPR_COUNT;

/// The 32-entry integer register file.
///
/// x0 is hardwired to zero: reads always return 0 and writes are discarded.
#[derive(Debug, Clone)]
pub struct RegFile {
    regs: [u32; GPR_COUNT],
}

impl Default for RegFile {
    fn default() -> Self {
        Self::new()
    }
}

impl RegFile {
    /// Creates a register file with every register cleared.
    #[must_use]
    pub fn new() -> Self {
        Self {
            regs: [0; GPR_COUNT],
        }
    }

    /// Reads register `idx`. Out-of-range indices read as zero.
    #[must_use]
    pub fn read(&self, idx: usize) -> u32 {
        self.regs.get(idx).copied().unwrap_or(0)
    }

    /// Writes register `idx`, ignoring writes to x0 and out-of-range indices.
    pub fn write(&mut self, idx: usize, value: u32) {
        if idx != 0 && idx < GPR_COUNT {
            self.regs[idx] = value;
        }
    }
}
