//! The memory boundary of the core.
//!
//! The pipeline never owns memory. Loads and stores leave the core as
//! [`MemRequest`](crate::core::pipeline::latches::MemRequest)-shaped accesses
//! against whatever implements [`DataPort`], and read data comes back on the
//! registered one-cycle-later schedule the memory stage imposes.

/// Sparse byte-addressed reference RAM.
pub mod memory;

use crate::core::pipeline::signals::MemWidth;

pub use memory::SparseRam;

/// A byte-addressed memory collaborator.
///
/// Implementations receive addresses exactly as the ALU computed them; the
/// core does not align, split, or fault accesses. Read data is returned
/// zero-extended to 32 bits; sign treatment happens inside the core.
pub trait DataPort {
    /// Reads `width` bytes at `addr`, zero-extended.
    fn read(&mut self, addr: u32, width: MemWidth) -> u32;

    /// Writes the low `width` bytes of `value` at `addr`.
    fn write(&mut self, addr: u32, width: MemWidth, value: u32);
}
