//! Per-cycle pipeline stage functions.
//!
//! Each stage is a free function over the core's state plus the latch
//! snapshot it consumes. The clock driver in [`crate::core`] calls them in a
//! fixed order every tick; the functions themselves never loop or wait.

/// Decode stage: table lookup, hazard resolution, packet assembly.
pub mod decode;
/// Execute stage: ALU, branch resolution, bypass maintenance.
pub mod execute;
/// Memory stage: external access and load-data shaping.
pub mod memory;
/// Write-back stage: register commit and the write-back bypass.
pub mod writeback;
