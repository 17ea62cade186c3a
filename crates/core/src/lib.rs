//! In-order RV32I pipeline core model.
//!
//! This crate implements the decode → hazard-resolution → execute → write-back
//! core of a single-issue, five-slot RV32I pipeline with the following:
//! 1. **ISA:** Instruction field extraction, parallel immediate synthesis, and
//!    the static RV32I decode truth table.
//! 2. **Core:** Pipeline latches, the hazard/forwarding unit with three bypass
//!    levels, a load-use interlock, and per-stage update functions composed by
//!    a fixed-ordering clock driver.
//! 3. **SoC boundary:** The `DataPort` trait the execute/memory path drives,
//!    plus a sparse reference RAM.
//! 4. **Simulation:** A reference harness wiring the core to a simple fetch
//!    unit with next-line prediction and ecall/ebreak interception.
//!
//! The pipeline is rigid: every stage issues exactly one packet per cycle,
//! and stalls are expressed by bubble injection rather than backpressure.

/// Common types and the error definitions.
pub mod common;
/// Simulator configuration.
pub mod config;
/// CPU core (register file, pipeline, execution units).
pub mod core;
/// Instruction set (field extraction, immediates, RV32I opcode constants).
pub mod isa;
/// Reference simulation harness (fetch unit + simulator driver).
pub mod sim;
/// Memory boundary trait and the sparse reference RAM.
pub mod soc;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Main core type; owns the register file, latches, and bypass registers.
pub use crate::core::Core;
/// Reference simulator; wires a `Core` to a fetch unit and a `SparseRam`.
pub use crate::sim::Simulator;
