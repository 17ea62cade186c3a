//! The pipeline: control signals, latches, hazards, decode table, stages.

/// Hazard detection and forwarding selection.
pub mod hazards;
/// Pipeline latches and side registers.
pub mod latches;
/// Typed control signals.
pub mod signals;
/// Per-cycle stage functions.
pub mod stages;
/// The static RV32I decode table.
pub mod table;
