//! Reference simulation harness.
//!
//! The core deliberately owns no fetch logic and no halt policy; this module
//! supplies both. [`FetchUnit`] predicts straight-line execution and obeys
//! the stall and redirect signals, and [`Simulator`] wires a [`Core`] to a
//! fetch unit and a [`SparseRam`], intercepting ECALL/EBREAK as halts.
//!
//! [`Core`]: crate::core::Core
//! [`SparseRam`]: crate::soc::SparseRam

/// The next-line-predicting fetch unit.
pub mod fetch;
/// The top-level simulator driver.
pub mod simulator;

pub use fetch::FetchUnit;
pub use simulator::Simulator;
