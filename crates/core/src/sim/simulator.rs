//! Top-level simulator driver.
//!
//! Owns the core, the fetch unit, and the memory, and runs the per-cycle
//! handshake between them: present an instruction, tick the core, obey the
//! stall/redirect outcome. ECALL and EBREAK are intercepted here; the core
//! carries them as inert packets and the halt policy lives entirely in this
//! driver.

use tracing::debug;

use crate::common::constants::INST_NOP;
use crate::config::Config;
use crate::core::pipeline::signals::SysOp;
use crate::core::{Core, FetchBundle};
use crate::sim::FetchUnit;
use crate::soc::SparseRam;

/// Cycles needed to drain the packets older than a halting instruction.
const DRAIN_CYCLES: u32 = 2;

/// A core wired to a fetch unit and a sparse RAM.
#[derive(Debug)]
pub struct Simulator {
    /// The pipeline core.
    pub core: Core,
    /// The fetch unit.
    pub fetch: FetchUnit,
    /// Unified instruction and data memory.
    pub ram: SparseRam,
    /// Cycles simulated so far.
    pub cycles: u64,
    max_cycles: u64,
    halt: Option<SysOp>,
}

impl Simulator {
    /// Creates a simulator in its reset state.
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self {
            core: Core::new(),
            fetch: FetchUnit::new(config.reset_pc),
            ram: SparseRam::new(),
            cycles: 0,
            max_cycles: config.max_cycles,
            halt: None,
        }
    }

    /// Loads a program image at `base`.
    pub fn load_program(&mut self, base: u32, words: &[u32]) {
        self.ram.load_words(base, words);
    }

    /// The system instruction that halted execution, if any.
    #[must_use]
    pub fn halted(&self) -> Option<SysOp> {
        self.halt
    }

    /// Simulates one cycle.
    pub fn tick(&mut self) {
        let bundle = self.fetch.bundle(&self.ram);
        let result = self.core.tick(&bundle, &mut self.ram);
        self.cycles += 1;

        if result.sys != SysOp::None {
            self.halt_and_drain(result.sys);
            return;
        }

        if self.fetch.advance(&result) {
            // The wrong-path instruction issued during the resolution cycle
            // is sitting in the decode/execute latch; kill it.
            self.core.squash_decode();
        }
    }

    /// Runs until a system instruction halts execution or the cycle budget
    /// is exhausted.
    pub fn run(&mut self) -> Option<SysOp> {
        while self.halt.is_none() && self.cycles < self.max_cycles {
            self.tick();
        }
        self.halt
    }

    /// Lets the packets older than the halting instruction commit, then
    /// records the halt.
    fn halt_and_drain(&mut self, sys: SysOp) {
        debug!(?sys, pc = format_args!("{:#010x}", self.fetch.pc), "halt");

        // The instruction after the halting one entered decode this cycle
        // and must not execute.
        self.core.squash_decode();

        let nop = FetchBundle {
            inst: INST_NOP,
            pc: self.fetch.pc,
            pred_next_pc: self.fetch.pc.wrapping_add(4),
        };
        for _ in 0..DRAIN_CYCLES {
            let _ = self.core.tick(&nop, &mut self.ram);
            self.cycles += 1;
        }

        self.halt = Some(sys);
    }
}
