#![cfg_attr(debug_assertions, allow(dead_code))]

mod utils;

pub mod config;
pub mod cpu;
pub mod device;
pub mod diag;
pub mod isa;
pub mod load;

use std::{io, path::Path};

use crate::{
    config::{arch_config::WordType, bus_config},
    device::{MemBus, ram::Ram},
    diag::{TraceFlags, TraceSink, Tracer},
};

pub use crate::{
    device::MemError,
    isa::{RvCore, StepOutcome},
};

/// Convenience facade over [`RvCore`] with the reference harness's bus
/// layout. The run loop and its halting policy stay with the caller;
/// [`Emulator::run`] is merely the "stop on anything but `Continue`"
/// variant.
pub struct Emulator {
    core: RvCore,
}

impl Emulator {
    /// Raw binary image mapped read-only at the reset vector, plus a RAM
    /// scratch region at [`bus_config::RAM_BASE`].
    pub fn from_binary(
        path: &Path,
        flags: TraceFlags,
        sink: Option<Box<dyn TraceSink>>,
    ) -> io::Result<Self> {
        let rom = load::load_bin(path)?;

        let mut bus = MemBus::new();
        bus.map(bus_config::RESET_PC, rom.len() as WordType, Box::new(rom));
        bus.map(
            bus_config::RAM_BASE,
            bus_config::RAM_SIZE as WordType,
            Box::new(Ram::new(bus_config::RAM_SIZE)),
        );

        Ok(Self {
            core: RvCore::new(bus, Tracer::new(flags, sink)),
        })
    }

    pub fn from_core(core: RvCore) -> Self {
        Self { core }
    }

    pub fn core(&self) -> &RvCore {
        &self.core
    }

    pub fn core_mut(&mut self) -> &mut RvCore {
        &mut self.core
    }

    pub fn step(&mut self) -> StepOutcome {
        self.core.step()
    }

    /// Step until the core reports anything but `Continue`, and return that
    /// terminating outcome.
    pub fn run(&mut self) -> StepOutcome {
        loop {
            let outcome = self.core.step();
            if !outcome.is_continue() {
                return outcome;
            }
        }
    }
}
