pub mod decoder;
pub mod executor;

mod exec;

pub use executor::RvCore;

use crate::device::MemError;

/// Outcome of one fetch-decode-execute cycle.
///
/// None of these is fatal to the core; halting on a non-`Continue` arm is
/// entirely host-driver policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Instruction executed normally.
    Continue,
    /// The opcode had no matching semantics.
    UnknownInstruction,
    /// A bus-level fault: miss or unsupported access width.
    Trap(MemError),
}

impl StepOutcome {
    pub fn is_continue(self) -> bool {
        self == StepOutcome::Continue
    }
}
