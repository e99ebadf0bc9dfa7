use thiserror::Error;

pub mod bus;
pub mod ram;
pub mod rom;

pub use bus::MemBus;

/// Bus-level fault taxonomy. These reach the host through
/// [`crate::isa::StepOutcome::Trap`]; whether a trap halts the run is a
/// host-driver policy, never decided here.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MemError {
    #[error("no region serves a load at address {addr:#x}")]
    LoadFault { addr: u64 },
    #[error("no region serves a store at address {addr:#x}")]
    StoreFault { addr: u64 },
    #[error("unsupported access width: {0} bits")]
    UnsupportedWidth(u32),
}

/// Byte-granular capability interface of one mapped device.
///
/// Offsets are relative to the region base. Returning `None` means the
/// capability is absent for that access and the bus continues its scan past
/// this region; a device omits a capability simply by keeping the default
/// method body.
pub trait BusDevice {
    fn load_byte(&mut self, offset: u64) -> Option<u8> {
        let _ = offset;
        None
    }

    fn store_byte(&mut self, offset: u64, value: u8) -> Option<()> {
        let _ = (offset, value);
        None
    }
}
