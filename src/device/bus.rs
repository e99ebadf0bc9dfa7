use crate::device::{BusDevice, MemError};

pub struct BusRegion {
    pub(crate) base: u64,
    pub(crate) size: u64,
    pub(crate) device: Box<dyn BusDevice>,
}

impl BusRegion {
    pub fn new(base: u64, size: u64, device: Box<dyn BusDevice>) -> Self {
        assert!(
            base.checked_add(size).is_some(),
            "region {:#x}+{:#x} wraps the 64-bit address space",
            base,
            size
        );
        Self { base, size, device }
    }

    fn contains(&self, addr: u64) -> bool {
        addr >= self.base && addr - self.base < self.size
    }
}

/// Ordered collection of address-mapped regions composed into one flat
/// 64-bit address space.
///
/// Resolution is first-match in registration order, independently per
/// constituent byte, so a multi-byte value may straddle two adjacent
/// regions. A region that lacks the needed capability is skipped and the
/// scan continues past it. Multi-byte values are composed little-endian.
pub struct MemBus {
    regions: Vec<BusRegion>,
}

impl MemBus {
    pub fn new() -> Self {
        Self {
            regions: Vec::new(),
        }
    }

    /// Map `device` at `base`. Overlapping regions are legal; the earlier
    /// registration wins for every access it can serve.
    pub fn map(&mut self, base: u64, size: u64, device: Box<dyn BusDevice>) {
        self.regions.push(BusRegion::new(base, size, device));
    }

    fn load_byte(&mut self, addr: u64) -> Result<u8, MemError> {
        for region in self.regions.iter_mut() {
            if !region.contains(addr) {
                continue;
            }
            if let Some(byte) = region.device.load_byte(addr - region.base) {
                return Ok(byte);
            }
        }

        Err(MemError::LoadFault { addr })
    }

    fn store_byte(&mut self, addr: u64, value: u8) -> Result<(), MemError> {
        for region in self.regions.iter_mut() {
            if !region.contains(addr) {
                continue;
            }
            if region.device.store_byte(addr - region.base, value).is_some() {
                return Ok(());
            }
        }

        Err(MemError::StoreFault { addr })
    }

    pub fn load(&mut self, addr: u64, size_bits: u32) -> Result<u64, MemError> {
        check_width(size_bits)?;

        let mut value = 0u64;
        for i in 0..(size_bits / 8) as u64 {
            let byte = self.load_byte(addr.wrapping_add(i))?;
            value |= (byte as u64) << (8 * i);
        }

        Ok(value)
    }

    pub fn store(&mut self, addr: u64, value: u64, size_bits: u32) -> Result<(), MemError> {
        check_width(size_bits)?;

        for i in 0..(size_bits / 8) as u64 {
            let byte = ((value >> (8 * i)) & 0xff) as u8;
            self.store_byte(addr.wrapping_add(i), byte)?;
        }

        Ok(())
    }
}

fn check_width(size_bits: u32) -> Result<(), MemError> {
    match size_bits {
        8 | 16 | 32 | 64 => Ok(()),
        other => Err(MemError::UnsupportedWidth(other)),
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use super::*;
    use crate::device::{ram::Ram, rom::Rom};

    /// Ram with an externally observable backing store, so tests can check
    /// which region a routed store actually landed in.
    #[derive(Clone)]
    struct SharedRam(Rc<RefCell<Vec<u8>>>);

    impl SharedRam {
        fn new(size: usize) -> Self {
            Self(Rc::new(RefCell::new(vec![0; size])))
        }

        fn byte(&self, offset: usize) -> u8 {
            self.0.borrow()[offset]
        }
    }

    impl BusDevice for SharedRam {
        fn load_byte(&mut self, offset: u64) -> Option<u8> {
            self.0.borrow().get(offset as usize).copied()
        }

        fn store_byte(&mut self, offset: u64, value: u8) -> Option<()> {
            let mut data = self.0.borrow_mut();
            let slot = data.get_mut(offset as usize)?;
            *slot = value;
            Some(())
        }
    }

    fn ram_bus(base: u64, size: usize) -> MemBus {
        let mut bus = MemBus::new();
        bus.map(base, size as u64, Box::new(Ram::new(size)));
        bus
    }

    #[test]
    fn test_round_trip_all_widths() {
        let mut bus = ram_bus(0x1000, 0x100);

        bus.store(0x1000, 0xAB, 8).unwrap();
        assert_eq!(bus.load(0x1000, 8).unwrap(), 0xAB);

        bus.store(0x1010, 0x1234, 16).unwrap();
        assert_eq!(bus.load(0x1010, 16).unwrap(), 0x1234);

        bus.store(0x1020, 0x1234_5678, 32).unwrap();
        assert_eq!(bus.load(0x1020, 32).unwrap(), 0x1234_5678);

        bus.store(0x1030, 0x1122_3344_5566_7788, 64).unwrap();
        assert_eq!(bus.load(0x1030, 64).unwrap(), 0x1122_3344_5566_7788);
    }

    #[test]
    fn test_store_is_little_endian() {
        let mut bus = ram_bus(0, 0x10);
        bus.store(0, 0x0102_0304_0506_0708, 64).unwrap();

        let expected = [0x08, 0x07, 0x06, 0x05, 0x04, 0x03, 0x02, 0x01];
        for (i, byte) in expected.iter().enumerate() {
            assert_eq!(bus.load(i as u64, 8).unwrap(), *byte as u64);
        }
    }

    #[test]
    fn test_load_composes_little_endian() {
        let mut bus = ram_bus(0, 0x10);
        for i in 0..4u64 {
            bus.store(i, i + 1, 8).unwrap();
        }
        assert_eq!(bus.load(0, 32).unwrap(), 0x0403_0201);
    }

    #[test]
    fn test_scan_order_on_overlap() {
        // R1 registered first, load-only; R2 covers the same range with both
        // capabilities. Loads go to R1, stores fall through to R2.
        let rom = Rom::from_bytes(vec![0xAA; 0x10]);
        let ram = SharedRam::new(0x10);

        let mut bus = MemBus::new();
        bus.map(0x0, 0x10, Box::new(rom));
        bus.map(0x0, 0x10, Box::new(ram.clone()));

        assert_eq!(bus.load(0x4, 8).unwrap(), 0xAA);

        bus.store(0x4, 0xCC, 8).unwrap();
        assert_eq!(ram.byte(4), 0xCC);
        // The earlier load-capable region still wins reads.
        assert_eq!(bus.load(0x4, 8).unwrap(), 0xAA);
    }

    #[test]
    fn test_access_straddles_adjacent_regions() {
        let a = SharedRam::new(4);
        let b = SharedRam::new(4);

        let mut bus = MemBus::new();
        bus.map(0x0, 4, Box::new(a.clone()));
        bus.map(0x4, 4, Box::new(b.clone()));

        bus.store(0x2, 0x1122_3344, 32).unwrap();
        assert_eq!(a.byte(2), 0x44);
        assert_eq!(a.byte(3), 0x33);
        assert_eq!(b.byte(0), 0x22);
        assert_eq!(b.byte(1), 0x11);

        assert_eq!(bus.load(0x2, 32).unwrap(), 0x1122_3344);
    }

    #[test]
    fn test_bus_miss_is_reported() {
        let mut bus = ram_bus(0x1000, 0x10);

        assert_eq!(
            bus.load(0x2000, 8),
            Err(MemError::LoadFault { addr: 0x2000 })
        );
        assert_eq!(
            bus.store(0x2000, 1, 8),
            Err(MemError::StoreFault { addr: 0x2000 })
        );

        // A load running off the end of the last region faults at the first
        // unmapped byte.
        assert_eq!(
            bus.load(0x100c, 64),
            Err(MemError::LoadFault { addr: 0x1010 })
        );
    }

    #[test]
    fn test_store_to_load_only_region_is_a_miss() {
        let mut bus = MemBus::new();
        bus.map(0x0, 0x10, Box::new(Rom::from_bytes(vec![0; 0x10])));

        assert_eq!(bus.store(0x0, 1, 8), Err(MemError::StoreFault { addr: 0x0 }));
    }

    #[test]
    fn test_unsupported_width_is_reported() {
        let mut bus = ram_bus(0, 0x10);

        assert_eq!(bus.load(0, 24), Err(MemError::UnsupportedWidth(24)));
        assert_eq!(bus.store(0, 0, 0), Err(MemError::UnsupportedWidth(0)));
        assert_eq!(bus.load(0, 128), Err(MemError::UnsupportedWidth(128)));
    }

    #[test]
    #[should_panic(expected = "wraps the 64-bit address space")]
    fn test_region_overflow_rejected() {
        let mut bus = MemBus::new();
        bus.map(u64::MAX - 2, 8, Box::new(Ram::new(8)));
    }
}
