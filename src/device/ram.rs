use crate::{config::arch_config::WordType, device::BusDevice};

/// Plain byte-addressable memory with both bus capabilities.
pub struct Ram {
    data: Box<[u8]>,
}

impl Ram {
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0u8; size].into_boxed_slice(),
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Copy a program section into memory at a region-relative address.
    pub fn insert_section(&mut self, section: &[u8], start_addr: WordType) {
        let start = start_addr as usize;
        if start + section.len() > self.data.len() {
            log::error!(
                "ram::insert_section out of range! start_addr = {:#x}, len = {:#x}",
                start_addr,
                section.len()
            );
            panic!("section does not fit in ram");
        }

        self.data[start..start + section.len()].copy_from_slice(section);
    }
}

impl BusDevice for Ram {
    fn load_byte(&mut self, offset: u64) -> Option<u8> {
        self.data.get(offset as usize).copied()
    }

    fn store_byte(&mut self, offset: u64, value: u8) -> Option<()> {
        let slot = self.data.get_mut(offset as usize)?;
        *slot = value;
        Some(())
    }
}
