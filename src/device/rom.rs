use crate::device::BusDevice;

/// Read-only memory backed by a program image. The store capability is
/// deliberately absent, so a store scan skips this region.
pub struct Rom {
    data: Box<[u8]>,
}

impl Rom {
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self {
            data: bytes.into_boxed_slice(),
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl BusDevice for Rom {
    fn load_byte(&mut self, offset: u64) -> Option<u8> {
        self.data.get(offset as usize).copied()
    }
}
