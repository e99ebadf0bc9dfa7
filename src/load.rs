use std::{fs, io, path::Path};

use crate::device::rom::Rom;

/// Read a raw binary image into a load-only region.
pub fn load_bin(path: &Path) -> io::Result<Rom> {
    Ok(Rom::from_bytes(fs::read(path)?))
}
