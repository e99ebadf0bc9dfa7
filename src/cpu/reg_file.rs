use std::{
    fmt::Debug,
    ops::{Index, IndexMut},
};

use crate::config::arch_config::{REG_NAME_RAW, REGFILE_CNT, WordType};

/// The 32 architectural integer registers. `pc` lives on the core itself,
/// not here, since it has plain read/write semantics.
///
/// `x0` is wired to the constant zero: writes to it are accepted and
/// discarded, so instruction semantics never special-case it.
pub struct RegFile {
    data: [WordType; REGFILE_CNT],
}

impl Index<usize> for RegFile {
    type Output = WordType;

    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}

impl IndexMut<usize> for RegFile {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.data[index]
    }
}

impl Debug for RegFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "reg_file {{")?;
        for (i, val) in self.data.iter().enumerate() {
            if i % 8 == 0 {
                write!(f, "  ")?;
            }

            write!(f, "{:>4}: 0x{:016x}  ", REG_NAME_RAW[i], val)?;

            if i % 8 == 7 {
                writeln!(f)?;
            }
        }
        write!(f, "}}")
    }
}

impl RegFile {
    pub fn new() -> Self {
        Self {
            data: [0; REGFILE_CNT],
        }
    }

    /// Reads of x0 always observe 0, even if the slot was poked through
    /// `IndexMut` between steps.
    pub fn read(&self, id1: u8, id2: u8) -> (WordType, WordType) {
        (self.read_one(id1), self.read_one(id2))
    }

    fn read_one(&self, id: u8) -> WordType {
        if id == 0u8 {
            return 0;
        }

        self.data[id as usize]
    }

    /// id == 0 will be ignored, if an instruction does not need to WriteBack, set id = 0.
    pub fn write(&mut self, id: u8, data: WordType) {
        if id == 0u8 {
            return;
        }

        self.data[id as usize] = data
    }
}
