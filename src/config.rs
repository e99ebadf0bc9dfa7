pub mod bus_config {
    use crate::config::arch_config::WordType;

    /// Machine reset vector. `pc` starts here unless the host overrides it.
    pub const RESET_PC: WordType = 0x0;

    /// Scratch RAM geometry used by the default CLI bus layout.
    pub const RAM_BASE: WordType = 0x8000_0000;
    pub const RAM_SIZE: usize = 0x10000;
}

pub mod arch_config {
    use crate::gen_name_list;

    pub type WordType = u64;
    pub type SignedWordType = i64;

    pub const XLEN: usize = 64;
    pub const REGFILE_CNT: usize = 32;

    /// Raw index names, `x0..x31`.
    pub const REG_NAME_RAW: [&str; REGFILE_CNT] = gen_name_list!("x"; 0, 31);

    /// Calling-convention role names, in index order.
    pub const REG_NAME_ABI: [&str; REGFILE_CNT] = [
        "zero", "ra", "sp", "gp", "tp", "t0", "t1", "t2", "s0", "s1", "a0", "a1", "a2", "a3",
        "a4", "a5", "a6", "a7", "s2", "s3", "s4", "s5", "s6", "s7", "s8", "s9", "s10", "s11",
        "t3", "t4", "t5", "t6",
    ];
}
