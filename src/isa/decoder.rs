use crate::config::arch_config::WordType;

pub mod opcode {
    pub const OP_IMM: u8 = 0x13;
    pub const OP: u8 = 0x33;
    pub const LUI: u8 = 0x37;
}

/// Fixed bit-fields of one 32-bit instruction word, per the base encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawFields {
    pub opcode: u8,
    pub rd: u8,
    pub rs1: u8,
    pub rs2: u8,
    pub funct3: u8,
    pub funct7: u8,
}

impl RawFields {
    pub fn split(raw: u32) -> Self {
        Self {
            opcode: (raw & 0x7f) as u8,
            rd: ((raw >> 7) & 0b11111) as u8,
            funct3: ((raw >> 12) & 0b111) as u8,
            rs1: ((raw >> 15) & 0b11111) as u8,
            rs2: ((raw >> 20) & 0b11111) as u8,
            funct7: ((raw >> 25) & 0x7f) as u8,
        }
    }
}

#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RvInstr {
    ADDI,
    XORI,
    ORI,
    ANDI,
    ADD,
    SUB,
    XOR,
    OR,
    AND,
    LUI,
}

impl RvInstr {
    pub fn mnemonic(self) -> &'static str {
        match self {
            RvInstr::ADDI => "addi",
            RvInstr::XORI => "xori",
            RvInstr::ORI => "ori",
            RvInstr::ANDI => "andi",
            RvInstr::ADD => "add",
            RvInstr::SUB => "sub",
            RvInstr::XOR => "xor",
            RvInstr::OR => "or",
            RvInstr::AND => "and",
            RvInstr::LUI => "lui",
        }
    }
}

/// `imm` is kept raw: 12 unextended bits for type I (sign extension happens
/// at execute), already shifted left by 12 for type U.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstrInfo {
    R { rs1: u8, rs2: u8, rd: u8 },
    I { rs1: u8, rd: u8, imm: WordType },
    U { rd: u8, imm: WordType },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeInstr(pub RvInstr, pub InstrInfo);

/// Select instruction semantics from a raw word, disambiguating by
/// `funct3`/`funct7` where the opcode family needs it. `None` means no
/// matching semantics; the step engine reports it rather than stubbing.
pub fn decode(raw: u32) -> Option<DecodeInstr> {
    let f = RawFields::split(raw);

    let instr = match f.opcode {
        opcode::OP_IMM => match f.funct3 {
            0b000 => RvInstr::ADDI,
            0b100 => RvInstr::XORI,
            0b110 => RvInstr::ORI,
            0b111 => RvInstr::ANDI,
            _ => return None,
        },
        opcode::OP => match (f.funct3, f.funct7) {
            (0b000, 0x00) => RvInstr::ADD,
            (0b000, 0x20) => RvInstr::SUB,
            (0b100, 0x00) => RvInstr::XOR,
            (0b110, 0x00) => RvInstr::OR,
            (0b111, 0x00) => RvInstr::AND,
            _ => return None,
        },
        opcode::LUI => RvInstr::LUI,
        _ => return None,
    };

    let info = match instr {
        RvInstr::LUI => InstrInfo::U {
            rd: f.rd,
            imm: ((raw >> 12) << 12) as WordType,
        },
        RvInstr::ADD | RvInstr::SUB | RvInstr::XOR | RvInstr::OR | RvInstr::AND => InstrInfo::R {
            rs1: f.rs1,
            rs2: f.rs2,
            rd: f.rd,
        },
        _ => InstrInfo::I {
            rs1: f.rs1,
            rd: f.rd,
            imm: ((raw >> 20) & 0xfff) as WordType,
        },
    };

    Some(DecodeInstr(instr, info))
}
