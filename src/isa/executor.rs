use crate::{
    config::{arch_config::WordType, bus_config},
    cpu::RegFile,
    device::MemBus,
    diag::{Tracer, reg_name},
    isa::{
        StepOutcome,
        decoder::{self, DecodeInstr, InstrInfo, RvInstr},
        exec,
    },
    utils::sign_extend,
};

/// One machine instance: register file, program counter, memory bus and
/// tracer. The step engine itself is stateless between calls; everything
/// persistent lives here or inside the mapped devices.
pub struct RvCore {
    pub(crate) reg_file: RegFile,
    pub(crate) pc: WordType,
    pub(crate) bus: MemBus,
    pub(crate) tracer: Tracer,
}

impl RvCore {
    pub fn new(bus: MemBus, tracer: Tracer) -> Self {
        Self {
            reg_file: RegFile::new(),
            pc: bus_config::RESET_PC,
            bus,
            tracer,
        }
    }

    pub fn pc(&self) -> WordType {
        self.pc
    }

    pub fn set_pc(&mut self, pc: WordType) {
        self.pc = pc;
    }

    pub fn reg(&self, id: u8) -> WordType {
        self.reg_file.read(id, 0).0
    }

    /// One fetch-decode-execute cycle. Never panics and never halts on its
    /// own; the caller decides what a non-`Continue` outcome means.
    pub fn step(&mut self) -> StepOutcome {
        // IF
        let raw = match self.bus.load(self.pc, 32) {
            Ok(word) => word as u32,
            Err(err) => {
                log::warn!("instruction fetch failed at {:#x}: {}", self.pc, err);
                self.tracer.error(format_args!("FETCH FAULT: {}", err));
                return StepOutcome::Trap(err);
            }
        };

        // The zero register is wired to 0; clear it before decode in case
        // the host poked it through IndexMut.
        self.reg_file[0] = 0;

        log::trace!("raw instruction {:#010x} at {:#x}", raw, self.pc);
        self.tracer.opcode((raw & 0x7f) as u8);

        // ID
        let Some(DecodeInstr(instr, info)) = decoder::decode(raw) else {
            log::warn!("unknown instruction {:#010x} at {:#x}", raw, self.pc);
            self.tracer
                .error(format_args!("UNKNOWN OPCODE {:#04x}", raw & 0x7f));
            return StepOutcome::UnknownInstruction;
        };

        // EX && WB
        if let Err(err) = exec::execute(self, instr, info) {
            log::warn!("memory fault at {:#x}: {}", self.pc, err);
            self.tracer.error(format_args!("MEMORY FAULT: {}", err));
            return StepOutcome::Trap(err);
        }

        self.trace_instr(instr, info);
        self.tracer.dump_regs(&self.reg_file);

        // Sequential advance; branch/jump semantics, once added, set pc
        // themselves instead.
        self.pc = self.pc.wrapping_add(4);

        StepOutcome::Continue
    }

    fn trace_instr(&mut self, instr: RvInstr, info: InstrInfo) {
        if !self.tracer.flags().decode {
            return;
        }

        let abi = self.tracer.flags().abi;
        match info {
            InstrInfo::R { rs1, rs2, rd } => self.tracer.instr(format_args!(
                "{} {}, {}, {}",
                instr.mnemonic(),
                reg_name(abi, rd as usize),
                reg_name(abi, rs1 as usize),
                reg_name(abi, rs2 as usize),
            )),
            InstrInfo::I { rs1, rd, imm } => self.tracer.instr(format_args!(
                "{} {}, {}, {}",
                instr.mnemonic(),
                reg_name(abi, rd as usize),
                reg_name(abi, rs1 as usize),
                sign_extend(imm, 12) as i64,
            )),
            InstrInfo::U { rd, imm } => self.tracer.instr(format_args!(
                "{} {}, {:#x}",
                instr.mnemonic(),
                reg_name(abi, rd as usize),
                imm >> 12,
            )),
        }
    }
}
