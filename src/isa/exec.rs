use crate::{
    config::arch_config::WordType,
    device::MemError,
    isa::{
        decoder::{InstrInfo, RvInstr},
        executor::RvCore,
    },
    utils::{sign_extend, sign_extend_u32},
};

/// Register/immediate arithmetic shared by the OP and OP-IMM families.
/// I-immediates are sign-extended from 12 bits before the operation.
fn exec_arith<F>(core: &mut RvCore, info: InstrInfo, f: F)
where
    F: FnOnce(WordType, WordType) -> WordType,
{
    let (rd, rst) = match info {
        InstrInfo::R { rs1, rs2, rd } => {
            let (val1, val2) = core.reg_file.read(rs1, rs2);
            (rd, f(val1, val2))
        }
        InstrInfo::I { rs1, rd, imm } => {
            let val1 = core.reg_file.read(rs1, 0).0;
            (rd, f(val1, sign_extend(imm, 12)))
        }
        InstrInfo::U { .. } => unreachable!(),
    };

    core.reg_file.write(rd, rst);
}

fn exec_lui(core: &mut RvCore, info: InstrInfo) {
    if let InstrInfo::U { rd, imm } = info {
        core.reg_file.write(rd, sign_extend_u32(imm as u32));
    } else {
        unreachable!();
    }
}

/// Dispatch decoded semantics. Memory-touching instructions, once added,
/// surface their bus faults here.
pub(super) fn execute(
    core: &mut RvCore,
    instr: RvInstr,
    info: InstrInfo,
) -> Result<(), MemError> {
    match instr {
        RvInstr::ADDI | RvInstr::ADD => exec_arith(core, info, |a, b| a.wrapping_add(b)),
        RvInstr::SUB => exec_arith(core, info, |a, b| a.wrapping_sub(b)),
        RvInstr::XORI | RvInstr::XOR => exec_arith(core, info, |a, b| a ^ b),
        RvInstr::ORI | RvInstr::OR => exec_arith(core, info, |a, b| a | b),
        RvInstr::ANDI | RvInstr::AND => exec_arith(core, info, |a, b| a & b),
        RvInstr::LUI => exec_lui(core, info),
    }

    Ok(())
}
