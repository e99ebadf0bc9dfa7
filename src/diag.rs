use std::{
    cell::RefCell,
    fmt,
    io::{self, Write},
    rc::Rc,
};

use crate::{
    config::arch_config::{REG_NAME_ABI, REG_NAME_RAW, REGFILE_CNT},
    cpu::RegFile,
};

/// Independently toggleable trace categories. Part of machine
/// configuration; set once at startup, read every step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TraceFlags {
    /// Disassembled-style line per executed instruction.
    pub decode: bool,
    /// Unknown opcodes and bus faults.
    pub error: bool,
    /// Full register dump after each executed instruction.
    pub regs: bool,
    /// Extra detail; the raw opcode byte fires only on `decode && verbose`.
    pub verbose: bool,
    /// Print registers by ABI role name instead of raw index name.
    pub abi: bool,
}

pub fn reg_name(abi: bool, index: usize) -> &'static str {
    if abi {
        REG_NAME_ABI[index]
    } else {
        REG_NAME_RAW[index]
    }
}

/// Receives fully formatted trace lines. Supplied by the host; the core
/// never assumes a console exists.
pub trait TraceSink {
    fn accept(&mut self, line: &str) -> io::Result<()>;
}

pub struct WriterSink<W: Write> {
    inner: W,
}

impl<W: Write> WriterSink<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }
}

impl<W: Write> TraceSink for WriterSink<W> {
    fn accept(&mut self, line: &str) -> io::Result<()> {
        self.inner.write_all(line.as_bytes())?;
        self.inner.write_all(b"\n")
    }
}

/// Collects lines in memory. Clones share one buffer, so a test or embedder
/// can keep a handle while the tracer owns the sink.
#[derive(Clone, Default)]
pub struct MemorySink {
    lines: Rc<RefCell<Vec<String>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }
}

impl TraceSink for MemorySink {
    fn accept(&mut self, line: &str) -> io::Result<()> {
        self.lines.borrow_mut().push(line.to_owned());
        Ok(())
    }
}

/// Flag-gated formatting and emission of trace text. With no sink
/// configured, every category is disabled regardless of flag values, and
/// nothing is formatted.
pub struct Tracer {
    flags: TraceFlags,
    sink: Option<Box<dyn TraceSink>>,
}

impl Tracer {
    pub fn new(flags: TraceFlags, sink: Option<Box<dyn TraceSink>>) -> Self {
        Self { flags, sink }
    }

    /// Fully disabled tracer.
    pub fn off() -> Self {
        Self::new(TraceFlags::default(), None)
    }

    pub fn flags(&self) -> TraceFlags {
        self.flags
    }

    fn enabled(&self, flag: bool) -> bool {
        flag && self.sink.is_some()
    }

    fn emit(&mut self, args: fmt::Arguments<'_>) {
        let Some(sink) = self.sink.as_mut() else {
            return;
        };
        if let Err(err) = sink.accept(&args.to_string()) {
            // A broken sink must never abort the step loop.
            log::debug!("trace sink rejected a line: {}", err);
        }
    }

    pub fn opcode(&mut self, opcode: u8) {
        if self.enabled(self.flags.decode && self.flags.verbose) {
            self.emit(format_args!("Opcode: {:#04x}", opcode));
        }
    }

    pub fn instr(&mut self, args: fmt::Arguments<'_>) {
        if self.enabled(self.flags.decode) {
            self.emit(args);
        }
    }

    pub fn error(&mut self, args: fmt::Arguments<'_>) {
        if self.enabled(self.flags.error) {
            self.emit(args);
        }
    }

    /// All 32 registers, paired two per line.
    pub fn dump_regs(&mut self, reg_file: &RegFile) {
        if !self.enabled(self.flags.regs) {
            return;
        }

        self.emit(format_args!("Registers:"));
        for i in (0..REGFILE_CNT).step_by(2) {
            self.emit(format_args!(
                " | {:>4}: {:#018x} | {:>4}: {:#018x} |",
                reg_name(self.flags.abi, i),
                reg_file[i],
                reg_name(self.flags.abi, i + 1),
                reg_file[i + 1],
            ));
        }
    }
}
