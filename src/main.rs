mod logging;

use std::io;

use clap::Parser;
use lazy_static::lazy_static;
use rvcore::{
    Emulator, StepOutcome,
    diag::{TraceFlags, WriterSink},
};

use crate::logging::LogLevel;

lazy_static! {
    static ref cli_args: Args = Args::parse();
}

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path of the target raw binary image.
    path: std::path::PathBuf,

    /// Execute exactly N steps, reporting but never stopping on per-step
    /// outcomes. Without this, run until the first non-Continue outcome.
    #[arg(short, long)]
    steps: Option<u64>,

    /// Trace decoded instructions.
    #[arg(short = 'd', long, default_value_t = false)]
    trace_decode: bool,

    /// Trace error conditions (unknown opcodes, bus faults).
    #[arg(short = 'e', long, default_value_t = false)]
    trace_errors: bool,

    /// Dump the register file after every executed instruction.
    #[arg(short = 'r', long, default_value_t = false)]
    dump_regs: bool,

    /// Enable to print more details.
    #[arg(short, long, default_value_t = false)]
    verbose: bool,

    /// Print registers by ABI role name instead of x-index name.
    #[arg(short = 'a', long, default_value_t = false)]
    abi_names: bool,

    /// Switch log level.
    #[arg(value_enum, long = "loglevel", default_value_t = LogLevel::Warn)]
    log_level: LogLevel,
}

fn main() {
    let _logger_handle = logging::init(cli_args.log_level);

    let flags = TraceFlags {
        decode: cli_args.trace_decode,
        error: cli_args.trace_errors,
        regs: cli_args.dump_regs,
        verbose: cli_args.verbose,
        abi: cli_args.abi_names,
    };

    let sink = Box::new(WriterSink::new(io::stdout()));
    let mut emulator = match Emulator::from_binary(&cli_args.path, flags, Some(sink)) {
        Ok(emulator) => emulator,
        Err(err) => {
            eprintln!("failed to load {:?}: {}", cli_args.path, err);
            std::process::exit(1);
        }
    };

    let outcome = match cli_args.steps {
        Some(n) => {
            let mut last = StepOutcome::Continue;
            for _ in 0..n {
                last = emulator.step();
            }
            last
        }
        None => emulator.run(),
    };

    match outcome {
        StepOutcome::Continue => {}
        StepOutcome::UnknownInstruction => eprintln!("stopped: unknown instruction"),
        StepOutcome::Trap(err) => eprintln!("stopped: {}", err),
    }
}
