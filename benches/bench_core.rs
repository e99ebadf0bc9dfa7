use criterion::{Criterion, black_box, criterion_group, criterion_main};

use rvcore::{
    RvCore,
    device::{MemBus, ram::Ram},
    diag::Tracer,
};

const PROGRAM_LEN: usize = 1024;

fn build_core() -> RvCore {
    // A straight run of addi x1, x1, 1.
    let mut ram = Ram::new(PROGRAM_LEN * 4);
    let addi: u32 = 0x13 | (1 << 7) | (1 << 15) | (1 << 20);
    for i in 0..PROGRAM_LEN {
        ram.insert_section(&addi.to_le_bytes(), (i * 4) as u64);
    }

    let mut bus = MemBus::new();
    bus.map(0, (PROGRAM_LEN * 4) as u64, Box::new(ram));
    RvCore::new(bus, Tracer::off())
}

fn bench_step_loop(c: &mut Criterion) {
    let mut group = c.benchmark_group("step_loop");
    group.sample_size(50);

    let mut core = build_core();
    group.bench_function("addi_chain", |b| {
        b.iter(|| {
            core.set_pc(0);
            for _ in 0..PROGRAM_LEN {
                black_box(core.step());
            }
        })
    });

    group.finish();
}

criterion_group!(benches, bench_step_loop);
criterion_main!(benches);
