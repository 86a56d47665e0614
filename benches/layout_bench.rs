use parliament_chart::api::samples::load_sample;
use parliament_chart::api::{ChartEngine, ChartEngineConfig, ChartOptions, assemble};
use parliament_chart::core::{Side, arch_positions, block_positions};
use parliament_chart::render::SvgRenderer;
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn bench_arch_positions_500(c: &mut Criterion) {
    c.bench_function("arch_positions_500", |b| {
        b.iter(|| {
            let _ = arch_positions(black_box(500));
        })
    });
}

fn bench_arch_positions_2000(c: &mut Criterion) {
    c.bench_function("arch_positions_2000", |b| {
        b.iter(|| {
            let _ = arch_positions(black_box(2_000));
        })
    });
}

fn bench_westminster_500(c: &mut Criterion) {
    let chart = load_sample("westminster-500").expect("sample");
    let options = ChartOptions::default();

    c.bench_function("westminster_assemble_500", |b| {
        b.iter(|| {
            let _ = assemble(black_box(&chart.spec), black_box(&options));
        })
    });
    c.bench_function("block_positions_260", |b| {
        b.iter(|| {
            let _ = block_positions(black_box(260), Side::Government);
        })
    });
}

fn bench_svg_render_arch_500(c: &mut Criterion) {
    let mut engine =
        ChartEngine::new(SvgRenderer::new(), ChartEngineConfig::default()).expect("engine init");
    engine.load(load_sample("arch-500").expect("sample"));

    c.bench_function("svg_render_arch_500", |b| {
        b.iter(|| {
            engine.render().expect("render should succeed");
            black_box(engine.renderer().document().len());
        })
    });
}

criterion_group!(
    benches,
    bench_arch_positions_500,
    bench_arch_positions_2000,
    bench_westminster_500,
    bench_svg_render_arch_500
);
criterion_main!(benches);
