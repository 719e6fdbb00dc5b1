use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ets_infoplus::{evaluate, infer_conditions, HtmlFormatter};

fn bench_inference(c: &mut Criterion) {
    let all: Vec<u32> = (1..=12).collect();

    c.bench_function("infer_single_symptom", |b| {
        b.iter(|| infer_conditions(black_box([4u32])))
    });

    c.bench_function("infer_all_symptoms", |b| {
        b.iter(|| infer_conditions(black_box(all.iter().copied())))
    });

    c.bench_function("evaluate_and_render_html", |b| {
        b.iter(|| {
            let report = evaluate(black_box(&all)).unwrap();
            HtmlFormatter::format_evaluation(&report)
        })
    });
}

criterion_group!(benches, bench_inference);
criterion_main!(benches);
