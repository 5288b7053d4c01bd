// benches/render_stats.rs
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use defcon_courses::{
    course::{CourseList, CourseRecord},
    csv, render,
    stats::Stats,
};

fn sample(n: usize) -> CourseList {
    let levels = ["Beginner", "Intermediate", "Advanced", ""];
    (0..n)
        .map(|i| CourseRecord {
            name: Some(format!("Course {i}")),
            trainers: Some(format!("Trainer {}", i % 17)),
            dates: Some(format!("August {}-{}, 2025", 9 + i % 3, 10 + i % 3)),
            time: Some("8:00 to 17:00".into()),
            venue: Some("LVCC".into()),
            cost: (i % 5 != 0).then(|| format!("${},{:03}", 1 + i % 7, (i * 37) % 1000)),
            difficulty: Some(levels[i % levels.len()].into()),
        })
        .collect::<Vec<_>>()
        .into()
}

fn bench_pipeline(c: &mut Criterion) {
    let list = sample(500);

    c.bench_function("render_rows_500", |b| {
        b.iter(|| black_box(render::rows(black_box(&list))).len())
    });

    c.bench_function("stats_500", |b| {
        b.iter(|| black_box(Stats::compute(black_box(list.as_slice()))))
    });

    c.bench_function("csv_500", |b| {
        b.iter(|| black_box(csv::to_export_string(black_box(list.as_slice()))).len())
    });
}

criterion_group!(benches, bench_pipeline);
criterion_main!(benches);
