use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ttk_calculator::catalog::Catalog;
use ttk_calculator::combat::{shot_breakdown, shots_to_kill, Shield, WeaponProfile};
use ttk_calculator::comparison::build_comparison;

fn bench_shots_to_kill(c: &mut Criterion) {
    let weapon = WeaponProfile::new(6.0, 30);
    let heavy = Shield::heavy();

    c.bench_function("shots_to_kill_heavy_shield", |b| {
        b.iter(|| shots_to_kill(black_box(&weapon), Some(black_box(&heavy.profile)), false))
    });
    c.bench_function("shot_breakdown_heavy_shield", |b| {
        b.iter(|| shot_breakdown(black_box(&weapon), Some(black_box(&heavy.profile)), false))
    });
}

fn bench_comparison_table(c: &mut Criterion) {
    let catalog = Catalog::with_defaults();
    c.bench_function("comparison_table_full", |b| {
        b.iter(|| build_comparison(black_box(&catalog), ""))
    });
}

criterion_group!(benches, bench_shots_to_kill, bench_comparison_table);
criterion_main!(benches);
