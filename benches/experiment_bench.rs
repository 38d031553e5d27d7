use clepsydra::simulation::Experiment;
use clepsydra::ExperimentConfig;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn fitting_config() -> ExperimentConfig {
    ExperimentConfig {
        pop_size: 300,
        p_daily: 0.1,
        clutch_size: 5,
        ..Default::default()
    }
    .with_weekly_food(22, 14)
}

fn bench_advance_one_day(c: &mut Criterion) {
    let mut warmed = Experiment::new(fitting_config()).unwrap();
    warmed.run(30);

    c.bench_function("advance_one_day_after_30_days", |b| {
        b.iter_batched(
            || warmed.clone(),
            |mut experiment| {
                experiment.advance_one_day();
                black_box(experiment.day())
            },
            criterion::BatchSize::SmallInput,
        )
    });
}

fn bench_fitting_run(c: &mut Criterion) {
    // One objective evaluation of the fitting driver: 22 weeks
    c.bench_function("run_154_days", |b| {
        b.iter(|| {
            let mut experiment = Experiment::new(fitting_config()).unwrap();
            experiment.run(154);
            black_box(experiment.weekly_mortality())
        })
    });
}

criterion_group!(benches, bench_advance_one_day, bench_fitting_run);
criterion_main!(benches);
