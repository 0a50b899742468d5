criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        normalizing_raw_input,
        sampling_robot_choice,
        settling_all_outcomes,
        playing_full_round,
}

fn normalizing_raw_input(c: &mut criterion::Criterion) {
    c.bench_function("normalize a padded mixed-case choice", |b| {
        b.iter(|| Choice::try_from(criterion::black_box("  ScIsSoRs \n")))
    });
}

fn sampling_robot_choice(c: &mut criterion::Criterion) {
    let mut robot = Robot::new(SmallRng::seed_from_u64(0));
    c.bench_function("sample a uniform Robot choice", |b| {
        b.iter(|| robot.choose())
    });
}

fn settling_all_outcomes(c: &mut criterion::Criterion) {
    c.bench_function("settle the full 3x3 outcome grid", |b| {
        b.iter(|| {
            Choice::all()
                .into_iter()
                .flat_map(|u| Choice::all().into_iter().map(move |c| (u, c)))
                .map(Outcome::from)
                .filter(|o| *o == Outcome::UserWins)
                .count()
        })
    });
}

fn playing_full_round(c: &mut criterion::Criterion) {
    c.bench_function("play one Table round in memory", |b| {
        b.iter(|| {
            let robot = Robot::new(SmallRng::seed_from_u64(0));
            Table::new("rock\n".as_bytes(), std::io::sink(), robot).play()
        })
    });
}

use rand::SeedableRng;
use rand::rngs::SmallRng;
use roshambo::*;
