use chrono::{FixedOffset, TimeZone};
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use pakshi_base::{Bird, GeoLocation, LunarPhase, Nakshatra, Participant};
use pakshi_predict::{
    MatchFormat, MatchRequest, Matchup, PredictionConfig, compute_prediction, generate_flow,
};

fn predict_bench(c: &mut Criterion) {
    let Some(start) = FixedOffset::east_opt(330 * 60)
        .and_then(|tz| tz.with_ymd_and_hms(2024, 3, 17, 19, 30, 0).single())
    else {
        return;
    };
    let loc = GeoLocation::new(19.07, 72.87);
    let config = PredictionConfig::default();

    let mut group = c.benchmark_group("predict");
    group.bench_function("generate_flow_odi", |b| {
        let matchup = Matchup {
            team_a: "India",
            bird_a: Bird::Owl,
            team_b: "Australia",
            bird_b: Bird::Peacock,
        };
        b.iter(|| {
            generate_flow(
                black_box(&matchup),
                &start,
                LunarPhase::Waxing,
                MatchFormat::Odi.duration_minutes(),
                &loc,
                &config,
            )
        })
    });
    group.bench_function("compute_prediction_t20", |b| {
        let req = MatchRequest::new(
            "India",
            "Australia",
            Participant::named("Rohit").with_star(Nakshatra::Magam),
            Participant::named("Pat"),
            start,
            LunarPhase::Waxing,
            MatchFormat::T20,
            loc,
        );
        b.iter(|| compute_prediction(black_box(&req)))
    });
    group.finish();
}

criterion_group!(benches, predict_bench);
criterion_main!(benches);
