//! End-to-end prediction scenarios.

use chrono::{DateTime, FixedOffset, TimeZone};
use pakshi_base::{
    Activity, Bird, BirdRelation, BirdSource, DayTime, GeoLocation, LunarPhase, Nakshatra,
    Participant, SunTimes,
};
use pakshi_predict::{
    ChatMessage, MatchFormat, MatchRequest, NarrativeError, Narrator, Prediction,
    SUMMARY_EMPTY, SUMMARY_FALLBACK, Side, TemplateNarrator, Verdict, compute_prediction,
    insight_context, summarize_or_fallback,
};

const MUMBAI: GeoLocation = GeoLocation {
    latitude_deg: 19.07,
    longitude_deg: 72.87,
};

fn ist(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<FixedOffset> {
    FixedOffset::east_opt(330 * 60)
        .unwrap()
        .with_ymd_and_hms(y, m, d, h, min, 0)
        .unwrap()
}

/// Sunday 2024-03-17, 19:30 IST in Mumbai, waxing: first night yama.
fn mumbai_evening(format: MatchFormat) -> MatchRequest {
    MatchRequest::new(
        "India",
        "Australia",
        Participant::named("Rohit").with_star(Nakshatra::Magam),
        Participant::named("Pat"),
        ist(2024, 3, 17, 19, 30),
        LunarPhase::Waxing,
        format,
        MUMBAI,
    )
}

#[test]
fn mumbai_t20_shape() {
    let p = compute_prediction(&mumbai_evening(MatchFormat::T20)).unwrap();
    assert!((1..=5).contains(&p.time_slot));
    assert!(pakshi_base::ALL_BIRDS.contains(&p.ruling_bird));
    assert_eq!(p.match_flow.len(), 240 / 30 + 1);
    assert!(!p.solar_fallback);
}

#[test]
fn mumbai_t20_values() {
    let p = compute_prediction(&mumbai_evening(MatchFormat::T20)).unwrap();

    // Magam is in the second star group: Owl while waxing.
    assert_eq!(p.bird_a.bird, Bird::Owl);
    assert_eq!(p.bird_a.source, BirdSource::Star(Nakshatra::Magam));
    // "Pat" falls in the O class: Peacock while waxing.
    assert_eq!(p.bird_b.bird, Bird::Peacock);

    assert_eq!(p.day_of_week, "Sunday");
    assert_eq!(p.day_time, DayTime::Night);
    assert_eq!(p.time_slot, 1);
    assert_eq!(p.ruling_bird, Bird::Owl);

    // Owl rules: 100 + 20. Peacock walks as Owl's enemy: 50 - 10.
    assert_eq!(p.match_a.activity, Activity::Rule);
    assert_eq!(p.match_a.relation, BirdRelation::Itself);
    assert_eq!(p.match_a.power, 120);
    assert_eq!(p.match_b.activity, Activity::Walk);
    assert_eq!(p.match_b.relation, BirdRelation::Enemy);
    assert_eq!(p.match_b.power, 40);

    assert_eq!(p.winner, Verdict::Winner(Side::A));
    assert_eq!(p.winner_label, "India");
    assert_eq!(p.win_probability, 76.0);

    // Toss at 19:00 is still the first night yama.
    assert_eq!(p.toss_a.yama, 1);
    assert_eq!(p.toss_a.day_time, DayTime::Night);
    assert_eq!(p.toss_winner, Side::A);
    assert_eq!(p.toss_winner_label, "India");
}

#[test]
fn mumbai_flow_changes_hands() {
    let p = compute_prediction(&mumbai_evening(MatchFormat::T20)).unwrap();
    let flow = &p.match_flow;

    // 19:30: Owl rules and Peacock does not, so side A gets the bonus.
    assert_eq!(flow[0].time, "19:30");
    assert_eq!((flow[0].power_a, flow[0].power_b), (150, 40));
    assert_eq!(flow[0].dominant_team, "India");

    // 21:30 is the second night yama: Peacock has rotated into Rule and Owl
    // into Sleep.
    assert_eq!(flow[4].time, "21:30");
    assert_eq!(flow[4].activity_a, Activity::Sleep);
    assert_eq!(flow[4].activity_b, Activity::Rule);
    assert_eq!((flow[4].power_a, flow[4].power_b), (15, 150));
    assert_eq!(flow[4].dominant_team, "Australia");
}

#[test]
fn odi_flow_has_seventeen_points() {
    let p = compute_prediction(&mumbai_evening(MatchFormat::Odi)).unwrap();
    assert_eq!(p.match_flow.len(), 480 / 30 + 1);
    assert_eq!(p.match_flow[16].time, "03:30");
}

#[test]
fn repeated_calls_are_identical() {
    let req = mumbai_evening(MatchFormat::T20);
    let a = serde_json::to_string(&compute_prediction(&req).unwrap()).unwrap();
    let b = serde_json::to_string(&compute_prediction(&req).unwrap()).unwrap();
    assert_eq!(a, b);
}

#[test]
fn same_captain_bird_draws_and_toss_goes_to_b() {
    let req = MatchRequest::new(
        "Chennai",
        "Kolkata",
        Participant::named("Arun"),
        Participant::named("Anil"),
        ist(2024, 3, 17, 10, 0),
        LunarPhase::Waxing,
        MatchFormat::T20,
        MUMBAI,
    );
    let p = compute_prediction(&req).unwrap();
    assert_eq!(p.bird_a.bird, p.bird_b.bird);
    assert_eq!(p.winner, Verdict::Draw);
    assert_eq!(p.winner_label, "Draw");
    assert_eq!(p.win_probability, 50.0);
    assert_eq!(p.toss_winner, Side::B);
    assert!(p.match_flow.iter().all(|f| f.dominant == Verdict::Draw));
}

#[test]
fn polar_venue_uses_fixed_boundary() {
    let req = MatchRequest::new(
        "Tromso",
        "Bodo",
        Participant::named("Ola"),
        Participant::named("Kari"),
        FixedOffset::east_opt(7200)
            .unwrap()
            .with_ymd_and_hms(2024, 6, 21, 13, 0, 0)
            .unwrap(),
        LunarPhase::Waning,
        MatchFormat::T20,
        GeoLocation::new(69.65, 18.96),
    );
    let p = compute_prediction(&req).unwrap();
    assert!(p.solar_fallback);
    assert_eq!(p.sun, SunTimes::CONVENTIONAL);
    assert_eq!(p.sunrise, "06:00");
    assert_eq!(p.sunset, "18:00");
    assert_eq!(p.day_time, DayTime::Day);
    assert_eq!(p.time_slot, 3);
}

#[test]
fn template_summary_and_context() {
    let p = compute_prediction(&mumbai_evening(MatchFormat::T20)).unwrap();

    let summary = summarize_or_fallback(&TemplateNarrator, &p);
    assert!(summary.starts_with("In yama 1 of the night on Sunday, the Owl rules."));
    assert!(summary.ends_with("India (Owl) is favoured at 76%."));

    let ctx = insight_context(&p);
    assert!(ctx.contains("Match: India vs Australia\n"));
    assert!(ctx.contains("Time Slot (Yama): 1 (Night)\n"));
    assert!(ctx.contains("Winner Predicted: India\n"));
}

/// Narrator that always answers with a fixed result.
struct Canned(Result<String, NarrativeError>);

impl Narrator for Canned {
    fn summarize(&self, _p: &Prediction) -> Result<String, NarrativeError> {
        self.0.clone()
    }

    fn chat(&self, _h: &[ChatMessage], _m: &str) -> Result<String, NarrativeError> {
        self.0.clone()
    }
}

#[test]
fn summary_degrades_to_fixed_text() {
    let p = compute_prediction(&mumbai_evening(MatchFormat::T20)).unwrap();

    let failing = Canned(Err(NarrativeError::Service("timeout".into())));
    assert_eq!(summarize_or_fallback(&failing, &p), SUMMARY_FALLBACK);

    let unavailable = Canned(Err(NarrativeError::Unavailable("no key")));
    assert_eq!(summarize_or_fallback(&unavailable, &p), SUMMARY_FALLBACK);

    let blank = Canned(Ok("  ".into()));
    assert_eq!(summarize_or_fallback(&blank, &p), SUMMARY_EMPTY);

    let ok = Canned(Ok("The Owl soars.".into()));
    assert_eq!(summarize_or_fallback(&ok, &p), "The Owl soars.");
}

#[test]
fn side_accessors() {
    let p = compute_prediction(&mumbai_evening(MatchFormat::T20)).unwrap();
    assert_eq!(p.team(Side::A), "India");
    assert_eq!(p.team(Side::B), "Australia");
    assert_eq!(p.bird(Side::A), Bird::Owl);
    assert_eq!(p.bird(Side::B), Bird::Peacock);
}
