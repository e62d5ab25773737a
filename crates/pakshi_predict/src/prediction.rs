//! Full match prediction: resolve both captains, score match and toss
//! instants, and simulate the match flow.

use pakshi_base::resolve_bird;

use crate::config::PredictionConfig;
use crate::error::PredictError;
use crate::flow::{Matchup, generate_flow};
use crate::prediction_types::{MatchRequest, Prediction};
use crate::scoring::{match_verdict, toss_winner, win_probability};
use crate::snapshot::{instant_context, snapshot_at, weekday_name};

/// Compute a prediction with default parameters.
pub fn compute_prediction(request: &MatchRequest) -> Result<Prediction, PredictError> {
    compute_prediction_with(request, &PredictionConfig::default())
}

/// Compute a prediction.
///
/// Fails only for an out-of-range location or config. The same request and
/// config always produce the same prediction.
pub fn compute_prediction_with(
    request: &MatchRequest,
    config: &PredictionConfig,
) -> Result<Prediction, PredictError> {
    request.location.validate()?;
    config.validate()?;

    let phase = request.phase;
    let bird_a = resolve_bird(&request.captain_a, phase);
    let bird_b = resolve_bird(&request.captain_b, phase);

    let match_ctx = instant_context(&request.match_time, phase, &request.location, &config.solar);
    let match_a = snapshot_at(bird_a.bird, &match_ctx);
    let match_b = snapshot_at(bird_b.bird, &match_ctx);

    let toss_ctx = instant_context(&request.toss_time, phase, &request.location, &config.solar);
    let toss_a = snapshot_at(bird_a.bird, &toss_ctx);
    let toss_b = snapshot_at(bird_b.bird, &toss_ctx);

    let winner = match_verdict(&match_a, &match_b);
    let toss = toss_winner(&toss_a, &toss_b);

    let matchup = Matchup {
        team_a: &request.team_a,
        bird_a: bird_a.bird,
        team_b: &request.team_b,
        bird_b: bird_b.bird,
    };
    let match_flow = generate_flow(
        &matchup,
        &request.match_time,
        phase,
        request.format.duration_minutes(),
        &request.location,
        config,
    );

    tracing::debug!(
        bird_a = %bird_a.bird,
        bird_b = %bird_b.bird,
        power_a = match_a.power,
        power_b = match_b.power,
        yama = match_ctx.yama.yama,
        ruler = %match_ctx.ruling_bird,
        "prediction resolved"
    );

    Ok(Prediction {
        team_a: request.team_a.clone(),
        team_b: request.team_b.clone(),
        captain_a: request.captain_a.clone(),
        captain_b: request.captain_b.clone(),
        match_time: request.match_time,
        toss_time: request.toss_time,

        bird_a,
        bird_b,
        color_a: bird_a.bird.color(phase),
        color_b: bird_b.bird.color(phase),

        match_a,
        match_b,
        toss_a,
        toss_b,

        winner,
        winner_label: winner.label(&request.team_a, &request.team_b).to_string(),
        toss_winner: toss,
        toss_winner_label: toss.pick(&request.team_a, &request.team_b).clone(),
        win_probability: win_probability(&match_a, &match_b),

        time_slot: match_ctx.yama.yama,
        day_time: match_ctx.yama.day_time,
        weekday: match_ctx.weekday,
        day_of_week: weekday_name(match_ctx.weekday).to_string(),
        ruling_bird: match_ctx.ruling_bird,
        phase,
        format: request.format,
        location: request.location,

        sun: match_ctx.sun,
        sunrise: match_ctx.sun.sunrise_label(),
        sunset: match_ctx.sun.sunset_label(),
        solar_fallback: match_ctx.solar_fallback,

        match_flow,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, TimeZone};
    use pakshi_base::{Bird, GeoLocation, LunarPhase, Nakshatra, Participant, PakshiError};

    use crate::flow::MatchFormat;

    fn request() -> MatchRequest {
        let start = FixedOffset::east_opt(330 * 60)
            .unwrap()
            .with_ymd_and_hms(2024, 3, 17, 19, 30, 0)
            .unwrap();
        MatchRequest::new(
            "India",
            "Australia",
            Participant::named("Rohit").with_star(Nakshatra::Magam),
            Participant::named("Pat"),
            start,
            LunarPhase::Waxing,
            MatchFormat::T20,
            GeoLocation::new(19.07, 72.87),
        )
    }

    #[test]
    fn toss_defaults_to_half_hour_before() {
        let req = request();
        assert_eq!(req.toss_time.format("%H:%M").to_string(), "19:00");
    }

    #[test]
    fn toss_before_midnight_start_is_previous_day() {
        let start = FixedOffset::east_opt(330 * 60)
            .unwrap()
            .with_ymd_and_hms(2024, 3, 18, 0, 15, 0)
            .unwrap();
        let toss = MatchRequest::default_toss_time(&start);
        assert_eq!(toss.format("%Y-%m-%d %H:%M").to_string(), "2024-03-17 23:45");
        assert!(toss < start);
    }

    #[test]
    fn labels_match_verdicts() {
        let p = compute_prediction(&request()).unwrap();
        assert_eq!(p.bird_a.bird, Bird::Owl);
        assert_eq!(p.winner_label, p.winner.label("India", "Australia"));
        assert_eq!(p.toss_winner_label, p.team(p.toss_winner));
        assert_eq!(p.day_of_week, "Sunday");
        assert_eq!(p.time_slot, p.match_a.yama);
        assert_eq!(p.ruling_bird, p.match_a.ruling_bird);
    }

    #[test]
    fn invalid_location_rejected() {
        let mut req = request();
        req.location = GeoLocation::new(95.0, 0.0);
        assert!(matches!(
            compute_prediction(&req),
            Err(PredictError::Base(PakshiError::InvalidLocation(_)))
        ));
    }

    #[test]
    fn zero_interval_rejected() {
        let mut config = PredictionConfig::default();
        config.flow.interval_minutes = 0;
        assert!(matches!(
            compute_prediction_with(&request(), &config),
            Err(PredictError::InvalidConfig(_))
        ));
    }
}
