mod cities;
mod config;
mod error;
mod venue;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use pakshi_base::{
    ALL_BIRDS, ALL_PHASES, DayTime, LunarPhase, Nakshatra, Participant, SunTimesResult,
    bird_from_nakshatra, nakshatra_from_birth_date, resolve_bird, rulers_at, sun_times,
};
use pakshi_predict::{
    MatchFormat, MatchRequest, Prediction, TemplateNarrator, compute_prediction_with,
    instant_context, snapshot_at, summarize_or_fallback, weekday_name,
};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use crate::config::CliConfig;
use crate::error::CliError;
use crate::venue::{Venue, VenueQuery, parse_date, parse_local_time, resolve_venue};

#[derive(Parser)]
#[command(name = "pakshi", about = "Pancha Pakshi cricket match predictions")]
struct Cli {
    /// TOML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct LocationArgs {
    /// Venue city (see the built-in table)
    #[arg(long)]
    city: Option<String>,
    /// Latitude in degrees, north positive (with --lng)
    #[arg(long, allow_hyphen_values = true)]
    lat: Option<f64>,
    /// Longitude in degrees, east positive (with --lat)
    #[arg(long, allow_hyphen_values = true)]
    lng: Option<f64>,
    /// Local UTC offset in minutes (e.g. 330 for IST)
    #[arg(long, allow_hyphen_values = true)]
    utc_offset: Option<i32>,
}

#[derive(Args)]
struct PersonArgs {
    /// Name (its first letter is the last fallback)
    name: String,
    /// Birth star name (e.g. Magam)
    #[arg(long)]
    star: Option<String>,
    /// Birth date, YYYY-MM-DD
    #[arg(long)]
    birth_date: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate the birth star for a date
    Star {
        /// Birth date, YYYY-MM-DD
        date: String,
    },
    /// Resolve a person's bird in both phases
    Bird {
        #[command(flatten)]
        person: PersonArgs,
    },
    /// Sunrise and sunset for a date and venue
    Sun {
        /// Date, YYYY-MM-DD
        #[arg(long)]
        date: String,
        #[command(flatten)]
        location: LocationArgs,
    },
    /// Yama, ruling bird, and every bird's activity at an instant
    Yama {
        /// Local time, YYYY-MM-DDTHH:MM or RFC 3339
        #[arg(long)]
        at: String,
        /// Lunar phase: waxing or waning
        #[arg(long, default_value = "waxing")]
        phase: String,
        #[command(flatten)]
        location: LocationArgs,
    },
    /// Predict toss, match winner, and match flow
    Predict {
        #[arg(long)]
        team_a: String,
        #[arg(long)]
        team_b: String,
        /// Team A captain's name (default: the team name)
        #[arg(long)]
        captain_a: Option<String>,
        #[arg(long)]
        star_a: Option<String>,
        #[arg(long)]
        birth_a: Option<String>,
        /// Team B captain's name (default: the team name)
        #[arg(long)]
        captain_b: Option<String>,
        #[arg(long)]
        star_b: Option<String>,
        #[arg(long)]
        birth_b: Option<String>,
        /// Match start, local time
        #[arg(long)]
        at: String,
        /// Toss time, local (default: 30 minutes before the start)
        #[arg(long)]
        toss: Option<String>,
        /// Lunar phase: waxing or waning
        #[arg(long, default_value = "waxing")]
        phase: String,
        /// Match format: t20 or odi
        #[arg(long, default_value = "t20")]
        format: String,
        #[command(flatten)]
        location: LocationArgs,
        /// Print the prediction as JSON
        #[arg(long)]
        json: bool,
        /// Append a narrative summary
        #[arg(long)]
        narrate: bool,
    },
}

#[derive(Serialize)]
struct PredictOutput<'a> {
    venue: &'a str,
    prediction: &'a Prediction,
    summary: Option<&'a str>,
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("pakshi=info")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<&PathBuf>) -> Result<CliConfig, CliError> {
    match path {
        Some(p) => {
            let config = CliConfig::load(p)?;
            tracing::debug!(path = %p.display(), "loaded config");
            Ok(config)
        }
        None => Ok(CliConfig::default()),
    }
}

fn venue_from_args(args: &LocationArgs, config: &CliConfig) -> Result<Venue, CliError> {
    resolve_venue(&VenueQuery {
        city: args.city.as_deref(),
        lat: args.lat,
        lng: args.lng,
        utc_offset_min: args.utc_offset,
        default_city: config.default_city.as_deref(),
    })
}

/// Captain's name, or the team name when none or a blank one is given.
fn captain_name<'a>(captain: Option<&'a str>, team: &'a str) -> &'a str {
    captain.filter(|c| !c.trim().is_empty()).unwrap_or(team)
}

fn participant(
    name: &str,
    star: Option<&str>,
    birth_date: Option<&str>,
) -> Result<Participant, CliError> {
    let mut p = Participant::named(name);
    if let Some(s) = star {
        p = p.with_star(s.parse::<Nakshatra>()?);
    }
    if let Some(d) = birth_date {
        parse_date(d)?;
        p = p.with_birth_date(d);
    }
    Ok(p)
}

fn print_prediction(p: &Prediction, venue: &Venue) {
    println!("{} vs {} ({}) at {}", p.team_a, p.team_b, p.format, venue.name);
    println!(
        "{} {}, {}",
        p.day_of_week,
        p.match_time.format("%Y-%m-%d %H:%M"),
        p.phase
    );
    println!("Sunrise {}  Sunset {}", p.sunrise, p.sunset);
    if p.solar_fallback {
        println!("(no sunrise/sunset at this latitude; using 06:00/18:00)");
    }
    println!(
        "{} yama {}, ruling bird {}",
        p.day_time, p.time_slot, p.ruling_bird
    );
    println!();
    for (team, res, color, snap) in [
        (&p.team_a, p.bird_a, p.color_a, p.match_a),
        (&p.team_b, p.bird_b, p.color_b, p.match_b),
    ] {
        println!(
            "{:<16} {} [{}] via {:?}: {}, {}, power {}",
            team,
            res.bird,
            color.name(),
            res.source,
            snap.activity,
            snap.relation.label(),
            snap.power
        );
    }
    println!();
    println!(
        "Toss ({}): {}",
        p.toss_time.format("%H:%M"),
        p.toss_winner_label
    );
    println!(
        "Winner: {} ({:.1}%)",
        p.winner_label, p.win_probability
    );
    println!();
    println!("{:<6} {:>6} {:>6}  {:<16}", "Time", "A", "B", "Dominant");
    for f in &p.match_flow {
        println!(
            "{:<6} {:>6} {:>6}  {:<16} {} / {}",
            f.time,
            f.power_a,
            f.power_b,
            f.dominant_team,
            f.activity_a.english_name(),
            f.activity_b.english_name()
        );
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let config = load_config(cli.config.as_ref())?;

    match cli.command {
        Commands::Star { date } => {
            let date = parse_date(&date)?;
            let star = nakshatra_from_birth_date(date);
            println!("{} (index {})", star, star.index());
            for phase in ALL_PHASES {
                println!("  {}: {}", phase, bird_from_nakshatra(star, phase));
            }
        }

        Commands::Bird { person } => {
            let p = participant(
                &person.name,
                person.star.as_deref(),
                person.birth_date.as_deref(),
            )?;
            for phase in ALL_PHASES {
                let res = resolve_bird(&p, phase);
                println!(
                    "{}: {} [{}] via {:?}",
                    phase,
                    res.bird,
                    res.bird.color(phase).name(),
                    res.source
                );
            }
        }

        Commands::Sun { date, location } => {
            let venue = venue_from_args(&location, &config)?;
            let date = parse_date(&date)?;
            match sun_times(
                date,
                &venue.location,
                venue.utc_offset_min,
                &config.prediction.solar,
            ) {
                SunTimesResult::Times(t) => {
                    println!("{} on {} (UTC{:+} min)", venue.name, date, venue.utc_offset_min);
                    println!("Sunrise: {}", t.sunrise_label());
                    println!("Sunset:  {}", t.sunset_label());
                    println!(
                        "Day yama: {:.1} min, night yama: {:.1} min",
                        t.day_span_min() / 5.0,
                        t.night_span_min() / 5.0
                    );
                }
                SunTimesResult::NeverRises => println!("{}: Sun never rises on {date}", venue.name),
                SunTimesResult::NeverSets => println!("{}: Sun never sets on {date}", venue.name),
            }
        }

        Commands::Yama {
            at,
            phase,
            location,
        } => {
            let venue = venue_from_args(&location, &config)?;
            let phase: LunarPhase = phase.parse()?;
            let instant = parse_local_time(&at, venue.utc_offset_min)?;
            let ctx = instant_context(&instant, phase, &venue.location, &config.prediction.solar);
            println!(
                "{} {} ({}), {}",
                venue.name,
                instant.format("%Y-%m-%d %H:%M"),
                weekday_name(ctx.weekday),
                phase
            );
            println!(
                "Sunrise {}  Sunset {}{}",
                ctx.sun.sunrise_label(),
                ctx.sun.sunset_label(),
                if ctx.solar_fallback { " (fixed)" } else { "" }
            );
            println!(
                "{} yama {} ({:.0} of {:.0} min elapsed)",
                ctx.yama.day_time, ctx.yama.yama, ctx.yama.elapsed_min, ctx.yama.span_min
            );
            println!("Ruling bird: {}", ctx.ruling_bird);
            for bird in ALL_BIRDS {
                let snap = snapshot_at(bird, &ctx);
                println!(
                    "  {:<20} {:<18} {:<16} {:>4}",
                    bird.to_string(),
                    snap.activity.to_string(),
                    snap.relation.label(),
                    snap.power
                );
            }
            if ctx.yama.day_time.is_night() && phase == LunarPhase::Waning {
                let rulers = rulers_at(ctx.weekday, DayTime::Night, phase, ctx.yama.yama);
                if rulers.len() != 1 {
                    println!("Note: {} birds in Rule this yama", rulers.len());
                }
            }
        }

        Commands::Predict {
            team_a,
            team_b,
            captain_a,
            star_a,
            birth_a,
            captain_b,
            star_b,
            birth_b,
            at,
            toss,
            phase,
            format,
            location,
            json,
            narrate,
        } => {
            let venue = venue_from_args(&location, &config)?;
            let phase: LunarPhase = phase.parse()?;
            let format: MatchFormat = format.parse()?;
            let start = parse_local_time(&at, venue.utc_offset_min)?;

            let captain_a = participant(
                captain_name(captain_a.as_deref(), &team_a),
                star_a.as_deref(),
                birth_a.as_deref(),
            )?;
            let captain_b = participant(
                captain_name(captain_b.as_deref(), &team_b),
                star_b.as_deref(),
                birth_b.as_deref(),
            )?;
            let mut request = MatchRequest::new(
                team_a,
                team_b,
                captain_a,
                captain_b,
                start,
                phase,
                format,
                venue.location,
            );
            if let Some(t) = toss {
                request = request.with_toss_time(parse_local_time(&t, venue.utc_offset_min)?);
            }

            let prediction = compute_prediction_with(&request, &config.prediction)?;
            let summary = narrate.then(|| summarize_or_fallback(&TemplateNarrator, &prediction));

            if json {
                let out = PredictOutput {
                    venue: &venue.name,
                    prediction: &prediction,
                    summary: summary.as_deref(),
                };
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                print_prediction(&prediction, &venue);
                if let Some(s) = summary {
                    println!();
                    println!("{s}");
                }
            }
        }
    }
    Ok(())
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captain_defaults_to_team() {
        assert_eq!(captain_name(Some("Rohit"), "India"), "Rohit");
        assert_eq!(captain_name(None, "India"), "India");
        assert_eq!(captain_name(Some("  "), "India"), "India");
    }

    #[test]
    fn predict_without_captains_uses_team_initials() {
        let cli = Cli::try_parse_from([
            "pakshi", "predict", "--team-a", "India", "--team-b", "Australia", "--at",
            "2024-03-17T19:30",
        ])
        .unwrap();
        let Commands::Predict {
            team_a, captain_a, ..
        } = cli.command
        else {
            panic!("expected predict");
        };
        assert_eq!(captain_a, None);
        let p = participant(captain_name(captain_a.as_deref(), &team_a), None, None).unwrap();
        assert_eq!(p.name, "India");
        // "India" starts with I: Owl while waxing.
        assert_eq!(resolve_bird(&p, LunarPhase::Waxing).bird, pakshi_base::Bird::Owl);
    }
}
