//! Pancha Pakshi match prediction.
//!
//! Builds on `pakshi_base` to score two participants at an instant, resolve
//! toss and match outcomes, and simulate dominance across a match.
//!
//! ```ignore
//! let request = MatchRequest::new("India", "Australia", captain_a, captain_b,
//!     start, LunarPhase::Waxing, MatchFormat::T20, GeoLocation::new(19.07, 72.87));
//! let prediction = compute_prediction(&request)?;
//! ```

pub mod config;
pub mod error;
pub mod flow;
pub mod narrative;
pub mod prediction;
pub mod prediction_types;
pub mod scoring;
pub mod snapshot;
pub mod snapshot_types;

pub use config::{FlowConfig, PredictionConfig};
pub use error::PredictError;
pub use flow::{FlowPoint, MatchFormat, Matchup, adjusted_powers, dominance_counts, generate_flow};
pub use narrative::{
    CHAT_EMPTY, CHAT_FALLBACK, ChatMessage, ChatRole, NarrativeError, Narrator, SUMMARY_EMPTY,
    SUMMARY_FALLBACK, TemplateNarrator, chat_context, chat_or_fallback, insight_context,
    summarize_or_fallback,
};
pub use prediction::{compute_prediction, compute_prediction_with};
pub use prediction_types::{DEFAULT_TOSS_LEAD_MINUTES, MatchRequest, Prediction};
pub use scoring::{Side, Verdict, match_verdict, toss_winner, verdict_from_powers, win_probability};
pub use snapshot::{instant_context, snapshot, snapshot_at, weekday_name};
pub use snapshot_types::{InstantContext, Snapshot};
