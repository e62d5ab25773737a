//! Seam for an external text-generation service that narrates predictions.
//!
//! The engine never depends on a narrator succeeding: failures degrade to
//! fixed strings. [`TemplateNarrator`] is a deterministic local
//! implementation with no chat support.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::prediction_types::Prediction;
use crate::scoring::Verdict;

/// Summary returned when the narrator fails.
pub const SUMMARY_FALLBACK: &str = "The cosmic connection is currently weak.";
/// Summary returned when the narrator answers with nothing.
pub const SUMMARY_EMPTY: &str = "The stars are silent currently.";
/// Chat reply returned when the narrator fails.
pub const CHAT_FALLBACK: &str = "The spirits are disturbed.";
/// Chat reply returned when the narrator answers with nothing.
pub const CHAT_EMPTY: &str = "I cannot foresee that.";

/// Errors reported by a narrator.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum NarrativeError {
    /// The narrator cannot serve this request at all.
    #[error("narrator unavailable: {0}")]
    Unavailable(&'static str),
    /// The backing service returned an error.
    #[error("narrator service error: {0}")]
    Service(String),
}

/// Author of a chat turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Model,
}

/// One turn of chat history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub text: String,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            text: text.into(),
        }
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Model,
            text: text.into(),
        }
    }
}

/// Produces free text about a prediction.
pub trait Narrator {
    /// Short interpretation of a prediction.
    fn summarize(&self, prediction: &Prediction) -> Result<String, NarrativeError>;

    /// Reply to `message` given prior `history`.
    fn chat(&self, history: &[ChatMessage], message: &str) -> Result<String, NarrativeError>;
}

fn or_fallback(
    result: Result<String, NarrativeError>,
    empty: &str,
    fallback: &str,
    what: &str,
) -> String {
    match result {
        Ok(text) if text.trim().is_empty() => empty.to_string(),
        Ok(text) => text,
        Err(err) => {
            tracing::warn!(%err, what, "narrator failed, using fallback text");
            fallback.to_string()
        }
    }
}

/// Summary text, or the fixed fallback on failure.
pub fn summarize_or_fallback<N: Narrator + ?Sized>(narrator: &N, prediction: &Prediction) -> String {
    or_fallback(
        narrator.summarize(prediction),
        SUMMARY_EMPTY,
        SUMMARY_FALLBACK,
        "summary",
    )
}

/// Chat reply, or the fixed fallback on failure.
pub fn chat_or_fallback<N: Narrator + ?Sized>(
    narrator: &N,
    history: &[ChatMessage],
    message: &str,
) -> String {
    or_fallback(
        narrator.chat(history, message),
        CHAT_EMPTY,
        CHAT_FALLBACK,
        "chat",
    )
}

/// Read-only facts about a prediction, one per line, for a narrator to
/// interpret.
pub fn insight_context(p: &Prediction) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Match: {} vs {}", p.team_a, p.team_b);
    let _ = writeln!(out, "Day: {}", p.day_of_week);
    let _ = writeln!(out, "Moon Phase: {}", p.phase);
    let _ = writeln!(out, "Time Slot (Yama): {} ({})", p.time_slot, p.day_time);
    let _ = writeln!(out, "Ruling Bird: {}", p.ruling_bird);
    let _ = writeln!(
        out,
        "{}: {}, {} ({})",
        p.team_a,
        p.bird_a.bird,
        p.match_a.activity,
        p.match_a.relation.label()
    );
    let _ = writeln!(
        out,
        "{}: {}, {} ({})",
        p.team_b,
        p.bird_b.bird,
        p.match_b.activity,
        p.match_b.relation.label()
    );
    let _ = writeln!(out, "Winner Predicted: {}", p.winner_label);
    out
}

/// Preamble for a chat session, with the active prediction if any.
pub fn chat_context(prediction: Option<&Prediction>, location: &str) -> String {
    match prediction {
        Some(p) => format!(
            "Location: {location}\nCurrent Prediction: {} vs {}, winner {}, toss {}.",
            p.team_a, p.team_b, p.winner_label, p.toss_winner_label
        ),
        None => format!("Location: {location}\nNo active prediction."),
    }
}

/// Narrator that fills a fixed template from the prediction.
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateNarrator;

impl Narrator for TemplateNarrator {
    fn summarize(&self, p: &Prediction) -> Result<String, NarrativeError> {
        let mut out = format!(
            "In yama {} of the {} on {}, the {} rules. ",
            p.time_slot,
            p.day_time.to_string().to_lowercase(),
            p.day_of_week,
            p.ruling_bird.english_name()
        );
        for (team, snap) in [(&p.team_a, &p.match_a), (&p.team_b, &p.match_b)] {
            let _ = write!(
                out,
                "{}'s {} is in {} ({}), power {}. ",
                team,
                snap.bird.english_name(),
                snap.activity.english_name(),
                snap.relation.label(),
                snap.power
            );
        }
        match p.winner {
            Verdict::Winner(side) => {
                let _ = write!(
                    out,
                    "{} ({}) is favoured at {:.0}%.",
                    p.team(side),
                    p.bird(side).english_name(),
                    p.win_probability
                );
            }
            Verdict::Draw => out.push_str("The birds are evenly matched."),
        }
        Ok(out)
    }

    fn chat(&self, _history: &[ChatMessage], _message: &str) -> Result<String, NarrativeError> {
        Err(NarrativeError::Unavailable("template narrator has no chat"))
    }
}
