//! Rule-based intent resolution
//!
//! Messages are lowercased and checked against keyword lists in a fixed
//! priority order; the first rule that matches decides the intent:
//!
//! 1. canned facts
//! 2. greetings
//! 3. forecast triggers
//! 4. vague requests
//! 5. the fallback generator

use crate::dates::extract_date;
use crate::facts::FactBook;
use crate::fallback::{FallbackGenerator, UnavailableFallback};
use chrono::NaiveDate;
use load_forecast::config::DEFAULT_HOUR;
use load_forecast::ForecastRequest;

/// Substrings that mark a greeting
pub const GREETINGS: [&str; 6] = ["hi", "hello", "hey", "hola", "good morning", "good evening"];

/// Substrings that mark a forecast request
pub const FORECAST_TRIGGERS: [&str; 4] = ["forecast", "predict", "load for", "electricity demand"];

/// Substrings that mark a request too vague to act on
pub const VAGUE_PHRASES: [&str; 4] = ["show me", "give me", "can you show", "display"];

/// Outcome of consulting the fallback generator
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FallbackOutcome {
    /// The generator produced a reply
    Generated(String),
    /// The generator failed with this message
    Failed(String),
}

/// Classified purpose of a message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntentMatch {
    /// A greeting, with the personalized reply
    Greeting(String),
    /// A known question, with its answer
    FactLookup(String),
    /// A forecast request
    Forecast(ForecastRequest),
    /// Something should be shown but it is unclear what
    VagueRequest,
    /// No rule matched
    Unrecognized(FallbackOutcome),
}

impl IntentMatch {
    /// Short label for logs
    pub fn kind(&self) -> &'static str {
        match self {
            IntentMatch::Greeting(_) => "greeting",
            IntentMatch::FactLookup(_) => "fact",
            IntentMatch::Forecast(_) => "forecast",
            IntentMatch::VagueRequest => "vague",
            IntentMatch::Unrecognized(_) => "unrecognized",
        }
    }
}

/// Caller-supplied context for resolving a message
#[derive(Debug, Clone, Copy)]
pub struct ResolveContext<'a> {
    /// Name used in personalized replies
    pub username: &'a str,
    /// Date forecasts default to when the message names none
    pub today: NaiveDate,
}

fn contains_any(text: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| text.contains(n))
}

/// Number of days requested, if any
///
/// Takes the first all-digit token for which the token `days` appears
/// anywhere later in the message. The two need not be adjacent, so
/// "3 days from forecast now" and "forecast 3 of the next days" both give 3.
/// Zero and values that overflow `u32` are ignored.
pub fn extract_horizon(text: &str) -> Option<u32> {
    let lower = text.to_lowercase();
    if !lower.contains("days") {
        return None;
    }

    let words: Vec<&str> = lower.split_whitespace().collect();
    for (i, word) in words.iter().enumerate() {
        if !word.is_empty()
            && word.chars().all(|c| c.is_ascii_digit())
            && words[i + 1..].contains(&"days")
        {
            return word.parse().ok().filter(|&days| days > 0);
        }
    }

    None
}

/// Classifies messages into intents
#[derive(Debug)]
pub struct IntentResolver {
    facts: FactBook,
    fallback: Box<dyn FallbackGenerator>,
    default_hour: u32,
}

impl Default for IntentResolver {
    fn default() -> Self {
        Self::new(Box::new(UnavailableFallback))
    }
}

impl IntentResolver {
    /// Create a resolver with the built-in facts and the given fallback
    pub fn new(fallback: Box<dyn FallbackGenerator>) -> Self {
        Self {
            facts: FactBook::default(),
            fallback,
            default_hour: DEFAULT_HOUR,
        }
    }

    /// Replace the fact book
    pub fn with_facts(mut self, facts: FactBook) -> Self {
        self.facts = facts;
        self
    }

    /// Hour used for every forecast request
    pub fn with_default_hour(mut self, hour: u32) -> Self {
        self.default_hour = hour;
        self
    }

    /// Get the fact book
    pub fn facts(&self) -> &FactBook {
        &self.facts
    }

    /// Classify `text`
    pub fn resolve(&self, text: &str, ctx: &ResolveContext<'_>) -> IntentMatch {
        let lower = text.to_lowercase();

        if let Some(answer) = self.facts.lookup(&lower, ctx.username) {
            return IntentMatch::FactLookup(answer);
        }

        if contains_any(&lower, &GREETINGS) {
            return IntentMatch::Greeting(format!(
                "Hello {}! How can I assist you with electricity load forecasting?",
                ctx.username
            ));
        }

        if contains_any(&lower, &FORECAST_TRIGGERS) {
            return IntentMatch::Forecast(self.forecast_request(&lower, ctx.today));
        }

        if contains_any(&lower, &VAGUE_PHRASES) {
            return IntentMatch::VagueRequest;
        }

        match self.fallback.generate(text) {
            Ok(reply) => IntentMatch::Unrecognized(FallbackOutcome::Generated(reply)),
            Err(e) => {
                tracing::warn!(error = %e, "fallback generator failed");
                IntentMatch::Unrecognized(FallbackOutcome::Failed(e.to_string()))
            }
        }
    }

    fn forecast_request(&self, lower: &str, today: NaiveDate) -> ForecastRequest {
        let anchor_date = extract_date(lower, today).unwrap_or_else(|| {
            tracing::debug!(%today, "no date in forecast request, using today");
            today
        });
        let horizon_days = extract_horizon(lower).unwrap_or(1);

        ForecastRequest::new(anchor_date, horizon_days, self.default_hour)
    }
}
