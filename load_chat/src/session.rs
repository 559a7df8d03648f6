//! Per-user conversation state owned by the caller

use crate::intent::ResolveContext;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Who said something
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Speaker {
    User,
    Bot,
}

impl std::fmt::Display for Speaker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Speaker::User => write!(f, "User"),
            Speaker::Bot => write!(f, "Bot"),
        }
    }
}

/// One message in the conversation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationTurn {
    pub speaker: Speaker,
    pub text: String,
}

/// Identity, clock and history of a signed-in user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionContext {
    username: String,
    today: NaiveDate,
    history: Vec<ConversationTurn>,
}

impl SessionContext {
    /// Start a session with an empty history
    pub fn new(username: impl Into<String>, today: NaiveDate) -> Self {
        Self {
            username: username.into(),
            today,
            history: Vec::new(),
        }
    }

    /// Get the user's name
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Get the current date
    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Advance the session clock
    pub fn set_today(&mut self, today: NaiveDate) {
        self.today = today;
    }

    /// Get the conversation so far, oldest first
    pub fn history(&self) -> &[ConversationTurn] {
        &self.history
    }

    /// Append a turn
    pub fn record(&mut self, speaker: Speaker, text: impl Into<String>) {
        self.history.push(ConversationTurn {
            speaker,
            text: text.into(),
        });
    }

    /// Context handed to the intent resolver
    pub fn resolve_context(&self) -> ResolveContext<'_> {
        ResolveContext {
            username: &self.username,
            today: self.today,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_appends_in_order() {
        let mut session = SessionContext::new("asha", NaiveDate::from_ymd_opt(2026, 10, 17).unwrap());
        session.record(Speaker::User, "hi");
        session.record(Speaker::Bot, "hello");

        assert_eq!(session.history().len(), 2);
        assert_eq!(session.history()[0].speaker, Speaker::User);
        assert_eq!(session.history()[1].text, "hello");
        assert_eq!(Speaker::Bot.to_string(), "Bot");
    }

    #[test]
    fn test_resolve_context_borrows_session() {
        let session = SessionContext::new("ravi", NaiveDate::from_ymd_opt(2026, 1, 2).unwrap());
        let ctx = session.resolve_context();
        assert_eq!(ctx.username, "ravi");
        assert_eq!(ctx.today, session.today());
    }
}
