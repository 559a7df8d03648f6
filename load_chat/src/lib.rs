//! # Load Chat
//!
//! `load_chat` answers free-text questions about electricity load. Each
//! message is classified by a small rule-based resolver and either answered
//! from canned text or turned into a forecast request for `load_forecast`.
//!
//! ## Usage Example
//!
//! ```no_run
//! use chrono::NaiveDate;
//! use load_chat::{Dispatcher, IntentResolver, Response, SessionContext};
//! use load_forecast::{ForecastEngine, LinearLoadModel};
//!
//! let model = LinearLoadModel::from_json_file("models/delhi_load_linear.json").unwrap();
//! let dispatcher = Dispatcher::new(IntentResolver::default(), ForecastEngine::new(model));
//!
//! let today = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
//! let mut session = SessionContext::new("asha", today);
//!
//! match dispatcher.handle(&mut session, "forecast for 7 days").unwrap() {
//!     Response::Text(text) => println!("{}", text),
//!     Response::Table(table) => println!("{} days forecast", table.len()),
//! }
//! ```

use thiserror::Error;

pub mod accounts;
pub mod dates;
pub mod dispatcher;
pub mod facts;
pub mod fallback;
pub mod formatter;
pub mod intent;
pub mod session;

pub use accounts::{AccountError, CredentialStore, InMemoryCredentialStore, SignupForm, UserRecord};
pub use dispatcher::Dispatcher;
pub use facts::FactBook;
pub use fallback::{FallbackError, FallbackGenerator, StaticFallback, UnavailableFallback};
pub use formatter::Response;
pub use intent::{FallbackOutcome, IntentMatch, IntentResolver, ResolveContext};
pub use session::{ConversationTurn, SessionContext, Speaker};

/// Errors that can occur while answering a message
#[derive(Error, Debug)]
pub enum ChatError {
    #[error("Forecast failed: {0}")]
    Forecast(#[from] load_forecast::ForecastError),

    #[error("Account error: {0}")]
    Account(#[from] AccountError),
}

/// Result type for chat operations
pub type Result<T> = std::result::Result<T, ChatError>;
