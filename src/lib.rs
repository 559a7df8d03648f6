//! # Gridcast
//!
//! Umbrella crate for the Gridcast workspace. It re-exports the member
//! crates so callers can depend on a single package:
//!
//! - [`math`]: calendar helpers and model feature vectors
//! - [`forecast`]: the forecast engine, models and table export
//! - [`chat`]: intent resolution and reply formatting
//!
//! ## Example
//!
//! ```
//! use chrono::NaiveDate;
//! use gridcast_workspace::chat::{Dispatcher, IntentResolver, Response, SessionContext};
//! use gridcast_workspace::forecast::{ForecastEngine, LinearLoadModel};
//!
//! let model = LinearLoadModel::new("flat", 1500.0, [0.0; 10]).unwrap();
//! let dispatcher = Dispatcher::new(IntentResolver::default(), ForecastEngine::new(model));
//! let mut session = SessionContext::new("asha", NaiveDate::from_ymd_opt(2024, 6, 15).unwrap());
//!
//! let reply = dispatcher.handle(&mut session, "forecast the load").unwrap();
//! assert_eq!(
//!     reply,
//!     Response::Text("Forecasted Load for 2024-06-15: 1500.00 MW".to_string())
//! );
//! ```

pub use load_chat as chat;
pub use load_forecast as forecast;
pub use load_math as math;

/// Version of the workspace facade
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
