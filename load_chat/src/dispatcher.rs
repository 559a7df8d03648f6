//! Runs one message through resolution, forecasting and formatting

use crate::formatter::{forecast_response, reply_text, Response};
use crate::intent::{IntentMatch, IntentResolver};
use crate::session::{SessionContext, Speaker};
use crate::Result;
use load_forecast::{ForecastEngine, LoadModel};

/// Handles user messages one at a time
#[derive(Debug)]
pub struct Dispatcher<M: LoadModel> {
    resolver: IntentResolver,
    engine: ForecastEngine<M>,
}

impl<M: LoadModel> Dispatcher<M> {
    /// Create a dispatcher
    pub fn new(resolver: IntentResolver, engine: ForecastEngine<M>) -> Self {
        Self { resolver, engine }
    }

    /// Get the resolver
    pub fn resolver(&self) -> &IntentResolver {
        &self.resolver
    }

    /// Get the forecast engine
    pub fn engine(&self) -> &ForecastEngine<M> {
        &self.engine
    }

    /// Answer `text` and record the exchange in the session history
    ///
    /// Forecast failures are returned as errors and only the user's turn is
    /// recorded. Every other message produces a reply.
    pub fn handle(&self, session: &mut SessionContext, text: &str) -> Result<Response> {
        session.record(Speaker::User, text);

        let intent = self.resolver.resolve(text, &session.resolve_context());
        tracing::info!(intent = intent.kind(), user = session.username(), "message resolved");

        let response = match &intent {
            IntentMatch::Forecast(request) => {
                let table = self.engine.forecast_request(request)?;
                forecast_response(request, table)
            }
            other => Response::Text(reply_text(other).unwrap_or_default()),
        };

        session.record(Speaker::Bot, response.history_text());
        Ok(response)
    }
}
