//! Turns intents and forecasts into renderable replies

use crate::intent::{FallbackOutcome, IntentMatch};
use chrono::NaiveDate;
use load_forecast::{ForecastRequest, ForecastTable};

/// Reply to a request that names nothing concrete
pub const CLARIFICATION_PROMPT: &str = "Could you please clarify what you'd like me to show? For example, ask about electricity load forecasting or energy trends.";

/// Reply when no rule matched and the fallback generator failed
pub const APOLOGY: &str =
    "I'm still learning and couldn't understand that. Please try rephrasing your question.";

/// Caption recorded in the history for table replies
pub const TABLE_CAPTION: &str = "Forecasted Load (MW):";

/// A reply the caller can render
///
/// Callers must check which variant they got: multi-day forecasts are
/// returned as a table for tabular or graphical rendering.
#[derive(Debug, Clone, PartialEq)]
pub enum Response {
    /// A conversational message
    Text(String),
    /// A multi-day forecast
    Table(ForecastTable),
}

impl Response {
    /// Get the message, if this is a text reply
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Response::Text(text) => Some(text),
            Response::Table(_) => None,
        }
    }

    /// Get the table, if this is a table reply
    pub fn as_table(&self) -> Option<&ForecastTable> {
        match self {
            Response::Text(_) => None,
            Response::Table(table) => Some(table),
        }
    }

    /// Check if this is a table reply
    pub fn is_table(&self) -> bool {
        matches!(self, Response::Table(_))
    }

    /// Line recorded in the conversation history for this reply
    pub fn history_text(&self) -> &str {
        match self {
            Response::Text(text) => text,
            Response::Table(_) => TABLE_CAPTION,
        }
    }

    /// Render as plain text, tables as aligned columns
    pub fn render_text(&self) -> String {
        match self {
            Response::Text(text) => text.clone(),
            Response::Table(table) => render_table(table),
        }
    }
}

/// Message for a single-day forecast, load rounded to two decimals
pub fn single_day_message(date: NaiveDate, load_mw: f64) -> String {
    format!("Forecasted Load for {}: {:.2} MW", date.format("%Y-%m-%d"), load_mw)
}

/// Reply text for every intent except forecasts
pub fn reply_text(intent: &IntentMatch) -> Option<String> {
    match intent {
        IntentMatch::Greeting(text) | IntentMatch::FactLookup(text) => Some(text.clone()),
        IntentMatch::VagueRequest => Some(CLARIFICATION_PROMPT.to_string()),
        IntentMatch::Unrecognized(FallbackOutcome::Generated(text)) => Some(text.clone()),
        IntentMatch::Unrecognized(FallbackOutcome::Failed(_)) => Some(APOLOGY.to_string()),
        IntentMatch::Forecast(_) => None,
    }
}

/// Reply for a completed forecast: a message for one day, the table otherwise
///
/// The message names the date as requested; the table keeps the scored dates.
pub fn forecast_response(request: &ForecastRequest, table: ForecastTable) -> Response {
    match table.first() {
        Some(row) if request.is_single_day() => Response::Text(single_day_message(
            request.anchor_date,
            row.predicted_load_mw,
        )),
        _ => Response::Table(table),
    }
}

fn render_table(table: &ForecastTable) -> String {
    let body: String = table
        .rows()
        .iter()
        .map(|row| {
            format!(
                "{:<12}{:>20.2}\n",
                row.date.format("%Y-%m-%d").to_string(),
                row.predicted_load_mw
            )
        })
        .collect();

    format!("{}\n{:<12}{:>20}\n{}", TABLE_CAPTION, "Date", "Predicted Load (MW)", body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_single_day_message_rounds_to_two_decimals() {
        assert_eq!(
            single_day_message(date(2025, 6, 15), 1234.5),
            "Forecasted Load for 2025-06-15: 1234.50 MW"
        );
    }

    #[test]
    fn test_single_day_request_gives_text() {
        let table = ForecastTable::from_parts(vec![date(2025, 6, 15)], vec![3456.789]).unwrap();
        let request = ForecastRequest::new(date(2025, 6, 15), 1, 12);

        let response = forecast_response(&request, table);
        assert_eq!(
            response.as_text(),
            Some("Forecasted Load for 2025-06-15: 3456.79 MW")
        );
    }

    #[test]
    fn test_single_day_message_names_requested_date() {
        let table = ForecastTable::from_parts(vec![date(2025, 10, 17)], vec![1500.0]).unwrap();
        let request = ForecastRequest::new(date(2026, 10, 17), 1, 12);

        let response = forecast_response(&request, table);
        assert_eq!(
            response.as_text(),
            Some("Forecasted Load for 2026-10-17: 1500.00 MW")
        );
    }

    #[test]
    fn test_multi_day_request_gives_table() {
        let table = ForecastTable::from_parts(
            vec![date(2025, 6, 15), date(2025, 6, 16)],
            vec![1.0, 2.0],
        )
        .unwrap();
        let request = ForecastRequest::new(date(2025, 6, 15), 2, 12);

        let response = forecast_response(&request, table.clone());
        assert!(response.is_table());
        assert_eq!(response.as_table(), Some(&table));
        assert_eq!(response.history_text(), TABLE_CAPTION);
    }

    #[test]
    fn test_reply_text_per_intent() {
        assert_eq!(
            reply_text(&IntentMatch::VagueRequest).as_deref(),
            Some(CLARIFICATION_PROMPT)
        );
        assert_eq!(
            reply_text(&IntentMatch::Unrecognized(FallbackOutcome::Failed("down".into()))).as_deref(),
            Some(APOLOGY)
        );
        assert_eq!(
            reply_text(&IntentMatch::Unrecognized(FallbackOutcome::Generated("hi".into()))).as_deref(),
            Some("hi")
        );
        assert_eq!(
            reply_text(&IntentMatch::FactLookup("answer".into())).as_deref(),
            Some("answer")
        );
        let request = ForecastRequest::new(date(2025, 1, 1), 1, 12);
        assert_eq!(reply_text(&IntentMatch::Forecast(request)), None);
    }

    #[test]
    fn test_render_table() {
        let table = ForecastTable::from_parts(
            vec![date(2025, 6, 15), date(2025, 6, 16)],
            vec![1234.5, 1300.0],
        )
        .unwrap();
        let rendered = Response::Table(table).render_text();
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[0], TABLE_CAPTION);
        assert_eq!(lines[1], format!("{:<12}{:>20}", "Date", "Predicted Load (MW)"));
        assert_eq!(lines.len(), 4);
        assert!(rendered.ends_with("1300.00\n"));
        assert!(lines[2].starts_with("2025-06-15"));
        assert!(lines[2].ends_with("1234.50"));
    }
}
