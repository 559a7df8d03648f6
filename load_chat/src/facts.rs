//! Canned answers to common questions
//!
//! Entries are checked in list order and the first phrase contained in the
//! message wins, so more specific phrases must come before phrases they
//! contain. `{username}` in an answer is replaced with the caller's name.

/// Placeholder replaced with the current user's name
pub const USERNAME_PLACEHOLDER: &str = "{username}";

/// Built-in question phrases and their answers, in priority order
pub const CANNED_ANSWERS: &[(&str, &str)] = &[
    // About the assistant
    ("who are you", "I am an AI-driven assistant designed to help with electricity load forecasting and answer general queries."),
    ("what is your name", "My name is AI Assistant. I assist users with electricity load forecasting and general information."),
    ("how are you", "I'm just a program, so I don't have feelings, but thanks for asking!"),
    ("what can you do", "I can forecast electricity loads, answer industry-specific questions, and provide insights into energy consumption trends."),
    ("what else can you do", "In addition to forecasting, I can answer questions about renewable energy, peak demand, and energy-saving tips."),
    ("what is your work", "My primary role is to assist with electricity load forecasting and provide insights into energy-related topics."),
    ("do you know me", "Yes, I know you. Your username is {username}."),
    ("tell me my name", "Your name is {username}."),
    ("what is my name", "Your name is {username}."),
    ("what are you showing", "I display electricity load forecasts and predictions based on your queries."),
    // Industry questions
    ("what is electricity load forecasting", "Electricity load forecasting predicts the amount of electricity that will be consumed at a given time. It helps utilities plan generation and distribution efficiently."),
    ("why is load forecasting important", "Load forecasting ensures grid stability, optimizes energy generation, and reduces costs by preventing overproduction or shortages."),
    ("what factors affect electricity demand", "Factors include weather conditions, time of day, seasonality, economic activity, and population growth."),
    ("what is peak demand", "Peak demand refers to the highest level of electricity consumption during a specific period. It often occurs during extreme weather conditions."),
    ("how is renewable energy impacting the grid", "Renewable energy sources like solar and wind reduce reliance on fossil fuels but introduce variability due to their dependence on weather conditions."),
    ("what is baseload power", "Baseload power refers to the minimum level of electricity demand required over a 24-hour period. It is typically met by stable energy sources like coal, nuclear, or hydro."),
    ("how does seasonality affect electricity demand", "Electricity demand is higher in summer due to air conditioning and in winter due to heating requirements."),
    ("what are the challenges in forecasting", "Challenges include unpredictable weather, sudden changes in consumer behavior, and integrating renewable energy sources."),
    ("tell me about delhi's electricity demand", "Delhi's electricity demand peaks during summer due to high air conditioning usage. The city also experiences fluctuations based on industrial and commercial activity."),
    ("what is demand-side management", "Demand-side management involves strategies to influence consumer behavior to reduce peak demand and improve grid efficiency."),
    ("how can i reduce energy consumption", "You can reduce energy consumption by using energy-efficient appliances, optimizing HVAC systems, and adopting renewable energy sources."),
];

/// A question phrase and its answer template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FactEntry {
    /// Lowercase phrase looked for in the message
    pub phrase: String,
    /// Answer, possibly containing `{username}`
    pub answer: String,
}

/// Ordered list of canned answers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FactBook {
    entries: Vec<FactEntry>,
}

impl Default for FactBook {
    fn default() -> Self {
        Self::from_pairs(CANNED_ANSWERS)
    }
}

impl FactBook {
    /// Create an empty fact book
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Create a fact book from `(phrase, answer)` pairs, keeping their order
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        let mut book = Self::empty();
        for (phrase, answer) in pairs {
            book.push(phrase, answer);
        }
        book
    }

    /// Append an entry with the lowest priority
    pub fn push(&mut self, phrase: &str, answer: &str) {
        self.entries.push(FactEntry {
            phrase: phrase.to_lowercase(),
            answer: answer.to_string(),
        });
    }

    /// Get the entries in priority order
    pub fn entries(&self) -> &[FactEntry] {
        &self.entries
    }

    /// Answer for the first phrase contained in `message`
    ///
    /// `message` is expected to be lowercase already.
    pub fn lookup(&self, message: &str, username: &str) -> Option<String> {
        self.entries
            .iter()
            .find(|entry| message.contains(entry.phrase.as_str()))
            .map(|entry| entry.answer.replace(USERNAME_PLACEHOLDER, username))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_book_order_matches_canned_answers() {
        let book = FactBook::default();
        let phrases: Vec<&str> = book.entries().iter().map(|e| e.phrase.as_str()).collect();
        let expected: Vec<&str> = CANNED_ANSWERS.iter().map(|(p, _)| *p).collect();
        assert_eq!(phrases, expected);
    }

    #[test]
    fn test_username_is_substituted() {
        let book = FactBook::default();
        assert_eq!(
            book.lookup("hey, what is my name?", "asha"),
            Some("Your name is asha.".to_string())
        );
    }

    #[test]
    fn test_first_entry_wins() {
        let book = FactBook::from_pairs(&[("can you", "first"), ("what can you do", "second")]);
        assert_eq!(book.lookup("what can you do", "u"), Some("first".to_string()));
    }

    #[test]
    fn test_no_match() {
        assert_eq!(FactBook::default().lookup("forecast for tomorrow", "u"), None);
    }

    #[test]
    fn test_push_lowercases_phrase() {
        let mut book = FactBook::empty();
        book.push("What Is A Megawatt", "A million watts.");
        assert_eq!(
            book.lookup("what is a megawatt", "u"),
            Some("A million watts.".to_string())
        );
    }
}
