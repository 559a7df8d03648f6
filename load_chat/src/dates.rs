//! Fuzzy date extraction from free text
//!
//! Words that are not part of a date are skipped. Recognised forms:
//! - `2025-06-15`
//! - `6/15`, `6/15/2025`, `6/15/25` (month first)
//! - month names with a day on either side: `june 15`, `15th of june`, `jun 15th 2025`
//! - a month name alone, or a four-digit year alone
//! - `today`, `tomorrow`
//! - a bare day number (`3`, `15th`), read as a day of the reference month
//!
//! Components that are not mentioned are taken from the reference date.

use chrono::{Datelike, Days, NaiveDate};
use regex::Regex;
use std::sync::OnceLock;

const MONTHS: [(&str, u32); 24] = [
    ("january", 1),
    ("february", 2),
    ("march", 3),
    ("april", 4),
    ("may", 5),
    ("june", 6),
    ("july", 7),
    ("august", 8),
    ("september", 9),
    ("october", 10),
    ("november", 11),
    ("december", 12),
    ("jan", 1),
    ("feb", 2),
    ("mar", 3),
    ("apr", 4),
    ("jun", 6),
    ("jul", 7),
    ("aug", 8),
    ("sep", 9),
    ("sept", 9),
    ("oct", 10),
    ("nov", 11),
    ("dec", 12),
];

fn iso_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"\b(\d{4})-(\d{1,2})-(\d{1,2})\b").expect("valid ISO date pattern")
    })
}

fn slash_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"\b(\d{1,2})/(\d{1,2})(?:/(\d{4}|\d{2}))?\b").expect("valid slashed date pattern")
    })
}

/// Find a calendar date mentioned in `text`
///
/// Returns `None` when nothing date-like is found or the mentioned
/// components do not form a real date.
pub fn extract_date(text: &str, today: NaiveDate) -> Option<NaiveDate> {
    let lower = text.to_lowercase();

    if let Some(caps) = iso_pattern().captures(&lower) {
        let year = caps[1].parse().ok()?;
        let month = caps[2].parse().ok()?;
        let day = caps[3].parse().ok()?;
        return NaiveDate::from_ymd_opt(year, month, day);
    }

    if let Some(caps) = slash_pattern().captures(&lower) {
        let month = caps[1].parse().ok()?;
        let day = caps[2].parse().ok()?;
        let year = match caps.get(3) {
            Some(y) if y.as_str().len() == 2 => 2000 + y.as_str().parse::<i32>().ok()?,
            Some(y) => y.as_str().parse().ok()?,
            None => today.year(),
        };
        return NaiveDate::from_ymd_opt(year, month, day);
    }

    let tokens: Vec<&str> = lower
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|t| !t.is_empty())
        .collect();

    let year = tokens.iter().find_map(|t| parse_year(t));

    if let Some((idx, month)) = tokens
        .iter()
        .enumerate()
        .find_map(|(i, t)| month_number(t).map(|m| (i, m)))
    {
        let day = day_near_month(&tokens, idx).unwrap_or_else(|| today.day());
        return NaiveDate::from_ymd_opt(year.unwrap_or_else(|| today.year()), month, day);
    }

    if tokens.contains(&"tomorrow") {
        return today.checked_add_days(Days::new(1));
    }

    if tokens.contains(&"today") {
        return Some(today);
    }

    // "forecast for 3 days" names the 3rd of this month
    if let Some(day) = tokens.iter().find_map(|t| parse_day(t)) {
        return NaiveDate::from_ymd_opt(year.unwrap_or_else(|| today.year()), today.month(), day);
    }

    year.and_then(|y| today.with_year(y))
}

fn month_number(token: &str) -> Option<u32> {
    MONTHS
        .iter()
        .find(|(name, _)| *name == token)
        .map(|(_, number)| *number)
}

fn parse_year(token: &str) -> Option<i32> {
    if token.len() != 4 || !token.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    token.parse().ok().filter(|y| (1900..=2100).contains(y))
}

/// A day of month such as `15` or `15th`
fn parse_day(token: &str) -> Option<u32> {
    let digits = ["st", "nd", "rd", "th"]
        .iter()
        .find_map(|suffix| token.strip_suffix(suffix))
        .unwrap_or(token);

    if digits.is_empty() || digits.len() > 2 || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok().filter(|d| (1..=31).contains(d))
}

/// Look for a day right after the month (`june 15`, `june the 15th`) and
/// then right before it (`15 june`, `15th of june`).
fn day_near_month(tokens: &[&str], month_idx: usize) -> Option<u32> {
    let mut after = month_idx + 1;
    if tokens.get(after) == Some(&"the") {
        after += 1;
    }
    if let Some(day) = tokens.get(after).and_then(|t| parse_day(t)) {
        return Some(day);
    }

    let mut before = month_idx.checked_sub(1)?;
    if tokens[before] == "of" {
        before = before.checked_sub(1)?;
    }
    if tokens[before] == "the" {
        before = before.checked_sub(1)?;
    }
    tokens.get(before).and_then(|t| parse_day(t))
}
