// src/stats.rs
//
// Aggregator: summary figures for the stats panel.

use crate::{
    config::consts::PLACEHOLDER,
    course::{CourseRecord, Field},
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Stats {
    pub total: usize,
    /// Rounded mean over the records with a parseable cost; 0 if none.
    pub average_cost: u64,
    /// First distinct `dates` value in list order, or "N/A".
    /// Labelled "Date Range" in the UI, though it is a single value.
    pub date_range: String,
}

impl Stats {
    pub fn compute(courses: &[CourseRecord]) -> Self {
        Self {
            total: courses.len(),
            average_cost: average_cost(courses),
            date_range: first_date(courses).map(String::from).unwrap_or_else(|| s!(PLACEHOLDER)),
        }
    }

    pub fn average_cost_label(&self) -> String {
        format_currency(self.average_cost)
    }
}

/// Keep only digits and '.', then parse. "$1,200.50" → 1200.5; "N/A" → None.
pub fn parse_cost(raw: &str) -> Option<f64> {
    let cleaned: String = raw.chars().filter(|c| c.is_ascii_digit() || *c == '.').collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}

pub fn average_cost(courses: &[CourseRecord]) -> u64 {
    let costs: Vec<f64> = courses
        .iter()
        .filter_map(|c| c.get(Field::Cost))
        .filter_map(parse_cost)
        .collect();

    if costs.is_empty() {
        return 0;
    }
    let mean = costs.iter().sum::<f64>() / costs.len() as f64;
    // costs are non-negative, so round() matches round-half-up
    mean.round() as u64
}

fn first_date(courses: &[CourseRecord]) -> Option<&str> {
    courses.iter().find_map(|c| c.get(Field::Dates))
}

/// "$" plus comma thousands separators: 1234567 → "$1,234,567".
pub fn format_currency(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    join!("$", &grouped)
}
