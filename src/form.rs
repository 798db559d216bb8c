//! Appliance input form state and the usage-hours guard

use crate::constants::MAX_HOURS_PER_DAY;
use crate::ledger::ApplianceDraft;

/// Raw text of the four form fields, as the user typed it
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApplianceForm {
    pub name: String,
    pub usage_hours: String,
    pub power: String,
    pub price_per_kwh: String,
    /// Set when the last hours edit exceeded the daily cap
    pub hours_capped: bool,
}

impl ApplianceForm {
    /// Run after every edit of the usage-hours field. Values above the cap
    /// are replaced by the cap itself and flagged; anything else (including
    /// text that isn't a number) clears the flag.
    pub fn on_hours_input(&mut self) {
        if parse_number(&self.usage_hours) > MAX_HOURS_PER_DAY {
            self.usage_hours = format_hours(MAX_HOURS_PER_DAY);
            self.hours_capped = true;
        } else {
            self.hours_capped = false;
        }
    }

    /// True if any of the four fields holds non-whitespace text
    pub fn has_input(&self) -> bool {
        [&self.name, &self.usage_hours, &self.power, &self.price_per_kwh]
            .iter()
            .any(|f| !f.trim().is_empty())
    }

    pub fn draft(&self) -> ApplianceDraft {
        ApplianceDraft {
            name: self.name.trim().to_string(),
            usage_hours: parse_number(&self.usage_hours),
            power_watts: parse_number(&self.power),
            price_per_kwh: parse_number(&self.price_per_kwh),
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Lenient numeric parse: surrounding whitespace is ignored and a single
/// decimal comma is accepted. Empty or malformed text yields NaN.
pub fn parse_number(text: &str) -> f64 {
    let text = text.trim();
    if text.is_empty() {
        return f64::NAN;
    }
    text.replacen(',', ".", 1).parse().unwrap_or(f64::NAN)
}

/// Render an hours value the way it appears in labels: no trailing zeros
pub fn format_hours(hours: f64) -> String {
    format!("{}", hours)
}
