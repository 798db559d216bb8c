//! Fixed reporting periods

use crate::constants::{DAYS_PER_MONTH, DAYS_PER_YEAR};

/// A time span over which consumption and cost are reported.
///
/// `Custom` has no length of its own: it reuses the appliance's daily
/// usage hours, which makes it numerically identical to `Day`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Period {
    Hour,
    Day,
    Month,
    Year,
    Custom,
}

impl Period {
    /// Table row order
    pub const ALL: [Period; 5] = [
        Period::Hour,
        Period::Day,
        Period::Month,
        Period::Year,
        Period::Custom,
    ];

    /// Hours of operation within this period for an appliance used
    /// `usage_hours` per day.
    pub fn operating_hours(self, usage_hours: f64) -> f64 {
        match self {
            Period::Hour => 1.0,
            Period::Day | Period::Custom => usage_hours,
            Period::Month => usage_hours * DAYS_PER_MONTH,
            Period::Year => usage_hours * DAYS_PER_YEAR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hour_ignores_usage_hours() {
        assert_eq!(Period::Hour.operating_hours(7.5), 1.0);
        assert_eq!(Period::Hour.operating_hours(f64::NAN), 1.0);
    }

    #[test]
    fn custom_matches_day() {
        for hours in [0.0, 1.5, 5.0, 24.0] {
            assert_eq!(
                Period::Custom.operating_hours(hours),
                Period::Day.operating_hours(hours)
            );
        }
    }

    #[test]
    fn month_and_year_scale_daily_hours() {
        assert!((Period::Month.operating_hours(5.0) - 152.2).abs() < 1e-9);
        assert_eq!(Period::Year.operating_hours(5.0), 1826.25);
    }

    #[test]
    fn rows_are_in_display_order() {
        assert_eq!(Period::ALL.first(), Some(&Period::Hour));
        assert_eq!(Period::ALL.last(), Some(&Period::Custom));
    }
}
