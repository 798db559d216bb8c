//! Consumption/cost table view-model
//!
//! [`build_report`] is a pure function of the appliance list. The UI redraws
//! the table from its output and never computes anything itself.

use crate::constants::{COST_DECIMALS, CONSUMPTION_DECIMALS, WATTS_PER_KILOWATT};
use crate::form::format_hours;
use crate::ledger::{Appliance, ApplianceId};
use crate::period::Period;
use chrono::{DateTime, Local};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableState {
    Hidden,
    Visible,
}

impl TableState {
    pub fn of(appliances: &[Appliance]) -> Self {
        if appliances.is_empty() {
            TableState::Hidden
        } else {
            TableState::Visible
        }
    }
}

/// Raw figures for one appliance over one period
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Estimate {
    pub consumption_kwh: f64,
    pub cost: f64,
}

impl Estimate {
    pub const ZERO: Estimate = Estimate {
        consumption_kwh: 0.0,
        cost: 0.0,
    };

    /// Estimate for an appliance regardless of its enabled flag.
    /// Non-finite results are reported as zero.
    pub fn for_period(appliance: &Appliance, period: Period) -> Self {
        let consumption = appliance.power_watts / WATTS_PER_KILOWATT
            * period.operating_hours(appliance.usage_hours);
        let cost = consumption * appliance.price_per_kwh;
        Estimate {
            consumption_kwh: finite_or_zero(consumption),
            cost: finite_or_zero(cost),
        }
    }
}

/// One appliance's pair of columns
#[derive(Debug, Clone, PartialEq)]
pub struct ApplianceColumn {
    pub id: ApplianceId,
    pub name: String,
    pub usage_hours: String,
    pub enabled: bool,
    pub created_at: DateTime<Local>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    pub estimate: Estimate,
    pub consumption: String,
    pub cost: String,
}

impl From<Estimate> for Cell {
    fn from(estimate: Estimate) -> Self {
        Cell {
            estimate,
            consumption: format_consumption(estimate.consumption_kwh),
            cost: format_cost(estimate.cost),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PeriodRow {
    pub period: Period,
    /// One cell per column, in column order
    pub cells: Vec<Cell>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub columns: Vec<ApplianceColumn>,
    pub rows: Vec<PeriodRow>,
    /// Day-equivalent totals over enabled appliances
    pub total: Cell,
}

impl Report {
    /// Number of data columns the total cell spans
    pub fn total_span(&self) -> usize {
        self.columns.len() * 2
    }

    pub fn row(&self, period: Period) -> Option<&PeriodRow> {
        self.rows.iter().find(|r| r.period == period)
    }
}

/// Build the table for `appliances`, or `None` when there is nothing to show.
///
/// With `calculate` false every period cell is zero. The total row is always
/// computed.
pub fn build_report(appliances: &[Appliance], calculate: bool) -> Option<Report> {
    if TableState::of(appliances) == TableState::Hidden {
        return None;
    }

    let columns = appliances
        .iter()
        .map(|a| ApplianceColumn {
            id: a.id,
            name: a.name.clone(),
            usage_hours: format_hours(a.usage_hours),
            enabled: a.enabled,
            created_at: a.created_at,
        })
        .collect();

    let rows = Period::ALL
        .iter()
        .map(|&period| PeriodRow {
            period,
            cells: appliances
                .iter()
                .map(|a| {
                    let estimate = if calculate && a.enabled {
                        Estimate::for_period(a, period)
                    } else {
                        Estimate::ZERO
                    };
                    Cell::from(estimate)
                })
                .collect(),
        })
        .collect();

    Some(Report {
        columns,
        rows,
        total: total_estimate(appliances).into(),
    })
}

/// Sum of day-equivalent consumption and cost over enabled appliances
pub fn total_estimate(appliances: &[Appliance]) -> Estimate {
    appliances
        .iter()
        .filter(|a| a.enabled)
        .map(|a| Estimate::for_period(a, Period::Custom))
        .fold(Estimate::ZERO, |acc, e| Estimate {
            consumption_kwh: acc.consumption_kwh + e.consumption_kwh,
            cost: acc.cost + e.cost,
        })
}

pub fn format_consumption(kwh: f64) -> String {
    to_fixed(kwh, CONSUMPTION_DECIMALS)
}

pub fn format_cost(cost: f64) -> String {
    to_fixed(cost, COST_DECIMALS)
}

/// Fixed-point formatting with exact halves rounded away from zero
/// (`format!` alone rounds them to even).
fn to_fixed(value: f64, decimals: usize) -> String {
    let value = finite_or_zero(value);
    let magnitude = value.abs();

    // An exact half at `decimals` places is an odd multiple of
    // 2^-(decimals + 1), so its decimal expansion ends in a 5 exactly one
    // digit further and is printed without rounding at that precision.
    let extended = format!("{:.*}", decimals + 1, magnitude);
    let scaled = magnitude * 2f64.powi(decimals as i32 + 1);
    let is_tie = extended.ends_with('5') && scaled.fract() == 0.0 && scaled % 2.0 == 1.0;

    let digits = if is_tie {
        let truncated = extended[..extended.len() - 1].trim_end_matches('.');
        increment_last_digit(truncated)
    } else {
        format!("{:.*}", decimals, magnitude)
    };

    if value < 0.0 {
        format!("-{digits}")
    } else {
        digits
    }
}

/// Add one unit in the last place of a plain decimal string, carrying
/// through nines ("9.99" -> "10.00").
fn increment_last_digit(digits: &str) -> String {
    let mut chars: Vec<char> = digits.chars().collect();
    for c in chars.iter_mut().rev() {
        match *c {
            '.' => {}
            '9' => *c = '0',
            d => {
                *c = char::from(d as u8 + 1);
                return chars.into_iter().collect();
            }
        }
    }
    std::iter::once('1').chain(chars).collect()
}

/// NaN and infinities become 0; negative zero is normalized so it never
/// prints as "-0.00".
fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() && value != 0.0 {
        value
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::Ledger;
    use pretty_assertions::assert_eq;

    fn cells(report: &Report, period: Period) -> Vec<(String, String)> {
        report
            .row(period)
            .unwrap()
            .cells
            .iter()
            .map(|c| (c.consumption.clone(), c.cost.clone()))
            .collect()
    }

    fn pair(consumption: &str, cost: &str) -> (String, String) {
        (consumption.to_string(), cost.to_string())
    }

    #[test]
    fn empty_list_hides_table() {
        assert_eq!(build_report(&[], true), None);
        assert_eq!(TableState::of(&[]), TableState::Hidden);
    }

    #[test]
    fn reference_appliance_figures() {
        let mut ledger = Ledger::new();
        ledger.add("Heater", 5.0, 1000.0, 5.0).unwrap();
        let report = build_report(ledger.appliances(), true).unwrap();

        assert_eq!(cells(&report, Period::Hour), vec![pair("1.0000", "5.00")]);
        assert_eq!(cells(&report, Period::Day), vec![pair("5.0000", "25.00")]);
        assert_eq!(cells(&report, Period::Month), vec![pair("152.2000", "761.00")]);
        assert_eq!(cells(&report, Period::Year), vec![pair("1826.2500", "9131.25")]);
        assert_eq!(cells(&report, Period::Custom), vec![pair("5.0000", "25.00")]);
        assert_eq!(report.total.consumption, "5.0000");
        assert_eq!(report.total.cost, "25.00");
    }

    #[test]
    fn rows_follow_fixed_period_order() {
        let mut ledger = Ledger::new();
        ledger.add("Lamp", 4.0, 60.0, 5.0).unwrap();
        let report = build_report(ledger.appliances(), true).unwrap();
        let periods: Vec<_> = report.rows.iter().map(|r| r.period).collect();
        assert_eq!(periods, Period::ALL.to_vec());
    }

    #[test]
    fn columns_carry_labels_and_ids() {
        let mut ledger = Ledger::new();
        let a = ledger.add("TV", 2.5, 120.0, 5.0).unwrap();
        let b = ledger.add("PC", 8.0, 300.0, 5.0).unwrap();
        ledger.toggle_enabled(b, false);

        let report = build_report(ledger.appliances(), true).unwrap();
        assert_eq!(report.total_span(), 4);
        assert_eq!(report.columns[0].id, a);
        assert_eq!(report.columns[0].name, "TV");
        assert_eq!(report.columns[0].usage_hours, "2.5");
        assert!(report.columns[0].enabled);
        assert_eq!(report.columns[1].usage_hours, "8");
        assert!(!report.columns[1].enabled);
    }

    #[test]
    fn disabled_appliance_contributes_zero() {
        let mut ledger = Ledger::new();
        let heater = ledger.add("Heater", 5.0, 1000.0, 5.0).unwrap();
        ledger.add("Lamp", 10.0, 100.0, 5.0).unwrap();
        let before = build_report(ledger.appliances(), true).unwrap();

        ledger.toggle_enabled(heater, false);
        let off = build_report(ledger.appliances(), true).unwrap();
        for row in &off.rows {
            assert_eq!(row.cells[0].consumption, "0.0000");
            assert_eq!(row.cells[0].cost, "0.00");
        }
        assert_eq!(off.total.consumption, "1.0000");
        assert_eq!(off.total.cost, "5.00");

        ledger.toggle_enabled(heater, true);
        let on = build_report(ledger.appliances(), true).unwrap();
        assert_eq!(on.rows, before.rows);
        assert_eq!(on.total, before.total);
    }

    #[test]
    fn skipped_calculation_zeroes_period_cells_only() {
        let mut ledger = Ledger::new();
        ledger.add("Heater", 5.0, 1000.0, 5.0).unwrap();
        let report = build_report(ledger.appliances(), false).unwrap();

        for row in &report.rows {
            assert_eq!(row.cells[0].estimate, Estimate::ZERO);
            assert_eq!(row.cells[0].consumption, "0.0000");
        }
        assert_eq!(report.total.consumption, "5.0000");
    }

    #[test]
    fn total_uses_day_equivalent_duration() {
        let mut ledger = Ledger::new();
        ledger.add("A", 2.0, 500.0, 4.0).unwrap();
        ledger.add("B", 10.0, 100.0, 6.0).unwrap();
        let total = total_estimate(ledger.appliances());
        assert!((total.consumption_kwh - 2.0).abs() < 1e-9);
        assert!((total.cost - 10.0).abs() < 1e-9);
    }

    #[test]
    fn non_finite_values_become_zero() {
        let mut ledger = Ledger::new();
        ledger.add("Broken", 5.0, f64::INFINITY, 5.0).unwrap();
        ledger.add("Ok", 1.0, 1000.0, 2.0).unwrap();
        let report = build_report(ledger.appliances(), true).unwrap();

        for row in &report.rows {
            assert_eq!(row.cells[0].consumption, "0.0000");
            assert_eq!(row.cells[0].cost, "0.00");
        }
        assert_eq!(report.total.consumption, "1.0000");
        assert_eq!(report.total.cost, "2.00");
    }

    #[test]
    fn negative_zero_prints_as_zero() {
        assert_eq!(format_cost(-0.0), "0.00");
        assert_eq!(format_consumption(0.0 * -5.0), "0.0000");
    }

    #[test]
    fn formatting_rounds_to_fixed_decimals() {
        assert_eq!(format_consumption(0.123456), "0.1235");
        assert_eq!(format_cost(761.0000000001), "761.00");
        assert_eq!(format_cost(f64::NAN), "0.00");
    }

    #[test]
    fn exact_halves_round_away_from_zero() {
        assert_eq!(format_cost(1.125), "1.13");
        assert_eq!(format_cost(0.125), "0.13");
        assert_eq!(format_cost(-1.125), "-1.13");
        assert_eq!(format_consumption(0.03125), "0.0313");
        assert_eq!(to_fixed(0.5, 0), "1");
        assert_eq!(to_fixed(2.5, 0), "3");
    }

    #[test]
    fn near_halves_keep_their_binary_value() {
        // 2.675 is stored as 2.67499999...
        assert_eq!(format_cost(2.675), "2.67");
        assert_eq!(format_cost(1.005), "1.00");
    }

    #[test]
    fn increment_carries_through_nines() {
        assert_eq!(increment_last_digit("1.12"), "1.13");
        assert_eq!(increment_last_digit("9.99"), "10.00");
        assert_eq!(increment_last_digit("0"), "1");
    }

    #[test]
    fn half_kopeck_cost_in_table() {
        let mut ledger = Ledger::new();
        ledger.add("Router", 1.0, 250.0, 4.5).unwrap();
        ledger.add("LED", 1.0, 31.25, 5.0).unwrap();
        let report = build_report(ledger.appliances(), true).unwrap();
        assert_eq!(
            cells(&report, Period::Hour),
            vec![pair("0.2500", "1.13"), pair("0.0313", "0.16")]
        );
    }
}
