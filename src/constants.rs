//! Application constants and calculation parameters

pub const APP_NAME: &str = "Watt Ledger";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Upper bound enforced on the usage-hours input field
pub const MAX_HOURS_PER_DAY: f64 = 24.0;

pub const WATTS_PER_KILOWATT: f64 = 1000.0;

/// Average month length in days (365.25 / 12, rounded)
pub const DAYS_PER_MONTH: f64 = 30.44;
/// Average year length in days, leap years included
pub const DAYS_PER_YEAR: f64 = 365.25;

pub const CONSUMPTION_DECIMALS: usize = 4;
pub const COST_DECIMALS: usize = 2;
