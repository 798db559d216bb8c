//! Watt Ledger - appliance electricity consumption and cost calculator
//!
//! The library holds everything that doesn't need a window: the appliance
//! ledger, form parsing, the table view-model and settings. The `watt-ledger`
//! binary draws it with egui.

pub mod constants;
pub mod form;
pub mod i18n;
pub mod ledger;
pub mod period;
pub mod report;
pub mod session;
pub mod settings;

pub use ledger::{AddError, Appliance, ApplianceId, Ledger, LedgerAction};
pub use period::Period;
pub use report::{build_report, Report, TableState};
pub use session::Session;
