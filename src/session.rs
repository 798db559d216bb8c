//! Application state behind the calculator window
//!
//! A `Session` ties the form, the ledger and the "calculated" flag together
//! and exposes one method per user action. It has no UI dependency, so the
//! window code only forwards button clicks and field edits here.

use crate::form::ApplianceForm;
use crate::ledger::{AddError, ApplianceId, Ledger, LedgerAction};
use crate::report::{build_report, Report, TableState};
use tracing::{debug, info};

#[derive(Debug, Default)]
pub struct Session {
    pub ledger: Ledger,
    pub form: ApplianceForm,
    /// Whether the table shows computed figures. Cleared while the form is
    /// being edited after a commit.
    calculated: bool,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calculated(&self) -> bool {
        self.calculated
    }

    /// "Add Appliance": append the form contents and recalculate. Invalid
    /// input leaves everything untouched; callers are free to ignore the error.
    pub fn add_appliance(&mut self) -> Result<ApplianceId, AddError> {
        match self.ledger.add_draft(&self.form.draft()) {
            Ok(id) => {
                self.calculated = true;
                Ok(id)
            }
            Err(e) => {
                debug!(error = %e, "Add rejected");
                Err(e)
            }
        }
    }

    /// "Calculate": adds the form contents if anything was typed, otherwise
    /// just recalculates the existing list. A rejected add still recalculates
    /// whatever is already listed.
    pub fn calculate(&mut self) {
        if self.form.has_input() && self.add_appliance().is_ok() {
            return;
        }
        if !self.ledger.is_empty() {
            self.calculated = true;
        }
    }

    /// Any form field changed
    pub fn form_edited(&mut self) {
        self.calculated = false;
    }

    /// The usage-hours field changed
    pub fn hours_edited(&mut self) {
        self.form.on_hours_input();
        self.form_edited();
    }

    /// Apply a header control event. Unknown ids are ignored.
    pub fn apply(&mut self, action: LedgerAction) {
        let found = self.ledger.apply(action);
        if found || matches!(action, LedgerAction::Remove(_)) {
            self.calculated = true;
        }
        if !found {
            debug!(?action, "Action for unknown appliance ignored");
        }
    }

    /// "Reset": drop every appliance and clear the form
    pub fn reset_all(&mut self) {
        info!(count = self.ledger.len(), "Resetting session");
        self.ledger.reset();
        self.form.clear();
        self.calculated = false;
    }

    pub fn report(&self) -> Option<Report> {
        build_report(self.ledger.appliances(), self.calculated)
    }

    pub fn table_state(&self) -> TableState {
        TableState::of(self.ledger.appliances())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn fill(session: &mut Session, name: &str, hours: &str, power: &str, price: &str) {
        session.form.name = name.into();
        session.form.usage_hours = hours.into();
        session.form.power = power.into();
        session.form.price_per_kwh = price.into();
    }

    #[test]
    fn add_keeps_form_contents() {
        let mut session = Session::new();
        fill(&mut session, "Kettle", "1", "2000", "5");
        session.add_appliance().unwrap();

        assert_eq!(session.ledger.len(), 1);
        assert_eq!(session.form.name, "Kettle");
        assert!(session.calculated());
    }

    #[test]
    fn invalid_add_changes_nothing() {
        let mut session = Session::new();
        fill(&mut session, "Kettle", "1", "lots", "5");
        assert_eq!(
            session.add_appliance(),
            Err(AddError::NotANumber { field: "power" })
        );
        assert!(session.ledger.is_empty());
        assert_eq!(session.table_state(), TableState::Hidden);
    }

    #[test]
    fn calculate_with_input_adds() {
        let mut session = Session::new();
        fill(&mut session, "Lamp", "4", "60", "5");
        session.calculate();
        assert_eq!(session.ledger.len(), 1);
        session.calculate();
        assert_eq!(session.ledger.len(), 2);
    }

    #[test]
    fn calculate_with_empty_form_only_recalculates() {
        let mut session = Session::new();
        fill(&mut session, "Lamp", "4", "60", "5");
        session.add_appliance().unwrap();
        session.form.clear();
        session.form_edited();
        assert!(!session.calculated());

        session.calculate();
        assert_eq!(session.ledger.len(), 1);
        assert!(session.calculated());
    }

    #[test]
    fn editing_form_zeroes_table_until_commit() {
        let mut session = Session::new();
        fill(&mut session, "Heater", "5", "1000", "5");
        session.add_appliance().unwrap();

        session.form.name = "Heater 2".into();
        session.form_edited();
        let report = session.report().unwrap();
        assert_eq!(report.rows[0].cells[0].consumption, "0.0000");

        session.calculate();
        let report = session.report().unwrap();
        assert_eq!(report.rows[0].cells[0].consumption, "1.0000");
    }

    #[test]
    fn rejected_calculate_restores_existing_figures() {
        let mut session = Session::new();
        fill(&mut session, "Heater", "5", "1000", "5");
        session.add_appliance().unwrap();

        session.form.power.clear();
        session.form_edited();
        assert_eq!(session.report().unwrap().rows[0].cells[0].consumption, "0.0000");

        session.calculate();
        assert_eq!(session.ledger.len(), 1);
        assert!(session.calculated());
        assert_eq!(session.report().unwrap().rows[0].cells[0].consumption, "1.0000");
    }

    #[test]
    fn rejected_calculate_on_empty_ledger_stays_hidden() {
        let mut session = Session::new();
        fill(&mut session, "Heater", "5", "", "5");
        session.calculate();
        assert!(!session.calculated());
        assert_eq!(session.table_state(), TableState::Hidden);
    }

    #[test]
    fn hours_edit_clamps_and_flags() {
        let mut session = Session::new();
        session.form.usage_hours = "30".into();
        session.hours_edited();
        assert_eq!(session.form.usage_hours, "24");
        assert!(session.form.hours_capped);
    }

    #[test]
    fn deleting_last_appliance_hides_table() {
        let mut session = Session::new();
        fill(&mut session, "TV", "3", "100", "5");
        let id = session.add_appliance().unwrap();
        assert_eq!(session.table_state(), TableState::Visible);

        session.apply(LedgerAction::Remove(id));
        assert_eq!(session.table_state(), TableState::Hidden);
        assert!(session.report().is_none());
    }

    #[test]
    fn toggle_of_unknown_id_keeps_flag() {
        let mut session = Session::new();
        fill(&mut session, "TV", "3", "100", "5");
        let id = session.add_appliance().unwrap();
        session.apply(LedgerAction::Remove(id));
        session.form_edited();

        session.apply(LedgerAction::Toggle(id, false));
        assert!(!session.calculated());
    }

    #[test]
    fn reset_clears_everything() {
        let mut session = Session::new();
        fill(&mut session, "TV", "30", "100", "5");
        session.hours_edited();
        session.add_appliance().unwrap();
        session.add_appliance().unwrap();

        session.reset_all();
        assert!(session.ledger.is_empty());
        assert_eq!(session.form, ApplianceForm::default());
        assert!(!session.calculated());
        assert_eq!(session.table_state(), TableState::Hidden);

        // Reset on an already empty session is fine too
        session.reset_all();
        assert!(session.ledger.is_empty());
    }
}
