//! Appliance registry
//!
//! Owns the ordered list of appliances and is the only place that mutates it.
//! Every mutation goes through one of four entry points: add, toggle, remove
//! and reset. Lookups by unknown id are silent no-ops.

use chrono::{DateTime, Local};
use std::fmt;
use thiserror::Error;
use tracing::debug;

/// Identifier issued by a [`Ledger`]. Never reused within one ledger, even
/// after the appliance is removed or the ledger is reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ApplianceId(u64);

impl fmt::Display for ApplianceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One user-entered device
#[derive(Debug, Clone, PartialEq)]
pub struct Appliance {
    pub id: ApplianceId,
    pub name: String,
    pub usage_hours: f64,
    pub power_watts: f64,
    pub price_per_kwh: f64,
    pub enabled: bool,
    pub created_at: DateTime<Local>,
}

/// Parsed form input, not yet checked
#[derive(Debug, Clone, PartialEq)]
pub struct ApplianceDraft {
    pub name: String,
    pub usage_hours: f64,
    pub power_watts: f64,
    pub price_per_kwh: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddError {
    #[error("appliance name is empty")]
    EmptyName,
    #[error("{field} is not a number")]
    NotANumber { field: &'static str },
}

/// Header control events, addressed by appliance id
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedgerAction {
    Toggle(ApplianceId, bool),
    Remove(ApplianceId),
}

#[derive(Debug)]
pub struct Ledger {
    appliances: Vec<Appliance>,
    next_id: u64,
}

impl Default for Ledger {
    fn default() -> Self {
        Self {
            appliances: Vec::new(),
            next_id: 1,
        }
    }
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new enabled appliance. The hours bound is enforced by the
    /// input field, not here.
    pub fn add(
        &mut self,
        name: &str,
        usage_hours: f64,
        power_watts: f64,
        price_per_kwh: f64,
    ) -> Result<ApplianceId, AddError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AddError::EmptyName);
        }
        for (field, value) in [
            ("usage hours", usage_hours),
            ("power", power_watts),
            ("price per kWh", price_per_kwh),
        ] {
            if value.is_nan() {
                return Err(AddError::NotANumber { field });
            }
        }

        let id = ApplianceId(self.next_id);
        self.next_id += 1;
        self.appliances.push(Appliance {
            id,
            name: name.to_string(),
            usage_hours,
            power_watts,
            price_per_kwh,
            enabled: true,
            created_at: Local::now(),
        });
        debug!(%id, name, usage_hours, power_watts, price_per_kwh, "Appliance added");
        Ok(id)
    }

    pub fn add_draft(&mut self, draft: &ApplianceDraft) -> Result<ApplianceId, AddError> {
        self.add(
            &draft.name,
            draft.usage_hours,
            draft.power_watts,
            draft.price_per_kwh,
        )
    }

    /// Returns false if no appliance has this id
    pub fn toggle_enabled(&mut self, id: ApplianceId, enabled: bool) -> bool {
        match self.appliances.iter_mut().find(|a| a.id == id) {
            Some(appliance) => {
                appliance.enabled = enabled;
                debug!(%id, enabled, "Appliance toggled");
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: ApplianceId) -> Option<Appliance> {
        let idx = self.appliances.iter().position(|a| a.id == id)?;
        let removed = self.appliances.remove(idx);
        debug!(%id, name = %removed.name, "Appliance removed");
        Some(removed)
    }

    pub fn reset(&mut self) {
        debug!(count = self.appliances.len(), "Ledger reset");
        self.appliances.clear();
    }

    /// Returns true if the action found its appliance
    pub fn apply(&mut self, action: LedgerAction) -> bool {
        match action {
            LedgerAction::Toggle(id, enabled) => self.toggle_enabled(id, enabled),
            LedgerAction::Remove(id) => self.remove(id).is_some(),
        }
    }

    pub fn appliances(&self) -> &[Appliance] {
        &self.appliances
    }

    pub fn get(&self, id: ApplianceId) -> Option<&Appliance> {
        self.appliances.iter().find(|a| a.id == id)
    }

    pub fn len(&self) -> usize {
        self.appliances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.appliances.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn kettle(ledger: &mut Ledger) -> ApplianceId {
        ledger.add("Kettle", 0.5, 2000.0, 5.0).unwrap()
    }

    #[test]
    fn add_appends_enabled_record() {
        let mut ledger = Ledger::new();
        let id = kettle(&mut ledger);

        assert_eq!(ledger.len(), 1);
        let a = ledger.get(id).unwrap();
        assert!(a.enabled);
        assert_eq!(a.name, "Kettle");
        assert_eq!(a.power_watts, 2000.0);
    }

    #[test]
    fn add_trims_name() {
        let mut ledger = Ledger::new();
        let id = ledger.add("  Fridge \t", 24.0, 150.0, 5.0).unwrap();
        assert_eq!(ledger.get(id).unwrap().name, "Fridge");
    }

    #[test]
    fn add_rejects_blank_name() {
        let mut ledger = Ledger::new();
        assert_eq!(ledger.add("   ", 1.0, 1.0, 1.0), Err(AddError::EmptyName));
        assert!(ledger.is_empty());
    }

    #[test]
    fn add_rejects_nan_fields() {
        let mut ledger = Ledger::new();
        assert_eq!(
            ledger.add("Lamp", f64::NAN, 60.0, 5.0),
            Err(AddError::NotANumber { field: "usage hours" })
        );
        assert_eq!(
            ledger.add("Lamp", 3.0, f64::NAN, 5.0),
            Err(AddError::NotANumber { field: "power" })
        );
        assert_eq!(
            ledger.add("Lamp", 3.0, 60.0, f64::NAN),
            Err(AddError::NotANumber { field: "price per kWh" })
        );
        assert!(ledger.is_empty());
    }

    #[test]
    fn unchecked_values_are_accepted() {
        // Only the hours field is bounded, and only at input time.
        let mut ledger = Ledger::new();
        assert!(ledger.add("Heater", 30.0, -5.0, 0.0).is_ok());
        assert!(ledger.add("Furnace", 1.0, f64::INFINITY, 1.0).is_ok());
        assert_eq!(ledger.len(), 2);
    }

    #[test]
    fn same_name_creates_independent_records() {
        let mut ledger = Ledger::new();
        let a = kettle(&mut ledger);
        let b = kettle(&mut ledger);
        assert_ne!(a, b);
        assert_eq!(ledger.len(), 2);
    }

    #[test]
    fn ids_are_monotonic_and_not_reused() {
        let mut ledger = Ledger::new();
        let a = kettle(&mut ledger);
        let b = kettle(&mut ledger);
        ledger.remove(b);
        ledger.reset();
        let c = kettle(&mut ledger);
        assert!(a < b && b < c);
    }

    #[test]
    fn toggle_sets_flag_and_ignores_unknown_id() {
        let mut ledger = Ledger::new();
        let id = kettle(&mut ledger);

        assert!(ledger.toggle_enabled(id, false));
        assert!(!ledger.get(id).unwrap().enabled);
        assert!(ledger.toggle_enabled(id, true));
        assert!(ledger.get(id).unwrap().enabled);

        assert!(!ledger.toggle_enabled(ApplianceId(999), false));
        assert!(ledger.get(id).unwrap().enabled);
    }

    #[test]
    fn remove_keeps_insertion_order() {
        let mut ledger = Ledger::new();
        let a = ledger.add("A", 1.0, 1.0, 1.0).unwrap();
        let b = ledger.add("B", 1.0, 1.0, 1.0).unwrap();
        let c = ledger.add("C", 1.0, 1.0, 1.0).unwrap();

        let removed = ledger.remove(b).unwrap();
        assert_eq!(removed.name, "B");
        let ids: Vec<_> = ledger.appliances().iter().map(|x| x.id).collect();
        assert_eq!(ids, vec![a, c]);

        assert!(ledger.remove(b).is_none());
        assert_eq!(ledger.len(), 2);
    }

    #[test]
    fn apply_dispatches_actions() {
        let mut ledger = Ledger::new();
        let id = kettle(&mut ledger);

        assert!(ledger.apply(LedgerAction::Toggle(id, false)));
        assert!(!ledger.get(id).unwrap().enabled);
        assert!(ledger.apply(LedgerAction::Remove(id)));
        assert!(!ledger.apply(LedgerAction::Remove(id)));
        assert!(ledger.is_empty());
    }
}
