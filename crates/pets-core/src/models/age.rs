use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Normalized patient age. Parts the operator left blank are 0, so "no age
/// entered" is indistinguishable from "newborn" for the neonate check — a
/// deliberate carry-over from the triage standard's entry form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Age {
    pub years: u32,
    pub months: u32,
    pub days: u32,
}

impl Age {
    pub fn new(years: u32, months: u32, days: u32) -> Self {
        Self {
            years,
            months,
            days,
        }
    }

    /// The comparable age axis used by the banded vital-sign tables.
    pub fn total_months(&self) -> u32 {
        self.years * 12 + self.months
    }

    /// Neonate range (≤28 days), used only by the hypotension bands.
    pub fn is_neonate(&self) -> bool {
        self.years == 0 && self.months == 0 && self.days <= 28
    }
}
