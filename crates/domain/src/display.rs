//! Display — the state object holding the four slot values.
//!
//! Every field starts at its slot's placeholder and is overwritten wholesale
//! by each applied update. No history is kept.

use serde::{Deserialize, Serialize};

use crate::reading::Reading;
use crate::slot::Slot;
use crate::update::SlotUpdate;

/// Current content of every display slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Display {
    pub temperature: Reading,
    pub humidity: Reading,
    pub heat_index: Reading,
    pub calculation_results: Reading,
}

impl Default for Display {
    fn default() -> Self {
        Self {
            temperature: Reading::from(Slot::Temperature.placeholder()),
            humidity: Reading::from(Slot::Humidity.placeholder()),
            heat_index: Reading::from(Slot::HeatIndex.placeholder()),
            calculation_results: Reading::from(Slot::CalculationResults.placeholder()),
        }
    }
}

impl Display {
    pub fn set_temperature(&mut self, reading: Reading) {
        self.temperature = reading;
    }

    pub fn set_humidity(&mut self, reading: Reading) {
        self.humidity = reading;
    }

    pub fn set_heat_index(&mut self, reading: Reading) {
        self.heat_index = reading;
    }

    pub fn set_calculation_results(&mut self, reading: Reading) {
        self.calculation_results = reading;
    }

    /// Overwrite the field backing `slot`.
    pub fn set(&mut self, slot: Slot, reading: Reading) {
        match slot {
            Slot::Temperature => self.set_temperature(reading),
            Slot::Humidity => self.set_humidity(reading),
            Slot::HeatIndex => self.set_heat_index(reading),
            Slot::CalculationResults => self.set_calculation_results(reading),
        }
    }

    /// Current content of `slot`.
    #[must_use]
    pub fn get(&self, slot: Slot) -> &Reading {
        match slot {
            Slot::Temperature => &self.temperature,
            Slot::Humidity => &self.humidity,
            Slot::HeatIndex => &self.heat_index,
            Slot::CalculationResults => &self.calculation_results,
        }
    }

    /// Apply a field-update message.
    pub fn apply(&mut self, update: SlotUpdate) {
        self.set(update.slot, update.reading);
    }

    /// Whether `slot` still shows its placeholder.
    #[must_use]
    pub fn is_placeholder(&self, slot: Slot) -> bool {
        self.get(slot).as_str() == slot.placeholder()
    }
}
