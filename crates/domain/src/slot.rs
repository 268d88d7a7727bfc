//! Slot — one named, independently updatable region of the display.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Placeholder shown by the numeric slots before any successful fetch.
pub const NUMERIC_PLACEHOLDER: &str = "0.00";

/// One of the four fixed display regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Slot {
    Temperature,
    Humidity,
    HeatIndex,
    CalculationResults,
}

impl Slot {
    /// Every slot, in page order.
    pub const ALL: [Slot; 4] = [
        Self::Temperature,
        Self::Humidity,
        Self::HeatIndex,
        Self::CalculationResults,
    ];

    /// Endpoint name on the host device (no leading slash).
    #[must_use]
    pub fn endpoint(self) -> &'static str {
        match self {
            Self::Temperature => "readTemperature",
            Self::Humidity => "readHumidity",
            Self::HeatIndex => "readHeatIndex",
            Self::CalculationResults => "readCalculationResults",
        }
    }

    /// Identifier of the page element that shows this slot.
    #[must_use]
    pub fn element_id(self) -> &'static str {
        match self {
            Self::Temperature => "temperature",
            Self::Humidity => "humidity",
            Self::HeatIndex => "heatindex",
            Self::CalculationResults => "calculationResults",
        }
    }

    /// Text shown before any successful fetch.
    #[must_use]
    pub fn placeholder(self) -> &'static str {
        match self {
            Self::Temperature | Self::Humidity | Self::HeatIndex => NUMERIC_PLACEHOLDER,
            Self::CalculationResults => "",
        }
    }

    /// Human-readable label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Temperature => "Temperature",
            Self::Humidity => "Humidity",
            Self::HeatIndex => "Heat Index",
            Self::CalculationResults => "Latest Calculations",
        }
    }

    /// Display unit, if the slot holds a single measurement.
    #[must_use]
    pub fn unit(self) -> Option<&'static str> {
        match self {
            Self::Temperature | Self::HeatIndex => Some("\u{b0}C"),
            Self::Humidity => Some("%"),
            Self::CalculationResults => None,
        }
    }

    /// Font Awesome icon class used by the sensor box.
    #[must_use]
    pub fn icon(self) -> Option<&'static str> {
        match self {
            Self::Temperature => Some("fa-thermometer-half"),
            Self::Humidity => Some("fa-tint"),
            Self::HeatIndex => Some("fa-sun"),
            Self::CalculationResults => None,
        }
    }

    /// Whether the slot is one of the three numeric sensor readings.
    #[must_use]
    pub fn is_sensor(self) -> bool {
        !matches!(self, Self::CalculationResults)
    }

    /// Reverse lookup from an endpoint name.
    #[must_use]
    pub fn from_endpoint(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|slot| slot.endpoint() == name)
    }

    /// Reverse lookup from an element id.
    #[must_use]
    pub fn from_element_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|slot| slot.element_id() == id)
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.element_id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_map_each_slot_to_its_endpoint() {
        assert_eq!(Slot::Temperature.endpoint(), "readTemperature");
        assert_eq!(Slot::Humidity.endpoint(), "readHumidity");
        assert_eq!(Slot::HeatIndex.endpoint(), "readHeatIndex");
        assert_eq!(
            Slot::CalculationResults.endpoint(),
            "readCalculationResults"
        );
    }

    #[test]
    fn should_map_each_slot_to_its_element_id() {
        assert_eq!(Slot::Temperature.element_id(), "temperature");
        assert_eq!(Slot::Humidity.element_id(), "humidity");
        assert_eq!(Slot::HeatIndex.element_id(), "heatindex");
        assert_eq!(
            Slot::CalculationResults.element_id(),
            "calculationResults"
        );
    }

    #[test]
    fn should_use_numeric_placeholder_for_sensor_slots() {
        for slot in Slot::ALL.into_iter().filter(|slot| slot.is_sensor()) {
            assert_eq!(slot.placeholder(), "0.00");
        }
    }

    #[test]
    fn should_use_empty_placeholder_for_calculation_results() {
        assert_eq!(Slot::CalculationResults.placeholder(), "");
    }

    #[test]
    fn should_find_slot_by_endpoint() {
        assert_eq!(Slot::from_endpoint("readHeatIndex"), Some(Slot::HeatIndex));
        assert_eq!(Slot::from_endpoint("readPressure"), None);
    }

    #[test]
    fn should_find_slot_by_element_id() {
        assert_eq!(
            Slot::from_element_id("calculationResults"),
            Some(Slot::CalculationResults)
        );
        assert_eq!(Slot::from_element_id("heat_index"), None);
    }

    #[test]
    fn should_only_give_units_to_sensor_slots() {
        assert_eq!(Slot::Temperature.unit(), Some("\u{b0}C"));
        assert_eq!(Slot::Humidity.unit(), Some("%"));
        assert_eq!(Slot::CalculationResults.unit(), None);
        assert_eq!(Slot::CalculationResults.icon(), None);
    }

    #[test]
    fn should_display_element_id() {
        assert_eq!(Slot::HeatIndex.to_string(), "heatindex");
    }

    #[test]
    fn should_roundtrip_through_serde_json() {
        let json = serde_json::to_string(&Slot::HeatIndex).unwrap();
        assert_eq!(json, "\"heat_index\"");
        let parsed: Slot = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, Slot::HeatIndex);
    }
}
